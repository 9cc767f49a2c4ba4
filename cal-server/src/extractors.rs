use std::collections::HashMap;

use anyhow::{anyhow, Context};
use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request,
};
use cal_api::Course;

use crate::{content::CourseRoot, Error};

#[derive(Clone, axum::extract::FromRef)]
pub struct AppState {
    pub courses: CourseRoot,
}

/// Course named by the `:slug` route parameter, freshly read from disk
pub struct LoadedCourse(pub Course);

#[async_trait]
impl FromRequestParts<AppState> for LoadedCourse {
    type Rejection = Error;

    async fn from_request_parts(
        req: &mut request::Parts,
        state: &AppState,
    ) -> Result<LoadedCourse, Error> {
        let Path(params) = Path::<HashMap<String, String>>::from_request_parts(req, state)
            .await
            .context("extracting route parameters")?;
        let slug = params
            .get("slug")
            .ok_or_else(|| anyhow!("route has no slug parameter"))?;
        Ok(LoadedCourse(state.courses.load_course(slug).await?))
    }
}
