use axum::{
    extract::Path,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use cal_api::Course;

use crate::{extractors::*, navigation, Error};

/// Where course pages are mounted
pub const COURSE_ROUTE_PREFIX: &str = "/course";

pub async fn course_index(LoadedCourse(course): LoadedCourse) -> Result<Response, Error> {
    let target = navigation::first_lesson(&course)?;
    let location = format!(
        "{COURSE_ROUTE_PREFIX}/{}/{}/{}",
        urlencoding::encode(&target.course_slug),
        urlencoding::encode(&target.section_slug),
        urlencoding::encode(&target.lesson_filename),
    );
    tracing::debug!(path = %target.path(), "redirecting to first lesson");
    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

pub async fn course_section(
    Path((_slug, section)): Path<(String, String)>,
    LoadedCourse(course): LoadedCourse,
) -> Result<Json<Course>, Error> {
    cal_api::validate_slug(&section)?;
    Ok(Json(course))
}

pub async fn course_lesson(
    Path((_slug, section, lesson)): Path<(String, String, String)>,
    LoadedCourse(course): LoadedCourse,
) -> Result<Json<Course>, Error> {
    cal_api::validate_slug(&section)?;
    cal_api::validate_slug(&lesson)?;
    if course.find_lesson(&section, &lesson).is_none() {
        return Err(Error::lesson_not_found(&section, &lesson));
    }
    Ok(Json(course))
}

pub async fn fetch_course(LoadedCourse(course): LoadedCourse) -> Json<Course> {
    Json(course)
}
