use axum::http;
use cal_api::Error as ApiError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl Error {
    pub fn invalid_slug(slug: &str) -> Error {
        Error::Api(ApiError::InvalidSlug(String::from(slug)))
    }

    pub fn course_not_found(slug: &str) -> Error {
        Error::Api(ApiError::CourseNotFound(String::from(slug)))
    }

    pub fn lesson_not_found(section: &str, lesson: &str) -> Error {
        Error::Api(ApiError::LessonNotFound {
            section: String::from(section),
            lesson: String::from(lesson),
        })
    }

    pub fn missing_course_metadata(slug: &str) -> Error {
        Error::Api(ApiError::MissingCourseMetadata(String::from(slug)))
    }

    pub fn invalid_course_metadata(slug: &str) -> Error {
        Error::Api(ApiError::InvalidCourseMetadata(String::from(slug)))
    }

    pub fn no_course_content(slug: &str) -> Error {
        Error::Api(ApiError::NoCourseContent(String::from(slug)))
    }
}

impl axum::response::IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let err = match self {
            Error::Anyhow(err) => {
                tracing::error!(?err, "failed reading course content");
                #[cfg(not(test))]
                let err =
                    ApiError::Unknown(String::from("Internal server error, see logs for details"));
                #[cfg(test)]
                let err = ApiError::Unknown(format!("Internal server error: {err:?}"));
                err
            }
            // courses that exist but cannot be served are content mistakes
            Error::Api(err) if err.status_code().is_server_error() => {
                tracing::warn!(status = %err.status_code(), "course content misconfigured: {err}");
                err
            }
            Error::Api(err) => {
                tracing::info!(status = %err.status_code(), "rejecting course request: {err}");
                err
            }
        };
        (
            err.status_code(),
            [(http::header::CONTENT_TYPE, "application/json")],
            err.contents(),
        )
            .into_response()
    }
}
