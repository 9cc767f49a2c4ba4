use anyhow::{anyhow, Context};
use serde_json::json;

#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Unknown error: {0}")]
    Unknown(String),

    #[error("Invalid slug {0:?}")]
    InvalidSlug(String),

    #[error("Course not found {0}")]
    CourseNotFound(String),

    #[error("Lesson {lesson} not found in section {section}")]
    LessonNotFound { section: String, lesson: String },

    #[error("Missing metadata for course {0}")]
    MissingCourseMetadata(String),

    #[error("Invalid metadata for course {0}")]
    InvalidCourseMetadata(String),

    #[error("No course content found for {0}")]
    NoCourseContent(String),
}

impl Error {
    pub fn status_code(&self) -> http::StatusCode {
        use http::StatusCode;
        match self {
            Error::Unknown(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::InvalidSlug(_) => StatusCode::BAD_REQUEST,
            Error::CourseNotFound(_) => StatusCode::NOT_FOUND,
            Error::LessonNotFound { .. } => StatusCode::NOT_FOUND,
            Error::MissingCourseMetadata(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::InvalidCourseMetadata(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::NoCourseContent(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn contents(&self) -> Vec<u8> {
        serde_json::to_vec(&match self {
            Error::Unknown(msg) => json!({
                "message": msg,
                "type": "unknown",
            }),
            Error::InvalidSlug(s) => json!({
                "message": "slug is not a valid path segment",
                "type": "invalid-slug",
                "slug": s,
            }),
            Error::CourseNotFound(s) => json!({
                "message": "course not found",
                "type": "course-not-found",
                "slug": s,
            }),
            Error::LessonNotFound { section, lesson } => json!({
                "message": "lesson not found",
                "type": "lesson-not-found",
                "section": section,
                "lesson": lesson,
            }),
            Error::MissingCourseMetadata(s) => json!({
                "message": "course directory has no metadata file",
                "type": "missing-course-metadata",
                "slug": s,
            }),
            Error::InvalidCourseMetadata(s) => json!({
                "message": "course metadata could not be parsed",
                "type": "invalid-course-metadata",
                "slug": s,
            }),
            Error::NoCourseContent(s) => json!({
                "message": "no course content found",
                "type": "no-course-content",
                "slug": s,
            }),
        })
        .expect("serializing error contents")
    }

    pub fn parse(body: &[u8]) -> anyhow::Result<Error> {
        let data: serde_json::Value =
            serde_json::from_slice(body).context("parsing error contents")?;
        let field = |name: &str| -> anyhow::Result<String> {
            data.get(name)
                .and_then(|v| v.as_str())
                .map(String::from)
                .ok_or_else(|| anyhow!("error contents has no string field {name:?}"))
        };
        Ok(
            match data
                .get("type")
                .and_then(|t| t.as_str())
                .ok_or_else(|| anyhow!("error type is not a string"))?
            {
                "unknown" => Error::Unknown(String::from(
                    data.get("message")
                        .and_then(|msg| msg.as_str())
                        .unwrap_or(""),
                )),
                "invalid-slug" => Error::InvalidSlug(field("slug")?),
                "course-not-found" => Error::CourseNotFound(field("slug")?),
                "lesson-not-found" => Error::LessonNotFound {
                    section: field("section")?,
                    lesson: field("lesson")?,
                },
                "missing-course-metadata" => Error::MissingCourseMetadata(field("slug")?),
                "invalid-course-metadata" => Error::InvalidCourseMetadata(field("slug")?),
                "no-course-content" => Error::NoCourseContent(field("slug")?),
                _ => return Err(anyhow!("error contents has unknown type")),
            },
        )
    }
}
