use chrono::Utc;

pub use uuid::Uuid;
pub type Time = chrono::DateTime<Utc>;

mod course;
pub use course::{Course, CourseFilterItem, CourseMetadata, CourseType, Lesson, LessonSummary, Section};

mod error;
pub use error::Error;

mod feed;
pub use feed::{Author, Comment, CommentId, Feed, FeedId, Reaction, ReactionKind, UserId};

/// Check that `slug` can be used as a single path segment below a content root
///
/// This rejects anything that could make a joined path leave its parent
/// directory, without touching the filesystem.
pub fn validate_slug(slug: &str) -> Result<(), Error> {
    let invalid = slug.is_empty()
        || slug == "."
        || slug == ".."
        || slug
            .chars()
            .any(|c| c == '/' || c == '\\' || c == '\0' || (cfg!(windows) && c == ':'));
    if invalid {
        return Err(Error::InvalidSlug(String::from(slug)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs() {
        for ok in ["rust-101", "01-basics", "intro.md", "..hidden", "a..b"] {
            assert_eq!(validate_slug(ok), Ok(()), "{ok:?} should be accepted");
        }
        for bad in ["", ".", "..", "../etc", "a/b", "a\\b", "/abs", "nul\0byte"] {
            assert_eq!(
                validate_slug(bad),
                Err(Error::InvalidSlug(String::from(bad))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn fuzz_validated_slug_is_single_component() {
        bolero::check!().with_type::<String>().for_each(|slug: &String| {
            if validate_slug(slug).is_ok() {
                let mut components = std::path::Path::new(slug).components();
                assert!(matches!(
                    components.next(),
                    Some(std::path::Component::Normal(_))
                ));
                assert!(components.next().is_none());
            }
        })
    }
}
