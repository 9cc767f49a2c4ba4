use cal_api::Course;

use crate::Error;

/// Lesson a course page defaults to when no section is selected
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RedirectTarget {
    pub course_slug: String,
    pub section_slug: String,
    pub lesson_filename: String,
}

impl RedirectTarget {
    /// Path of the lesson, relative to where courses are mounted
    pub fn path(&self) -> String {
        format!(
            "/{}/{}/{}",
            self.course_slug, self.section_slug, self.lesson_filename
        )
    }
}

/// First lesson of the first section
///
/// A course without any section, or whose first section has no lesson, has
/// nothing to show and is reported as such.
pub fn first_lesson(course: &Course) -> Result<RedirectTarget, Error> {
    let section = course
        .sections
        .first()
        .ok_or_else(|| Error::no_course_content(&course.slug))?;
    let lesson = section
        .children
        .first()
        .ok_or_else(|| Error::no_course_content(&course.slug))?;
    Ok(RedirectTarget {
        course_slug: course.slug.clone(),
        section_slug: section.section_slug.clone(),
        lesson_filename: lesson.filename.clone(),
    })
}
