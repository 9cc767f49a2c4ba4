#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseType {
    Paced,
    Live,
}

/// One checkbox of the course list filter
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct CourseFilterItem {
    pub title: String,
    #[serde(rename = "type")]
    pub course_type: CourseType,
    pub checked: bool,
}

/// Contents of a course's `metadata.json`
///
/// Only `title` is required. The display fields accept any JSON value, as
/// course files are hand written and e.g. give `cost` as a number. Fields
/// this struct does not know about are kept in `extra` and emitted again
/// when serializing, so that the course page sees the whole file.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct CourseMetadata {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<serde_json::Value>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub course_type: Option<String>,
    #[serde(rename = "lessonsCount", default, skip_serializing_if = "Option::is_none")]
    pub lessons_count: Option<serde_json::Value>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl CourseMetadata {
    /// `None` for course types other than the known ones
    pub fn known_type(&self) -> Option<CourseType> {
        match self.course_type.as_deref()? {
            "paced" => Some(CourseType::Paced),
            "live" => Some(CourseType::Live),
            _ => None,
        }
    }

    /// Renders a display field, strings as-is and numbers or booleans as text
    pub fn text(value: &Option<serde_json::Value>) -> Option<String> {
        match value.as_ref()? {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            serde_json::Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct LessonSummary {
    pub title: String,
    pub filename: String,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Section {
    pub title: String,
    #[serde(rename = "sectionSlug")]
    pub section_slug: String,
    pub published: bool,
    pub children: Vec<LessonSummary>,
}

impl Section {
    /// Lessons of this section, positions starting at 1
    pub fn lessons(&self) -> impl '_ + Iterator<Item = Lesson> {
        self.children.iter().enumerate().map(|(i, l)| Lesson {
            title: l.title.clone(),
            position: i + 1,
            filename: l.filename.clone(),
        })
    }
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Lesson {
    pub title: String,
    pub position: usize,
    pub filename: String,
}

/// Course metadata along with its navigation tree, as handed to the course page
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Course {
    #[serde(flatten)]
    pub metadata: CourseMetadata,
    pub sections: Vec<Section>,
    pub slug: String,
}

impl Course {
    pub fn new(mut metadata: CourseMetadata, sections: Vec<Section>, slug: String) -> Course {
        // these are computed, not taken from the file
        metadata.extra.remove("sections");
        metadata.extra.remove("slug");
        Course {
            metadata,
            sections,
            slug,
        }
    }

    pub fn section(&self, section_slug: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.section_slug == section_slug)
    }

    pub fn find_lesson(&self, section_slug: &str, filename: &str) -> Option<Lesson> {
        self.section(section_slug)?
            .lessons()
            .find(|l| l.filename == filename)
    }

    pub fn lesson_count(&self) -> usize {
        self.sections.iter().map(|s| s.children.len()).sum()
    }
}
