use std::{
    io,
    path::{Path, PathBuf},
    str::FromStr,
    time::Instant,
};

use anyhow::{anyhow, Context};
use cal_api::{Course, CourseMetadata, LessonSummary, Section};
use futures::future::try_join_all;

use crate::{front_matter, Error};

const METADATA_FILE: &str = "metadata.json";
const LESSON_EXTENSION: &str = ".md";

/// Order in which sections and lessons are listed
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum EntryOrder {
    /// Whatever order the filesystem lists directory entries in
    #[default]
    Filesystem,
    /// Sorted by file name
    Name,
}

impl FromStr for EntryOrder {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<EntryOrder> {
        match s {
            "filesystem" => Ok(EntryOrder::Filesystem),
            "name" => Ok(EntryOrder::Name),
            _ => Err(anyhow!(
                "unknown entry order {s:?}, expected \"filesystem\" or \"name\""
            )),
        }
    }
}

#[derive(Clone, Debug, Default, serde::Deserialize)]
struct SectionMetadata {
    title: Option<String>,
    unlocked: Option<bool>,
}

/// Directory holding one subdirectory per course
#[derive(Clone, Debug)]
pub struct CourseRoot {
    root: PathBuf,
    order: EntryOrder,
}

impl CourseRoot {
    pub fn open(root: &Path, order: EntryOrder) -> anyhow::Result<CourseRoot> {
        let root = root
            .canonicalize()
            .with_context(|| format!("resolving courses root {root:?}"))?;
        anyhow::ensure!(root.is_dir(), "courses root {root:?} is not a directory");
        Ok(CourseRoot { root, order })
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Resolves the directory of course `slug`, refusing anything outside the root
    pub async fn course_dir(&self, slug: &str) -> Result<PathBuf, Error> {
        cal_api::validate_slug(slug)?;
        let dir = match tokio::fs::canonicalize(self.root.join(slug)).await {
            Ok(dir) => dir,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(Error::course_not_found(slug))
            }
            Err(e) => {
                return Err(anyhow::Error::from(e)
                    .context(format!("resolving directory of course {slug:?}"))
                    .into())
            }
        };
        if !dir.starts_with(&self.root) || dir == self.root {
            tracing::warn!(?slug, ?dir, "course slug resolves outside of the courses root");
            return Err(Error::invalid_slug(slug));
        }
        Ok(dir)
    }

    /// Builds the navigation tree of course `slug`
    ///
    /// All sections, and all lessons of each section, are read concurrently.
    /// The output keeps listing order, and the first failure aborts the build.
    pub async fn load_course(&self, slug: &str) -> Result<Course, Error> {
        let start = Instant::now();
        let dir = self.course_dir(slug).await?;
        let metadata = read_course_metadata(&self.root, &dir, slug).await?;

        let section_names = list_entries(&dir, self.order, |is_dir, _| is_dir)
            .await
            .with_context(|| format!("listing sections of course {slug:?}"))?;
        let sections = try_join_all(
            section_names
                .into_iter()
                .map(|name| load_section(&self.root, &dir, name, self.order)),
        )
        .await?;

        tracing::debug!(
            slug,
            sections = sections.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "loaded course data"
        );
        Ok(Course::new(metadata, sections, String::from(slug)))
    }
}

/// Reads `path`, following symlinks only as long as they stay below `root`
async fn read_within(root: &Path, path: &Path) -> io::Result<Vec<u8>> {
    let resolved = tokio::fs::canonicalize(path).await?;
    if !resolved.starts_with(root) {
        tracing::warn!(?path, ?resolved, "refusing to read outside of the courses root");
        return Err(io::Error::new(
            io::ErrorKind::PermissionDenied,
            format!("{path:?} resolves outside of the courses root"),
        ));
    }
    tokio::fs::read(resolved).await
}

async fn read_course_metadata(
    root: &Path,
    dir: &Path,
    slug: &str,
) -> Result<CourseMetadata, Error> {
    let path = dir.join(METADATA_FILE);
    let data = match read_within(root, &path).await {
        Ok(data) => data,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::error!(?path, "course directory has no metadata file");
            return Err(Error::missing_course_metadata(slug));
        }
        Err(e) => {
            return Err(anyhow::Error::from(e)
                .context(format!("reading course metadata {path:?}"))
                .into())
        }
    };
    serde_json::from_slice(&data).map_err(|err| {
        tracing::error!(?err, ?path, "failed parsing course metadata");
        Error::invalid_course_metadata(slug)
    })
}

/// Names of the entries of `dir` accepted by `keep(is_dir, name)`
async fn list_entries<F>(dir: &Path, order: EntryOrder, keep: F) -> anyhow::Result<Vec<String>>
where
    F: Fn(bool, &str) -> bool,
{
    let mut entries = tokio::fs::read_dir(dir)
        .await
        .with_context(|| format!("opening directory {dir:?}"))?;
    let mut res = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .with_context(|| format!("reading entries of {dir:?}"))?
    {
        let is_dir = entry
            .file_type()
            .await
            .with_context(|| format!("checking file type of {:?}", entry.path()))?
            .is_dir();
        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(name) => {
                tracing::warn!(?name, ?dir, "ignoring directory entry with non-utf8 name");
                continue;
            }
        };
        if keep(is_dir, &name) {
            res.push(name);
        }
    }
    if order == EntryOrder::Name {
        res.sort_unstable();
    }
    Ok(res)
}

async fn load_section(
    root: &Path,
    course_dir: &Path,
    name: String,
    order: EntryOrder,
) -> anyhow::Result<Section> {
    let dir = course_dir.join(&name);
    let lesson_files = list_entries(&dir, order, |is_dir, file| {
        !is_dir && file.ends_with(LESSON_EXTENSION)
    })
    .await
    .with_context(|| format!("listing lessons of section {name:?}"))?;

    let children =
        try_join_all(lesson_files.into_iter().map(|f| load_lesson(root, &dir, f))).await?;
    let metadata = read_section_metadata(root, &dir).await?;

    Ok(Section {
        title: metadata.title.unwrap_or_else(|| name.clone()),
        section_slug: name,
        published: metadata.unlocked.unwrap_or(true),
        children,
    })
}

async fn load_lesson(
    root: &Path,
    section_dir: &Path,
    filename: String,
) -> anyhow::Result<LessonSummary> {
    let path = section_dir.join(&filename);
    let content = read_within(root, &path)
        .await
        .with_context(|| format!("reading lesson {path:?}"))?;
    let title = front_matter::extract_title(&String::from_utf8_lossy(&content))
        .unwrap_or_else(|| lesson_title_from_filename(&filename));
    Ok(LessonSummary { title, filename })
}

fn lesson_title_from_filename(filename: &str) -> String {
    String::from(filename.strip_suffix(LESSON_EXTENSION).unwrap_or(filename))
}

/// A missing or unparseable section metadata file falls back to the defaults
async fn read_section_metadata(root: &Path, section_dir: &Path) -> anyhow::Result<SectionMetadata> {
    let path = section_dir.join(METADATA_FILE);
    let data = match read_within(root, &path).await {
        Ok(data) => data,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(SectionMetadata::default()),
        Err(e) => {
            return Err(anyhow::Error::from(e).context(format!("reading section metadata {path:?}")))
        }
    };
    match serde_json::from_slice(&data) {
        Ok(metadata) => Ok(metadata),
        Err(err) => {
            tracing::warn!(?err, ?path, "ignoring unparseable section metadata");
            Ok(SectionMetadata::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_order_from_str() {
        assert_eq!("filesystem".parse::<EntryOrder>().unwrap(), EntryOrder::Filesystem);
        assert_eq!("name".parse::<EntryOrder>().unwrap(), EntryOrder::Name);
        assert!("random".parse::<EntryOrder>().is_err());
    }

    #[test]
    fn title_from_filename() {
        assert_eq!(lesson_title_from_filename("01-intro.md"), "01-intro");
        assert_eq!(lesson_title_from_filename("notes.md.md"), "notes.md");
    }
}
