use std::{fs, path::Path};

use anyhow::Context;
use chrono::NaiveDate;
use shared::{
    domain::{Project, RawProject, RawTalkEntry, TalkEntry},
    error::{DatasetError, EntryError},
};
use tracing::warn;

use crate::render::outbound_url;

/// Authoring format for talk dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const BUILTIN_TALKS: &str = include_str!("../data/speaking.json");
const BUILTIN_PROJECTS: &str = include_str!("../data/projects.json");

/// The talk dataset in authored order. Read-only once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<TalkEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<TalkEntry>) -> Self {
        Self { entries }
    }

    /// The dataset compiled into the binary.
    pub fn builtin() -> Result<Self, DatasetError> {
        Self::from_json(BUILTIN_TALKS)
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = read_dataset(path)?;
        Self::from_json(&raw)
            .with_context(|| format!("invalid talk dataset '{}'", path.display()))
    }

    pub fn from_json(raw: &str) -> Result<Self, DatasetError> {
        let records: Vec<RawTalkEntry> = serde_json::from_str(raw)?;
        Self::from_raw(records)
    }

    /// Validates every record and reports all findings at once; a single bad
    /// record rejects the whole dataset.
    pub fn from_raw(records: Vec<RawTalkEntry>) -> Result<Self, DatasetError> {
        collect_valid(records, validate_talk).map(Self::new)
    }

    pub fn entries(&self) -> &[TalkEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectCatalog {
    projects: Vec<Project>,
}

impl ProjectCatalog {
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    pub fn builtin() -> Result<Self, DatasetError> {
        Self::from_json(BUILTIN_PROJECTS)
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = read_dataset(path)?;
        Self::from_json(&raw)
            .with_context(|| format!("invalid project dataset '{}'", path.display()))
    }

    pub fn from_json(raw: &str) -> Result<Self, DatasetError> {
        let records: Vec<RawProject> = serde_json::from_str(raw)?;
        collect_valid(records, validate_project).map(Self::new)
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }
}

fn read_dataset(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("failed to read dataset '{}'", path.display()))
}

fn collect_valid<R, T>(
    records: Vec<R>,
    validate: fn(usize, R) -> Result<T, Vec<EntryError>>,
) -> Result<Vec<T>, DatasetError> {
    let mut valid = Vec::with_capacity(records.len());
    let mut findings = Vec::new();
    for (index, record) in records.into_iter().enumerate() {
        match validate(index, record) {
            Ok(item) => valid.push(item),
            Err(mut errors) => findings.append(&mut errors),
        }
    }

    if findings.is_empty() {
        Ok(valid)
    } else {
        Err(DatasetError::Invalid(findings))
    }
}

fn validate_talk(index: usize, raw: RawTalkEntry) -> Result<TalkEntry, Vec<EntryError>> {
    let mut errors = Vec::new();

    let date = required(index, "date", raw.date, &mut errors).and_then(|value| {
        let value = value.trim();
        match NaiveDate::parse_from_str(value, DATE_FORMAT) {
            Ok(date) => Some(date),
            Err(err) => {
                errors.push(EntryError::new(
                    index,
                    "date",
                    format!("'{value}' is not a YYYY-MM-DD date: {err}"),
                ));
                None
            }
        }
    });
    let title = required(index, "title", raw.title, &mut errors);
    let at = required(index, "at", raw.at, &mut errors);
    let country = required(index, "country", raw.country, &mut errors);

    match (date, title, at, country) {
        (Some(date), Some(title), Some(at), Some(country)) => {
            let video_url = optional(raw.video_url);
            report_unlinkable(index, "videoUrl", video_url.as_deref());
            Ok(TalkEntry {
                date,
                title,
                at,
                country,
                city: optional(raw.city),
                video_url,
            })
        }
        _ => Err(errors),
    }
}

fn validate_project(index: usize, raw: RawProject) -> Result<Project, Vec<EntryError>> {
    let mut errors = Vec::new();
    let title = required(index, "title", raw.title, &mut errors);
    let description = required(index, "description", raw.description, &mut errors);

    match (title, description) {
        (Some(title), Some(description)) => {
            let href = optional(raw.href);
            report_unlinkable(index, "href", href.as_deref());
            Ok(Project {
                title,
                description,
                img_src: optional(raw.img_src),
                href,
            })
        }
        _ => Err(errors),
    }
}

fn required(
    index: usize,
    field: &'static str,
    value: Option<String>,
    errors: &mut Vec<EntryError>,
) -> Option<String> {
    match value {
        Some(value) if !value.trim().is_empty() => Some(value),
        Some(_) => {
            errors.push(EntryError::new(index, field, "is empty"));
            None
        }
        None => {
            errors.push(EntryError::new(index, field, "is missing"));
            None
        }
    }
}

/// A bad link keeps its record; it renders without the link.
fn report_unlinkable(index: usize, field: &'static str, href: Option<&str>) {
    let Some(href) = href else {
        return;
    };
    if let Err(reason) = outbound_url(href) {
        warn!(index, field, href, %reason, "link will be omitted when rendered");
    }
}

/// Blank optional fields are treated as absent.
fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
