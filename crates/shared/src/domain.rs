use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Separator placed between location parts and description fields.
pub const FIELD_SEPARATOR: &str = " | ";

/// A talk record exactly as authored. Every field is optional so that a
/// missing value surfaces as a validation finding rather than a parse failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTalkEntry {
    pub date: Option<String>,
    pub title: Option<String>,
    pub at: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub video_url: Option<String>,
}

/// One validated speaking engagement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TalkEntry {
    pub date: NaiveDate,
    pub title: String,
    pub at: String,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

impl TalkEntry {
    /// The instant a talk is compared at: midnight UTC of its date.
    pub fn starts_at(&self) -> DateTime<Utc> {
        self.date.and_time(NaiveTime::MIN).and_utc()
    }

    /// `country`, followed by `city` only when one is present.
    pub fn location(&self) -> String {
        match &self.city {
            Some(city) => format!("{}{FIELD_SEPARATOR}{city}", self.country),
            None => self.country.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProject {
    pub title: Option<String>,
    pub description: Option<String>,
    pub img_src: Option<String>,
    pub href: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img_src: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}
