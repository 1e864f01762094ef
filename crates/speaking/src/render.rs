use shared::domain::{Project, TalkEntry, FIELD_SEPARATOR};
use url::Url;

use crate::{catalog::DATE_FORMAT, present::Layout};

pub const WATCH_LABEL: &str = "Watch";
pub const LEARN_MORE_LABEL: &str = "Learn more";

/// An outbound link. Hosts open it in a separate browsing context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalLink {
    pub href: String,
    pub label: &'static str,
}

impl ExternalLink {
    /// Returns `None` for an absent link and for anything that is not an
    /// absolute http(s) URL, so a bad link never renders as a broken anchor.
    /// Bad links are reported once when the dataset loads, not here.
    pub fn parse(raw: Option<&str>, label: &'static str) -> Option<Self> {
        let raw = raw?;
        outbound_url(raw).ok().map(|_| Self {
            href: raw.to_string(),
            label,
        })
    }
}

/// Checks that `raw` is an absolute http(s) URL.
pub fn outbound_url(raw: &str) -> Result<Url, String> {
    let url = Url::parse(raw).map_err(|error| error.to_string())?;
    if matches!(url.scheme(), "http" | "https") {
        Ok(url)
    } else {
        Err(format!("unsupported scheme '{}'", url.scheme()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TalkRow {
    pub when: String,
    pub talk: String,
    pub at: String,
    pub location: String,
    pub video: Option<ExternalLink>,
}

impl TalkRow {
    pub const COLUMNS: [&'static str; 5] = ["When", "Talk", "At", "Where", "Video"];

    pub fn from_talk(entry: &TalkEntry) -> Self {
        Self {
            when: entry.date.format(DATE_FORMAT).to_string(),
            talk: entry.title.clone(),
            at: entry.at.clone(),
            location: entry.location(),
            video: ExternalLink::parse(entry.video_url.as_deref(), WATCH_LABEL),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardImage {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    pub description: String,
    pub image: Option<CardImage>,
    pub link: Option<ExternalLink>,
}

impl Card {
    pub fn from_talk(entry: &TalkEntry) -> Self {
        let description = [
            entry.date.format(DATE_FORMAT).to_string(),
            entry.at.clone(),
            entry.location(),
        ]
        .join(FIELD_SEPARATOR);

        Self {
            title: entry.title.clone(),
            description,
            image: None,
            link: ExternalLink::parse(entry.video_url.as_deref(), WATCH_LABEL),
        }
    }

    pub fn from_project(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            description: project.description.clone(),
            image: project.img_src.as_ref().map(|src| CardImage {
                src: src.clone(),
                alt: project.title.clone(),
            }),
            link: ExternalLink::parse(project.href.as_deref(), LEARN_MORE_LABEL),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TalkUnit {
    Row(TalkRow),
    Card(Card),
}

impl TalkUnit {
    pub fn title(&self) -> &str {
        match self {
            TalkUnit::Row(row) => &row.talk,
            TalkUnit::Card(card) => &card.title,
        }
    }

    pub fn link(&self) -> Option<&ExternalLink> {
        match self {
            TalkUnit::Row(row) => row.video.as_ref(),
            TalkUnit::Card(card) => card.link.as_ref(),
        }
    }
}

pub fn render_talk(entry: &TalkEntry, layout: Layout) -> TalkUnit {
    match layout {
        Layout::Table => TalkUnit::Row(TalkRow::from_talk(entry)),
        Layout::Cards => TalkUnit::Card(Card::from_talk(entry)),
    }
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
