use shared::domain::TalkEntry;

use crate::{
    partition::Partition,
    render::{render_talk, TalkUnit},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// One row per talk under `When | Talk | At | Where | Video`.
    Table,
    /// One card per talk with a condensed description.
    Cards,
}

/// Width at which the listing switches from cards to a table.
///
/// The unit is whatever the host measures in: CSS pixels for the site,
/// columns for a terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoint {
    pub md: u32,
}

impl Breakpoint {
    /// Matches the `md:` screen used by the site stylesheet.
    pub const DEFAULT: Self = Self { md: 768 };

    pub const fn new(md: u32) -> Self {
        Self { md }
    }

    pub fn select(self, width: u32) -> Layout {
        if width >= self.md {
            Layout::Table
        } else {
            Layout::Cards
        }
    }
}

impl Default for Breakpoint {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// How a listing is emitted when the viewport may or may not be known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    Fixed(Layout),
    /// Both layouts are emitted and the client picks one by media query.
    Responsive,
}

impl Presentation {
    pub fn for_width(width: Option<u32>, breakpoint: Breakpoint) -> Self {
        match width {
            Some(width) => Presentation::Fixed(breakpoint.select(width)),
            None => Presentation::Responsive,
        }
    }

    pub fn layouts(self) -> &'static [Layout] {
        match self {
            Presentation::Fixed(Layout::Table) => &[Layout::Table],
            Presentation::Fixed(Layout::Cards) => &[Layout::Cards],
            Presentation::Responsive => &[Layout::Table, Layout::Cards],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Upcoming,
    Past,
}

impl SectionKind {
    pub fn heading(self) -> &'static str {
        match self {
            SectionKind::Upcoming => "Upcoming Talks",
            SectionKind::Past => "Past Talks",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<'a> {
    pub kind: SectionKind,
    pub entries: Vec<&'a TalkEntry>,
}

impl Section<'_> {
    /// Renders every talk in order; the layout never filters or reorders.
    pub fn units(&self, layout: Layout) -> Vec<TalkUnit> {
        self.entries
            .iter()
            .map(|entry| render_talk(entry, layout))
            .collect()
    }
}

/// Sections in page order. Upcoming appears only when it has talks; Past
/// always appears, with an empty body when nothing has happened yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing<'a> {
    upcoming: Option<Section<'a>>,
    past: Section<'a>,
}

impl<'a> Listing<'a> {
    pub fn build(partition: Partition<'a>) -> Self {
        let upcoming = (!partition.upcoming.is_empty()).then(|| Section {
            kind: SectionKind::Upcoming,
            entries: partition.upcoming,
        });
        Self {
            upcoming,
            past: Section {
                kind: SectionKind::Past,
                entries: partition.past,
            },
        }
    }

    pub fn sections(&self) -> impl Iterator<Item = &Section<'a>> {
        self.upcoming.iter().chain(std::iter::once(&self.past))
    }
}

#[cfg(test)]
#[path = "tests/present_tests.rs"]
mod tests;
