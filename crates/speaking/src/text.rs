//! Plain-text rendering for terminals.

use std::fmt::{self, Display, Formatter};

use unicode_width::UnicodeWidthStr;

use crate::{
    present::{Layout, Listing, Section},
    render::{TalkRow, TalkUnit},
};

const NO_VIDEO: &str = "-";

pub fn listing(listing: &Listing<'_>, layout: Layout) -> String {
    ListingText { listing, layout }.to_string()
}

struct ListingText<'l, 'a> {
    listing: &'l Listing<'a>,
    layout: Layout,
}

impl Display for ListingText<'_, '_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (index, section) in self.listing.sections().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write_section(f, section, self.layout)?;
        }
        Ok(())
    }
}

fn write_section(f: &mut Formatter<'_>, section: &Section<'_>, layout: Layout) -> fmt::Result {
    let heading = section.kind.heading();
    writeln!(f, "{heading}")?;
    writeln!(f, "{}", "=".repeat(heading.width()))?;

    let units = section.units(layout);
    match layout {
        Layout::Table => {
            let rows: Vec<[String; 5]> = units
                .iter()
                .filter_map(|unit| match unit {
                    TalkUnit::Row(row) => Some(row_cells(row)),
                    TalkUnit::Card(_) => None,
                })
                .collect();
            write_table(f, &rows)
        }
        Layout::Cards => {
            for unit in &units {
                if let TalkUnit::Card(card) = unit {
                    writeln!(f, "{}", single_line(&card.title))?;
                    writeln!(f, "  {}", single_line(&card.description))?;
                    if let Some(link) = &card.link {
                        writeln!(f, "  {}: {}", link.label, link.href)?;
                    }
                }
            }
            Ok(())
        }
    }
}

fn row_cells(row: &TalkRow) -> [String; 5] {
    [
        row.when.clone(),
        single_line(&row.talk),
        row.at.clone(),
        row.location.clone(),
        row.video
            .as_ref()
            .map(|link| link.href.clone())
            .unwrap_or_else(|| NO_VIDEO.to_string()),
    ]
}

fn write_table(f: &mut Formatter<'_>, rows: &[[String; 5]]) -> fmt::Result {
    let mut widths = TalkRow::COLUMNS.map(|column| column.width());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    write_line(f, &TalkRow::COLUMNS.map(str::to_string), &widths)?;
    write_line(f, &widths.map(|width| "-".repeat(width)), &widths)?;
    for row in rows {
        write_line(f, row, &widths)?;
    }
    Ok(())
}

fn write_line(f: &mut Formatter<'_>, cells: &[String; 5], widths: &[usize; 5]) -> fmt::Result {
    let mut line = String::new();
    for (index, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if index > 0 {
            line.push_str("  ");
        }
        // pad to display columns; `{:<N}` counts chars
        line.push_str(cell);
        line.push_str(&" ".repeat(width.saturating_sub(cell.width())));
    }
    writeln!(f, "{}", line.trim_end())
}

fn single_line(text: &str) -> String {
    text.split('\n')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[path = "tests/text_tests.rs"]
mod tests;
