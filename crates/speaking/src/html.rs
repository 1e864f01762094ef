//! HTML fragments for the listing and for card grids.
//!
//! Text is escaped exactly once, here, at the point it is written out.
//! Embedded newlines become `<br />`.

use std::fmt::{self, Display, Formatter, Write as _};

use crate::{
    present::{Layout, Listing, Presentation, Section, SectionKind},
    render::{Card, ExternalLink, TalkRow, TalkUnit},
};

/// Renders the listing sections as an HTML fragment.
pub fn listing(listing: &Listing<'_>, presentation: Presentation) -> String {
    ListingHtml {
        listing,
        presentation,
    }
    .to_string()
}

/// Renders standalone cards, as used for the projects grid.
pub fn cards(cards: &[Card]) -> String {
    CardsHtml {
        cards,
        class: "card-list",
    }
    .to_string()
}

pub struct Escaped<'a>(pub &'a str);

impl Display for Escaped<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for ch in self.0.chars() {
            match ch {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                '\'' => f.write_str("&#39;")?,
                _ => f.write_char(ch)?,
            }
        }
        Ok(())
    }
}

struct Multiline<'a>(&'a str);

impl Display for Multiline<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (index, line) in self.0.split('\n').enumerate() {
            if index > 0 {
                f.write_str("<br />")?;
            }
            write!(f, "{}", Escaped(line))?;
        }
        Ok(())
    }
}

struct Anchor<'a> {
    link: &'a ExternalLink,
    class: Option<&'a str>,
    aria_label: Option<&'a str>,
}

impl Anchor<'_> {
    fn open(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "<a href=\"{}\"", Escaped(&self.link.href))?;
        if let Some(class) = self.class {
            write!(f, " class=\"{class}\"")?;
        }
        if let Some(label) = self.aria_label {
            write!(f, " aria-label=\"Link to {}\"", Escaped(label))?;
        }
        f.write_str(" target=\"_blank\" rel=\"noopener noreferrer\">")
    }
}

struct ListingHtml<'l, 'a> {
    listing: &'l Listing<'a>,
    presentation: Presentation,
}

impl Display for ListingHtml<'_, '_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for section in self.listing.sections() {
            write_section(f, section, self.presentation)?;
        }
        Ok(())
    }
}

fn write_section(f: &mut Formatter<'_>, section: &Section<'_>, presentation: Presentation) -> fmt::Result {
    let id = match section.kind {
        SectionKind::Upcoming => "upcoming",
        SectionKind::Past => "past",
    };
    writeln!(f, "<section class=\"talks\" id=\"{id}\">")?;
    writeln!(f, "<h2 class=\"section-heading\">{}</h2>", section.kind.heading())?;

    for &layout in presentation.layouts() {
        let visibility = match (presentation, layout) {
            (Presentation::Fixed(_), _) => "",
            (Presentation::Responsive, Layout::Table) => " hidden md:block",
            (Presentation::Responsive, Layout::Cards) => " md:hidden",
        };
        let units = section.units(layout);
        match layout {
            Layout::Table => {
                writeln!(f, "<div class=\"talk-table{visibility}\">")?;
                write_table(f, &units)?;
                writeln!(f, "</div>")?;
            }
            Layout::Cards => {
                let class = format!("card-list{visibility}");
                let cards: Vec<&Card> = units
                    .iter()
                    .filter_map(|unit| match unit {
                        TalkUnit::Card(card) => Some(card),
                        TalkUnit::Row(_) => None,
                    })
                    .collect();
                writeln!(f, "<div class=\"{class}\">")?;
                for card in cards {
                    write_card(f, card)?;
                }
                writeln!(f, "</div>")?;
            }
        }
    }

    writeln!(f, "</section>")
}

fn write_table(f: &mut Formatter<'_>, units: &[TalkUnit]) -> fmt::Result {
    f.write_str("<table>\n<thead>\n<tr>")?;
    for column in TalkRow::COLUMNS {
        write!(f, "<th scope=\"col\">{column}</th>")?;
    }
    f.write_str("</tr>\n</thead>\n<tbody>\n")?;
    for unit in units {
        if let TalkUnit::Row(row) = unit {
            write_row(f, row)?;
        }
    }
    f.write_str("</tbody>\n</table>\n")
}

fn write_row(f: &mut Formatter<'_>, row: &TalkRow) -> fmt::Result {
    write!(
        f,
        "<tr><th scope=\"row\">{}</th><td>{}</td><td>{}</td><td>{}</td><td>",
        Escaped(&row.when),
        Multiline(&row.talk),
        Escaped(&row.at),
        Escaped(&row.location),
    )?;
    if let Some(link) = &row.video {
        Anchor {
            link,
            class: Some("watch"),
            aria_label: None,
        }
        .open(f)?;
        write!(f, "{}</a>", link.label)?;
    }
    f.write_str("</td></tr>\n")
}

struct CardsHtml<'a> {
    cards: &'a [Card],
    class: &'a str,
}

impl Display for CardsHtml<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "<div class=\"{}\">", self.class)?;
        for card in self.cards {
            write_card(f, card)?;
        }
        writeln!(f, "</div>")
    }
}

fn write_card(f: &mut Formatter<'_>, card: &Card) -> fmt::Result {
    f.write_str("<div class=\"card\">")?;

    if let Some(image) = &card.image {
        let img = format!(
            "<img src=\"{}\" alt=\"{}\" width=\"544\" height=\"306\" />",
            Escaped(&image.src),
            Escaped(&image.alt)
        );
        match &card.link {
            Some(link) => {
                anchor_for(link, None, &card.title).open(f)?;
                write!(f, "{img}</a>")?;
            }
            None => f.write_str(&img)?,
        }
    }

    f.write_str("<h3 class=\"card-title\">")?;
    match &card.link {
        Some(link) => {
            anchor_for(link, None, &card.title).open(f)?;
            write!(f, "{}</a>", Multiline(&card.title))?;
        }
        None => write!(f, "{}", Multiline(&card.title))?,
    }
    f.write_str("</h3>")?;

    write!(
        f,
        "<p class=\"card-description\">{}</p>",
        Multiline(&card.description)
    )?;

    if let Some(link) = &card.link {
        anchor_for(link, Some("card-link"), &card.title).open(f)?;
        write!(f, "{} &rarr;</a>", link.label)?;
    }

    f.write_str("</div>\n")
}

fn anchor_for<'a>(link: &'a ExternalLink, class: Option<&'a str>, title: &'a str) -> Anchor<'a> {
    Anchor {
        link,
        class,
        aria_label: Some(title),
    }
}

#[cfg(test)]
#[path = "tests/html_tests.rs"]
mod tests;
