use super::*;
use crate::partition::partition;
use chrono::{NaiveDate, TimeZone, Utc};
use shared::domain::TalkEntry;

fn talk(date: &str, title: &str, city: Option<&str>, video_url: Option<&str>) -> TalkEntry {
    TalkEntry {
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("date"),
        title: title.to_string(),
        at: "Brisbane Full Stack UG".to_string(),
        country: "Australia".to_string(),
        city: city.map(str::to_string),
        video_url: video_url.map(str::to_string),
    }
}

fn render(entries: &[TalkEntry], presentation: Presentation) -> String {
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    listing(&Listing::build(partition(entries, now)), presentation)
}

#[test]
fn escapes_text_exactly_once() {
    let entries = vec![talk("2023-01-18", "Blazor & <Clean> \"Arch\"", None, None)];
    let html = render(&entries, Presentation::Fixed(Layout::Table));

    assert!(html.contains("Blazor &amp; &lt;Clean&gt; &quot;Arch&quot;"));
    assert!(!html.contains("&amp;amp;"));
    assert!(!html.contains("<Clean>"));
}

#[test]
fn newlines_in_titles_become_line_breaks() {
    let entries = vec![talk("2023-01-18", "Part one\nPart two", None, None)];
    let html = render(&entries, Presentation::Fixed(Layout::Cards));
    assert!(html.contains("Part one<br />Part two"));
}

#[test]
fn watch_link_opens_in_a_new_tab() {
    let url = "https://www.youtube.com/watch?v=dMgj1MdwrRE";
    let entries = vec![talk("2023-09-20", "B", Some("Brisbane"), Some(url))];

    for layout in [Layout::Table, Layout::Cards] {
        let html = render(&entries, Presentation::Fixed(layout));
        assert!(html.contains(&format!(
            "href=\"{url}\" class=\"{}\"",
            match layout {
                Layout::Table => "watch",
                Layout::Cards => "card-link",
            }
        )));
        assert!(html.contains("target=\"_blank\" rel=\"noopener noreferrer\""));
        assert!(html.contains("Watch"));
    }
}

#[test]
fn talk_without_video_has_no_anchor() {
    let entries = vec![talk("2023-09-20", "B", None, None)];
    for layout in [Layout::Table, Layout::Cards] {
        let html = render(&entries, Presentation::Fixed(layout));
        assert!(!html.contains("<a "));
        assert!(!html.contains("Watch"));
        assert!(html.contains(">B<") || html.contains(">B</"));
    }
}

#[test]
fn responsive_listing_emits_both_layouts() {
    let entries = vec![talk("2023-09-20", "B", Some("Brisbane"), None)];
    let html = render(&entries, Presentation::Responsive);

    assert!(html.contains("talk-table hidden md:block"));
    assert!(html.contains("card-list md:hidden"));
    assert!(html.contains("<th scope=\"col\">When</th><th scope=\"col\">Talk</th>"));
    assert!(html.contains("Australia | Brisbane"));
}

#[test]
fn fixed_cards_listing_has_no_table() {
    let entries = vec![talk("2023-09-20", "B", None, None)];
    let html = render(&entries, Presentation::Fixed(Layout::Cards));
    assert!(!html.contains("<table>"));
    assert!(html.contains("class=\"card-list\""));
}

#[test]
fn empty_listing_renders_only_the_past_heading() {
    let html = render(&[], Presentation::Responsive);
    assert!(!html.contains("Upcoming Talks"));
    assert!(html.contains("Past Talks"));
    assert!(html.contains("<tbody>\n</tbody>"));
}

#[test]
fn project_cards_link_image_and_title() {
    let project = shared::domain::Project {
        title: "Up Blazor".to_string(),
        description: "Budgeting for Up Bank".to_string(),
        img_src: Some("/static/images/upblazor-1.png".to_string()),
        href: Some("https://upblazor.com".to_string()),
    };
    let html = cards(&[Card::from_project(&project)]);

    assert!(html.contains("<img src=\"/static/images/upblazor-1.png\" alt=\"Up Blazor\""));
    assert!(html.contains("aria-label=\"Link to Up Blazor\""));
    assert!(html.contains("Learn more &rarr;</a>"));
}
