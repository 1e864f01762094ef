use chrono::{TimeZone, Utc};
use speaking::{html, partition, Catalog, Layout, Listing, Presentation, SectionKind};

const DATASET: &str = r#"[
  { "date": "2023-01-18", "title": "A", "at": "Brisbane Full Stack UG", "country": "Australia", "city": "Brisbane" },
  { "date": "2023-09-20", "title": "B", "at": "Brisbane Full Stack UG", "country": "Australia", "city": "Brisbane",
    "videoUrl": "https://www.youtube.com/watch?v=dMgj1MdwrRE" },
  { "date": "2099-01-01", "title": "C", "at": "Remote Conf", "country": "Online" }
]"#;

#[test]
fn dataset_partitions_and_renders_end_to_end() {
    let catalog = Catalog::from_json(DATASET).expect("catalog");
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

    let groups = partition(catalog.entries(), now);
    let upcoming: Vec<_> = groups.upcoming.iter().map(|e| e.title.as_str()).collect();
    let past: Vec<_> = groups.past.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(upcoming, vec!["C"]);
    assert_eq!(past, vec!["B", "A"]);
    assert_eq!(groups.upcoming[0].location(), "Online");

    let listing = Listing::build(groups);
    let kinds: Vec<_> = listing.sections().map(|section| section.kind).collect();
    assert_eq!(kinds, vec![SectionKind::Upcoming, SectionKind::Past]);

    let page = html::listing(&listing, Presentation::Fixed(Layout::Table));
    assert!(page.contains("<td>Online</td>"));
    assert!(!page.contains("Online | "));
    assert_eq!(page.matches(">Watch</a>").count(), 1);
    assert!(page.contains("href=\"https://www.youtube.com/watch?v=dMgj1MdwrRE\""));

    let b_at = page.find(">B<").expect("B row");
    let a_at = page.find(">A<").expect("A row");
    assert!(b_at < a_at);
}

#[test]
fn empty_dataset_renders_past_heading_only() {
    let catalog = Catalog::from_json("[]").expect("catalog");
    let now = Utc.with_ymd_and_hms(2030, 6, 1, 12, 0, 0).unwrap();

    let groups = partition(catalog.entries(), now);
    assert!(groups.upcoming.is_empty());
    assert!(groups.past.is_empty());

    let page = html::listing(&Listing::build(groups), Presentation::Responsive);
    assert!(!page.contains("Upcoming Talks"));
    assert!(page.contains("Past Talks"));
}
