use super::*;

use std::{
    env,
    time::{SystemTime, UNIX_EPOCH},
};

#[test]
fn builtin_datasets_are_valid() {
    let talks = Catalog::builtin().expect("talks");
    assert_eq!(talks.len(), 4);
    assert!(talks
        .entries()
        .iter()
        .all(|entry| entry.city.as_deref() == Some("Brisbane")));

    let projects = ProjectCatalog::builtin().expect("projects");
    assert_eq!(projects.projects().len(), 2);
}

#[test]
fn reports_every_missing_required_field() {
    let raw = r#"[{ "date": "2023-01-18", "title": "A" }]"#;
    let err = Catalog::from_json(raw).expect_err("should fail");

    let fields: Vec<_> = err.findings().iter().map(|finding| finding.field).collect();
    assert_eq!(fields, vec!["at", "country"]);
    assert!(err.findings().iter().all(|finding| finding.index == 0));
}

#[test]
fn unparseable_date_is_a_data_error_not_a_dropped_entry() {
    let raw = r#"[
        { "date": "2023-01-18", "title": "A", "at": "UG", "country": "Australia" },
        { "date": "2023-13-40", "title": "B", "at": "UG", "country": "Australia" }
    ]"#;
    let err = Catalog::from_json(raw).expect_err("should fail");

    assert!(matches!(err, DatasetError::Invalid(_)));
    assert_eq!(err.findings().len(), 1);
    assert_eq!(err.findings()[0].index, 1);
    assert_eq!(err.findings()[0].field, "date");
    assert!(err.findings()[0].reason.contains("2023-13-40"));
}

#[test]
fn blank_required_field_is_reported_as_empty() {
    let raw = r#"[{ "date": "2023-01-18", "title": "A", "at": "  ", "country": "Australia" }]"#;
    let err = Catalog::from_json(raw).expect_err("should fail");
    assert_eq!(err.findings()[0].field, "at");
    assert_eq!(err.findings()[0].reason, "is empty");
}

#[test]
fn blank_optional_fields_are_absent() {
    let raw = r#"[{
        "date": "2023-01-18", "title": "A", "at": "UG", "country": "Online",
        "city": "", "videoUrl": "   "
    }]"#;
    let catalog = Catalog::from_json(raw).expect("catalog");
    let entry = &catalog.entries()[0];
    assert_eq!(entry.city, None);
    assert_eq!(entry.video_url, None);
}

#[test]
fn duplicate_entries_are_kept() {
    let raw = r#"[
        { "date": "2023-01-18", "title": "A", "at": "UG", "country": "Australia" },
        { "date": "2023-01-18", "title": "A", "at": "UG", "country": "Australia" }
    ]"#;
    let catalog = Catalog::from_json(raw).expect("catalog");
    assert_eq!(catalog.len(), 2);
}

#[test]
fn non_list_json_is_malformed() {
    let err = Catalog::from_json(r#"{ "date": "2023-01-18" }"#).expect_err("should fail");
    assert!(matches!(err, DatasetError::Malformed(_)));
    assert!(err.findings().is_empty());
}

#[test]
fn project_requires_title_and_description() {
    let err = ProjectCatalog::from_json(r#"[{ "href": "https://example.com" }]"#)
        .expect_err("should fail");
    let fields: Vec<_> = err.findings().iter().map(|finding| finding.field).collect();
    assert_eq!(fields, vec!["title", "description"]);
}

#[test]
fn loads_dataset_from_file() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let path = env::temp_dir().join(format!("speaking_catalog_test_{suffix}.json"));
    fs::write(
        &path,
        r#"[{ "date": "2099-01-01", "title": "C", "at": "Conf", "country": "Online" }]"#,
    )
    .expect("write dataset");

    let catalog = Catalog::load(&path).expect("load");
    assert_eq!(catalog.entries()[0].title, "C");

    fs::remove_file(&path).expect("cleanup");
}

#[test]
fn missing_file_error_names_the_path() {
    let err = Catalog::load("/nonexistent/speaking.json").expect_err("should fail");
    assert!(err.to_string().contains("/nonexistent/speaking.json"));
}

#[test]
fn malformed_video_url_keeps_the_entry() {
    let raw = r#"[{
        "date": "2023-01-18", "title": "A", "at": "UG", "country": "Online",
        "videoUrl": "youtube dot com"
    }]"#;
    let catalog = Catalog::from_json(raw).expect("catalog");
    let entry = &catalog.entries()[0];

    assert_eq!(entry.video_url.as_deref(), Some("youtube dot com"));
    assert!(outbound_url("youtube dot com").is_err());
}
