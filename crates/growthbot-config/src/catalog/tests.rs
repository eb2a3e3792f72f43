use super::*;
use growthbot_common::CatalogLoadError;
use std::path::Path;

const SAMPLE: &str = r#"{
    "company_info": {
        "name": "Acme Web",
        "tagline": "Sites that sell",
        "location": "Lisbon",
        "summary": "A small studio.",
        "contact": { "email": "hi@acme.test", "website": "acme.test", "phone": "123" }
    },
    "services_summary": {
        "list": [
            { "name": "Create Website", "short_description": "New sites", "process": ["Plan", "Build"] },
            { "name": "API Development", "short_description": "Custom APIs", "process": [] }
        ],
        "pricing_approach": "Fixed quotes per project."
    }
}"#;

#[test]
fn parses_full_document() {
    let catalog = parse_catalog(SAMPLE).unwrap();
    assert_eq!(catalog.company().name.as_deref(), Some("Acme Web"));
    assert_eq!(catalog.company().contact.phone.as_deref(), Some("123"));
    assert_eq!(catalog.services().len(), 2);
    assert_eq!(catalog.pricing_approach(), Some("Fixed quotes per project."));
    assert_eq!(catalog.general_process(), None);
}

#[test]
fn find_service_ignores_case_and_whitespace() {
    let catalog = parse_catalog(SAMPLE).unwrap();
    let entry = catalog.find_service("  create website ").unwrap();
    assert_eq!(entry.name, "Create Website");
    assert_eq!(entry.process, vec!["Plan", "Build"]);
    assert!(catalog.find_service("Logo Design").is_none());
}

#[test]
fn empty_object_is_an_empty_catalog() {
    let catalog = parse_catalog("{}").unwrap();
    assert!(catalog.company().is_empty());
    assert!(catalog.services().is_empty());
    assert!(catalog.service_names().is_empty());
}

#[test]
fn malformed_json_is_rejected() {
    let err = parse_catalog("{ not json").unwrap_err();
    assert!(matches!(err, CatalogLoadError::Malformed { .. }));
}

#[test]
fn missing_file_is_not_found() {
    let err = load_catalog(Path::new("/tmp/growthbot_missing_catalog.json")).unwrap_err();
    assert!(matches!(err, CatalogLoadError::NotFound(_)));
}

#[test]
fn malformed_file_reports_its_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("info.json");
    std::fs::write(&path, "[1, 2").unwrap();

    let err = load_catalog(&path).unwrap_err();
    match err {
        CatalogLoadError::Malformed { path: p, .. } => assert_eq!(p, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn loads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("info.json");
    std::fs::write(&path, SAMPLE).unwrap();

    let catalog = load_catalog(&path).unwrap();
    assert_eq!(catalog.service_names(), vec!["Create Website", "API Development"]);
}

#[test]
fn default_catalog_path_is_the_bundled_sample() {
    let default_path = crate::schema::CatalogConfig::default().path;
    assert!(default_path.is_relative());

    // A plain run from the workspace root finds the sample catalog.
    let workspace_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../..");
    let catalog = load_catalog(&workspace_root.join(&default_path)).unwrap();
    assert!(catalog.find_service("Create Website").is_some());
    assert!(!catalog.company().is_empty());
}
