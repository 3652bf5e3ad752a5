//! Manifest loading tests

use signpost::*;

// ═══════════════════════════════════════════════════════════════════════
// Parsing
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_parse_single_group() {
    let toc = Toc::parse(r#"[{"label": "Examples", "items": ["a", "b"]}]"#).unwrap();

    assert_eq!(toc.len(), 1);
    assert!(!toc.is_empty());

    let group = toc.find_group("Examples").unwrap();
    assert_eq!(group.label, "Examples");
    assert_eq!(group.items, vec![NavItem::doc("a"), NavItem::doc("b")]);
}

#[test]
fn test_parse_empty_manifest() {
    let toc = Toc::parse("[]").unwrap();
    assert!(toc.is_empty());
    assert_eq!(toc.len(), 0);
    assert!(toc.find_group("Examples").is_none());
}

#[test]
fn test_parse_nested_categories_in_group() {
    let toc = Toc::parse(
        r#"[
            {
                "label": "Examples",
                "items": [
                    "getting-started",
                    {
                        "type": "category",
                        "label": "Advanced",
                        "items": ["advanced/streaming"]
                    }
                ]
            }
        ]"#,
    )
    .unwrap();

    let group = toc.find_group("Examples").unwrap();
    assert_eq!(group.items.len(), 2);
    assert!(group.items[0].is_doc());

    let nested = group.items[1].as_category().unwrap();
    assert_eq!(nested.label, "Advanced");
    // collapsed was absent in the JSON
    assert!(nested.collapsed);
    assert_eq!(nested.items, vec![NavItem::doc("advanced/streaming")]);
}

#[test]
fn test_parse_tolerates_unknown_group_fields() {
    let toc = Toc::parse(
        r#"[{"label": "Examples", "items": ["a"], "generated_by": "notebook-export"}]"#,
    )
    .unwrap();

    assert_eq!(toc.find_group("Examples").unwrap().items.len(), 1);
}

#[test]
fn test_find_group_takes_first_occurrence() {
    let toc = Toc::parse(
        r#"[
            {"label": "Examples", "items": ["first"]},
            {"label": "Examples", "items": ["second"]}
        ]"#,
    )
    .unwrap();

    assert_eq!(toc.len(), 2);
    let group = toc.find_group("Examples").unwrap();
    assert_eq!(group.items, vec![NavItem::doc("first")]);
}

#[test]
fn test_groups_preserve_manifest_order() {
    let toc = Toc::parse(
        r#"[
            {"label": "Basics", "items": []},
            {"label": "Examples", "items": []},
            {"label": "Integrations", "items": []}
        ]"#,
    )
    .unwrap();

    let labels: Vec<&str> = toc.groups().iter().map(|g| g.label.as_str()).collect();
    assert_eq!(labels, vec!["Basics", "Examples", "Integrations"]);
}

// ═══════════════════════════════════════════════════════════════════════
// Schema Violations
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_parse_rejects_top_level_object() {
    assert!(Toc::parse(r#"{"label": "Examples", "items": []}"#).is_err());
}

#[test]
fn test_parse_rejects_group_without_label() {
    assert!(Toc::parse(r#"[{"items": ["a"]}]"#).is_err());
}

#[test]
fn test_parse_rejects_group_without_items() {
    assert!(Toc::parse(r#"[{"label": "Examples"}]"#).is_err());
}

#[test]
fn test_parse_rejects_malformed_json() {
    assert!(Toc::parse(r#"[{"label": "Examples", "items": ["#).is_err());
    assert!(Toc::parse("").is_err());
    assert!(Toc::parse("not json").is_err());
}

// ═══════════════════════════════════════════════════════════════════════
// File Loading
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_from_path_reads_manifest() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("examples-toc.json");
    std::fs::write(&path, r#"[{"label": "Examples", "items": ["a", "b"]}]"#).unwrap();

    let toc = Toc::from_path(&path).unwrap();
    assert_eq!(toc.find_group("Examples").unwrap().items.len(), 2);
}

#[test]
fn test_from_path_missing_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-manifest.json");

    let err = Toc::from_path(&path).unwrap_err();
    assert!(matches!(err, TocError::Read { .. }));
    assert_eq!(err.path(), &path);
}

#[test]
fn test_from_path_malformed_json_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("examples-toc.json");
    std::fs::write(&path, "[{").unwrap();

    let err = Toc::from_path(&path).unwrap_err();
    assert!(matches!(err, TocError::Parse { .. }));
    assert_eq!(err.path(), &path);
}
