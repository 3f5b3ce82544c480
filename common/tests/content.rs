use common::{Content, TrackerConfig, content::EMBEDDED_CONTENT};

#[test]
fn tracker_table_overrides_defaults() {
    let doc = format!("[tracker]\nthreshold = 80.0\n\n{EMBEDDED_CONTENT}");
    let content = Content::from_toml(&doc).unwrap();

    assert_eq!(
        content.tracker,
        TrackerConfig {
            threshold: 80.0,
            probe_line: 150.0,
        }
    );
}

#[test]
fn empty_project_title_is_rejected() {
    let doc = EMBEDDED_CONTENT.replacen(
        "title = \"PDF Extraction Microservice\"",
        "title = \"  \"",
        1,
    );
    let err = Content::from_toml(&doc).unwrap_err();

    assert_eq!(err.to_string(), "project 1 has no title");
}

#[test]
fn negative_probe_line_is_rejected() {
    let doc = format!("[tracker]\nprobe_line = -1.0\n\n{EMBEDDED_CONTENT}");

    assert!(Content::from_toml(&doc).is_err());
}

#[test]
fn malformed_document_reports_context() {
    let err = Content::from_toml("[profile\nname = 1").unwrap_err();

    assert_eq!(err.to_string(), "failed to parse content document");
}

#[test]
fn unknown_icon_is_rejected() {
    let doc = EMBEDDED_CONTENT.replacen("icon = \"zap\"", "icon = \"rocket\"", 1);

    assert!(Content::from_toml(&doc).is_err());
}
