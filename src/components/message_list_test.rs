use super::*;

fn source() -> ChatSource {
    ChatSource::default()
}

// =============================================================
// Source labels
// =============================================================

#[test]
fn source_label_prefers_article_reference() {
    let s = ChatSource {
        article_reference: Some("Art. 12".to_owned()),
        document_id: Some("7".to_owned()),
        id: Some("chunk-1".to_owned()),
        ..source()
    };
    assert_eq!(source_label(&s), "Art. 12");
}

#[test]
fn source_label_falls_back_to_document_id() {
    let s = ChatSource {
        document_id: Some("7".to_owned()),
        id: Some("chunk-1".to_owned()),
        ..source()
    };
    assert_eq!(source_label(&s), "document 7");
}

#[test]
fn source_label_falls_back_to_source_id() {
    let s = ChatSource {
        id: Some("chunk-1".to_owned()),
        ..source()
    };
    assert_eq!(source_label(&s), "chunk-1");
}

#[test]
fn source_label_handles_fully_anonymous_sources() {
    assert_eq!(source_label(&source()), "source");
}

#[test]
fn source_label_skips_empty_strings() {
    let s = ChatSource {
        article_reference: Some(String::new()),
        document_id: Some("9".to_owned()),
        ..source()
    };
    assert_eq!(source_label(&s), "document 9");
}

// =============================================================
// Score formatting
// =============================================================

#[test]
fn score_label_renders_two_decimals() {
    assert_eq!(score_label(0.875), "0.88");
    assert_eq!(score_label(1.0), "1.00");
}
