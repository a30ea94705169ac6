use super::*;

#[test]
fn ingest_status_line_reports_chunks_and_upserts() {
    let data = TemplateIngestData {
        doc_id: "constitution".to_owned(),
        chunks: 12,
        upserts: 12,
    };
    assert_eq!(
        ingest_status_line(&data),
        "Indexed 12 chunks (12 upserts) from constitution"
    );
}

#[test]
fn ingest_status_line_handles_zero_counts() {
    let data = TemplateIngestData {
        doc_id: "empty".to_owned(),
        chunks: 0,
        upserts: 0,
    };
    assert_eq!(ingest_status_line(&data), "Indexed 0 chunks (0 upserts) from empty");
}
