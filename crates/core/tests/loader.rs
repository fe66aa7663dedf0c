use tldw_core::{
    SummaryResult, TldwError, load_metadata, load_transcript, save_summary,
};

#[tokio::test]
async fn plain_text_transcript_is_read_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("talk.txt");
    tokio::fs::write(&path, "Hello there. General remarks.\n")
        .await
        .unwrap();

    let transcript = load_transcript(&path).await.unwrap();
    assert_eq!(transcript.text, "Hello there. General remarks.\n");
    assert!(transcript.segments.is_empty());
}

#[tokio::test]
async fn json_transcript_keeps_segments() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("talk.JSON");
    let json = r#"{
        "text": "Hello there. General remarks.",
        "segments": [
            {"text": "Hello there.", "start": 0.0, "duration": 1.5},
            {"text": "General remarks.", "start": 1.5, "duration": 2.0}
        ]
    }"#;
    tokio::fs::write(&path, json).await.unwrap();

    let transcript = load_transcript(&path).await.unwrap();
    assert_eq!(transcript.text, "Hello there. General remarks.");
    assert_eq!(transcript.segments.len(), 2);
    assert_eq!(transcript.segments[1].start, 1.5);
}

#[tokio::test]
async fn metadata_loads_camel_case_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("meta.json");
    let json = r#"{"title": "Zero-cost abstractions", "channelName": "Rust Talks", "duration": 1805, "viewCount": 12000}"#;
    tokio::fs::write(&path, json).await.unwrap();

    let metadata = load_metadata(&path).await.unwrap();
    assert_eq!(metadata.title, "Zero-cost abstractions");
    assert_eq!(metadata.channel_name, "Rust Talks");
    assert_eq!(metadata.view_count, 12000);
    assert_eq!(metadata.duration_in_minutes(), 31);
}

#[tokio::test]
async fn missing_file_reports_its_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.txt");

    let err = load_transcript(&path).await.unwrap_err();
    match err {
        TldwError::Read { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn malformed_json_is_a_json_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    tokio::fs::write(&path, "{\"text\": ").await.unwrap();

    let err = load_transcript(&path).await.unwrap_err();
    assert!(matches!(err, TldwError::JsonError(_)));
}

#[tokio::test]
async fn saved_summary_reads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("summary.json");
    let summary = SummaryResult {
        title: "Talk".to_string(),
        original_video_url: "https://youtu.be/xyz".to_string(),
        summary_text: "It went well.".to_string(),
        key_points: vec!["It went well.".to_string()],
        duration_in_minutes: 4,
        transcript_length: 3,
    };

    save_summary(&summary, &path).await.unwrap();
    let raw = tokio::fs::read_to_string(&path).await.unwrap();
    assert!(raw.contains("\"summaryText\": \"It went well.\""));

    let parsed: SummaryResult = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed, summary);
}
