use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VideoMetadata {
    pub title: String,
    pub description: String,
    pub channel_name: String,
    pub publish_date: String,
    pub thumbnail_url: String,
    /// Length of the video in seconds
    pub duration: f64,
    pub view_count: u64,
}

impl VideoMetadata {
    /// Duration rounded up to whole minutes
    pub fn duration_in_minutes(&self) -> u64 {
        (self.duration / 60.0).ceil().max(0.0) as u64
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transcript {
    pub text: String,
    #[serde(default)]
    pub segments: Vec<Segment>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

impl Transcript {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            segments: Vec::new(),
        }
    }

    /// Number of whitespace-delimited words
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResult {
    pub title: String,
    pub original_video_url: String,
    pub summary_text: String,
    pub key_points: Vec<String>,
    pub duration_in_minutes: u64,
    pub transcript_length: usize,
}

impl SummaryResult {
    pub fn new(
        video_url: &str,
        metadata: &VideoMetadata,
        summary_text: String,
        key_points: Vec<String>,
        transcript_length: usize,
    ) -> Self {
        Self {
            title: metadata.title.clone(),
            original_video_url: video_url.to_string(),
            summary_text,
            key_points,
            duration_in_minutes: metadata.duration_in_minutes(),
            transcript_length,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(duration: f64) -> VideoMetadata {
        VideoMetadata {
            title: "Talk".to_string(),
            duration,
            ..Default::default()
        }
    }

    #[test]
    fn duration_rounds_up_to_minutes() {
        assert_eq!(metadata(0.0).duration_in_minutes(), 0);
        assert_eq!(metadata(1.0).duration_in_minutes(), 1);
        assert_eq!(metadata(59.0).duration_in_minutes(), 1);
        assert_eq!(metadata(60.0).duration_in_minutes(), 1);
        assert_eq!(metadata(61.0).duration_in_minutes(), 2);
        assert_eq!(metadata(3600.0).duration_in_minutes(), 60);
    }

    #[test]
    fn metadata_fields_default_when_missing() {
        let parsed: VideoMetadata =
            serde_json::from_str(r#"{"title": "Rust in 100 seconds", "duration": 130}"#).unwrap();
        assert_eq!(parsed.title, "Rust in 100 seconds");
        assert_eq!(parsed.duration_in_minutes(), 3);
        assert!(parsed.channel_name.is_empty());
    }

    #[test]
    fn summary_serializes_with_camel_case_fields() {
        let result = SummaryResult::new(
            "https://youtu.be/abc",
            &metadata(90.0),
            "Summary.".to_string(),
            vec!["Point.".to_string()],
            42,
        );
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["originalVideoUrl"], "https://youtu.be/abc");
        assert_eq!(json["durationInMinutes"], 2);
        assert_eq!(json["transcriptLength"], 42);
        assert_eq!(json["keyPoints"][0], "Point.");
    }
}
