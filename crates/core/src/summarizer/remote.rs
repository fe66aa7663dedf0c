use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;

use crate::{
    error::SummarizationError,
    provider::Provider,
    text::{self, ExtractionError},
    types::{SummaryResult, Transcript, VideoMetadata},
};

use super::{Summarizer, SummarizerKind};

/// Characters of transcript sent to the provider.
const MAX_PROMPT_CHARS: usize = 15_000;
const FALLBACK_KEY_POINTS: usize = 3;

static KEY_POINTS_BLOCK: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"(?i)key\s*points?:?([\s\S]*?)(?:\n\n|$)"));

static BULLET_PREFIX: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^[•\-*0-9.\s]+"));

#[derive(Debug, thiserror::Error)]
enum RemoteError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("invalid API response: {0}")]
    InvalidResponse(serde_json::Value),

    #[error("reply pattern unavailable: {0}")]
    Pattern(#[from] regex::Error),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}

/// Forwards the transcript to a hosted chat model and parses its reply.
pub struct RemoteSummarizer {
    provider: Provider,
    api_key: String,
    client: reqwest::Client,
}

impl RemoteSummarizer {
    pub fn new(provider: Provider, api_key: String) -> Self {
        Self {
            provider,
            api_key,
            client: reqwest::Client::new(),
        }
    }

    async fn request_summary(&self, prompt: String) -> Result<String, RemoteError> {
        let config = self.provider.config();

        let response = self
            .client
            .post(config.api_url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&serde_json::json!({
                "model": config.model,
                "messages": [
                    {
                        "role": "user",
                        "content": prompt,
                    },
                ],
                "temperature": 0.3,
                "max_tokens": 1000,
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RemoteError::Status { status, body });
        }

        reply_content(response.json::<serde_json::Value>().await?)
    }
}

/// Assistant text of a chat-completions response. A missing first choice or
/// message content reads as an empty reply.
fn reply_content(response: serde_json::Value) -> Result<String, RemoteError> {
    if !response["choices"].is_array() {
        return Err(RemoteError::InvalidResponse(response));
    }
    Ok(response["choices"][0]["message"]["content"]
        .as_str()
        .unwrap_or_default()
        .to_string())
}

/// Prompt asking for a summary and key points of the transcript.
pub fn build_prompt(metadata: &VideoMetadata, transcript: &Transcript) -> String {
    let full_text = transcript.text.as_str();
    let truncated: String = full_text.chars().take(MAX_PROMPT_CHARS).collect();
    let suffix = if truncated.len() < full_text.len() {
        "...(transcript truncated due to length)"
    } else {
        ""
    };

    format!(
        r#"Please summarize the following YouTube video transcript.
Video title: "{title}"
Channel: "{channel}"
Duration: {minutes} minutes

Provide a concise summary (3-5 paragraphs) and extract 3-5 key points.

Transcript:
{truncated} {suffix}"#,
        title = metadata.title,
        channel = metadata.channel_name,
        minutes = metadata.duration_in_minutes(),
    )
}

/// Split a model reply into summary text and key points.
///
/// A "Key points" block, if present, supplies the bullets and is removed from
/// the summary. Without usable bullets the first sentences of the reply
/// stand in for them.
fn parse_reply(content: &str) -> Result<(String, Vec<String>), RemoteError> {
    let block = KEY_POINTS_BLOCK.as_ref().map_err(|e| e.clone())?;
    let bullet = BULLET_PREFIX.as_ref().map_err(|e| e.clone())?;

    let captures = block.captures(content);

    let mut key_points: Vec<String> = captures
        .as_ref()
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim())
        .filter(|points| !points.is_empty())
        .map(|points| {
            points
                .split('\n')
                .map(|line| bullet.replace(line, "").trim().to_string())
                .filter(|point| !point.is_empty())
                .collect()
        })
        .unwrap_or_default();

    if key_points.is_empty() {
        key_points = text::split_sentences(content)?
            .into_iter()
            .take(FALLBACK_KEY_POINTS)
            .map(str::to_string)
            .collect();
    }

    let summary_text = match captures.and_then(|c| c.get(0)) {
        Some(matched) => content.replacen(matched.as_str(), "", 1).trim().to_string(),
        None => content.to_string(),
    };

    Ok((summary_text, key_points))
}

#[async_trait]
impl Summarizer for RemoteSummarizer {
    fn kind(&self) -> SummarizerKind {
        SummarizerKind::Remote
    }

    async fn summarize(
        &self,
        video_url: &str,
        metadata: &VideoMetadata,
        transcript: &Transcript,
    ) -> Result<SummaryResult, SummarizationError> {
        let provider = self.provider.name();
        let prompt = build_prompt(metadata, transcript);

        tracing::debug!(provider, prompt_chars = prompt.len(), "requesting remote summary");

        let outcome = match self.request_summary(prompt).await {
            Ok(content) => parse_reply(&content),
            Err(e) => Err(e),
        };

        match outcome {
            Ok((summary_text, key_points)) => Ok(SummaryResult::new(
                video_url,
                metadata,
                summary_text,
                key_points,
                transcript.word_count(),
            )),
            Err(error) => {
                tracing::error!(provider, %error, "remote summarization failed");
                Err(SummarizationError::Remote { provider })
            }
        }
    }
}
