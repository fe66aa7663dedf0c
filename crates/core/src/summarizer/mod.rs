//! Summarizer implementations behind one capability trait.
//!
//! `basic` and `advanced` are extractive scorers that never leave the
//! process; `remote` forwards the transcript to a hosted chat model.

pub mod advanced;
pub mod basic;
pub mod remote;

use async_trait::async_trait;

use crate::{
    error::SummarizationError,
    provider::Provider,
    text::{Document, ExtractionError, MIN_WORDS_FOR_SCORING},
    types::{SummaryResult, Transcript, VideoMetadata},
};

pub use advanced::AdvancedSummarizer;
pub use basic::BasicSummarizer;
pub use remote::RemoteSummarizer;

#[async_trait]
pub trait Summarizer: Send + Sync {
    fn kind(&self) -> SummarizerKind;

    async fn summarize(
        &self,
        video_url: &str,
        metadata: &VideoMetadata,
        transcript: &Transcript,
    ) -> Result<SummaryResult, SummarizationError>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SummarizerKind {
    Basic,
    #[default]
    Advanced,
    Remote,
}

impl SummarizerKind {
    pub fn name(&self) -> &'static str {
        match self {
            SummarizerKind::Basic => "basic",
            SummarizerKind::Advanced => "advanced",
            SummarizerKind::Remote => "remote",
        }
    }
}

/// Create the summarizer for `kind`.
///
/// `Remote` falls back to the advanced scorer when the provider has no API
/// key configured.
pub fn create_summarizer(kind: SummarizerKind, provider: Provider) -> Box<dyn Summarizer> {
    let api_key = match kind {
        SummarizerKind::Remote => provider.api_key().ok(),
        _ => None,
    };
    build_summarizer(kind, provider, api_key)
}

fn build_summarizer(
    kind: SummarizerKind,
    provider: Provider,
    api_key: Option<String>,
) -> Box<dyn Summarizer> {
    match kind {
        SummarizerKind::Basic => Box::new(BasicSummarizer),
        SummarizerKind::Advanced => Box::new(AdvancedSummarizer),
        SummarizerKind::Remote => match api_key {
            Some(api_key) => Box::new(RemoteSummarizer::new(provider, api_key)),
            None => {
                tracing::warn!(
                    provider = provider.name(),
                    env_var = provider.config().env_var,
                    "API key not found, falling back to advanced summarizer"
                );
                Box::new(AdvancedSummarizer)
            }
        },
    }
}

/// What a scorer picked out of a document.
pub(crate) struct Selection {
    pub summary_text: String,
    pub key_points: Vec<String>,
}

/// Run the shared extractive pipeline with `select` as the scoring stage.
///
/// Short transcripts come back whole. Any failure is logged with its cause
/// and reported as [`SummarizationError::Extractive`].
pub(crate) fn summarize_extractive<F>(
    kind: SummarizerKind,
    video_url: &str,
    metadata: &VideoMetadata,
    transcript: &Transcript,
    select: F,
) -> Result<SummaryResult, SummarizationError>
where
    F: FnOnce(&Document<'_>) -> Selection,
{
    let text = transcript.text.as_str();
    let word_count = transcript.word_count();

    if word_count < MIN_WORDS_FOR_SCORING {
        tracing::debug!(
            summarizer = kind.name(),
            word_count,
            "transcript below scoring threshold, returning it whole"
        );
        return Ok(SummaryResult::new(
            video_url,
            metadata,
            text.to_string(),
            vec![text.to_string()],
            word_count,
        ));
    }

    let document = Document::parse(text).map_err(|error: ExtractionError| {
        tracing::error!(summarizer = kind.name(), %error, "summarization failed");
        SummarizationError::Extractive
    })?;

    tracing::debug!(
        summarizer = kind.name(),
        word_count,
        sentences = document.sentence_count(),
        "scoring transcript"
    );

    let selection = select(&document);
    Ok(SummaryResult::new(
        video_url,
        metadata,
        selection.summary_text,
        selection.key_points,
        word_count,
    ))
}

/// Sentence indexes ordered by score, highest first. Ties keep document order.
pub(crate) fn rank(scores: &[f64]) -> Vec<usize> {
    let mut ranked: Vec<usize> = (0..scores.len()).collect();
    ranked.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));
    ranked
}

/// The first `count` ranked indexes, back in document order.
pub(crate) fn top_in_document_order(ranked: &[usize], count: usize) -> Vec<usize> {
    let mut selected: Vec<usize> = ranked.iter().take(count).copied().collect();
    selected.sort_unstable();
    selected
}

pub(crate) fn join_sentences(sentences: &[&str], indexes: &[usize]) -> String {
    indexes
        .iter()
        .map(|&i| sentences[i])
        .collect::<Vec<_>>()
        .join(" ")
}

/// `ceil(total * fraction)` for sentence-count proportions.
pub(crate) fn proportion(total: usize, fraction: f64) -> usize {
    (total as f64 * fraction).ceil() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_orders_by_score_and_keeps_ties_stable() {
        let ranked = rank(&[0.5, 2.0, 0.5, 3.0, 2.0]);
        assert_eq!(ranked, vec![3, 1, 4, 0, 2]);
    }

    #[test]
    fn top_selection_returns_document_order() {
        assert_eq!(top_in_document_order(&[3, 1, 4, 0, 2], 3), vec![1, 3, 4]);
        assert_eq!(top_in_document_order(&[1, 0], 5), vec![0, 1]);
    }

    #[test]
    fn join_uses_single_spaces() {
        let sentences = ["A.", " B.", " C."];
        assert_eq!(join_sentences(&sentences, &[0, 2]), "A.  C.");
    }

    #[test]
    fn proportion_rounds_up() {
        assert_eq!(proportion(11, 0.2), 3);
        assert_eq!(proportion(10, 0.2), 2);
        assert_eq!(proportion(7, 0.1), 1);
        assert_eq!(proportion(0, 0.15), 0);
    }

    #[test]
    fn factory_builds_requested_kind() {
        assert_eq!(
            build_summarizer(SummarizerKind::Basic, Provider::default(), None).kind(),
            SummarizerKind::Basic
        );
        assert_eq!(
            build_summarizer(SummarizerKind::Advanced, Provider::default(), None).kind(),
            SummarizerKind::Advanced
        );
        assert_eq!(
            build_summarizer(
                SummarizerKind::Remote,
                Provider::Grok,
                Some("key".to_string())
            )
            .kind(),
            SummarizerKind::Remote
        );
    }

    #[test]
    fn remote_without_key_falls_back_to_advanced() {
        let summarizer = build_summarizer(SummarizerKind::Remote, Provider::Openai, None);
        assert_eq!(summarizer.kind(), SummarizerKind::Advanced);
    }
}
