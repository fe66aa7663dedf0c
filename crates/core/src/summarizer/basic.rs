use async_trait::async_trait;

use crate::{
    error::SummarizationError,
    text::{self, Document},
    types::{SummaryResult, Transcript, VideoMetadata},
};

use super::{
    Selection, Summarizer, SummarizerKind, join_sentences, proportion, rank,
    summarize_extractive, top_in_document_order,
};

const LEADING_FRACTION: f64 = 0.2;
const LEADING_BOOST: f64 = 1.2;
const TRAILING_FRACTION: f64 = 0.8;
const TRAILING_BOOST: f64 = 1.1;

const SUMMARY_FRACTION: f64 = 0.2;
const MIN_SUMMARY_SENTENCES: usize = 3;
const KEY_POINT_FRACTION: f64 = 0.1;
const MAX_KEY_POINTS: usize = 5;

/// Scores sentences by the raw transcript frequency of their terms.
#[derive(Debug, Default, Clone, Copy)]
pub struct BasicSummarizer;

impl BasicSummarizer {
    /// Per-sentence scores with positional bias applied.
    pub fn score(document: &Document<'_>) -> Vec<f64> {
        let frequency = document.term_frequency();
        let count = document.sentence_count() as f64;

        document
            .sentences
            .iter()
            .enumerate()
            .map(|(index, sentence)| {
                let weight: usize = text::terms(sentence)
                    .map(|term| frequency.get(&term).copied().unwrap_or(0))
                    .sum();
                let score = weight as f64 / text::sentence_length(sentence) as f64;

                let position = index as f64;
                if position < count * LEADING_FRACTION {
                    score * LEADING_BOOST
                } else if position > count * TRAILING_FRACTION {
                    score * TRAILING_BOOST
                } else {
                    score
                }
            })
            .collect()
    }

    fn select(document: &Document<'_>) -> Selection {
        let scores = Self::score(document);
        let ranked = rank(&scores);
        let count = document.sentence_count();

        let summary_size = proportion(count, SUMMARY_FRACTION).max(MIN_SUMMARY_SENTENCES);
        let summary = top_in_document_order(&ranked, summary_size);

        let key_point_size = proportion(count, KEY_POINT_FRACTION).min(MAX_KEY_POINTS);
        let mut key_points: Vec<String> = Vec::with_capacity(key_point_size);
        for &index in ranked.iter().take(key_point_size) {
            let point = document.sentences[index].trim();
            if !key_points.iter().any(|seen| seen == point) {
                key_points.push(point.to_string());
            }
        }

        Selection {
            summary_text: join_sentences(&document.sentences, &summary),
            key_points,
        }
    }
}

#[async_trait]
impl Summarizer for BasicSummarizer {
    fn kind(&self) -> SummarizerKind {
        SummarizerKind::Basic
    }

    async fn summarize(
        &self,
        video_url: &str,
        metadata: &VideoMetadata,
        transcript: &Transcript,
    ) -> Result<SummaryResult, SummarizationError> {
        summarize_extractive(
            self.kind(),
            video_url,
            metadata,
            transcript,
            Self::select,
        )
    }
}
