use std::collections::HashSet;

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

const LEADING_FRACTION: f64 = 0.1;
const LEADING_BOOST: f64 = 1.25;
const TRAILING_FRACTION: f64 = 0.85;
const TRAILING_BOOST: f64 = 1.1;

const SHORT_SENTENCE_WORDS: usize = 5;
const SHORT_SENTENCE_PENALTY: f64 = 0.7;

const SUMMARY_FRACTION: f64 = 0.15;
const MIN_SUMMARY_SENTENCES: usize = 3;
const MAX_KEY_POINTS: usize = 5;

/// TF-IDF scorer over synthetic paragraphs, with key points chosen for the
/// terms they add beyond the summary.
#[derive(Debug, Default, Clone, Copy)]
pub struct AdvancedSummarizer;

impl AdvancedSummarizer {
    /// Per-sentence TF-IDF scores with positional and length bias applied.
    pub fn score(document: &Document<'_>) -> Vec<f64> {
        let paragraphs = document.paragraphs();
        let paragraph_count = paragraphs.len() as f64;
        let term_frequency = document.term_frequency();
        let document_frequency = text::document_frequency(&paragraphs);
        let count = document.sentence_count() as f64;

        document
            .sentences
            .iter()
            .enumerate()
            .map(|(index, sentence)| {
                let weight: f64 = text::terms(sentence)
                    .map(|term| {
                        let tf = term_frequency.get(&term).copied().unwrap_or(0) as f64;
                        let df = document_frequency.get(&term).copied().unwrap_or(0).max(1);
                        tf * (paragraph_count / df as f64).ln()
                    })
                    .sum();

                let length = text::sentence_length(sentence);
                let mut score = weight / length as f64;

                let position = index as f64;
                if position < count * LEADING_FRACTION {
                    score *= LEADING_BOOST;
                } else if position > count * TRAILING_FRACTION {
                    score *= TRAILING_BOOST;
                }

                if length < SHORT_SENTENCE_WORDS {
                    score *= SHORT_SENTENCE_PENALTY;
                }
                score
            })
            .collect()
    }

    fn select(document: &Document<'_>) -> Selection {
        let scores = Self::score(document);
        let ranked = rank(&scores);
        let count = document.sentence_count();

        let summary_size = proportion(count, SUMMARY_FRACTION).max(MIN_SUMMARY_SENTENCES);
        let summary = top_in_document_order(&ranked, summary_size);

        let summary_terms: HashSet<String> = summary
            .iter()
            .flat_map(|&i| text::terms(document.sentences[i]))
            .collect();

        let candidates: Vec<usize> = (0..count)
            .filter(|index| summary.binary_search(index).is_err())
            .collect();
        let novelty: Vec<f64> = candidates
            .iter()
            .map(|&index| {
                let (unique, total) =
                    text::terms(document.sentences[index]).fold((0usize, 0usize), |(u, t), term| {
                        (u + usize::from(!summary_terms.contains(&term)), t + 1)
                    });
                let unique_ratio = unique as f64 / total.max(1) as f64;
                unique_ratio * scores[index]
            })
            .collect();

        // Key points stay in score order rather than document order.
        let key_points: Vec<String> = rank(&novelty)
            .into_iter()
            .take(MAX_KEY_POINTS)
            .map(|i| document.sentences[candidates[i]].trim().to_string())
            .collect();

        Selection {
            summary_text: join_sentences(&document.sentences, &summary),
            key_points,
        }
    }
}

#[async_trait]
impl Summarizer for AdvancedSummarizer {
    fn kind(&self) -> SummarizerKind {
        SummarizerKind::Advanced
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terms_in_every_paragraph_score_zero() {
        // Ten sentences, one per paragraph; "shared" appears in all of them.
        let text = (0..10)
            .map(|i| format!("Shared topic{i} words here today."))
            .collect::<Vec<_>>()
            .join(" ");
        let doc = Document::parse(&text).unwrap();
        assert_eq!(doc.paragraphs().len(), 10);

        let scores = AdvancedSummarizer::score(&doc);
        // shared: tf 10, idf ln(1) = 0. topicN, words, here, today:
        // topicN tf 1 idf ln(10); words/here/today tf 10 idf 0.
        // Only the first sentence lacks the leading space token.
        let weight = 10f64.ln();
        assert!((scores[0] - weight / 5.0 * 1.25).abs() < 1e-9);
        assert!((scores[5] - weight / 6.0).abs() < 1e-9);
        assert!((scores[9] - weight / 6.0 * 1.1).abs() < 1e-9);
    }

    #[test]
    fn short_sentences_are_penalized() {
        let text = "Compilers optimize loops aggressively today. Loops. Filler one two three four. \
                    Filler one two three four. Filler one two three four. Filler one two three four. \
                    Filler one two three four. Filler one two three four. Filler one two three four. \
                    Filler one two three four. Filler one two three four. Filler one two three four.";
        let doc = Document::parse(text).unwrap();
        let scores = AdvancedSummarizer::score(&doc);
        let paragraphs = doc.paragraphs();
        assert_eq!(paragraphs.len(), 6);

        // "loops" tf 2, only in the first paragraph; " Loops." is two tokens and
        // index 1 of 12 gets the leading boost.
        let expected = 2.0 * 6f64.ln() / 2.0 * 1.25 * 0.7;
        assert!((scores[1] - expected).abs() < 1e-9);
    }

    #[test]
    fn leading_space_counts_toward_short_sentence_threshold() {
        let text = "Compilers optimize loops aggressively today. Loops run very fast. \
                    Filler one two three four. Filler one two three four. Filler one two three four. \
                    Filler one two three four. Filler one two three four. Filler one two three four. \
                    Filler one two three four. Filler one two three four. Filler one two three four. \
                    Filler one two three four.";
        let doc = Document::parse(text).unwrap();
        assert_eq!(doc.sentences[1], " Loops run very fast.");
        assert_eq!(text::sentence_length(doc.sentences[1]), 5);

        // loops tf 2, run/very/fast tf 1, all only in the first of 6 paragraphs.
        // Five tokens means no short-sentence penalty.
        let scores = AdvancedSummarizer::score(&doc);
        let expected = 5.0 * 6f64.ln() / 5.0 * 1.25;
        assert!((scores[1] - expected).abs() < 1e-9);
    }

    #[test]
    fn key_points_exclude_summary_sentences() {
        let mut sentences: Vec<String> = (0..20)
            .map(|i| format!("Sentence number{i} talks about subject{} matters.", i % 4))
            .collect();
        sentences.push("Completely different vocabulary appears finally here.".to_string());
        let text = sentences.join(" ");
        let doc = Document::parse(&text).unwrap();

        let selection = AdvancedSummarizer::select(&doc);
        assert!(selection.key_points.len() <= MAX_KEY_POINTS);
        assert!(!selection.key_points.is_empty());
        for point in &selection.key_points {
            assert!(!selection.summary_text.contains(point.as_str()));
        }
    }

    #[test]
    fn key_points_empty_when_summary_takes_every_sentence() {
        let text = "First long sentence about compilers and parsers. \
                    Second long sentence about borrow checking rules. \
                    Third long sentence about async runtimes and executors.";
        let doc = Document::parse(text).unwrap();
        let selection = AdvancedSummarizer::select(&doc);
        assert!(selection.key_points.is_empty());
        assert_eq!(selection.summary_text.matches('.').count(), 3);
    }
}
