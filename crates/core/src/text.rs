//! Sentence segmentation and term statistics shared by the extractive
//! summarizers.

use std::{
    collections::{HashMap, HashSet},
    sync::LazyLock,
};

use regex::Regex;

/// Transcripts with fewer words than this are returned unscored.
pub const MIN_WORDS_FOR_SCORING: usize = 100;

/// Number of synthetic paragraphs used for document frequency.
pub const TARGET_PARAGRAPHS: usize = 10;

pub static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "the", "a", "an", "and", "or", "but", "is", "are", "was", "were", "in", "on", "at", "to",
        "for", "with", "by", "about", "like", "of", "this", "that", "i", "you", "he", "she",
        "they", "we", "it",
    ]
    .into_iter()
    .collect()
});

static SENTENCE_PATTERN: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"[^.!?]+[.!?]+"));

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("sentence pattern unavailable: {0}")]
    Pattern(#[from] regex::Error),

    #[error("no sentences found in a {words}-word transcript")]
    NoSentences { words: usize },
}

/// Lower-case a raw word and keep only `[a-z0-9_]`.
pub fn normalize(word: &str) -> String {
    word.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

/// The scoring term for a raw word, if it has one.
pub fn term(word: &str) -> Option<String> {
    let normalized = normalize(word);
    (normalized.len() > 2 && !STOP_WORDS.contains(normalized.as_str())).then_some(normalized)
}

/// Qualifying terms of a text fragment, one per occurrence.
pub fn terms(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace().filter_map(term)
}

/// Split text into sentences ending in `.`, `!` or `?`.
///
/// Matches keep their surrounding whitespace. Trailing text without a
/// terminator is not part of any sentence; text with no terminator at all is
/// a single sentence.
pub fn split_sentences(text: &str) -> Result<Vec<&str>, ExtractionError> {
    let pattern = SENTENCE_PATTERN.as_ref().map_err(|e| e.clone())?;
    let sentences: Vec<&str> = pattern.find_iter(text).map(|m| m.as_str()).collect();
    if sentences.is_empty() {
        return Ok(vec![text]);
    }
    Ok(sentences)
}

/// A transcript broken into words and sentences.
#[derive(Debug)]
pub struct Document<'a> {
    pub text: &'a str,
    pub words: Vec<&'a str>,
    pub sentences: Vec<&'a str>,
}

impl<'a> Document<'a> {
    pub fn parse(text: &'a str) -> Result<Self, ExtractionError> {
        let words: Vec<&str> = text.split_whitespace().collect();
        let sentences = split_sentences(text)?;
        if sentences.iter().all(|s| s.trim().is_empty()) {
            return Err(ExtractionError::NoSentences { words: words.len() });
        }
        Ok(Self {
            text,
            words,
            sentences,
        })
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    /// Occurrences of every qualifying term across the whole transcript.
    pub fn term_frequency(&self) -> HashMap<String, usize> {
        let mut frequency = HashMap::new();
        for term in self.words.iter().copied().filter_map(term) {
            *frequency.entry(term).or_insert(0) += 1;
        }
        frequency
    }

    /// Consecutive sentence groups sized to give about ten paragraphs.
    pub fn paragraphs(&self) -> Vec<&[&'a str]> {
        let size = self.sentence_count().div_ceil(TARGET_PARAGRAPHS).max(1);
        self.sentences.chunks(size).collect()
    }
}

/// Number of paragraphs each term appears in at least once.
pub fn document_frequency(paragraphs: &[&[&str]]) -> HashMap<String, usize> {
    let mut frequency = HashMap::new();
    for paragraph in paragraphs {
        let seen: HashSet<String> = paragraph.iter().flat_map(|s| terms(s)).collect();
        for term in seen {
            *frequency.entry(term).or_insert(0) += 1;
        }
    }
    frequency
}

/// Token count of a sentence split on whitespace runs.
///
/// Leading and trailing whitespace each count as one empty token, so the
/// space segmentation leaves in front of a sentence adds to its length.
/// Never below one.
pub fn sentence_length(sentence: &str) -> usize {
    let words = sentence.split_whitespace().count();
    if words == 0 {
        return if sentence.is_empty() { 1 } else { 2 };
    }
    let leading = sentence.starts_with(char::is_whitespace);
    let trailing = sentence.ends_with(char::is_whitespace);
    words + usize::from(leading) + usize::from(trailing)
}
