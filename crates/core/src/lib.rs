//! tldw core library
//!
//! Extractive summaries of video transcripts: sentence segmentation, term
//! statistics, TF and TF-IDF sentence scoring, and a provider-backed variant
//! behind the same [`Summarizer`] trait.

pub mod error;
pub mod format;
pub mod loader;
pub mod provider;
pub mod summarizer;
pub mod text;
pub mod types;

// Re-export commonly used items at crate root
pub use error::{ProviderError, Result, SummarizationError, TldwError};
pub use format::format_summary_markdown;
pub use loader::{load_metadata, load_transcript, save_summary};
pub use provider::{Provider, ProviderConfig};
pub use summarizer::{
    AdvancedSummarizer, BasicSummarizer, RemoteSummarizer, Summarizer, SummarizerKind,
    create_summarizer,
};
pub use types::{Segment, SummaryResult, Transcript, VideoMetadata};
