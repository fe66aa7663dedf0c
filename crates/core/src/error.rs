use std::path::PathBuf;
use thiserror::Error;

/// The single failure a summarizer reports to its caller.
///
/// The underlying cause is logged where it happens and is not carried here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SummarizationError {
    #[error("Failed to summarize video")]
    Extractive,

    #[error("Failed to summarize video using {provider}")]
    Remote { provider: &'static str },
}

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Missing API key for {provider_name}: {env_var} environment variable is not set")]
    MissingApiKey {
        provider_name: &'static str,
        env_var: &'static str,
    },
}

#[derive(Error, Debug)]
pub enum TldwError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TldwError>;
