use std::path::Path;

use tokio::fs;

use crate::{
    error::{Result, TldwError},
    types::{SummaryResult, Transcript, VideoMetadata},
};

async fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .await
        .map_err(|source| TldwError::Read {
            path: path.to_path_buf(),
            source,
        })
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Load a transcript: `.json` files hold a serialized [`Transcript`],
/// anything else is taken as the plain transcript text.
pub async fn load_transcript(path: &Path) -> Result<Transcript> {
    let content = read(path).await?;
    if is_json(path) {
        Ok(serde_json::from_str(&content)?)
    } else {
        Ok(Transcript::from_text(content))
    }
}

/// Load video metadata from a JSON file
pub async fn load_metadata(path: &Path) -> Result<VideoMetadata> {
    let content = read(path).await?;
    Ok(serde_json::from_str(&content)?)
}

/// Save a summary as pretty JSON
pub async fn save_summary(summary: &SummaryResult, path: &Path) -> Result<()> {
    let pretty_json = serde_json::to_string_pretty(summary)?;
    fs::write(path, &pretty_json).await?;
    Ok(())
}
