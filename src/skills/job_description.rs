// src/skills/job_description.rs
use crate::core::FsOps;
use crate::error::{CvError, Result};
use std::path::Path;
use tracing::debug;

/// Split job-description text into lower-cased tokens.
///
/// Whitespace separates words, then every word is split again on commas.
/// Empty pieces left by `a,,b` or a trailing comma stay in the sequence
/// because adjacency matching works on token positions.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .flat_map(|word| {
            word.to_lowercase()
                .split(',')
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Read and tokenize the job description at `path`.
pub async fn read_tokens(path: &Path) -> Result<Vec<String>> {
    let text = FsOps::read_file_safe(path)
        .await
        .map_err(|source| CvError::JobDescriptionRead {
            path: path.to_path_buf(),
            source,
        })?;

    let tokens = tokenize(&text);
    debug!("Read {} job description tokens from {}", tokens.len(), path.display());
    Ok(tokens)
}
