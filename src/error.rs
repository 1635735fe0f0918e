// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CvError>;

/// Failures of the generation pipeline, one variant per stage.
#[derive(Debug, Error)]
pub enum CvError {
    #[error("Failed to load config {}: {message}", .path.display())]
    ConfigLoad { path: PathBuf, message: String },

    #[error("Failed to read job description {}: {source}", .path.display())]
    JobDescriptionRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Template error: {0}")]
    Template(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Conversion failed: {message}{}", format_output(.output))]
    Conversion { message: String, output: String },

    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn format_output(output: &str) -> String {
    if output.trim().is_empty() {
        String::new()
    } else {
        format!("\n--- converter output ---\n{}", output.trim_end())
    }
}

impl CvError {
    pub fn config(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        CvError::ConfigLoad {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Pipeline stage the error belongs to, used in the final diagnostic.
    pub fn stage(&self) -> &'static str {
        match self {
            CvError::ConfigLoad { .. } => "config",
            CvError::JobDescriptionRead { .. } => "job-description",
            CvError::Template(_) | CvError::Render(_) => "render",
            CvError::Conversion { .. } => "conversion",
            CvError::Io { .. } => "output",
        }
    }
}
