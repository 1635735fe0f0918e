// src/core/fs_ops.rs
//! File system helpers for the generation pipeline

use std::io;
use std::path::Path;
use tokio::fs;
use tracing::{debug, info};

pub struct FsOps;

impl FsOps {
    /// Ensure directory exists
    pub async fn ensure_dir_exists(path: &Path) -> io::Result<()> {
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path).await?;
            info!("Created directory: {}", path.display());
        }
        Ok(())
    }

    pub async fn read_file_safe(path: &Path) -> io::Result<String> {
        let content = fs::read_to_string(path).await?;
        debug!("Read {} bytes from {}", content.len(), path.display());
        Ok(content)
    }

    /// Write file, creating the parent directory first
    pub async fn write_file_safe(path: &Path, content: &str) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            Self::ensure_dir_exists(parent).await?;
        }

        fs::write(path, content).await?;

        info!("Written file: {}", path.display());
        Ok(())
    }
}
