// src/core/config_manager.rs
//! Profile config loading

use crate::core::FsOps;
use crate::error::{CvError, Result};
use crate::types::CvParams;
use std::path::Path;
use tracing::{info, warn};

pub struct ConfigManager;

impl ConfigManager {
    /// Read and validate the profile config at `path`.
    pub async fn load_cv_params(path: &Path) -> Result<CvParams> {
        info!("Loading profile config: {}", path.display());

        let content = FsOps::read_file_safe(path)
            .await
            .map_err(|e| CvError::config(path, e))?;

        let params = CvParams::from_yaml(&content).map_err(|e| CvError::config(path, e))?;

        if params.skills.is_empty() {
            warn!("Profile config {} declares no skills", path.display());
        }
        info!(
            "Loaded profile for {} with {} skills and {} static skills",
            params.profile.name,
            params.skills.len(),
            params.static_skills.len()
        );

        Ok(params)
    }
}
