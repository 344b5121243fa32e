//! Viewer configuration file handling.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::animation::AnimationParams;

/// On-disk viewer settings (JSON). Missing fields fall back to the demo
/// defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub animation: AnimationParams,
}

impl ViewerConfig {
    /// Load from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read viewer config {:?}", path))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse viewer config {:?}", path))
    }

    /// Load from a JSON file or return defaults. A file the user named
    /// but that fails to load is worth a warning; an absent file is not.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        if !path.exists() {
            log::debug!("Viewer config {:?} not found, using defaults", path);
            return Self::default();
        }

        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded viewer config from {:?}", path);
                config
            }
            Err(e) => {
                log::warn!("{:#}, using defaults", e);
                Self::default()
            }
        }
    }
}
