use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::channel::DEFAULT_PRIMES;

/// Channel key profile persisted between invocations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelProfile {
    pub prime_a: u64,
    pub prime_b: u64,
}

impl Default for ChannelProfile {
    fn default() -> Self {
        Self {
            prime_a: DEFAULT_PRIMES.0,
            prime_b: DEFAULT_PRIMES.1,
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    // ~/.chronon/channel.toml
    dirs_next::home_dir().map(|h| h.join(".chronon").join("channel.toml"))
}

pub fn resolve_config_path(cli_path: &Option<PathBuf>) -> Option<PathBuf> {
    if let Some(p) = cli_path {
        return Some(p.clone());
    }
    default_config_path()
}

/// Load the stored profile; a missing file means the default key pair.
pub fn load_profile(path: Option<&Path>) -> Result<ChannelProfile> {
    let Some(path) = path else {
        return Ok(ChannelProfile::default());
    };
    if !path.exists() {
        return Ok(ChannelProfile::default());
    }
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("read channel profile {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("parse channel profile {}", path.display()))
}

pub fn save_profile(path: &Path, profile: &ChannelProfile) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create config parent dir {}", parent.display()))?;
    }
    let raw = toml::to_string_pretty(profile).context("serialize channel profile")?;
    std::fs::write(path, raw).with_context(|| format!("write channel profile {}", path.display()))?;
    Ok(())
}
