//! Configuration management for the primeseed CLI.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Primeseed project configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub verify: VerifyConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    #[serde(default = "default_scan_limit")]
    pub limit: u64,
    #[serde(default = "default_checkpoint_dir")]
    pub checkpoint_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyConfig {
    #[serde(default = "default_verify_limit")]
    pub limit: u64,
    #[serde(default = "default_missing_sample")]
    pub missing_sample: usize,
}

// Default value functions
fn default_scan_limit() -> u64 { 10_000 }
fn default_checkpoint_dir() -> PathBuf { PathBuf::from(".") }
fn default_verify_limit() -> u64 { 10_000 }
fn default_missing_sample() -> usize { 20 }

impl Default for Config {
    fn default() -> Self {
        Self {
            scan: ScanConfig::default(),
            verify: VerifyConfig::default(),
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            limit: default_scan_limit(),
            checkpoint_dir: default_checkpoint_dir(),
        }
    }
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            limit: default_verify_limit(),
            missing_sample: default_missing_sample(),
        }
    }
}

impl Config {
    /// Load config from primeseed.toml in the current or parent directories.
    pub fn load() -> Result<Self> {
        if let Some(path) = find_config_file() {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config: {}", path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse config: {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to the specified path.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }
}

/// Find primeseed.toml in current or parent directories.
fn find_config_file() -> Option<PathBuf> {
    let mut dir = std::env::current_dir().ok()?;
    loop {
        let config_path = dir.join("primeseed.toml");
        if config_path.exists() {
            return Some(config_path);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}
