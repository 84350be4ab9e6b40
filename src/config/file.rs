//! Configuration file handling

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Overrides for the token transfer query
    #[serde(default)]
    pub token: TokenSection,

    /// Overrides for the NFT query
    #[serde(default)]
    pub nft: NftSection,
}

/// Global settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

fn default_timeout() -> u64 {
    30
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
        }
    }
}

/// `[token]` table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenSection {
    #[serde(default)]
    pub rpc_url: Option<String>,

    /// ERC-20 contract address
    #[serde(default)]
    pub contract: Option<String>,

    /// Symbol printed next to amounts
    #[serde(default)]
    pub symbol: Option<String>,

    /// Number of trailing blocks to scan
    #[serde(default)]
    pub block_window: Option<u64>,
}

/// `[nft]` table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NftSection {
    #[serde(default)]
    pub rpc_url: Option<String>,

    /// ERC-721 contract address
    #[serde(default)]
    pub contract: Option<String>,
}

impl ConfigFile {
    /// Get the default config file path
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("onchain-query")
            .join("config.toml")
    }

    /// Load from default path
    pub fn load_default() -> Result<Option<Self>> {
        let path = Self::default_path();
        if path.exists() {
            Ok(Some(Self::load(&path)?))
        } else {
            Ok(None)
        }
    }

    /// Load from a specific path
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse TOML content
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }
}
