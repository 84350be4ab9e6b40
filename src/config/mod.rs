//! Query configuration
//!
//! Contract addresses and endpoints are plain values built once at startup and
//! handed to the contract handles. An optional config file may override them.

mod endpoint;
mod file;
mod range;

pub use endpoint::{EndpointConfig, DEFAULT_RPC_URL};
pub use file::{ConfigFile, NftSection, Settings, TokenSection};
pub use range::{BlockRange, DEFAULT_BLOCK_WINDOW};

use crate::error::{ConfigError, Result};
use alloy::primitives::{address, Address};
use std::str::FromStr;

/// USDC on Ethereum mainnet
pub const USDC_ADDRESS: Address = address!("A0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");

/// Bored Ape Yacht Club on Ethereum mainnet
pub const BAYC_ADDRESS: Address = address!("BC4CA0EdA7647A8aB7C2061c2E118A18a936f13D");

/// Settings for the ERC-20 transfer query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenConfig {
    pub endpoint: EndpointConfig,
    pub contract: Address,
    pub symbol: String,
    pub block_window: u64,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            endpoint: EndpointConfig::default(),
            contract: USDC_ADDRESS,
            symbol: "USDC".to_string(),
            block_window: DEFAULT_BLOCK_WINDOW,
        }
    }
}

impl TokenConfig {
    /// Apply overrides from a config file on top of the defaults
    pub fn from_file(file: Option<&ConfigFile>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(file) = file {
            config.endpoint.timeout_secs = file.settings.timeout_seconds;

            let section = &file.token;
            if let Some(url) = &section.rpc_url {
                config.endpoint.url = url.clone();
            }
            if let Some(contract) = &section.contract {
                config.contract = parse_address(contract)?;
            }
            if let Some(symbol) = &section.symbol {
                config.symbol = symbol.clone();
            }
            if let Some(window) = section.block_window {
                config.block_window = window;
            }
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.endpoint.validate()?;
        if self.block_window == 0 {
            return Err(ConfigError::InvalidBlockWindow(self.block_window).into());
        }
        Ok(())
    }
}

/// Settings for the ERC-721 owner/URI query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NftConfig {
    pub endpoint: EndpointConfig,
    pub contract: Address,
}

impl Default for NftConfig {
    fn default() -> Self {
        Self {
            endpoint: EndpointConfig::default(),
            contract: BAYC_ADDRESS,
        }
    }
}

impl NftConfig {
    /// Apply overrides from a config file on top of the defaults
    pub fn from_file(file: Option<&ConfigFile>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(file) = file {
            config.endpoint.timeout_secs = file.settings.timeout_seconds;

            if let Some(url) = &file.nft.rpc_url {
                config.endpoint.url = url.clone();
            }
            if let Some(contract) = &file.nft.contract {
                config.contract = parse_address(contract)?;
            }
        }

        config.endpoint.validate()?;
        Ok(config)
    }
}

fn parse_address(s: &str) -> Result<Address> {
    Address::from_str(s.trim())
        .map_err(|e| ConfigError::InvalidAddress(format!("{}: {}", s, e)).into())
}
