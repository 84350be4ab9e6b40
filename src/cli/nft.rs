//! `nft-info`: ERC-721 owner and token URI

use super::GlobalArgs;
use crate::config::{ConfigFile, NftConfig};
use crate::contract::NftContract;
use crate::rpc::{Endpoint, Transport};
use alloy::primitives::U256;
use clap::Parser;
use std::io::Write;
use std::str::FromStr;

#[derive(Parser, Debug)]
#[command(name = "nft-info")]
#[command(version, about = "Show the owner and metadata URI of an ERC-721 token")]
#[command(after_help = r#"EXAMPLES:
    # Owner and URI of token #1
    nft-info

    # Another token
    nft-info --token-id 8817

CONFIG FILE:
    Default: ~/.config/onchain-query/config.toml ([nft] table)
"#)]
pub struct NftCli {
    /// Token id to look up
    #[arg(long, alias = "tokenId", default_value = "1", value_parser = parse_token_id)]
    pub token_id: U256,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Non-negative decimal (or 0x-prefixed hex) integer up to 2^256 - 1
fn parse_token_id(s: &str) -> Result<U256, String> {
    U256::from_str(s.trim()).map_err(|e| format!("invalid token id '{}': {}", s, e))
}

/// Entry point for the binary
pub async fn execute(cli: NftCli) -> anyhow::Result<()> {
    let config_file = ConfigFile::load_default()
        .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
    let config = NftConfig::from_file(config_file.as_ref())?;

    if !cli.global.quiet {
        eprintln!("Connecting to {}...", config.endpoint.url);
    }

    let endpoint = Endpoint::new(config.endpoint.clone())
        .map_err(|e| anyhow::anyhow!("Failed to connect to {}: {}", config.endpoint.url, e))?;

    let nft = NftContract::new(config.contract, endpoint)
        .map_err(|e| anyhow::anyhow!("Failed to create NFT contract instance: {}", e))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&nft, cli.token_id, &mut out).await
}

/// Print the owner, then the token URI
pub async fn run<T, W>(nft: &NftContract<T>, token_id: U256, out: &mut W) -> anyhow::Result<()>
where
    T: Transport,
    W: Write,
{
    tracing::info!("Looking up token {} on {}", token_id, nft.address());

    let owner = nft
        .owner_of(token_id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to get owner of token {}: {}", token_id, e))?;

    writeln!(out, "Owner of token #{}: {}", token_id, owner.to_checksum(None))?;

    let uri = nft
        .token_uri(token_id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to get token URI for token {}: {}", token_id, e))?;

    writeln!(out, "Token URI: {}", uri)?;

    Ok(())
}
