//! `token-transfers`: ERC-20 decimals and recent Transfer events

use super::GlobalArgs;
use crate::config::{BlockRange, ConfigFile, TokenConfig};
use crate::contract::TokenContract;
use crate::rpc::{Endpoint, Transport};
use clap::Parser;
use std::io::Write;

#[derive(Parser, Debug)]
#[command(name = "token-transfers")]
#[command(
    version,
    about = "Show an ERC-20 token's decimals and its Transfer events in the last 100 blocks"
)]
#[command(after_help = r#"EXAMPLES:
    # USDC transfers in the most recent 100 blocks
    token-transfers

    # With RPC request logging
    token-transfers -vv

CONFIG FILE:
    Default: ~/.config/onchain-query/config.toml ([token] table)
"#)]
pub struct TokenCli {
    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Entry point for the binary
pub async fn execute(cli: TokenCli) -> anyhow::Result<()> {
    let config_file = ConfigFile::load_default()
        .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
    let config = TokenConfig::from_file(config_file.as_ref())?;

    if !cli.global.quiet {
        eprintln!("Connecting to {}...", config.endpoint.url);
    }

    let endpoint = Endpoint::new(config.endpoint.clone())
        .map_err(|e| anyhow::anyhow!("Failed to connect to {}: {}", config.endpoint.url, e))?;

    let token = TokenContract::new(config.contract, endpoint).map_err(|e| {
        anyhow::anyhow!("Failed to create {} contract instance: {}", config.symbol, e)
    })?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&token, &config.symbol, config.block_window, &mut out).await
}

/// Print decimals, then every transfer in the trailing `window` blocks
pub async fn run<T, W>(
    token: &TokenContract<T>,
    symbol: &str,
    window: u64,
    out: &mut W,
) -> anyhow::Result<()>
where
    T: Transport,
    W: Write,
{
    let decimals = token
        .decimals()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to get {} decimal places: {}", symbol, e))?;

    writeln!(out, "{} decimal places: {}", symbol, decimals)?;

    let head = token
        .latest_block()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to get the latest block number: {}", e))?;

    let range = BlockRange::trailing(head, window)?;

    let records = token
        .transfers(range, decimals)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to query {} transfer records: {}", symbol, e))?;

    writeln!(
        out,
        "Found {} {} transfer records between blocks {} and {}",
        records.len(),
        symbol,
        range.from_block(),
        range.to_block()
    )?;

    for record in &records {
        writeln!(out, "{}", record.display_line(symbol))?;
    }

    Ok(())
}
