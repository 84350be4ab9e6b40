//! token-transfers CLI - ERC-20 decimals and recent Transfer events

use clap::Parser;
use onchain_query::cli::token::{self, TokenCli};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = TokenCli::parse();
    cli.global.init_logging();

    token::execute(cli).await
}
