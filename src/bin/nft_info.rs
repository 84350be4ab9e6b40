//! nft-info CLI - ERC-721 owner and token URI lookup

use clap::Parser;
use onchain_query::cli::nft::{self, NftCli};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = NftCli::parse();
    cli.global.init_logging();

    nft::execute(cli).await
}
