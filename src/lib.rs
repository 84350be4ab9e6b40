//! onchain-query - read ERC-20 transfers and ERC-721 metadata over JSON-RPC
//!
//! A small library behind two CLIs: `token-transfers` prints a token's decimals
//! and its recent `Transfer` events, `nft-info` prints an NFT's owner and
//! metadata URI.
//!
//! # Example
//!
//! ```rust,no_run
//! use onchain_query::{BlockRange, Endpoint, EndpointConfig, TokenContract, USDC_ADDRESS};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let endpoint = Endpoint::new(EndpointConfig::new("https://eth.llamarpc.com"))?;
//!     let usdc = TokenContract::new(USDC_ADDRESS, endpoint)?;
//!
//!     let decimals = usdc.decimals().await?;
//!     let range = BlockRange::trailing(usdc.latest_block().await?, 100)?;
//!     for transfer in usdc.transfers(range, decimals).await? {
//!         println!("{}", transfer.display_line("USDC"));
//!     }
//!     Ok(())
//! }
//! ```

pub mod abi;
pub mod cli;
pub mod config;
pub mod contract;
pub mod error;
pub mod rpc;

// Re-exports for convenience
pub use abi::{topic_hash, ContractAbi, TRANSFER_EVENT_SIGNATURE};
pub use config::{
    BlockRange, ConfigFile, EndpointConfig, NftConfig, TokenConfig, BAYC_ADDRESS, USDC_ADDRESS,
};
pub use contract::{Contract, NftContract, TokenContract, TransferKind, TransferRecord};
pub use error::{AbiError, ConfigError, Error, Result, RpcError};
pub use rpc::{Endpoint, Transport};
