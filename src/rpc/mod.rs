//! RPC transport
//!
//! The [`Transport`] trait is everything the queries need from a node. The
//! production implementation is [`Endpoint`], an alloy HTTP provider.

mod endpoint;
#[cfg(test)]
pub(crate) mod mock;

pub use endpoint::Endpoint;

use crate::error::Result;
use alloy::primitives::{Address, Bytes};
use alloy::rpc::types::{Filter, Log};
use std::future::Future;

/// Read-only access to a node
pub trait Transport {
    /// `eth_call` against the latest block
    fn call(&self, to: Address, input: Bytes) -> impl Future<Output = Result<Bytes>> + Send;

    /// `eth_getLogs`
    fn get_logs(&self, filter: &Filter) -> impl Future<Output = Result<Vec<Log>>> + Send;

    /// `eth_blockNumber`
    fn block_number(&self) -> impl Future<Output = Result<u64>> + Send;
}
