//! Single RPC endpoint backed by an alloy HTTP provider

use crate::config::EndpointConfig;
use crate::error::{Result, RpcError};
use crate::rpc::Transport;
use alloy::primitives::{Address, Bytes};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::rpc::client::RpcClient;
use alloy::rpc::types::{Filter, Log, TransactionRequest};
use alloy::transports::http::Http;
use std::time::{Duration, Instant};

/// A connected RPC endpoint
#[derive(Clone)]
pub struct Endpoint {
    config: EndpointConfig,
    provider: DynProvider,
}

impl Endpoint {
    /// Build the HTTP transport for an endpoint. No request is sent yet.
    pub fn new(config: EndpointConfig) -> Result<Self> {
        config.validate()?;

        let url: reqwest::Url = config
            .url
            .parse()
            .map_err(|e| RpcError::InvalidUrl(format!("{}: {}", config.url, e)))?;

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(RpcError::Http)?;

        let client = RpcClient::new(Http::with_client(http_client, url), false);
        let provider = ProviderBuilder::new().connect_client(client).erased();

        tracing::debug!("Created endpoint {} (timeout {}s)", config.url, config.timeout_secs);

        Ok(Self { config, provider })
    }

    pub fn url(&self) -> &str {
        &self.config.url
    }
}

impl Transport for Endpoint {
    async fn call(&self, to: Address, input: Bytes) -> Result<Bytes> {
        let tx = TransactionRequest::default().to(to).input(input.into());

        let start = Instant::now();
        let result = self
            .provider
            .call(tx)
            .await
            .map_err(|e| RpcError::CallFailed {
                to: to.to_checksum(None),
                reason: e.to_string(),
            })?;

        tracing::debug!(
            "eth_call to {} returned {} bytes in {:?}",
            to,
            result.len(),
            start.elapsed()
        );
        Ok(result)
    }

    async fn get_logs(&self, filter: &Filter) -> Result<Vec<Log>> {
        let start = Instant::now();
        let logs = self
            .provider
            .get_logs(filter)
            .await
            .map_err(|e| RpcError::FilterLogs(e.to_string()))?;

        tracing::debug!(
            "eth_getLogs on {} returned {} logs in {:?}",
            self.url(),
            logs.len(),
            start.elapsed()
        );
        Ok(logs)
    }

    async fn block_number(&self) -> Result<u64> {
        let block = self
            .provider
            .get_block_number()
            .await
            .map_err(|e| RpcError::BlockNumber(e.to_string()))?;

        tracing::debug!("Latest block on {}: {}", self.url(), block);
        Ok(block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_endpoint_creation() {
        let endpoint = Endpoint::new(EndpointConfig::new("https://eth.llamarpc.com")).unwrap();
        assert_eq!(endpoint.url(), "https://eth.llamarpc.com");
    }

    #[tokio::test]
    async fn test_endpoint_rejects_bad_url() {
        assert!(Endpoint::new(EndpointConfig::new("not a url")).is_err());
    }

    // Integration test (requires network)
    #[tokio::test]
    #[ignore]
    async fn test_block_number_mainnet() {
        let endpoint = Endpoint::new(EndpointConfig::default()).unwrap();
        let block = endpoint.block_number().await.unwrap();
        assert!(block > 20_000_000);
    }
}
