//! In-memory transport for unit tests

use crate::error::{Result, RpcError};
use crate::rpc::Transport;
use alloy::primitives::{Address, Bytes, LogData, B256};
use alloy::rpc::types::{Filter, Log};
use std::collections::HashMap;
use std::sync::Mutex;

/// Canned responses keyed by function selector
#[derive(Default)]
pub(crate) struct MockTransport {
    responses: HashMap<[u8; 4], std::result::Result<Bytes, String>>,
    logs: Option<Vec<Log>>,
    head: Option<u64>,
    calls: Mutex<Vec<(Address, Bytes)>>,
    filters: Mutex<Vec<Filter>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer calls whose calldata starts with `selector`
    pub fn with_response(mut self, selector: [u8; 4], data: impl Into<Bytes>) -> Self {
        self.responses.insert(selector, Ok(data.into()));
        self
    }

    /// Fail calls whose calldata starts with `selector`
    pub fn with_call_error(mut self, selector: [u8; 4], reason: &str) -> Self {
        self.responses.insert(selector, Err(reason.to_string()));
        self
    }

    pub fn with_logs(mut self, logs: Vec<Log>) -> Self {
        self.logs = Some(logs);
        self
    }

    pub fn with_head(mut self, head: u64) -> Self {
        self.head = Some(head);
        self
    }

    pub fn calls(&self) -> Vec<(Address, Bytes)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn filters(&self) -> Vec<Filter> {
        self.filters.lock().unwrap().clone()
    }
}

impl Transport for MockTransport {
    async fn call(&self, to: Address, input: Bytes) -> Result<Bytes> {
        self.calls.lock().unwrap().push((to, input.clone()));

        let mut selector = [0u8; 4];
        selector.copy_from_slice(&input[..4]);

        match self.responses.get(&selector) {
            Some(Ok(data)) => Ok(data.clone()),
            Some(Err(reason)) => Err(RpcError::CallFailed {
                to: to.to_checksum(None),
                reason: reason.clone(),
            }
            .into()),
            None => Err(RpcError::CallFailed {
                to: to.to_checksum(None),
                reason: "execution reverted".to_string(),
            }
            .into()),
        }
    }

    async fn get_logs(&self, filter: &Filter) -> Result<Vec<Log>> {
        self.filters.lock().unwrap().push(filter.clone());

        self.logs.clone().ok_or_else(|| {
            RpcError::FilterLogs("query returned more than 10000 results".into()).into()
        })
    }

    async fn block_number(&self) -> Result<u64> {
        self.head
            .ok_or_else(|| RpcError::BlockNumber("connection refused".into()).into())
    }
}

/// Build an RPC log as a node would return it
pub(crate) fn make_log(
    address: Address,
    block_number: u64,
    topics: Vec<B256>,
    data: impl Into<Bytes>,
) -> Log {
    Log {
        inner: alloy::primitives::Log {
            address,
            data: LogData::new_unchecked(topics, data.into()),
        },
        block_number: Some(block_number),
        ..Default::default()
    }
}
