//! ERC-20 decimals and transfer history

use crate::abi::{topic_hash, ContractAbi, TRANSFER_EVENT_SIGNATURE};
use crate::config::BlockRange;
use crate::contract::Contract;
use crate::error::{AbiError, Result};
use crate::rpc::Transport;
use alloy::primitives::{Address, B256, U256};
use alloy::rpc::types::{Filter, Log};
use std::fmt;

/// Whether a transfer created new supply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferKind {
    /// Sender is the zero address
    Mint,
    Transfer,
}

impl fmt::Display for TransferKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferKind::Mint => write!(f, "Mint"),
            TransferKind::Transfer => write!(f, "Transfer"),
        }
    }
}

/// One decoded `Transfer` log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRecord {
    pub block_number: u64,
    pub kind: TransferKind,
    pub from: Address,
    pub to: Address,
    /// Amount as emitted, in base units
    pub raw_amount: U256,
    /// `raw_amount / 10^decimals`, truncated
    pub amount: U256,
}

impl TransferRecord {
    /// Decode a `Transfer(address indexed, address indexed, uint256)` log
    pub fn from_log(log: &Log, decimals: u8) -> Result<Self> {
        let topics = log.inner.data.topics();
        if topics.len() < 3 {
            return Err(AbiError::LogDecode(format!(
                "Transfer log has {} topics, expected 3",
                topics.len()
            ))
            .into());
        }

        let block_number = log
            .block_number
            .ok_or_else(|| AbiError::LogDecode("log has no block number".to_string()))?;

        let from = Address::from_word(topics[1]);
        let to = Address::from_word(topics[2]);

        let data = &log.inner.data.data;
        let raw_amount = U256::try_from_be_slice(data).ok_or_else(|| {
            AbiError::LogDecode(format!(
                "Transfer amount is {} bytes, expected at most 32",
                data.len()
            ))
        })?;

        let kind = if from == Address::ZERO {
            TransferKind::Mint
        } else {
            TransferKind::Transfer
        };

        Ok(Self {
            block_number,
            kind,
            from,
            to,
            raw_amount,
            amount: scale_amount(raw_amount, decimals),
        })
    }

    /// `Block #N: Transfer from 0x.. to 0x.., amount: 1 USDC`
    pub fn display_line(&self, symbol: &str) -> String {
        format!(
            "Block #{}: {} from {} to {}, amount: {} {}",
            self.block_number,
            self.kind,
            self.from.to_checksum(None),
            self.to.to_checksum(None),
            self.amount,
            symbol
        )
    }
}

/// Integer-divide a base-unit amount by `10^decimals`
pub fn scale_amount(raw: U256, decimals: u8) -> U256 {
    // 10^78 no longer fits in 256 bits, and every U256 is below it
    match U256::from(10u8).checked_pow(U256::from(decimals)) {
        Some(divisor) => raw / divisor,
        None => U256::ZERO,
    }
}

/// An ERC-20 token contract
pub struct TokenContract<T> {
    contract: Contract<T>,
    transfer_topic: B256,
}

impl<T: Transport> TokenContract<T> {
    pub fn new(address: Address, transport: T) -> Result<Self> {
        Self::with_abi(address, ContractAbi::erc20()?, transport)
    }

    pub fn with_abi(address: Address, abi: ContractAbi, transport: T) -> Result<Self> {
        let transfer_topic = topic_hash(TRANSFER_EVENT_SIGNATURE);
        if abi.event_topic("Transfer")? != transfer_topic {
            return Err(AbiError::EventNotFound(TRANSFER_EVENT_SIGNATURE.to_string()).into());
        }

        Ok(Self {
            contract: Contract::new(address, abi, transport),
            transfer_topic,
        })
    }

    pub fn address(&self) -> Address {
        self.contract.address()
    }

    pub fn transport(&self) -> &T {
        self.contract.transport()
    }

    pub fn transfer_topic(&self) -> B256 {
        self.transfer_topic
    }

    /// `decimals()`
    pub async fn decimals(&self) -> Result<u8> {
        let value = self.contract.call_single("decimals", &[]).await?;

        value
            .as_uint()
            .and_then(|(v, _)| u8::try_from(v).ok())
            .ok_or_else(|| {
                AbiError::TypeMismatch {
                    function: "decimals".to_string(),
                    expected: "uint8",
                }
                .into()
            })
    }

    /// The chain head, used to anchor the default range
    pub async fn latest_block(&self) -> Result<u64> {
        self.contract.transport().block_number().await
    }

    /// Filter matching this token's `Transfer` events in `range`
    pub fn transfer_filter(&self, range: BlockRange) -> Filter {
        Filter::new()
            .address(self.address())
            .event_signature(self.transfer_topic)
            .from_block(range.from_block())
            .to_block(range.to_block())
    }

    /// Fetch and decode `Transfer` events in `range`, in node order
    pub async fn transfers(&self, range: BlockRange, decimals: u8) -> Result<Vec<TransferRecord>> {
        let filter = self.transfer_filter(range);

        tracing::info!(
            "Fetching Transfer logs for blocks {} ({} blocks)",
            range,
            range.block_count()
        );
        let logs = self.contract.transport().get_logs(&filter).await?;

        logs.iter()
            .map(|log| TransferRecord::from_log(log, decimals))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rpc::mock::{make_log, MockTransport};
    use alloy::dyn_abi::{DynSolValue, FunctionExt};
    use alloy::primitives::{address, b256};

    const USDC: Address = address!("A0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");
    const ALICE: Address = address!("d8dA6BF26964aF9D7eEd9e03E53415D37aA96045");
    const BOB: Address = address!("Ab5801a7D398351b8bE11C439e05C5B3259aeC9B");
    const DECIMALS_SELECTOR: [u8; 4] = [0x31, 0x3c, 0xe5, 0x67];
    const TRANSFER_TOPIC: B256 =
        b256!("ddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef");

    fn transfer_log(block: u64, from: Address, to: Address, amount: u64) -> Log {
        make_log(
            USDC,
            block,
            vec![TRANSFER_TOPIC, from.into_word(), to.into_word()],
            U256::from(amount).to_be_bytes::<32>().to_vec(),
        )
    }

    fn decimals_response(decimals: u8) -> Vec<u8> {
        ContractAbi::erc20()
            .unwrap()
            .function("decimals")
            .unwrap()
            .abi_encode_output(&[DynSolValue::Uint(U256::from(decimals), 8)])
            .unwrap()
    }

    fn range(from: u64, to: u64) -> BlockRange {
        BlockRange::new(from, to).unwrap()
    }

    #[tokio::test]
    async fn test_decimals() {
        let transport = MockTransport::new().with_response(DECIMALS_SELECTOR, decimals_response(6));
        let token = TokenContract::new(USDC, transport).unwrap();

        assert_eq!(token.decimals().await.unwrap(), 6);
    }

    #[tokio::test]
    async fn test_decimals_transport_failure() {
        let transport = MockTransport::new().with_call_error(DECIMALS_SELECTOR, "rate limited");
        let token = TokenContract::new(USDC, transport).unwrap();

        let err = token.decimals().await.unwrap_err();
        assert!(err.to_string().contains("rate limited"));
    }

    #[tokio::test]
    async fn test_decimals_garbage_response() {
        let transport = MockTransport::new().with_response(DECIMALS_SELECTOR, vec![0x01, 0x02]);
        let token = TokenContract::new(USDC, transport).unwrap();

        assert!(token.decimals().await.is_err());
    }

    #[test]
    fn test_transfer_filter() {
        let token = TokenContract::new(USDC, MockTransport::new()).unwrap();
        let filter = token.transfer_filter(range(100, 199));

        assert_eq!(filter.get_from_block(), Some(100));
        assert_eq!(filter.get_to_block(), Some(199));

        let addresses: Vec<_> = filter.address.iter().collect();
        assert_eq!(addresses, vec![&USDC]);

        let topic0: Vec<_> = filter.topics[0].iter().collect();
        assert_eq!(topic0, vec![&TRANSFER_TOPIC]);
        assert!(filter.topics[1..].iter().all(|t| t.is_empty()));
    }

    #[tokio::test]
    async fn test_transfers_scaled_and_classified() {
        let logs = vec![
            transfer_log(101, Address::ZERO, ALICE, 5_000_000),
            transfer_log(102, ALICE, BOB, 1_000_000),
            transfer_log(102, BOB, ALICE, 999_999),
        ];
        let transport = MockTransport::new().with_logs(logs);
        let token = TokenContract::new(USDC, transport).unwrap();

        let records = token.transfers(range(100, 199), 6).await.unwrap();
        assert_eq!(records.len(), 3);

        assert_eq!(records[0].kind, TransferKind::Mint);
        assert_eq!(records[0].from, Address::ZERO);
        assert_eq!(records[0].to, ALICE);
        assert_eq!(records[0].amount, U256::from(5));

        assert_eq!(records[1].kind, TransferKind::Transfer);
        assert_eq!(records[1].block_number, 102);
        assert_eq!(records[1].amount, U256::from(1));

        // Truncated, not rounded
        assert_eq!(records[2].raw_amount, U256::from(999_999));
        assert_eq!(records[2].amount, U256::ZERO);

        let filters = token.transport().filters();
        assert_eq!(filters.len(), 1);
        assert_eq!(filters[0].get_from_block(), Some(100));
    }

    #[tokio::test]
    async fn test_transfers_keep_node_order() {
        let logs = vec![
            transfer_log(150, ALICE, BOB, 1),
            transfer_log(120, BOB, ALICE, 2),
        ];
        let token = TokenContract::new(USDC, MockTransport::new().with_logs(logs)).unwrap();

        let records = token.transfers(range(100, 199), 0).await.unwrap();
        let blocks: Vec<_> = records.iter().map(|r| r.block_number).collect();
        assert_eq!(blocks, vec![150, 120]);
    }

    #[tokio::test]
    async fn test_transfers_filter_failure() {
        let token = TokenContract::new(USDC, MockTransport::new()).unwrap();
        let err = token.transfers(range(0, 10), 6).await.unwrap_err();
        assert!(err.to_string().contains("eth_getLogs failed"));
    }

    #[tokio::test]
    async fn test_transfers_malformed_log() {
        let bad = make_log(USDC, 5, vec![TRANSFER_TOPIC], Vec::new());
        let token = TokenContract::new(USDC, MockTransport::new().with_logs(vec![bad])).unwrap();

        let err = token.transfers(range(0, 10), 6).await.unwrap_err();
        assert!(err.to_string().contains("topics"));
    }

    #[tokio::test]
    async fn test_transfers_pending_log() {
        // Pending logs carry no block number
        let mut pending = transfer_log(5, Address::ZERO, ALICE, 1_000_000);
        pending.block_number = None;
        assert!(TransferRecord::from_log(&pending, 0).is_err());

        let logs = vec![transfer_log(4, ALICE, BOB, 1), pending];
        let token = TokenContract::new(USDC, MockTransport::new().with_logs(logs)).unwrap();

        let err = token.transfers(range(0, 10), 6).await.unwrap_err();
        assert!(err.to_string().contains("no block number"));
    }

    #[test]
    fn test_rejects_abi_without_transfer_event() {
        let abi = ContractAbi::erc721().unwrap();
        // ERC-721 Transfer has the same canonical signature, so it is accepted
        assert!(TokenContract::with_abi(USDC, abi, MockTransport::new()).is_ok());

        let abi = ContractAbi::from_json(
            r#"[{"type":"function","name":"decimals","inputs":[],"outputs":[{"name":"","type":"uint8"}],"stateMutability":"view"}]"#,
        )
        .unwrap();
        assert!(TokenContract::with_abi(USDC, abi, MockTransport::new()).is_err());
    }

    #[test]
    fn test_oversized_amount_rejected() {
        let log = make_log(
            USDC,
            5,
            vec![TRANSFER_TOPIC, ALICE.into_word(), BOB.into_word()],
            vec![0xffu8; 33],
        );
        assert!(TransferRecord::from_log(&log, 6).is_err());
    }

    #[test]
    fn test_scale_amount() {
        assert_eq!(scale_amount(U256::from(1_000_000u64), 6), U256::from(1));
        assert_eq!(scale_amount(U256::from(1_500_000u64), 6), U256::from(1));
        assert_eq!(scale_amount(U256::from(42u64), 0), U256::from(42));
        assert_eq!(scale_amount(U256::MAX, 77), U256::from(1));
        assert_eq!(scale_amount(U256::MAX, 78), U256::ZERO);
        assert_eq!(scale_amount(U256::MAX, 255), U256::ZERO);
    }

    #[test]
    fn test_display_line() {
        let log = transfer_log(18_000_000, Address::ZERO, ALICE, 1_000_000);
        let record = TransferRecord::from_log(&log, 6).unwrap();

        assert_eq!(
            record.display_line("USDC"),
            "Block #18000000: Mint from 0x0000000000000000000000000000000000000000 \
             to 0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045, amount: 1 USDC"
        );
    }
}
