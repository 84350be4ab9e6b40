//! Contract handles
//!
//! A [`Contract`] binds an address, a parsed interface description and a
//! transport. The typed wrappers in [`token`] and [`nft`] sit on top of it.

pub mod nft;
pub mod token;

pub use nft::NftContract;
pub use token::{TokenContract, TransferKind, TransferRecord};

use crate::abi::ContractAbi;
use crate::error::{AbiError, Result};
use crate::rpc::Transport;
use alloy::dyn_abi::DynSolValue;
use alloy::primitives::Address;

/// A deployed contract reachable through a transport
pub struct Contract<T> {
    address: Address,
    abi: ContractAbi,
    transport: T,
}

impl<T: Transport> Contract<T> {
    pub fn new(address: Address, abi: ContractAbi, transport: T) -> Self {
        Self {
            address,
            abi,
            transport,
        }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Encode, send and decode a read-only call
    pub async fn call(&self, function: &str, args: &[DynSolValue]) -> Result<Vec<DynSolValue>> {
        let calldata = self.abi.encode_call(function, args)?;

        tracing::debug!("Calling {}() on {}", function, self.address);
        let output = self.transport.call(self.address, calldata).await?;

        self.abi.decode_output(function, &output)
    }

    /// Call a function that returns exactly one value
    pub async fn call_single(&self, function: &str, args: &[DynSolValue]) -> Result<DynSolValue> {
        let mut values = self.call(function, args).await?;

        if values.len() != 1 {
            return Err(AbiError::DecodeError {
                function: function.to_string(),
                reason: format!("expected 1 return value, got {}", values.len()),
            }
            .into());
        }

        Ok(values.remove(0))
    }
}
