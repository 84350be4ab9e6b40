//! Interface descriptions and call encoding/decoding

mod interfaces;

pub use interfaces::{ERC20_ABI, ERC721_ABI, TRANSFER_EVENT_SIGNATURE};

use crate::error::{AbiError, Result};
use alloy::dyn_abi::{DynSolValue, FunctionExt, JsonAbiExt};
use alloy::json_abi::{Event, Function, JsonAbi};
use alloy::primitives::{keccak256, Bytes, B256};

/// A parsed contract interface description
///
/// Parsed once and then only read; contract handles own one for their lifetime.
#[derive(Debug, Clone)]
pub struct ContractAbi {
    abi: JsonAbi,
}

impl ContractAbi {
    /// Parse a JSON ABI document
    pub fn from_json(json: &str) -> Result<Self> {
        let abi: JsonAbi = serde_json::from_str(json)?;
        Ok(Self { abi })
    }

    /// The ERC-20 interface used by the token query
    pub fn erc20() -> Result<Self> {
        Self::from_json(ERC20_ABI)
    }

    /// The ERC-721 interface used by the NFT query
    pub fn erc721() -> Result<Self> {
        Self::from_json(ERC721_ABI)
    }

    /// Find a function by name (first overload)
    pub fn function(&self, name: &str) -> Result<&Function> {
        self.abi
            .function(name)
            .and_then(|funcs| funcs.first())
            .ok_or_else(|| AbiError::FunctionNotFound(name.to_string()).into())
    }

    /// Find an event by name (first overload)
    pub fn event(&self, name: &str) -> Result<&Event> {
        self.abi
            .event(name)
            .and_then(|events| events.first())
            .ok_or_else(|| AbiError::EventNotFound(name.to_string()).into())
    }

    /// Encode calldata (selector + arguments) for a named function
    pub fn encode_call(&self, name: &str, args: &[DynSolValue]) -> Result<Bytes> {
        let func = self.function(name)?;

        if func.inputs.len() != args.len() {
            return Err(AbiError::ArgumentCount {
                function: name.to_string(),
                expected: func.inputs.len(),
                got: args.len(),
            }
            .into());
        }

        let calldata = func.abi_encode_input(args).map_err(|e| AbiError::EncodeError {
            function: name.to_string(),
            reason: e.to_string(),
        })?;

        Ok(calldata.into())
    }

    /// Decode the return data of a named function
    pub fn decode_output(&self, name: &str, data: &[u8]) -> Result<Vec<DynSolValue>> {
        let func = self.function(name)?;

        func.abi_decode_output(data).map_err(|e| {
            AbiError::DecodeError {
                function: name.to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Topic hash (topic0) of a named event
    pub fn event_topic(&self, name: &str) -> Result<B256> {
        Ok(self.event(name)?.selector())
    }
}

/// Topic hash of a canonical event signature such as `Transfer(address,address,uint256)`
pub fn topic_hash(signature: &str) -> B256 {
    keccak256(signature.as_bytes())
}
