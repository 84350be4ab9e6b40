//! ERC-721 owner and metadata lookups

use crate::abi::ContractAbi;
use crate::contract::Contract;
use crate::error::{AbiError, Result};
use crate::rpc::Transport;
use alloy::dyn_abi::DynSolValue;
use alloy::primitives::{Address, U256};

/// An ERC-721 collection contract
pub struct NftContract<T> {
    contract: Contract<T>,
}

impl<T: Transport> NftContract<T> {
    pub fn new(address: Address, transport: T) -> Result<Self> {
        Ok(Self::with_abi(address, ContractAbi::erc721()?, transport))
    }

    pub fn with_abi(address: Address, abi: ContractAbi, transport: T) -> Self {
        Self {
            contract: Contract::new(address, abi, transport),
        }
    }

    pub fn address(&self) -> Address {
        self.contract.address()
    }

    pub fn transport(&self) -> &T {
        self.contract.transport()
    }

    /// `ownerOf(tokenId)`
    pub async fn owner_of(&self, token_id: U256) -> Result<Address> {
        let value = self
            .contract
            .call_single("ownerOf", &[DynSolValue::Uint(token_id, 256)])
            .await?;

        value.as_address().ok_or_else(|| {
            AbiError::TypeMismatch {
                function: "ownerOf".to_string(),
                expected: "address",
            }
            .into()
        })
    }

    /// `tokenURI(tokenId)`
    pub async fn token_uri(&self, token_id: U256) -> Result<String> {
        let value = self
            .contract
            .call_single("tokenURI", &[DynSolValue::Uint(token_id, 256)])
            .await?;

        match value {
            DynSolValue::String(uri) => Ok(uri),
            _ => Err(AbiError::TypeMismatch {
                function: "tokenURI".to_string(),
                expected: "string",
            }
            .into()),
        }
    }
}
