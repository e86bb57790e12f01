use alloy::primitives::{Address, Bytes, TxHash};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::types::{TransactionReceipt, TransactionRequest};
use color_eyre::eyre::Result;

use crate::error::TripError;

/// The concrete provider type returned by `ProviderBuilder::new().on_http(url)`.
/// We use a trait-object-based wrapper to avoid spelling out the full generic type.
pub struct EthProvider {
    provider: Box<dyn Provider + Send + Sync>,
    chain_id: u64,
}

impl EthProvider {
    /// Connect to a wallet RPC endpoint over HTTP.
    pub async fn connect(rpc_url: &str) -> Result<Self> {
        let url = rpc_url.parse()?;
        let provider = ProviderBuilder::new().on_http(url);
        let chain_id = provider.get_chain_id().await?;
        Ok(Self {
            provider: Box::new(provider),
            chain_id,
        })
    }

    /// Return the chain ID obtained at connection time.
    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// `eth_accounts`: accounts the wallet has already authorized.
    pub async fn accounts(&self) -> Result<Vec<Address>, TripError> {
        let accounts = self.provider.get_accounts().await?;
        Ok(accounts)
    }

    /// `eth_requestAccounts`: ask the wallet to authorize an account.
    pub async fn request_accounts(&self) -> Result<Vec<Address>, TripError> {
        let accounts: Vec<Address> = self
            .provider
            .client()
            .request("eth_requestAccounts", ())
            .await?;
        Ok(accounts)
    }

    /// Read-only contract call at the latest block.
    pub async fn call(&self, tx: TransactionRequest) -> Result<Bytes, TripError> {
        let output = self.provider.call(tx).await?;
        Ok(output)
    }

    /// Hand a transaction to the wallet for signing and broadcast.
    pub async fn send_transaction(&self, tx: TransactionRequest) -> Result<TxHash, TripError> {
        let pending = self.provider.send_transaction(tx).await?;
        Ok(*pending.tx_hash())
    }

    /// Get a transaction receipt by transaction hash.
    pub async fn get_transaction_receipt(
        &self,
        hash: TxHash,
    ) -> Result<Option<TransactionReceipt>, TripError> {
        let receipt = self.provider.get_transaction_receipt(hash).await?;
        Ok(receipt)
    }
}
