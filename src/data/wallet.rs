use std::sync::Arc;

use alloy::primitives::Address;
use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::data::provider::EthProvider;
use crate::error::TripError;

/// Account access exposed by a wallet.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Accounts already authorized for this app (`eth_accounts`).
    async fn accounts(&self) -> Result<Vec<Address>, TripError>;

    /// Prompt the wallet for account access (`eth_requestAccounts`).
    async fn request_accounts(&self) -> Result<Vec<Address>, TripError>;
}

#[async_trait]
impl WalletProvider for EthProvider {
    async fn accounts(&self) -> Result<Vec<Address>, TripError> {
        EthProvider::accounts(self).await
    }

    async fn request_accounts(&self) -> Result<Vec<Address>, TripError> {
        EthProvider::request_accounts(self).await
    }
}

/// Outcome of a wallet check or connection request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletStatus {
    Connected(Address),
    /// Provider present but no account authorized.
    NotAuthorized,
    ProviderMissing,
    /// The provider answered with an error; the reason is kept so the
    /// caller can decide whether to surface it.
    Degraded(String),
}

/// Detects the wallet provider and manages account access.
pub struct WalletGateway {
    provider: Option<Arc<dyn WalletProvider>>,
}

impl WalletGateway {
    pub fn new(provider: Option<Arc<dyn WalletProvider>>) -> Self {
        Self { provider }
    }

    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    /// Silent check for an already-authorized account. Never fails.
    pub async fn check_existing_connection(&self) -> WalletStatus {
        let Some(provider) = &self.provider else {
            info!("no wallet provider configured");
            return WalletStatus::ProviderMissing;
        };

        match provider.accounts().await {
            Ok(accounts) => match accounts.first() {
                Some(account) => {
                    info!(%account, "found an authorized account");
                    WalletStatus::Connected(*account)
                }
                None => {
                    debug!("no authorized account found");
                    WalletStatus::NotAuthorized
                }
            },
            Err(e) => {
                warn!(error = %e, "wallet check failed");
                WalletStatus::Degraded(e.to_string())
            }
        }
    }

    /// Ask the wallet for account access and return the first account.
    pub async fn request_connection(&self) -> WalletStatus {
        let Some(provider) = &self.provider else {
            warn!("connect requested without a wallet provider");
            return WalletStatus::ProviderMissing;
        };

        match provider.request_accounts().await {
            Ok(accounts) => match accounts.first() {
                Some(account) => {
                    info!(%account, "connected");
                    WalletStatus::Connected(*account)
                }
                None => {
                    warn!("wallet returned no accounts");
                    WalletStatus::NotAuthorized
                }
            },
            Err(e) => {
                warn!(error = %e, "connection request failed");
                WalletStatus::Degraded(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::mock::MockWallet;

    fn account(byte: u8) -> Address {
        Address::repeat_byte(byte)
    }

    #[tokio::test]
    async fn test_check_without_provider() {
        let gateway = WalletGateway::new(None);
        assert!(!gateway.has_provider());
        assert_eq!(gateway.check_existing_connection().await, WalletStatus::ProviderMissing);
    }

    #[tokio::test]
    async fn test_check_uses_first_authorized_account() {
        let wallet = MockWallet::with_accounts(vec![account(1), account(2)]);
        let gateway = WalletGateway::new(Some(Arc::new(wallet)));
        assert_eq!(
            gateway.check_existing_connection().await,
            WalletStatus::Connected(account(1))
        );
    }

    #[tokio::test]
    async fn test_check_no_accounts() {
        let gateway = WalletGateway::new(Some(Arc::new(MockWallet::with_accounts(vec![]))));
        assert_eq!(gateway.check_existing_connection().await, WalletStatus::NotAuthorized);
    }

    #[tokio::test]
    async fn test_check_failure_is_degraded() {
        let gateway = WalletGateway::new(Some(Arc::new(MockWallet::failing("node offline"))));
        assert!(matches!(
            gateway.check_existing_connection().await,
            WalletStatus::Degraded(_)
        ));
    }

    #[tokio::test]
    async fn test_request_connection() {
        let wallet = Arc::new(MockWallet::with_accounts(vec![]).granting(account(7)));
        let gateway = WalletGateway::new(Some(wallet.clone()));
        assert_eq!(gateway.request_connection().await, WalletStatus::Connected(account(7)));
        assert_eq!(wallet.request_count(), 1);
    }

    #[tokio::test]
    async fn test_request_connection_without_provider() {
        let gateway = WalletGateway::new(None);
        assert_eq!(gateway.request_connection().await, WalletStatus::ProviderMissing);
    }
}
