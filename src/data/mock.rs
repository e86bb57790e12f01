//! In-memory wallet and contract used by unit tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use alloy::primitives::{Address, TxHash};
use async_trait::async_trait;
use tokio::sync::Notify;

use crate::data::contract::TripContract;
use crate::data::types::{PendingTrip, RawTrip};
use crate::data::wallet::WalletProvider;
use crate::error::TripError;

fn rpc_error(reason: &str) -> TripError {
    TripError::Rpc {
        message: format!("server returned an error response: {reason}"),
        reason: Some(reason.to_string()),
    }
}

pub struct MockWallet {
    accounts: Vec<Address>,
    granted: Option<Address>,
    failure: Option<String>,
    requests: AtomicUsize,
}

impl MockWallet {
    pub fn with_accounts(accounts: Vec<Address>) -> Self {
        Self {
            accounts,
            granted: None,
            failure: None,
            requests: AtomicUsize::new(0),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            failure: Some(reason.to_string()),
            ..Self::with_accounts(vec![])
        }
    }

    /// Account returned by `request_accounts`.
    pub fn granting(mut self, account: Address) -> Self {
        self.granted = Some(account);
        self
    }

    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WalletProvider for MockWallet {
    async fn accounts(&self) -> Result<Vec<Address>, TripError> {
        match &self.failure {
            Some(reason) => Err(rpc_error(reason)),
            None => Ok(self.accounts.clone()),
        }
    }

    async fn request_accounts(&self) -> Result<Vec<Address>, TripError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        if let Some(reason) = &self.failure {
            return Err(rpc_error(reason));
        }
        Ok(self.granted.into_iter().chain(self.accounts.iter().copied()).collect())
    }
}

/// Where a mock submission should fail, if anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailAt {
    Nowhere,
    Submit,
    Confirm,
    Refresh,
}

pub struct MockContract {
    pub trips: Mutex<Vec<RawTrip>>,
    pub tx_hash: TxHash,
    fail_at: FailAt,
    submissions: Mutex<Vec<String>>,
    gas_limits: Mutex<Vec<u64>>,
    fetches: AtomicUsize,
    /// When set, `confirm` blocks until notified.
    hold_confirmation: Option<Notify>,
}

impl MockContract {
    pub fn new(trips: Vec<RawTrip>) -> Self {
        Self {
            trips: Mutex::new(trips),
            tx_hash: TxHash::repeat_byte(0x42),
            fail_at: FailAt::Nowhere,
            submissions: Mutex::new(Vec::new()),
            gas_limits: Mutex::new(Vec::new()),
            fetches: AtomicUsize::new(0),
            hold_confirmation: None,
        }
    }

    pub fn failing_at(mut self, fail_at: FailAt) -> Self {
        self.fail_at = fail_at;
        self
    }

    pub fn holding_confirmation(mut self) -> Self {
        self.hold_confirmation = Some(Notify::new());
        self
    }

    pub fn release_confirmation(&self) {
        if let Some(notify) = &self.hold_confirmation {
            notify.notify_one();
        }
    }

    pub fn submissions(&self) -> Vec<String> {
        self.submissions.lock().unwrap().clone()
    }

    /// Gas ceiling passed with each submission.
    pub fn gas_limits(&self) -> Vec<u64> {
        self.gas_limits.lock().unwrap().clone()
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TripContract for MockContract {
    async fn submit_trip(&self, location: &str, gas_limit: u64) -> Result<PendingTrip, TripError> {
        self.submissions.lock().unwrap().push(location.to_string());
        self.gas_limits.lock().unwrap().push(gas_limit);
        if self.fail_at == FailAt::Submit {
            return Err(rpc_error("user rejected transaction"));
        }
        Ok(PendingTrip { tx_hash: self.tx_hash })
    }

    async fn confirm(&self, pending: &PendingTrip) -> Result<(), TripError> {
        if let Some(notify) = &self.hold_confirmation {
            notify.notified().await;
        }
        if self.fail_at == FailAt::Confirm {
            return Err(TripError::Reverted(pending.tx_hash));
        }
        Ok(())
    }

    async fn fetch_all_trips(&self) -> Result<Vec<RawTrip>, TripError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.fail_at == FailAt::Refresh {
            return Err(TripError::Decode("unexpected return data".to_string()));
        }
        Ok(self.trips.lock().unwrap().clone())
    }
}
