use std::sync::Arc;
use std::time::Duration;

use alloy::primitives::{address, Address, Bytes};
use alloy::rpc::types::TransactionRequest;
use alloy::sol;
use alloy::sol_types::SolCall;
use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::data::provider::EthProvider;
use crate::data::types::{PendingTrip, RawTrip};
use crate::error::TripError;

/// Deployed trip portal contract.
pub const TRIP_PORTAL_ADDRESS: Address = address!("90a331afdfB7d9A0382892bC6Ea34cD7CFcCf7B6");

/// Gas ceiling attached to every `addTrip` transaction.
pub const DEFAULT_GAS_LIMIT: u64 = 300_000;

// Trip portal interface
sol! {
    #[allow(missing_docs)]
    struct Trip {
        address creator;
        string location;
        uint256 timestamp;
    }

    #[allow(missing_docs)]
    function addTrip(string location) external;
    #[allow(missing_docs)]
    function getAllTrips() external view returns (Trip[] trips);
}

/// Operations the app needs from the trip portal.
#[async_trait]
pub trait TripContract: Send + Sync {
    /// Send `addTrip(location)` with the given gas ceiling.
    async fn submit_trip(&self, location: &str, gas_limit: u64) -> Result<PendingTrip, TripError>;

    /// Wait until the transaction is mined. A failed receipt is a revert.
    async fn confirm(&self, pending: &PendingTrip) -> Result<(), TripError>;

    /// `getAllTrips()`, in contract order.
    async fn fetch_all_trips(&self) -> Result<Vec<RawTrip>, TripError>;
}

/// `TripContract` over JSON-RPC, signing delegated to the wallet endpoint.
pub struct TripPortalClient {
    provider: Arc<EthProvider>,
    address: Address,
    poll_interval: Duration,
}

impl TripPortalClient {
    pub fn new(provider: Arc<EthProvider>, address: Address, poll_interval: Duration) -> Self {
        Self {
            provider,
            address,
            poll_interval,
        }
    }

    /// First wallet account, the one that signs.
    async fn signer(&self) -> Result<Address, TripError> {
        let accounts = self.provider.accounts().await?;
        accounts.first().copied().ok_or(TripError::NoAccount)
    }
}

#[async_trait]
impl TripContract for TripPortalClient {
    async fn submit_trip(&self, location: &str, gas_limit: u64) -> Result<PendingTrip, TripError> {
        let from = self.signer().await?;
        let tx = add_trip_request(self.address, from, location, gas_limit);

        let tx_hash = self.provider.send_transaction(tx).await?;
        info!(%tx_hash, %from, "mining");
        Ok(PendingTrip { tx_hash })
    }

    async fn confirm(&self, pending: &PendingTrip) -> Result<(), TripError> {
        let mut interval = tokio::time::interval(self.poll_interval);
        loop {
            interval.tick().await;
            match self.provider.get_transaction_receipt(pending.tx_hash).await? {
                Some(receipt) if receipt.status() => {
                    info!(tx_hash = %pending.tx_hash, block = ?receipt.block_number, "mined");
                    return Ok(());
                }
                Some(_) => {
                    warn!(tx_hash = %pending.tx_hash, "transaction reverted");
                    return Err(TripError::Reverted(pending.tx_hash));
                }
                None => debug!(tx_hash = %pending.tx_hash, "receipt not available yet"),
            }
        }
    }

    async fn fetch_all_trips(&self) -> Result<Vec<RawTrip>, TripError> {
        let calldata = getAllTripsCall {}.abi_encode();
        let tx = TransactionRequest::default()
            .to(self.address)
            .input(Bytes::from(calldata).into());

        let output = self.provider.call(tx).await?;
        let trips = decode_trips(&output)?;
        debug!(count = trips.len(), "fetched trips");
        Ok(trips)
    }
}

/// `addTrip(location)` from `from`, capped at `gas_limit`.
fn add_trip_request(
    contract: Address,
    from: Address,
    location: &str,
    gas_limit: u64,
) -> TransactionRequest {
    let calldata = addTripCall {
        location: location.to_string(),
    }
    .abi_encode();
    TransactionRequest::default()
        .from(from)
        .to(contract)
        .input(Bytes::from(calldata).into())
        .gas_limit(gas_limit)
}

/// Decode `getAllTrips()` return data.
fn decode_trips(data: &[u8]) -> Result<Vec<RawTrip>, TripError> {
    let decoded = getAllTripsCall::abi_decode_returns(data, true)?;
    Ok(decoded
        .trips
        .into_iter()
        .map(|trip| RawTrip {
            creator: trip.creator,
            timestamp: u64::try_from(trip.timestamp).unwrap_or(u64::MAX),
            location: trip.location,
        })
        .collect())
}
