use alloy::primitives::{Address, TxHash};
use chrono::{DateTime, Utc};

/// A trip as returned by the contract, timestamp in seconds since epoch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTrip {
    pub creator: Address,
    pub timestamp: u64,
    pub location: String,
}

/// A trip ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripRecord {
    pub creator: Address,
    /// `None` when the on-chain timestamp is outside the representable range.
    pub timestamp: Option<DateTime<Utc>>,
    pub location: String,
}

impl From<RawTrip> for TripRecord {
    fn from(raw: RawTrip) -> Self {
        let millis = i64::try_from(raw.timestamp)
            .ok()
            .and_then(|secs| secs.checked_mul(1000));
        Self {
            creator: raw.creator,
            timestamp: millis.and_then(DateTime::from_timestamp_millis),
            location: raw.location,
        }
    }
}

/// Convert a full fetch result, preserving contract order.
pub fn to_records(raw: Vec<RawTrip>) -> Vec<TripRecord> {
    raw.into_iter().map(TripRecord::from).collect()
}

/// A submitted `addTrip` transaction that has not been confirmed yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTrip {
    pub tx_hash: TxHash,
}
