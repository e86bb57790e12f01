use alloy::primitives::TxHash;
use alloy::transports::TransportError;
use thiserror::Error;

/// Failures of wallet and contract operations.
#[derive(Debug, Error)]
pub enum TripError {
    #[error("no wallet provider detected")]
    ProviderMissing,
    #[error("wallet has no authorized account")]
    NoAccount,
    #[error("rpc error: {message}")]
    Rpc {
        message: String,
        reason: Option<String>,
    },
    #[error("transaction {0} reverted")]
    Reverted(TxHash),
    #[error("failed to decode contract response: {0}")]
    Decode(String),
}

impl TripError {
    /// Text shown to the user when an operation fails. `None` means the
    /// failure carries no reason worth surfacing.
    pub fn reason(&self) -> Option<String> {
        match self {
            TripError::ProviderMissing => {
                Some("Please sign in and refresh before adding a trip".to_string())
            }
            TripError::NoAccount => Some("Connect a wallet account before adding a trip".to_string()),
            TripError::Rpc { reason, .. } => reason.clone(),
            TripError::Reverted(_) => Some("transaction reverted".to_string()),
            TripError::Decode(_) => None,
        }
    }
}

impl From<TransportError> for TripError {
    fn from(err: TransportError) -> Self {
        // JSON-RPC error responses carry the wallet/node message (user
        // rejection, revert reason); transport failures have none.
        let reason = err.as_error_resp().map(|payload| payload.message.to_string());
        TripError::Rpc {
            message: err.to_string(),
            reason,
        }
    }
}

impl From<alloy::sol_types::Error> for TripError {
    fn from(err: alloy::sol_types::Error) -> Self {
        TripError::Decode(err.to_string())
    }
}
