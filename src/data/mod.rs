pub mod contract;
pub mod explorer;
#[cfg(test)]
pub mod mock;
pub mod provider;
pub mod submission;
pub mod types;
pub mod wallet;

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::data::contract::TripContract;
use crate::data::submission::{SubmissionFlow, SubmissionOutcome};
use crate::data::types::to_records;
use crate::data::wallet::WalletGateway;
use crate::events::AppEvent;

/// Runs wallet and contract operations on background tasks and reports
/// their results to the app loop as `AppEvent`s.
pub struct TripService {
    wallet: Arc<WalletGateway>,
    contract: Option<Arc<dyn TripContract>>,
    submission: Arc<SubmissionFlow>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl TripService {
    pub fn new(
        wallet: WalletGateway,
        contract: Option<Arc<dyn TripContract>>,
        submission: SubmissionFlow,
        event_tx: mpsc::UnboundedSender<AppEvent>,
    ) -> Self {
        Self {
            wallet: Arc::new(wallet),
            contract,
            submission: Arc::new(submission),
            event_tx,
        }
    }

    /// Look for an already-authorized account without prompting.
    pub fn check_existing_connection(&self) {
        let wallet = Arc::clone(&self.wallet);
        let tx = self.event_tx.clone();

        tokio::spawn(async move {
            let status = wallet.check_existing_connection().await;
            let _ = tx.send(AppEvent::WalletChecked(status));
        });
    }

    /// Prompt the wallet for account access.
    pub fn connect_wallet(&self) {
        let wallet = Arc::clone(&self.wallet);
        let tx = self.event_tx.clone();

        tokio::spawn(async move {
            let status = wallet.request_connection().await;
            let _ = tx.send(AppEvent::WalletConnectResult(status));
        });
    }

    /// Fetch every trip and replace the displayed list.
    pub fn fetch_all_trips(&self) {
        let Some(contract) = self.contract.clone() else {
            warn!("no wallet provider, trips not loaded");
            return;
        };
        let tx = self.event_tx.clone();

        tokio::spawn(async move {
            match contract.fetch_all_trips().await {
                Ok(raw) => {
                    let _ = tx.send(AppEvent::TripsLoaded(to_records(raw)));
                }
                Err(e) => {
                    warn!(error = %e, "failed to fetch trips");
                    let _ = tx.send(AppEvent::TripsUnavailable(e.to_string()));
                }
            }
        });
    }

    /// Run the submission flow for `location` in the background.
    pub fn add_trip(&self, location: String) {
        let submission = Arc::clone(&self.submission);
        let tx = self.event_tx.clone();

        tokio::spawn(async move {
            match submission.run(location, &tx).await {
                SubmissionOutcome::Confirmed { tx_hash, link } => {
                    info!(%tx_hash, link = %link, "trip confirmed");
                }
                SubmissionOutcome::Failed(e) => warn!(error = %e, "trip not added"),
                SubmissionOutcome::Invalid
                | SubmissionOutcome::Busy
                | SubmissionOutcome::ProviderMissing => {}
            }
        });
    }
}
