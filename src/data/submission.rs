use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use alloy::primitives::TxHash;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

use crate::data::contract::TripContract;
use crate::data::explorer::Explorer;
use crate::data::types::to_records;
use crate::error::TripError;
use crate::events::AppEvent;
use crate::state::Notification;

/// Shortest location accepted for submission, in characters.
pub const MIN_LOCATION_LEN: usize = 5;

/// Whether a location may be submitted. Empty input is always rejected.
pub fn validate_location(input: &str) -> bool {
    !input.is_empty() && input.chars().count() >= MIN_LOCATION_LEN
}

/// Where a submission currently is. Every run ends in `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    AwaitingConfirmation(TxHash),
    Refreshing,
    Error,
}

impl SubmissionPhase {
    /// Phases during which the submit button shows as loading.
    pub fn is_loading(&self) -> bool {
        matches!(
            self,
            SubmissionPhase::Submitting
                | SubmissionPhase::AwaitingConfirmation(_)
                | SubmissionPhase::Refreshing
        )
    }
}

#[derive(Debug)]
pub enum SubmissionOutcome {
    Invalid,
    /// Another submission was still in flight.
    Busy,
    ProviderMissing,
    Confirmed { tx_hash: TxHash, link: String },
    Failed(TripError),
}

/// Validate → submit → await confirmation → refresh, reporting each step
/// as an `AppEvent`.
pub struct SubmissionFlow {
    contract: Option<Arc<dyn TripContract>>,
    explorer: Explorer,
    gas_limit: u64,
    in_flight: AtomicBool,
}

/// Clears the in-flight flag when the run finishes, however it finishes.
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl SubmissionFlow {
    pub fn new(contract: Option<Arc<dyn TripContract>>, explorer: Explorer, gas_limit: u64) -> Self {
        Self {
            contract,
            explorer,
            gas_limit,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    fn begin(&self) -> Option<InFlight<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlight(&self.in_flight))
    }

    pub async fn run(
        &self,
        location: String,
        events: &mpsc::UnboundedSender<AppEvent>,
    ) -> SubmissionOutcome {
        // Phase events belong to the submission in flight, if there is one
        let idle = !self.is_in_flight();
        if idle {
            let _ = events.send(AppEvent::Phase(SubmissionPhase::Validating));
        }
        if !validate_location(&location) {
            let _ = events.send(AppEvent::Notify(Notification::error("Must fill out form")));
            if idle {
                finish(events, SubmissionPhase::Error);
            }
            return SubmissionOutcome::Invalid;
        }

        let Some(_guard) = self.begin() else {
            info!("submission ignored, another one is in flight");
            let _ = events.send(AppEvent::Notify(Notification::info(
                "A trip is already being submitted",
            )));
            return SubmissionOutcome::Busy;
        };

        let Some(contract) = &self.contract else {
            warn!("submission without a wallet provider");
            let reason = TripError::ProviderMissing.reason().unwrap_or_default();
            let _ = events.send(AppEvent::Notify(Notification::error(reason)));
            finish(events, SubmissionPhase::Error);
            return SubmissionOutcome::ProviderMissing;
        };

        let _ = events.send(AppEvent::Phase(SubmissionPhase::Submitting));
        let pending = match contract.submit_trip(&location, self.gas_limit).await {
            Ok(pending) => pending,
            Err(e) => return fail(events, e),
        };

        let _ = events.send(AppEvent::Phase(SubmissionPhase::AwaitingConfirmation(
            pending.tx_hash,
        )));
        if let Err(e) = contract.confirm(&pending).await {
            return fail(events, e);
        }

        let link = self.explorer.tx_url(&pending.tx_hash);
        let _ = events.send(AppEvent::Notify(Notification::success("Location was submitted")));
        let _ = events.send(AppEvent::TripConfirmed { link: link.clone() });

        let _ = events.send(AppEvent::Phase(SubmissionPhase::Refreshing));
        match contract.fetch_all_trips().await {
            Ok(raw) => {
                let _ = events.send(AppEvent::TripsLoaded(to_records(raw)));
            }
            Err(e) => {
                warn!(error = %e, "refresh after confirmation failed");
                let _ = events.send(AppEvent::Notify(Notification::error(
                    e.reason().unwrap_or_default(),
                )));
            }
        }

        finish(events, SubmissionPhase::Idle);
        SubmissionOutcome::Confirmed {
            tx_hash: pending.tx_hash,
            link,
        }
    }
}

fn fail(events: &mpsc::UnboundedSender<AppEvent>, e: TripError) -> SubmissionOutcome {
    error!(error = %e, "trip submission failed");
    let _ = events.send(AppEvent::Notify(Notification::error(
        e.reason().unwrap_or_default(),
    )));
    finish(events, SubmissionPhase::Error);
    SubmissionOutcome::Failed(e)
}

/// Emit the last phase (if not already `Idle`) followed by `Idle`.
fn finish(events: &mpsc::UnboundedSender<AppEvent>, last: SubmissionPhase) {
    if last != SubmissionPhase::Idle {
        let _ = events.send(AppEvent::Phase(last));
    }
    let _ = events.send(AppEvent::Phase(SubmissionPhase::Idle));
}
