use crate::data::submission::SubmissionPhase;
use crate::data::types::TripRecord;
use crate::data::wallet::WalletStatus;
use crate::state::Notification;

/// Events flowing into the main app loop, from background tasks and from
/// components translating key presses into intents.
#[derive(Debug, Clone)]
pub enum AppEvent {
    // Wallet
    WalletChecked(WalletStatus),
    WalletConnectResult(WalletStatus),

    // Contract data
    TripsLoaded(Vec<TripRecord>),
    TripsUnavailable(String),

    // Submission
    Phase(SubmissionPhase),
    TripConfirmed { link: String },
    Notify(Notification),

    // User intents
    LocationEdited(String),
    SubmitRequested,
    ConnectRequested,
    ModalClosed,
    AlertDismissed,

    // Status
    Connected(u64), // chain_id
}
