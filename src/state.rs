use std::time::{Duration, Instant};

use alloy::primitives::Address;

use crate::data::submission::SubmissionPhase;
use crate::data::types::TripRecord;
use crate::data::wallet::WalletStatus;
use crate::events::AppEvent;

/// How long a notification stays on screen.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(3);

/// Shown when connecting without any wallet provider.
pub const NO_WALLET_ALERT: &str = "Get a wallet! Start trip-adder with --rpc-url pointing at your wallet's RPC endpoint.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
    Info,
}

/// A transient toast.
#[derive(Debug, Clone)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub level: NotificationLevel,
    pub created: Instant,
}

impl Notification {
    fn new(title: &str, description: impl Into<String>, level: NotificationLevel) -> Self {
        Self {
            title: title.to_string(),
            description: description.into(),
            level,
            created: Instant::now(),
        }
    }

    pub fn success(description: impl Into<String>) -> Self {
        Self::new("Success!", description, NotificationLevel::Success)
    }

    pub fn error(description: impl Into<String>) -> Self {
        Self::new("Error!", description, NotificationLevel::Error)
    }

    pub fn info(description: impl Into<String>) -> Self {
        Self::new("Heads up", description, NotificationLevel::Info)
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created) >= NOTIFICATION_TTL
    }
}

/// Everything the UI renders from. Async results reach it only through
/// [`ViewState::apply`]; each field has one setter.
#[derive(Debug, Default)]
pub struct ViewState {
    connected: bool,
    account: Option<Address>,
    loading: bool,
    trips: Vec<TripRecord>,
    location: String,
    confirmation_link: Option<String>,
    modal_open: bool,
    alert: Option<String>,
    notifications: Vec<Notification>,
    phase: SubmissionPhase,
    chain_id: Option<u64>,
    status_message: Option<String>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    // --- Accessors ---

    pub fn connected(&self) -> bool {
        self.connected
    }

    pub fn account(&self) -> Option<Address> {
        self.account
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn trips(&self) -> &[TripRecord] {
        &self.trips
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn confirmation_link(&self) -> Option<&str> {
        self.confirmation_link.as_deref()
    }

    pub fn modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn chain_id(&self) -> Option<u64> {
        self.chain_id
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    // --- Setters ---

    pub fn set_connected(&mut self, connected: bool) {
        self.connected = connected;
    }

    pub fn set_account(&mut self, account: Option<Address>) {
        self.account = account;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_trips(&mut self, trips: Vec<TripRecord>) {
        self.trips = trips;
    }

    pub fn set_location(&mut self, location: String) {
        self.location = location;
    }

    pub fn set_confirmation_link(&mut self, link: Option<String>) {
        self.confirmation_link = link;
    }

    pub fn set_modal_open(&mut self, open: bool) {
        self.modal_open = open;
    }

    pub fn set_alert(&mut self, alert: Option<String>) {
        self.alert = alert;
    }

    pub fn push_notification(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Drop notifications older than [`NOTIFICATION_TTL`].
    pub fn expire_notifications(&mut self, now: Instant) {
        self.notifications.retain(|n| !n.is_expired(now));
    }

    pub fn set_phase(&mut self, phase: SubmissionPhase) {
        self.phase = phase;
        self.set_loading(phase.is_loading());
    }

    pub fn set_chain_id(&mut self, chain_id: Option<u64>) {
        self.chain_id = chain_id;
    }

    pub fn set_status_message(&mut self, message: Option<String>) {
        self.status_message = message;
    }

    fn set_wallet_account(&mut self, account: Address) {
        self.set_account(Some(account));
        self.set_connected(true);
    }

    /// Fold a background result into the state. User-intent events are
    /// handled by the app before they get here and are ignored.
    pub fn apply(&mut self, event: AppEvent) {
        match event {
            AppEvent::Connected(chain_id) => self.set_chain_id(Some(chain_id)),
            AppEvent::WalletChecked(status) => match status {
                WalletStatus::Connected(account) => self.set_wallet_account(account),
                WalletStatus::Degraded(reason) => {
                    self.set_status_message(Some(format!("Wallet check failed: {reason}")));
                }
                WalletStatus::NotAuthorized | WalletStatus::ProviderMissing => {}
            },
            AppEvent::WalletConnectResult(status) => match status {
                WalletStatus::Connected(account) => self.set_wallet_account(account),
                WalletStatus::ProviderMissing => self.set_alert(Some(NO_WALLET_ALERT.to_string())),
                WalletStatus::NotAuthorized => {
                    self.set_status_message(Some("Wallet returned no accounts".to_string()));
                }
                WalletStatus::Degraded(reason) => {
                    self.set_status_message(Some(format!("Connect failed: {reason}")));
                }
            },
            AppEvent::TripsLoaded(trips) => self.set_trips(trips),
            AppEvent::TripsUnavailable(reason) => {
                self.set_status_message(Some(format!("Could not load trips: {reason}")));
            }
            AppEvent::Phase(phase) => self.set_phase(phase),
            AppEvent::TripConfirmed { link } => {
                self.set_confirmation_link(Some(link));
                self.set_modal_open(true);
            }
            AppEvent::Notify(notification) => self.push_notification(notification),
            AppEvent::LocationEdited(_)
            | AppEvent::SubmitRequested
            | AppEvent::ConnectRequested
            | AppEvent::ModalClosed
            | AppEvent::AlertDismissed => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::TxHash;

    #[test]
    fn test_initial_state_is_disconnected() {
        let state = ViewState::new();
        assert!(!state.connected());
        assert!(state.account().is_none());
        assert!(!state.loading());
        assert!(state.trips().is_empty());
        assert!(!state.modal_open());
        assert_eq!(state.phase(), SubmissionPhase::Idle);
    }

    #[test]
    fn test_wallet_check_connected() {
        let mut state = ViewState::new();
        let account = Address::repeat_byte(0x11);
        state.apply(AppEvent::WalletChecked(WalletStatus::Connected(account)));
        assert!(state.connected());
        assert_eq!(state.account(), Some(account));
    }

    #[test]
    fn test_wallet_check_missing_provider_is_silent() {
        let mut state = ViewState::new();
        state.apply(AppEvent::WalletChecked(WalletStatus::ProviderMissing));
        assert!(!state.connected());
        assert!(state.alert().is_none());
        assert!(state.status_message().is_none());
    }

    #[test]
    fn test_wallet_check_degraded_is_surfaced() {
        let mut state = ViewState::new();
        state.apply(AppEvent::WalletChecked(WalletStatus::Degraded("timeout".to_string())));
        assert!(!state.connected());
        assert_eq!(state.status_message(), Some("Wallet check failed: timeout"));
    }

    #[test]
    fn test_connect_without_provider_raises_alert() {
        let mut state = ViewState::new();
        state.apply(AppEvent::WalletConnectResult(WalletStatus::ProviderMissing));
        assert_eq!(state.alert(), Some(NO_WALLET_ALERT));
        assert!(!state.connected());
    }

    #[test]
    fn test_loading_follows_phase() {
        let mut state = ViewState::new();
        state.apply(AppEvent::Phase(SubmissionPhase::Validating));
        assert!(!state.loading());
        state.apply(AppEvent::Phase(SubmissionPhase::Submitting));
        assert!(state.loading());
        state.apply(AppEvent::Phase(SubmissionPhase::AwaitingConfirmation(TxHash::ZERO)));
        assert!(state.loading());
        state.apply(AppEvent::Phase(SubmissionPhase::Error));
        assert!(!state.loading());
        state.apply(AppEvent::Phase(SubmissionPhase::Idle));
        assert!(!state.loading());
    }

    #[test]
    fn test_loading_independent_of_connection() {
        let mut state = ViewState::new();
        state.apply(AppEvent::Phase(SubmissionPhase::Submitting));
        assert!(state.loading());
        assert!(!state.connected());
    }

    #[test]
    fn test_trips_replaced_wholesale() {
        let mut state = ViewState::new();
        let record = |location: &str| TripRecord {
            creator: Address::ZERO,
            timestamp: None,
            location: location.to_string(),
        };
        state.apply(AppEvent::TripsLoaded(vec![record("Paris"), record("Rome!")]));
        state.apply(AppEvent::TripsLoaded(vec![record("Tokyo")]));
        assert_eq!(state.trips(), &[record("Tokyo")]);
    }

    #[test]
    fn test_confirmation_opens_modal() {
        let mut state = ViewState::new();
        state.apply(AppEvent::TripConfirmed {
            link: "https://rinkeby.etherscan.io/tx/0x00".to_string(),
        });
        assert!(state.modal_open());
        assert_eq!(
            state.confirmation_link(),
            Some("https://rinkeby.etherscan.io/tx/0x00")
        );
    }

    #[test]
    fn test_notifications_expire() {
        let mut state = ViewState::new();
        state.apply(AppEvent::Notify(Notification::success("Location was submitted")));
        let created = state.notifications()[0].created;

        state.expire_notifications(created + Duration::from_millis(2999));
        assert_eq!(state.notifications().len(), 1);

        state.expire_notifications(created + NOTIFICATION_TTL);
        assert!(state.notifications().is_empty());
    }
}
