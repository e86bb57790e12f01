use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::prelude::*;
use ratatui::widgets::*;
use tokio::sync::mpsc;
use tracing::debug;

use crate::components::alert::AlertOverlay;
use crate::components::header::Header;
use crate::components::help::HelpOverlay;
use crate::components::notifications::Toasts;
use crate::components::status_bar::StatusBar;
use crate::components::success_modal::SuccessModal;
use crate::components::trip_form::TripForm;
use crate::components::trip_grid::TripGrid;
use crate::components::{Component, Focus};
use crate::data::TripService;
use crate::events::AppEvent;
use crate::state::ViewState;
use crate::theme::THEME;

pub struct App {
    // Components
    header: Header,
    trip_form: TripForm,
    trip_grid: TripGrid,
    success_modal: SuccessModal,
    alert: AlertOverlay,
    toasts: Toasts,
    status_bar: StatusBar,
    help: HelpOverlay,

    // Data
    service: Arc<TripService>,
    event_rx: mpsc::UnboundedReceiver<AppEvent>,

    // State
    state: ViewState,
    focus: Focus,
    should_quit: bool,
    tick_rate: Duration,
}

impl App {
    pub fn with_service(
        service: Arc<TripService>,
        event_rx: mpsc::UnboundedReceiver<AppEvent>,
        provider_present: bool,
        tick_rate_ms: u64,
    ) -> Self {
        let mut app = Self {
            header: Header::new(),
            trip_form: TripForm::new(),
            trip_grid: TripGrid::new(),
            success_modal: SuccessModal::new(),
            alert: AlertOverlay::new(),
            toasts: Toasts::new(),
            status_bar: StatusBar::new(provider_present),
            help: HelpOverlay::new(),
            service,
            event_rx,
            state: ViewState::new(),
            focus: Focus::default(),
            should_quit: false,
            tick_rate: Duration::from_millis(tick_rate_ms),
        };
        app.set_focus(Focus::default());
        app
    }

    pub async fn run(&mut self, mut terminal: ratatui::DefaultTerminal) -> color_eyre::Result<()> {
        // Mount: silent wallet check and initial trip list
        self.service.check_existing_connection();
        self.service.fetch_all_trips();

        let mut interval = tokio::time::interval(self.tick_rate);
        let mut events = EventStream::new();

        while !self.should_quit {
            tokio::select! {
                _ = interval.tick() => {
                    self.state.expire_notifications(Instant::now());
                    terminal.draw(|frame| self.render(frame))?;
                }
                Some(Ok(event)) = events.next() => {
                    self.handle_terminal_event(event);
                }
                Some(app_event) = self.event_rx.recv() => {
                    self.handle_app_event(app_event);
                }
            }
        }

        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        // Fill background
        frame.render_widget(
            Block::default().style(Style::default().bg(THEME.bg)),
            area,
        );

        // Layout: header (3) | form (6) | trips (fill) | status bar (1)
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(6),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        self.header.render(frame, chunks[0], &self.state);

        let form_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];
        self.trip_form.render(frame, form_area, &self.state);
        self.trip_grid.render(frame, chunks[2], &self.state);

        self.status_bar.render(frame, chunks[3], &self.state);

        // Overlays (rendered on top)
        self.toasts.render(frame, area, &self.state);
        self.success_modal.render(frame, area, &self.state);
        self.alert.render(frame, area, &self.state);
        self.help.render(frame, area);
    }

    fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.header.focused = focus == Focus::Connect;
        self.trip_grid.focused = focus == Focus::Trips;
        self.trip_form.focus = match focus {
            Focus::Location | Focus::Submit => Some(focus),
            Focus::Trips | Focus::Connect => None,
        };
    }

    fn handle_terminal_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only handle key press events (not release/repeat) for cross-platform compat
            if key.kind != KeyEventKind::Press {
                return;
            }
            self.handle_key(key);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // The alert blocks everything until dismissed
        if self.state.alert().is_some() {
            self.handle_app_event(AppEvent::AlertDismissed);
            return;
        }

        // Help overlay consumes all keys when visible
        if self.help.handle_key(key) {
            return;
        }

        if self.state.modal_open() {
            if let Some(event) = self.success_modal.handle_key(key) {
                self.handle_app_event(event);
            }
            return;
        }

        match key.code {
            KeyCode::Tab => {
                self.set_focus(self.focus.next());
                return;
            }
            KeyCode::BackTab => {
                self.set_focus(self.focus.prev());
                return;
            }
            KeyCode::Esc if self.focus.is_text_entry() => {
                self.set_focus(Focus::Submit);
                return;
            }
            KeyCode::Char('q') if !self.focus.is_text_entry() => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('?') if !self.focus.is_text_entry() => {
                self.help.toggle();
                return;
            }
            _ => {}
        }

        // Delegate to the focused component
        let app_event = match self.focus {
            Focus::Location | Focus::Submit => self.trip_form.handle_key(key, &self.state),
            Focus::Trips => self.trip_grid.handle_key(key, &self.state),
            Focus::Connect => self.header.handle_key(key, &self.state),
        };

        if let Some(event) = app_event {
            self.handle_app_event(event);
        }
    }

    fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::LocationEdited(text) => self.state.set_location(text),
            AppEvent::SubmitRequested => {
                debug!(location = self.state.location(), "submit requested");
                self.service.add_trip(self.state.location().to_string());
            }
            AppEvent::ConnectRequested => self.service.connect_wallet(),
            AppEvent::ModalClosed => self.state.set_modal_open(false),
            AppEvent::AlertDismissed => self.state.set_alert(None),
            other => self.state.apply(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::explorer::Explorer;
    use crate::data::mock::MockContract;
    use crate::data::submission::SubmissionFlow;
    use crate::data::wallet::{WalletGateway, WalletStatus};
    use crate::data::contract::TripContract;

    fn app(contract: Option<Arc<dyn TripContract>>) -> (App, mpsc::UnboundedSender<AppEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let flow = SubmissionFlow::new(contract.clone(), Explorer::default(), 300_000);
        let service = TripService::new(WalletGateway::new(None), contract, flow, tx.clone());
        (App::with_service(Arc::new(service), rx, false, 100), tx)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[tokio::test]
    async fn test_q_is_text_while_typing() {
        let (mut app, _tx) = app(None);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.state.location(), "q");

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn test_alert_swallows_next_key() {
        let (mut app, _tx) = app(None);
        app.handle_app_event(AppEvent::WalletConnectResult(WalletStatus::ProviderMissing));
        assert!(app.state.alert().is_some());

        press(&mut app, KeyCode::Char('x'));
        assert!(app.state.alert().is_none());
        assert_eq!(app.state.location(), "");
    }

    #[tokio::test]
    async fn test_modal_closes_on_esc() {
        let (mut app, _tx) = app(None);
        app.handle_app_event(AppEvent::TripConfirmed {
            link: "https://rinkeby.etherscan.io/tx/0x01".to_string(),
        });
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.state.location(), "");
        press(&mut app, KeyCode::Esc);
        assert!(!app.state.modal_open());
    }

    #[tokio::test]
    async fn test_typed_location_is_submitted() {
        let contract = Arc::new(MockContract::new(vec![]));
        let (mut app, _tx) = app(Some(contract.clone()));
        for c in "Lisbon".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);

        // drive the spawned submission to completion
        loop {
            let event = app.event_rx.recv().await.unwrap();
            let done = matches!(event, AppEvent::Phase(crate::data::submission::SubmissionPhase::Idle));
            app.handle_app_event(event);
            if done {
                break;
            }
        }
        assert_eq!(contract.submissions(), vec!["Lisbon".to_string()]);
        assert!(app.state.modal_open());
        assert!(!app.state.loading());
    }
}
