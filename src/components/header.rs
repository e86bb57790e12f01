use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::components::Component;
use crate::events::AppEvent;
use crate::state::ViewState;
use crate::theme::THEME;
use crate::utils;

const BUTTON_WIDTH: u16 = 22;

/// Title bar with the connect / account button.
pub struct Header {
    pub focused: bool,
}

impl Header {
    pub fn new() -> Self {
        Self { focused: false }
    }
}

/// "Connect" until an account is known, then the truncated account.
pub fn connect_label(state: &ViewState) -> String {
    match state.account() {
        Some(account) if state.connected() => utils::truncate_address(&account),
        _ => "Connect".to_string(),
    }
}

impl Component for Header {
    fn handle_key(&mut self, key: KeyEvent, state: &ViewState) -> Option<AppEvent> {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') if !state.connected() => {
                Some(AppEvent::ConnectRequested)
            }
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &ViewState) {
        frame.render_widget(Block::default().style(THEME.header_style()), area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(BUTTON_WIDTH),
                Constraint::Length(2),
            ])
            .split(area);

        let title = Paragraph::new(Line::from(vec![
            Span::styled(
                " Trip Adder",
                Style::default()
                    .fg(THEME.text_accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  share where you've been, on-chain", THEME.muted_style()),
        ]))
        .block(Block::default().padding(Padding::vertical(1)));
        frame.render_widget(title, chunks[0]);

        let button = Paragraph::new(Span::styled(connect_label(state), THEME.button_style()))
            .alignment(Alignment::Center)
            .style(THEME.button_style())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(THEME.focus_style(self.focused)),
            );
        frame.render_widget(button, chunks[1]);
    }
}
