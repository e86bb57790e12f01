use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::events::AppEvent;
use crate::state::ViewState;
use crate::theme::THEME;
use crate::utils;

/// Shown once a trip transaction is confirmed.
pub struct SuccessModal;

impl SuccessModal {
    pub fn new() -> Self {
        Self
    }

    /// Consumes every key while open; Enter or Esc closes it.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<AppEvent> {
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('c') => Some(AppEvent::ModalClosed),
            _ => None,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &ViewState) {
        if !state.modal_open() {
            return;
        }

        let link = state.confirmation_link().unwrap_or_default();
        let width = (link.len() as u16 + 6).max(50);
        let popup_area = utils::centered_rect(width, 9, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(Span::styled(
                " Success ",
                THEME.success_style().add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(THEME.success_style())
            .style(Style::default().bg(THEME.surface).fg(THEME.text))
            .padding(Padding::horizontal(2));

        let text = vec![
            Line::from(""),
            Line::from("Congrats! You submitted a location, check out the transaction here:"),
            Line::from(""),
            Line::from(Span::styled(link.to_string(), THEME.link_style())),
            Line::from(""),
            Line::from(Span::styled("[Enter] Close", THEME.muted_style())).alignment(Alignment::Right),
        ];

        let paragraph = Paragraph::new(text).block(block).wrap(Wrap { trim: false });
        frame.render_widget(paragraph, popup_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::TxHash;
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_closes_on_enter() {
        let mut modal = SuccessModal::new();
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert!(matches!(modal.handle_key(enter), Some(AppEvent::ModalClosed)));
        let other = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert!(modal.handle_key(other).is_none());
    }

    #[test]
    fn test_renders_link_only_when_open() {
        let link = format!("https://rinkeby.etherscan.io/tx/{}", TxHash::ZERO);
        let mut state = ViewState::new();
        let draw = |state: &ViewState| {
            let mut terminal = Terminal::new(TestBackend::new(120, 20)).unwrap();
            terminal
                .draw(|frame| SuccessModal::new().render(frame, frame.area(), state))
                .unwrap();
            terminal
                .backend()
                .buffer()
                .content()
                .iter()
                .map(|cell| cell.symbol())
                .collect::<String>()
        };

        assert!(!draw(&state).contains("Success"));

        state.apply(AppEvent::TripConfirmed {
            link: link.clone(),
        });
        let screen = draw(&state);
        assert!(screen.contains("Success"));
        assert!(screen.contains(&link));
    }
}
