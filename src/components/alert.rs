use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::state::ViewState;
use crate::theme::THEME;
use crate::utils;

/// Blocking alert; while visible the app routes every key to dismissing it.
pub struct AlertOverlay;

impl AlertOverlay {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &ViewState) {
        let Some(message) = state.alert() else {
            return;
        };

        let popup_area = utils::centered_rect(60, 7, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Alert ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(THEME.error_style())
            .style(Style::default().bg(THEME.surface).fg(THEME.text))
            .padding(Padding::horizontal(1));

        let text = vec![
            Line::from(message.to_string()),
            Line::from(""),
            Line::from(Span::styled("Press any key to continue", THEME.muted_style())),
        ];

        let paragraph = Paragraph::new(text)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, popup_area);
    }
}
