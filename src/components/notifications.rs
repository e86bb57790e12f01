use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::state::ViewState;
use crate::theme::THEME;

const TOAST_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 4;

/// Stack of transient notifications in the top-right corner, newest on top.
pub struct Toasts;

impl Toasts {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &ViewState) {
        let width = TOAST_WIDTH.min(area.width);
        let x = area.right().saturating_sub(width + 1);
        let mut y = area.y + 1;

        for notification in state.notifications().iter().rev() {
            if y + TOAST_HEIGHT > area.bottom() {
                break;
            }
            let toast_area = Rect::new(x, y, width, TOAST_HEIGHT);
            frame.render_widget(Clear, toast_area);

            let color = THEME.level_color(notification.level);
            let block = Block::default()
                .title(Span::styled(
                    format!(" {} ", notification.title),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color))
                .style(Style::default().bg(THEME.surface).fg(THEME.text));

            let body = Paragraph::new(notification.description.as_str())
                .block(block)
                .wrap(Wrap { trim: true });
            frame.render_widget(body, toast_area);

            y += TOAST_HEIGHT;
        }
    }
}
