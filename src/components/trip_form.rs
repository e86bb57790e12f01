use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::*;
use unicode_width::UnicodeWidthChar;

use crate::components::{Component, Focus};
use crate::events::AppEvent;
use crate::state::ViewState;
use crate::theme::THEME;

const SUBMIT_WIDTH: u16 = 24;

/// Location input plus submit button. The text lives in `ViewState`;
/// only the cursor (in chars) and the horizontal scroll (in columns) are
/// kept here.
pub struct TripForm {
    pub focus: Option<Focus>,
    cursor: usize,
    scroll: usize,
}

/// Terminal columns taken by the first `chars` characters of `text`.
fn display_width(text: &str, chars: usize) -> usize {
    text.chars().take(chars).map(|c| c.width().unwrap_or(0)).sum()
}

impl TripForm {
    pub fn new() -> Self {
        Self {
            focus: Some(Focus::Location),
            cursor: 0,
            scroll: 0,
        }
    }

    /// Scroll so the cursor stays inside a box `width` columns wide and
    /// return the cursor column relative to the box.
    fn scroll_to_cursor(&mut self, text: &str, width: usize) -> usize {
        let column = display_width(text, self.cursor);
        if column < self.scroll {
            self.scroll = column;
        } else if column >= self.scroll + width {
            self.scroll = column + 1 - width;
        }
        column - self.scroll
    }

    fn input_focused(&self) -> bool {
        self.focus == Some(Focus::Location)
    }

    fn submit_focused(&self) -> bool {
        self.focus == Some(Focus::Submit)
    }

    fn edit_key(&mut self, key: KeyEvent, text: &str) -> Option<AppEvent> {
        let mut chars: Vec<char> = text.chars().collect();
        self.cursor = self.cursor.min(chars.len());

        match key.code {
            KeyCode::Enter => return Some(AppEvent::SubmitRequested),
            KeyCode::Backspace => {
                if self.cursor == 0 {
                    return None;
                }
                self.cursor -= 1;
                chars.remove(self.cursor);
            }
            KeyCode::Delete => {
                if self.cursor >= chars.len() {
                    return None;
                }
                chars.remove(self.cursor);
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                return None;
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(chars.len());
                return None;
            }
            KeyCode::Home => {
                self.cursor = 0;
                return None;
            }
            KeyCode::End => {
                self.cursor = chars.len();
                return None;
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                chars.clear();
                self.cursor = 0;
            }
            KeyCode::Char(c) => {
                chars.insert(self.cursor, c);
                self.cursor += 1;
            }
            _ => return None,
        }

        Some(AppEvent::LocationEdited(chars.into_iter().collect()))
    }
}

impl Component for TripForm {
    fn handle_key(&mut self, key: KeyEvent, state: &ViewState) -> Option<AppEvent> {
        if self.input_focused() {
            return self.edit_key(key, state.location());
        }
        if self.submit_focused() {
            return match key.code {
                // the button is disabled while a submission is loading
                KeyCode::Enter | KeyCode::Char(' ') if !state.loading() => {
                    Some(AppEvent::SubmitRequested)
                }
                _ => None,
            };
        }
        None
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &ViewState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(3)])
            .split(area);

        // -- Location input --
        let input_block = Block::default()
            .title(" Location ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(THEME.focus_style(self.input_focused()))
            .style(Style::default().bg(THEME.surface));
        let inner = input_block.inner(chunks[0]);
        frame.render_widget(input_block, chunks[0]);

        let location = state.location();
        self.cursor = self.cursor.min(location.chars().count());
        let cursor_column = self.scroll_to_cursor(location, usize::from(inner.width).max(1));

        let text = if location.is_empty() {
            Span::styled("Enter a location", THEME.muted_style())
        } else {
            Span::styled(location, Style::default().fg(THEME.text))
        };
        let scroll = u16::try_from(self.scroll).unwrap_or(u16::MAX);
        frame.render_widget(Paragraph::new(text).scroll((0, scroll)), inner);

        if self.input_focused() && inner.width > 0 {
            let cursor_x = inner.x.saturating_add(u16::try_from(cursor_column).unwrap_or(u16::MAX));
            if cursor_x < inner.right() {
                frame.set_cursor_position((cursor_x, inner.y));
            }
        }

        // -- Submit button --
        let button_row = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(SUBMIT_WIDTH),
                Constraint::Min(0),
            ])
            .split(chunks[1]);

        let (label, style) = if state.loading() {
            ("Submitting...", THEME.muted_style().bg(THEME.surface))
        } else {
            ("Submit", THEME.button_style())
        };
        let button = Paragraph::new(label)
            .alignment(Alignment::Center)
            .style(style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(THEME.focus_style(self.submit_focused())),
            );
        frame.render_widget(button, button_row[1]);
    }
}
