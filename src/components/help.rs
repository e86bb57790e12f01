use crossterm::event::KeyEvent;
use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::theme::THEME;
use crate::utils;

const SHORTCUTS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            ("Tab", "Next widget"),
            ("Shift+Tab", "Previous widget"),
            ("\u{2191}/k \u{2193}/j", "Scroll trips"),
            ("g / G", "First / last row of trips"),
        ],
    ),
    (
        "Trips",
        &[
            ("Enter", "Submit location (input or button)"),
            ("Ctrl+U", "Clear the location"),
            ("Enter", "Connect wallet (connect button)"),
            ("Esc", "Close success dialog"),
        ],
    ),
    (
        "Other",
        &[
            ("?", "Toggle this help"),
            ("q", "Quit (outside the input)"),
            ("Ctrl+C", "Quit"),
        ],
    ),
];

pub struct HelpOverlay {
    pub visible: bool,
}

impl HelpOverlay {
    pub fn new() -> Self {
        Self { visible: false }
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    /// Returns true if it consumed the event
    pub fn handle_key(&mut self, _key: KeyEvent) -> bool {
        if self.visible {
            self.visible = false;
            true
        } else {
            false
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        if !self.visible {
            return;
        }

        let popup_area = utils::centered_rect(area.width * 60 / 100, area.height * 70 / 100, area);

        // Clear the area behind the popup
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Keyboard Shortcuts ")
            .borders(Borders::ALL)
            .border_style(THEME.border_focused_style())
            .style(Style::default().bg(THEME.surface));

        let mut help_text = Vec::new();
        for (section, keys) in SHORTCUTS {
            if !help_text.is_empty() {
                help_text.push(Line::from(""));
            }
            help_text.push(Line::from(Span::styled(
                *section,
                Style::default()
                    .fg(THEME.text_accent)
                    .add_modifier(Modifier::BOLD),
            )));
            for (key, action) in *keys {
                help_text.push(Line::from(vec![
                    Span::styled(format!("  {key:<12}"), Style::default().fg(THEME.text_accent)),
                    Span::styled(*action, Style::default().fg(THEME.text)),
                ]));
            }
        }

        let paragraph = Paragraph::new(help_text)
            .block(block)
            .wrap(Wrap { trim: false });

        frame.render_widget(paragraph, popup_area);
    }
}
