use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::data::submission::SubmissionPhase;
use crate::state::ViewState;
use crate::theme::THEME;
use crate::utils;

pub struct StatusBar {
    pub provider_present: bool,
}

impl StatusBar {
    pub fn new(provider_present: bool) -> Self {
        Self { provider_present }
    }

    fn phase_text(phase: SubmissionPhase) -> Option<String> {
        match phase {
            SubmissionPhase::Submitting => Some(" Waiting for wallet signature...".to_string()),
            SubmissionPhase::AwaitingConfirmation(hash) => {
                Some(format!(" Mining {}...", utils::truncate_hash(&hash)))
            }
            SubmissionPhase::Refreshing => Some(" Refreshing trips...".to_string()),
            SubmissionPhase::Idle | SubmissionPhase::Validating | SubmissionPhase::Error => None,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &ViewState) {
        let bg = Block::default().style(THEME.header_style());
        frame.render_widget(bg, area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(36)])
            .split(area);

        // --- Left side ---
        let left_content = if let Some(text) = Self::phase_text(state.phase()) {
            Line::from(Span::styled(text, Style::default().fg(THEME.text_accent)))
        } else if let Some(message) = state.status_message() {
            Line::from(vec![
                Span::styled(
                    " ! ",
                    Style::default()
                        .fg(THEME.error)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(message, Style::default().fg(THEME.warning)),
            ])
        } else {
            Line::from(vec![
                Span::styled(" Tab", Style::default().fg(THEME.text_accent)),
                Span::styled(":Focus  ", THEME.muted_style()),
                Span::styled("Enter", Style::default().fg(THEME.text_accent)),
                Span::styled(":Submit/Connect  ", THEME.muted_style()),
                Span::styled("?", Style::default().fg(THEME.text_accent)),
                Span::styled(":Help  ", THEME.muted_style()),
                Span::styled("Ctrl+C", Style::default().fg(THEME.text_accent)),
                Span::styled(":Quit", THEME.muted_style()),
            ])
        };

        let left = Paragraph::new(left_content).style(THEME.header_style());
        frame.render_widget(left, chunks[0]);

        // --- Right side: wallet provider + chain ---
        let (dot_color, status_text) = match (self.provider_present, state.connected()) {
            (false, _) => (THEME.error, "No wallet"),
            (true, false) => (THEME.warning, "Wallet found"),
            (true, true) => (THEME.success, "Connected"),
        };

        let chain = state
            .chain_id()
            .map(|id| format!("chain {id} "))
            .unwrap_or_default();

        let right_content = Line::from(vec![
            Span::styled("\u{25cf} ", Style::default().fg(dot_color)),
            Span::styled(status_text, Style::default().fg(dot_color)),
            Span::styled(" | ", THEME.muted_style()),
            Span::styled(chain, THEME.accent_style()),
        ]);

        let right = Paragraph::new(right_content)
            .alignment(Alignment::Right)
            .style(THEME.header_style());
        frame.render_widget(right, chunks[1]);
    }
}
