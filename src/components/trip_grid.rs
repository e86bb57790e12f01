use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::components::Component;
use crate::data::types::TripRecord;
use crate::events::AppEvent;
use crate::state::ViewState;
use crate::theme::THEME;
use crate::utils;

const COLUMNS: usize = 3;
const CARD_HEIGHT: u16 = 5;

/// Submitted trips as a grid of cards, three per row.
pub struct TripGrid {
    pub focused: bool,
    first_row: usize,
    scroll_state: ScrollbarState,
}

impl TripGrid {
    pub fn new() -> Self {
        Self {
            focused: false,
            first_row: 0,
            scroll_state: ScrollbarState::default(),
        }
    }

    fn row_count(trips: usize) -> usize {
        trips.div_ceil(COLUMNS)
    }

    fn scroll_down(&mut self, trips: usize) {
        let rows = Self::row_count(trips);
        if self.first_row + 1 < rows {
            self.first_row += 1;
        }
    }

    fn scroll_up(&mut self) {
        self.first_row = self.first_row.saturating_sub(1);
    }
}

fn card(trip: &TripRecord) -> Paragraph<'static> {
    let line = |label: &'static str, value: String, style: Style| {
        Line::from(vec![
            Span::styled(label, Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(value, style),
        ])
    };

    Paragraph::new(vec![
        line("Creator: ", format!("{}", trip.creator), THEME.address_style()),
        line("Time: ", utils::format_trip_time(trip.timestamp.as_ref()), Style::default()),
        line("Location: ", trip.location.clone(), Style::default()),
    ])
    .style(THEME.card_style())
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(THEME.card_style())
            .padding(Padding::horizontal(1)),
    )
}

impl Component for TripGrid {
    fn handle_key(&mut self, key: KeyEvent, state: &ViewState) -> Option<AppEvent> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.scroll_down(state.trips().len()),
            KeyCode::Char('k') | KeyCode::Up => self.scroll_up(),
            KeyCode::Char('g') => self.first_row = 0,
            KeyCode::Char('G') => {
                self.first_row = Self::row_count(state.trips().len()).saturating_sub(1);
            }
            _ => {}
        }
        None
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &ViewState) {
        let trips = state.trips();
        let outer = Block::default()
            .title(format!(" Trips ({}) ", trips.len()))
            .borders(Borders::ALL)
            .border_style(THEME.focus_style(self.focused))
            .style(Style::default().bg(THEME.bg));
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        if trips.is_empty() {
            let empty = Paragraph::new("No trips yet")
                .style(THEME.muted_style())
                .alignment(Alignment::Center);
            frame.render_widget(empty, inner);
            return;
        }

        let rows = Self::row_count(trips.len());
        self.first_row = self.first_row.min(rows.saturating_sub(1));
        let visible_rows = usize::from((inner.height / CARD_HEIGHT).max(1));

        let row_areas = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Length(CARD_HEIGHT); visible_rows])
            .split(inner);

        for (slot, row) in (self.first_row..rows).take(visible_rows).enumerate() {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Ratio(1, COLUMNS as u32); COLUMNS])
                .split(row_areas[slot]);

            let start = row * COLUMNS;
            let end = (start + COLUMNS).min(trips.len());
            for (col, trip) in trips[start..end].iter().enumerate() {
                frame.render_widget(card(trip), cols[col]);
            }
        }

        if rows > visible_rows {
            self.scroll_state = self
                .scroll_state
                .content_length(rows)
                .position(self.first_row);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight),
                area,
                &mut self.scroll_state,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::Address;
    use chrono::DateTime;
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;

    fn trip(location: &str) -> TripRecord {
        TripRecord {
            creator: Address::repeat_byte(0xab),
            timestamp: DateTime::from_timestamp(1_700_000_000, 0),
            location: location.to_string(),
        }
    }

    fn screen(grid: &mut TripGrid, state: &ViewState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| grid.render(frame, frame.area(), state))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_row_count() {
        assert_eq!(TripGrid::row_count(0), 0);
        assert_eq!(TripGrid::row_count(3), 1);
        assert_eq!(TripGrid::row_count(4), 2);
    }

    #[test]
    fn test_renders_cards() {
        let mut state = ViewState::new();
        state.set_trips(vec![trip("Paris"), trip("Kyoto")]);
        let mut grid = TripGrid::new();
        let out = screen(&mut grid, &state, 150, 12);
        assert!(out.contains("Trips (2)"));
        assert!(out.contains("Location: Paris"));
        assert!(out.contains("Location: Kyoto"));
        assert!(out.contains("Time: Tue Nov 14 2023"));
    }

    #[test]
    fn test_empty_grid() {
        let state = ViewState::new();
        let mut grid = TripGrid::new();
        assert!(screen(&mut grid, &state, 60, 8).contains("No trips yet"));
    }

    #[test]
    fn test_scrolling_is_bounded() {
        let mut state = ViewState::new();
        state.set_trips((0..7).map(|i| trip(&format!("City {i}"))).collect());
        let mut grid = TripGrid::new();
        let down = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
        for _ in 0..10 {
            grid.handle_key(down, &state);
        }
        assert_eq!(grid.first_row, 2);

        grid.handle_key(KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE), &state);
        assert_eq!(grid.first_row, 0);
    }
}
