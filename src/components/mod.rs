pub mod alert;
pub mod header;
pub mod help;
pub mod notifications;
pub mod status_bar;
pub mod success_modal;
pub mod trip_form;
pub mod trip_grid;

use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::events::AppEvent;
use crate::state::ViewState;

/// Trait for focusable UI components
pub trait Component {
    /// Handle a key event, optionally returning an AppEvent
    fn handle_key(&mut self, key: KeyEvent, state: &ViewState) -> Option<AppEvent>;

    /// Render the component into the given area
    fn render(&mut self, frame: &mut Frame, area: Rect, state: &ViewState);
}

/// Which widget receives key presses. Tab order follows the variant order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Location,
    Submit,
    Trips,
    Connect,
}

impl Focus {
    const ORDER: [Focus; 4] = [Focus::Location, Focus::Submit, Focus::Trips, Focus::Connect];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Focus {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Focus {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// Whether plain character keys are text input rather than shortcuts.
    pub fn is_text_entry(self) -> bool {
        self == Focus::Location
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycles() {
        let mut focus = Focus::default();
        let mut seen = vec![focus];
        for _ in 0..4 {
            focus = focus.next();
            seen.push(focus);
        }
        assert_eq!(
            seen,
            vec![Focus::Location, Focus::Submit, Focus::Trips, Focus::Connect, Focus::Location]
        );
        assert_eq!(Focus::Location.prev(), Focus::Connect);
        assert_eq!(Focus::Submit.prev(), Focus::Location);
    }
}
