use ratatui::style::{Color, Modifier, Style};

use crate::state::NotificationLevel;

pub struct Theme {
    pub bg: Color,
    pub surface: Color,
    pub card: Color,
    pub text: Color,
    pub text_muted: Color,
    pub text_accent: Color,
    pub success: Color,
    pub error: Color,
    pub warning: Color,
    pub info: Color,
    pub button_bg: Color,
    pub button_fg: Color,
    pub border: Color,
    pub border_focused: Color,
    pub address_color: Color,
    pub link_color: Color,
}

pub const THEME: Theme = Theme {
    bg: Color::Rgb(238, 240, 242),
    surface: Color::Rgb(255, 255, 255),
    card: Color::Rgb(28, 28, 28),
    text: Color::Rgb(20, 20, 20),
    text_muted: Color::Rgb(110, 110, 120),
    text_accent: Color::Rgb(66, 103, 178),
    success: Color::Rgb(56, 161, 105),
    error: Color::Rgb(229, 62, 62),
    warning: Color::Rgb(214, 158, 46),
    info: Color::Rgb(49, 130, 206),
    button_bg: Color::Rgb(28, 28, 28),
    button_fg: Color::White,
    border: Color::Rgb(160, 160, 170),
    border_focused: Color::Rgb(66, 103, 178),
    address_color: Color::Rgb(255, 179, 71),
    link_color: Color::Rgb(56, 161, 105),
};

impl Theme {
    pub const fn header_style(&self) -> Style {
        Style::new().fg(self.text).bg(self.surface)
    }

    pub const fn button_style(&self) -> Style {
        Style::new().fg(self.button_fg).bg(self.button_bg).add_modifier(Modifier::BOLD)
    }

    pub const fn card_style(&self) -> Style {
        Style::new().fg(Color::White).bg(self.card)
    }

    pub const fn border_style(&self) -> Style {
        Style::new().fg(self.border)
    }

    pub const fn border_focused_style(&self) -> Style {
        Style::new().fg(self.border_focused)
    }

    /// Border for a widget depending on keyboard focus.
    pub const fn focus_style(&self, focused: bool) -> Style {
        if focused {
            self.border_focused_style()
        } else {
            self.border_style()
        }
    }

    pub const fn muted_style(&self) -> Style {
        Style::new().fg(self.text_muted)
    }

    pub const fn accent_style(&self) -> Style {
        Style::new().fg(self.text_accent)
    }

    pub const fn success_style(&self) -> Style {
        Style::new().fg(self.success)
    }

    pub const fn error_style(&self) -> Style {
        Style::new().fg(self.error)
    }

    pub const fn address_style(&self) -> Style {
        Style::new().fg(self.address_color)
    }

    pub const fn link_style(&self) -> Style {
        Style::new().fg(self.link_color).add_modifier(Modifier::UNDERLINED)
    }

    pub const fn level_color(&self, level: NotificationLevel) -> Color {
        match level {
            NotificationLevel::Success => self.success,
            NotificationLevel::Error => self.error,
            NotificationLevel::Info => self.info,
        }
    }
}
