//! Colour palette and text styles used across the UI.
//!
//! One resolved palette per theme mode; rendering code never names a colour
//! directly, so toggling the mode restyles every region at once.

use ratatui::style::{Color, Modifier, Style};

use crate::core::theme::Mode;

/// Central palette — change colours here and they propagate everywhere.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Page background and body text.
    pub base: Style,
    pub heading: Style,
    pub accent: Style,
    pub dim: Style,
    pub nav: Style,
    pub nav_active: Style,
    pub button: Style,
    pub button_active: Style,
    pub field: Style,
    pub field_focused: Style,
    pub success: Style,
    pub failure: Style,
    pub status_bar: Style,
}

impl Palette {
    pub fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Dark => Self::dark(),
            Mode::Light => Self::light(),
        }
    }

    fn dark() -> Self {
        Self {
            base: Style::default().fg(Color::White).bg(Color::Black),
            heading: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            accent: Style::default().fg(Color::Yellow),
            dim: Style::default().fg(Color::DarkGray),
            nav: Style::default().fg(Color::Gray),
            nav_active: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            button: Style::default().fg(Color::Gray),
            button_active: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            field: Style::default().fg(Color::White),
            field_focused: Style::default()
                .fg(Color::White)
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
            success: Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            failure: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            status_bar: Style::default().bg(Color::DarkGray).fg(Color::White),
        }
    }

    fn light() -> Self {
        Self {
            base: Style::default().fg(Color::Black).bg(Color::White),
            heading: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            accent: Style::default().fg(Color::Magenta),
            dim: Style::default().fg(Color::Gray),
            nav: Style::default().fg(Color::DarkGray),
            nav_active: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            button: Style::default().fg(Color::DarkGray),
            button_active: Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            field: Style::default().fg(Color::Black),
            field_focused: Style::default()
                .fg(Color::Black)
                .bg(Color::Gray)
                .add_modifier(Modifier::BOLD),
            success: Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            failure: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            status_bar: Style::default().bg(Color::Gray).fg(Color::Black),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_modes_are_visually_distinct() {
        let dark = Palette::for_mode(Mode::Dark);
        let light = Palette::for_mode(Mode::Light);
        assert_ne!(dark.base.bg, light.base.bg);
        assert_ne!(dark.base.fg, light.base.fg);
    }
}
