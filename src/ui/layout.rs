//! Layout helpers — split the terminal area into regions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Below this width the header collapses its nav links behind the hamburger.
pub const NARROW_WIDTH: u16 = 70;

/// Primary screen layout: header bar, scrolling page, bottom status bar.
pub struct AppLayout {
    pub header_area: Rect,
    pub page_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Compute the layout from the full terminal area.
    pub fn from_area(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // header: nav row + rule
                Constraint::Min(3),    // page viewport (takes all remaining space)
                Constraint::Length(1), // status / hint bar
            ])
            .split(area);

        Self {
            header_area: chunks[0],
            page_area: chunks[1],
            status_area: chunks[2],
        }
    }

    /// Narrow terminals hide the inline nav links; the hamburger is the only
    /// way into navigation.
    pub fn is_narrow(&self) -> bool {
        self.header_area.width < NARROW_WIDTH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_tile_the_terminal() {
        let layout = AppLayout::from_area(Rect::new(0, 0, 100, 40));
        assert_eq!(layout.header_area.height, 2);
        assert_eq!(layout.status_area.height, 1);
        assert_eq!(layout.page_area.height, 37);
        assert!(!layout.is_narrow());
    }

    #[test]
    fn narrow_terminals_collapse_the_nav() {
        let layout = AppLayout::from_area(Rect::new(0, 0, 60, 20));
        assert!(layout.is_narrow());
    }
}
