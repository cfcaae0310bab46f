//! Collapsed navigation menu – an explicit open/closed flag plus a cursor.
//!
//! The trigger glyph is derived from the flag rather than stored, so the two
//! can never drift apart.

pub const CLOSED_ICON: &str = "≡";
pub const OPEN_ICON: &str = "✕";

#[derive(Debug, Default)]
pub struct NavMenu {
    open: bool,
    /// Highlighted entry while the panel is open.
    pub selected: usize,
}

impl NavMenu {
    /// Flip between open and closed. Opening resets the cursor to the top.
    pub fn toggle(&mut self) {
        self.open = !self.open;
        if self.open {
            self.selected = 0;
        }
    }

    /// Close unconditionally: link activation, Escape, and clicks outside
    /// the panel all land here.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn icon(&self) -> &'static str {
        if self.open {
            OPEN_ICON
        } else {
            CLOSED_ICON
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self, entries: usize) {
        if self.selected + 1 < entries {
            self.selected += 1;
        }
    }
}
