//! Tab strips – one active button per group, plus the two resolution rules
//! the page uses them with: resume panels found by key concatenation, and
//! project visibility decided by category match with an `all` sentinel.

/// Filter value that matches every category.
pub const FILTER_ALL: &str = "all";

/// A group of mutually exclusive buttons; exactly one is active.
#[derive(Debug)]
pub struct TabStrip {
    keys: Vec<String>,
    active: usize,
}

impl TabStrip {
    /// `None` for an empty group: no buttons means the feature is off.
    pub fn new(keys: Vec<String>) -> Option<Self> {
        if keys.is_empty() {
            return None;
        }
        Some(Self { keys, active: 0 })
    }

    /// Activate a button by position; out-of-range clicks are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.keys.len() {
            self.active = index;
        }
    }

    pub fn next(&mut self) {
        self.active = (self.active + 1) % self.keys.len();
    }

    pub fn prev(&mut self) {
        self.active = (self.active + self.keys.len() - 1) % self.keys.len();
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_key(&self) -> &str {
        &self.keys[self.active]
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }
}

/// A resume tab key resolves its content panel by suffix concatenation:
/// key `experience` shows panel `experience-content`.
pub fn panel_id(key: &str) -> String {
    format!("{key}-content")
}

/// Whether a project with `category` is visible under `filter`.
pub fn filter_shows(filter: &str, category: &str) -> bool {
    filter == FILTER_ALL || filter == category
}
