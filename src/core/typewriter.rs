//! Tagline typewriter – types a phrase out, holds, deletes it, moves on.
//!
//! The cycle for each phrase is: reveal one character per typing interval,
//! hold the full phrase, then remove one character per deleting interval and
//! advance to the next phrase, wrapping at the end of the list. Each step
//! schedules the next deadline from the moment the step actually ran, so a
//! stalled UI never causes a burst of catch-up steps.

use std::time::{Duration, Instant};

pub const TYPE_INTERVAL: Duration = Duration::from_millis(100);
pub const DELETE_INTERVAL: Duration = Duration::from_millis(50);
/// Pause with the phrase fully revealed before deleting begins.
pub const HOLD_INTERVAL: Duration = Duration::from_millis(2000);

#[derive(Debug)]
pub struct Typewriter {
    taglines: Vec<String>,
    tagline: usize,
    /// Characters of the current tagline on display, 0..=char count.
    chars: usize,
    deleting: bool,
    next_step: Instant,
    display: String,
    running: bool,
}

impl Typewriter {
    /// Parse the raw JSON tagline list from the hero section. Malformed JSON,
    /// a non-list, or an empty list disables the effect.
    pub fn from_json(raw: &str, now: Instant) -> Option<Self> {
        let taglines: Vec<String> = match serde_json::from_str(raw) {
            Ok(taglines) => taglines,
            Err(err) => {
                tracing::warn!("taglines are not a JSON string list, typewriter disabled: {err}");
                return None;
            }
        };
        Self::new(taglines, now)
    }

    pub fn new(taglines: Vec<String>, now: Instant) -> Option<Self> {
        if taglines.is_empty() {
            return None;
        }
        Some(Self {
            taglines,
            tagline: 0,
            chars: 0,
            deleting: false,
            next_step: now,
            display: String::new(),
            running: true,
        })
    }

    /// Run at most one step if its deadline has passed. Returns whether a
    /// step ran.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.running || now < self.next_step {
            return false;
        }
        self.step(now);
        true
    }

    fn step(&mut self, now: Instant) {
        let current = &self.taglines[self.tagline];
        let len = current.chars().count();

        if !self.deleting {
            self.chars = (self.chars + 1).min(len);
            self.display = current.chars().take(self.chars).collect();
            if self.chars == len {
                self.deleting = true;
                self.next_step = now + HOLD_INTERVAL;
                return;
            }
        } else {
            self.chars = self.chars.saturating_sub(1);
            self.display = current.chars().take(self.chars).collect();
            if self.chars == 0 {
                self.deleting = false;
                self.tagline = (self.tagline + 1) % self.taglines.len();
            }
        }

        self.next_step = now
            + if self.deleting {
                DELETE_INTERVAL
            } else {
                TYPE_INTERVAL
            };
    }

    /// The currently revealed prefix.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Halt the timer chain permanently. `poll` becomes a no-op.
    pub fn stop(&mut self) {
        self.running = false;
    }
}
