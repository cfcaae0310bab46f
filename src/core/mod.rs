//! Page behaviour – the state machines behind every interactive widget.
//!
//! Nothing in this module depends on any TUI or rendering crate, and every
//! timer-driven type takes the current `Instant` as an argument instead of
//! reading the clock, so the whole layer can be driven from tests.

pub mod contact;
pub mod content;
pub mod debounce;
pub mod menu;
pub mod scrollspy;
pub mod slider;
pub mod tabs;
pub mod theme;
pub mod typewriter;
