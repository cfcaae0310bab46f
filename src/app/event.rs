//! Terminal event abstraction.
//!
//! Wraps crossterm events into a simpler enum and forwards them over a
//! channel so the main loop stays non-blocking. Ticks come from their own
//! interval task rather than from poll timeouts: the typewriter, the scroll
//! easing, and the debounce deadlines all assume a steady clock, which a
//! stream of input events must not be able to starve.

use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent, MouseEvent};
use tokio::sync::mpsc;

/// High-level events consumed by the application.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Tick,
}

/// Spawns the input reader and the tick interval; both feed the returned
/// channel.
pub fn spawn_event_reader(tick_rate: Duration) -> mpsc::UnboundedReceiver<AppEvent> {
    let (tx, rx) = mpsc::unbounded_channel();

    let input_tx = tx.clone();
    tokio::task::spawn_blocking(move || {
        loop {
            // Poll with a short timeout so a dropped receiver ends the task.
            let has_event = event::poll(Duration::from_millis(100)).unwrap_or(false);
            if !has_event {
                if input_tx.is_closed() {
                    break;
                }
                continue;
            }
            if let Ok(ev) = event::read() {
                let app_event = match ev {
                    CtEvent::Key(k) => AppEvent::Key(k),
                    CtEvent::Mouse(m) => AppEvent::Mouse(m),
                    CtEvent::Resize(w, h) => AppEvent::Resize(w, h),
                    _ => continue,
                };
                if input_tx.send(app_event).is_err() {
                    break; // receiver dropped
                }
            }
        }
    });

    tokio::spawn(async move {
        let mut interval = tokio::time::interval(tick_rate);
        loop {
            interval.tick().await;
            if tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    rx
}
