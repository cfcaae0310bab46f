//! A personal portfolio site for the terminal.
//!
//! Run the binary with a portfolio document to browse it interactively.
//! Run with `--init` to print a starter document you can edit.

mod app;
mod config;
mod core;
mod ui;

use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::app::{
    event::{spawn_event_reader, AppEvent},
    handler,
    state::AppState,
    submit,
};
use crate::core::contact::SubmitOutcome;
use crate::core::content;

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Personal portfolio for the terminal")]
struct Cli {
    /// Portfolio document to open.
    #[arg(default_value = "folio.toml")]
    content: PathBuf,

    /// Print a starter document and exit.
    #[arg(long)]
    init: bool,
}

/// Animation heartbeat. Drives the typewriter, smooth scrolling, the
/// scroll-spy quiet period and the form status countdown.
const TICK_RATE: Duration = Duration::from_millis(50);

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing (only in debug builds / when RUST_LOG is set).
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr) // never pollute stdout
        .init();

    let cli = Cli::parse();

    if cli.init {
        print!("{}", content::STARTER);
        return Ok(());
    }

    // ── load content and settings ─────────────────────────────
    let portfolio = content::load(&cli.content)
        .with_context(|| format!("failed to load {}", cli.content.display()))?;
    let user_config = config::AppConfig::load();
    let mut state = AppState::new(portfolio, user_config, Instant::now());

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    // ── async channels ────────────────────────────────────────
    let mut events = spawn_event_reader(TICK_RATE);
    let (submit_tx, mut submit_rx) = tokio::sync::mpsc::unbounded_channel::<SubmitOutcome>();
    let http = reqwest::Client::new();
    let mut tick: u64 = 0;

    // ── event loop ────────────────────────────────────────────
    loop {
        // ── draw first ─────────────────────────────────────────
        // Rendering measures the document: the section tops, the total
        // height and the hit zones all come out of the frame just drawn.
        terminal.draw(|frame| ui::render(frame, &mut state, tick))?;

        // ── settle scroll-derived state AFTER draw ─────────────
        // The geometry recorded above is what the user is looking at, so
        // the spy recomputes against it rather than a stale layout.
        if state.needs_spy_recompute {
            if let Some(geometry) = state.geometry.clone() {
                state.needs_spy_recompute = false;
                state.init_spy(&geometry.section_tops);
                if let Some(ref mut spy) = state.spy {
                    spy.recompute(&geometry.section_tops, geometry.doc_height, state.scroll);
                }
            }
        }

        // A submit requested by the handlers is spawned here, where the
        // HTTP client and the outcome channel live.
        if state.pending_submit {
            state.pending_submit = false;
            if let Some(ref mut form) = state.form {
                form.begin_submit();
                submit::spawn_submit(
                    http.clone(),
                    submit_tx.clone(),
                    form.endpoint.clone(),
                    form.payload(),
                );
            }
        }

        tokio::select! {
            biased;

            Some(event) = events.recv() => {
                match event {
                    AppEvent::Key(key) => handler::handle_key(&mut state, key),
                    AppEvent::Mouse(mouse) => handler::handle_mouse(&mut state, mouse),
                    AppEvent::Resize(_, _) => state.needs_spy_recompute = true,
                    AppEvent::Tick => {
                        tick = tick.wrapping_add(1);
                        handler::handle_tick(&mut state, Instant::now());
                    }
                }
            }

            Some(outcome) = submit_rx.recv() => {
                handler::handle_submission(&mut state, outcome, Instant::now());
            }
        }

        if state.should_quit {
            break;
        }
    }

    // ── teardown ──────────────────────────────────────────────
    if let Some(typewriter) = &mut state.typewriter {
        typewriter.stop();
    }
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}
