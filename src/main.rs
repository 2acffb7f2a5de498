//! hoaxwatch — a terminal client for a hoax-detection news service.
//!
//! ## Architecture overview
//!
//! ```text
//! ┌──────────┐ SyncEvent  ┌──────────┐  draw()  ┌──────────┐
//! │ sync.rs  │ ─────────► │  app.rs  │ ───────► │  ui.rs   │
//! │ (worker) │ ◄───────── │ (state)  │          │ (render) │
//! └────┬─────┘  Command   └──────────┘          └──────────┘
//!      │                       ▲
//!      ▼                       │ handle_key_event()
//! ┌──────────┐            ┌──────────┐
//! │  api/    │            │ input.rs │
//! │ (HTTP)   │            └──────────┘
//! └──────────┘
//! ```
//!
//! * **`api/`** — the `NewsApi` trait, its HTTP implementation, and the wire
//!   data model (news items, classification labels, ingestion summaries).
//! * **`sync`** — the synchronization worker: runs the load and
//!   refresh-and-reload workflows on a background thread and reports state
//!   transitions over a channel.
//! * **`app`** — owns all application state (sync state, scroll position).
//! * **`ui`** — pure rendering: reads `App` state and draws widgets.
//! * **`input`** — maps key events to `App` mutations and worker commands;
//!   enforces the in-flight guards on the refresh and reload keys.
//! * **`main`** — wires everything together: resolve the backend endpoint,
//!   set up the terminal, and run the event loop.

mod api;
mod app;
mod input;
mod sync;
mod ui;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use api::HttpNewsApi;
use app::App;
use sync::Command;

// ---------------------------------------------------------------------------
// RAII terminal guard — idiomatic cleanup even on panic
// ---------------------------------------------------------------------------

/// Manages terminal raw-mode and alternate-screen lifetime via [`Drop`].
///
/// Constructing this struct enters raw mode + alternate screen.  When the
/// value is dropped (normally or during stack unwinding) it restores the
/// terminal.  This prevents the common TUI bug where a panic leaves the
/// terminal in a broken state.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Install a panic hook that restores the terminal before printing the
/// panic message.  Without this, a panic inside the event loop would leave
/// raw mode enabled and the alternate screen active.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(info);
    }));
}

/// Diagnostics go to stderr, and only when `RUST_LOG` is set, so the
/// alternate screen stays clean during normal use.  Redirect stderr to a
/// file to capture them.
fn init_tracing() {
    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(io::stderr)
            .init();
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    install_panic_hook();
    init_tracing();

    // -- resolve the backend endpoint -----------------------------------------
    // CLI argument wins, then HOAXWATCH_API_URL, then the local fallback.
    let base_url = std::env::args()
        .nth(1)
        .unwrap_or_else(HttpNewsApi::base_url_from_env);

    // -- start the synchronization worker -------------------------------------
    let news_api = HttpNewsApi::new(base_url)?;
    let (cmd_tx, evt_rx) = sync::spawn(news_api);

    // The load workflow runs once unconditionally at startup.
    cmd_tx
        .send(Command::LoadNews)
        .map_err(|_| anyhow::anyhow!("synchronization worker exited at startup"))?;

    // -- terminal setup (RAII — Drop restores on exit or panic) --------------
    let mut guard = TerminalGuard::new()?;
    let mut app = App::new();

    // -- main event loop -------------------------------------------------------
    // Runs at ~10 fps (100 ms tick).  Each iteration:
    //   1. Drain any events from the synchronization worker.
    //   2. Render the UI.
    //   3. Poll for keyboard input (non-blocking, up to tick_rate).
    let tick_rate = Duration::from_millis(100);

    loop {
        // 1. Process sync events
        while let Ok(event) = evt_rx.try_recv() {
            app.apply(event);
        }

        // 2. Render
        guard.terminal.draw(|f| ui::draw(&mut app, f))?;

        // 3. Handle input
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                input::handle_key_event(&mut app, key, &cmd_tx);
            }
        }

        if app.quit {
            break;
        }
    }

    // `guard` is dropped here, restoring the terminal.
    Ok(())
}
