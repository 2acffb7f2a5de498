//! Keyboard input handling.
//!
//! Maps terminal key events to [`App`] mutations and worker [`Command`]s.
//! This is the interface boundary that enforces the affordance guards: `r`
//! is rejected while an ingestion is already in flight, and `l` is rejected
//! while a list fetch is outstanding, so neither workflow is re-entered from
//! the keyboard.

use std::sync::mpsc;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::app::App;
use crate::sync::Command;

/// Process a single key event, updating app state accordingly.
///
/// Only reacts to key-press events (ignoring release / repeat) so that each
/// physical keypress triggers exactly one action.
pub fn handle_key_event(app: &mut App, key: KeyEvent, commands: &mpsc::Sender<Command>) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit = true,
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        KeyCode::Home | KeyCode::Char('g') => app.select_first(),
        KeyCode::End | KeyCode::Char('G') => app.select_last(),
        KeyCode::Char('r') => {
            if !app.sync.is_fetching_rss {
                let _ = commands.send(Command::RefreshFromRss);
            }
        }
        KeyCode::Char('l') => {
            if !app.sync.is_loading {
                let _ = commands.send(Command::LoadNews);
            }
        }
        _ => {}
    }
}
