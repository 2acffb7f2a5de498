//! Backend synchronization.
//!
//! The two client workflows — loading the news list and triggering an RSS
//! ingestion followed by a reload — run on a dedicated worker thread that
//! owns the [`NewsApi`] implementation.  Commands go in over one [`mpsc`]
//! channel, [`SyncEvent`]s come back over another, and the UI thread applies
//! them to [`SyncState`] on every tick.
//!
//! Because the worker processes commands strictly sequentially, the reload
//! that follows a successful ingestion can never overlap the ingestion call
//! itself.  The ingestion summary is surfaced as an event (a notice string in
//! the state), never as a blocking prompt, so the whole state machine is
//! testable without a terminal.

use std::sync::mpsc;
use std::thread;

use tracing::{info, warn};

use crate::api::{ApiError, IngestSummary, NewsApi, NewsItem, DEFAULT_LIST_LIMIT};

/// Generic notice shown when the list fetch fails.
pub const LOAD_FAILED_NOTICE: &str = "Failed to load news. Check that the backend is running.";

/// Generic notice shown when the ingestion trigger fails.
pub const REFRESH_FAILED_NOTICE: &str = "Failed to ingest new articles from RSS.";

/// Requests sent from the UI thread to the worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Workflow A: fetch the news list and replace the displayed items.
    LoadNews,
    /// Workflow B: trigger RSS ingestion, then reload the list on success.
    RefreshFromRss,
}

/// State transitions reported by the worker.
#[derive(Debug, Clone, PartialEq)]
pub enum SyncEvent {
    LoadStarted,
    LoadFinished(Vec<NewsItem>),
    LoadFailed,
    RefreshStarted,
    /// Ingestion succeeded; carries the backend's summary.  The follow-up
    /// reload is reported through the `Load*` events that come next.
    RefreshSummary(IngestSummary),
    RefreshFailed,
    /// The whole refresh-and-reload workflow has settled.
    RefreshSettled,
}

/// Client-visible synchronization state.
///
/// Mutated only by [`SyncState::apply`] on the UI thread; the presentation
/// layer reads it and nothing else writes to it.
#[derive(Debug, Default)]
pub struct SyncState {
    /// Current news collection, exactly as the backend returned it.
    pub items: Vec<NewsItem>,
    /// True while a list fetch is outstanding.
    pub is_loading: bool,
    /// True from ingestion start until the refresh-and-reload settles.
    pub is_fetching_rss: bool,
    /// Generic failure notice; cleared when the next attempt starts.
    pub error: Option<String>,
    /// Latest ingestion summary, shown in the status bar.
    pub notice: Option<String>,
}

impl SyncState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one worker event.  Pure state transition, no I/O.
    pub fn apply(&mut self, event: SyncEvent) {
        match event {
            SyncEvent::LoadStarted => {
                self.is_loading = true;
                self.error = None;
            }
            SyncEvent::LoadFinished(items) => {
                // An empty list is a valid result, not an error.
                self.items = items;
                self.is_loading = false;
            }
            SyncEvent::LoadFailed => {
                // Stale items stay on screen alongside the notice.
                self.error = Some(LOAD_FAILED_NOTICE.to_string());
                self.is_loading = false;
            }
            SyncEvent::RefreshStarted => {
                self.is_fetching_rss = true;
                self.error = None;
                self.notice = None;
            }
            SyncEvent::RefreshSummary(summary) => {
                self.notice = Some(format!(
                    "{} (processed: {}, skipped: {})",
                    summary.message, summary.processed, summary.skipped
                ));
            }
            SyncEvent::RefreshFailed => {
                self.error = Some(REFRESH_FAILED_NOTICE.to_string());
                self.is_fetching_rss = false;
            }
            SyncEvent::RefreshSettled => {
                self.is_fetching_rss = false;
            }
        }
    }
}

/// Spawn the worker thread that executes commands against the backend.
///
/// Returns the command sender and the event receiver.  The thread exits when
/// either channel end is dropped.
pub fn spawn(api: impl NewsApi + 'static) -> (mpsc::Sender<Command>, mpsc::Receiver<SyncEvent>) {
    let (cmd_tx, cmd_rx) = mpsc::channel::<Command>();
    let (evt_tx, evt_rx) = mpsc::channel::<SyncEvent>();

    thread::spawn(move || {
        while let Ok(cmd) = cmd_rx.recv() {
            // A send error means the UI thread has exited; stop quietly.
            if run_command(&api, cmd, &evt_tx).is_err() {
                return;
            }
        }
    });

    (cmd_tx, evt_rx)
}

/// Execute one command, reporting progress over `tx`.
///
/// Split out from the thread loop so tests can drive the workflows with a
/// fake [`NewsApi`] and inspect the exact event sequence.
fn run_command(
    api: &dyn NewsApi,
    cmd: Command,
    tx: &mpsc::Sender<SyncEvent>,
) -> Result<(), mpsc::SendError<SyncEvent>> {
    match cmd {
        Command::LoadNews => load(api, tx),
        Command::RefreshFromRss => {
            tx.send(SyncEvent::RefreshStarted)?;
            match api.trigger_rss_ingestion() {
                Ok(summary) => {
                    info!(
                        processed = summary.processed,
                        skipped = summary.skipped,
                        "RSS ingestion finished"
                    );
                    tx.send(SyncEvent::RefreshSummary(summary))?;
                    // Reload strictly after the trigger call has resolved.
                    load(api, tx)?;
                    tx.send(SyncEvent::RefreshSettled)
                }
                Err(err) => {
                    log_failure("RSS ingestion", &err);
                    tx.send(SyncEvent::RefreshFailed)
                }
            }
        }
    }
}

/// Workflow A: one list fetch, reported as started/finished/failed.
fn load(api: &dyn NewsApi, tx: &mpsc::Sender<SyncEvent>) -> Result<(), mpsc::SendError<SyncEvent>> {
    tx.send(SyncEvent::LoadStarted)?;
    match api.list_news(DEFAULT_LIST_LIMIT) {
        Ok(items) => tx.send(SyncEvent::LoadFinished(items)),
        Err(err) => {
            log_failure("news list fetch", &err);
            tx.send(SyncEvent::LoadFailed)
        }
    }
}

/// The user sees one generic notice per workflow; the underlying error kind
/// only goes to the log.
fn log_failure(what: &str, err: &ApiError) {
    warn!(error = %err, "{what} failed");
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
