//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the dashboard
//! from `NewsStore` snapshots, and translates key presses into store calls.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Busy** (a fetch or refresh in flight): draws every ~80ms so the spinner
//!   animates.
//! - **Idle**: sleeps up to 500ms, only redraws on input, resize, or when the
//!   store reports an applied action.

pub mod browser;
pub mod component;
pub mod components;
pub mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use tokio::task::JoinHandle;

use crate::api::HttpBackend;
use crate::core::config::ResolvedConfig;
use crate::core::state::NewsState;
use crate::core::store::NewsStore;
use crate::tui::browser::OpenError;
use crate::tui::component::EventHandler;
use crate::tui::components::header::refresh_enabled;
use crate::tui::components::{GridEvent, NewsGridState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of the news state)
pub struct TuiState {
    pub grid: NewsGridState,
    /// One-off status line message from the last user action.
    pub notice: Option<String>,
    /// Set once the initial list fetch has been issued.
    mounted: bool,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            grid: NewsGridState::new(),
            notice: None,
            mounted: false,
        }
    }

    /// Issues the initial `load_news()` the first time it is called for this
    /// view. Later calls do nothing.
    pub fn mount(&mut self, store: &NewsStore) -> Option<JoinHandle<()>> {
        if self.mounted {
            return None;
        }
        self.mounted = true;
        info!("Dashboard mounted, loading news");
        let store = store.clone();
        Some(tokio::spawn(async move { store.load_news().await }))
    }
}

/// Activates the refresh control. Returns `None` while the control is
/// disabled (a refresh is already running).
pub fn spawn_refresh(store: &NewsStore, state: &NewsState) -> Option<JoinHandle<()>> {
    if !refresh_enabled(state.refreshing) {
        debug!("Refresh control is disabled while sourcing");
        return None;
    }
    let store = store.clone();
    Some(tokio::spawn(async move { store.refresh().await }))
}

/// Opens the link of the item at `index` and returns the status line notice.
pub fn open_item(state: &NewsState, index: usize) -> String {
    let outcome = state
        .items
        .get(index)
        .map_or(Err(OpenError::NoLink), |item| browser::open_url(&item.url));
    match outcome {
        Ok(()) => "Opening link in browser".to_string(),
        Err(e) => e.to_string(),
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, Hide)?;
        info!("Terminal modes enabled (mouse, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    info!(
        "Using news API at {} (timeout: {:?})",
        config.api_base_url, config.request_timeout
    );
    let backend = Arc::new(HttpBackend::new(
        config.api_base_url.clone(),
        config.request_timeout,
    ));

    // Applied store actions, used as redraw triggers
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let store = NewsStore::with_observer(backend, tx);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let terminal_mode_guard = TerminalModeGuard::new()
        .inspect_err(|e| warn!("Failed to enable terminal modes: {}", e))
        .ok();

    tui.mount(&store);

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    let result = loop {
        let snapshot = store.snapshot();
        let animating = snapshot.is_busy();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            if let Err(e) = terminal.draw(|f| ui::draw_ui(f, &snapshot, &mut tui, spinner_frame)) {
                break Err(e);
            }
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match event {
                TuiEvent::Resize => {}
                TuiEvent::Quit | TuiEvent::ForceQuit => should_quit = true,
                TuiEvent::Refresh => {
                    tui.notice = None;
                    spawn_refresh(&store, &store.snapshot());
                }
                other => {
                    if let Some(GridEvent::Open(idx)) = tui.grid.handle_event(&other) {
                        tui.notice = Some(open_item(&snapshot, idx));
                    }
                }
            }
        }

        if should_quit {
            break Ok(());
        }

        // Actions applied by background store tasks
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
        }
    };

    info!("Shutting down");
    drop(terminal_mode_guard);
    ratatui::restore();
    result
}
