//! # Actions
//!
//! Everything that can happen to the news state becomes an `Action`.
//! A list fetch starts? That's `Action::LoadStarted`.
//! The backend answers? That's `Action::NewsLoaded { .. }` or `Action::LoadFailed(msg)`.
//!
//! The `update()` function takes the current state and an action and mutates
//! it in place. No I/O here. The store performs the requests and feeds the
//! outcomes back in as actions.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```
//!
//! Both operation kinds follow the same shape:
//!
//! ```text
//! Idle ──Started──▶ InFlight ──Loaded/Accepted──▶ Success ──Settled──▶ Idle
//!                           └──Failed───────────▶ Failed  ──Settled──▶ Idle
//! ```

use chrono::{DateTime, Local};
use log::debug;

use crate::api::NewsItem;
use crate::core::state::NewsState;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A list fetch was issued.
    LoadStarted,
    /// The list fetch returned a decodable 2xx body.
    NewsLoaded {
        items: Vec<NewsItem>,
        at: DateTime<Local>,
    },
    /// The list fetch failed (status, network or decode).
    LoadFailed(String),
    /// The list fetch finished, whatever the outcome.
    LoadSettled,
    /// A refresh was requested.
    RefreshStarted,
    /// The refresh endpoint answered 2xx; a reload follows.
    RefreshAccepted,
    /// The refresh request failed; no reload follows.
    RefreshFailed(String),
    /// The refresh and any reload it triggered have finished.
    RefreshSettled,
}

/// What the caller should do after applying an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// A refresh is already running; the new one must not proceed.
    AlreadyInFlight,
}

pub fn update(state: &mut NewsState, action: Action) -> Effect {
    match action {
        Action::LoadStarted => {
            state.loading = true;
            Effect::None
        }
        Action::NewsLoaded { items, at } => {
            debug!("Replacing {} items with {}", state.items.len(), items.len());
            state.items = items;
            state.error = None;
            state.last_updated = Some(at);
            Effect::None
        }
        Action::LoadFailed(message) => {
            state.error = Some(message);
            Effect::None
        }
        Action::LoadSettled => {
            state.loading = false;
            Effect::None
        }
        Action::RefreshStarted => {
            if state.refreshing {
                return Effect::AlreadyInFlight;
            }
            state.refreshing = true;
            Effect::None
        }
        Action::RefreshAccepted => Effect::None,
        Action::RefreshFailed(message) => {
            state.error = Some(message);
            Effect::None
        }
        Action::RefreshSettled => {
            state.refreshing = false;
            Effect::None
        }
    }
}
