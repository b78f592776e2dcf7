//! # Application State
//!
//! The dashboard's single state record. Domain data only, no TUI types;
//! presentation state (selection, scroll) lives in the `tui` module.
//!
//! ```text
//! NewsState
//! ├── items: Vec<NewsItem>                 // server order, replaced wholesale
//! ├── loading: bool                        // list fetch in flight
//! ├── refreshing: bool                     // refresh (+ nested fetch) in flight
//! ├── error: Option<String>                // last failure message
//! └── last_updated: Option<DateTime>       // last successful fetch
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs,
//! driven by the two `NewsStore` operations.

use chrono::{DateTime, Local};

use crate::api::NewsItem;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewsState {
    pub items: Vec<NewsItem>,
    pub loading: bool,
    pub refreshing: bool,
    pub error: Option<String>,
    /// `None` until the first successful fetch, which tells an empty result
    /// apart from "not loaded yet".
    pub last_updated: Option<DateTime<Local>>,
}

impl NewsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The error to show in the banner, if any. Empty messages count as none.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref().filter(|msg| !msg.is_empty())
    }

    /// True when the empty-state hint should replace the grid.
    pub fn is_empty_state(&self) -> bool {
        self.items.is_empty() && !self.loading && self.error_message().is_none()
    }

    /// True while any request is outstanding.
    pub fn is_busy(&self) -> bool {
        self.loading || self.refreshing
    }
}
