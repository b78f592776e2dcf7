//! # Backend API
//!
//! The dashboard consumes two routes and implements neither:
//!
//! ```text
//! GET  /api/news     → 200 [{ rank, title, url, explanation }, ...]
//! POST /api/refresh  → 2xx, body ignored
//! ```
//!
//! [`NewsBackend`] is the seam: the store only sees the trait, so tests can
//! swap in stubs while the binary uses [`HttpBackend`].

mod backend;
mod client;
mod types;

pub use backend::{ApiError, Endpoint, NewsBackend};
pub use client::HttpBackend;
pub use types::NewsItem;
