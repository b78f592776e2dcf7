//! # Core Application Logic
//!
//! The dashboard's business logic. It knows nothing about any specific UI
//! technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • NewsState (data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • NewsStore (async ops)│
//!                    └───────────┬─────────────┘
//!                                │ snapshot() / Action feed
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `NewsState` record
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`store`]: `NewsStore`, which runs `load_news()` / `refresh()` against a backend
//! - [`config`]: Layered configuration

pub mod action;
pub mod config;
pub mod state;
pub mod store;

pub use store::NewsStore;
