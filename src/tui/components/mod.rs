//! # TUI Components
//!
//! All UI components for the dashboard.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as struct fields:
//! - `Header`: Title, last-updated stamp and the refresh control
//! - `ErrorBanner`: The last failure message
//! - `NewsTile`: One news item
//! - `EmptyState`: Hint shown when there is nothing to list
//! - `StatusBar`: Activity spinner and key hints
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `NewsGrid`: Scrollable tile grid; `NewsGridState` keeps selection and
//!   scroll offset between frames and turns navigation keys into `GridEvent`s
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── header.rs        (Top bar + refresh control)
//! ├── error_banner.rs  (Error channel)
//! ├── news_grid.rs     (Scrollable grid container)
//! ├── news_tile.rs     (Single item renderer)
//! ├── empty_state.rs   (No-items hint)
//! └── status_bar.rs    (Bottom line)
//! ```

pub mod empty_state;
pub mod error_banner;
pub mod header;
pub mod news_grid;
pub mod news_tile;
pub mod status_bar;

pub use empty_state::EmptyState;
pub use error_banner::{ErrorBanner, MAX_BANNER_LINES};
pub use header::Header;
pub use news_grid::{GridEvent, NewsGrid, NewsGridState};
pub use news_tile::NewsTile;
pub use status_bar::StatusBar;
