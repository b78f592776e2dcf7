//! # StatusBar Component
//!
//! Bottom line showing request activity and key hints.
//!
//! Purely presentational: it receives all data as props and has no internal
//! state. The text changes with the state, highest priority first:
//!
//! 1. **Refreshing**: `"⠋ Sourcing news... | r source · ... "`
//! 2. **Loading**: `"⠋ Loading news... | ..."`
//! 3. **Notice**: `"No link for this item | ..."`
//! 4. **Idle**: `"5 items | ..."`

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::tui::component::Component;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub const KEY_HINTS: &str = "r source · ←↑↓→ move · enter open · q quit";

pub struct StatusBar<'a> {
    pub loading: bool,
    pub refreshing: bool,
    pub item_count: usize,
    pub spinner_frame: usize,
    /// One-off message from the last user action, if any.
    pub notice: Option<&'a str>,
}

impl StatusBar<'_> {
    fn status_text(&self) -> String {
        let spinner = SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()];
        if self.refreshing {
            format!("{spinner} Sourcing news...")
        } else if self.loading {
            format!("{spinner} Loading news...")
        } else if let Some(notice) = self.notice {
            notice.to_string()
        } else if self.item_count == 1 {
            "1 item".to_string()
        } else {
            format!("{} items", self.item_count)
        }
    }
}

impl Component for StatusBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let text = format!("{} | {}", self.status_text(), KEY_HINTS);
        frame.render_widget(
            Span::styled(text, Style::default().fg(Color::DarkGray)),
            area,
        );
    }
}
