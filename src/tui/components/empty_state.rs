//! # Empty State Component
//!
//! Shown in place of the grid when a fetch has completed (or none has run)
//! with no items and nothing went wrong. Points the user at the refresh control.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Wrap};

use crate::tui::component::Component;
use crate::tui::components::header::refresh_label;

pub fn empty_state_message() -> String {
    format!(
        "No news available. Press \"r\" ({}) to fetch.",
        refresh_label(false)
    )
}

pub struct EmptyState;

impl Component for EmptyState {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [centered] = Layout::vertical([Constraint::Length(2)])
            .flex(Flex::Center)
            .areas(area);

        let paragraph = Paragraph::new(Line::from(empty_state_message()))
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        frame.render_widget(paragraph, centered);
    }
}
