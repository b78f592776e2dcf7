//! # Header Component
//!
//! Bordered top bar with the dashboard title, the time of the last successful
//! fetch, and the refresh control.
//!
//! The refresh control mirrors a button: it reads "Source File" when idle and
//! "Sourcing..." while a refresh is in flight, and renders dimmed (disabled)
//! in that state. The event loop checks [`refresh_enabled`] before acting on
//! the key, so the dimmed look and the behavior never disagree.

use chrono::{DateTime, Local};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;

pub const DASHBOARD_TITLE: &str = "Reddit AI News Summarizer";

/// Label of the refresh control for the given state.
pub fn refresh_label(refreshing: bool) -> &'static str {
    if refreshing { "Sourcing..." } else { "Source File" }
}

/// Whether the refresh control accepts activation.
pub fn refresh_enabled(refreshing: bool) -> bool {
    !refreshing
}

pub struct Header {
    pub refreshing: bool,
    pub last_updated: Option<DateTime<Local>>,
}

impl Header {
    pub fn new(refreshing: bool, last_updated: Option<DateTime<Local>>) -> Self {
        Self {
            refreshing,
            last_updated,
        }
    }

    fn control_text(&self) -> String {
        format!("[r] {}", refresh_label(self.refreshing))
    }
}

impl Component for Header {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered().border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let control = self.control_text();
        let control_width = UnicodeWidthStr::width(control.as_str()) as u16;
        let [title_area, control_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(control_width)])
                .areas(inner);

        let mut title_spans = vec![Span::styled(
            DASHBOARD_TITLE,
            Style::default().add_modifier(Modifier::BOLD),
        )];
        if let Some(at) = self.last_updated {
            title_spans.push(Span::styled(
                format!("  updated {}", at.format("%H:%M:%S")),
                Style::default().fg(Color::DarkGray),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(title_spans)), title_area);

        let control_style = if refresh_enabled(self.refreshing) {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        };
        frame.render_widget(
            Paragraph::new(Span::styled(control, control_style)),
            control_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(header: &mut Header) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 3)).unwrap();
        terminal.draw(|f| header.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_refresh_label() {
        assert_eq!(refresh_label(false), "Source File");
        assert_eq!(refresh_label(true), "Sourcing...");
    }

    #[test]
    fn test_refresh_disabled_while_refreshing() {
        assert!(refresh_enabled(false));
        assert!(!refresh_enabled(true));
    }

    #[test]
    fn test_idle_header() {
        let text = render(&mut Header::new(false, None));
        assert!(text.contains(DASHBOARD_TITLE));
        assert!(text.contains("Source File"));
        assert!(!text.contains("updated"));
    }

    #[test]
    fn test_refreshing_header() {
        let text = render(&mut Header::new(true, None));
        assert!(text.contains("Sourcing..."));
        assert!(!text.contains("Source File"));
    }

    #[test]
    fn test_last_updated_stamp() {
        let at = Local.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap();
        let text = render(&mut Header::new(false, Some(at)));
        assert!(text.contains("updated 09:26:53"));
    }
}
