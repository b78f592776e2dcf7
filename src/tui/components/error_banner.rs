use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;

/// Most message lines the banner grows to before it truncates.
pub const MAX_BANNER_LINES: usize = 4;
/// Borders on each axis.
const OVERHEAD: u16 = 2;

/// Red bordered banner showing the most recent failure message.
///
/// This is the only place errors surface in the UI. The parent decides
/// whether to show it and sizes it with [`ErrorBanner::height`]; the banner
/// just renders what it's given.
pub struct ErrorBanner<'a> {
    pub message: &'a str,
}

impl<'a> ErrorBanner<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }

    /// Rows needed to show `message` in a banner `width` columns wide.
    pub fn height(message: &str, width: u16) -> u16 {
        let lines = banner_lines(message, width.saturating_sub(OVERHEAD) as usize);
        lines.len().max(1) as u16 + OVERHEAD
    }
}

/// Wraps the message, keeping at most [`MAX_BANNER_LINES`] and marking a cut
/// with `…`.
fn banner_lines(message: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let options = textwrap::Options::new(width)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace);
    let mut lines: Vec<String> = textwrap::wrap(message.trim(), options)
        .into_iter()
        .map(|line| line.into_owned())
        .collect();

    if lines.len() > MAX_BANNER_LINES {
        lines.truncate(MAX_BANNER_LINES);
        if let Some(last) = lines.last_mut() {
            while !last.is_empty() && UnicodeWidthStr::width(last.as_str()) + 1 > width {
                last.pop();
            }
            last.push('…');
        }
    }
    lines
}

impl Component for ErrorBanner<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = Style::default().fg(Color::Red);
        let width = area.width.saturating_sub(OVERHEAD) as usize;
        let lines: Vec<Line> = banner_lines(self.message, width)
            .into_iter()
            .map(Line::raw)
            .collect();
        let paragraph = Paragraph::new(lines)
            .block(
                Block::bordered()
                    .title("Error")
                    .border_style(style)
                    .title_style(style.add_modifier(Modifier::BOLD)),
            )
            .style(style);

        frame.render_widget(paragraph, area);
    }
}
