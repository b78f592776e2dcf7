use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Widget};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::api::NewsItem;

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Total horizontal space consumed by borders (1 left + 1 right) and padding.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Total vertical space consumed by borders (1 top + 1 bottom).
const VERTICAL_OVERHEAD: u16 = 2;

/// A stateless component that renders one news item as a bordered tile.
///
/// ```text
/// ┌#1──────────────────────────┐
/// │ Title of the story         │   ← link label
/// │ https://reddit.com/r/...   │   ← link target
/// │                            │
/// │ Two to five sentences of   │
/// │ explanation.               │
/// └────────────────────────────┘
/// ```
///
/// `NewsTile` is created fresh each frame by `NewsGrid`. It holds no state,
/// so the same item always renders to the same cells. Content is wrapped with
/// `textwrap` up front so [`calculate_height`](Self::calculate_height) and
/// the rendered output always agree.
#[derive(Clone, Copy)]
pub struct NewsTile<'a> {
    pub item: &'a NewsItem,
    pub is_selected: bool,
}

impl<'a> NewsTile<'a> {
    pub fn new(item: &'a NewsItem, is_selected: bool) -> Self {
        Self { item, is_selected }
    }

    /// Height needed to show the whole tile at the given width.
    pub fn calculate_height(item: &NewsItem, width: u16) -> u16 {
        let content_width = width.saturating_sub(HORIZONTAL_OVERHEAD);
        if content_width == 0 {
            // Too narrow for borders + padding; still occupy a row.
            return 1;
        }
        content_lines(item, content_width as usize).len() as u16 + VERTICAL_OVERHEAD
    }
}

fn wrap_options(width: usize) -> textwrap::Options<'static> {
    textwrap::Options::new(width)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

fn link_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

fn content_lines(item: &NewsItem, width: usize) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = textwrap::wrap(item.title.trim(), wrap_options(width))
        .into_iter()
        .map(|part| Line::from(Span::styled(part.into_owned(), link_style())))
        .collect();
    if lines.is_empty() {
        lines.push(Line::default());
    }

    // The target stays on one line so it reads as a single address.
    if !item.url.is_empty() {
        lines.push(Line::from(Span::styled(
            truncate_to_width(&item.url, width),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let explanation = item.explanation.trim();
    if !explanation.is_empty() {
        lines.push(Line::default());
        lines.extend(
            textwrap::wrap(explanation, wrap_options(width))
                .into_iter()
                .map(|part| Line::raw(part.into_owned())),
        );
    }

    lines
}

/// Cut `text` to at most `max_width` columns, marking the cut with `…`.
fn truncate_to_width(text: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(text) <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

impl Widget for NewsTile<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.is_selected {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Gray).add_modifier(Modifier::DIM)
        };

        let block = Block::bordered()
            .title(Span::styled(
                self.item.rank_label(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ))
            .border_style(border_style)
            .padding(Padding::horizontal(CONTENT_PAD_H));

        let content_width = area.width.saturating_sub(HORIZONTAL_OVERHEAD) as usize;
        let lines = if content_width == 0 {
            Vec::new()
        } else {
            content_lines(self.item, content_width)
        };

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
