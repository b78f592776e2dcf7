//! # NewsGrid Component
//!
//! Scrollable, responsive grid of [`NewsTile`]s.
//!
//! ## Architecture
//!
//! `NewsGrid` is a transient component (created each frame) that wraps
//! `&'a mut NewsGridState` (persistent state) and the item slice (props).
//!
//! Tiles are addressed by their position in the list, not by rank: selection
//! and layout both key on the index, so a reload that keeps the list length
//! keeps the selection where it was.
//!
//! Items flow row-major: with three columns, items 0..3 fill the first row,
//! 3..6 the second, and so on. Each row is as tall as its tallest tile.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::api::NewsItem;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::news_tile::NewsTile;
use crate::tui::event::TuiEvent;

/// Narrowest a tile may get before the grid drops a column.
pub const MIN_TILE_WIDTH: u16 = 36;
/// Upper bound on columns, however wide the terminal.
pub const MAX_COLUMNS: usize = 4;

/// High-level events emitted by the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridEvent {
    /// Open the link of the tile at this index.
    Open(usize),
}

/// Selection and scroll state for the grid.
/// Must be persisted in the parent TuiState.
#[derive(Default)]
pub struct NewsGridState {
    pub scroll_state: ScrollViewState,
    pub selected_index: Option<usize>,
    /// Item count seen on the last render (for clamping between frames).
    pub item_count: usize,
    /// Column count used on the last render.
    pub columns: usize,
    /// Cumulative row bottoms: `row_bottoms[r]` is the y just below row `r`.
    pub row_bottoms: Vec<u16>,
    /// Last known viewport height (for scroll clamping between frames)
    pub viewport_height: u16,
}

impl NewsGridState {
    pub fn new() -> Self {
        Self {
            columns: 1,
            ..Self::default()
        }
    }

    /// Keep the selection inside `0..item_count` after the list changes.
    pub fn sync_item_count(&mut self, item_count: usize) {
        self.item_count = item_count;
        self.selected_index = match self.selected_index {
            _ if item_count == 0 => None,
            Some(idx) => Some(idx.min(item_count - 1)),
            None => None,
        };
    }

    fn select(&mut self, idx: usize) {
        if self.item_count > 0 {
            self.selected_index = Some(idx.min(self.item_count - 1));
        }
    }

    fn move_by(&mut self, delta: isize) {
        if self.item_count == 0 {
            return;
        }
        let target = match self.selected_index {
            Some(idx) => (idx as isize + delta).clamp(0, self.item_count as isize - 1) as usize,
            None => 0,
        };
        self.select(target);
    }

    /// Scroll the viewport so the selected tile's row is fully visible.
    /// Rows taller than the viewport align their top edge.
    pub fn scroll_to_selected(&mut self) {
        let Some(idx) = self.selected_index else {
            return;
        };
        let row = idx / self.columns.max(1);
        let Some(&row_bottom) = self.row_bottoms.get(row) else {
            return;
        };
        let row_top = if row == 0 { 0 } else { self.row_bottoms[row - 1] };
        let offset_y = self.scroll_state.offset().y;

        if row_top < offset_y || row_bottom - row_top > self.viewport_height {
            self.scroll_state.set_offset(Position { x: 0, y: row_top });
        } else if row_bottom > offset_y + self.viewport_height {
            let new_y = row_bottom.saturating_sub(self.viewport_height);
            self.scroll_state.set_offset(Position { x: 0, y: new_y });
        }
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    pub fn clamp_scroll(&mut self) {
        let total = self.row_bottoms.last().copied().unwrap_or(0);
        let max_y = total.saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }
}

impl EventHandler for NewsGridState {
    type Event = GridEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<GridEvent> {
        let columns = self.columns.max(1) as isize;
        match event {
            TuiEvent::SelectNext => self.move_by(1),
            TuiEvent::SelectPrev => self.move_by(-1),
            TuiEvent::SelectDown => self.move_by(columns),
            TuiEvent::SelectUp => self.move_by(-columns),
            TuiEvent::SelectFirst => self.select(0),
            TuiEvent::SelectLast => self.select(self.item_count.saturating_sub(1)),
            TuiEvent::OpenSelected => return self.selected_index.map(GridEvent::Open),
            _ => return None,
        }
        self.scroll_to_selected();
        None
    }
}

/// How many columns fit in `width`.
pub fn column_count(width: u16) -> usize {
    ((width / MIN_TILE_WIDTH) as usize).clamp(1, MAX_COLUMNS)
}

/// Scrollable grid view component.
/// Created fresh each frame with references to state and data.
pub struct NewsGrid<'a> {
    pub state: &'a mut NewsGridState,
    pub items: &'a [NewsItem],
}

impl<'a> NewsGrid<'a> {
    pub fn new(state: &'a mut NewsGridState, items: &'a [NewsItem]) -> Self {
        Self { state, items }
    }
}

impl Component for NewsGrid<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // -1 for scrollbar safe area
        let columns = column_count(content_width);
        let tile_width = content_width / columns as u16;

        // 1. Layout: one height per row, tallest tile wins.
        self.state.columns = columns;
        self.state.sync_item_count(self.items.len());
        self.state.row_bottoms.clear();
        let mut bottom: u16 = 0;
        for row in self.items.chunks(columns) {
            let height = row
                .iter()
                .map(|item| NewsTile::calculate_height(item, tile_width))
                .max()
                .unwrap_or(0);
            bottom = bottom.saturating_add(height);
            self.state.row_bottoms.push(bottom);
        }
        let total_height = bottom;
        if total_height == 0 {
            return;
        }

        // 2. Keep the viewport within bounds and on the selection.
        self.state.viewport_height = area.height;
        self.state.clamp_scroll();
        self.state.scroll_to_selected();

        // 3. Render every tile into the ScrollView canvas.
        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        for (index, item) in self.items.iter().enumerate() {
            let row = index / columns;
            let col = (index % columns) as u16;
            let row_top = if row == 0 { 0 } else { self.state.row_bottoms[row - 1] };
            let row_height = self.state.row_bottoms[row] - row_top;

            let tile_rect = Rect::new(col * tile_width, row_top, tile_width, row_height);
            let is_selected = self.state.selected_index == Some(index);
            scroll_view.render_widget(NewsTile::new(item, is_selected), tile_rect);
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::news_item;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(state: &mut NewsGridState, items: &[NewsItem], width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| NewsGrid::new(state, items).render(f, f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_column_count() {
        assert_eq!(column_count(0), 1);
        assert_eq!(column_count(35), 1);
        assert_eq!(column_count(72), 2);
        assert_eq!(column_count(110), 3);
        assert_eq!(column_count(500), MAX_COLUMNS);
    }

    #[test]
    fn test_tiles_render_in_list_order() {
        let items = vec![
            news_item(3, "Charlie"),
            news_item(1, "Alpha"),
            news_item(2, "Bravo"),
        ];
        let mut state = NewsGridState::new();
        let text = render(&mut state, &items, 40, 40);

        let charlie = text.find("Charlie").unwrap();
        let alpha = text.find("Alpha").unwrap();
        let bravo = text.find("Bravo").unwrap();
        assert!(charlie < alpha);
        assert!(alpha < bravo);
    }

    #[test]
    fn test_multi_column_row_major_order() {
        let items = vec![news_item(1, "First"), news_item(2, "Second")];
        let mut state = NewsGridState::new();
        let text = render(&mut state, &items, 81, 10);

        assert_eq!(state.columns, 2);
        assert_eq!(state.row_bottoms.len(), 1);
        assert!(text.find("First").unwrap() < text.find("Second").unwrap());
    }

    #[test]
    fn test_duplicate_ranks_all_render() {
        let items = vec![news_item(1, "One"), news_item(1, "Uno")];
        let mut state = NewsGridState::new();
        let text = render(&mut state, &items, 40, 30);
        assert!(text.contains("One"));
        assert!(text.contains("Uno"));
    }

    #[test]
    fn test_navigation_moves_by_rows_and_columns() {
        let mut state = NewsGridState::new();
        state.columns = 2;
        state.sync_item_count(5);

        assert_eq!(state.handle_event(&TuiEvent::SelectNext), None);
        assert_eq!(state.selected_index, Some(0));

        state.handle_event(&TuiEvent::SelectDown);
        assert_eq!(state.selected_index, Some(2));

        state.handle_event(&TuiEvent::SelectNext);
        assert_eq!(state.selected_index, Some(3));

        state.handle_event(&TuiEvent::SelectDown);
        assert_eq!(state.selected_index, Some(4));

        state.handle_event(&TuiEvent::SelectUp);
        assert_eq!(state.selected_index, Some(2));

        state.handle_event(&TuiEvent::SelectLast);
        assert_eq!(state.selected_index, Some(4));

        state.handle_event(&TuiEvent::SelectFirst);
        assert_eq!(state.selected_index, Some(0));

        state.handle_event(&TuiEvent::SelectPrev);
        assert_eq!(state.selected_index, Some(0));
    }

    #[test]
    fn test_open_emits_selected_index() {
        let mut state = NewsGridState::new();
        state.sync_item_count(3);
        assert_eq!(state.handle_event(&TuiEvent::OpenSelected), None);

        state.handle_event(&TuiEvent::SelectLast);
        assert_eq!(
            state.handle_event(&TuiEvent::OpenSelected),
            Some(GridEvent::Open(2))
        );
    }

    #[test]
    fn test_navigation_on_empty_grid_is_noop() {
        let mut state = NewsGridState::new();
        state.sync_item_count(0);
        state.handle_event(&TuiEvent::SelectDown);
        state.handle_event(&TuiEvent::SelectLast);
        assert_eq!(state.selected_index, None);
    }

    #[test]
    fn test_selection_clamped_when_list_shrinks() {
        let mut state = NewsGridState::new();
        state.sync_item_count(5);
        state.handle_event(&TuiEvent::SelectLast);

        state.sync_item_count(2);
        assert_eq!(state.selected_index, Some(1));

        state.sync_item_count(0);
        assert_eq!(state.selected_index, None);
    }

    #[test]
    fn test_scrolls_to_keep_selection_visible() {
        let items: Vec<NewsItem> = (1..=6).map(|r| news_item(r, "Story")).collect();
        let mut state = NewsGridState::new();
        render(&mut state, &items, 40, 10);
        assert_eq!(state.scroll_state.offset().y, 0);

        state.handle_event(&TuiEvent::SelectLast);
        let last_row_top = state.row_bottoms[state.row_bottoms.len() - 2];
        let total = *state.row_bottoms.last().unwrap();
        assert!(state.scroll_state.offset().y > 0);
        assert!(state.scroll_state.offset().y >= last_row_top.min(total - 10));

        state.handle_event(&TuiEvent::SelectFirst);
        assert_eq!(state.scroll_state.offset().y, 0);
    }

    #[test]
    fn test_empty_items_render_nothing() {
        let mut state = NewsGridState::new();
        render(&mut state, &[], 40, 10);
        assert!(state.row_bottoms.is_empty());
    }
}
