use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::state::NewsState;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{EmptyState, ErrorBanner, Header, NewsGrid, StatusBar};

const HEADER_HEIGHT: u16 = 3;

/// Screen regions, top to bottom. The banner collapses to zero height when
/// there is no error and otherwise grows with its wrapped message.
pub struct DashboardLayout {
    pub header: Rect,
    pub banner: Rect,
    pub main: Rect,
    pub status: Rect,
}

pub fn dashboard_layout(area: Rect, banner_height: u16) -> DashboardLayout {
    use Constraint::{Length, Min};
    let [header, banner, main, status] = Layout::vertical([
        Length(HEADER_HEIGHT),
        Length(banner_height),
        Min(0),
        Length(1),
    ])
    .areas(area);
    DashboardLayout {
        header,
        banner,
        main,
        status,
    }
}

/// Renders the whole dashboard from a state snapshot.
pub fn draw_ui(frame: &mut Frame, state: &NewsState, tui: &mut TuiState, spinner_frame: usize) {
    let error = state.error_message();
    let banner_height = error.map_or(0, |message| ErrorBanner::height(message, frame.area().width));
    let layout = dashboard_layout(frame.area(), banner_height);

    Header::new(state.refreshing, state.last_updated).render(frame, layout.header);

    if let Some(message) = error {
        ErrorBanner::new(message).render(frame, layout.banner);
    }

    if state.is_empty_state() {
        tui.grid.sync_item_count(0);
        EmptyState.render(frame, layout.main);
    } else {
        NewsGrid::new(&mut tui.grid, &state.items).render(frame, layout.main);
    }

    StatusBar {
        loading: state.loading,
        refreshing: state.refreshing,
        item_count: state.items.len(),
        spinner_frame,
        notice: tui.notice.as_deref(),
    }
    .render(frame, layout.status);
}
