use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind,
};

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    Quit,
    ForceQuit, // Ctrl+C
    /// Activates the "Source File" control.
    Refresh,

    // Grid navigation
    SelectNext,
    SelectPrev,
    SelectUp,
    SelectDown,
    SelectFirst,
    SelectLast,
    /// Open the selected tile's link.
    OpenSelected,

    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if !event::poll(timeout).unwrap_or(false) {
        return None;
    }
    match event::read().ok()? {
        Event::Key(key_event) => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            map_key(key_event)
        }
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::ScrollUp => Some(TuiEvent::SelectUp),
            MouseEventKind::ScrollDown => Some(TuiEvent::SelectDown),
            _ => None,
        },
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

/// Translate a key press into a dashboard event. Releases and repeats are dropped.
pub fn map_key(key_event: KeyEvent) -> Option<TuiEvent> {
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
        (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => Some(TuiEvent::Quit),
        (_, KeyCode::Char('r')) => Some(TuiEvent::Refresh),
        (_, KeyCode::Enter) | (_, KeyCode::Char('o')) => Some(TuiEvent::OpenSelected),
        (_, KeyCode::Right) | (_, KeyCode::Char('l')) | (_, KeyCode::Tab) => {
            Some(TuiEvent::SelectNext)
        }
        (_, KeyCode::Left) | (_, KeyCode::Char('h')) | (_, KeyCode::BackTab) => {
            Some(TuiEvent::SelectPrev)
        }
        (_, KeyCode::Up) | (_, KeyCode::Char('k')) => Some(TuiEvent::SelectUp),
        (_, KeyCode::Down) | (_, KeyCode::Char('j')) => Some(TuiEvent::SelectDown),
        (_, KeyCode::Home) | (_, KeyCode::Char('g')) => Some(TuiEvent::SelectFirst),
        (_, KeyCode::End) | (_, KeyCode::Char('G')) => Some(TuiEvent::SelectLast),
        _ => None,
    }
}
