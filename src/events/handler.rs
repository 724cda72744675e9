use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::types::{AppEvent, EventResult};
use crate::app::Panel;

/// Handle an event while the panel is on screen
pub fn handle_event(panel: &mut Panel, event: AppEvent) -> EventResult {
    match event {
        AppEvent::Key(key) => handle_key(panel, key),
        AppEvent::Tick => {
            if panel.poll_updates() {
                EventResult::Redraw
            } else {
                EventResult::Continue
            }
        }
        AppEvent::Resize(_, _) => EventResult::Redraw,
    }
}

/// Abort keys tear the panel down; results still in flight are discarded.
fn handle_key(panel: &mut Panel, key: KeyEvent) -> EventResult {
    let abort = match key.code {
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        KeyCode::Char('q') | KeyCode::Esc => true,
        _ => false,
    };
    if abort {
        panel.teardown();
        EventResult::Exit
    } else {
        EventResult::Continue
    }
}
