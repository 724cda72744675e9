use crossterm::event::KeyEvent;

/// Events seen while the panel waits for its asynchronous fields
#[derive(Debug)]
pub enum AppEvent {
    /// Terminal key press
    Key(KeyEvent),
    /// Poll interval elapsed
    Tick,
    /// Terminal resize
    Resize(u16, u16),
}

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Nothing visible changed
    Continue,
    /// Repaint the panel
    Redraw,
    /// Stop waiting and exit
    Exit,
}

impl EventResult {
    pub fn should_exit(self) -> bool {
        matches!(self, EventResult::Exit)
    }

    pub fn needs_redraw(self) -> bool {
        matches!(self, EventResult::Redraw)
    }
}
