use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Tells whether a field instance may still receive its asynchronous value.
///
/// Clones share one flag. Deactivation only blocks the commit; work that is
/// already running is left to finish.
#[derive(Clone, Debug)]
pub struct LifecycleGuard {
    active: Arc<AtomicBool>,
}

impl LifecycleGuard {
    pub fn new() -> Self {
        Self {
            active: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    pub fn deactivate(&self) {
        self.active.store(false, Ordering::Release);
    }
}

impl Default for LifecycleGuard {
    fn default() -> Self {
        Self::new()
    }
}
