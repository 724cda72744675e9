use std::sync::mpsc::{self, TryRecvError};
use std::thread;

use tracing::{debug, trace};

use super::guard::LifecycleGuard;
use super::strategy::{AsyncFn, FieldSpec, Strategy};
use crate::data::PlatformId;
use crate::error::Result;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolutionState {
    Idle,
    Resolving,
    Resolved(String),
    Discarded,
}

/// Receiving end of an asynchronous strategy running on a worker thread.
pub struct PendingValue {
    rx: mpsc::Receiver<String>,
}

enum PendingPoll {
    Waiting,
    Ready(String),
    /// The worker went away without sending, e.g. it panicked.
    Lost,
}

impl PendingValue {
    fn try_take(&self) -> PendingPoll {
        match self.rx.try_recv() {
            Ok(value) => PendingPoll::Ready(value),
            Err(TryRecvError::Empty) => PendingPoll::Waiting,
            Err(TryRecvError::Disconnected) => PendingPoll::Lost,
        }
    }
}

pub struct Resolution {
    pub immediate: String,
    pub pending: Option<PendingValue>,
}

/// Runs the one strategy `spec` declares for `platform`.
///
/// Literal and sync strategies answer in `immediate`. Async strategies answer
/// an empty placeholder plus the pending value; their failures are turned
/// into empty text on the worker and never reach the caller.
pub fn resolve(spec: &FieldSpec, platform: PlatformId) -> Resolution {
    let strategy = spec.select(platform);
    trace!(
        field = spec.title,
        platform = platform.label(),
        strategy = strategy.kind(),
        "resolving field"
    );
    match strategy {
        Strategy::Literal(value) => Resolution {
            immediate: value.clone(),
            pending: None,
        },
        Strategy::Sync(compute) => Resolution {
            immediate: compute(),
            pending: None,
        },
        Strategy::Async(run) => Resolution {
            immediate: String::new(),
            pending: Some(spawn_pending(spec.title, run.clone())),
        },
    }
}

fn spawn_pending(title: &'static str, run: AsyncFn) -> PendingValue {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let value = absorb(title, run());
        let _ = tx.send(value);
    });
    PendingValue { rx }
}

fn absorb(title: &'static str, result: Result<Option<String>>) -> String {
    match result {
        Ok(Some(value)) => value.trim().to_string(),
        Ok(None) => {
            debug!(field = title, "no value extracted");
            String::new()
        }
        Err(err) => {
            debug!(field = title, error = %err, "field failure absorbed");
            String::new()
        }
    }
}

/// A field as laid out in the panel: its state, its guard and, while an
/// async strategy runs, the pending value.
pub struct FieldInstance {
    title: &'static str,
    state: ResolutionState,
    guard: LifecycleGuard,
    pending: Option<PendingValue>,
}

impl FieldInstance {
    pub fn new(title: &'static str) -> Self {
        Self {
            title,
            state: ResolutionState::Idle,
            guard: LifecycleGuard::new(),
            pending: None,
        }
    }

    /// Instantiates the field and starts its strategy.
    pub fn launch(spec: &FieldSpec, platform: PlatformId) -> Self {
        let mut field = Self::new(spec.title);
        let Resolution { immediate, pending } = resolve(spec, platform);
        match pending {
            Some(pending) => {
                field.state = ResolutionState::Resolving;
                field.pending = Some(pending);
            }
            None => field.state = ResolutionState::Resolved(immediate),
        }
        field
    }

    /// Picks up an arrived async value. Returns true when the state changed.
    pub fn poll(&mut self) -> bool {
        let Some(pending) = self.pending.as_ref() else {
            return false;
        };
        let value = match pending.try_take() {
            PendingPoll::Waiting => return false,
            PendingPoll::Ready(value) => value,
            PendingPoll::Lost => String::new(),
        };
        self.pending = None;
        self.commit(value);
        true
    }

    fn commit(&mut self, value: String) {
        if self.guard.is_active() {
            trace!(field = self.title, "committed");
            self.state = ResolutionState::Resolved(value);
        } else {
            trace!(field = self.title, "discarded after teardown");
            self.state = ResolutionState::Discarded;
        }
    }

    pub fn teardown(&self) {
        self.guard.deactivate();
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn state(&self) -> &ResolutionState {
        &self.state
    }

    pub fn guard(&self) -> &LifecycleGuard {
        &self.guard
    }

    pub fn is_settled(&self) -> bool {
        matches!(
            self.state,
            ResolutionState::Resolved(_) | ResolutionState::Discarded
        )
    }

    /// Text to paint; empty while resolving and after a discard.
    pub fn display_value(&self) -> &str {
        match &self.state {
            ResolutionState::Resolved(value) => value,
            _ => "",
        }
    }
}

impl Drop for FieldInstance {
    fn drop(&mut self) {
        self.guard.deactivate();
    }
}
