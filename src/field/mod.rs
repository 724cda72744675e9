//! Field resolution: per-platform strategy selection, execution, and the
//! guarded commit of asynchronous results.

mod guard;
mod resolver;
mod strategy;

pub use guard::LifecycleGuard;
pub use resolver::{FieldInstance, PendingValue, Resolution, ResolutionState, resolve};
pub use strategy::{AsyncFn, FieldSpec, Strategy, SyncFn, select};
