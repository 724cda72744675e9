use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::data::PlatformId;
use crate::error::Result;

pub type SyncFn = Box<dyn Fn() -> String + Send + Sync>;
pub type AsyncFn = Arc<dyn Fn() -> Result<Option<String>> + Send + Sync>;

/// How a field produces its text, fixed when the field is declared.
pub enum Strategy {
    /// Already-resolved text.
    Literal(String),
    /// Computed on the render thread from facts that are already at hand.
    Sync(SyncFn),
    /// Runs off the render thread, usually around an external command.
    /// `Err` and `Ok(None)` both end up as empty text.
    Async(AsyncFn),
}

impl Strategy {
    pub fn literal(value: impl Into<String>) -> Self {
        Strategy::Literal(value.into())
    }

    pub fn sync<F>(compute: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        Strategy::Sync(Box::new(compute))
    }

    pub fn task<F>(run: F) -> Self
    where
        F: Fn() -> Result<Option<String>> + Send + Sync + 'static,
    {
        Strategy::Async(Arc::new(run))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Strategy::Literal(_) => "literal",
            Strategy::Sync(_) => "sync",
            Strategy::Async(_) => "async",
        }
    }
}

impl fmt::Debug for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Strategy::Sync(_) => f.write_str("Sync(..)"),
            Strategy::Async(_) => f.write_str("Async(..)"),
        }
    }
}

/// One labeled fact of the panel and the ways to obtain it per platform.
#[derive(Debug)]
pub struct FieldSpec {
    pub title: &'static str,
    platform_resolvers: HashMap<PlatformId, Strategy>,
    default_strategy: Strategy,
}

impl FieldSpec {
    pub fn new(title: &'static str, default_strategy: Strategy) -> Self {
        Self {
            title,
            platform_resolvers: HashMap::new(),
            default_strategy,
        }
    }

    /// Registers the strategy used on `platform`, replacing any earlier one.
    pub fn on(mut self, platform: PlatformId, strategy: Strategy) -> Self {
        self.platform_resolvers.insert(platform, strategy);
        self
    }

    pub fn select(&self, platform: PlatformId) -> &Strategy {
        select(platform, &self.platform_resolvers, &self.default_strategy)
    }
}

/// Table entry for `platform`, or `default` when the platform has none.
pub fn select<'a>(
    platform: PlatformId,
    table: &'a HashMap<PlatformId, Strategy>,
    default: &'a Strategy,
) -> &'a Strategy {
    table.get(&platform).unwrap_or(default)
}
