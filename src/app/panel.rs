use std::sync::Arc;
use std::thread;
use std::time::Duration;

use tracing::debug;

use crate::data::{HostFacts, PlatformId};
use crate::field::{FieldInstance, FieldSpec};

/// Display state of one render: the host facts for the header plus one
/// instance per cataloged field.
pub struct Panel {
    platform: PlatformId,
    facts: Arc<HostFacts>,
    fields: Vec<FieldInstance>,
}

impl Panel {
    /// Instantiates every field; synchronous ones are resolved on return.
    pub fn new(platform: PlatformId, facts: Arc<HostFacts>, catalog: &[FieldSpec]) -> Self {
        let fields = catalog
            .iter()
            .map(|spec| FieldInstance::launch(spec, platform))
            .collect::<Vec<_>>();
        let panel = Self {
            platform,
            facts,
            fields,
        };
        debug!(
            platform = platform.label(),
            fields = panel.fields.len(),
            pending = panel.pending_count(),
            "panel launched"
        );
        panel
    }

    /// Commits whatever async values have arrived. True when anything changed.
    pub fn poll_updates(&mut self) -> bool {
        let mut changed = false;
        for field in &mut self.fields {
            changed |= field.poll();
        }
        changed
    }

    pub fn is_settled(&self) -> bool {
        self.fields.iter().all(FieldInstance::is_settled)
    }

    pub fn pending_count(&self) -> usize {
        self.fields.iter().filter(|field| !field.is_settled()).count()
    }

    /// Blocks until every field has settled, polling every `interval`.
    pub fn wait_until_settled(&mut self, interval: Duration) {
        while !self.is_settled() {
            if !self.poll_updates() {
                thread::sleep(interval);
            }
        }
    }

    /// Deactivates every guard; values still in flight will be discarded.
    pub fn teardown(&self) {
        let pending = self.pending_count();
        if pending > 0 {
            debug!(pending, "tearing down with fields still resolving");
        }
        for field in &self.fields {
            field.teardown();
        }
    }

    pub fn platform(&self) -> PlatformId {
        self.platform
    }

    pub fn facts(&self) -> &HostFacts {
        &self.facts
    }

    pub fn fields(&self) -> &[FieldInstance] {
        &self.fields
    }
}
