use super::*;
use crate::error::{AoiError, AoiResult};

impl ManagerInner {
    pub(crate) fn leave(&mut self, id: EntityId) -> AoiResult<()> {
        let idx = self
            .store
            .lookup(id)
            .ok_or(AoiError::UnknownId { id })?;

        collect_range(&self.store, self.range, idx, &mut self.events.leaving);

        self.unlink(Axis::X, idx);
        self.unlink(Axis::Y, idx);
        self.store.unregister(id);
        self.store.recycle(idx);

        self.stats.leaves += 1;
        tracing::trace!(id, peers = self.events.leaving.len(), "entity left");
        Ok(())
    }

    pub(crate) fn clear(&mut self) {
        self.store.clear();
        self.events.clear();
        tracing::debug!("aoi manager cleared");
    }
}
