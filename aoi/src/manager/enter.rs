use super::*;
use crate::error::{validate_coordinates, AoiError, AoiResult};

impl ManagerInner {
    /// Links a new entity into both chains, collecting the peers it can see
    /// into the entering set.
    pub(crate) fn enter(&mut self, id: EntityId, x: f32, y: f32) -> AoiResult<()> {
        validate_coordinates(x, y)?;
        if self.store.lookup(id).is_some() {
            return Err(AoiError::DuplicateId { id });
        }

        let idx = self.store.allocate(id, x, y);

        // One pass over X both places the node and finds its peers. The walk
        // keeps going after the insertion point until peers fall out of range.
        let mut cur = self.store.node(HEAD).next_x;
        let mut inserted = false;
        loop {
            let node = *self.store.node(cur);
            if !inserted && (cur == TAIL || node.x > x) {
                self.link_before(Axis::X, cur, idx);
                inserted = true;
            }
            if cur == TAIL {
                break;
            }
            let diff_x = node.x - x;
            if diff_x > self.range.x {
                break;
            }
            if self.range.contains(diff_x, node.y - y) {
                self.events.entering.insert(node.id);
            }
            cur = node.next_x;
        }

        let mut cur = self.store.node(HEAD).next_y;
        while cur != TAIL && self.store.node(cur).y <= y {
            cur = self.store.node(cur).next_y;
        }
        self.link_before(Axis::Y, cur, idx);

        self.store.register(id, idx);
        self.stats.enters += 1;
        tracing::trace!(id, x, y, peers = self.events.entering.len(), "entity entered");
        Ok(())
    }
}
