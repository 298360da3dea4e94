use super::*;
use crate::error::{validate_coordinates, AoiError, AoiResult};

impl ManagerInner {
    /// Moves an entity and leaves the visibility delta in the event sets:
    /// `entering` gained sight, `moving` kept sight, `leaving` lost sight.
    pub(crate) fn move_to(&mut self, id: EntityId, x: f32, y: f32) -> AoiResult<()> {
        validate_coordinates(x, y)?;
        let idx = self
            .store
            .lookup(id)
            .ok_or(AoiError::UnknownId { id })?;

        collect_range(&self.store, self.range, idx, &mut self.events.moving);

        let (old_x, old_y) = {
            let node = self.store.node_mut(idx);
            let old = (node.x, node.y);
            node.x = x;
            node.y = y;
            old
        };

        let resorted_x = self.resort(Axis::X, idx);
        let resorted_y = self.resort(Axis::Y, idx);
        if resorted_x || resorted_y {
            self.stats.resorted_moves += 1;
        }

        // A node that keeps its place in both chains can still shift its own
        // window across a neighbour, so only an exact repeat skips the
        // post-move query.
        if old_x != x || old_y != y {
            collect_range(&self.store, self.range, idx, &mut self.events.entering);
            self.events.split_move();
        }

        self.stats.moves += 1;
        tracing::trace!(
            id,
            x,
            y,
            resorted_x,
            resorted_y,
            entering = self.events.entering.len(),
            moving = self.events.moving.len(),
            leaving = self.events.leaving.len(),
            "entity moved"
        );
        Ok(())
    }

    /// Restores sorted order around `idx` on `axis` after its coordinate
    /// changed. Returns whether the node had to be relinked.
    fn resort(&mut self, axis: Axis, idx: u32) -> bool {
        let node = *self.store.node(idx);
        let coord = node.coord(axis);
        let prev = node.prev(axis);
        let next = node.next(axis);

        if coord < self.store.node(prev).coord(axis) {
            let mut cur = self.store.node(prev).prev(axis);
            while cur != HEAD && self.store.node(cur).coord(axis) > coord {
                cur = self.store.node(cur).prev(axis);
            }
            self.unlink(axis, idx);
            self.link_after(axis, cur, idx);
            true
        } else if coord > self.store.node(next).coord(axis) {
            let mut cur = self.store.node(next).next(axis);
            while cur != TAIL && self.store.node(cur).coord(axis) < coord {
                cur = self.store.node(cur).next(axis);
            }
            self.unlink(axis, idx);
            self.link_before(axis, cur, idx);
            true
        } else {
            false
        }
    }
}
