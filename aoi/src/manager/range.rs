use super::*;

/// Adds every live peer within `range` of slot `idx` to `out`.
///
/// Only the X chain is walked. Each direction stops at the first node whose
/// X distance exceeds the range; sorted order rules out anything past it.
pub(crate) fn collect_range(store: &NodeStore, range: ViewRange, idx: u32, out: &mut IdSet) {
    let origin = *store.node(idx);

    let mut cur = origin.prev_x;
    while cur != HEAD {
        let node = store.node(cur);
        if origin.x - node.x > range.x {
            break;
        }
        if (node.y - origin.y).abs() <= range.y {
            out.insert(node.id);
        }
        cur = node.prev_x;
    }

    let mut cur = origin.next_x;
    while cur != TAIL {
        let node = store.node(cur);
        if node.x - origin.x > range.x {
            break;
        }
        if (node.y - origin.y).abs() <= range.y {
            out.insert(node.id);
        }
        cur = node.next_x;
    }
}

impl ManagerInner {
    pub(crate) fn query_range(&self, id: EntityId, out: &mut IdSet) {
        match self.store.lookup(id) {
            Some(idx) => collect_range(&self.store, self.range, idx, out),
            None => tracing::trace!(id, "range query for untracked entity"),
        }
    }
}
