use super::*;
use crate::error::{AoiError, AoiResult};

impl ManagerInner {
    /// Links `idx` into `axis` immediately before `anchor`.
    #[inline(always)]
    pub(crate) fn link_before(&mut self, axis: Axis, anchor: u32, idx: u32) {
        let prev = self.store.node(anchor).prev(axis);
        {
            let node = self.store.node_mut(idx);
            node.set_prev(axis, prev);
            node.set_next(axis, anchor);
        }
        self.store.node_mut(prev).set_next(axis, idx);
        self.store.node_mut(anchor).set_prev(axis, idx);
    }

    /// Links `idx` into `axis` immediately after `anchor`.
    #[inline(always)]
    pub(crate) fn link_after(&mut self, axis: Axis, anchor: u32, idx: u32) {
        let next = self.store.node(anchor).next(axis);
        {
            let node = self.store.node_mut(idx);
            node.set_prev(axis, anchor);
            node.set_next(axis, next);
        }
        self.store.node_mut(next).set_prev(axis, idx);
        self.store.node_mut(anchor).set_next(axis, idx);
    }

    #[inline(always)]
    pub(crate) fn unlink(&mut self, axis: Axis, idx: u32) {
        let (prev, next) = {
            let node = self.store.node(idx);
            (node.prev(axis), node.next(axis))
        };
        self.store.node_mut(prev).set_next(axis, next);
        self.store.node_mut(next).set_prev(axis, prev);
        let node = self.store.node_mut(idx);
        node.set_prev(axis, HEAD);
        node.set_next(axis, HEAD);
    }

    pub(crate) fn chain(&self, axis: Axis) -> ChainIter<'_> {
        ChainIter {
            store: &self.store,
            axis,
            cur: self.store.node(HEAD).next(axis),
        }
    }

    pub(crate) fn check_invariants(&self) -> AoiResult<()> {
        let x_ids = self.check_chain(Axis::X)?;
        let y_ids = self.check_chain(Axis::Y)?;
        if x_ids != y_ids {
            return Err(corrupt("x and y chains hold different entities".to_string()));
        }
        if x_ids.len() != self.store.len() {
            return Err(corrupt(format!(
                "chains hold {} entities but the store tracks {}",
                x_ids.len(),
                self.store.len()
            )));
        }
        Ok(())
    }

    fn check_chain(&self, axis: Axis) -> AoiResult<IdSet> {
        let mut ids = IdSet::default();
        let mut prev = HEAD;
        let mut cur = self.store.node(HEAD).next(axis);
        let mut steps = 0usize;
        while cur != TAIL {
            steps += 1;
            if steps > self.store.slots() {
                return Err(corrupt(format!("{:?} chain does not reach the tail", axis)));
            }
            let node = self.store.node(cur);
            if !node.alive {
                return Err(corrupt(format!("{:?} chain links a freed slot {}", axis, cur)));
            }
            if node.prev(axis) != prev {
                return Err(corrupt(format!(
                    "{:?} chain back link of entity {} is broken",
                    axis, node.id
                )));
            }
            if prev != HEAD && self.store.node(prev).coord(axis) > node.coord(axis) {
                return Err(corrupt(format!(
                    "{:?} chain is out of order at entity {}",
                    axis, node.id
                )));
            }
            if self.store.lookup(node.id) != Some(cur) {
                return Err(corrupt(format!(
                    "entity {} is linked but not registered to slot {}",
                    node.id, cur
                )));
            }
            if !ids.insert(node.id) {
                return Err(corrupt(format!(
                    "entity {} appears twice in the {:?} chain",
                    node.id, axis
                )));
            }
            prev = cur;
            cur = node.next(axis);
        }
        if self.store.node(TAIL).prev(axis) != prev {
            return Err(corrupt(format!("{:?} chain tail back link is broken", axis)));
        }
        Ok(ids)
    }
}

fn corrupt(reason: String) -> AoiError {
    AoiError::CorruptChain { reason }
}

/// Walks one axis chain from head to tail, yielding live entity ids.
pub(crate) struct ChainIter<'a> {
    store: &'a NodeStore,
    axis: Axis,
    cur: u32,
}

impl<'a> Iterator for ChainIter<'a> {
    type Item = (EntityId, f32, f32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.cur == TAIL {
            return None;
        }
        let node = self.store.node(self.cur);
        self.cur = node.next(self.axis);
        Some((node.id, node.x, node.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inner() -> ManagerInner {
        ManagerInner::new(&Config {
            range_x: 1.0,
            range_y: 1.0,
            capacity: 8,
        })
        .unwrap()
    }

    fn push(inner: &mut ManagerInner, id: EntityId, x: f32, y: f32) -> u32 {
        let idx = inner.store.allocate(id, x, y);
        inner.store.register(id, idx);
        inner.link_before(Axis::X, TAIL, idx);
        inner.link_before(Axis::Y, TAIL, idx);
        idx
    }

    #[test]
    fn link_and_unlink_keep_both_directions() {
        let mut inner = inner();
        let a = push(&mut inner, 1, 0.0, 0.0);
        let c = push(&mut inner, 3, 2.0, 2.0);
        let b = inner.store.allocate(2, 1.0, 1.0);
        inner.store.register(2, b);
        inner.link_after(Axis::X, a, b);
        inner.link_before(Axis::Y, c, b);
        inner.check_invariants().unwrap();

        let xs: Vec<_> = inner.chain(Axis::X).map(|(id, _, _)| id).collect();
        assert_eq!(xs, vec![1, 2, 3]);

        inner.unlink(Axis::X, b);
        inner.unlink(Axis::Y, b);
        inner.store.unregister(2);
        inner.store.recycle(b);
        inner.check_invariants().unwrap();
        assert_eq!(inner.store.node(a).next_x, c);
        assert_eq!(inner.store.node(c).prev_y, a);
    }

    #[test]
    fn detects_out_of_order_chain() {
        let mut inner = inner();
        push(&mut inner, 1, 5.0, 0.0);
        push(&mut inner, 2, 1.0, 1.0);
        assert!(matches!(
            inner.check_invariants(),
            Err(AoiError::CorruptChain { .. })
        ));
    }

    #[test]
    fn detects_unregistered_node() {
        let mut inner = inner();
        let idx = inner.store.allocate(4, 0.0, 0.0);
        inner.link_before(Axis::X, TAIL, idx);
        inner.link_before(Axis::Y, TAIL, idx);
        assert!(inner.check_invariants().is_err());
    }
}
