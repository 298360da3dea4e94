use super::*;
use crate::error::AoiResult;
use std::fmt;

impl ManagerInner {
    pub(crate) fn new(config: &Config) -> AoiResult<Self> {
        let range = ViewRange::new(config.range_x, config.range_y)?;
        Ok(Self {
            store: NodeStore::new(config.capacity),
            range,
            events: EventSets::with_capacity(config.capacity),
            stats: AoiStats::default(),
        })
    }
}

impl<L: AoiListener> AoiManager<L> {
    pub fn new(range_x: f32, range_y: f32, capacity: usize, listener: L) -> AoiResult<Self> {
        Self::new_with_config(
            Config {
                range_x,
                range_y,
                capacity,
            },
            listener,
        )
    }

    pub fn new_with_config(config: Config, listener: L) -> AoiResult<Self> {
        let inner = ManagerInner::new(&config)?;
        tracing::debug!(
            range_x = config.range_x,
            range_y = config.range_y,
            capacity = config.capacity,
            "aoi manager created"
        );
        Ok(Self { inner, listener })
    }

    /// Starts tracking `id` at `(x, y)`. The listener's `on_enter` receives
    /// every peer already in range.
    pub fn enter(&mut self, id: EntityId, x: f32, y: f32) -> AoiResult<()> {
        let result = self.inner.enter(id, x, y);
        self.finish(id, result, "enter")
    }

    /// Moves `id` to `(x, y)` and reports which peers came into view, stayed
    /// in view and dropped out of view.
    pub fn move_to(&mut self, id: EntityId, x: f32, y: f32) -> AoiResult<()> {
        let result = self.inner.move_to(id, x, y);
        self.finish(id, result, "move")
    }

    /// Applies the moves in order, stopping at the first one that fails.
    pub fn move_batch(&mut self, requests: &[MoveRequest]) -> AoiResult<()> {
        for request in requests {
            self.move_to(request.id, request.x, request.y)?;
        }
        Ok(())
    }

    /// Stops tracking `id`. The listener's `on_leave` receives every peer
    /// that could see it.
    pub fn leave(&mut self, id: EntityId) -> AoiResult<()> {
        let result = self.inner.leave(id);
        self.finish(id, result, "leave")
    }

    /// Adds every peer in view of `id` to `out`. Untracked ids leave `out`
    /// untouched.
    pub fn query_range(&self, id: EntityId, out: &mut IdSet) {
        self.inner.query_range(id, out);
    }

    /// Forgets every entity without notifying the listener.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    fn finish(&mut self, id: EntityId, result: AoiResult<()>, op: &'static str) -> AoiResult<()> {
        match result {
            Ok(()) => {
                self.inner.events.dispatch(id, &mut self.listener);
                Ok(())
            }
            Err(err) => {
                debug_assert!(self.inner.events.is_clear());
                self.inner.events.clear();
                self.inner.stats.rejected += 1;
                tracing::debug!(id, op, error = %err, "aoi operation rejected");
                Err(err)
            }
        }
    }

    pub fn len(&self) -> usize {
        self.inner.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.inner.store.lookup(id).is_some()
    }

    pub fn position(&self, id: EntityId) -> Option<(f32, f32)> {
        self.inner.store.lookup(id).map(|idx| {
            let node = self.inner.store.node(idx);
            (node.x, node.y)
        })
    }

    /// The `(range_x, range_y)` shared by every entity.
    pub fn range(&self) -> (f32, f32) {
        (self.inner.range.x, self.inner.range.y)
    }

    pub fn stats(&self) -> AoiStats {
        self.inner.stats
    }

    /// Entity ids in ascending X order.
    pub fn ids_by_x(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.inner.chain(Axis::X).map(|(id, _, _)| id)
    }

    /// Entity ids in ascending Y order.
    pub fn ids_by_y(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.inner.chain(Axis::Y).map(|(id, _, _)| id)
    }

    /// Verifies both chains are sorted, mutually consistent and match the
    /// registered ids.
    pub fn check_invariants(&self) -> AoiResult<()> {
        self.inner.check_invariants()
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    pub fn into_listener(self) -> L {
        self.listener
    }
}

impl<L: AoiListener> fmt::Display for AoiManager<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let chain: ChainIter<'_> = self.inner.chain(Axis::X);
        for (id, x, y) in chain {
            write!(f, "[{}({},{})]", id, x, y)?;
        }
        Ok(())
    }
}

impl<L: AoiListener> fmt::Debug for AoiManager<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AoiManager")
            .field("len", &self.len())
            .field("range", &self.range())
            .field("stats", &self.inner.stats)
            .finish()
    }
}
