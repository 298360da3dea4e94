use super::*;

/// Receives the visibility changes produced by one manager operation.
///
/// `peers` is only valid for the duration of the call; the manager clears and
/// reuses the set as soon as the callback returns.
pub trait AoiListener {
    /// `peers` came into view of `id`, and `id` into theirs.
    fn on_enter(&mut self, _id: EntityId, _peers: &IdSet) {}

    /// `peers` stayed in view of `id` while it moved.
    fn on_move(&mut self, _id: EntityId, _peers: &IdSet) {}

    /// `peers` lost sight of `id`, either because it moved away or left.
    fn on_leave(&mut self, _id: EntityId, _peers: &IdSet) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopListener;

impl AoiListener for NoopListener {}

impl<T: AoiListener + ?Sized> AoiListener for &mut T {
    fn on_enter(&mut self, id: EntityId, peers: &IdSet) {
        (**self).on_enter(id, peers)
    }

    fn on_move(&mut self, id: EntityId, peers: &IdSet) {
        (**self).on_move(id, peers)
    }

    fn on_leave(&mut self, id: EntityId, peers: &IdSet) {
        (**self).on_leave(id, peers)
    }
}

impl<T: AoiListener + ?Sized> AoiListener for Box<T> {
    fn on_enter(&mut self, id: EntityId, peers: &IdSet) {
        (**self).on_enter(id, peers)
    }

    fn on_move(&mut self, id: EntityId, peers: &IdSet) {
        (**self).on_move(id, peers)
    }

    fn on_leave(&mut self, id: EntityId, peers: &IdSet) {
        (**self).on_leave(id, peers)
    }
}

/// Listener assembled from three closures.
pub struct CallbackListener<E, M, L> {
    on_enter: E,
    on_move: M,
    on_leave: L,
}

impl<E, M, L> CallbackListener<E, M, L>
where
    E: FnMut(EntityId, &IdSet),
    M: FnMut(EntityId, &IdSet),
    L: FnMut(EntityId, &IdSet),
{
    pub fn new(on_enter: E, on_move: M, on_leave: L) -> Self {
        Self {
            on_enter,
            on_move,
            on_leave,
        }
    }
}

impl<E, M, L> AoiListener for CallbackListener<E, M, L>
where
    E: FnMut(EntityId, &IdSet),
    M: FnMut(EntityId, &IdSet),
    L: FnMut(EntityId, &IdSet),
{
    fn on_enter(&mut self, id: EntityId, peers: &IdSet) {
        (self.on_enter)(id, peers)
    }

    fn on_move(&mut self, id: EntityId, peers: &IdSet) {
        (self.on_move)(id, peers)
    }

    fn on_leave(&mut self, id: EntityId, peers: &IdSet) {
        (self.on_leave)(id, peers)
    }
}

/// Logs every notification at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingListener;

impl AoiListener for TracingListener {
    fn on_enter(&mut self, id: EntityId, peers: &IdSet) {
        tracing::debug!(id, count = peers.len(), ?peers, "aoi enter");
    }

    fn on_move(&mut self, id: EntityId, peers: &IdSet) {
        tracing::debug!(id, count = peers.len(), ?peers, "aoi move");
    }

    fn on_leave(&mut self, id: EntityId, peers: &IdSet) {
        tracing::debug!(id, count = peers.len(), ?peers, "aoi leave");
    }
}

/// Scratch sets filled by one operation and drained by [`EventSets::dispatch`].
pub(crate) struct EventSets {
    pub(crate) entering: IdSet,
    pub(crate) moving: IdSet,
    pub(crate) leaving: IdSet,
}

impl EventSets {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entering: IdSet::with_capacity_and_hasher(capacity, Default::default()),
            moving: IdSet::with_capacity_and_hasher(capacity, Default::default()),
            leaving: IdSet::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    pub(crate) fn is_clear(&self) -> bool {
        self.entering.is_empty() && self.moving.is_empty() && self.leaving.is_empty()
    }

    /// Splits a move's pre-move set (in `moving`) against its post-move set
    /// (in `entering`): peers in both stay in `moving`, peers only seen before
    /// go to `leaving`, peers only seen after stay in `entering`.
    pub(crate) fn split_move(&mut self) {
        let entering = &mut self.entering;
        let leaving = &mut self.leaving;
        self.moving.retain(|peer| {
            if entering.remove(peer) {
                true
            } else {
                leaving.insert(*peer);
                false
            }
        });
    }

    pub(crate) fn dispatch<L: AoiListener + ?Sized>(&mut self, id: EntityId, listener: &mut L) {
        if !self.entering.is_empty() {
            listener.on_enter(id, &self.entering);
        }
        if !self.moving.is_empty() {
            listener.on_move(id, &self.moving);
        }
        if !self.leaving.is_empty() {
            listener.on_leave(id, &self.leaving);
        }
        self.clear();
    }

    pub(crate) fn clear(&mut self) {
        self.entering.clear();
        self.moving.clear();
        self.leaving.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(ids: &[EntityId]) -> IdSet {
        ids.iter().copied().collect()
    }

    #[test]
    fn split_move_partitions_pre_and_post() {
        let mut events = EventSets::with_capacity(4);
        events.moving = set(&[1, 2, 3]);
        events.entering = set(&[2, 3, 4]);
        events.split_move();
        assert_eq!(events.moving, set(&[2, 3]));
        assert_eq!(events.entering, set(&[4]));
        assert_eq!(events.leaving, set(&[1]));
    }

    #[test]
    fn dispatch_skips_empty_sets_and_clears() {
        let mut calls = Vec::new();
        {
            let mut listener = CallbackListener::new(
                |id, peers: &IdSet| calls.push(("enter", id, peers.len())),
                |_, _: &IdSet| panic!("moving set is empty"),
                |_, _: &IdSet| panic!("leaving set is empty"),
            );
            let mut events = EventSets::with_capacity(4);
            events.entering = set(&[5, 6]);
            events.dispatch(9, &mut listener);
            assert!(events.is_clear());
        }
        assert_eq!(calls, vec![("enter", 9, 2)]);
    }

    #[test]
    fn dispatch_order_is_enter_move_leave() {
        let order = std::cell::RefCell::new(Vec::new());
        let mut listener = CallbackListener::new(
            |_, _: &IdSet| order.borrow_mut().push("enter"),
            |_, _: &IdSet| order.borrow_mut().push("move"),
            |_, _: &IdSet| order.borrow_mut().push("leave"),
        );
        let mut events = EventSets::with_capacity(4);
        events.entering = set(&[1]);
        events.moving = set(&[2]);
        events.leaving = set(&[3]);
        events.dispatch(0, &mut listener);
        assert_eq!(*order.borrow(), vec!["enter", "move", "leave"]);
    }
}
