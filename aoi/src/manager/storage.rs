use super::*;
use fxhash::FxHashMap;

/// Owns the node arena and the identifier to slot mapping.
///
/// Slots 0 and 1 hold the head and tail sentinels. Freed slots are chained
/// through `next_free`; a `free_node` of 0 means the free list is empty,
/// since slot 0 is never freed.
pub(crate) struct NodeStore {
    nodes: Vec<Node>,
    free_node: u32,
    owner_map: FxHashMap<EntityId, u32>,
    dense_owner: Vec<u32>,
    live: usize,
}

impl NodeStore {
    const DENSE_OWNER_LIMIT: usize = 1_000_000;

    pub(crate) fn new(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.saturating_add(SENTINEL_SLOTS));
        nodes.push(Node::sentinel(f32::NEG_INFINITY));
        nodes.push(Node::sentinel(f32::INFINITY));
        Self {
            nodes,
            free_node: 0,
            owner_map: FxHashMap::default(),
            dense_owner: Vec::new(),
            live: 0,
        }
    }

    #[inline(always)]
    pub(crate) fn node(&self, idx: u32) -> &Node {
        &self.nodes[idx as usize]
    }

    #[inline(always)]
    pub(crate) fn node_mut(&mut self, idx: u32) -> &mut Node {
        &mut self.nodes[idx as usize]
    }

    pub(crate) fn len(&self) -> usize {
        self.live
    }

    pub(crate) fn slots(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn lookup(&self, id: EntityId) -> Option<u32> {
        let key = id as usize;
        if key < self.dense_owner.len() {
            let stored = self.dense_owner[key];
            if stored != u32::MAX {
                return Some(stored);
            }
        }
        self.owner_map.get(&id).copied()
    }

    pub(crate) fn register(&mut self, id: EntityId, idx: u32) {
        let key = id as usize;
        if key <= Self::DENSE_OWNER_LIMIT {
            if key >= self.dense_owner.len() {
                self.dense_owner.resize(key + 1, u32::MAX);
            }
            self.dense_owner[key] = idx;
        } else {
            self.owner_map.insert(id, idx);
        }
        self.live += 1;
    }

    pub(crate) fn unregister(&mut self, id: EntityId) -> Option<u32> {
        let key = id as usize;
        let removed = if key < self.dense_owner.len() && self.dense_owner[key] != u32::MAX {
            let stored = self.dense_owner[key];
            self.dense_owner[key] = u32::MAX;
            Some(stored)
        } else {
            self.owner_map.remove(&id)
        };
        if removed.is_some() {
            self.live -= 1;
        }
        removed
    }

    /// Hands out a slot initialised for `id`, reusing a freed one if any.
    /// The node is not linked into either chain yet.
    pub(crate) fn allocate(&mut self, id: EntityId, x: f32, y: f32) -> u32 {
        if self.free_node != 0 {
            let idx = self.free_node;
            self.free_node = self.nodes[idx as usize].next_free;
            self.nodes[idx as usize] = Node::live(id, x, y);
            idx
        } else {
            self.nodes.push(Node::live(id, x, y));
            (self.nodes.len() - 1) as u32
        }
    }

    /// Returns a detached slot to the free list.
    pub(crate) fn recycle(&mut self, idx: u32) {
        debug_assert!(idx as usize >= SENTINEL_SLOTS);
        let node = &mut self.nodes[idx as usize];
        node.alive = false;
        node.prev_x = HEAD;
        node.next_x = HEAD;
        node.prev_y = HEAD;
        node.next_y = HEAD;
        node.next_free = self.free_node;
        self.free_node = idx;
    }

    /// Drops every live node and resets the sentinels to an empty chain.
    pub(crate) fn clear(&mut self) {
        self.nodes.truncate(SENTINEL_SLOTS);
        self.nodes[HEAD as usize] = Node::sentinel(f32::NEG_INFINITY);
        self.nodes[TAIL as usize] = Node::sentinel(f32::INFINITY);
        self.free_node = 0;
        self.owner_map.clear();
        self.dense_owner.clear();
        self.live = 0;
    }
}
