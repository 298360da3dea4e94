use crate::error::{validate_view_range, AoiResult};
use fxhash::FxHashSet;

pub type EntityId = u32;
pub type IdSet = FxHashSet<EntityId>;

/// Arena slot of the chain head. Never freed, never registered.
pub(crate) const HEAD: u32 = 0;
/// Arena slot of the chain tail. Never freed, never registered.
pub(crate) const TAIL: u32 = 1;
/// Number of reserved sentinel slots at the front of the arena.
pub(crate) const SENTINEL_SLOTS: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoveRequest {
    pub id: EntityId,
    pub x: f32,
    pub y: f32,
}

/// Operation counters. `resorted_moves` counts moves that changed the
/// entity's position in at least one axis chain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AoiStats {
    pub enters: u64,
    pub moves: u64,
    pub leaves: u64,
    pub resorted_moves: u64,
    pub rejected: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Axis {
    X,
    Y,
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct ViewRange {
    pub(crate) x: f32,
    pub(crate) y: f32,
}

impl ViewRange {
    pub(crate) fn new(x: f32, y: f32) -> AoiResult<Self> {
        validate_view_range(x, y)?;
        Ok(Self { x, y })
    }

    #[inline(always)]
    pub(crate) fn contains(&self, dx: f32, dy: f32) -> bool {
        dx.abs() <= self.x && dy.abs() <= self.y
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct Node {
    pub(crate) id: EntityId,
    pub(crate) x: f32,
    pub(crate) y: f32,
    pub(crate) prev_x: u32,
    pub(crate) next_x: u32,
    pub(crate) prev_y: u32,
    pub(crate) next_y: u32,
    pub(crate) next_free: u32,
    pub(crate) alive: bool,
}

impl Node {
    pub(crate) fn sentinel(coord: f32) -> Self {
        Self {
            id: 0,
            x: coord,
            y: coord,
            prev_x: HEAD,
            next_x: TAIL,
            prev_y: HEAD,
            next_y: TAIL,
            next_free: 0,
            alive: false,
        }
    }

    pub(crate) fn live(id: EntityId, x: f32, y: f32) -> Self {
        Self {
            id,
            x,
            y,
            prev_x: HEAD,
            next_x: HEAD,
            prev_y: HEAD,
            next_y: HEAD,
            next_free: 0,
            alive: true,
        }
    }

    #[inline(always)]
    pub(crate) fn coord(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    #[inline(always)]
    pub(crate) fn prev(&self, axis: Axis) -> u32 {
        match axis {
            Axis::X => self.prev_x,
            Axis::Y => self.prev_y,
        }
    }

    #[inline(always)]
    pub(crate) fn next(&self, axis: Axis) -> u32 {
        match axis {
            Axis::X => self.next_x,
            Axis::Y => self.next_y,
        }
    }

    #[inline(always)]
    pub(crate) fn set_prev(&mut self, axis: Axis, idx: u32) {
        match axis {
            Axis::X => self.prev_x = idx,
            Axis::Y => self.prev_y = idx,
        }
    }

    #[inline(always)]
    pub(crate) fn set_next(&mut self, axis: Axis, idx: u32) {
        match axis {
            Axis::X => self.next_x = idx,
            Axis::Y => self.next_y = idx,
        }
    }
}
