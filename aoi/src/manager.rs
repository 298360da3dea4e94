//! Crossed linked list AOI manager.
//!
//! Every tracked entity is a node threaded through two sorted chains, one
//! ordered by X and one ordered by Y. Enter, move and leave keep both chains
//! sorted and collect the peers whose visibility changed during the same
//! walk, then hand them to an [`AoiListener`].

mod api;
mod chains;
mod config;
mod enter;
mod events;
mod leave;
mod range;
mod relocate;
mod storage;
mod types;

pub use config::Config;
pub use events::{AoiListener, CallbackListener, NoopListener, TracingListener};
pub use types::{AoiStats, EntityId, IdSet, MoveRequest};

use chains::ChainIter;
use events::EventSets;
use range::collect_range;
use storage::NodeStore;
use types::*;

pub struct AoiManager<L: AoiListener = NoopListener> {
    inner: ManagerInner,
    listener: L,
}

struct ManagerInner {
    store: NodeStore,
    range: ViewRange,
    events: EventSets,
    stats: AoiStats,
}
