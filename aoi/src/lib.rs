pub mod error;
pub mod manager;

pub use error::{AoiError, AoiResult};
pub use manager::{
    AoiListener, AoiManager, AoiStats, CallbackListener, Config, EntityId, IdSet, MoveRequest,
    NoopListener, TracingListener,
};
