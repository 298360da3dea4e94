use std::fmt;

use crate::manager::EntityId;

#[derive(Debug, Clone, PartialEq)]
pub enum AoiError {
    DuplicateId { id: EntityId },
    UnknownId { id: EntityId },
    InvalidCoordinate { x: f32, y: f32 },
    InvalidViewRange { range_x: f32, range_y: f32 },
    CorruptChain { reason: String },
}

pub type AoiResult<T> = Result<T, AoiError>;

impl fmt::Display for AoiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AoiError::DuplicateId { id } => {
                write!(f, "entity is already tracked (id: {})", id)
            }
            AoiError::UnknownId { id } => {
                write!(f, "entity is not tracked (id: {})", id)
            }
            AoiError::InvalidCoordinate { x, y } => {
                write!(f, "coordinates must be finite (x: {}, y: {})", x, y)
            }
            AoiError::InvalidViewRange { range_x, range_y } => {
                write!(
                    f,
                    "view range must be finite and non-negative (range_x: {}, range_y: {})",
                    range_x, range_y
                )
            }
            AoiError::CorruptChain { reason } => {
                write!(f, "axis chains are inconsistent: {}", reason)
            }
        }
    }
}

impl std::error::Error for AoiError {}

#[inline(always)]
pub(crate) fn validate_coordinates(x: f32, y: f32) -> AoiResult<()> {
    if x.is_finite() && y.is_finite() {
        Ok(())
    } else {
        Err(AoiError::InvalidCoordinate { x, y })
    }
}

#[inline(always)]
pub(crate) fn validate_view_range(range_x: f32, range_y: f32) -> AoiResult<()> {
    if range_x.is_finite() && range_y.is_finite() && range_x >= 0.0 && range_y >= 0.0 {
        Ok(())
    } else {
        Err(AoiError::InvalidViewRange { range_x, range_y })
    }
}
