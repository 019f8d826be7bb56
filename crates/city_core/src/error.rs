//! Error type shared by the composer and the rasterizers.

use thiserror::Error;

/// Everything that can abort a render.
///
/// The input-shape variants and `InvalidLayout` are raised before any layout
/// happens. `NegativeExtent` means a layout computation produced an impossible
/// block and is a bug, not a recoverable condition.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CityError {
    #[error("expected at least {expected} day records, got {found}")]
    NotEnoughDays { expected: usize, found: usize },

    #[error("day record {date} has weekday index {weekday}, expected 0..=6")]
    InvalidWeekday { date: String, weekday: u8 },

    #[error("day record {index} has no date")]
    MissingDate { index: usize },

    #[error("layout field `{field}` has unusable value {value}")]
    InvalidLayout { field: &'static str, value: f64 },

    #[error("block extents must be non-negative, got {width} x {depth} x {height}")]
    NegativeExtent { width: f32, depth: f32, height: f32 },
}

pub type CityResult<T> = Result<T, CityError>;
