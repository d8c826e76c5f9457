use thiserror::Error;

use crate::element::ElementId;

/// Errors from floor-plan mutations. Invalid references are reported
/// explicitly rather than silently ignored, so every caller sees the same
/// discipline as name validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("element name must not be empty")]
    EmptyName,

    #[error("no element with id {0}")]
    ElementNotFound(ElementId),

    #[error("element dimensions must be positive (got {width}x{height})")]
    InvalidSize { width: i32, height: i32 },

    #[error("element position must be non-negative (got ({x}, {y}))")]
    InvalidPosition { x: i32, y: i32 },

    #[error("floor must be a positive number (got {0})")]
    InvalidFloor(u32),
}

/// Result type for floor-plan mutations.
pub type LayoutResult<T> = Result<T, LayoutError>;
