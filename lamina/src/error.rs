//! Layout error types.
//!
//! Layout itself is total: `calculate_layout_that_fits` always returns a
//! layout and repairs bad input instead of failing. An inverted range is
//! fixed up (and logged) by `SizeRange::new`; a percent dimension against
//! an unbounded axis quietly falls back to the child's natural size. The
//! variants here cover the two places that do return `Result`: validating
//! a range explicitly, and joining a background layout task.

use thiserror::Error;

use crate::primitives::Size;

#[derive(Debug, Error)]
pub enum LayoutError {
    /// The minimum exceeds the maximum. Only `SizeRange::try_new` reports
    /// this; the infallible constructor repairs it instead.
    #[error("invalid size range: min {min:?} exceeds max {max:?}")]
    InvalidSizeRange { min: Size, max: Size },

    /// The worker task behind a background layout pass panicked or was
    /// cancelled.
    #[error("background layout task failed: {0}")]
    BackgroundTask(String),
}
