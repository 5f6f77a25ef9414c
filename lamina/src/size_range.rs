//! Size constraints for layout passes.
//!
//! A `SizeRange` is the min/max box handed to a node when it lays out.
//! Ranges are normalized at construction, so downstream math never sees a
//! minimum above the corresponding maximum. Minimums must be finite;
//! maximums may be infinite per axis.

use tracing::warn;

use crate::error::LayoutError;
use crate::primitives::Size;
use crate::style::Padding;

/// Min/max bounds a layout result must satisfy, per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeRange {
    min: Size,
    max: Size,
}

impl SizeRange {
    /// Unbounded range (zero minimum, infinite maximum).
    pub const UNBOUNDED: Self = Self {
        min: Size::ZERO,
        max: Size {
            width: f32::INFINITY,
            height: f32::INFINITY,
        },
    };

    /// Create a range, repairing a degenerate pair.
    ///
    /// Negative components clamp to zero. A maximum below the minimum is
    /// lifted up to the minimum; the repair is logged rather than surfaced,
    /// since layout must always produce a result. Use [`SizeRange::try_new`]
    /// to reject the violation instead.
    pub fn new(min: Size, max: Size) -> Self {
        debug_assert!(!min.width.is_nan() && !min.height.is_nan(), "NaN in range minimum");
        debug_assert!(!max.width.is_nan() && !max.height.is_nan(), "NaN in range maximum");
        debug_assert!(min.is_finite(), "range minimum must be finite");

        let min = Size::new(min.width.max(0.0), min.height.max(0.0));
        let max = Size::new(max.width.max(0.0), max.height.max(0.0));
        if max.width < min.width || max.height < min.height {
            warn!(?min, ?max, "degenerate size range, lifting max to min");
            let max = Size::new(max.width.max(min.width), max.height.max(min.height));
            return Self { min, max };
        }
        Self { min, max }
    }

    /// Strict constructor: rejects a degenerate pair instead of repairing.
    pub fn try_new(min: Size, max: Size) -> Result<Self, LayoutError> {
        if max.width < min.width || max.height < min.height {
            return Err(LayoutError::InvalidSizeRange { min, max });
        }
        Ok(Self::new(min, max))
    }

    /// Exact size required (min == max).
    #[inline]
    pub fn tight(size: Size) -> Self {
        Self::new(size, size)
    }

    /// Zero minimum up to the given maximum.
    #[inline]
    pub fn loose(max: Size) -> Self {
        Self::new(Size::ZERO, max)
    }

    /// The minimum admitted size.
    #[inline]
    pub const fn min(&self) -> Size {
        self.min
    }

    /// The maximum admitted size.
    #[inline]
    pub const fn max(&self) -> Size {
        self.max
    }

    /// Clamp a size into this range.
    #[inline(always)]
    pub fn constrain(&self, size: Size) -> Size {
        debug_assert!(!size.width.is_nan(), "NaN width in layout");
        debug_assert!(!size.height.is_nan(), "NaN height in layout");
        Size {
            width: size.width.clamp(self.min.width, self.max.width),
            height: size.height.clamp(self.min.height, self.max.height),
        }
    }

    /// Check if a size satisfies this range.
    #[inline]
    pub fn is_satisfied_by(&self, size: Size) -> bool {
        size.width >= self.min.width
            && size.width <= self.max.width
            && size.height >= self.min.height
            && size.height <= self.max.height
    }

    /// Narrow to the sizes admitted by both ranges.
    ///
    /// Takes the larger minimum and the smaller maximum per axis. A
    /// disjoint pair collapses to a tight range at the larger minimum
    /// rather than failing.
    pub fn intersect(&self, other: &SizeRange) -> SizeRange {
        Self::new(
            Size::new(
                self.min.width.max(other.min.width),
                self.min.height.max(other.min.height),
            ),
            Size::new(
                self.max.width.min(other.max.width),
                self.max.height.min(other.max.height),
            ),
        )
    }

    /// Shrink both bounds by padding, flooring at zero.
    pub fn deflate(&self, padding: &Padding) -> Self {
        Self {
            min: Size::new(
                (self.min.width - padding.horizontal()).max(0.0),
                (self.min.height - padding.vertical()).max(0.0),
            ),
            max: Size::new(
                (self.max.width - padding.horizontal()).max(0.0),
                (self.max.height - padding.vertical()).max(0.0),
            ),
        }
    }

    /// Check if max width is finite (bounded).
    #[inline]
    pub fn has_bounded_width(&self) -> bool {
        self.max.width.is_finite()
    }

    /// Check if max height is finite (bounded).
    #[inline]
    pub fn has_bounded_height(&self) -> bool {
        self.max.height.is_finite()
    }

    /// Whether this range admits exactly one size.
    #[inline]
    pub fn is_tight(&self) -> bool {
        self.min.width == self.max.width && self.min.height == self.max.height
    }
}

impl Default for SizeRange {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}
