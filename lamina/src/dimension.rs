//! Flexible size values.
//!
//! A `Dimension` describes a size along one axis that may be absolute,
//! relative to the parent, or deferred to the content's own natural size.
//! It is the type of a child's flex basis.

/// A size value along one axis, resolved against the parent's space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Dimension {
    /// Absolute size in points.
    Points(f32),
    /// Fraction of the parent's size on the same axis (0.5 == 50%).
    Percent(f32),
    /// No opinion. The content's natural size wins.
    #[default]
    Unconstrained,
}

impl Dimension {
    /// Absolute dimension in points.
    #[inline]
    pub const fn points(value: f32) -> Self {
        Self::Points(value)
    }

    /// Dimension as a fraction of the parent.
    #[inline]
    pub const fn percent(fraction: f32) -> Self {
        Self::Percent(fraction)
    }

    /// Resolve against the parent's available space on the same axis.
    ///
    /// Returns `None` for `Unconstrained`, and for a percentage of an
    /// unbounded parent (there is nothing meaningful to take a fraction
    /// of). Callers treat `None` as "measure the natural size". Resolved
    /// values are clamped at zero.
    pub fn resolve(&self, parent: f32) -> Option<f32> {
        match self {
            Dimension::Points(value) => {
                debug_assert!(!value.is_nan(), "NaN dimension");
                Some(value.max(0.0))
            }
            Dimension::Percent(fraction) => {
                debug_assert!(!fraction.is_nan(), "NaN dimension");
                if parent.is_finite() {
                    Some((fraction * parent).max(0.0))
                } else {
                    None
                }
            }
            Dimension::Unconstrained => None,
        }
    }

    /// Whether this dimension can resolve to a concrete value.
    #[inline]
    pub fn is_constrained(&self) -> bool {
        !matches!(self, Dimension::Unconstrained)
    }
}
