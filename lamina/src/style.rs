//! Stack container configuration.
//!
//! A stack lays its children out along one axis. `StackStyle` carries the
//! per-container knobs: direction, spacing, padding, and how leftover
//! space and cross-axis placement are resolved.

use crate::primitives::{Point, Size};
use crate::size_range::SizeRange;

/// Direction children flow in a stack.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    /// Children flow left to right; the main axis is width.
    #[default]
    Horizontal,
    /// Children flow top to bottom; the main axis is height.
    Vertical,
}

impl Direction {
    /// Main-axis component of a size.
    #[inline]
    pub fn main(&self, size: Size) -> f32 {
        match self {
            Direction::Horizontal => size.width,
            Direction::Vertical => size.height,
        }
    }

    /// Cross-axis component of a size.
    #[inline]
    pub fn cross(&self, size: Size) -> f32 {
        match self {
            Direction::Horizontal => size.height,
            Direction::Vertical => size.width,
        }
    }

    /// Build a size from main and cross components.
    #[inline]
    pub fn size(&self, main: f32, cross: f32) -> Size {
        match self {
            Direction::Horizontal => Size::new(main, cross),
            Direction::Vertical => Size::new(cross, main),
        }
    }

    /// Build a point from main and cross components.
    #[inline]
    pub fn point(&self, main: f32, cross: f32) -> Point {
        match self {
            Direction::Horizontal => Point::new(main, cross),
            Direction::Vertical => Point::new(cross, main),
        }
    }

    /// Build a range from per-axis bounds.
    #[inline]
    pub fn range(&self, main_min: f32, main_max: f32, cross_min: f32, cross_max: f32) -> SizeRange {
        SizeRange::new(self.size(main_min, cross_min), self.size(main_max, cross_max))
    }

    /// Total padding along the main axis.
    #[inline]
    pub fn main_padding(&self, padding: &Padding) -> f32 {
        match self {
            Direction::Horizontal => padding.horizontal(),
            Direction::Vertical => padding.vertical(),
        }
    }

    /// Total padding along the cross axis.
    #[inline]
    pub fn cross_padding(&self, padding: &Padding) -> f32 {
        match self {
            Direction::Horizontal => padding.vertical(),
            Direction::Vertical => padding.horizontal(),
        }
    }

    /// Padding before content on the main axis.
    #[inline]
    pub fn main_leading(&self, padding: &Padding) -> f32 {
        match self {
            Direction::Horizontal => padding.left,
            Direction::Vertical => padding.top,
        }
    }

    /// Padding before content on the cross axis.
    #[inline]
    pub fn cross_leading(&self, padding: &Padding) -> f32 {
        match self {
            Direction::Horizontal => padding.top,
            Direction::Vertical => padding.left,
        }
    }
}

/// Distribution of leftover main-axis space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JustifyContent {
    /// Pack children at the start.
    #[default]
    Start,
    /// Center children.
    Center,
    /// Pack children at the end.
    End,
    /// Distribute space evenly between children.
    SpaceBetween,
    /// Distribute space evenly around children.
    SpaceAround,
}

/// Default cross-axis placement for children.
///
/// Individual children override this through their `align_self`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AlignItems {
    /// Align to start of cross axis.
    Start,
    /// Align to end of cross axis.
    End,
    /// Center on cross axis.
    Center,
    /// Stretch to fill cross axis.
    #[default]
    Stretch,
}

/// Padding around content.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Padding {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Padding {
    /// Create padding with explicit values for each side.
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self { top, right, bottom, left }
    }

    /// Uniform padding on all sides.
    pub fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Symmetric padding (horizontal, vertical).
    pub fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Total horizontal padding.
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Total vertical padding.
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

/// Configuration for a stack container.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StackStyle {
    /// Direction children flow.
    pub direction: Direction,
    /// Spacing between adjacent children, on top of their own
    /// spacing_before/spacing_after.
    pub spacing: f32,
    /// Distribution of leftover main-axis space.
    pub justify_content: JustifyContent,
    /// Default cross-axis placement.
    pub align_items: AlignItems,
    /// Padding around all children.
    pub padding: Padding,
}

impl StackStyle {
    /// Style with the given direction and default everything else.
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            ..Default::default()
        }
    }

    /// Horizontal stack style.
    pub fn horizontal() -> Self {
        Self::new(Direction::Horizontal)
    }

    /// Vertical stack style.
    pub fn vertical() -> Self {
        Self::new(Direction::Vertical)
    }

    /// Set spacing between adjacent children.
    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set leftover space distribution.
    pub fn with_justify(mut self, justify: JustifyContent) -> Self {
        self.justify_content = justify;
        self
    }

    /// Set default cross-axis placement.
    pub fn with_align_items(mut self, align: AlignItems) -> Self {
        self.align_items = align;
        self
    }

    /// Set padding around all children.
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Direction tests
    // =========================================================================

    #[test]
    fn direction_axis_decomposition() {
        let size = Size::new(100.0, 50.0);

        assert_eq!(Direction::Horizontal.main(size), 100.0);
        assert_eq!(Direction::Horizontal.cross(size), 50.0);
        assert_eq!(Direction::Vertical.main(size), 50.0);
        assert_eq!(Direction::Vertical.cross(size), 100.0);
    }

    #[test]
    fn direction_axis_composition() {
        assert_eq!(Direction::Horizontal.size(100.0, 50.0), Size::new(100.0, 50.0));
        assert_eq!(Direction::Vertical.size(100.0, 50.0), Size::new(50.0, 100.0));
        assert_eq!(Direction::Horizontal.point(10.0, 5.0), Point::new(10.0, 5.0));
        assert_eq!(Direction::Vertical.point(10.0, 5.0), Point::new(5.0, 10.0));
    }

    #[test]
    fn direction_composition_roundtrips() {
        let size = Size::new(100.0, 50.0);
        for dir in [Direction::Horizontal, Direction::Vertical] {
            assert_eq!(dir.size(dir.main(size), dir.cross(size)), size);
        }
    }

    #[test]
    fn direction_range() {
        let range = Direction::Vertical.range(10.0, 100.0, 0.0, 40.0);
        assert_eq!(range.min(), Size::new(0.0, 10.0));
        assert_eq!(range.max(), Size::new(40.0, 100.0));
    }

    #[test]
    fn direction_padding_views() {
        let padding = Padding::new(1.0, 2.0, 3.0, 4.0);

        assert_eq!(Direction::Horizontal.main_padding(&padding), 6.0);
        assert_eq!(Direction::Horizontal.cross_padding(&padding), 4.0);
        assert_eq!(Direction::Horizontal.main_leading(&padding), 4.0);
        assert_eq!(Direction::Horizontal.cross_leading(&padding), 1.0);

        assert_eq!(Direction::Vertical.main_padding(&padding), 4.0);
        assert_eq!(Direction::Vertical.cross_padding(&padding), 6.0);
        assert_eq!(Direction::Vertical.main_leading(&padding), 1.0);
        assert_eq!(Direction::Vertical.cross_leading(&padding), 4.0);
    }

    // =========================================================================
    // Padding tests
    // =========================================================================

    #[test]
    fn padding_sums() {
        let padding = Padding::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(padding.horizontal(), 6.0);
        assert_eq!(padding.vertical(), 4.0);
    }

    #[test]
    fn padding_all_and_symmetric() {
        assert_eq!(Padding::all(5.0).horizontal(), 10.0);
        assert_eq!(Padding::all(5.0).vertical(), 10.0);

        let symmetric = Padding::symmetric(8.0, 2.0);
        assert_eq!(symmetric.left, 8.0);
        assert_eq!(symmetric.right, 8.0);
        assert_eq!(symmetric.top, 2.0);
        assert_eq!(symmetric.bottom, 2.0);
    }

    // =========================================================================
    // StackStyle tests
    // =========================================================================

    #[test]
    fn style_defaults() {
        let style = StackStyle::default();
        assert_eq!(style.direction, Direction::Horizontal);
        assert_eq!(style.spacing, 0.0);
        assert_eq!(style.justify_content, JustifyContent::Start);
        assert_eq!(style.align_items, AlignItems::Stretch);
        assert_eq!(style.padding, Padding::default());
    }

    #[test]
    fn style_builders() {
        let style = StackStyle::vertical()
            .with_spacing(8.0)
            .with_justify(JustifyContent::SpaceBetween)
            .with_align_items(AlignItems::Center)
            .with_padding(Padding::all(4.0));

        assert_eq!(style.direction, Direction::Vertical);
        assert_eq!(style.spacing, 8.0);
        assert_eq!(style.justify_content, JustifyContent::SpaceBetween);
        assert_eq!(style.align_items, AlignItems::Center);
        assert_eq!(style.padding.horizontal(), 8.0);
    }
}
