//! Per-child stack attributes.
//!
//! Every node carries these whether or not it currently sits inside a
//! stack; they describe how the node behaves as a stack child. Growth and
//! shrink are binary opt-ins: leftover space and overflow split equally
//! among the children that raised their hand.

use crate::dimension::Dimension;
use crate::style::AlignItems;

/// Cross-axis alignment override for a single child.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AlignSelf {
    /// Inherit the stack's `align_items`.
    #[default]
    Auto,
    /// Align to start of cross axis.
    Start,
    /// Align to end of cross axis.
    End,
    /// Center on cross axis.
    Center,
    /// Stretch to fill cross axis.
    Stretch,
}

impl AlignSelf {
    /// Resolve against the parent stack's `align_items`.
    #[inline]
    pub fn resolve(&self, inherited: AlignItems) -> AlignItems {
        match self {
            AlignSelf::Auto => inherited,
            AlignSelf::Start => AlignItems::Start,
            AlignSelf::End => AlignItems::End,
            AlignSelf::Center => AlignItems::Center,
            AlignSelf::Stretch => AlignItems::Stretch,
        }
    }
}

/// How a node behaves as a child of a stack.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StackAttributes {
    /// Extra space before this child on the main axis.
    pub spacing_before: f32,
    /// Extra space after this child on the main axis.
    pub spacing_after: f32,
    /// Whether this child takes a share of leftover space.
    pub flex_grow: bool,
    /// Whether this child gives up a share of overflow.
    pub flex_shrink: bool,
    /// Initial main-axis size before flexing.
    pub flex_basis: Dimension,
    /// Cross-axis alignment override.
    pub align_self: AlignSelf,
}

impl StackAttributes {
    /// Attributes with all defaults: no spacing, no flexing, natural size.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set spacing before this child on the main axis.
    pub fn with_spacing_before(mut self, spacing: f32) -> Self {
        self.spacing_before = spacing;
        self
    }

    /// Set spacing after this child on the main axis.
    pub fn with_spacing_after(mut self, spacing: f32) -> Self {
        self.spacing_after = spacing;
        self
    }

    /// Opt in or out of growing into leftover space.
    pub fn with_flex_grow(mut self, grow: bool) -> Self {
        self.flex_grow = grow;
        self
    }

    /// Opt in or out of shrinking under overflow.
    pub fn with_flex_shrink(mut self, shrink: bool) -> Self {
        self.flex_shrink = shrink;
        self
    }

    /// Set the initial main-axis size.
    pub fn with_flex_basis(mut self, basis: Dimension) -> Self {
        self.flex_basis = basis;
        self
    }

    /// Set the cross-axis alignment override.
    pub fn with_align_self(mut self, align: AlignSelf) -> Self {
        self.align_self = align;
        self
    }
}
