//! Lamina: Asynchronous Stacking Layout Engine
//!
//! Lamina measures trees of nodes inside flexible size ranges:
//! - Single-axis stacks with flexbox-style grow, shrink, and alignment
//! - Range-based measurement (tight, loose, or unbounded per axis)
//! - Per-node layout caches invalidated by the tree's own mutators
//! - Detached snapshots for layout on background threads
//!
//! # Architecture
//!
//! The core type is `LayoutNode`, a tree of measurable leaves and stack
//! containers. Asking the root `calculate_layout_that_fits` for a
//! `SizeRange` produces an immutable `Layout` tree of sizes and child
//! positions, which `flatten` turns into absolute frames. Layout never
//! fails: inverted ranges are repaired on construction, and dimensions
//! that cannot resolve fall back to the child's natural size.
//!
//! # Usage
//!
//! ```ignore
//! use lamina::{Dimension, LayoutNode, Size, SizeRange, StackAttributes};
//!
//! let mut root = LayoutNode::row()
//!     .push(LayoutNode::leaf_with_size(Size::new(80.0, 24.0)))
//!     .push(
//!         LayoutNode::leaf_with_size(Size::new(40.0, 24.0)).with_attributes(
//!             StackAttributes::new()
//!                 .with_flex_basis(Dimension::percent(0.25))
//!                 .with_flex_grow(true),
//!         ),
//!     );
//!
//! let layout = root.calculate_layout_that_fits(SizeRange::tight(Size::new(320.0, 24.0)));
//! for (node, frame) in layout.flatten() {
//!     println!("{node:?} -> {frame:?}");
//! }
//! ```

// Core primitives
pub mod primitives;
pub mod dimension;
pub mod size_range;

// Stack styling and per-child attributes
pub mod attributes;
pub mod style;

// Node tree and layout results
pub mod layout;
pub mod node;

// Off-thread layout
pub mod snapshot;

pub mod error;

// Engine internals
mod cache;
mod stack;

// Re-export core types
pub use primitives::{Point, Rect, Size};
pub use dimension::Dimension;
pub use size_range::SizeRange;
pub use attributes::{AlignSelf, StackAttributes};
pub use style::{AlignItems, Direction, JustifyContent, Padding, StackStyle};
pub use layout::{ChildLayout, Layout};
pub use node::{FixedSize, LayoutNode, Measure, NodeId};
pub use snapshot::{calculate_layout_in_background, LayoutSnapshot};
pub use error::LayoutError;
