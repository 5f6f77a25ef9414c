//! Immutable layout results.
//!
//! A `Layout` records the outcome of one layout pass: the size a node
//! resolved to and where each child landed relative to the node's own
//! origin. Results are shared via `Arc` and never mutated after
//! construction; the per-node cache and the engine hand out clones of the
//! same allocation.

use std::sync::Arc;

use crate::node::NodeId;
use crate::primitives::{Point, Rect, Size};

/// A positioned child layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ChildLayout {
    /// Offset from the parent's origin.
    pub position: Point,
    /// The child's own layout.
    pub layout: Arc<Layout>,
}

/// The result of laying out one node.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    node: NodeId,
    size: Size,
    children: Vec<ChildLayout>,
}

impl Layout {
    /// Layout for a node with no children.
    pub(crate) fn leaf(node: NodeId, size: Size) -> Self {
        Self {
            node,
            size,
            children: Vec::new(),
        }
    }

    pub(crate) fn with_children(node: NodeId, size: Size, children: Vec<ChildLayout>) -> Self {
        Self { node, size, children }
    }

    /// The node this layout belongs to.
    #[inline]
    pub const fn node_id(&self) -> NodeId {
        self.node
    }

    /// The resolved size.
    #[inline]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Positioned child layouts, in the node's child order.
    #[inline]
    pub fn children(&self) -> &[ChildLayout] {
        &self.children
    }

    /// Find the layout for a node anywhere in this subtree.
    pub fn find(&self, id: NodeId) -> Option<&Layout> {
        if self.node == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.layout.find(id))
    }

    /// Flatten the subtree into absolute frames, depth-first.
    ///
    /// The root frame sits at the origin; every descendant frame is
    /// expressed in the root's coordinate space.
    pub fn flatten(&self) -> Vec<(NodeId, Rect)> {
        let mut frames = Vec::new();
        self.collect_frames(Point::ORIGIN, &mut frames);
        frames
    }

    fn collect_frames(&self, origin: Point, frames: &mut Vec<(NodeId, Rect)>) {
        frames.push((self.node, Rect::from_origin_size(origin, self.size)));
        for child in &self.children {
            child.layout.collect_frames(origin + child.position, frames);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nested() -> Layout {
        // root (100x100)
        //   └── inner (60x40) at (10, 20)
        //         └── leaf (30x10) at (5, 5)
        let leaf = Arc::new(Layout::leaf(NodeId::from_raw(3), Size::new(30.0, 10.0)));
        let inner = Arc::new(Layout::with_children(
            NodeId::from_raw(2),
            Size::new(60.0, 40.0),
            vec![ChildLayout {
                position: Point::new(5.0, 5.0),
                layout: leaf,
            }],
        ));
        Layout::with_children(
            NodeId::from_raw(1),
            Size::new(100.0, 100.0),
            vec![ChildLayout {
                position: Point::new(10.0, 20.0),
                layout: inner,
            }],
        )
    }

    #[test]
    fn find_locates_descendants() {
        let layout = nested();

        assert_eq!(layout.find(NodeId::from_raw(1)).map(Layout::size), Some(Size::new(100.0, 100.0)));
        assert_eq!(layout.find(NodeId::from_raw(3)).map(Layout::size), Some(Size::new(30.0, 10.0)));
        assert!(layout.find(NodeId::from_raw(99)).is_none());
    }

    #[test]
    fn flatten_accumulates_offsets() {
        let layout = nested();
        let frames = layout.flatten();

        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0], (NodeId::from_raw(1), Rect::new(0.0, 0.0, 100.0, 100.0)));
        assert_eq!(frames[1], (NodeId::from_raw(2), Rect::new(10.0, 20.0, 60.0, 40.0)));
        assert_eq!(frames[2], (NodeId::from_raw(3), Rect::new(15.0, 25.0, 30.0, 10.0)));
    }

    #[test]
    fn children_preserve_order() {
        let a = Arc::new(Layout::leaf(NodeId::from_raw(10), Size::new(1.0, 1.0)));
        let b = Arc::new(Layout::leaf(NodeId::from_raw(11), Size::new(2.0, 2.0)));
        let parent = Layout::with_children(
            NodeId::from_raw(1),
            Size::new(10.0, 10.0),
            vec![
                ChildLayout { position: Point::ORIGIN, layout: a },
                ChildLayout { position: Point::new(1.0, 0.0), layout: b },
            ],
        );

        let ids: Vec<_> = parent.children().iter().map(|c| c.layout.node_id()).collect();
        assert_eq!(ids, vec![NodeId::from_raw(10), NodeId::from_raw(11)]);
    }
}
