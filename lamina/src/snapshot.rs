//! Detached trees for off-thread layout.
//!
//! A node tree is single-owner mutable state, so a layout pass and a tree
//! edit can never overlap on the same tree. To lay out without blocking
//! the thread that owns the tree, take a [`LayoutSnapshot`] and hand it to
//! [`calculate_layout_in_background`]; the original stays editable while
//! the copy is measured on a worker thread.

use std::sync::Arc;

use tokio::task::spawn_blocking;
use tracing::debug;

use crate::error::LayoutError;
use crate::layout::Layout;
use crate::node::{LayoutNode, NodeId};
use crate::size_range::SizeRange;

/// A deep copy of a node tree, detached from the original.
///
/// Produced by [`LayoutNode::snapshot`]. The copy owns its own attributes
/// and caches, shares the original's measure functions, and keeps the
/// original's node ids so frames computed here map back onto the source
/// tree.
#[derive(Debug)]
pub struct LayoutSnapshot {
    root: LayoutNode,
}

impl LayoutSnapshot {
    pub(crate) fn new(root: LayoutNode) -> Self {
        Self { root }
    }

    /// Id of the copied root, equal to the original root's id.
    pub fn root_id(&self) -> NodeId {
        self.root.id()
    }

    /// Lay the snapshot out, same semantics as
    /// [`LayoutNode::calculate_layout_that_fits`] on the original tree.
    pub fn calculate_layout_that_fits(&mut self, range: SizeRange) -> Arc<Layout> {
        self.root.calculate_layout_that_fits(range)
    }
}

/// Run a layout pass on a worker thread.
///
/// Takes the snapshot by value, so nothing can touch the copied tree while
/// the pass runs. Fails only if the worker task itself dies; the pass is
/// total and never errors on its own.
pub async fn calculate_layout_in_background(
    mut snapshot: LayoutSnapshot,
    range: SizeRange,
) -> Result<Arc<Layout>, LayoutError> {
    debug!(root = snapshot.root_id().raw(), ?range, "background layout pass");
    spawn_blocking(move || snapshot.calculate_layout_that_fits(range))
        .await
        .map_err(|err| LayoutError::BackgroundTask(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::Size;

    fn require_send<T: Send>(_value: &T) {}

    #[test]
    fn snapshots_are_send() {
        let node = LayoutNode::leaf_with_size(Size::new(10.0, 10.0));
        require_send(&node.snapshot());
    }

    #[tokio::test]
    async fn background_layout_matches_foreground() {
        let mut row = LayoutNode::row()
            .push(LayoutNode::leaf_with_size(Size::new(50.0, 20.0)))
            .push(LayoutNode::leaf_with_size(Size::new(30.0, 20.0)));
        let range = SizeRange::loose(Size::new(500.0, 100.0));

        let background = calculate_layout_in_background(row.snapshot(), range)
            .await
            .unwrap();
        let foreground = row.calculate_layout_that_fits(range);

        assert_eq!(*background, *foreground);
    }

    #[tokio::test]
    async fn edits_after_snapshotting_stay_out_of_the_copy() {
        let mut row = LayoutNode::row().push(LayoutNode::leaf_with_size(Size::new(40.0, 10.0)));
        let snapshot = row.snapshot();

        row.push_child(LayoutNode::leaf_with_size(Size::new(99.0, 10.0)));

        let layout = calculate_layout_in_background(snapshot, SizeRange::loose(Size::new(500.0, 100.0)))
            .await
            .unwrap();
        assert_eq!(layout.size().width, 40.0);
    }
}
