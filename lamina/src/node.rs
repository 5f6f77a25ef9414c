//! Layout tree nodes.
//!
//! `LayoutNode` is the unit of the tree: either a leaf that measures its
//! own content or a stack of children. Parents own children exclusively
//! and there are no parent pointers, so the only way to a node is down
//! from the root. Mutation goes through accessors that drop cached
//! layouts, which makes reaching a descendant through `child_mut`
//! invalidate every node on the path and nothing else.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::attributes::StackAttributes;
use crate::cache::NodeCache;
use crate::layout::Layout;
use crate::primitives::Size;
use crate::size_range::SizeRange;
use crate::snapshot::LayoutSnapshot;
use crate::stack;
use crate::style::{Direction, StackStyle};

/// Counter for generating unique node IDs.
static NODE_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a layout node.
///
/// IDs survive snapshots: the copy a worker lays out reports the same IDs
/// as the tree the app mutates, so results map back without bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u64);

impl NodeId {
    /// Create a new unique node ID.
    ///
    /// Each call returns a different ID.
    pub fn new() -> Self {
        Self(NODE_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Create a stable node ID from a name.
    ///
    /// Deterministic: same name always produces the same ID.
    /// Uses the high bit to avoid collision with the atomic counter.
    pub fn named(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self(hasher.finish() | (1 << 63))
    }

    /// Create a node ID from an existing value.
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw numeric value.
    pub const fn raw(&self) -> u64 {
        self.0
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

/// Content measurement for leaf nodes.
///
/// Implementations report the natural size of their content under the
/// given range. The node clamps the result into the range afterwards, so
/// an oversized measurement is fine. Measures are shared between a tree
/// and its snapshots and called from worker threads, hence the bounds.
pub trait Measure: Send + Sync {
    /// Natural size of the content within `range`.
    fn measure(&self, range: SizeRange) -> Size;
}

impl<F> Measure for F
where
    F: Fn(SizeRange) -> Size + Send + Sync,
{
    fn measure(&self, range: SizeRange) -> Size {
        self(range)
    }
}

/// Content with a fixed natural size regardless of constraints.
#[derive(Debug, Clone, Copy)]
pub struct FixedSize(pub Size);

impl Measure for FixedSize {
    fn measure(&self, _range: SizeRange) -> Size {
        self.0
    }
}

/// What a node is made of.
enum NodeContent {
    /// Content measured by the application.
    Leaf(Arc<dyn Measure>),
    /// An ordered run of children.
    Stack(StackStyle),
}

impl Clone for NodeContent {
    fn clone(&self) -> Self {
        match self {
            NodeContent::Leaf(measure) => NodeContent::Leaf(Arc::clone(measure)),
            NodeContent::Stack(style) => NodeContent::Stack(*style),
        }
    }
}

/// A node in the layout tree.
pub struct LayoutNode {
    id: NodeId,
    attributes: StackAttributes,
    content: NodeContent,
    children: Vec<LayoutNode>,
    cache: NodeCache,
}

impl LayoutNode {
    /// Leaf node measuring its content through `measure`.
    pub fn leaf(measure: impl Measure + 'static) -> Self {
        Self::from_content(NodeContent::Leaf(Arc::new(measure)))
    }

    /// Leaf node with a fixed natural size.
    pub fn leaf_with_size(size: Size) -> Self {
        Self::leaf(FixedSize(size))
    }

    /// Stack node with the given configuration.
    pub fn stack(style: StackStyle) -> Self {
        Self::from_content(NodeContent::Stack(style))
    }

    /// Horizontal stack with default configuration.
    pub fn row() -> Self {
        Self::stack(StackStyle::new(Direction::Horizontal))
    }

    /// Vertical stack with default configuration.
    pub fn column() -> Self {
        Self::stack(StackStyle::new(Direction::Vertical))
    }

    fn from_content(content: NodeContent) -> Self {
        Self {
            id: NodeId::new(),
            attributes: StackAttributes::default(),
            content,
            children: Vec::new(),
            cache: NodeCache::new(),
        }
    }

    // =========================================================================
    // Builders
    // =========================================================================

    /// Append a child (builder form). Children only participate in layout
    /// when this node is a stack.
    pub fn push(mut self, child: LayoutNode) -> Self {
        self.invalidate_layout();
        self.children.push(child);
        self
    }

    /// Replace the stack attributes (builder form).
    pub fn with_attributes(mut self, attributes: StackAttributes) -> Self {
        self.invalidate_layout();
        self.attributes = attributes;
        self
    }

    /// Replace the auto-generated ID (builder form).
    pub fn with_id(mut self, id: NodeId) -> Self {
        self.invalidate_layout();
        self.id = id;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// This node's ID.
    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Stack attributes.
    #[inline]
    pub fn attributes(&self) -> &StackAttributes {
        &self.attributes
    }

    /// Stack attributes for mutation. Drops cached layouts.
    pub fn attributes_mut(&mut self) -> &mut StackAttributes {
        self.invalidate_layout();
        &mut self.attributes
    }

    /// Stack configuration, if this node is a stack.
    #[inline]
    pub fn style(&self) -> Option<&StackStyle> {
        match &self.content {
            NodeContent::Stack(style) => Some(style),
            NodeContent::Leaf(_) => None,
        }
    }

    /// Stack configuration for mutation. Drops cached layouts.
    pub fn style_mut(&mut self) -> Option<&mut StackStyle> {
        self.invalidate_layout();
        match &mut self.content {
            NodeContent::Stack(style) => Some(style),
            NodeContent::Leaf(_) => None,
        }
    }

    /// Whether this node is a stack.
    #[inline]
    pub fn is_stack(&self) -> bool {
        matches!(self.content, NodeContent::Stack(_))
    }

    /// Children, in layout order.
    #[inline]
    pub fn children(&self) -> &[LayoutNode] {
        &self.children
    }

    /// Number of children.
    #[inline]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// A child for mutation. Drops this node's cached layouts.
    ///
    /// Descending through `child_mut` at every level is the only way to
    /// reach a descendant, so each ancestor of a mutated node sheds its
    /// cache on the way down.
    pub fn child_mut(&mut self, index: usize) -> Option<&mut LayoutNode> {
        self.invalidate_layout();
        self.children.get_mut(index)
    }

    /// Append a child. Drops cached layouts.
    pub fn push_child(&mut self, child: LayoutNode) {
        self.invalidate_layout();
        self.children.push(child);
    }

    /// Insert a child at `index`. Drops cached layouts.
    pub fn insert_child(&mut self, index: usize, child: LayoutNode) {
        self.invalidate_layout();
        self.children.insert(index, child);
    }

    /// Remove and return the child at `index`. Drops cached layouts.
    pub fn remove_child(&mut self, index: usize) -> LayoutNode {
        self.invalidate_layout();
        self.children.remove(index)
    }

    /// Remove all children. Drops cached layouts.
    pub fn clear_children(&mut self) {
        self.invalidate_layout();
        self.children.clear();
    }

    /// Drop cached layouts for this node only.
    ///
    /// Structural and attribute edits invalidate on their own; call this
    /// when a leaf's `Measure` output changes for reasons the tree cannot
    /// see (new text, a loaded image).
    pub fn invalidate_layout(&mut self) {
        self.cache.clear();
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Compute a layout satisfying `range`.
    ///
    /// Never fails: ranges are normalized by construction and every child
    /// result is clamped, so the returned size always satisfies `range`.
    /// Results are memoized per node until the next mutation. The
    /// exclusive borrow is load-bearing: nothing can mutate this subtree
    /// while a pass is running.
    pub fn calculate_layout_that_fits(&mut self, range: SizeRange) -> Arc<Layout> {
        if let Some(cached) = self.cache.get(&range) {
            return cached;
        }

        let layout = match &mut self.content {
            NodeContent::Leaf(measure) => {
                let natural = measure.measure(range);
                Layout::leaf(self.id, range.constrain(natural))
            }
            NodeContent::Stack(style) => {
                stack::compute(self.id, *style, &mut self.children, range)
            }
        };

        let layout = Arc::new(layout);
        self.cache.insert(&range, Arc::clone(&layout));
        layout
    }

    /// Detached copy for a worker thread.
    ///
    /// Attributes, configuration, structure, and IDs are copied; leaf
    /// measure objects are shared. The copy starts with cold caches and
    /// owns its tree outright, so it can move to another thread while the
    /// original keeps mutating.
    pub fn snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot::new(self.detached_copy())
    }

    fn detached_copy(&self) -> LayoutNode {
        LayoutNode {
            id: self.id,
            attributes: self.attributes,
            content: self.content.clone(),
            children: self.children.iter().map(LayoutNode::detached_copy).collect(),
            cache: NodeCache::new(),
        }
    }
}

impl fmt::Debug for LayoutNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.content {
            NodeContent::Leaf(_) => "Leaf",
            NodeContent::Stack(_) => "Stack",
        };
        f.debug_struct("LayoutNode")
            .field("id", &self.id)
            .field("kind", &kind)
            .field("attributes", &self.attributes)
            .field("children", &self.children)
            .finish()
    }
}
