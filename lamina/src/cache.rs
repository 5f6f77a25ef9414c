//! Per-node memoization of layout results.
//!
//! Layout passes hit the same subtree with the same range repeatedly: the
//! engine measures a child up to twice per pass, and an ancestor
//! re-laying out re-asks descendants ranges they have already answered.
//! Each node keeps a small LRU of range -> layout mappings, dropped
//! wholesale whenever the node (or any ancestor path to it) is mutated.

use std::num::NonZeroUsize;
use std::sync::Arc;

use lru::LruCache;

use crate::layout::Layout;
use crate::size_range::SizeRange;

/// Entries kept per node. Trees see a handful of distinct ranges per node
/// between mutations.
const CACHE_CAPACITY: NonZeroUsize = NonZeroUsize::new(8).unwrap();

/// Cache key: the exact bit pattern of a size range.
///
/// Bitwise equality is deliberate: 0.0 and -0.0 key apart and NaN never
/// matches. Float tolerance has no place in a cache key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct RangeKey {
    min_width: u32,
    min_height: u32,
    max_width: u32,
    max_height: u32,
}

impl RangeKey {
    #[inline]
    fn new(range: &SizeRange) -> Self {
        Self {
            min_width: range.min().width.to_bits(),
            min_height: range.min().height.to_bits(),
            max_width: range.max().width.to_bits(),
            max_height: range.max().height.to_bits(),
        }
    }
}

/// A small LRU of layout results for one node.
pub(crate) struct NodeCache {
    entries: LruCache<RangeKey, Arc<Layout>>,

    /// Stats for debugging
    #[cfg(debug_assertions)]
    hits: u64,
    #[cfg(debug_assertions)]
    misses: u64,
}

impl NodeCache {
    pub(crate) fn new() -> Self {
        Self {
            entries: LruCache::new(CACHE_CAPACITY),
            #[cfg(debug_assertions)]
            hits: 0,
            #[cfg(debug_assertions)]
            misses: 0,
        }
    }

    /// Look up the layout computed for `range`, if still valid.
    pub(crate) fn get(&mut self, range: &SizeRange) -> Option<Arc<Layout>> {
        match self.entries.get(&RangeKey::new(range)) {
            Some(layout) => {
                #[cfg(debug_assertions)]
                {
                    self.hits += 1;
                }
                Some(Arc::clone(layout))
            }
            None => {
                #[cfg(debug_assertions)]
                {
                    self.misses += 1;
                }
                None
            }
        }
    }

    /// Store a layout result, evicting the least recently used entry when
    /// full.
    pub(crate) fn insert(&mut self, range: &SizeRange, layout: Arc<Layout>) {
        self.entries.put(RangeKey::new(range), layout);
    }

    /// Drop every entry.
    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Get cache stats (debug builds only).
    #[cfg(all(test, debug_assertions))]
    pub(crate) fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }
}

impl Default for NodeCache {
    fn default() -> Self {
        Self::new()
    }
}
