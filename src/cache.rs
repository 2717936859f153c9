//! Identity lookup cache.
//!
//! Maps a root node to a flat `{id: node}` index of its whole tree, built
//! by one pre-order walk. Entries are keyed by the root's id and kept in
//! least-recently-used order; an entry only answers for the exact root
//! allocation it was built from, so a superseded tree that kept its root id
//! rebuilds instead of reading stale nodes.

use std::collections::HashMap;
use std::sync::Arc;

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::id::NodeId;
use crate::syntax::{SyntaxNode, SyntaxNodeKind};
use crate::traversal::TraversalConfig;

pub const DEFAULT_CAPACITY: usize = 16;

struct CacheEntry {
    root: Arc<SyntaxNode>,
    index: HashMap<NodeId, SyntaxNode>,
}

impl CacheEntry {
    fn build(root: &Arc<SyntaxNode>) -> Self {
        let mut index = HashMap::new();
        root.for_each_descendant(&mut TraversalConfig::pre_order(), |node, _| {
            index.entry(node.id()).or_insert_with(|| node.clone());
        });
        Self {
            root: Arc::clone(root),
            index,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub entries: usize,
}

/// Bounded LRU cache of per-root node indexes. A capacity of zero disables
/// caching; every lookup then walks the tree.
pub struct NodeCache {
    capacity: usize,
    entries: IndexMap<NodeId, CacheEntry>,
    stats: CacheStats,
}

impl NodeCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: IndexMap::new(),
            stats: CacheStats::default(),
        }
    }

    /// Looks `id` up in the tree under `root`.
    pub fn find(&mut self, root: &Arc<SyntaxNode>, id: NodeId) -> Option<SyntaxNode> {
        if self.capacity == 0 {
            return root.find(id);
        }

        let key = root.id();
        match self.entries.shift_remove(&key) {
            Some(entry) if Arc::ptr_eq(&entry.root, root) => {
                trace!(root = %key, node = %id, "node cache hit");
                self.stats.hits += 1;
                let found = entry.index.get(&id).cloned();
                self.entries.insert(key, entry);
                found
            }
            stale => {
                if stale.is_some() {
                    debug!(root = %key, "node cache entry built from another tree, rebuilding");
                }
                self.stats.misses += 1;
                let entry = CacheEntry::build(root);
                debug!(root = %key, nodes = entry.index.len(), "node cache built index");
                let found = entry.index.get(&id).cloned();
                self.entries.insert(key, entry);
                self.evict_if_needed();
                found
            }
        }
    }

    /// Drops the entry for `root_id`, if any.
    pub fn invalidate(&mut self, root_id: NodeId) {
        if self.entries.shift_remove(&root_id).is_some() {
            debug!(root = %root_id, "node cache invalidated");
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn contains_root(&self, root_id: NodeId) -> bool {
        self.entries.contains_key(&root_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            ..self.stats
        }
    }

    fn evict_if_needed(&mut self) {
        while self.entries.len() > self.capacity {
            if let Some((evicted, _)) = self.entries.shift_remove_index(0) {
                self.stats.evictions += 1;
                debug!(root = %evicted, "node cache evicted least recently used root");
            }
        }
    }
}

impl Default for NodeCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{Expression, Program, Statement};

    fn program_with(names: &[&str]) -> Program {
        Program::new(
            names
                .iter()
                .map(|name| Statement::expression(Expression::identifier(*name)))
                .collect(),
        )
    }

    #[test]
    fn warm_and_cold_lookups_agree() {
        let program = program_with(&["a", "b"]);
        let target = program.block.at(1).id();
        let root = Arc::new(program.to_node());

        let mut cache = NodeCache::new(4);
        let cold = cache.find(&root, target);
        let warm = cache.find(&root, target);
        assert_eq!(cold, warm);
        assert_eq!(cold, root.find(target));
        assert_eq!(cache.stats().hits, 1);
        assert_eq!(cache.stats().misses, 1);
    }

    #[test]
    fn least_recently_used_root_is_evicted() {
        let roots: Vec<_> = (0..3)
            .map(|_| Arc::new(program_with(&["x"]).to_node()))
            .collect();
        let mut cache = NodeCache::new(2);
        cache.find(&roots[0], roots[0].id());
        cache.find(&roots[1], roots[1].id());
        cache.find(&roots[0], roots[0].id());
        cache.find(&roots[2], roots[2].id());

        assert!(cache.contains_root(roots[0].id()));
        assert!(!cache.contains_root(roots[1].id()));
        assert!(cache.contains_root(roots[2].id()));
        assert_eq!(cache.stats().evictions, 1);
    }

    #[test]
    fn a_new_tree_with_the_same_root_id_is_not_served_stale() {
        let program = program_with(&["a"]);
        let old_root = Arc::new(program.to_node());
        let added = Statement::expression(Expression::identifier("b"));
        let new_root = Arc::new(old_root.insert(&added.to_node(), 1));
        assert_eq!(old_root.id(), new_root.id());

        let mut cache = NodeCache::new(4);
        assert!(cache.find(&old_root, added.id()).is_none());
        assert!(cache.find(&new_root, added.id()).is_some());
        assert!(cache.find(&old_root, added.id()).is_none());
    }

    #[test]
    fn zero_capacity_bypasses_the_cache() {
        let root = Arc::new(program_with(&["a"]).to_node());
        let mut cache = NodeCache::new(0);
        assert!(cache.find(&root, root.id()).is_some());
        assert!(cache.is_empty());
    }

    #[test]
    fn invalidate_drops_the_entry() {
        let root = Arc::new(program_with(&["a"]).to_node());
        let mut cache = NodeCache::default();
        cache.find(&root, root.id());
        assert!(cache.contains_root(root.id()));
        cache.invalidate(root.id());
        assert!(!cache.contains_root(root.id()));
    }
}
