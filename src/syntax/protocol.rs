//! The contract every node kind implements.
//!
//! Structural operations are total: a missing target yields `None` or the
//! unchanged node, and a replacement of the wrong kind is a silent no-op.
//! Checked variants that report these cases live on
//! [`Document`](crate::document::Document).

use std::sync::Arc;

use crate::id::NodeId;
use crate::syntax::SyntaxNode;

/// Where the editor should move focus after a fragment was inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    None,
    Next,
    Node(NodeId),
}

/// Structural comparison that ignores node identity.
pub trait Equivalence {
    fn is_equivalent_to(&self, other: &Self) -> bool;
}

/// How a list of this kind treats placeholders when normalised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalization {
    /// Drop every placeholder, then append exactly one.
    Collapse,
    /// Append one only when the list does not already end with one.
    AppendIfMissing,
}

/// Node kinds with an "empty slot" value.
pub trait Placeholder: Sized {
    const NORMALIZATION: Normalization = Normalization::Collapse;

    fn is_placeholder(&self) -> bool;

    /// A fresh empty slot. Every call gets a new identity.
    fn make_placeholder() -> Self;
}

pub trait SyntaxNodeKind: Clone + Equivalence {
    fn id(&self) -> NodeId;

    /// Wraps a copy of this node in the type-erased [`SyntaxNode`].
    fn to_node(&self) -> SyntaxNode;

    /// Extracts (or coerces) a node of this kind from a type-erased node.
    fn from_node(node: &SyntaxNode) -> Option<Self>;

    /// Direct structural children. Must list every payload field that is a
    /// node, or the generic operations below skip that field.
    fn subnodes(&self) -> Vec<SyntaxNode>;

    /// Children in the order a traversal visits them.
    fn traversal_children(&self) -> Vec<SyntaxNode> {
        self.subnodes()
    }

    /// Replaces the node `id` with `with`. Child lists that directly held the
    /// target are re-normalised when `preserving_ending_placeholder` is set.
    fn replace_with_policy(&self, id: NodeId, with: &SyntaxNode, preserving_ending_placeholder: bool)
        -> Self;

    fn replace(&self, id: NodeId, with: &SyntaxNode) -> Self {
        self.replace_with_policy(id, with, true)
    }

    /// `None` means "remove me"; the parent drops or refills the slot.
    fn delete(&self, id: NodeId) -> Option<Self>;

    /// Inserts `child` into this node's own collection of matching kind.
    fn insert(&self, _child: &SyntaxNode, _index: usize) -> Self {
        self.clone()
    }

    fn copy(&self, deep: bool) -> Self;

    /// Normalises placeholders in this node's own child lists (not deeper).
    fn normalized_children(&self) -> Self {
        self.clone()
    }

    /// Wrapper kinds that paths skip unless asked for.
    fn is_top_level(&self) -> bool {
        false
    }

    fn accepts_line_drag(&self, _root: &SyntaxNode) -> bool {
        false
    }

    /// Kind table for [`accepts_node`](Self::accepts_node), ignoring position.
    fn accepts_child(&self, _child: &SyntaxNode) -> bool {
        false
    }

    /// Whether `child` may be dropped or inserted into this node. A node never
    /// accepts itself or one of its own ancestors.
    fn accepts_node(&self, root: &SyntaxNode, child: &SyntaxNode) -> bool {
        let own_id = self.id();
        if child.id() == own_id {
            return false;
        }
        let is_ancestor = match root.path_to(own_id, true) {
            Some(path) => path.iter().any(|node| node.id() == child.id()),
            None => child.contains(own_id),
        };
        !is_ancestor && self.accepts_child(child)
    }

    fn movement_after_insertion(&self, _root: &SyntaxNode) -> Movement {
        Movement::Next
    }

    fn is_selectable(&self) -> bool {
        !self.is_top_level()
    }

    fn contains(&self, id: NodeId) -> bool {
        self.find(id).is_some()
    }

    /// Depth-first, pre-order search including `self`.
    fn find(&self, id: NodeId) -> Option<SyntaxNode> {
        if self.id() == id {
            return Some(self.to_node());
        }
        self.subnodes().iter().find_map(|child| child.find(id))
    }

    /// Chain of nodes from `self` down to the target, outermost first.
    /// Top-level wrappers are left out unless `include_top_level` is set.
    fn path_to(&self, id: NodeId, include_top_level: bool) -> Option<Vec<SyntaxNode>> {
        let node = self.to_node();
        if self.id() == id {
            return Some(vec![node]);
        }
        let below = self
            .subnodes()
            .iter()
            .find_map(|child| child.path_to(id, include_top_level))?;
        if !include_top_level && !self.is_selectable() {
            return Some(below);
        }
        let mut path = Vec::with_capacity(below.len() + 1);
        path.push(node);
        path.extend(below);
        Some(path)
    }
}

// ============================================================================
// SHARED HELPERS
// ============================================================================

impl<T: Equivalence> Equivalence for Arc<T> {
    fn is_equivalent_to(&self, other: &Self) -> bool {
        T::is_equivalent_to(self, other)
    }
}

/// An absent optional and a placeholder are the same empty slot.
impl<T: Equivalence + Placeholder> Equivalence for Option<T> {
    fn is_equivalent_to(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.is_equivalent_to(b),
            (Some(only), None) | (None, Some(only)) => only.is_placeholder(),
            (None, None) => true,
        }
    }
}

/// Copies a child for [`SyntaxNodeKind::copy`]: fresh ids only when deep.
pub(crate) fn copy_child<T: SyntaxNodeKind>(child: &T, deep: bool) -> T {
    if deep {
        child.copy(true)
    } else {
        child.clone()
    }
}

pub(crate) fn copy_arc<T: SyntaxNodeKind>(child: &Arc<T>, deep: bool) -> Arc<T> {
    if deep {
        Arc::new(child.copy(true))
    } else {
        Arc::clone(child)
    }
}

pub(crate) fn copy_optional<T: SyntaxNodeKind>(child: &Option<T>, deep: bool) -> Option<T> {
    child.as_ref().map(|child| copy_child(child, deep))
}

pub(crate) fn replace_arc<T: SyntaxNodeKind>(
    child: &Arc<T>,
    id: NodeId,
    with: &SyntaxNode,
    preserving: bool,
) -> Arc<T> {
    // Untouched subtrees keep sharing their allocation.
    if !child.contains(id) {
        return Arc::clone(child);
    }
    Arc::new(child.replace_with_policy(id, with, preserving))
}

pub(crate) fn replace_optional<T: SyntaxNodeKind>(
    child: &Option<T>,
    id: NodeId,
    with: &SyntaxNode,
    preserving: bool,
) -> Option<T> {
    child
        .as_ref()
        .map(|child| child.replace_with_policy(id, with, preserving))
}

/// Deletes inside a required slot; a removed child is refilled with a fresh
/// placeholder so the slot stays editable.
pub(crate) fn delete_required<T: SyntaxNodeKind + Placeholder>(child: &T, id: NodeId) -> T {
    child.delete(id).unwrap_or_else(T::make_placeholder)
}

pub(crate) fn delete_arc<T: SyntaxNodeKind + Placeholder>(child: &Arc<T>, id: NodeId) -> Arc<T> {
    if !child.contains(id) {
        return Arc::clone(child);
    }
    Arc::new(delete_required(child.as_ref(), id))
}

pub(crate) fn delete_optional<T: SyntaxNodeKind>(child: &Option<T>, id: NodeId) -> Option<T> {
    child.as_ref().and_then(|child| child.delete(id))
}

/// Focuses the first slot that is still empty in `root`, or moves on.
pub(crate) fn focus_first_empty(root: &SyntaxNode, slots: &[SyntaxNode]) -> Movement {
    slots
        .iter()
        .map(|slot| root.find(slot.id()).unwrap_or_else(|| slot.clone()))
        .find(SyntaxNode::is_empty_slot)
        .map_or(Movement::Next, |slot| Movement::Node(slot.id()))
}

impl<T: Placeholder> Placeholder for Arc<T> {
    const NORMALIZATION: Normalization = T::NORMALIZATION;

    fn is_placeholder(&self) -> bool {
        T::is_placeholder(self)
    }

    fn make_placeholder() -> Self {
        Arc::new(T::make_placeholder())
    }
}
