//! Mapping between a formatter's element stream and the tree.
//!
//! A formatter turns a tree into a flat sequence of display elements, some
//! of which remember the node they came from. These helpers only rely on
//! that optional back-reference.

use std::collections::HashSet;
use std::ops::Range;

use crate::id::NodeId;
use crate::syntax::{SyntaxNode, SyntaxNodeKind};
use crate::traversal::TraversalConfig;

pub trait FormattedElement {
    fn syntax_node_id(&self) -> Option<NodeId>;
}

impl FormattedElement for Option<NodeId> {
    fn syntax_node_id(&self) -> Option<NodeId> {
        *self
    }
}

/// Ids of `id` and everything below it in `root`.
fn subtree_ids(root: &SyntaxNode, id: NodeId) -> Option<HashSet<NodeId>> {
    let node = root.find(id)?;
    let mut ids = HashSet::new();
    node.for_each_descendant(&mut TraversalConfig::pre_order(), |node, _| {
        ids.insert(node.id());
    });
    Some(ids)
}

/// The smallest range of elements covering everything produced for the
/// subtree `id`, or `None` if no element belongs to it.
pub fn element_range<E: FormattedElement>(
    elements: &[E],
    root: &SyntaxNode,
    id: NodeId,
) -> Option<Range<usize>> {
    let ids = subtree_ids(root, id)?;
    let owned = |element: &E| element.syntax_node_id().is_some_and(|id| ids.contains(&id));
    let start = elements.iter().position(owned)?;
    let end = elements.iter().rposition(owned)?;
    Some(start..end + 1)
}

/// Path to the node that produced the element at `index`. Elements without
/// a back-reference belong to the nearest earlier element that has one.
pub fn owner_path<E: FormattedElement>(
    elements: &[E],
    index: usize,
    root: &SyntaxNode,
) -> Option<Vec<SyntaxNode>> {
    let owner = elements
        .get(..=index)?
        .iter()
        .rev()
        .find_map(FormattedElement::syntax_node_id)?;
    root.path_to(owner, false)
}
