//! Persistent list used for every variable-length child collection.
//!
//! `List<T>` keeps the cons-list contract (`empty`, `cons`, head-to-tail
//! iteration, structural equality) but is backed by an `im::Vector`, so
//! cloning a list or deriving a new one from it shares the untouched chunks
//! with the original. Trees never mutate a list in place; every operation
//! returns a new list.
//!
//! The second half of this module lifts the structural node operations
//! (find, replace, delete, copy, normalisation, equivalence) to lists of
//! nodes.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::id::NodeId;
use crate::syntax::protocol::{Equivalence, Normalization, Placeholder, SyntaxNodeKind};
use crate::syntax::SyntaxNode;

// ============================================================================
// CORE LIST
// ============================================================================

/// An immutable, structurally shared sequence.
///
/// Serializes as a plain JSON array in iteration order.
///
/// # Examples
///
/// ```rust
/// use logic::List;
/// let list = List::from_sequence(vec![1, 2, 3]);
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
/// let longer = List::cons(0, &list);
/// assert_eq!(longer.len(), 4);
/// assert_eq!(*longer.at(0), 0);
/// assert_eq!(list.len(), 3);
/// ```
#[derive(Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: Deserialize<'de> + Clone"
))]
pub struct List<T: Clone>(Vector<T>);

impl<T: Clone> List<T> {
    pub fn empty() -> Self {
        Self(Vector::new())
    }

    /// Prepends `head` to `tail`. The tail is shared, not copied.
    pub fn cons(head: T, tail: &List<T>) -> Self {
        let mut items = tail.0.clone();
        items.push_front(head);
        Self(items)
    }

    /// Builds a list preserving the order of `items`.
    pub fn from_sequence<I: IntoIterator<Item = T>>(items: I) -> Self {
        Self(items.into_iter().collect())
    }

    /// Splits the list into its head and tail, or `None` for the empty list.
    pub fn uncons(&self) -> Option<(&T, List<T>)> {
        let head = self.0.front()?;
        Some((head, Self(self.0.clone().split_off(1))))
    }

    pub fn iter(&self) -> im::vector::Iter<'_, T> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`. An out-of-range index means the
    /// caller's view of the tree is corrupt.
    pub fn at(&self, index: usize) -> &T {
        match self.0.get(index) {
            Some(item) => item,
            None => panic!(
                "List index out of range: index {} but length is {}",
                index,
                self.0.len()
            ),
        }
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    pub fn first(&self) -> Option<&T> {
        self.0.front()
    }

    pub fn last(&self) -> Option<&T> {
        self.0.back()
    }

    pub fn map<U: Clone>(&self, f: impl FnMut(&T) -> U) -> List<U> {
        List(self.0.iter().map(f).collect())
    }

    pub fn filter(&self, mut predicate: impl FnMut(&T) -> bool) -> List<T> {
        Self(self.0.iter().filter(|item| predicate(*item)).cloned().collect())
    }

    pub fn filter_map<U: Clone>(&self, f: impl FnMut(&T) -> Option<U>) -> List<U> {
        List(self.0.iter().filter_map(f).collect())
    }

    pub fn reduce<A>(&self, initial: A, f: impl FnMut(A, &T) -> A) -> A {
        self.0.iter().fold(initial, f)
    }

    /// Returns a new list with `item` appended.
    pub fn appending(&self, item: T) -> Self {
        let mut items = self.0.clone();
        items.push_back(item);
        Self(items)
    }

    /// Returns a new list with `item` inserted at `index`, clamped to the
    /// list length.
    pub fn inserting(&self, index: usize, item: T) -> Self {
        let mut items = self.0.clone();
        let index = index.min(items.len());
        items.insert(index, item);
        Self(items)
    }

    /// True if both lists share the same underlying storage.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.0.ptr_eq(&other.0)
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.0.iter().cloned().collect()
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<T: Clone> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_sequence(iter)
    }
}

impl<T: Clone> From<Vec<T>> for List<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_sequence(items)
    }
}

impl<'a, T: Clone> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = im::vector::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ============================================================================
// NODE LISTS: structural operations lifted to lists
// ============================================================================

impl<T: SyntaxNodeKind> List<T> {
    /// Type-erased elements, in order.
    pub fn subnodes(&self) -> impl Iterator<Item = SyntaxNode> + '_ {
        self.0.iter().map(SyntaxNodeKind::to_node)
    }

    pub fn find(&self, id: NodeId) -> Option<SyntaxNode> {
        self.0.iter().find_map(|item| item.find(id))
    }

    /// True if one of the elements (not a descendant) has this id.
    pub fn contains_element(&self, id: NodeId) -> bool {
        self.0.iter().any(|item| item.id() == id)
    }

    /// Removes the element with this id, or deletes inside whichever element
    /// contains it. Placeholders are not restored here.
    pub fn delete(&self, id: NodeId) -> Self {
        self.filter_map(|item| item.delete(id))
    }

    pub fn copy(&self, deep: bool) -> Self {
        if deep {
            self.map(|item| item.copy(true))
        } else {
            self.clone()
        }
    }
}

impl<T: SyntaxNodeKind + Placeholder> List<T> {
    /// Replaces the node with this id wherever it occurs in the list.
    ///
    /// When one of the list's own elements was replaced and
    /// `preserving_ending_placeholder` is set, the result is re-normalised so
    /// the list keeps its trailing insertion point. A replacement of the
    /// wrong kind leaves the list as it was.
    pub fn replace(&self, id: NodeId, with: &SyntaxNode, preserving_ending_placeholder: bool) -> Self {
        let direct = self.contains_element(id) && T::from_node(with).is_some();
        let replaced = self.map(|item| item.replace_with_policy(id, with, preserving_ending_placeholder));
        if direct && preserving_ending_placeholder {
            replaced.normalized_placeholders()
        } else {
            replaced
        }
    }

    /// Normalises placeholders according to the element kind's policy.
    ///
    /// `Collapse` kinds lose every placeholder and gain exactly one fresh
    /// trailing placeholder; a list already in that shape is returned as is.
    /// `AppendIfMissing` kinds (declarations) only
    /// gain one when the list does not already end with a placeholder.
    pub fn normalized_placeholders(&self) -> Self {
        match T::NORMALIZATION {
            Normalization::Collapse => {
                let placeholders = self.iter().filter(|item| item.is_placeholder()).count();
                let ends_with_placeholder = self.last().is_some_and(Placeholder::is_placeholder);
                if placeholders == 1 && ends_with_placeholder {
                    return self.clone();
                }
                self.filter(|item| !item.is_placeholder())
                    .appending(T::make_placeholder())
            }
            Normalization::AppendIfMissing => match self.last() {
                Some(last) if last.is_placeholder() => self.clone(),
                _ => self.appending(T::make_placeholder()),
            },
        }
    }

    /// Normalises, then inserts `item` at `index` of the normalised list.
    pub fn inserting_normalized(&self, index: usize, item: T) -> Self {
        self.normalized_placeholders().inserting(index, item)
    }

    /// Elements that are not placeholders, in order.
    pub fn filled(&self) -> impl Iterator<Item = &T> + '_ {
        self.0.iter().filter(|item| !item.is_placeholder())
    }
}

impl<T> Equivalence for List<T>
where
    T: Clone + Equivalence + Placeholder,
{
    /// Placeholder-aware comparison: placeholders are ignored and the
    /// remaining elements must be pairwise equivalent.
    fn is_equivalent_to(&self, other: &Self) -> bool {
        let mut left = self.0.iter().filter(|item| !item.is_placeholder());
        let mut right = other.0.iter().filter(|item| !item.is_placeholder());
        loop {
            match (left.next(), right.next()) {
                (None, None) => return true,
                (Some(a), Some(b)) if a.is_equivalent_to(b) => continue,
                _ => return false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_lists_are_equal() {
        assert_eq!(List::<i32>::empty(), List::empty());
        assert!(List::<i32>::empty().is_empty());
    }

    #[test]
    fn cons_shares_tail_and_preserves_order() {
        let tail = List::from_sequence(vec!["b", "c"]);
        let list = List::cons("a", &tail);
        assert_eq!(list.to_vec(), vec!["a", "b", "c"]);
        assert_eq!(tail.to_vec(), vec!["b", "c"]);
    }

    #[test]
    fn uncons_walks_like_a_cons_list() {
        let list = List::from_sequence(vec![1, 2, 3]);
        let (head, tail) = list.uncons().unwrap();
        assert_eq!(*head, 1);
        assert_eq!(tail, List::from_sequence(vec![2, 3]));
        assert!(List::<i32>::empty().uncons().is_none());
    }

    #[test]
    fn iteration_is_restartable() {
        let list = List::from_sequence(vec![1, 2, 3]);
        let first: Vec<_> = list.iter().collect();
        let second: Vec<_> = list.iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn map_filter_reduce_preserve_order() {
        let list = List::from_sequence(1..=5);
        assert_eq!(list.map(|n| n * 10).to_vec(), vec![10, 20, 30, 40, 50]);
        assert_eq!(list.filter(|n| n % 2 == 1).to_vec(), vec![1, 3, 5]);
        let joined = list.reduce(String::new(), |acc, n| format!("{acc}{n}"));
        assert_eq!(joined, "12345");
    }

    #[test]
    fn inserting_clamps_to_length() {
        let list = List::from_sequence(vec![1, 2]);
        assert_eq!(list.inserting(1, 9).to_vec(), vec![1, 9, 2]);
        assert_eq!(list.inserting(99, 9).to_vec(), vec![1, 2, 9]);
    }

    #[test]
    #[should_panic(expected = "List index out of range")]
    fn at_past_the_end_panics() {
        let list = List::from_sequence(vec![1, 2, 3]);
        let _ = list.at(3);
    }

    #[test]
    fn serializes_as_flat_array() {
        let list = List::from_sequence(vec![1, 2, 3]);
        assert_eq!(serde_json::to_string(&list).unwrap(), "[1,2,3]");
        let back: List<i32> = serde_json::from_str("[1,2,3]").unwrap();
        assert_eq!(back, list);
    }

    #[test]
    fn replace_with_the_wrong_kind_keeps_the_list() {
        use crate::syntax::{Expression, Pattern, Statement};

        let statement = Statement::expression(Expression::identifier("a"));
        let list = List::from_sequence(vec![statement.clone()]);
        let replaced = list.replace(statement.id(), &Pattern::new("p").to_node(), true);
        assert_eq!(replaced, list);
    }

    #[test]
    fn replace_renormalizes_only_the_list_that_held_the_target() {
        use crate::syntax::{Expression, Statement};

        let statement = Statement::expression(Expression::identifier("a"));
        let list = List::from_sequence(vec![statement.clone()]);
        let with = Statement::expression(Expression::identifier("b"));

        let preserved = list.replace(statement.id(), &with.to_node(), true);
        assert_eq!(preserved.len(), 2);
        assert_eq!(preserved.at(0).id(), with.id());
        assert!(preserved.at(1).is_placeholder());

        let plain = list.replace(statement.id(), &with.to_node(), false);
        assert_eq!(plain.len(), 1);
        assert_eq!(list.replace(NodeId::new(), &with.to_node(), true), list);
    }
}
