//! Editing session over one syntax tree.
//!
//! A [`Document`] owns the current root, the identity cache for it and the
//! editing policy. Every edit builds a new root, invalidates the cache entry
//! of the old one and swaps the new root in; snapshots taken earlier with
//! [`Document::snapshot`] keep seeing the tree they were taken from.
//!
//! The `try_*` methods report edits that would not change anything. The
//! plain variants log the reason and leave the tree as it was, for callers
//! that edit speculatively.

use std::sync::Arc;

use tracing::{trace, warn};

use crate::cache::{CacheStats, NodeCache};
use crate::codec;
use crate::config::EditorConfig;
use crate::errors::{DecodeError, EditError, LogicError};
use crate::id::NodeId;
use crate::syntax::{Movement, SyntaxNode, SyntaxNodeKind};
use crate::traversal::TraversalConfig;

pub struct Document {
    root: Arc<SyntaxNode>,
    cache: NodeCache,
    config: EditorConfig,
}

impl Document {
    pub fn new(root: impl Into<SyntaxNode>) -> Self {
        Self::with_config(root, EditorConfig::default())
    }

    pub fn with_config(root: impl Into<SyntaxNode>, config: EditorConfig) -> Self {
        Self {
            root: Arc::new(root.into()),
            cache: NodeCache::new(config.cache_capacity),
            config,
        }
    }

    pub fn from_json(text: &str) -> Result<Self, DecodeError> {
        Ok(Self::new(codec::decode(text)?))
    }

    pub fn to_json(&self) -> Result<String, LogicError> {
        codec::encode(self.root.as_ref())
    }

    pub fn root(&self) -> &SyntaxNode {
        &self.root
    }

    /// The current tree. Later edits do not affect it.
    pub fn snapshot(&self) -> Arc<SyntaxNode> {
        Arc::clone(&self.root)
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    pub fn find(&mut self, id: NodeId) -> Option<SyntaxNode> {
        self.cache.find(&self.root, id)
    }

    pub fn path_to(&self, id: NodeId, include_top_level: bool) -> Option<Vec<SyntaxNode>> {
        self.root.path_to(id, include_top_level)
    }

    /// The node whose direct child `id` is.
    pub fn parent_of(&self, id: NodeId) -> Option<SyntaxNode> {
        let mut path = self.root.path_to(id, true)?;
        path.pop();
        path.pop()
    }

    pub fn accepts_node(&mut self, parent: NodeId, child: &SyntaxNode) -> bool {
        self.find(parent)
            .is_some_and(|parent| parent.accepts_node(&self.root, child))
    }

    pub fn accepts_line_drag(&mut self, id: NodeId) -> bool {
        self.find(id)
            .is_some_and(|node| node.accepts_line_drag(&self.root))
    }

    /// A copy of the node `id` with fresh identity, not yet placed anywhere.
    pub fn copy_node(&mut self, id: NodeId, deep: bool) -> Option<SyntaxNode> {
        self.find(id).map(|node| node.copy(deep))
    }

    // ------------------------------------------------------------------------
    // Checked edits
    // ------------------------------------------------------------------------

    pub fn try_replace(&mut self, id: NodeId, with: &SyntaxNode) -> Result<(), EditError> {
        trace!(target_id = %id, with = %with.kind_name(), "replace");
        let target = self.find(id).ok_or(EditError::NotFound { id })?;
        if !target.accepts_replacement(with) {
            return Err(EditError::KindMismatch {
                target: id,
                expected: target.kind_name(),
                found: with.kind_name(),
            });
        }
        let root = self
            .root
            .replace_with_policy(id, with, self.config.preserve_ending_placeholder);
        self.commit(root);
        Ok(())
    }

    pub fn try_delete(&mut self, id: NodeId) -> Result<(), EditError> {
        trace!(target_id = %id, "delete");
        if self.root.id() == id {
            return Err(EditError::RootRemoval);
        }
        let path = self.root.path_to(id, true).ok_or(EditError::NotFound { id })?;
        let mut root = self.root.delete(id).ok_or(EditError::RootRemoval)?;

        if self.config.normalize_after_delete {
            let survivor = path
                .iter()
                .rev()
                .skip(1)
                .find_map(|ancestor| root.find(ancestor.id()));
            if let Some(survivor) = survivor {
                root = root.replace_with_policy(survivor.id(), &survivor.normalized_children(), false);
            }
        }

        self.commit(root);
        Ok(())
    }

    /// Inserts `child` into the collection of `parent` that takes its kind
    /// and returns where focus should go next.
    pub fn try_insert(
        &mut self,
        parent: NodeId,
        child: &SyntaxNode,
        index: usize,
    ) -> Result<Movement, EditError> {
        trace!(parent = %parent, child = %child.kind_name(), index, "insert");
        let owner = self.find(parent).ok_or(EditError::NotFound { id: parent })?;
        if !owner.accepts_node(&self.root, child) {
            return Err(EditError::NotAccepted {
                parent: owner.kind_name(),
                child: child.kind_name(),
            });
        }
        let updated = owner.insert(child, index);
        let root = self.root.replace_with_policy(parent, &updated, false);
        self.commit(root);
        Ok(child.movement_after_insertion(&self.root))
    }

    // ------------------------------------------------------------------------
    // Permissive edits
    // ------------------------------------------------------------------------

    /// Returns whether the tree changed.
    pub fn replace(&mut self, id: NodeId, with: &SyntaxNode) -> bool {
        self.try_replace(id, with)
            .map_err(|error| warn!(%error, "replace ignored"))
            .is_ok()
    }

    /// Returns whether the tree changed.
    pub fn delete(&mut self, id: NodeId) -> bool {
        self.try_delete(id)
            .map_err(|error| warn!(%error, "delete ignored"))
            .is_ok()
    }

    /// Returns [`Movement::None`] when nothing was inserted.
    pub fn insert(&mut self, parent: NodeId, child: &SyntaxNode, index: usize) -> Movement {
        self.try_insert(parent, child, index).unwrap_or_else(|error| {
            warn!(%error, "insert ignored");
            Movement::None
        })
    }

    /// Normalises placeholders in every child list of the tree.
    pub fn normalize(&mut self) {
        let mut ids = Vec::new();
        self.root
            .for_each_descendant(&mut TraversalConfig::pre_order(), |node, _| ids.push(node.id()));

        // Descendants come after their ancestors in pre-order, so walking
        // backwards normalises children before the lists that hold them.
        let mut root = self.root.as_ref().clone();
        for id in ids.into_iter().rev() {
            let Some(node) = root.find(id) else {
                continue;
            };
            let normalized = node.normalized_children();
            if normalized != node {
                root = root.replace_with_policy(id, &normalized, false);
            }
        }
        if root != *self.root {
            self.commit(root);
        }
    }

    fn commit(&mut self, root: SyntaxNode) {
        self.cache.invalidate(self.root.id());
        self.root = Arc::new(root);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{
        Declaration, Expression, Identifier, Literal, Placeholder, Program, Statement,
        TypeAnnotation,
    };

    fn program_with_variable() -> (Program, Declaration) {
        let variable = Declaration::variable("x", None, Some(Expression::literal(Literal::number(1.0))));
        (Program::new(vec![Statement::declaration(variable.clone())]), variable)
    }

    #[test]
    fn deleting_the_only_declaration_leaves_a_placeholder() {
        let (program, variable) = program_with_variable();
        let mut document = Document::new(program);
        document.try_delete(variable.id()).unwrap();

        let SyntaxNode::Program(program) = document.root() else {
            panic!("root changed kind");
        };
        assert_eq!(program.block.len(), 1);
        assert!(program.block.at(0).is_placeholder());
    }

    #[test]
    fn replace_rejects_the_wrong_kind() {
        let (program, variable) = program_with_variable();
        let name = variable.name().unwrap().id;
        let mut document = Document::new(program);
        let before = document.snapshot();

        let error = document
            .try_replace(name, &Expression::identifier("y").to_node())
            .unwrap_err();
        assert!(matches!(error, EditError::KindMismatch { .. }));
        assert!(!document.replace(name, &Expression::identifier("y").to_node()));
        assert!(Arc::ptr_eq(&before, &document.snapshot()));
    }

    #[test]
    fn replace_coerces_identifiers_into_expressions() {
        let (program, variable) = program_with_variable();
        let Declaration::Variable {
            initializer: Some(initializer),
            ..
        } = &variable
        else {
            panic!("expected an initializer");
        };
        let mut document = Document::new(program);
        let identifier = Identifier::new("y");
        document.try_replace(initializer.id(), &identifier.to_node()).unwrap();

        let found = document.find(identifier.id).unwrap();
        assert_eq!(found.label(), "y");
        let parent = document.parent_of(identifier.id).unwrap();
        assert_eq!(parent.kind_name(), "expression.identifierExpression");
    }

    #[test]
    fn insert_reports_the_focus_target() {
        let mut document = Document::new(Program::new(vec![]));
        let root_id = document.root().id();
        let fresh = Declaration::Variable {
            id: NodeId::new(),
            name: crate::syntax::Pattern::make_placeholder(),
            annotation: None,
            initializer: None,
            comment: None,
        };
        let name_id = fresh.name().unwrap().id;
        let movement = document.try_insert(root_id, &fresh.to_node(), 0).unwrap();
        assert_eq!(movement, Movement::Node(name_id));
        assert!(document.find(fresh.id()).is_some());
    }

    #[test]
    fn insert_refuses_ancestors() {
        let inner = Statement::branch(Expression::identifier("c"), vec![]);
        let outer = Statement::branch(Expression::identifier("d"), vec![inner.clone()]);
        let mut document = Document::new(Program::new(vec![outer.clone()]));
        let error = document.try_insert(inner.id(), &outer.to_node(), 0).unwrap_err();
        assert!(matches!(error, EditError::NotAccepted { .. }));
        assert_eq!(document.insert(inner.id(), &outer.to_node(), 0), Movement::None);
    }

    #[test]
    fn the_root_cannot_be_deleted() {
        let mut document = Document::new(Program::new(vec![]));
        let root_id = document.root().id();
        assert_eq!(document.try_delete(root_id), Err(EditError::RootRemoval));
        assert!(matches!(
            document.try_delete(NodeId::new()),
            Err(EditError::NotFound { .. })
        ));
    }

    #[test]
    fn edits_do_not_leak_into_old_snapshots() {
        let (program, variable) = program_with_variable();
        let mut document = Document::new(program);
        let old = document.snapshot();
        assert!(document.find(variable.id()).is_some());

        document.delete(variable.id());
        assert!(document.find(variable.id()).is_none());
        assert!(old.find(variable.id()).is_some());
    }

    #[test]
    fn normalize_adds_trailing_placeholders_everywhere() {
        let branch = Statement::branch(Expression::identifier("c"), vec![]);
        let mut document = Document::new(Program::new(vec![branch.clone()]));
        document.normalize();

        let Some(SyntaxNode::Statement(branch)) = document.find(branch.id()) else {
            panic!("branch went missing");
        };
        let block = branch.block().unwrap();
        assert_eq!(block.len(), 1);
        assert!(block.at(0).is_placeholder());

        let again = document.snapshot();
        document.normalize();
        assert!(Arc::ptr_eq(&again, &document.snapshot()));
    }

    #[test]
    fn normalize_fills_type_argument_lists() {
        let annotation = TypeAnnotation::generic("Array", vec![]);
        let variable = Declaration::variable("xs", Some(annotation.clone()), None);
        let mut document = Document::new(Program::new(vec![Statement::declaration(variable)]));
        document.normalize();

        let Some(SyntaxNode::TypeAnnotation(TypeAnnotation::TypeIdentifier {
            generic_arguments,
            ..
        })) = document.find(annotation.id())
        else {
            panic!("annotation went missing");
        };
        assert_eq!(generic_arguments.len(), 1);
        assert!(generic_arguments.at(0).is_placeholder());
    }
}
