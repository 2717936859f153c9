//! Declarations: the named building blocks of a program.
//!
//! Every non-placeholder declaration has a `name` pattern and an optional
//! comment. Declaration lists normalise with
//! [`Normalization::AppendIfMissing`]: interior placeholders survive, and a
//! trailing one is only added when missing.

use serde::{Deserialize, Serialize};

use crate::id::NodeId;
use crate::list::List;
use crate::syntax::expression::Expression;
use crate::syntax::leaf::{Comment, Pattern};
use crate::syntax::parameters::{EnumerationCase, FunctionParameter, GenericParameter};
use crate::syntax::protocol::{
    copy_child, copy_optional, delete_optional, delete_required, focus_first_empty,
    replace_optional, Equivalence, Movement, Normalization, Placeholder, SyntaxNodeKind,
};
use crate::syntax::statement::Statement;
use crate::syntax::types::TypeAnnotation;
use crate::syntax::SyntaxNode;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    content = "data",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
pub enum Declaration {
    Variable {
        id: NodeId,
        name: Pattern,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        annotation: Option<TypeAnnotation>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        initializer: Option<Expression>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        comment: Option<Comment>,
    },
    Function {
        id: NodeId,
        name: Pattern,
        return_type: TypeAnnotation,
        generic_parameters: List<GenericParameter>,
        parameters: List<FunctionParameter>,
        block: List<Statement>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        comment: Option<Comment>,
    },
    Enumeration {
        id: NodeId,
        name: Pattern,
        generic_parameters: List<GenericParameter>,
        cases: List<EnumerationCase>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        comment: Option<Comment>,
    },
    Record {
        id: NodeId,
        name: Pattern,
        generic_parameters: List<GenericParameter>,
        declarations: List<Declaration>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        comment: Option<Comment>,
    },
    Namespace {
        id: NodeId,
        name: Pattern,
        declarations: List<Declaration>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        comment: Option<Comment>,
    },
    ImportDeclaration {
        id: NodeId,
        name: Pattern,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        comment: Option<Comment>,
    },
    Placeholder {
        id: NodeId,
    },
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

impl Declaration {
    pub fn variable(
        name: impl Into<String>,
        annotation: Option<TypeAnnotation>,
        initializer: Option<Expression>,
    ) -> Self {
        Self::Variable {
            id: NodeId::new(),
            name: Pattern::new(name),
            annotation,
            initializer,
            comment: None,
        }
    }

    pub fn function(
        name: impl Into<String>,
        return_type: TypeAnnotation,
        parameters: Vec<FunctionParameter>,
        block: Vec<Statement>,
    ) -> Self {
        Self::Function {
            id: NodeId::new(),
            name: Pattern::new(name),
            return_type,
            generic_parameters: List::empty(),
            parameters: List::from_sequence(parameters),
            block: List::from_sequence(block),
            comment: None,
        }
    }

    pub fn enumeration(name: impl Into<String>, cases: Vec<EnumerationCase>) -> Self {
        Self::Enumeration {
            id: NodeId::new(),
            name: Pattern::new(name),
            generic_parameters: List::empty(),
            cases: List::from_sequence(cases),
            comment: None,
        }
    }

    pub fn record(name: impl Into<String>, declarations: Vec<Declaration>) -> Self {
        Self::Record {
            id: NodeId::new(),
            name: Pattern::new(name),
            generic_parameters: List::empty(),
            declarations: List::from_sequence(declarations),
            comment: None,
        }
    }

    pub fn namespace(name: impl Into<String>, declarations: Vec<Declaration>) -> Self {
        Self::Namespace {
            id: NodeId::new(),
            name: Pattern::new(name),
            declarations: List::from_sequence(declarations),
            comment: None,
        }
    }

    pub fn import(name: impl Into<String>) -> Self {
        Self::ImportDeclaration {
            id: NodeId::new(),
            name: Pattern::new(name),
            comment: None,
        }
    }

    /// Attaches a comment to any non-placeholder declaration.
    pub fn with_comment(mut self, text: impl Into<String>) -> Self {
        match &mut self {
            Self::Variable { comment, .. }
            | Self::Function { comment, .. }
            | Self::Enumeration { comment, .. }
            | Self::Record { comment, .. }
            | Self::Namespace { comment, .. }
            | Self::ImportDeclaration { comment, .. } => *comment = Some(Comment::new(text)),
            Self::Placeholder { .. } => {}
        }
        self
    }

    pub fn case_name(&self) -> &'static str {
        match self {
            Self::Variable { .. } => "variable",
            Self::Function { .. } => "function",
            Self::Enumeration { .. } => "enumeration",
            Self::Record { .. } => "record",
            Self::Namespace { .. } => "namespace",
            Self::ImportDeclaration { .. } => "importDeclaration",
            Self::Placeholder { .. } => "placeholder",
        }
    }

    pub fn name(&self) -> Option<&Pattern> {
        match self {
            Self::Variable { name, .. }
            | Self::Function { name, .. }
            | Self::Enumeration { name, .. }
            | Self::Record { name, .. }
            | Self::Namespace { name, .. }
            | Self::ImportDeclaration { name, .. } => Some(name),
            Self::Placeholder { .. } => None,
        }
    }

    pub fn comment(&self) -> Option<&Comment> {
        match self {
            Self::Variable { comment, .. }
            | Self::Function { comment, .. }
            | Self::Enumeration { comment, .. }
            | Self::Record { comment, .. }
            | Self::Namespace { comment, .. }
            | Self::ImportDeclaration { comment, .. } => comment.as_ref(),
            Self::Placeholder { .. } => None,
        }
    }

    fn generic_parameters_mut(&mut self) -> Option<&mut List<GenericParameter>> {
        match self {
            Self::Function {
                generic_parameters, ..
            }
            | Self::Enumeration {
                generic_parameters, ..
            }
            | Self::Record {
                generic_parameters, ..
            } => Some(generic_parameters),
            _ => None,
        }
    }

    fn declarations_mut(&mut self) -> Option<&mut List<Declaration>> {
        match self {
            Self::Record { declarations, .. } | Self::Namespace { declarations, .. } => {
                Some(declarations)
            }
            _ => None,
        }
    }

    /// Which nested declarations this one may own.
    fn owns_declaration(&self, child: &Declaration) -> bool {
        match self {
            Self::Record { .. } => matches!(
                child,
                Self::Variable { .. } | Self::Placeholder { .. }
            ),
            Self::Namespace { .. } => !matches!(child, Self::ImportDeclaration { .. }),
            _ => false,
        }
    }
}

// ============================================================================
// PROTOCOLS
// ============================================================================

impl Equivalence for Declaration {
    fn is_equivalent_to(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Self::Variable {
                    name: n1,
                    annotation: a1,
                    initializer: i1,
                    comment: c1,
                    ..
                },
                Self::Variable {
                    name: n2,
                    annotation: a2,
                    initializer: i2,
                    comment: c2,
                    ..
                },
            ) => {
                n1.is_equivalent_to(n2)
                    && a1.is_equivalent_to(a2)
                    && i1.is_equivalent_to(i2)
                    && c1.is_equivalent_to(c2)
            }
            (
                Self::Function {
                    name: n1,
                    return_type: r1,
                    generic_parameters: g1,
                    parameters: p1,
                    block: b1,
                    comment: c1,
                    ..
                },
                Self::Function {
                    name: n2,
                    return_type: r2,
                    generic_parameters: g2,
                    parameters: p2,
                    block: b2,
                    comment: c2,
                    ..
                },
            ) => {
                n1.is_equivalent_to(n2)
                    && r1.is_equivalent_to(r2)
                    && g1.is_equivalent_to(g2)
                    && p1.is_equivalent_to(p2)
                    && b1.is_equivalent_to(b2)
                    && c1.is_equivalent_to(c2)
            }
            (
                Self::Enumeration {
                    name: n1,
                    generic_parameters: g1,
                    cases: k1,
                    comment: c1,
                    ..
                },
                Self::Enumeration {
                    name: n2,
                    generic_parameters: g2,
                    cases: k2,
                    comment: c2,
                    ..
                },
            ) => {
                n1.is_equivalent_to(n2)
                    && g1.is_equivalent_to(g2)
                    && k1.is_equivalent_to(k2)
                    && c1.is_equivalent_to(c2)
            }
            (
                Self::Record {
                    name: n1,
                    generic_parameters: g1,
                    declarations: d1,
                    comment: c1,
                    ..
                },
                Self::Record {
                    name: n2,
                    generic_parameters: g2,
                    declarations: d2,
                    comment: c2,
                    ..
                },
            ) => {
                n1.is_equivalent_to(n2)
                    && g1.is_equivalent_to(g2)
                    && d1.is_equivalent_to(d2)
                    && c1.is_equivalent_to(c2)
            }
            (
                Self::Namespace {
                    name: n1,
                    declarations: d1,
                    comment: c1,
                    ..
                },
                Self::Namespace {
                    name: n2,
                    declarations: d2,
                    comment: c2,
                    ..
                },
            ) => n1.is_equivalent_to(n2) && d1.is_equivalent_to(d2) && c1.is_equivalent_to(c2),
            (
                Self::ImportDeclaration {
                    name: n1,
                    comment: c1,
                    ..
                },
                Self::ImportDeclaration {
                    name: n2,
                    comment: c2,
                    ..
                },
            ) => n1.is_equivalent_to(n2) && c1.is_equivalent_to(c2),
            (Self::Placeholder { .. }, Self::Placeholder { .. }) => true,
            _ => false,
        }
    }
}

impl Placeholder for Declaration {
    const NORMALIZATION: Normalization = Normalization::AppendIfMissing;

    fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder { .. })
    }

    fn make_placeholder() -> Self {
        Self::Placeholder { id: NodeId::new() }
    }
}

impl SyntaxNodeKind for Declaration {
    fn id(&self) -> NodeId {
        match self {
            Self::Variable { id, .. }
            | Self::Function { id, .. }
            | Self::Enumeration { id, .. }
            | Self::Record { id, .. }
            | Self::Namespace { id, .. }
            | Self::ImportDeclaration { id, .. }
            | Self::Placeholder { id } => *id,
        }
    }

    fn to_node(&self) -> SyntaxNode {
        SyntaxNode::Declaration(self.clone())
    }

    /// A declaration statement yields the declaration it wraps.
    fn from_node(node: &SyntaxNode) -> Option<Self> {
        match node {
            SyntaxNode::Declaration(declaration) => Some(declaration.clone()),
            SyntaxNode::Statement(Statement::Declaration { content, .. }) => Some(content.as_ref().clone()),
            _ => None,
        }
    }

    fn subnodes(&self) -> Vec<SyntaxNode> {
        let mut nodes = Vec::new();
        match self {
            Self::Variable {
                name,
                annotation,
                initializer,
                comment,
                ..
            } => {
                nodes.push(name.to_node());
                nodes.extend(annotation.iter().map(SyntaxNodeKind::to_node));
                nodes.extend(initializer.iter().map(SyntaxNodeKind::to_node));
                nodes.extend(comment.iter().map(SyntaxNodeKind::to_node));
            }
            Self::Function {
                name,
                return_type,
                generic_parameters,
                parameters,
                block,
                comment,
                ..
            } => {
                nodes.push(name.to_node());
                nodes.push(return_type.to_node());
                nodes.extend(generic_parameters.subnodes());
                nodes.extend(parameters.subnodes());
                nodes.extend(block.subnodes());
                nodes.extend(comment.iter().map(SyntaxNodeKind::to_node));
            }
            Self::Enumeration {
                name,
                generic_parameters,
                cases,
                comment,
                ..
            } => {
                nodes.push(name.to_node());
                nodes.extend(generic_parameters.subnodes());
                nodes.extend(cases.subnodes());
                nodes.extend(comment.iter().map(SyntaxNodeKind::to_node));
            }
            Self::Record {
                name,
                generic_parameters,
                declarations,
                comment,
                ..
            } => {
                nodes.push(name.to_node());
                nodes.extend(generic_parameters.subnodes());
                nodes.extend(declarations.subnodes());
                nodes.extend(comment.iter().map(SyntaxNodeKind::to_node));
            }
            Self::Namespace {
                name,
                declarations,
                comment,
                ..
            } => {
                nodes.push(name.to_node());
                nodes.extend(declarations.subnodes());
                nodes.extend(comment.iter().map(SyntaxNodeKind::to_node));
            }
            Self::ImportDeclaration { name, comment, .. } => {
                nodes.push(name.to_node());
                nodes.extend(comment.iter().map(SyntaxNodeKind::to_node));
            }
            Self::Placeholder { .. } => {}
        }
        nodes
    }

    fn replace_with_policy(&self, id: NodeId, with: &SyntaxNode, preserving: bool) -> Self {
        if self.id() == id {
            return Self::from_node(with).unwrap_or_else(|| self.clone());
        }
        match self {
            Self::Variable {
                id: own,
                name,
                annotation,
                initializer,
                comment,
            } => Self::Variable {
                id: *own,
                name: name.replace_with_policy(id, with, preserving),
                annotation: replace_optional(annotation, id, with, preserving),
                initializer: replace_optional(initializer, id, with, preserving),
                comment: replace_optional(comment, id, with, preserving),
            },
            Self::Function {
                id: own,
                name,
                return_type,
                generic_parameters,
                parameters,
                block,
                comment,
            } => Self::Function {
                id: *own,
                name: name.replace_with_policy(id, with, preserving),
                return_type: return_type.replace_with_policy(id, with, preserving),
                generic_parameters: generic_parameters.replace(id, with, preserving),
                parameters: parameters.replace(id, with, preserving),
                block: block.replace(id, with, preserving),
                comment: replace_optional(comment, id, with, preserving),
            },
            Self::Enumeration {
                id: own,
                name,
                generic_parameters,
                cases,
                comment,
            } => Self::Enumeration {
                id: *own,
                name: name.replace_with_policy(id, with, preserving),
                generic_parameters: generic_parameters.replace(id, with, preserving),
                cases: cases.replace(id, with, preserving),
                comment: replace_optional(comment, id, with, preserving),
            },
            Self::Record {
                id: own,
                name,
                generic_parameters,
                declarations,
                comment,
            } => Self::Record {
                id: *own,
                name: name.replace_with_policy(id, with, preserving),
                generic_parameters: generic_parameters.replace(id, with, preserving),
                declarations: declarations.replace(id, with, preserving),
                comment: replace_optional(comment, id, with, preserving),
            },
            Self::Namespace {
                id: own,
                name,
                declarations,
                comment,
            } => Self::Namespace {
                id: *own,
                name: name.replace_with_policy(id, with, preserving),
                declarations: declarations.replace(id, with, preserving),
                comment: replace_optional(comment, id, with, preserving),
            },
            Self::ImportDeclaration { id: own, name, comment } => Self::ImportDeclaration {
                id: *own,
                name: name.replace_with_policy(id, with, preserving),
                comment: replace_optional(comment, id, with, preserving),
            },
            Self::Placeholder { .. } => self.clone(),
        }
    }

    fn delete(&self, id: NodeId) -> Option<Self> {
        if self.id() == id {
            return None;
        }
        Some(match self {
            Self::Variable {
                id: own,
                name,
                annotation,
                initializer,
                comment,
            } => Self::Variable {
                id: *own,
                name: delete_required(name, id),
                annotation: delete_optional(annotation, id),
                initializer: delete_optional(initializer, id),
                comment: delete_optional(comment, id),
            },
            Self::Function {
                id: own,
                name,
                return_type,
                generic_parameters,
                parameters,
                block,
                comment,
            } => Self::Function {
                id: *own,
                name: delete_required(name, id),
                return_type: delete_required(return_type, id),
                generic_parameters: generic_parameters.delete(id),
                parameters: parameters.delete(id),
                block: block.delete(id),
                comment: delete_optional(comment, id),
            },
            Self::Enumeration {
                id: own,
                name,
                generic_parameters,
                cases,
                comment,
            } => Self::Enumeration {
                id: *own,
                name: delete_required(name, id),
                generic_parameters: generic_parameters.delete(id),
                cases: cases.delete(id),
                comment: delete_optional(comment, id),
            },
            Self::Record {
                id: own,
                name,
                generic_parameters,
                declarations,
                comment,
            } => Self::Record {
                id: *own,
                name: delete_required(name, id),
                generic_parameters: generic_parameters.delete(id),
                declarations: declarations.delete(id),
                comment: delete_optional(comment, id),
            },
            Self::Namespace {
                id: own,
                name,
                declarations,
                comment,
            } => Self::Namespace {
                id: *own,
                name: delete_required(name, id),
                declarations: declarations.delete(id),
                comment: delete_optional(comment, id),
            },
            Self::ImportDeclaration { id: own, name, comment } => Self::ImportDeclaration {
                id: *own,
                name: delete_required(name, id),
                comment: delete_optional(comment, id),
            },
            Self::Placeholder { .. } => self.clone(),
        })
    }

    fn insert(&self, child: &SyntaxNode, index: usize) -> Self {
        let mut next = self.clone();
        match child {
            SyntaxNode::GenericParameter(parameter) => {
                if let Some(list) = next.generic_parameters_mut() {
                    *list = list.inserting_normalized(index, parameter.clone());
                }
            }
            SyntaxNode::FunctionParameter(parameter) => {
                if let Self::Function { parameters, .. } = &mut next {
                    *parameters = parameters.inserting_normalized(index, parameter.clone());
                }
            }
            SyntaxNode::EnumerationCase(case) => {
                if let Self::Enumeration { cases, .. } = &mut next {
                    *cases = cases.inserting_normalized(index, case.clone());
                }
            }
            _ => {
                if let Self::Function { block, .. } = &mut next {
                    if let Some(statement) = Statement::from_node(child) {
                        *block = block.inserting_normalized(index, statement);
                    }
                    return next;
                }
                let accepted = Declaration::from_node(child).filter(|d| self.owns_declaration(d));
                if let (Some(declaration), Some(list)) = (accepted, next.declarations_mut()) {
                    *list = list.inserting_normalized(index, declaration);
                }
            }
        }
        next
    }

    fn copy(&self, deep: bool) -> Self {
        let id = NodeId::new();
        match self {
            Self::Variable {
                name,
                annotation,
                initializer,
                comment,
                ..
            } => Self::Variable {
                id,
                name: copy_child(name, deep),
                annotation: copy_optional(annotation, deep),
                initializer: copy_optional(initializer, deep),
                comment: copy_optional(comment, deep),
            },
            Self::Function {
                name,
                return_type,
                generic_parameters,
                parameters,
                block,
                comment,
                ..
            } => Self::Function {
                id,
                name: copy_child(name, deep),
                return_type: copy_child(return_type, deep),
                generic_parameters: generic_parameters.copy(deep),
                parameters: parameters.copy(deep),
                block: block.copy(deep),
                comment: copy_optional(comment, deep),
            },
            Self::Enumeration {
                name,
                generic_parameters,
                cases,
                comment,
                ..
            } => Self::Enumeration {
                id,
                name: copy_child(name, deep),
                generic_parameters: generic_parameters.copy(deep),
                cases: cases.copy(deep),
                comment: copy_optional(comment, deep),
            },
            Self::Record {
                name,
                generic_parameters,
                declarations,
                comment,
                ..
            } => Self::Record {
                id,
                name: copy_child(name, deep),
                generic_parameters: generic_parameters.copy(deep),
                declarations: declarations.copy(deep),
                comment: copy_optional(comment, deep),
            },
            Self::Namespace {
                name,
                declarations,
                comment,
                ..
            } => Self::Namespace {
                id,
                name: copy_child(name, deep),
                declarations: declarations.copy(deep),
                comment: copy_optional(comment, deep),
            },
            Self::ImportDeclaration { name, comment, .. } => Self::ImportDeclaration {
                id,
                name: copy_child(name, deep),
                comment: copy_optional(comment, deep),
            },
            Self::Placeholder { .. } => Self::Placeholder { id },
        }
    }

    fn normalized_children(&self) -> Self {
        let mut next = self.clone();
        if let Some(list) = next.generic_parameters_mut() {
            *list = list.normalized_placeholders();
        }
        match &mut next {
            Self::Function {
                parameters, block, ..
            } => {
                *parameters = parameters.normalized_placeholders();
                *block = block.normalized_placeholders();
            }
            Self::Enumeration { cases, .. } => *cases = cases.normalized_placeholders(),
            Self::Record { declarations, .. } | Self::Namespace { declarations, .. } => {
                *declarations = declarations.normalized_placeholders();
            }
            _ => {}
        }
        next
    }

    fn accepts_line_drag(&self, root: &SyntaxNode) -> bool {
        !self.is_placeholder() && root.id() != self.id()
    }

    fn accepts_child(&self, child: &SyntaxNode) -> bool {
        match child {
            SyntaxNode::GenericParameter(_) => matches!(
                self,
                Self::Function { .. } | Self::Enumeration { .. } | Self::Record { .. }
            ),
            SyntaxNode::FunctionParameter(_) => matches!(self, Self::Function { .. }),
            SyntaxNode::EnumerationCase(_) => matches!(self, Self::Enumeration { .. }),
            _ => match self {
                Self::Function { .. } => Statement::from_node(child).is_some(),
                Self::Record { .. } | Self::Namespace { .. } => {
                    Declaration::from_node(child).is_some_and(|d| self.owns_declaration(&d))
                }
                _ => false,
            },
        }
    }

    fn movement_after_insertion(&self, root: &SyntaxNode) -> Movement {
        match self {
            Self::Variable {
                name,
                annotation,
                initializer,
                ..
            } => {
                let mut slots = vec![name.to_node()];
                slots.extend(annotation.iter().map(SyntaxNodeKind::to_node));
                slots.extend(initializer.iter().map(SyntaxNodeKind::to_node));
                focus_first_empty(root, &slots)
            }
            Self::Function {
                name, return_type, ..
            } => focus_first_empty(root, &[name.to_node(), return_type.to_node()]),
            Self::Placeholder { .. } => Movement::None,
            other => match other.name() {
                Some(name) => focus_first_empty(root, &[name.to_node()]),
                None => Movement::Next,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::literal::Literal;

    fn case_names(declaration: &Declaration) -> Vec<String> {
        match declaration {
            Declaration::Enumeration { cases, .. } => cases
                .iter()
                .map(|case| case.name().unwrap_or("_").to_string())
                .collect(),
            _ => Vec::new(),
        }
    }

    #[test]
    fn inserting_a_case_keeps_a_trailing_placeholder() {
        let enumeration = Declaration::enumeration(
            "Color",
            vec![
                EnumerationCase::new("A"),
                EnumerationCase::new("B"),
                EnumerationCase::make_placeholder(),
            ],
        );
        let result = enumeration.insert(&EnumerationCase::new("C").to_node(), 2);
        assert_eq!(case_names(&result), vec!["A", "B", "C", "_"]);
    }

    #[test]
    fn records_only_take_variables() {
        let record = Declaration::record("Point", vec![]);
        let function = Declaration::function("f", TypeAnnotation::named("Void"), vec![], vec![]);
        let x = Declaration::variable("x", Some(TypeAnnotation::named("Number")), None);

        assert!(!record.accepts_child(&function.to_node()));
        assert!(record.accepts_child(&x.to_node()));
        assert_eq!(record.insert(&function.to_node(), 0), record);
    }

    #[test]
    fn namespaces_refuse_imports() {
        let namespace = Declaration::namespace("Colors", vec![]);
        assert!(!namespace.accepts_child(&Declaration::import("Prelude").to_node()));
        assert!(namespace.accepts_child(&Declaration::namespace("Inner", vec![]).to_node()));
    }

    #[test]
    fn declaration_lists_keep_interior_placeholders() {
        let list = List::from_sequence(vec![
            Declaration::make_placeholder(),
            Declaration::import("A"),
            Declaration::make_placeholder(),
        ]);
        let normalized = list.normalized_placeholders();
        assert_eq!(normalized, list);
    }

    #[test]
    fn deleting_the_initializer_leaves_it_absent() {
        let initializer = Expression::literal(Literal::number(1.0));
        let target = initializer.id();
        let variable = Declaration::variable("x", None, Some(initializer));
        match variable.delete(target) {
            Some(Declaration::Variable { initializer, .. }) => assert!(initializer.is_none()),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn new_variable_focuses_its_empty_name() {
        let variable = Declaration::Variable {
            id: NodeId::new(),
            name: Pattern::make_placeholder(),
            annotation: None,
            initializer: None,
            comment: None,
        };
        let root = variable.to_node();
        let name_id = variable.name().map(SyntaxNodeKind::id);
        assert_eq!(variable.movement_after_insertion(&root), Movement::Node(name_id.unwrap()));
    }
}
