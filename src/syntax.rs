//! Syntax tree for the Logic language.
//!
//! Each node kind is its own type implementing [`SyntaxNodeKind`]; the
//! type-erased [`SyntaxNode`] unifies them for generic operations such as
//! find, path lookup and traversal. Trees are immutable values: every edit
//! returns a new tree, and subtrees the edit did not touch are shared with
//! the previous one.
//!
//! # Examples
//!
//! ```rust
//! use logic::syntax::{Declaration, Expression, Literal, Program, Statement, SyntaxNode, SyntaxNodeKind};
//!
//! let variable = Declaration::variable("x", None, Some(Expression::literal(Literal::number(1.0))));
//! let program = Program::new(vec![Statement::declaration(variable.clone())]);
//! let name = variable.name().unwrap().id;
//!
//! let found = program.find(name).unwrap();
//! assert_eq!(found.kind_name(), "pattern");
//! assert_eq!(found.label(), "x");
//! ```

use serde::{Deserialize, Serialize};

pub mod declaration;
pub mod expression;
pub mod leaf;
pub mod literal;
pub mod parameters;
pub mod program;
pub mod protocol;
pub mod statement;
pub mod types;

pub use declaration::Declaration;
pub use expression::{Expression, FunctionCallArgument};
pub use leaf::{Comment, Identifier, Pattern};
pub use literal::Literal;
pub use parameters::{EnumerationCase, FunctionParameter, FunctionParameterDefaultValue, GenericParameter};
pub use program::{Program, TopLevelDeclarations};
pub use protocol::{Equivalence, Movement, Normalization, Placeholder, SyntaxNodeKind};
pub use statement::Statement;
pub use types::TypeAnnotation;

use crate::id::NodeId;

/// Any node of the tree, tagged with its kind.
///
/// Serializes as `{"type": "<kind>", "data": <node>}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum SyntaxNode {
    Statement(Statement),
    Declaration(Declaration),
    Identifier(Identifier),
    Expression(Expression),
    Pattern(Pattern),
    Program(Program),
    FunctionParameter(FunctionParameter),
    FunctionParameterDefaultValue(FunctionParameterDefaultValue),
    TypeAnnotation(TypeAnnotation),
    Literal(Literal),
    GenericParameter(GenericParameter),
    EnumerationCase(EnumerationCase),
    TopLevelDeclarations(TopLevelDeclarations),
    FunctionCallArgument(FunctionCallArgument),
    Comment(Comment),
}

/// Applies `$body` to the node inside whichever variant `$node` holds.
macro_rules! dispatch {
    ($node:expr, $inner:ident => $body:expr) => {
        match $node {
            SyntaxNode::Statement($inner) => $body,
            SyntaxNode::Declaration($inner) => $body,
            SyntaxNode::Identifier($inner) => $body,
            SyntaxNode::Expression($inner) => $body,
            SyntaxNode::Pattern($inner) => $body,
            SyntaxNode::Program($inner) => $body,
            SyntaxNode::FunctionParameter($inner) => $body,
            SyntaxNode::FunctionParameterDefaultValue($inner) => $body,
            SyntaxNode::TypeAnnotation($inner) => $body,
            SyntaxNode::Literal($inner) => $body,
            SyntaxNode::GenericParameter($inner) => $body,
            SyntaxNode::EnumerationCase($inner) => $body,
            SyntaxNode::TopLevelDeclarations($inner) => $body,
            SyntaxNode::FunctionCallArgument($inner) => $body,
            SyntaxNode::Comment($inner) => $body,
        }
    };
}

macro_rules! impl_from_kind {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for SyntaxNode {
                fn from(node: $variant) -> Self {
                    SyntaxNode::$variant(node)
                }
            }
        )*
    };
}

impl_from_kind!(
    Statement,
    Declaration,
    Identifier,
    Expression,
    Pattern,
    Program,
    FunctionParameter,
    FunctionParameterDefaultValue,
    TypeAnnotation,
    Literal,
    GenericParameter,
    EnumerationCase,
    TopLevelDeclarations,
    FunctionCallArgument,
    Comment,
);

fn coerces_into<T: SyntaxNodeKind>(_slot: &T, with: &SyntaxNode) -> bool {
    T::from_node(with).is_some()
}

impl SyntaxNode {
    /// Wire name of the node kind, e.g. `"declaration"`.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Statement(_) => "statement",
            Self::Declaration(_) => "declaration",
            Self::Identifier(_) => "identifier",
            Self::Expression(_) => "expression",
            Self::Pattern(_) => "pattern",
            Self::Program(_) => "program",
            Self::FunctionParameter(_) => "functionParameter",
            Self::FunctionParameterDefaultValue(_) => "functionParameterDefaultValue",
            Self::TypeAnnotation(_) => "typeAnnotation",
            Self::Literal(_) => "literal",
            Self::GenericParameter(_) => "genericParameter",
            Self::EnumerationCase(_) => "enumerationCase",
            Self::TopLevelDeclarations(_) => "topLevelDeclarations",
            Self::FunctionCallArgument(_) => "functionCallArgument",
            Self::Comment(_) => "comment",
        }
    }

    /// Kind and case, e.g. `"declaration.variable"`. Struct kinds have no case.
    pub fn kind_name(&self) -> String {
        let case = match self {
            Self::Statement(node) => node.case_name(),
            Self::Declaration(node) => node.case_name(),
            Self::Expression(node) => node.case_name(),
            Self::FunctionParameter(node) => node.case_name(),
            Self::FunctionParameterDefaultValue(node) => node.case_name(),
            Self::TypeAnnotation(node) => node.case_name(),
            Self::Literal(node) => node.case_name(),
            Self::GenericParameter(node) => node.case_name(),
            Self::EnumerationCase(node) => node.case_name(),
            Self::FunctionCallArgument(node) => node.case_name(),
            Self::Identifier(_)
            | Self::Pattern(_)
            | Self::Program(_)
            | Self::TopLevelDeclarations(_)
            | Self::Comment(_) => return self.kind().to_string(),
        };
        format!("{}.{}", self.kind(), case)
    }

    /// Short human-readable text for outlines. Empty slots read as `_`.
    pub fn label(&self) -> String {
        if self.is_empty_slot() {
            return "_".to_string();
        }
        match self {
            Self::Statement(Statement::Declaration { content, .. }) => content.to_node().label(),
            Self::Statement(Statement::ExpressionStatement { expression, .. }) => {
                expression.to_node().label()
            }
            Self::Statement(statement) => statement.case_name().to_string(),
            Self::Declaration(declaration) => declaration
                .name()
                .map_or_else(|| declaration.case_name().to_string(), |name| name.name.clone()),
            Self::Identifier(identifier) => identifier.string.clone(),
            Self::Pattern(pattern) => pattern.name.clone(),
            Self::Comment(comment) => comment.string.clone(),
            Self::Expression(Expression::IdentifierExpression { identifier, .. }) => identifier.string.clone(),
            Self::Expression(Expression::LiteralExpression { literal, .. }) => literal.to_node().label(),
            Self::Expression(Expression::MemberExpression { member_name, .. }) => {
                format!(".{}", member_name.string)
            }
            Self::Expression(expression) => expression.case_name().to_string(),
            Self::Literal(literal) => match literal {
                Literal::None { .. } => "none".to_string(),
                Literal::Boolean { value, .. } => value.to_string(),
                Literal::Number { value, .. } => value.to_string(),
                Literal::String { value, .. } => format!("{value:?}"),
                Literal::Color { value, .. } => value.clone(),
                Literal::Array { value, .. } => format!("[{}]", value.filled().count()),
            },
            Self::TypeAnnotation(TypeAnnotation::TypeIdentifier { identifier, .. }) => identifier.string.clone(),
            Self::TypeAnnotation(annotation) => annotation.case_name().to_string(),
            Self::FunctionParameter(FunctionParameter::Parameter { local_name, .. }) => local_name.name.clone(),
            Self::GenericParameter(GenericParameter::Parameter { name, .. }) => name.name.clone(),
            Self::EnumerationCase(case) => case.name().unwrap_or_default().to_string(),
            Self::FunctionCallArgument(FunctionCallArgument::Argument {
                label: Some(label), ..
            }) => format!("{label}:"),
            other => other.kind_name(),
        }
    }

    /// True for a node that stands for "nothing entered yet".
    pub fn is_empty_slot(&self) -> bool {
        match self {
            Self::Statement(node) => node.is_placeholder(),
            Self::Declaration(node) => node.is_placeholder(),
            Self::Identifier(node) => node.is_placeholder(),
            Self::Expression(node) => node.is_placeholder(),
            Self::Pattern(node) => node.is_placeholder(),
            Self::FunctionParameter(node) => node.is_placeholder(),
            Self::FunctionParameterDefaultValue(node) => node.is_placeholder(),
            Self::TypeAnnotation(node) => node.is_placeholder(),
            Self::GenericParameter(node) => node.is_placeholder(),
            Self::EnumerationCase(node) => node.is_placeholder(),
            Self::FunctionCallArgument(node) => node.is_placeholder(),
            Self::Comment(node) => node.is_placeholder(),
            Self::Literal(_) | Self::Program(_) | Self::TopLevelDeclarations(_) => false,
        }
    }

    /// Whether `with` may take this node's place, directly or by coercion.
    pub fn accepts_replacement(&self, with: &SyntaxNode) -> bool {
        dispatch!(self, node => coerces_into(node, with))
    }
}

impl Equivalence for SyntaxNode {
    fn is_equivalent_to(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Statement(a), Self::Statement(b)) => a.is_equivalent_to(b),
            (Self::Declaration(a), Self::Declaration(b)) => a.is_equivalent_to(b),
            (Self::Identifier(a), Self::Identifier(b)) => a.is_equivalent_to(b),
            (Self::Expression(a), Self::Expression(b)) => a.is_equivalent_to(b),
            (Self::Pattern(a), Self::Pattern(b)) => a.is_equivalent_to(b),
            (Self::Program(a), Self::Program(b)) => a.is_equivalent_to(b),
            (Self::FunctionParameter(a), Self::FunctionParameter(b)) => a.is_equivalent_to(b),
            (Self::FunctionParameterDefaultValue(a), Self::FunctionParameterDefaultValue(b)) => {
                a.is_equivalent_to(b)
            }
            (Self::TypeAnnotation(a), Self::TypeAnnotation(b)) => a.is_equivalent_to(b),
            (Self::Literal(a), Self::Literal(b)) => a.is_equivalent_to(b),
            (Self::GenericParameter(a), Self::GenericParameter(b)) => a.is_equivalent_to(b),
            (Self::EnumerationCase(a), Self::EnumerationCase(b)) => a.is_equivalent_to(b),
            (Self::TopLevelDeclarations(a), Self::TopLevelDeclarations(b)) => a.is_equivalent_to(b),
            (Self::FunctionCallArgument(a), Self::FunctionCallArgument(b)) => a.is_equivalent_to(b),
            (Self::Comment(a), Self::Comment(b)) => a.is_equivalent_to(b),
            _ => false,
        }
    }
}

impl SyntaxNodeKind for SyntaxNode {
    fn id(&self) -> NodeId {
        dispatch!(self, node => node.id())
    }

    fn to_node(&self) -> SyntaxNode {
        self.clone()
    }

    fn from_node(node: &SyntaxNode) -> Option<Self> {
        Some(node.clone())
    }

    fn subnodes(&self) -> Vec<SyntaxNode> {
        dispatch!(self, node => node.subnodes())
    }

    fn traversal_children(&self) -> Vec<SyntaxNode> {
        dispatch!(self, node => node.traversal_children())
    }

    fn replace_with_policy(&self, id: NodeId, with: &SyntaxNode, preserving: bool) -> Self {
        dispatch!(self, node => SyntaxNode::from(node.replace_with_policy(id, with, preserving)))
    }

    fn delete(&self, id: NodeId) -> Option<Self> {
        dispatch!(self, node => node.delete(id).map(SyntaxNode::from))
    }

    fn insert(&self, child: &SyntaxNode, index: usize) -> Self {
        dispatch!(self, node => SyntaxNode::from(node.insert(child, index)))
    }

    fn copy(&self, deep: bool) -> Self {
        dispatch!(self, node => SyntaxNode::from(node.copy(deep)))
    }

    fn normalized_children(&self) -> Self {
        dispatch!(self, node => SyntaxNode::from(node.normalized_children()))
    }

    fn is_top_level(&self) -> bool {
        dispatch!(self, node => node.is_top_level())
    }

    fn accepts_line_drag(&self, root: &SyntaxNode) -> bool {
        dispatch!(self, node => node.accepts_line_drag(root))
    }

    fn accepts_child(&self, child: &SyntaxNode) -> bool {
        dispatch!(self, node => node.accepts_child(child))
    }

    fn movement_after_insertion(&self, root: &SyntaxNode) -> Movement {
        dispatch!(self, node => node.movement_after_insertion(root))
    }
}
