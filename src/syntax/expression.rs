//! Expressions and call arguments.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::id::NodeId;
use crate::list::List;
use crate::syntax::leaf::Identifier;
use crate::syntax::literal::Literal;
use crate::syntax::protocol::{
    copy_arc, copy_child, delete_arc, delete_required, focus_first_empty, replace_arc, Equivalence,
    Movement, Placeholder, SyntaxNodeKind,
};
use crate::syntax::SyntaxNode;

// ============================================================================
// EXPRESSION
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    content = "data",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
pub enum Expression {
    AssignmentExpression {
        id: NodeId,
        left: Arc<Expression>,
        right: Arc<Expression>,
    },
    FunctionCallExpression {
        id: NodeId,
        expression: Arc<Expression>,
        arguments: List<FunctionCallArgument>,
    },
    IdentifierExpression {
        id: NodeId,
        identifier: Identifier,
    },
    LiteralExpression {
        id: NodeId,
        literal: Literal,
    },
    MemberExpression {
        id: NodeId,
        expression: Arc<Expression>,
        member_name: Identifier,
    },
    Placeholder {
        id: NodeId,
    },
}

impl Expression {
    pub fn identifier(name: impl Into<String>) -> Self {
        Self::IdentifierExpression {
            id: NodeId::new(),
            identifier: Identifier::new(name),
        }
    }

    pub fn literal(literal: Literal) -> Self {
        Self::LiteralExpression {
            id: NodeId::new(),
            literal,
        }
    }

    pub fn assignment(left: Expression, right: Expression) -> Self {
        Self::AssignmentExpression {
            id: NodeId::new(),
            left: Arc::new(left),
            right: Arc::new(right),
        }
    }

    pub fn call(callee: Expression, arguments: Vec<FunctionCallArgument>) -> Self {
        Self::FunctionCallExpression {
            id: NodeId::new(),
            expression: Arc::new(callee),
            arguments: List::from_sequence(arguments),
        }
    }

    pub fn member(base: Expression, member: impl Into<String>) -> Self {
        Self::MemberExpression {
            id: NodeId::new(),
            expression: Arc::new(base),
            member_name: Identifier::new(member),
        }
    }

    pub fn case_name(&self) -> &'static str {
        match self {
            Self::AssignmentExpression { .. } => "assignmentExpression",
            Self::FunctionCallExpression { .. } => "functionCallExpression",
            Self::IdentifierExpression { .. } => "identifierExpression",
            Self::LiteralExpression { .. } => "literalExpression",
            Self::MemberExpression { .. } => "memberExpression",
            Self::Placeholder { .. } => "placeholder",
        }
    }
}

impl Equivalence for Expression {
    fn is_equivalent_to(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Self::AssignmentExpression { left: l1, right: r1, .. },
                Self::AssignmentExpression { left: l2, right: r2, .. },
            ) => l1.is_equivalent_to(l2) && r1.is_equivalent_to(r2),
            (
                Self::FunctionCallExpression {
                    expression: e1,
                    arguments: a1,
                    ..
                },
                Self::FunctionCallExpression {
                    expression: e2,
                    arguments: a2,
                    ..
                },
            ) => e1.is_equivalent_to(e2) && a1.is_equivalent_to(a2),
            (
                Self::IdentifierExpression { identifier: a, .. },
                Self::IdentifierExpression { identifier: b, .. },
            ) => a.is_equivalent_to(b),
            (Self::LiteralExpression { literal: a, .. }, Self::LiteralExpression { literal: b, .. }) => {
                a.is_equivalent_to(b)
            }
            (
                Self::MemberExpression {
                    expression: e1,
                    member_name: m1,
                    ..
                },
                Self::MemberExpression {
                    expression: e2,
                    member_name: m2,
                    ..
                },
            ) => e1.is_equivalent_to(e2) && m1.is_equivalent_to(m2),
            (Self::Placeholder { .. }, Self::Placeholder { .. }) => true,
            _ => false,
        }
    }
}

impl Placeholder for Expression {
    fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder { .. })
    }

    fn make_placeholder() -> Self {
        Self::Placeholder { id: NodeId::new() }
    }
}

impl SyntaxNodeKind for Expression {
    fn id(&self) -> NodeId {
        match self {
            Self::AssignmentExpression { id, .. }
            | Self::FunctionCallExpression { id, .. }
            | Self::IdentifierExpression { id, .. }
            | Self::LiteralExpression { id, .. }
            | Self::MemberExpression { id, .. }
            | Self::Placeholder { id } => *id,
        }
    }

    fn to_node(&self) -> SyntaxNode {
        SyntaxNode::Expression(self.clone())
    }

    /// Identifiers and literals are wrapped into a fresh expression.
    fn from_node(node: &SyntaxNode) -> Option<Self> {
        match node {
            SyntaxNode::Expression(expression) => Some(expression.clone()),
            SyntaxNode::Identifier(identifier) => Some(Self::IdentifierExpression {
                id: NodeId::new(),
                identifier: identifier.clone(),
            }),
            SyntaxNode::Literal(literal) => Some(Self::LiteralExpression {
                id: NodeId::new(),
                literal: literal.clone(),
            }),
            _ => None,
        }
    }

    fn subnodes(&self) -> Vec<SyntaxNode> {
        match self {
            Self::AssignmentExpression { left, right, .. } => vec![left.to_node(), right.to_node()],
            Self::FunctionCallExpression {
                expression,
                arguments,
                ..
            } => std::iter::once(expression.to_node())
                .chain(arguments.subnodes())
                .collect(),
            Self::IdentifierExpression { identifier, .. } => vec![identifier.to_node()],
            Self::LiteralExpression { literal, .. } => vec![literal.to_node()],
            Self::MemberExpression {
                expression,
                member_name,
                ..
            } => vec![expression.to_node(), member_name.to_node()],
            Self::Placeholder { .. } => Vec::new(),
        }
    }

    fn replace_with_policy(&self, id: NodeId, with: &SyntaxNode, preserving: bool) -> Self {
        if self.id() == id {
            return Self::from_node(with).unwrap_or_else(|| self.clone());
        }
        match self {
            Self::AssignmentExpression { id: own, left, right } => Self::AssignmentExpression {
                id: *own,
                left: replace_arc(left, id, with, preserving),
                right: replace_arc(right, id, with, preserving),
            },
            Self::FunctionCallExpression {
                id: own,
                expression,
                arguments,
            } => Self::FunctionCallExpression {
                id: *own,
                expression: replace_arc(expression, id, with, preserving),
                arguments: arguments.replace(id, with, preserving),
            },
            Self::IdentifierExpression { id: own, identifier } => Self::IdentifierExpression {
                id: *own,
                identifier: identifier.replace_with_policy(id, with, preserving),
            },
            Self::LiteralExpression { id: own, literal } => Self::LiteralExpression {
                id: *own,
                literal: literal.replace_with_policy(id, with, preserving),
            },
            Self::MemberExpression {
                id: own,
                expression,
                member_name,
            } => Self::MemberExpression {
                id: *own,
                expression: replace_arc(expression, id, with, preserving),
                member_name: member_name.replace_with_policy(id, with, preserving),
            },
            Self::Placeholder { .. } => self.clone(),
        }
    }

    fn delete(&self, id: NodeId) -> Option<Self> {
        if self.id() == id {
            return None;
        }
        match self {
            Self::AssignmentExpression { id: own, left, right } => Some(Self::AssignmentExpression {
                id: *own,
                left: delete_arc(left, id),
                right: delete_arc(right, id),
            }),
            Self::FunctionCallExpression {
                id: own,
                expression,
                arguments,
            } => Some(Self::FunctionCallExpression {
                id: *own,
                expression: delete_arc(expression, id),
                arguments: arguments.delete(id),
            }),
            // Wrappers disappear together with their only child.
            Self::IdentifierExpression { identifier, .. } => {
                identifier.delete(id).map(|_| self.clone())
            }
            Self::LiteralExpression { id: own, literal } => {
                literal.delete(id).map(|literal| Self::LiteralExpression { id: *own, literal })
            }
            Self::MemberExpression {
                id: own,
                expression,
                member_name,
            } => Some(Self::MemberExpression {
                id: *own,
                expression: delete_arc(expression, id),
                member_name: delete_required(member_name, id),
            }),
            Self::Placeholder { .. } => Some(self.clone()),
        }
    }

    fn insert(&self, child: &SyntaxNode, index: usize) -> Self {
        match (self, FunctionCallArgument::from_node(child)) {
            (
                Self::FunctionCallExpression {
                    id,
                    expression,
                    arguments,
                },
                Some(argument),
            ) => Self::FunctionCallExpression {
                id: *id,
                expression: Arc::clone(expression),
                arguments: arguments.inserting_normalized(index, argument),
            },
            _ => self.clone(),
        }
    }

    fn copy(&self, deep: bool) -> Self {
        let id = NodeId::new();
        match self {
            Self::AssignmentExpression { left, right, .. } => Self::AssignmentExpression {
                id,
                left: copy_arc(left, deep),
                right: copy_arc(right, deep),
            },
            Self::FunctionCallExpression {
                expression,
                arguments,
                ..
            } => Self::FunctionCallExpression {
                id,
                expression: copy_arc(expression, deep),
                arguments: arguments.copy(deep),
            },
            Self::IdentifierExpression { identifier, .. } => Self::IdentifierExpression {
                id,
                identifier: copy_child(identifier, deep),
            },
            Self::LiteralExpression { literal, .. } => Self::LiteralExpression {
                id,
                literal: copy_child(literal, deep),
            },
            Self::MemberExpression {
                expression,
                member_name,
                ..
            } => Self::MemberExpression {
                id,
                expression: copy_arc(expression, deep),
                member_name: copy_child(member_name, deep),
            },
            Self::Placeholder { .. } => Self::Placeholder { id },
        }
    }

    fn normalized_children(&self) -> Self {
        match self {
            Self::FunctionCallExpression {
                id,
                expression,
                arguments,
            } => Self::FunctionCallExpression {
                id: *id,
                expression: Arc::clone(expression),
                arguments: arguments.normalized_placeholders(),
            },
            _ => self.clone(),
        }
    }

    fn accepts_child(&self, child: &SyntaxNode) -> bool {
        matches!(self, Self::FunctionCallExpression { .. })
            && FunctionCallArgument::from_node(child).is_some()
    }

    fn movement_after_insertion(&self, root: &SyntaxNode) -> Movement {
        match self {
            Self::AssignmentExpression { right, .. } => focus_first_empty(root, &[right.to_node()]),
            Self::FunctionCallExpression { arguments, .. } => {
                let slots: Vec<SyntaxNode> = arguments
                    .iter()
                    .filter_map(|argument| match argument {
                        FunctionCallArgument::Argument { expression, .. } => Some(expression.to_node()),
                        FunctionCallArgument::Placeholder { .. } => None,
                    })
                    .take(1)
                    .collect();
                focus_first_empty(root, &slots)
            }
            Self::Placeholder { .. } => Movement::None,
            _ => Movement::Next,
        }
    }
}

// ============================================================================
// FUNCTION CALL ARGUMENT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    content = "data",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
pub enum FunctionCallArgument {
    Argument {
        id: NodeId,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
        expression: Arc<Expression>,
    },
    Placeholder {
        id: NodeId,
    },
}

impl FunctionCallArgument {
    pub fn new(label: Option<&str>, expression: Expression) -> Self {
        Self::Argument {
            id: NodeId::new(),
            label: label.map(str::to_string),
            expression: Arc::new(expression),
        }
    }

    pub fn case_name(&self) -> &'static str {
        match self {
            Self::Argument { .. } => "argument",
            Self::Placeholder { .. } => "placeholder",
        }
    }
}

impl Equivalence for FunctionCallArgument {
    fn is_equivalent_to(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Self::Argument {
                    label: l1,
                    expression: e1,
                    ..
                },
                Self::Argument {
                    label: l2,
                    expression: e2,
                    ..
                },
            ) => l1 == l2 && e1.is_equivalent_to(e2),
            (Self::Placeholder { .. }, Self::Placeholder { .. }) => true,
            _ => false,
        }
    }
}

impl Placeholder for FunctionCallArgument {
    fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder { .. })
    }

    fn make_placeholder() -> Self {
        Self::Placeholder { id: NodeId::new() }
    }
}

impl SyntaxNodeKind for FunctionCallArgument {
    fn id(&self) -> NodeId {
        match self {
            Self::Argument { id, .. } | Self::Placeholder { id } => *id,
        }
    }

    fn to_node(&self) -> SyntaxNode {
        SyntaxNode::FunctionCallArgument(self.clone())
    }

    fn from_node(node: &SyntaxNode) -> Option<Self> {
        match node {
            SyntaxNode::FunctionCallArgument(argument) => Some(argument.clone()),
            _ => None,
        }
    }

    fn subnodes(&self) -> Vec<SyntaxNode> {
        match self {
            Self::Argument { expression, .. } => vec![expression.to_node()],
            Self::Placeholder { .. } => Vec::new(),
        }
    }

    fn replace_with_policy(&self, id: NodeId, with: &SyntaxNode, preserving: bool) -> Self {
        if self.id() == id {
            return Self::from_node(with).unwrap_or_else(|| self.clone());
        }
        match self {
            Self::Argument {
                id: own,
                label,
                expression,
            } => Self::Argument {
                id: *own,
                label: label.clone(),
                expression: replace_arc(expression, id, with, preserving),
            },
            Self::Placeholder { .. } => self.clone(),
        }
    }

    fn delete(&self, id: NodeId) -> Option<Self> {
        if self.id() == id {
            return None;
        }
        match self {
            Self::Argument {
                id: own,
                label,
                expression,
            } => expression.delete(id).map(|expression| Self::Argument {
                id: *own,
                label: label.clone(),
                expression: Arc::new(expression),
            }),
            Self::Placeholder { .. } => Some(self.clone()),
        }
    }

    fn copy(&self, deep: bool) -> Self {
        let id = NodeId::new();
        match self {
            Self::Argument {
                label, expression, ..
            } => Self::Argument {
                id,
                label: label.clone(),
                expression: copy_arc(expression, deep),
            },
            Self::Placeholder { .. } => Self::Placeholder { id },
        }
    }

    fn accepts_line_drag(&self, root: &SyntaxNode) -> bool {
        !self.is_placeholder() && root.id() != self.id()
    }

    fn movement_after_insertion(&self, root: &SyntaxNode) -> Movement {
        match self {
            Self::Argument { expression, .. } => focus_first_empty(root, &[expression.to_node()]),
            Self::Placeholder { .. } => Movement::None,
        }
    }
}
