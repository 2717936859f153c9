//! Statements.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::id::NodeId;
use crate::list::List;
use crate::syntax::declaration::Declaration;
use crate::syntax::expression::Expression;
use crate::syntax::leaf::Pattern;
use crate::syntax::protocol::{
    copy_arc, copy_child, delete_arc, delete_required, focus_first_empty, replace_arc, Equivalence,
    Movement, Placeholder, SyntaxNodeKind,
};
use crate::syntax::SyntaxNode;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    content = "data",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
pub enum Statement {
    Branch {
        id: NodeId,
        condition: Arc<Expression>,
        block: List<Statement>,
    },
    Loop {
        id: NodeId,
        pattern: Pattern,
        expression: Arc<Expression>,
        block: List<Statement>,
    },
    Declaration {
        id: NodeId,
        content: Arc<Declaration>,
    },
    ExpressionStatement {
        id: NodeId,
        expression: Arc<Expression>,
    },
    ReturnStatement {
        id: NodeId,
        expression: Arc<Expression>,
    },
    Placeholder {
        id: NodeId,
    },
}

impl Statement {
    pub fn branch(condition: Expression, block: Vec<Statement>) -> Self {
        Self::Branch {
            id: NodeId::new(),
            condition: Arc::new(condition),
            block: List::from_sequence(block),
        }
    }

    pub fn for_in(pattern: Pattern, expression: Expression, block: Vec<Statement>) -> Self {
        Self::Loop {
            id: NodeId::new(),
            pattern,
            expression: Arc::new(expression),
            block: List::from_sequence(block),
        }
    }

    pub fn declaration(content: Declaration) -> Self {
        Self::Declaration {
            id: NodeId::new(),
            content: Arc::new(content),
        }
    }

    pub fn expression(expression: Expression) -> Self {
        Self::ExpressionStatement {
            id: NodeId::new(),
            expression: Arc::new(expression),
        }
    }

    pub fn return_value(expression: Expression) -> Self {
        Self::ReturnStatement {
            id: NodeId::new(),
            expression: Arc::new(expression),
        }
    }

    pub fn case_name(&self) -> &'static str {
        match self {
            Self::Branch { .. } => "branch",
            Self::Loop { .. } => "loop",
            Self::Declaration { .. } => "declaration",
            Self::ExpressionStatement { .. } => "expressionStatement",
            Self::ReturnStatement { .. } => "returnStatement",
            Self::Placeholder { .. } => "placeholder",
        }
    }

    /// The statements nested directly inside this one.
    pub fn block(&self) -> Option<&List<Statement>> {
        match self {
            Self::Branch { block, .. } | Self::Loop { block, .. } => Some(block),
            _ => None,
        }
    }

    fn with_block(&self, block: List<Statement>) -> Self {
        match self {
            Self::Branch { id, condition, .. } => Self::Branch {
                id: *id,
                condition: Arc::clone(condition),
                block,
            },
            Self::Loop {
                id,
                pattern,
                expression,
                ..
            } => Self::Loop {
                id: *id,
                pattern: pattern.clone(),
                expression: Arc::clone(expression),
                block,
            },
            _ => self.clone(),
        }
    }
}

impl Equivalence for Statement {
    fn is_equivalent_to(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Self::Branch {
                    condition: c1,
                    block: b1,
                    ..
                },
                Self::Branch {
                    condition: c2,
                    block: b2,
                    ..
                },
            ) => c1.is_equivalent_to(c2) && b1.is_equivalent_to(b2),
            (
                Self::Loop {
                    pattern: p1,
                    expression: e1,
                    block: b1,
                    ..
                },
                Self::Loop {
                    pattern: p2,
                    expression: e2,
                    block: b2,
                    ..
                },
            ) => p1.is_equivalent_to(p2) && e1.is_equivalent_to(e2) && b1.is_equivalent_to(b2),
            (Self::Declaration { content: a, .. }, Self::Declaration { content: b, .. }) => {
                a.is_equivalent_to(b)
            }
            (
                Self::ExpressionStatement { expression: a, .. },
                Self::ExpressionStatement { expression: b, .. },
            )
            | (Self::ReturnStatement { expression: a, .. }, Self::ReturnStatement { expression: b, .. }) => {
                a.is_equivalent_to(b)
            }
            (Self::Placeholder { .. }, Self::Placeholder { .. }) => true,
            _ => false,
        }
    }
}

impl Placeholder for Statement {
    fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder { .. })
    }

    fn make_placeholder() -> Self {
        Self::Placeholder { id: NodeId::new() }
    }
}

impl SyntaxNodeKind for Statement {
    fn id(&self) -> NodeId {
        match self {
            Self::Branch { id, .. }
            | Self::Loop { id, .. }
            | Self::Declaration { id, .. }
            | Self::ExpressionStatement { id, .. }
            | Self::ReturnStatement { id, .. }
            | Self::Placeholder { id } => *id,
        }
    }

    fn to_node(&self) -> SyntaxNode {
        SyntaxNode::Statement(self.clone())
    }

    /// Declarations and expressions are wrapped into a fresh statement.
    fn from_node(node: &SyntaxNode) -> Option<Self> {
        match node {
            SyntaxNode::Statement(statement) => Some(statement.clone()),
            SyntaxNode::Declaration(declaration) => Some(Self::declaration(declaration.clone())),
            SyntaxNode::Expression(expression) => Some(Self::expression(expression.clone())),
            _ => None,
        }
    }

    fn subnodes(&self) -> Vec<SyntaxNode> {
        match self {
            Self::Branch {
                condition, block, ..
            } => std::iter::once(condition.to_node())
                .chain(block.subnodes())
                .collect(),
            Self::Loop {
                pattern,
                expression,
                block,
                ..
            } => [pattern.to_node(), expression.to_node()]
                .into_iter()
                .chain(block.subnodes())
                .collect(),
            Self::Declaration { content, .. } => vec![content.to_node()],
            Self::ExpressionStatement { expression, .. } | Self::ReturnStatement { expression, .. } => {
                vec![expression.to_node()]
            }
            Self::Placeholder { .. } => Vec::new(),
        }
    }

    /// Evaluation order: a branch's condition before its body, a loop's
    /// iterable before the pattern it binds.
    fn traversal_children(&self) -> Vec<SyntaxNode> {
        match self {
            Self::Branch {
                condition, block, ..
            } => std::iter::once(condition.to_node())
                .chain(block.subnodes())
                .collect(),
            Self::Loop {
                pattern,
                expression,
                block,
                ..
            } => [expression.to_node(), pattern.to_node()]
                .into_iter()
                .chain(block.subnodes())
                .collect(),
            _ => self.subnodes(),
        }
    }

    fn replace_with_policy(&self, id: NodeId, with: &SyntaxNode, preserving: bool) -> Self {
        if self.id() == id {
            return Self::from_node(with).unwrap_or_else(|| self.clone());
        }
        match self {
            Self::Branch {
                id: own,
                condition,
                block,
            } => Self::Branch {
                id: *own,
                condition: replace_arc(condition, id, with, preserving),
                block: block.replace(id, with, preserving),
            },
            Self::Loop {
                id: own,
                pattern,
                expression,
                block,
            } => Self::Loop {
                id: *own,
                pattern: pattern.replace_with_policy(id, with, preserving),
                expression: replace_arc(expression, id, with, preserving),
                block: block.replace(id, with, preserving),
            },
            Self::Declaration { id: own, content } => Self::Declaration {
                id: *own,
                content: replace_arc(content, id, with, preserving),
            },
            Self::ExpressionStatement { id: own, expression } => Self::ExpressionStatement {
                id: *own,
                expression: replace_arc(expression, id, with, preserving),
            },
            Self::ReturnStatement { id: own, expression } => Self::ReturnStatement {
                id: *own,
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
            Self::Branch {
                id: own,
                condition,
                block,
            } => Some(Self::Branch {
                id: *own,
                condition: delete_arc(condition, id),
                block: block.delete(id),
            }),
            Self::Loop {
                id: own,
                pattern,
                expression,
                block,
            } => Some(Self::Loop {
                id: *own,
                pattern: delete_required(pattern, id),
                expression: delete_arc(expression, id),
                block: block.delete(id),
            }),
            // A statement that only wraps a declaration or an expression goes
            // away with it.
            Self::Declaration { id: own, content } => {
                content.delete(id).map(|content| Self::Declaration {
                    id: *own,
                    content: Arc::new(content),
                })
            }
            Self::ExpressionStatement { id: own, expression } => {
                expression.delete(id).map(|expression| Self::ExpressionStatement {
                    id: *own,
                    expression: Arc::new(expression),
                })
            }
            Self::ReturnStatement { id: own, expression } => Some(Self::ReturnStatement {
                id: *own,
                expression: delete_arc(expression, id),
            }),
            Self::Placeholder { .. } => Some(self.clone()),
        }
    }

    fn insert(&self, child: &SyntaxNode, index: usize) -> Self {
        match (self.block(), Statement::from_node(child)) {
            (Some(block), Some(statement)) => self.with_block(block.inserting_normalized(index, statement)),
            _ => self.clone(),
        }
    }

    fn copy(&self, deep: bool) -> Self {
        let id = NodeId::new();
        match self {
            Self::Branch {
                condition, block, ..
            } => Self::Branch {
                id,
                condition: copy_arc(condition, deep),
                block: block.copy(deep),
            },
            Self::Loop {
                pattern,
                expression,
                block,
                ..
            } => Self::Loop {
                id,
                pattern: copy_child(pattern, deep),
                expression: copy_arc(expression, deep),
                block: block.copy(deep),
            },
            Self::Declaration { content, .. } => Self::Declaration {
                id,
                content: copy_arc(content, deep),
            },
            Self::ExpressionStatement { expression, .. } => Self::ExpressionStatement {
                id,
                expression: copy_arc(expression, deep),
            },
            Self::ReturnStatement { expression, .. } => Self::ReturnStatement {
                id,
                expression: copy_arc(expression, deep),
            },
            Self::Placeholder { .. } => Self::Placeholder { id },
        }
    }

    fn normalized_children(&self) -> Self {
        match self.block() {
            Some(block) => self.with_block(block.normalized_placeholders()),
            None => self.clone(),
        }
    }

    fn accepts_line_drag(&self, root: &SyntaxNode) -> bool {
        !self.is_placeholder() && root.id() != self.id()
    }

    fn accepts_child(&self, child: &SyntaxNode) -> bool {
        self.block().is_some() && Statement::from_node(child).is_some()
    }

    fn movement_after_insertion(&self, root: &SyntaxNode) -> Movement {
        match self {
            Self::Branch { condition, .. } => focus_first_empty(root, &[condition.to_node()]),
            Self::Loop {
                pattern, expression, ..
            } => focus_first_empty(root, &[pattern.to_node(), expression.to_node()]),
            Self::Declaration { content, .. } => content.movement_after_insertion(root),
            Self::ExpressionStatement { expression, .. } => expression.movement_after_insertion(root),
            Self::ReturnStatement { expression, .. } => focus_first_empty(root, &[expression.to_node()]),
            Self::Placeholder { .. } => Movement::None,
        }
    }
}
