//! Function parameters, generic parameters and enumeration cases.

use serde::{Deserialize, Serialize};

use crate::id::NodeId;
use crate::list::List;
use crate::syntax::expression::Expression;
use crate::syntax::leaf::{Comment, Pattern};
use crate::syntax::protocol::{
    copy_child, copy_optional, delete_optional, delete_required, focus_first_empty,
    replace_optional, Equivalence, Movement, Placeholder, SyntaxNodeKind,
};
use crate::syntax::types::TypeAnnotation;
use crate::syntax::SyntaxNode;

// ============================================================================
// DEFAULT VALUE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    content = "data",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
pub enum FunctionParameterDefaultValue {
    None { id: NodeId },
    Value { id: NodeId, expression: Expression },
}

impl FunctionParameterDefaultValue {
    pub fn value(expression: Expression) -> Self {
        Self::Value {
            id: NodeId::new(),
            expression,
        }
    }

    pub fn case_name(&self) -> &'static str {
        match self {
            Self::None { .. } => "none",
            Self::Value { .. } => "value",
        }
    }
}

impl Equivalence for FunctionParameterDefaultValue {
    fn is_equivalent_to(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::None { .. }, Self::None { .. }) => true,
            (Self::Value { expression: a, .. }, Self::Value { expression: b, .. }) => a.is_equivalent_to(b),
            _ => false,
        }
    }
}

/// `none` is the empty slot of a parameter's default value.
impl Placeholder for FunctionParameterDefaultValue {
    fn is_placeholder(&self) -> bool {
        matches!(self, Self::None { .. })
    }

    fn make_placeholder() -> Self {
        Self::None { id: NodeId::new() }
    }
}

impl SyntaxNodeKind for FunctionParameterDefaultValue {
    fn id(&self) -> NodeId {
        match self {
            Self::None { id } | Self::Value { id, .. } => *id,
        }
    }

    fn to_node(&self) -> SyntaxNode {
        SyntaxNode::FunctionParameterDefaultValue(self.clone())
    }

    fn from_node(node: &SyntaxNode) -> Option<Self> {
        match node {
            SyntaxNode::FunctionParameterDefaultValue(value) => Some(value.clone()),
            _ => None,
        }
    }

    fn subnodes(&self) -> Vec<SyntaxNode> {
        match self {
            Self::None { .. } => Vec::new(),
            Self::Value { expression, .. } => vec![expression.to_node()],
        }
    }

    fn replace_with_policy(&self, id: NodeId, with: &SyntaxNode, preserving: bool) -> Self {
        if self.id() == id {
            return Self::from_node(with).unwrap_or_else(|| self.clone());
        }
        match self {
            Self::None { .. } => self.clone(),
            Self::Value { id: own, expression } => Self::Value {
                id: *own,
                expression: expression.replace_with_policy(id, with, preserving),
            },
        }
    }

    fn delete(&self, id: NodeId) -> Option<Self> {
        if self.id() == id {
            return None;
        }
        match self {
            Self::None { .. } => Some(self.clone()),
            Self::Value { id: own, expression } => expression
                .delete(id)
                .map(|expression| Self::Value { id: *own, expression }),
        }
    }

    fn copy(&self, deep: bool) -> Self {
        let id = NodeId::new();
        match self {
            Self::None { .. } => Self::None { id },
            Self::Value { expression, .. } => Self::Value {
                id,
                expression: copy_child(expression, deep),
            },
        }
    }
}

// ============================================================================
// FUNCTION PARAMETER
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    content = "data",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
pub enum FunctionParameter {
    Parameter {
        id: NodeId,
        local_name: Pattern,
        annotation: TypeAnnotation,
        default_value: FunctionParameterDefaultValue,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        comment: Option<Comment>,
    },
    Placeholder {
        id: NodeId,
    },
}

impl FunctionParameter {
    pub fn new(name: impl Into<String>, annotation: TypeAnnotation) -> Self {
        Self::Parameter {
            id: NodeId::new(),
            local_name: Pattern::new(name),
            annotation,
            default_value: FunctionParameterDefaultValue::make_placeholder(),
            comment: None,
        }
    }

    pub fn case_name(&self) -> &'static str {
        match self {
            Self::Parameter { .. } => "parameter",
            Self::Placeholder { .. } => "placeholder",
        }
    }
}

impl Equivalence for FunctionParameter {
    fn is_equivalent_to(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Self::Parameter {
                    local_name: n1,
                    annotation: a1,
                    default_value: d1,
                    comment: c1,
                    ..
                },
                Self::Parameter {
                    local_name: n2,
                    annotation: a2,
                    default_value: d2,
                    comment: c2,
                    ..
                },
            ) => {
                n1.is_equivalent_to(n2)
                    && a1.is_equivalent_to(a2)
                    && d1.is_equivalent_to(d2)
                    && c1.is_equivalent_to(c2)
            }
            (Self::Placeholder { .. }, Self::Placeholder { .. }) => true,
            _ => false,
        }
    }
}

impl Placeholder for FunctionParameter {
    fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder { .. })
    }

    fn make_placeholder() -> Self {
        Self::Placeholder { id: NodeId::new() }
    }
}

impl SyntaxNodeKind for FunctionParameter {
    fn id(&self) -> NodeId {
        match self {
            Self::Parameter { id, .. } | Self::Placeholder { id } => *id,
        }
    }

    fn to_node(&self) -> SyntaxNode {
        SyntaxNode::FunctionParameter(self.clone())
    }

    fn from_node(node: &SyntaxNode) -> Option<Self> {
        match node {
            SyntaxNode::FunctionParameter(parameter) => Some(parameter.clone()),
            _ => None,
        }
    }

    fn subnodes(&self) -> Vec<SyntaxNode> {
        match self {
            Self::Parameter {
                local_name,
                annotation,
                default_value,
                comment,
                ..
            } => {
                let mut nodes = vec![local_name.to_node(), annotation.to_node(), default_value.to_node()];
                nodes.extend(comment.iter().map(SyntaxNodeKind::to_node));
                nodes
            }
            Self::Placeholder { .. } => Vec::new(),
        }
    }

    fn replace_with_policy(&self, id: NodeId, with: &SyntaxNode, preserving: bool) -> Self {
        if self.id() == id {
            return Self::from_node(with).unwrap_or_else(|| self.clone());
        }
        match self {
            Self::Parameter {
                id: own,
                local_name,
                annotation,
                default_value,
                comment,
            } => Self::Parameter {
                id: *own,
                local_name: local_name.replace_with_policy(id, with, preserving),
                annotation: annotation.replace_with_policy(id, with, preserving),
                default_value: default_value.replace_with_policy(id, with, preserving),
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
            Self::Parameter {
                id: own,
                local_name,
                annotation,
                default_value,
                comment,
            } => Self::Parameter {
                id: *own,
                local_name: delete_required(local_name, id),
                annotation: delete_required(annotation, id),
                default_value: delete_required(default_value, id),
                comment: delete_optional(comment, id),
            },
            Self::Placeholder { .. } => self.clone(),
        })
    }

    fn copy(&self, deep: bool) -> Self {
        let id = NodeId::new();
        match self {
            Self::Parameter {
                local_name,
                annotation,
                default_value,
                comment,
                ..
            } => Self::Parameter {
                id,
                local_name: copy_child(local_name, deep),
                annotation: copy_child(annotation, deep),
                default_value: copy_child(default_value, deep),
                comment: copy_optional(comment, deep),
            },
            Self::Placeholder { .. } => Self::Placeholder { id },
        }
    }

    fn accepts_line_drag(&self, root: &SyntaxNode) -> bool {
        !self.is_placeholder() && root.id() != self.id()
    }

    fn movement_after_insertion(&self, root: &SyntaxNode) -> Movement {
        match self {
            Self::Parameter {
                local_name,
                annotation,
                ..
            } => focus_first_empty(root, &[local_name.to_node(), annotation.to_node()]),
            Self::Placeholder { .. } => Movement::None,
        }
    }
}

// ============================================================================
// GENERIC PARAMETER
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    content = "data",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
pub enum GenericParameter {
    Parameter { id: NodeId, name: Pattern },
    Placeholder { id: NodeId },
}

impl GenericParameter {
    pub fn new(name: impl Into<String>) -> Self {
        Self::Parameter {
            id: NodeId::new(),
            name: Pattern::new(name),
        }
    }

    pub fn case_name(&self) -> &'static str {
        match self {
            Self::Parameter { .. } => "parameter",
            Self::Placeholder { .. } => "placeholder",
        }
    }
}

impl Equivalence for GenericParameter {
    fn is_equivalent_to(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Parameter { name: a, .. }, Self::Parameter { name: b, .. }) => a.is_equivalent_to(b),
            (Self::Placeholder { .. }, Self::Placeholder { .. }) => true,
            _ => false,
        }
    }
}

impl Placeholder for GenericParameter {
    fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder { .. })
    }

    fn make_placeholder() -> Self {
        Self::Placeholder { id: NodeId::new() }
    }
}

impl SyntaxNodeKind for GenericParameter {
    fn id(&self) -> NodeId {
        match self {
            Self::Parameter { id, .. } | Self::Placeholder { id } => *id,
        }
    }

    fn to_node(&self) -> SyntaxNode {
        SyntaxNode::GenericParameter(self.clone())
    }

    fn from_node(node: &SyntaxNode) -> Option<Self> {
        match node {
            SyntaxNode::GenericParameter(parameter) => Some(parameter.clone()),
            _ => None,
        }
    }

    fn subnodes(&self) -> Vec<SyntaxNode> {
        match self {
            Self::Parameter { name, .. } => vec![name.to_node()],
            Self::Placeholder { .. } => Vec::new(),
        }
    }

    fn replace_with_policy(&self, id: NodeId, with: &SyntaxNode, preserving: bool) -> Self {
        if self.id() == id {
            return Self::from_node(with).unwrap_or_else(|| self.clone());
        }
        match self {
            Self::Parameter { id: own, name } => Self::Parameter {
                id: *own,
                name: name.replace_with_policy(id, with, preserving),
            },
            Self::Placeholder { .. } => self.clone(),
        }
    }

    fn delete(&self, id: NodeId) -> Option<Self> {
        if self.id() == id {
            return None;
        }
        Some(match self {
            Self::Parameter { id: own, name } => Self::Parameter {
                id: *own,
                name: delete_required(name, id),
            },
            Self::Placeholder { .. } => self.clone(),
        })
    }

    fn copy(&self, deep: bool) -> Self {
        let id = NodeId::new();
        match self {
            Self::Parameter { name, .. } => Self::Parameter {
                id,
                name: copy_child(name, deep),
            },
            Self::Placeholder { .. } => Self::Placeholder { id },
        }
    }

    fn accepts_line_drag(&self, root: &SyntaxNode) -> bool {
        !self.is_placeholder() && root.id() != self.id()
    }

    fn movement_after_insertion(&self, root: &SyntaxNode) -> Movement {
        match self {
            Self::Parameter { name, .. } => focus_first_empty(root, &[name.to_node()]),
            Self::Placeholder { .. } => Movement::None,
        }
    }
}

// ============================================================================
// ENUMERATION CASE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    content = "data",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
pub enum EnumerationCase {
    EnumerationCase {
        id: NodeId,
        name: Pattern,
        associated_value_types: List<TypeAnnotation>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        comment: Option<Comment>,
    },
    Placeholder {
        id: NodeId,
    },
}

impl EnumerationCase {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_associated_values(name, Vec::new())
    }

    pub fn with_associated_values(name: impl Into<String>, types: Vec<TypeAnnotation>) -> Self {
        Self::EnumerationCase {
            id: NodeId::new(),
            name: Pattern::new(name),
            associated_value_types: List::from_sequence(types),
            comment: None,
        }
    }

    pub fn case_name(&self) -> &'static str {
        match self {
            Self::EnumerationCase { .. } => "enumerationCase",
            Self::Placeholder { .. } => "placeholder",
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Self::EnumerationCase { name, .. } => Some(&name.name),
            Self::Placeholder { .. } => None,
        }
    }
}

impl Equivalence for EnumerationCase {
    fn is_equivalent_to(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Self::EnumerationCase {
                    name: n1,
                    associated_value_types: t1,
                    comment: c1,
                    ..
                },
                Self::EnumerationCase {
                    name: n2,
                    associated_value_types: t2,
                    comment: c2,
                    ..
                },
            ) => n1.is_equivalent_to(n2) && t1.is_equivalent_to(t2) && c1.is_equivalent_to(c2),
            (Self::Placeholder { .. }, Self::Placeholder { .. }) => true,
            _ => false,
        }
    }
}

impl Placeholder for EnumerationCase {
    fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder { .. })
    }

    fn make_placeholder() -> Self {
        Self::Placeholder { id: NodeId::new() }
    }
}

impl SyntaxNodeKind for EnumerationCase {
    fn id(&self) -> NodeId {
        match self {
            Self::EnumerationCase { id, .. } | Self::Placeholder { id } => *id,
        }
    }

    fn to_node(&self) -> SyntaxNode {
        SyntaxNode::EnumerationCase(self.clone())
    }

    fn from_node(node: &SyntaxNode) -> Option<Self> {
        match node {
            SyntaxNode::EnumerationCase(case) => Some(case.clone()),
            _ => None,
        }
    }

    fn subnodes(&self) -> Vec<SyntaxNode> {
        match self {
            Self::EnumerationCase {
                name,
                associated_value_types,
                comment,
                ..
            } => std::iter::once(name.to_node())
                .chain(associated_value_types.subnodes())
                .chain(comment.iter().map(SyntaxNodeKind::to_node))
                .collect(),
            Self::Placeholder { .. } => Vec::new(),
        }
    }

    fn replace_with_policy(&self, id: NodeId, with: &SyntaxNode, preserving: bool) -> Self {
        if self.id() == id {
            return Self::from_node(with).unwrap_or_else(|| self.clone());
        }
        match self {
            Self::EnumerationCase {
                id: own,
                name,
                associated_value_types,
                comment,
            } => Self::EnumerationCase {
                id: *own,
                name: name.replace_with_policy(id, with, preserving),
                associated_value_types: associated_value_types.replace(id, with, preserving),
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
            Self::EnumerationCase {
                id: own,
                name,
                associated_value_types,
                comment,
            } => Self::EnumerationCase {
                id: *own,
                name: delete_required(name, id),
                associated_value_types: associated_value_types.delete(id),
                comment: delete_optional(comment, id),
            },
            Self::Placeholder { .. } => self.clone(),
        })
    }

    fn copy(&self, deep: bool) -> Self {
        let id = NodeId::new();
        match self {
            Self::EnumerationCase {
                name,
                associated_value_types,
                comment,
                ..
            } => Self::EnumerationCase {
                id,
                name: copy_child(name, deep),
                associated_value_types: associated_value_types.copy(deep),
                comment: copy_optional(comment, deep),
            },
            Self::Placeholder { .. } => Self::Placeholder { id },
        }
    }

    fn normalized_children(&self) -> Self {
        match self {
            Self::EnumerationCase {
                id,
                name,
                associated_value_types,
                comment,
            } => Self::EnumerationCase {
                id: *id,
                name: name.clone(),
                associated_value_types: associated_value_types.normalized_placeholders(),
                comment: comment.clone(),
            },
            Self::Placeholder { .. } => self.clone(),
        }
    }

    fn accepts_line_drag(&self, root: &SyntaxNode) -> bool {
        !self.is_placeholder() && root.id() != self.id()
    }

    fn movement_after_insertion(&self, root: &SyntaxNode) -> Movement {
        match self {
            Self::EnumerationCase { name, .. } => focus_first_empty(root, &[name.to_node()]),
            Self::Placeholder { .. } => Movement::None,
        }
    }
}
