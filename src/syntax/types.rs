//! Type annotations.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::id::NodeId;
use crate::list::List;
use crate::syntax::leaf::Identifier;
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
pub enum TypeAnnotation {
    /// A named type, e.g. `Number` or `Array<String>`.
    TypeIdentifier {
        id: NodeId,
        identifier: Identifier,
        generic_arguments: List<TypeAnnotation>,
    },
    FunctionType {
        id: NodeId,
        return_type: Arc<TypeAnnotation>,
        argument_types: List<TypeAnnotation>,
    },
    Placeholder {
        id: NodeId,
    },
}

impl TypeAnnotation {
    /// A non-generic named type.
    pub fn named(name: impl Into<String>) -> Self {
        Self::generic(name, Vec::new())
    }

    pub fn generic(name: impl Into<String>, arguments: Vec<TypeAnnotation>) -> Self {
        Self::TypeIdentifier {
            id: NodeId::new(),
            identifier: Identifier::new(name),
            generic_arguments: List::from_sequence(arguments),
        }
    }

    pub fn function(return_type: TypeAnnotation, argument_types: Vec<TypeAnnotation>) -> Self {
        Self::FunctionType {
            id: NodeId::new(),
            return_type: Arc::new(return_type),
            argument_types: List::from_sequence(argument_types),
        }
    }

    pub fn case_name(&self) -> &'static str {
        match self {
            Self::TypeIdentifier { .. } => "typeIdentifier",
            Self::FunctionType { .. } => "functionType",
            Self::Placeholder { .. } => "placeholder",
        }
    }
}

impl Equivalence for TypeAnnotation {
    fn is_equivalent_to(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Self::TypeIdentifier {
                    identifier: a,
                    generic_arguments: a_args,
                    ..
                },
                Self::TypeIdentifier {
                    identifier: b,
                    generic_arguments: b_args,
                    ..
                },
            ) => a.is_equivalent_to(b) && a_args.is_equivalent_to(b_args),
            (
                Self::FunctionType {
                    return_type: a,
                    argument_types: a_args,
                    ..
                },
                Self::FunctionType {
                    return_type: b,
                    argument_types: b_args,
                    ..
                },
            ) => a.is_equivalent_to(b) && a_args.is_equivalent_to(b_args),
            (Self::Placeholder { .. }, Self::Placeholder { .. }) => true,
            _ => false,
        }
    }
}

impl Placeholder for TypeAnnotation {
    fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder { .. })
    }

    fn make_placeholder() -> Self {
        Self::Placeholder { id: NodeId::new() }
    }
}

impl SyntaxNodeKind for TypeAnnotation {
    fn id(&self) -> NodeId {
        match self {
            Self::TypeIdentifier { id, .. } | Self::FunctionType { id, .. } | Self::Placeholder { id } => *id,
        }
    }

    fn to_node(&self) -> SyntaxNode {
        SyntaxNode::TypeAnnotation(self.clone())
    }

    fn from_node(node: &SyntaxNode) -> Option<Self> {
        match node {
            SyntaxNode::TypeAnnotation(annotation) => Some(annotation.clone()),
            _ => None,
        }
    }

    fn subnodes(&self) -> Vec<SyntaxNode> {
        match self {
            Self::TypeIdentifier {
                identifier,
                generic_arguments,
                ..
            } => std::iter::once(identifier.to_node())
                .chain(generic_arguments.subnodes())
                .collect(),
            Self::FunctionType {
                return_type,
                argument_types,
                ..
            } => std::iter::once(return_type.to_node())
                .chain(argument_types.subnodes())
                .collect(),
            Self::Placeholder { .. } => Vec::new(),
        }
    }

    fn replace_with_policy(&self, id: NodeId, with: &SyntaxNode, preserving: bool) -> Self {
        if self.id() == id {
            return Self::from_node(with).unwrap_or_else(|| self.clone());
        }
        match self {
            Self::TypeIdentifier {
                id: own,
                identifier,
                generic_arguments,
            } => Self::TypeIdentifier {
                id: *own,
                identifier: identifier.replace_with_policy(id, with, preserving),
                generic_arguments: generic_arguments.replace(id, with, preserving),
            },
            Self::FunctionType {
                id: own,
                return_type,
                argument_types,
            } => Self::FunctionType {
                id: *own,
                return_type: replace_arc(return_type, id, with, preserving),
                argument_types: argument_types.replace(id, with, preserving),
            },
            Self::Placeholder { .. } => self.clone(),
        }
    }

    fn delete(&self, id: NodeId) -> Option<Self> {
        if self.id() == id {
            return None;
        }
        Some(match self {
            Self::TypeIdentifier {
                id: own,
                identifier,
                generic_arguments,
            } => Self::TypeIdentifier {
                id: *own,
                identifier: delete_required(identifier, id),
                generic_arguments: generic_arguments.delete(id),
            },
            Self::FunctionType {
                id: own,
                return_type,
                argument_types,
            } => Self::FunctionType {
                id: *own,
                return_type: delete_arc(return_type, id),
                argument_types: argument_types.delete(id),
            },
            Self::Placeholder { .. } => self.clone(),
        })
    }

    fn copy(&self, deep: bool) -> Self {
        let id = NodeId::new();
        match self {
            Self::TypeIdentifier {
                identifier,
                generic_arguments,
                ..
            } => Self::TypeIdentifier {
                id,
                identifier: copy_child(identifier, deep),
                generic_arguments: generic_arguments.copy(deep),
            },
            Self::FunctionType {
                return_type,
                argument_types,
                ..
            } => Self::FunctionType {
                id,
                return_type: copy_arc(return_type, deep),
                argument_types: argument_types.copy(deep),
            },
            Self::Placeholder { .. } => Self::Placeholder { id },
        }
    }

    fn normalized_children(&self) -> Self {
        match self {
            Self::TypeIdentifier {
                id,
                identifier,
                generic_arguments,
            } => Self::TypeIdentifier {
                id: *id,
                identifier: identifier.clone(),
                generic_arguments: generic_arguments.normalized_placeholders(),
            },
            Self::FunctionType {
                id,
                return_type,
                argument_types,
            } => Self::FunctionType {
                id: *id,
                return_type: Arc::clone(return_type),
                argument_types: argument_types.normalized_placeholders(),
            },
            Self::Placeholder { .. } => self.clone(),
        }
    }

    fn movement_after_insertion(&self, root: &SyntaxNode) -> Movement {
        match self {
            Self::TypeIdentifier { .. } => Movement::Next,
            Self::FunctionType { return_type, .. } => focus_first_empty(root, &[return_type.to_node()]),
            Self::Placeholder { .. } => Movement::None,
        }
    }
}
