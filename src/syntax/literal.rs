//! Literal values.

use serde::{Deserialize, Serialize};

use crate::id::NodeId;
use crate::list::List;
use crate::syntax::expression::Expression;
use crate::syntax::protocol::{Equivalence, Movement, SyntaxNodeKind};
use crate::syntax::SyntaxNode;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    content = "data",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
pub enum Literal {
    None { id: NodeId },
    Boolean { id: NodeId, value: bool },
    Number {
        id: NodeId,
        #[serde(with = "number_value")]
        value: f64,
    },
    String { id: NodeId, value: String },
    /// A CSS-style color string, e.g. `#ff0000`.
    Color { id: NodeId, value: String },
    Array { id: NodeId, value: List<Expression> },
}

/// JSON has no NaN or infinity, so those are written as strings.
mod number_value {
    use serde::de::{self, Deserialize, Deserializer};
    use serde::Serializer;

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_nan() {
            serializer.serialize_str("NaN")
        } else if value.is_infinite() {
            serializer.serialize_str(if *value > 0.0 { "Infinity" } else { "-Infinity" })
        } else {
            serializer.serialize_f64(*value)
        }
    }

    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    enum Wire {
        Number(f64),
        Text(String),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Wire::deserialize(deserializer)? {
            Wire::Number(value) => Ok(value),
            Wire::Text(text) => match text.as_str() {
                "NaN" => Ok(f64::NAN),
                "Infinity" => Ok(f64::INFINITY),
                "-Infinity" => Ok(f64::NEG_INFINITY),
                other => Err(de::Error::custom(format!("invalid number `{other}`"))),
            },
        }
    }
}

impl Literal {
    pub fn none() -> Self {
        Self::None { id: NodeId::new() }
    }

    pub fn boolean(value: bool) -> Self {
        Self::Boolean {
            id: NodeId::new(),
            value,
        }
    }

    pub fn number(value: f64) -> Self {
        Self::Number {
            id: NodeId::new(),
            value,
        }
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::String {
            id: NodeId::new(),
            value: value.into(),
        }
    }

    pub fn color(value: impl Into<String>) -> Self {
        Self::Color {
            id: NodeId::new(),
            value: value.into(),
        }
    }

    pub fn array(elements: Vec<Expression>) -> Self {
        Self::Array {
            id: NodeId::new(),
            value: List::from_sequence(elements),
        }
    }

    pub fn case_name(&self) -> &'static str {
        match self {
            Self::None { .. } => "none",
            Self::Boolean { .. } => "boolean",
            Self::Number { .. } => "number",
            Self::String { .. } => "string",
            Self::Color { .. } => "color",
            Self::Array { .. } => "array",
        }
    }

    fn with_id(&self, id: NodeId) -> Self {
        match self {
            Self::None { .. } => Self::None { id },
            Self::Boolean { value, .. } => Self::Boolean { id, value: *value },
            Self::Number { value, .. } => Self::Number { id, value: *value },
            Self::String { value, .. } => Self::String {
                id,
                value: value.clone(),
            },
            Self::Color { value, .. } => Self::Color {
                id,
                value: value.clone(),
            },
            Self::Array { value, .. } => Self::Array {
                id,
                value: value.clone(),
            },
        }
    }
}

impl Equivalence for Literal {
    fn is_equivalent_to(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::None { .. }, Self::None { .. }) => true,
            (Self::Boolean { value: a, .. }, Self::Boolean { value: b, .. }) => a == b,
            (Self::Number { value: a, .. }, Self::Number { value: b, .. }) => {
                a == b || (a.is_nan() && b.is_nan())
            }
            (Self::String { value: a, .. }, Self::String { value: b, .. }) => a == b,
            (Self::Color { value: a, .. }, Self::Color { value: b, .. }) => a == b,
            (Self::Array { value: a, .. }, Self::Array { value: b, .. }) => a.is_equivalent_to(b),
            _ => false,
        }
    }
}

impl SyntaxNodeKind for Literal {
    fn id(&self) -> NodeId {
        match self {
            Self::None { id }
            | Self::Boolean { id, .. }
            | Self::Number { id, .. }
            | Self::String { id, .. }
            | Self::Color { id, .. }
            | Self::Array { id, .. } => *id,
        }
    }

    fn to_node(&self) -> SyntaxNode {
        SyntaxNode::Literal(self.clone())
    }

    fn from_node(node: &SyntaxNode) -> Option<Self> {
        match node {
            SyntaxNode::Literal(literal) => Some(literal.clone()),
            _ => None,
        }
    }

    fn subnodes(&self) -> Vec<SyntaxNode> {
        match self {
            Self::Array { value, .. } => value.subnodes().collect(),
            _ => Vec::new(),
        }
    }

    fn replace_with_policy(&self, id: NodeId, with: &SyntaxNode, preserving: bool) -> Self {
        if self.id() == id {
            return Self::from_node(with).unwrap_or_else(|| self.clone());
        }
        match self {
            Self::Array { id: own, value } => Self::Array {
                id: *own,
                value: value.replace(id, with, preserving),
            },
            _ => self.clone(),
        }
    }

    fn delete(&self, id: NodeId) -> Option<Self> {
        if self.id() == id {
            return None;
        }
        Some(match self {
            Self::Array { id: own, value } => Self::Array {
                id: *own,
                value: value.delete(id),
            },
            _ => self.clone(),
        })
    }

    fn insert(&self, child: &SyntaxNode, index: usize) -> Self {
        match (self, Expression::from_node(child)) {
            (Self::Array { id, value }, Some(element)) => Self::Array {
                id: *id,
                value: value.inserting_normalized(index, element),
            },
            _ => self.clone(),
        }
    }

    fn copy(&self, deep: bool) -> Self {
        match self {
            Self::Array { value, .. } => Self::Array {
                id: NodeId::new(),
                value: value.copy(deep),
            },
            _ => self.with_id(NodeId::new()),
        }
    }

    fn normalized_children(&self) -> Self {
        match self {
            Self::Array { id, value } => Self::Array {
                id: *id,
                value: value.normalized_placeholders(),
            },
            _ => self.clone(),
        }
    }

    fn accepts_child(&self, child: &SyntaxNode) -> bool {
        matches!(self, Self::Array { .. }) && Expression::from_node(child).is_some()
    }

    fn movement_after_insertion(&self, _root: &SyntaxNode) -> Movement {
        Movement::Next
    }
}
