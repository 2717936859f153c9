//! Leaf nodes: identifiers, binding patterns and comments.

use serde::{Deserialize, Serialize};

use crate::id::NodeId;
use crate::syntax::protocol::{Equivalence, Movement, Placeholder, SyntaxNodeKind};
use crate::syntax::SyntaxNode;

/// A reference to a name, e.g. the callee in `print(x)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identifier {
    pub id: NodeId,
    pub string: String,
    #[serde(default)]
    pub is_placeholder: bool,
}

impl Identifier {
    pub fn new(string: impl Into<String>) -> Self {
        Self {
            id: NodeId::new(),
            string: string.into(),
            is_placeholder: false,
        }
    }
}

impl Equivalence for Identifier {
    fn is_equivalent_to(&self, other: &Self) -> bool {
        self.is_placeholder == other.is_placeholder
            && (self.is_placeholder || self.string == other.string)
    }
}

impl Placeholder for Identifier {
    fn is_placeholder(&self) -> bool {
        self.is_placeholder
    }

    fn make_placeholder() -> Self {
        Self {
            id: NodeId::new(),
            string: String::new(),
            is_placeholder: true,
        }
    }
}

impl SyntaxNodeKind for Identifier {
    fn id(&self) -> NodeId {
        self.id
    }

    fn to_node(&self) -> SyntaxNode {
        SyntaxNode::Identifier(self.clone())
    }

    fn from_node(node: &SyntaxNode) -> Option<Self> {
        match node {
            SyntaxNode::Identifier(identifier) => Some(identifier.clone()),
            _ => None,
        }
    }

    fn subnodes(&self) -> Vec<SyntaxNode> {
        Vec::new()
    }

    fn replace_with_policy(&self, id: NodeId, with: &SyntaxNode, _preserving: bool) -> Self {
        if self.id == id {
            return Self::from_node(with).unwrap_or_else(|| self.clone());
        }
        self.clone()
    }

    fn delete(&self, id: NodeId) -> Option<Self> {
        (self.id != id).then(|| self.clone())
    }

    fn copy(&self, _deep: bool) -> Self {
        Self {
            id: NodeId::new(),
            ..self.clone()
        }
    }

    fn movement_after_insertion(&self, _root: &SyntaxNode) -> Movement {
        if self.is_placeholder {
            Movement::None
        } else {
            Movement::Next
        }
    }
}

/// A binding site: the name introduced by a declaration, parameter or loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pattern {
    pub id: NodeId,
    pub name: String,
}

impl Pattern {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: NodeId::new(),
            name: name.into(),
        }
    }
}

impl Equivalence for Pattern {
    fn is_equivalent_to(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

/// A pattern without a name is the empty slot of a binding position.
impl Placeholder for Pattern {
    fn is_placeholder(&self) -> bool {
        self.name.is_empty()
    }

    fn make_placeholder() -> Self {
        Self::new("")
    }
}

impl SyntaxNodeKind for Pattern {
    fn id(&self) -> NodeId {
        self.id
    }

    fn to_node(&self) -> SyntaxNode {
        SyntaxNode::Pattern(self.clone())
    }

    fn from_node(node: &SyntaxNode) -> Option<Self> {
        match node {
            SyntaxNode::Pattern(pattern) => Some(pattern.clone()),
            _ => None,
        }
    }

    fn subnodes(&self) -> Vec<SyntaxNode> {
        Vec::new()
    }

    fn replace_with_policy(&self, id: NodeId, with: &SyntaxNode, _preserving: bool) -> Self {
        if self.id == id {
            return Self::from_node(with).unwrap_or_else(|| self.clone());
        }
        self.clone()
    }

    fn delete(&self, id: NodeId) -> Option<Self> {
        (self.id != id).then(|| self.clone())
    }

    fn copy(&self, _deep: bool) -> Self {
        Self {
            id: NodeId::new(),
            name: self.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: NodeId,
    pub string: String,
}

impl Comment {
    pub fn new(string: impl Into<String>) -> Self {
        Self {
            id: NodeId::new(),
            string: string.into(),
        }
    }
}

impl Equivalence for Comment {
    fn is_equivalent_to(&self, other: &Self) -> bool {
        self.string == other.string
    }
}

impl Placeholder for Comment {
    fn is_placeholder(&self) -> bool {
        self.string.is_empty()
    }

    fn make_placeholder() -> Self {
        Self::new("")
    }
}

impl SyntaxNodeKind for Comment {
    fn id(&self) -> NodeId {
        self.id
    }

    fn to_node(&self) -> SyntaxNode {
        SyntaxNode::Comment(self.clone())
    }

    fn from_node(node: &SyntaxNode) -> Option<Self> {
        match node {
            SyntaxNode::Comment(comment) => Some(comment.clone()),
            _ => None,
        }
    }

    fn subnodes(&self) -> Vec<SyntaxNode> {
        Vec::new()
    }

    fn replace_with_policy(&self, id: NodeId, with: &SyntaxNode, _preserving: bool) -> Self {
        if self.id == id {
            return Self::from_node(with).unwrap_or_else(|| self.clone());
        }
        self.clone()
    }

    fn delete(&self, id: NodeId) -> Option<Self> {
        (self.id != id).then(|| self.clone())
    }

    fn copy(&self, _deep: bool) -> Self {
        Self {
            id: NodeId::new(),
            string: self.string.clone(),
        }
    }
}
