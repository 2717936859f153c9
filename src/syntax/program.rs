//! Root nodes. Neither is selectable, so paths start below them.

use serde::{Deserialize, Serialize};

use crate::id::NodeId;
use crate::list::List;
use crate::syntax::declaration::Declaration;
use crate::syntax::protocol::{Equivalence, Movement, SyntaxNodeKind};
use crate::syntax::statement::Statement;
use crate::syntax::SyntaxNode;

/// A compilation unit: a block of statements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub id: NodeId,
    pub block: List<Statement>,
}

impl Program {
    pub fn new(block: Vec<Statement>) -> Self {
        Self {
            id: NodeId::new(),
            block: List::from_sequence(block),
        }
    }
}

impl Equivalence for Program {
    fn is_equivalent_to(&self, other: &Self) -> bool {
        self.block.is_equivalent_to(&other.block)
    }
}

impl SyntaxNodeKind for Program {
    fn id(&self) -> NodeId {
        self.id
    }

    fn to_node(&self) -> SyntaxNode {
        SyntaxNode::Program(self.clone())
    }

    fn from_node(node: &SyntaxNode) -> Option<Self> {
        match node {
            SyntaxNode::Program(program) => Some(program.clone()),
            _ => None,
        }
    }

    fn subnodes(&self) -> Vec<SyntaxNode> {
        self.block.subnodes().collect()
    }

    fn replace_with_policy(&self, id: NodeId, with: &SyntaxNode, preserving: bool) -> Self {
        if self.id == id {
            return Self::from_node(with).unwrap_or_else(|| self.clone());
        }
        Self {
            id: self.id,
            block: self.block.replace(id, with, preserving),
        }
    }

    fn delete(&self, id: NodeId) -> Option<Self> {
        if self.id == id {
            return None;
        }
        Some(Self {
            id: self.id,
            block: self.block.delete(id),
        })
    }

    fn insert(&self, child: &SyntaxNode, index: usize) -> Self {
        match Statement::from_node(child) {
            Some(statement) => Self {
                id: self.id,
                block: self.block.inserting_normalized(index, statement),
            },
            None => self.clone(),
        }
    }

    fn copy(&self, deep: bool) -> Self {
        Self {
            id: NodeId::new(),
            block: self.block.copy(deep),
        }
    }

    fn normalized_children(&self) -> Self {
        Self {
            id: self.id,
            block: self.block.normalized_placeholders(),
        }
    }

    fn is_top_level(&self) -> bool {
        true
    }

    fn accepts_child(&self, child: &SyntaxNode) -> bool {
        Statement::from_node(child).is_some()
    }

    fn movement_after_insertion(&self, _root: &SyntaxNode) -> Movement {
        Movement::None
    }
}

/// A library-style document: declarations only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopLevelDeclarations {
    pub id: NodeId,
    pub declarations: List<Declaration>,
}

impl TopLevelDeclarations {
    pub fn new(declarations: Vec<Declaration>) -> Self {
        Self {
            id: NodeId::new(),
            declarations: List::from_sequence(declarations),
        }
    }
}

impl Equivalence for TopLevelDeclarations {
    fn is_equivalent_to(&self, other: &Self) -> bool {
        self.declarations.is_equivalent_to(&other.declarations)
    }
}

impl SyntaxNodeKind for TopLevelDeclarations {
    fn id(&self) -> NodeId {
        self.id
    }

    fn to_node(&self) -> SyntaxNode {
        SyntaxNode::TopLevelDeclarations(self.clone())
    }

    fn from_node(node: &SyntaxNode) -> Option<Self> {
        match node {
            SyntaxNode::TopLevelDeclarations(top) => Some(top.clone()),
            _ => None,
        }
    }

    fn subnodes(&self) -> Vec<SyntaxNode> {
        self.declarations.subnodes().collect()
    }

    fn replace_with_policy(&self, id: NodeId, with: &SyntaxNode, preserving: bool) -> Self {
        if self.id == id {
            return Self::from_node(with).unwrap_or_else(|| self.clone());
        }
        Self {
            id: self.id,
            declarations: self.declarations.replace(id, with, preserving),
        }
    }

    fn delete(&self, id: NodeId) -> Option<Self> {
        if self.id == id {
            return None;
        }
        Some(Self {
            id: self.id,
            declarations: self.declarations.delete(id),
        })
    }

    fn insert(&self, child: &SyntaxNode, index: usize) -> Self {
        match Declaration::from_node(child) {
            Some(declaration) => Self {
                id: self.id,
                declarations: self.declarations.inserting_normalized(index, declaration),
            },
            None => self.clone(),
        }
    }

    fn copy(&self, deep: bool) -> Self {
        Self {
            id: NodeId::new(),
            declarations: self.declarations.copy(deep),
        }
    }

    fn normalized_children(&self) -> Self {
        Self {
            id: self.id,
            declarations: self.declarations.normalized_placeholders(),
        }
    }

    fn is_top_level(&self) -> bool {
        true
    }

    fn accepts_child(&self, child: &SyntaxNode) -> bool {
        Declaration::from_node(child).is_some()
    }

    fn movement_after_insertion(&self, _root: &SyntaxNode) -> Movement {
        Movement::None
    }
}
