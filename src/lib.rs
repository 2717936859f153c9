//! Syntax tree model and structural editing engine for the Logic language.
//!
//! Trees are immutable: [`find`](SyntaxNodeKind::find),
//! [`replace`](SyntaxNodeKind::replace), [`delete`](SyntaxNodeKind::delete),
//! [`insert`](SyntaxNodeKind::insert) and [`copy`](SyntaxNodeKind::copy)
//! return new values that share untouched subtrees with the original.
//! [`Document`] wraps a root with an identity cache and checked edits.

pub use crate::cache::NodeCache;
pub use crate::config::EditorConfig;
pub use crate::document::Document;
pub use crate::errors::{DecodeError, EditError, LogicError};
pub use crate::id::NodeId;
pub use crate::list::List;
pub use crate::syntax::{
    Comment, Declaration, EnumerationCase, Equivalence, Expression, FunctionCallArgument,
    FunctionParameter, FunctionParameterDefaultValue, GenericParameter, Identifier, Literal,
    Movement, Pattern, Placeholder, Program, Statement, SyntaxNode, SyntaxNodeKind,
    TopLevelDeclarations, TypeAnnotation,
};
pub use crate::traversal::{Order, TraversalConfig};

pub mod cache;
pub mod cli;
pub mod codec;
pub mod config;
pub mod document;
pub mod errors;
pub mod format;
pub mod id;
pub mod list;
pub mod syntax;
pub mod traversal;
