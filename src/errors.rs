//! Error types.
//!
//! Structural operations on nodes never fail; they return `None` or the
//! unchanged node. Errors exist at the boundaries: decoding external input,
//! checked edits on a [`Document`](crate::document::Document), and the
//! configuration and file handling of the command line.

use std::sync::Arc;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::id::NodeId;

// ============================================================================
// DECODE ERRORS
// ============================================================================

/// Malformed serialized input: bad JSON, an unknown `type` discriminator or
/// a missing required field. The previous tree stays valid.
#[derive(Error, Diagnostic, Debug)]
#[error("Decode error: {message}")]
#[diagnostic(
    code(logic::decode),
    help("every node is encoded as {{\"type\": \"<case>\", \"data\": {{ ... }}}}")
)]
pub struct DecodeError {
    pub message: String,
    pub line: usize,
    pub column: usize,
    #[source_code]
    src: Arc<NamedSource<String>>,
    #[label("here")]
    span: Option<SourceSpan>,
}

impl DecodeError {
    /// Wraps a `serde_json` failure, pointing at the offending position in
    /// `text` when it has one.
    pub fn from_json(error: serde_json::Error, name: &str, text: &str) -> Self {
        let line = error.line();
        let column = error.column();
        let span = offset_of(text, line, column).map(|offset| SourceSpan::from(offset..offset));
        Self {
            message: error.to_string(),
            line,
            column,
            src: Arc::new(NamedSource::new(name, text.to_string())),
            span,
        }
    }

    /// Position-less failure, e.g. from decoding an in-memory value.
    pub fn without_source(error: serde_json::Error) -> Self {
        Self {
            message: error.to_string(),
            line: 0,
            column: 0,
            src: Arc::new(NamedSource::new("<value>", String::new())),
            span: None,
        }
    }
}

/// Byte offset of a 1-based line/column pair, clamped to the text.
fn offset_of(text: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = text
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    Some((line_start + column.saturating_sub(1)).min(text.len()))
}

// ============================================================================
// EDIT ERRORS
// ============================================================================

/// A checked edit that would otherwise have been a silent no-op.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum EditError {
    #[error("Edit error: no node with id {id}")]
    #[diagnostic(code(logic::edit::not_found))]
    NotFound { id: NodeId },

    #[error("Edit error: a {found} cannot replace the {expected} {target}")]
    #[diagnostic(
        code(logic::edit::kind_mismatch),
        help("expressions also accept identifiers and literals; statements also accept declarations and expressions")
    )]
    KindMismatch {
        target: NodeId,
        expected: String,
        found: String,
    },

    #[error("Edit error: {parent} does not accept {child}")]
    #[diagnostic(code(logic::edit::not_accepted))]
    NotAccepted { parent: String, child: String },

    #[error("Edit error: the root node cannot be deleted")]
    #[diagnostic(code(logic::edit::root_removal))]
    RootRemoval,
}

// ============================================================================
// CRATE ERROR
// ============================================================================

#[derive(Error, Diagnostic, Debug)]
pub enum LogicError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Edit(#[from] EditError),

    #[error("Config error: {path}: {message}")]
    #[diagnostic(code(logic::config))]
    Config { path: String, message: String },

    #[error("I/O error: {path}")]
    #[diagnostic(code(logic::io))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Encode error: {0}")]
    #[diagnostic(code(logic::encode))]
    Encode(#[from] serde_json::Error),
}

impl LogicError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = LogicError> = std::result::Result<T, E>;
