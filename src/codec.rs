//! `{type, data}` JSON encoding of syntax trees.
//!
//! Ids are written as UUID strings, lists as plain arrays, and absent
//! optional fields are left out rather than written as `null`. Decoding
//! preserves ids, so `decode(encode(node))` equals `node`.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::{DecodeError, LogicError};
use crate::syntax::SyntaxNode;

pub fn encode<T: Serialize>(node: &T) -> Result<String, LogicError> {
    Ok(serde_json::to_string(node)?)
}

pub fn encode_pretty<T: Serialize>(node: &T) -> Result<String, LogicError> {
    Ok(serde_json::to_string_pretty(node)?)
}

/// Decodes a type-erased node.
pub fn decode(text: &str) -> Result<SyntaxNode, DecodeError> {
    decode_named("<input>", text)
}

/// Like [`decode`], naming the source in diagnostics.
pub fn decode_named(name: &str, text: &str) -> Result<SyntaxNode, DecodeError> {
    decode_kind_named(name, text)
}

/// Decodes a specific node kind, e.g. a bare `Program`.
pub fn decode_kind<T: DeserializeOwned>(text: &str) -> Result<T, DecodeError> {
    decode_kind_named("<input>", text)
}

fn decode_kind_named<T: DeserializeOwned>(name: &str, text: &str) -> Result<T, DecodeError> {
    serde_json::from_str(text).map_err(|error| DecodeError::from_json(error, name, text))
}

pub fn to_value<T: Serialize>(node: &T) -> Result<serde_json::Value, LogicError> {
    Ok(serde_json::to_value(node)?)
}

pub fn from_value(value: serde_json::Value) -> Result<SyntaxNode, DecodeError> {
    serde_json::from_value(value).map_err(DecodeError::without_source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{Declaration, Literal, Pattern, SyntaxNodeKind};

    #[test]
    fn absent_optionals_are_omitted() {
        let variable = Declaration::variable("x", None, None);
        let value = to_value(&variable).unwrap();
        let data = value["data"].as_object().unwrap();
        assert!(data.contains_key("name"));
        assert!(!data.contains_key("annotation"));
        assert!(!data.contains_key("comment"));
    }

    #[test]
    fn unknown_discriminators_are_decode_errors() {
        let error = decode(r#"{"type": "spaceship", "data": {}}"#).unwrap_err();
        assert!(error.message.contains("spaceship"));
    }

    #[test]
    fn missing_fields_are_decode_errors() {
        let error = decode(r#"{"type": "pattern", "data": {"name": "x"}}"#).unwrap_err();
        assert!(error.message.contains("id"));
    }

    #[test]
    fn ids_are_uuid_strings() {
        let pattern = Pattern::new("x");
        let value = to_value(&pattern.to_node()).unwrap();
        assert_eq!(value["data"]["id"], pattern.id.to_string());
    }

    #[test]
    fn numbers_keep_their_value() {
        let node = Literal::number(1.5).to_node();
        let back = decode(&encode(&node).unwrap()).unwrap();
        assert_eq!(back, node);
    }
}
