//! JSON wire format: every node kind survives encoding, discriminators and
//! field names are the documented ones, and bad input is reported with a
//! position.

mod common;

use logic::codec;
use logic::syntax::{
    Equivalence, FunctionParameter, FunctionParameterDefaultValue, Literal, Placeholder, Program,
    Statement, SyntaxNode, SyntaxNodeKind, TypeAnnotation,
};

use common::{all_nodes, greet_function, sample_program};

#[cfg(test)]
mod codec_tests {
    use super::*;

    #[test]
    fn test_every_node_in_the_sample_round_trips() {
        let root = sample_program().to_node();
        for node in all_nodes(&root) {
            let text = codec::encode(&node).unwrap();
            let decoded = codec::decode(&text).unwrap();
            assert_eq!(decoded, node, "{}", node.kind_name());
        }
    }

    #[test]
    fn test_pretty_and_compact_encodings_decode_alike() {
        let root = sample_program().to_node();
        let compact = codec::decode(&codec::encode(&root).unwrap()).unwrap();
        let pretty = codec::decode(&codec::encode_pretty(&root).unwrap()).unwrap();
        assert_eq!(compact, pretty);
    }

    #[test]
    fn test_kind_discriminators() {
        let kinds: Vec<_> = all_nodes(&sample_program().to_node())
            .iter()
            .map(|node| codec::to_value(node).unwrap()["type"].as_str().unwrap().to_string())
            .collect();
        for expected in [
            "program",
            "statement",
            "declaration",
            "pattern",
            "expression",
            "identifier",
            "literal",
            "typeAnnotation",
            "functionParameter",
            "functionParameterDefaultValue",
            "genericParameter",
            "enumerationCase",
            "functionCallArgument",
            "comment",
        ] {
            assert!(kinds.iter().any(|kind| kind == expected), "no {expected} in the sample");
        }
    }

    #[test]
    fn test_parameter_field_names_are_camel_case() {
        let parameter = FunctionParameter::new("name", TypeAnnotation::named("String"));
        let value = codec::to_value(&parameter.to_node()).unwrap();

        assert_eq!(value["type"], "functionParameter");
        assert_eq!(value["data"]["type"], "parameter");
        let data = &value["data"]["data"];
        assert_eq!(data["localName"]["name"], "name");
        assert_eq!(data["annotation"]["type"], "typeIdentifier");
        assert_eq!(data["defaultValue"]["type"], "none");
    }

    #[test]
    fn test_default_value_case_carries_its_expression() {
        let function = greet_function();
        let value = codec::to_value(&function).unwrap();
        let parameter = &value["data"]["parameters"][0]["data"];
        assert_eq!(parameter["defaultValue"]["type"], "value");
        assert_eq!(
            parameter["defaultValue"]["data"]["expression"]["type"],
            "literalExpression"
        );
        assert_eq!(value["data"]["comment"]["string"], "Says hello.");
    }

    #[test]
    fn test_decode_kind_reads_a_bare_program() {
        let program = Program::new(vec![Statement::make_placeholder()]);
        let text = codec::encode(&program).unwrap();
        let decoded: Program = codec::decode_kind(&text).unwrap();
        assert_eq!(decoded, program);
    }

    #[test]
    fn test_default_value_decodes_from_its_own_encoding() {
        let none = FunctionParameterDefaultValue::None {
            id: logic::NodeId::new(),
        };
        let value = codec::to_value(&none.to_node()).unwrap();
        let decoded = codec::from_value(value).unwrap();
        assert_eq!(decoded, SyntaxNode::FunctionParameterDefaultValue(none));
    }

    #[test]
    fn test_invalid_json_reports_line_and_column() {
        let text = "{\n  \"type\": \"program\",\n  \"data\": [\n}";
        let error = codec::decode_named("broken.json", text).unwrap_err();
        assert_eq!(error.line, 4);
        assert!(error.column >= 1);
        assert!(error.message.contains("line 4"));
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let text = r#"{"type": "statement", "data": {"type": "whileLoop", "data": {}}}"#;
        let error = codec::decode(text).unwrap_err();
        assert!(error.message.contains("whileLoop"));
    }

    #[test]
    fn test_from_value_errors_have_no_position() {
        let error = codec::from_value(serde_json::json!({"type": 7})).unwrap_err();
        assert_eq!((error.line, error.column), (0, 0));
    }

    #[test]
    fn test_infinite_numbers_round_trip() {
        for value in [f64::INFINITY, f64::NEG_INFINITY] {
            let literal = Literal::number(value).to_node();
            let decoded = codec::decode(&codec::encode(&literal).unwrap()).unwrap();
            assert_eq!(decoded, literal);
        }
        let encoded = codec::to_value(&Literal::number(f64::NEG_INFINITY).to_node()).unwrap();
        assert_eq!(encoded["data"]["data"]["value"], "-Infinity");
    }

    #[test]
    fn test_nan_is_written_as_a_string_and_read_back() {
        let literal = Literal::number(f64::NAN);
        let encoded = codec::to_value(&literal.to_node()).unwrap();
        assert_eq!(encoded["data"]["data"]["value"], "NaN");

        let decoded = codec::from_value(encoded).unwrap();
        let SyntaxNode::Literal(decoded) = decoded else {
            panic!("expected a literal");
        };
        assert_eq!(decoded.id(), literal.id());
        assert!(decoded.is_equivalent_to(&literal));
    }

    #[test]
    fn test_unknown_number_text_is_rejected() {
        let id = logic::NodeId::new();
        let text = format!(
            r#"{{"type": "literal", "data": {{"type": "number", "data": {{"id": "{id}", "value": "lots"}}}}}}"#
        );
        assert!(codec::decode(&text).is_err());
    }
}
