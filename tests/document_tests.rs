//! Editing sessions driven through [`Document`]: configuration, the identity
//! cache and edits on library-style roots.

mod common;

use std::sync::Arc;

use logic::syntax::{
    Declaration, Expression, FunctionParameter, Literal, Placeholder, Program, Statement,
    SyntaxNode, SyntaxNodeKind, TopLevelDeclarations, TypeAnnotation,
};
use logic::{Document, EditError, EditorConfig, Movement, NodeId};

use common::{all_ids, greet_function, sample_program, variable};

fn library() -> (TopLevelDeclarations, Declaration) {
    let function = greet_function();
    (TopLevelDeclarations::new(vec![function.clone()]), function)
}

#[cfg(test)]
mod document_tests {
    use super::*;

    #[test]
    fn test_top_level_declarations_take_declarations_only() {
        let (top, _) = library();
        let mut document = Document::new(top);
        let root_id = document.root().id();

        let statement = Statement::expression(Expression::identifier("loose"));
        assert!(!document.accepts_node(root_id, &statement.to_node()));
        assert!(matches!(
            document.try_insert(root_id, &statement.to_node(), 0),
            Err(EditError::NotAccepted { .. })
        ));

        let added = Declaration::variable("limit", None, None);
        assert!(document.accepts_node(root_id, &added.to_node()));
        assert_eq!(document.insert(root_id, &added.to_node(), 1), Movement::Next);

        let SyntaxNode::TopLevelDeclarations(top) = document.root() else {
            panic!("root changed kind");
        };
        assert_eq!(top.declarations.len(), 3);
        assert_eq!(top.declarations.at(1).id(), added.id());
        assert!(top.declarations.last().unwrap().is_placeholder());
    }

    #[test]
    fn test_insert_parameter_focuses_its_empty_name() {
        let (top, function) = library();
        let mut document = Document::new(top);

        let parameter = FunctionParameter::Parameter {
            id: NodeId::new(),
            local_name: logic::Pattern::make_placeholder(),
            annotation: TypeAnnotation::named("Number"),
            default_value: logic::FunctionParameterDefaultValue::make_placeholder(),
            comment: None,
        };
        let FunctionParameter::Parameter { local_name, .. } = &parameter else {
            unreachable!();
        };
        let movement = document
            .try_insert(function.id(), &parameter.to_node(), 1)
            .unwrap();
        assert_eq!(movement, Movement::Node(local_name.id));
        assert_eq!(
            document.parent_of(parameter.id()).map(|parent| parent.id()),
            Some(function.id())
        );
    }

    #[test]
    fn test_cache_is_used_and_rebuilt_after_edits() {
        let program = sample_program();
        let ids = all_ids(&program.to_node());
        let mut document = Document::new(program);

        for id in &ids {
            assert!(document.find(*id).is_some());
        }
        let stats = document.cache_stats();
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.hits, ids.len() as u64 - 1);
        assert_eq!(stats.entries, 1);

        let target = ids[ids.len() / 2];
        assert!(document.delete(target));
        assert!(document.find(target).is_none());
        assert_eq!(document.cache_stats().misses, 2);
    }

    #[test]
    fn test_disabled_cache_still_finds_nodes() {
        let config = EditorConfig {
            cache_capacity: 0,
            ..EditorConfig::default()
        };
        let program = sample_program();
        let ids = all_ids(&program.to_node());
        let mut document = Document::with_config(program, config);

        for id in ids {
            assert!(document.find(id).is_some());
        }
        assert_eq!(document.cache_stats(), Default::default());
    }

    #[test]
    fn test_delete_without_normalization_leaves_an_empty_block() {
        let config = EditorConfig {
            normalize_after_delete: false,
            ..EditorConfig::default()
        };
        let declaration = variable("x", 1.0);
        let program = Program::new(vec![Statement::declaration(declaration.clone())]);
        let mut document = Document::with_config(program, config);

        document.try_delete(declaration.id()).unwrap();
        let SyntaxNode::Program(program) = document.root() else {
            panic!("root changed kind");
        };
        assert!(program.block.is_empty());
    }

    #[test]
    fn test_replace_keeps_the_trailing_placeholder_by_default() {
        let placeholder = Statement::make_placeholder();
        let program = Program::new(vec![placeholder.clone()]);
        let replacement = Statement::expression(Expression::identifier("done"));

        let mut preserving = Document::new(program.clone());
        preserving.try_replace(placeholder.id(), &replacement.to_node()).unwrap();
        let SyntaxNode::Program(kept) = preserving.root() else {
            panic!("root changed kind");
        };
        assert_eq!(kept.block.len(), 2);
        assert!(kept.block.at(1).is_placeholder());

        let config = EditorConfig {
            preserve_ending_placeholder: false,
            ..EditorConfig::default()
        };
        let mut plain = Document::with_config(program, config);
        plain.try_replace(placeholder.id(), &replacement.to_node()).unwrap();
        let SyntaxNode::Program(replaced) = plain.root() else {
            panic!("root changed kind");
        };
        assert_eq!(replaced.block.len(), 1);
        assert_eq!(replaced.block.at(0).id(), replacement.id());
    }

    #[test]
    fn test_line_drag_excludes_roots_and_placeholders() {
        let program = sample_program();
        let root_id = program.id();
        let trailing = program.block.last().unwrap().id();
        let first = program.block.at(0).id();
        let mut document = Document::new(program);

        assert!(!document.accepts_line_drag(root_id));
        assert!(!document.accepts_line_drag(trailing));
        assert!(document.accepts_line_drag(first));
        assert!(!document.accepts_line_drag(NodeId::new()));
    }

    #[test]
    fn test_copy_node_is_detached_and_equivalent() {
        let function = greet_function();
        let mut document = Document::new(TopLevelDeclarations::new(vec![function.clone()]));

        let copy = document.copy_node(function.id(), true).unwrap();
        assert_ne!(copy.id(), function.id());
        assert!(document.find(copy.id()).is_none());

        let SyntaxNode::Declaration(copy) = copy else {
            panic!("copy changed kind");
        };
        assert!(logic::Equivalence::is_equivalent_to(&copy, &function));
    }

    #[test]
    fn test_json_round_trip_through_a_document() {
        let document = Document::new(sample_program());
        let text = document.to_json().unwrap();
        let reloaded = Document::from_json(&text).unwrap();
        assert_eq!(reloaded.root(), document.root());
    }

    #[test]
    fn test_snapshots_survive_a_series_of_edits() {
        let program = sample_program();
        let mut document = Document::new(program.clone());
        let first = document.snapshot();

        let literal = Literal::number(9.0);
        let trailing = program.block.last().unwrap().id();
        let statement = Statement::expression(Expression::literal(literal.clone()));
        assert!(document.replace(trailing, &statement.to_node()));
        let second = document.snapshot();
        assert!(document.delete(literal.id()));

        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(*first, SyntaxNode::Program(program));
        assert!(second.find(literal.id()).is_some());
        assert!(document.find(literal.id()).is_none());
    }
}
