//! # Shared fixtures for the integration tests
//!
//! Builds a small but representative tree that touches every node kind.

#![allow(dead_code)]

use logic::syntax::{
    Declaration, EnumerationCase, Expression, FunctionCallArgument, FunctionParameter,
    FunctionParameterDefaultValue, GenericParameter, Literal, Pattern, Placeholder, Program, Statement,
    SyntaxNode, SyntaxNodeKind, TypeAnnotation,
};
use logic::{NodeId, TraversalConfig};

pub fn variable(name: &str, value: f64) -> Declaration {
    Declaration::variable(name, None, Some(Expression::literal(Literal::number(value))))
}

pub fn greet_function() -> Declaration {
    let mut parameter = FunctionParameter::new("name", TypeAnnotation::named("String"));
    if let FunctionParameter::Parameter { default_value, .. } = &mut parameter {
        *default_value = FunctionParameterDefaultValue::value(Expression::literal(Literal::string("world")));
    }
    let call = Expression::call(
        Expression::identifier("print"),
        vec![FunctionCallArgument::new(None, Expression::identifier("name"))],
    );
    let mut function = Declaration::function(
        "greet",
        TypeAnnotation::named("Void"),
        vec![parameter],
        vec![Statement::expression(call)],
    )
    .with_comment("Says hello.");
    if let Declaration::Function {
        generic_parameters, ..
    } = &mut function
    {
        *generic_parameters = generic_parameters.appending(GenericParameter::new("T"));
    }
    function
}

pub fn color_enumeration() -> Declaration {
    Declaration::enumeration(
        "Color",
        vec![
            EnumerationCase::new("red"),
            EnumerationCase::with_associated_values(
                "custom",
                vec![TypeAnnotation::generic("Array", vec![TypeAnnotation::named("Number")])],
            ),
        ],
    )
}

pub fn sample_program() -> Program {
    let record = Declaration::record(
        "Point",
        vec![
            Declaration::variable("x", Some(TypeAnnotation::named("Number")), None),
            Declaration::variable("y", Some(TypeAnnotation::named("Number")), None),
        ],
    );
    let namespace = Declaration::namespace("Colors", vec![variable("opacity", 0.5)]);
    let branch = Statement::branch(
        Expression::literal(Literal::boolean(true)),
        vec![Statement::expression(Expression::assignment(
            Expression::identifier("count"),
            Expression::literal(Literal::number(2.0)),
        ))],
    );
    let for_in = Statement::for_in(
        Pattern::new("item"),
        Expression::literal(Literal::array(vec![
            Expression::literal(Literal::color("#ff0000")),
            Expression::literal(Literal::none()),
        ])),
        vec![Statement::return_value(Expression::member(Expression::identifier("item"), "count"))],
    );
    let callback = Declaration::variable(
        "callback",
        Some(TypeAnnotation::function(
            TypeAnnotation::named("Void"),
            vec![TypeAnnotation::named("Number")],
        )),
        None,
    );

    Program::new(vec![
        Statement::declaration(Declaration::import("Prelude")),
        Statement::declaration(variable("x", 1.0)),
        Statement::declaration(greet_function()),
        Statement::declaration(color_enumeration()),
        Statement::declaration(record),
        Statement::declaration(namespace),
        Statement::declaration(callback),
        branch,
        for_in,
        Statement::make_placeholder(),
    ])
}

/// Every node of the tree in pre-order.
pub fn all_nodes(root: &SyntaxNode) -> Vec<SyntaxNode> {
    let mut nodes = Vec::new();
    root.for_each_descendant(&mut TraversalConfig::pre_order(), |node, _| {
        nodes.push(node.clone());
    });
    nodes
}

pub fn all_ids(root: &SyntaxNode) -> Vec<NodeId> {
    all_nodes(root).iter().map(SyntaxNodeKind::id).collect()
}
