//! Parser tests for type references: named, list, and non-null forms.

use crate::ast::NullableType;
use crate::ast::Type;
use crate::tests::utils::as_operation;
use crate::tests::utils::parse_err;
use crate::tests::utils::parse_ok;

/// Parses `query ($v: <type>) { f }` and returns a clone of the variable's
/// type.
fn parse_type(type_src: &str) -> Type<'static> {
    let input = format!("query ($v: {type_src}) {{ f }}");
    let doc = parse_ok(Box::leak(input.into_boxed_str()));
    let op = as_operation(&doc.definitions[0]);
    op.variable_definitions[0].ty.clone()
}

fn named_value<'a>(ty: &'a Type<'a>) -> &'a str {
    match ty {
        Type::Named(named) => named.name.value.as_ref(),
        other => panic!("expected named type, got {other:?}"),
    }
}

#[test]
fn named_type() {
    assert_eq!(named_value(&parse_type("ID")), "ID");
}

#[test]
fn list_type() {
    match parse_type("[Int]") {
        Type::List(list) => assert_eq!(named_value(&list.item), "Int"),
        other => panic!("expected list type, got {other:?}"),
    }
}

#[test]
fn non_null_named_type() {
    match parse_type("String!") {
        Type::NonNull(non_null) => match &non_null.ty {
            NullableType::Named(named) => assert_eq!(named.name.value, "String"),
            other => panic!("expected named core, got {other:?}"),
        },
        other => panic!("expected non-null type, got {other:?}"),
    }
}

#[test]
fn non_null_list_of_non_null() {
    // [[ID!]]! - outer non-null list, inner plain list, innermost
    // non-null named.
    match parse_type("[[ID!]]!") {
        Type::NonNull(outer) => match &outer.ty {
            NullableType::List(outer_list) => match &outer_list.item {
                Type::List(inner_list) => match &inner_list.item {
                    Type::NonNull(innermost) => match &innermost.ty {
                        NullableType::Named(named) => {
                            assert_eq!(named.name.value, "ID")
                        }
                        other => panic!("expected named core, got {other:?}"),
                    },
                    other => panic!("expected non-null item, got {other:?}"),
                },
                other => panic!("expected inner list, got {other:?}"),
            },
            other => panic!("expected list core, got {other:?}"),
        },
        other => panic!("expected non-null type, got {other:?}"),
    }
}

#[test]
fn non_null_cannot_nest() {
    // A second `!` has nothing to attach to; the parse fails before any
    // doubly-wrapped node can exist.
    assert!(matches!(
        crate::parse("query ($v: ID!!) { f }"),
        Err(crate::Error::Parse(_)),
    ));
}

#[test]
fn type_position_rejects_non_type_tokens() {
    let err = parse_err("query ($v: 5) { f }");
    assert_eq!(
        err.to_string(),
        "Error at 1:12: unexpected token in type: Int",
    );
}

#[test]
fn unclosed_list_type() {
    let err = parse_err("query ($v: [Int) { f }");
    assert_eq!(err.to_string(), "Error at 1:16: expected `]`, got `)`");
}
