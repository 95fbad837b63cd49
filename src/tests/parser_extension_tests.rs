//! Parser tests for type-system extensions, including the
//! at-least-one-modification requirement on every extension kind.

use crate::ast::OperationType;
use crate::ast::TypeSystemExtension;
use crate::tests::utils::as_extension;
use crate::tests::utils::parse_err;
use crate::tests::utils::parse_ok;

// =============================================================================
// Valid extensions
// =============================================================================

#[test]
fn schema_extension_with_directives() {
    let doc = parse_ok("extend schema @preview");
    match as_extension(&doc.definitions[0]) {
        TypeSystemExtension::Schema(ext) => {
            assert_eq!(ext.directives.len(), 1);
            assert!(ext.root_operation_defs.is_empty());
        }
        other => panic!("expected schema extension, got {other:?}"),
    }
}

#[test]
fn schema_extension_with_root_operations() {
    let doc = parse_ok("extend schema { subscription: Subscription }");
    match as_extension(&doc.definitions[0]) {
        TypeSystemExtension::Schema(ext) => {
            assert_eq!(ext.root_operation_defs.len(), 1);
            assert_eq!(
                ext.root_operation_defs[0].operation_type,
                OperationType::Subscription,
            );
        }
        other => panic!("expected schema extension, got {other:?}"),
    }
}

#[test]
fn scalar_extension() {
    let doc = parse_ok("extend scalar DateTime @specifiedBy(url: \"https://example.com\")");
    match as_extension(&doc.definitions[0]) {
        TypeSystemExtension::Scalar(ext) => {
            assert_eq!(ext.name.value, "DateTime");
            assert_eq!(ext.directives.len(), 1);
        }
        other => panic!("expected scalar extension, got {other:?}"),
    }
}

#[test]
fn object_extension_variants() {
    let doc = parse_ok("extend type User implements Auditable");
    match as_extension(&doc.definitions[0]) {
        TypeSystemExtension::Object(ext) => {
            assert_eq!(ext.interfaces.len(), 1);
            assert!(ext.fields.is_empty());
        }
        other => panic!("expected object extension, got {other:?}"),
    }

    let doc = parse_ok("extend type User { nickname: String }");
    match as_extension(&doc.definitions[0]) {
        TypeSystemExtension::Object(ext) => {
            assert_eq!(ext.fields.len(), 1);
            assert_eq!(ext.fields[0].name.value, "nickname");
        }
        other => panic!("expected object extension, got {other:?}"),
    }
}

#[test]
fn interface_extension() {
    let doc = parse_ok("extend interface Node @stable { version: Int }");
    match as_extension(&doc.definitions[0]) {
        TypeSystemExtension::Interface(ext) => {
            assert_eq!(ext.name.value, "Node");
            assert_eq!(ext.directives.len(), 1);
            assert_eq!(ext.fields.len(), 1);
        }
        other => panic!("expected interface extension, got {other:?}"),
    }
}

#[test]
fn union_extension() {
    let doc = parse_ok("extend union SearchResult = Tag");
    match as_extension(&doc.definitions[0]) {
        TypeSystemExtension::Union(ext) => {
            assert_eq!(ext.types.len(), 1);
            assert_eq!(ext.types[0].name.value, "Tag");
        }
        other => panic!("expected union extension, got {other:?}"),
    }
}

#[test]
fn enum_extension() {
    let doc = parse_ok("extend enum Color { TEAL }");
    match as_extension(&doc.definitions[0]) {
        TypeSystemExtension::Enum(ext) => {
            assert_eq!(ext.values.len(), 1);
            assert_eq!(ext.values[0].name.value, "TEAL");
        }
        other => panic!("expected enum extension, got {other:?}"),
    }
}

#[test]
fn input_object_extension() {
    let doc = parse_ok("extend input Point2D { z: Float }");
    match as_extension(&doc.definitions[0]) {
        TypeSystemExtension::InputObject(ext) => {
            assert_eq!(ext.fields.len(), 1);
            assert_eq!(ext.fields[0].name.value, "z");
        }
        other => panic!("expected input object extension, got {other:?}"),
    }
}

// =============================================================================
// Extensions must introduce a modification
// =============================================================================

#[test]
fn extensions_without_modifications_are_rejected() {
    let cases = [
        (
            "extend scalar Foo",
            "Error at 1:1: extend scalar must add at least one directive",
        ),
        (
            "extend schema",
            "Error at 1:1: extend schema must add directives or root operation types",
        ),
        (
            "extend type User",
            "Error at 1:1: extend type must add an implements clause, directives, or fields",
        ),
        (
            "extend interface Node",
            "Error at 1:1: extend interface must add an implements clause, directives, or fields",
        ),
        (
            "extend union SearchResult",
            "Error at 1:1: extend union must add directives or member types",
        ),
        (
            "extend enum Color",
            "Error at 1:1: extend enum must add directives or enum values",
        ),
        (
            "extend input Point2D",
            "Error at 1:1: extend input must add directives or input fields",
        ),
    ];
    for (input, expected) in cases {
        assert_eq!(parse_err(input).to_string(), expected, "input: {input:?}");
    }
}

#[test]
fn unknown_extension_keyword() {
    let err = parse_err("extend foo Bar");
    assert_eq!(err.to_string(), "Error at 1:8: unexpected extension: foo");
}

#[test]
fn descriptions_are_not_allowed_on_extensions() {
    assert!(crate::parse("\"desc\" extend scalar Foo @bar").is_err());
}
