//! Parser tests for type-system definitions: schema, scalar, object,
//! interface, union, enum, input object, and directive definitions,
//! including descriptions.

use crate::ast::OperationType;
use crate::ast::Type;
use crate::ast::TypeSystemDefinition;
use crate::ast::Value;
use crate::tests::utils::as_type_system;
use crate::tests::utils::parse_ok;

#[test]
fn schema_definition() {
    let doc = parse_ok("schema { query: Query mutation: Mutation }");
    match as_type_system(&doc.definitions[0]) {
        TypeSystemDefinition::Schema(schema) => {
            assert!(schema.description.is_none());
            assert_eq!(schema.root_operation_defs.len(), 2);
            assert_eq!(
                schema.root_operation_defs[0].operation_type,
                OperationType::Query,
            );
            assert_eq!(schema.root_operation_defs[0].ty.name.value, "Query");
            assert_eq!(
                schema.root_operation_defs[1].operation_type,
                OperationType::Mutation,
            );
        }
        other => panic!("expected schema definition, got {other:?}"),
    }
}

#[test]
fn schema_definition_with_directives_and_description() {
    let doc = parse_ok(r#""The schema." schema @preview { query: Query }"#);
    match as_type_system(&doc.definitions[0]) {
        TypeSystemDefinition::Schema(schema) => {
            assert_eq!(schema.description.as_ref().unwrap().value, "The schema.");
            assert_eq!(schema.directives.len(), 1);
            assert_eq!(schema.directives[0].name.value, "preview");
        }
        other => panic!("expected schema definition, got {other:?}"),
    }
}

#[test]
fn scalar_definition_with_block_string_description() {
    let input = "\"\"\"\n    A scalar.\n\"\"\"\nscalar DateTime @specifiedBy(url: \"https://example.com/datetime\")";
    let doc = parse_ok(input);
    match as_type_system(&doc.definitions[0]) {
        TypeSystemDefinition::Scalar(scalar) => {
            let description = scalar.description.as_ref().unwrap();
            assert_eq!(description.value, "A scalar.");
            assert!(description.block);
            assert_eq!(scalar.name.value, "DateTime");
            assert_eq!(scalar.directives.len(), 1);
            assert_eq!(scalar.directives[0].name.value, "specifiedBy");
            match &scalar.directives[0].arguments[0].value {
                Value::String(url) => {
                    assert_eq!(url.value, "https://example.com/datetime");
                    assert!(!url.block);
                }
                other => panic!("expected string argument, got {other:?}"),
            }
        }
        other => panic!("expected scalar definition, got {other:?}"),
    }
}

#[test]
fn object_type_definition() {
    let doc = parse_ok(
        "type User implements Node & Timestamped @entity { id: ID! name: String }",
    );
    match as_type_system(&doc.definitions[0]) {
        TypeSystemDefinition::Object(object) => {
            assert_eq!(object.name.value, "User");
            let interfaces: Vec<_> = object
                .interfaces
                .iter()
                .map(|i| i.name.value.as_ref())
                .collect();
            assert_eq!(interfaces, ["Node", "Timestamped"]);
            assert_eq!(object.directives.len(), 1);
            assert_eq!(object.fields.len(), 2);
            assert_eq!(object.fields[0].name.value, "id");
            assert!(matches!(object.fields[0].ty, Type::NonNull(_)));
        }
        other => panic!("expected object definition, got {other:?}"),
    }
}

#[test]
fn implements_accepts_leading_ampersand() {
    let doc = parse_ok("type User implements & Node & Timestamped { id: ID }");
    match as_type_system(&doc.definitions[0]) {
        TypeSystemDefinition::Object(object) => {
            assert_eq!(object.interfaces.len(), 2);
        }
        other => panic!("expected object definition, got {other:?}"),
    }
}

#[test]
fn object_type_without_fields() {
    let doc = parse_ok("type Empty @placeholder");
    match as_type_system(&doc.definitions[0]) {
        TypeSystemDefinition::Object(object) => {
            assert!(object.fields.is_empty());
            assert!(object.interfaces.is_empty());
        }
        other => panic!("expected object definition, got {other:?}"),
    }
}

#[test]
fn field_definitions_with_arguments_and_defaults() {
    let doc = parse_ok(
        r#"type Query { users(first: Int = 10, after: String): [User!]! @paginated }"#,
    );
    match as_type_system(&doc.definitions[0]) {
        TypeSystemDefinition::Object(object) => {
            let field = &object.fields[0];
            assert_eq!(field.name.value, "users");
            assert_eq!(field.arguments.len(), 2);
            assert_eq!(field.arguments[0].name.value, "first");
            match field.arguments[0].default_value.as_ref().unwrap() {
                Value::Int(int) => assert_eq!(int.value, "10"),
                other => panic!("expected int default, got {other:?}"),
            }
            assert!(field.arguments[1].default_value.is_none());
            assert_eq!(field.directives.len(), 1);
        }
        other => panic!("expected object definition, got {other:?}"),
    }
}

#[test]
fn field_and_argument_descriptions() {
    let doc = parse_ok(
        r#"type Query { "The user." user("Which user." id: ID): User }"#,
    );
    match as_type_system(&doc.definitions[0]) {
        TypeSystemDefinition::Object(object) => {
            let field = &object.fields[0];
            assert_eq!(field.description.as_ref().unwrap().value, "The user.");
            assert_eq!(
                field.arguments[0].description.as_ref().unwrap().value,
                "Which user.",
            );
        }
        other => panic!("expected object definition, got {other:?}"),
    }
}

#[test]
fn interface_type_definition() {
    let doc = parse_ok("interface Node implements Identifiable { id: ID! }");
    match as_type_system(&doc.definitions[0]) {
        TypeSystemDefinition::Interface(interface) => {
            assert_eq!(interface.name.value, "Node");
            assert_eq!(interface.interfaces.len(), 1);
            assert_eq!(interface.fields.len(), 1);
        }
        other => panic!("expected interface definition, got {other:?}"),
    }
}

#[test]
fn union_type_definition() {
    let doc = parse_ok("union SearchResult @internal = User | Post | Comment");
    match as_type_system(&doc.definitions[0]) {
        TypeSystemDefinition::Union(union) => {
            assert_eq!(union.name.value, "SearchResult");
            assert_eq!(union.directives.len(), 1);
            let members: Vec<_> =
                union.types.iter().map(|t| t.name.value.as_ref()).collect();
            assert_eq!(members, ["User", "Post", "Comment"]);
        }
        other => panic!("expected union definition, got {other:?}"),
    }
}

#[test]
fn union_accepts_leading_pipe() {
    let doc = parse_ok("union Pet =\n  | Cat\n  | Dog");
    match as_type_system(&doc.definitions[0]) {
        TypeSystemDefinition::Union(union) => {
            assert_eq!(union.types.len(), 2);
        }
        other => panic!("expected union definition, got {other:?}"),
    }
}

#[test]
fn union_without_members() {
    let doc = parse_ok("union Undecided @tbd");
    match as_type_system(&doc.definitions[0]) {
        TypeSystemDefinition::Union(union) => assert!(union.types.is_empty()),
        other => panic!("expected union definition, got {other:?}"),
    }
}

#[test]
fn enum_type_definition() {
    let doc = parse_ok(
        r#"enum Color { "Warm." RED GREEN @deprecated(reason: "use TEAL") BLUE }"#,
    );
    match as_type_system(&doc.definitions[0]) {
        TypeSystemDefinition::Enum(enum_def) => {
            assert_eq!(enum_def.name.value, "Color");
            assert_eq!(enum_def.values.len(), 3);
            assert_eq!(
                enum_def.values[0].description.as_ref().unwrap().value,
                "Warm.",
            );
            assert_eq!(enum_def.values[0].name.value, "RED");
            assert_eq!(enum_def.values[1].directives.len(), 1);
        }
        other => panic!("expected enum definition, got {other:?}"),
    }
}

#[test]
fn input_object_type_definition() {
    let doc = parse_ok("input Point2D { x: Float = 0.0 y: Float @constrained }");
    match as_type_system(&doc.definitions[0]) {
        TypeSystemDefinition::InputObject(input) => {
            assert_eq!(input.name.value, "Point2D");
            assert_eq!(input.fields.len(), 2);
            assert!(input.fields[0].default_value.is_some());
            assert_eq!(input.fields[1].directives.len(), 1);
        }
        other => panic!("expected input object definition, got {other:?}"),
    }
}

#[test]
fn directive_definition() {
    let doc = parse_ok(
        "directive @limit(max: Int = 100) repeatable on FIELD_DEFINITION | OBJECT",
    );
    match as_type_system(&doc.definitions[0]) {
        TypeSystemDefinition::Directive(directive) => {
            assert_eq!(directive.name.value, "limit");
            assert_eq!(directive.arguments.len(), 1);
            assert!(directive.repeatable);
            let locations: Vec<_> =
                directive.locations.iter().map(|l| l.value.as_ref()).collect();
            assert_eq!(locations, ["FIELD_DEFINITION", "OBJECT"]);
        }
        other => panic!("expected directive definition, got {other:?}"),
    }
}

#[test]
fn directive_definition_without_repeatable() {
    let doc = parse_ok("directive @internal on OBJECT");
    match as_type_system(&doc.definitions[0]) {
        TypeSystemDefinition::Directive(directive) => {
            assert!(!directive.repeatable);
            assert_eq!(directive.locations.len(), 1);
        }
        other => panic!("expected directive definition, got {other:?}"),
    }
}

#[test]
fn directive_locations_accept_leading_pipe() {
    let doc = parse_ok("directive @meta on\n  | FIELD\n  | OBJECT");
    match as_type_system(&doc.definitions[0]) {
        TypeSystemDefinition::Directive(directive) => {
            assert_eq!(directive.locations.len(), 2);
        }
        other => panic!("expected directive definition, got {other:?}"),
    }
}

#[test]
fn descriptions_on_every_definition_kind() {
    let doc = parse_ok(concat!(
        r#""A" scalar S "#,
        r#""B" type T { f: S } "#,
        r#""C" interface I { f: S } "#,
        r#""D" union U = T "#,
        r#""E" enum N { X } "#,
        r#""F" input P { f: S } "#,
        r#""G" directive @d on FIELD"#,
    ));
    assert_eq!(doc.definitions.len(), 7);
    for def in &doc.definitions {
        let description = match as_type_system(def) {
            TypeSystemDefinition::Scalar(d) => d.description.as_ref(),
            TypeSystemDefinition::Object(d) => d.description.as_ref(),
            TypeSystemDefinition::Interface(d) => d.description.as_ref(),
            TypeSystemDefinition::Union(d) => d.description.as_ref(),
            TypeSystemDefinition::Enum(d) => d.description.as_ref(),
            TypeSystemDefinition::InputObject(d) => d.description.as_ref(),
            TypeSystemDefinition::Directive(d) => d.description.as_ref(),
            TypeSystemDefinition::Schema(d) => d.description.as_ref(),
        };
        assert!(description.is_some(), "definition without description: {def:?}");
    }
}
