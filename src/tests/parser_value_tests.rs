//! Parser tests for value literals in argument position.

use crate::ast::Value;
use crate::tests::utils::as_operation;
use crate::tests::utils::first_field;
use crate::tests::utils::parse_ok;

/// Parses `{ f(x: <value>) }` and returns a clone of the argument value.
fn parse_value(value_src: &str) -> Value<'static> {
    let input = format!("{{ f(x: {value_src}) }}");
    let doc = parse_ok(Box::leak(input.into_boxed_str()));
    let op = as_operation(&doc.definitions[0]);
    first_field(&op.selection_set).arguments[0].value.clone()
}

#[test]
fn int_and_float_values_keep_their_lexemes() {
    match parse_value("-42") {
        Value::Int(int) => assert_eq!(int.value, "-42"),
        other => panic!("expected int, got {other:?}"),
    }
    match parse_value("-1.2345e+3") {
        Value::Float(float) => assert_eq!(float.value, "-1.2345e+3"),
        other => panic!("expected float, got {other:?}"),
    }
}

#[test]
fn string_values() {
    match parse_value(r#""hello \u{1F30D}""#) {
        Value::String(s) => {
            assert_eq!(s.value, "hello \u{1F30D}");
            assert!(!s.block);
        }
        other => panic!("expected string, got {other:?}"),
    }
    match parse_value(r#""""block text""""#) {
        Value::String(s) => {
            assert_eq!(s.value, "block text");
            assert!(s.block);
        }
        other => panic!("expected block string, got {other:?}"),
    }
}

#[test]
fn boolean_and_null_values() {
    assert!(matches!(parse_value("true"), Value::Boolean(b) if b.value));
    assert!(matches!(parse_value("false"), Value::Boolean(b) if !b.value));
    assert!(matches!(parse_value("null"), Value::Null(_)));
}

#[test]
fn enum_values() {
    match parse_value("ACTIVE") {
        Value::Enum(e) => assert_eq!(e.value, "ACTIVE"),
        other => panic!("expected enum value, got {other:?}"),
    }
}

#[test]
fn variable_values() {
    match parse_value("$userId") {
        Value::Variable(var) => assert_eq!(var.name.value, "userId"),
        other => panic!("expected variable, got {other:?}"),
    }
}

#[test]
fn list_values() {
    match parse_value("[1, 2, 3]") {
        Value::List(list) => {
            assert_eq!(list.values.len(), 3);
            assert!(matches!(&list.values[2], Value::Int(int) if int.value == "3"));
        }
        other => panic!("expected list, got {other:?}"),
    }
    assert!(matches!(parse_value("[]"), Value::List(list) if list.values.is_empty()));
}

#[test]
fn nested_list_values() {
    match parse_value("[[1], [2, 3]]") {
        Value::List(outer) => {
            assert_eq!(outer.values.len(), 2);
            assert!(matches!(&outer.values[0], Value::List(inner) if inner.values.len() == 1));
        }
        other => panic!("expected list, got {other:?}"),
    }
}

#[test]
fn object_values_preserve_field_order() {
    match parse_value("{z: 1, a: 2, m: 3}") {
        Value::Object(object) => {
            let names: Vec<_> = object
                .fields
                .iter()
                .map(|f| f.name.value.as_ref())
                .collect();
            assert_eq!(names, ["z", "a", "m"]);
        }
        other => panic!("expected object, got {other:?}"),
    }
    assert!(matches!(parse_value("{}"), Value::Object(object) if object.fields.is_empty()));
}

#[test]
fn deeply_mixed_value() {
    match parse_value(r#"{ids: [1, 2], meta: {tag: RED, note: "x"}}"#) {
        Value::Object(object) => {
            assert_eq!(object.fields.len(), 2);
            assert!(matches!(&object.fields[0].value, Value::List(list) if list.values.len() == 2));
            match &object.fields[1].value {
                Value::Object(meta) => {
                    assert!(matches!(&meta.fields[0].value, Value::Enum(e) if e.value == "RED"));
                    assert!(
                        matches!(&meta.fields[1].value, Value::String(s) if s.value == "x")
                    );
                }
                other => panic!("expected nested object, got {other:?}"),
            }
        }
        other => panic!("expected object, got {other:?}"),
    }
}

#[test]
fn surrogate_pair_and_braced_escape_are_equivalent() {
    let fixed = parse_value(r#""\uD83D\uDE00""#);
    let braced = parse_value(r#""\u{1F600}""#);
    match (fixed, braced) {
        (Value::String(a), Value::String(b)) => {
            assert_eq!(a.value, b.value);
            assert_eq!(a.value, "\u{1F600}");
        }
        other => panic!("expected strings, got {other:?}"),
    }
}
