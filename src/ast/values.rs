use crate::ast::AstNode;
use crate::ast::Name;
use crate::SourcePosition;
use inherent::inherent;
use std::borrow::Cow;

// =========================================================
// Value enum
// =========================================================

/// A GraphQL input value.
///
/// Represents every value literal of the
/// [Input Values](https://spec.graphql.org/draft/#Value) grammar, plus
/// variable references.
#[derive(Clone, Debug, PartialEq)]
pub enum Value<'src> {
    Int(IntValue<'src>),
    Float(FloatValue<'src>),
    String(StringValue<'src>),
    Boolean(BooleanValue),
    Null(NullValue),
    Enum(EnumValue<'src>),
    List(ListValue<'src>),
    Object(ObjectValue<'src>),
    Variable(Variable<'src>),
}

#[inherent]
impl AstNode for Value<'_> {
    pub fn position(&self) -> SourcePosition {
        match self {
            Value::Int(v) => v.pos,
            Value::Float(v) => v.pos,
            Value::String(v) => v.pos,
            Value::Boolean(v) => v.pos,
            Value::Null(v) => v.pos,
            Value::Enum(v) => v.pos,
            Value::List(v) => v.pos,
            Value::Object(v) => v.pos,
            Value::Variable(v) => v.pos,
        }
    }
}

// =========================================================
// Scalar value types
// =========================================================

/// A GraphQL [integer value](https://spec.graphql.org/draft/#IntValue).
///
/// `value` is the raw lexeme, sign included, verbatim from the source -
/// no numeric conversion is performed by the parser.
#[derive(Clone, Debug, PartialEq)]
pub struct IntValue<'src> {
    pub pos: SourcePosition,
    pub value: Cow<'src, str>,
}

/// A GraphQL [float value](https://spec.graphql.org/draft/#FloatValue).
///
/// `value` is the raw lexeme, sign and exponent included, verbatim from
/// the source.
#[derive(Clone, Debug, PartialEq)]
pub struct FloatValue<'src> {
    pub pos: SourcePosition,
    pub value: Cow<'src, str>,
}

/// A GraphQL [string value](https://spec.graphql.org/draft/#StringValue).
///
/// `value` holds the decoded content: escapes resolved for `"` strings,
/// indentation normalized for `"""` block strings. `block` records which
/// form appeared in the source.
#[derive(Clone, Debug, PartialEq)]
pub struct StringValue<'src> {
    pub pos: SourcePosition,
    pub value: Cow<'src, str>,
    pub block: bool,
}

/// A GraphQL [boolean value](https://spec.graphql.org/draft/#BooleanValue):
/// `true` or `false`.
#[derive(Clone, Debug, PartialEq)]
pub struct BooleanValue {
    pub pos: SourcePosition,
    pub value: bool,
}

/// The GraphQL [null value](https://spec.graphql.org/draft/#NullValue).
#[derive(Clone, Debug, PartialEq)]
pub struct NullValue {
    pub pos: SourcePosition,
}

/// A GraphQL [enum value](https://spec.graphql.org/draft/#EnumValue): an
/// unquoted name that is not `true`, `false`, or `null`.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue<'src> {
    pub pos: SourcePosition,
    pub value: Cow<'src, str>,
}

// =========================================================
// Composite value types
// =========================================================

/// A GraphQL [list value](https://spec.graphql.org/draft/#ListValue),
/// e.g. `[1, 2, 3]`.
#[derive(Clone, Debug, PartialEq)]
pub struct ListValue<'src> {
    pub pos: SourcePosition,
    pub values: Vec<Value<'src>>,
}

/// A GraphQL [object value](https://spec.graphql.org/draft/#ObjectValue),
/// e.g. `{x: 1, y: 2}`.
///
/// Field order is syntactic and preserved.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectValue<'src> {
    pub pos: SourcePosition,
    pub fields: Vec<ObjectField<'src>>,
}

/// A single `name: value` entry of an
/// [object value](https://spec.graphql.org/draft/#ObjectField).
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectField<'src> {
    pub pos: SourcePosition,
    pub name: Name<'src>,
    pub value: Value<'src>,
}

/// A [variable](https://spec.graphql.org/draft/#Variable) reference,
/// e.g. `$id`. Position is that of the `$`.
#[derive(Clone, Debug, PartialEq)]
pub struct Variable<'src> {
    pub pos: SourcePosition,
    pub name: Name<'src>,
}

#[inherent]
impl AstNode for IntValue<'_> {
    pub fn position(&self) -> SourcePosition {
        self.pos
    }
}

#[inherent]
impl AstNode for FloatValue<'_> {
    pub fn position(&self) -> SourcePosition {
        self.pos
    }
}

#[inherent]
impl AstNode for StringValue<'_> {
    pub fn position(&self) -> SourcePosition {
        self.pos
    }
}

#[inherent]
impl AstNode for BooleanValue {
    pub fn position(&self) -> SourcePosition {
        self.pos
    }
}

#[inherent]
impl AstNode for NullValue {
    pub fn position(&self) -> SourcePosition {
        self.pos
    }
}

#[inherent]
impl AstNode for EnumValue<'_> {
    pub fn position(&self) -> SourcePosition {
        self.pos
    }
}

#[inherent]
impl AstNode for ListValue<'_> {
    pub fn position(&self) -> SourcePosition {
        self.pos
    }
}

#[inherent]
impl AstNode for ObjectValue<'_> {
    pub fn position(&self) -> SourcePosition {
        self.pos
    }
}

#[inherent]
impl AstNode for ObjectField<'_> {
    pub fn position(&self) -> SourcePosition {
        self.pos
    }
}

#[inherent]
impl AstNode for Variable<'_> {
    pub fn position(&self) -> SourcePosition {
        self.pos
    }
}
