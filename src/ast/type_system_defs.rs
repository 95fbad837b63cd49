use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::OperationType;
use crate::ast::StringValue;
use crate::ast::Type;
use crate::ast::Value;
use crate::SourcePosition;
use inherent::inherent;

// =========================================================
// TypeSystemDefinition enum
// =========================================================

/// A
/// [type-system definition](https://spec.graphql.org/draft/#TypeSystemDefinition):
/// the schema, a type, or a directive.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeSystemDefinition<'src> {
    Schema(SchemaDefinition<'src>),
    Scalar(ScalarTypeDefinition<'src>),
    Object(ObjectTypeDefinition<'src>),
    Interface(InterfaceTypeDefinition<'src>),
    Union(UnionTypeDefinition<'src>),
    Enum(EnumTypeDefinition<'src>),
    InputObject(InputObjectTypeDefinition<'src>),
    Directive(DirectiveDefinition<'src>),
}

#[inherent]
impl AstNode for TypeSystemDefinition<'_> {
    pub fn position(&self) -> SourcePosition {
        match self {
            TypeSystemDefinition::Schema(def) => def.pos,
            TypeSystemDefinition::Scalar(def) => def.pos,
            TypeSystemDefinition::Object(def) => def.pos,
            TypeSystemDefinition::Interface(def) => def.pos,
            TypeSystemDefinition::Union(def) => def.pos,
            TypeSystemDefinition::Enum(def) => def.pos,
            TypeSystemDefinition::InputObject(def) => def.pos,
            TypeSystemDefinition::Directive(def) => def.pos,
        }
    }
}

// =========================================================
// Schema definition
// =========================================================

/// A
/// [schema definition](https://spec.graphql.org/draft/#SchemaDefinition):
/// `schema { query: Query ... }`.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaDefinition<'src> {
    pub pos: SourcePosition,
    pub description: Option<StringValue<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub root_operation_defs: Vec<RootOperationTypeDefinition<'src>>,
}

/// One `operationType: NamedType` entry of a schema definition or schema
/// extension.
///
/// See
/// [RootOperationTypeDefinition](https://spec.graphql.org/draft/#RootOperationTypeDefinition).
#[derive(Clone, Debug, PartialEq)]
pub struct RootOperationTypeDefinition<'src> {
    pub pos: SourcePosition,
    pub operation_type: OperationType,
    pub ty: NamedType<'src>,
}

// =========================================================
// Type definitions
// =========================================================

/// A
/// [scalar type definition](https://spec.graphql.org/draft/#ScalarTypeDefinition),
/// e.g. `scalar DateTime @specifiedBy(url: "...")`.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarTypeDefinition<'src> {
    pub pos: SourcePosition,
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub directives: Vec<Directive<'src>>,
}

/// An
/// [object type definition](https://spec.graphql.org/draft/#ObjectTypeDefinition),
/// e.g. `type User implements Node { id: ID! }`.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectTypeDefinition<'src> {
    pub pos: SourcePosition,
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub interfaces: Vec<NamedType<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub fields: Vec<FieldDefinition<'src>>,
}

/// An
/// [interface type definition](https://spec.graphql.org/draft/#InterfaceTypeDefinition).
/// Same shape as an object type definition.
#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceTypeDefinition<'src> {
    pub pos: SourcePosition,
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub interfaces: Vec<NamedType<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub fields: Vec<FieldDefinition<'src>>,
}

/// A
/// [union type definition](https://spec.graphql.org/draft/#UnionTypeDefinition),
/// e.g. `union Pet = Cat | Dog`. An empty `types` list means the `=`
/// clause was absent; when present it holds at least one member.
#[derive(Clone, Debug, PartialEq)]
pub struct UnionTypeDefinition<'src> {
    pub pos: SourcePosition,
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub directives: Vec<Directive<'src>>,
    pub types: Vec<NamedType<'src>>,
}

/// An
/// [enum type definition](https://spec.graphql.org/draft/#EnumTypeDefinition),
/// e.g. `enum Color { RED GREEN }`.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumTypeDefinition<'src> {
    pub pos: SourcePosition,
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub directives: Vec<Directive<'src>>,
    pub values: Vec<EnumValueDefinition<'src>>,
}

/// One value of an enum type definition. The name may not be `true`,
/// `false`, or `null`.
///
/// See
/// [EnumValueDefinition](https://spec.graphql.org/draft/#EnumValueDefinition).
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValueDefinition<'src> {
    pub pos: SourcePosition,
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub directives: Vec<Directive<'src>>,
}

/// An
/// [input object type definition](https://spec.graphql.org/draft/#InputObjectTypeDefinition),
/// e.g. `input Point { x: Int y: Int }`.
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectTypeDefinition<'src> {
    pub pos: SourcePosition,
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub directives: Vec<Directive<'src>>,
    pub fields: Vec<InputValueDefinition<'src>>,
}

// =========================================================
// Field and input value definitions
// =========================================================

/// A
/// [field definition](https://spec.graphql.org/draft/#FieldDefinition)
/// within an object or interface type, e.g.
/// `friends(first: Int): [User!]`.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDefinition<'src> {
    pub pos: SourcePosition,
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub arguments: Vec<InputValueDefinition<'src>>,
    pub ty: Type<'src>,
    pub directives: Vec<Directive<'src>>,
}

/// An
/// [input value definition](https://spec.graphql.org/draft/#InputValueDefinition)
/// - an argument definition or an input object field, e.g.
/// `first: Int = 10`.
#[derive(Clone, Debug, PartialEq)]
pub struct InputValueDefinition<'src> {
    pub pos: SourcePosition,
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub ty: Type<'src>,
    pub default_value: Option<Value<'src>>,
    pub directives: Vec<Directive<'src>>,
}

// =========================================================
// Directive definition
// =========================================================

/// A
/// [directive definition](https://spec.graphql.org/draft/#DirectiveDefinition),
/// e.g. `directive @skip(if: Boolean!) on FIELD | FRAGMENT_SPREAD`.
///
/// Location names are kept as plain [`Name`]s; checking them against the
/// known executable/type-system locations is validation, not parsing.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveDefinition<'src> {
    pub pos: SourcePosition,
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub arguments: Vec<InputValueDefinition<'src>>,
    pub repeatable: bool,
    pub locations: Vec<Name<'src>>,
}

#[inherent]
impl AstNode for SchemaDefinition<'_> {
    pub fn position(&self) -> SourcePosition {
        self.pos
    }
}

#[inherent]
impl AstNode for RootOperationTypeDefinition<'_> {
    pub fn position(&self) -> SourcePosition {
        self.pos
    }
}

#[inherent]
impl AstNode for ScalarTypeDefinition<'_> {
    pub fn position(&self) -> SourcePosition {
        self.pos
    }
}

#[inherent]
impl AstNode for ObjectTypeDefinition<'_> {
    pub fn position(&self) -> SourcePosition {
        self.pos
    }
}

#[inherent]
impl AstNode for InterfaceTypeDefinition<'_> {
    pub fn position(&self) -> SourcePosition {
        self.pos
    }
}

#[inherent]
impl AstNode for UnionTypeDefinition<'_> {
    pub fn position(&self) -> SourcePosition {
        self.pos
    }
}

#[inherent]
impl AstNode for EnumTypeDefinition<'_> {
    pub fn position(&self) -> SourcePosition {
        self.pos
    }
}

#[inherent]
impl AstNode for EnumValueDefinition<'_> {
    pub fn position(&self) -> SourcePosition {
        self.pos
    }
}

#[inherent]
impl AstNode for InputObjectTypeDefinition<'_> {
    pub fn position(&self) -> SourcePosition {
        self.pos
    }
}

#[inherent]
impl AstNode for FieldDefinition<'_> {
    pub fn position(&self) -> SourcePosition {
        self.pos
    }
}

#[inherent]
impl AstNode for InputValueDefinition<'_> {
    pub fn position(&self) -> SourcePosition {
        self.pos
    }
}

#[inherent]
impl AstNode for DirectiveDefinition<'_> {
    pub fn position(&self) -> SourcePosition {
        self.pos
    }
}
