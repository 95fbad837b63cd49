use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::EnumValueDefinition;
use crate::ast::FieldDefinition;
use crate::ast::InputValueDefinition;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::RootOperationTypeDefinition;
use crate::SourcePosition;
use inherent::inherent;

// =========================================================
// TypeSystemExtension enum
// =========================================================

/// A
/// [type-system extension](https://spec.graphql.org/draft/#TypeSystemExtension).
///
/// Each variant mirrors its base definition minus the description, and the
/// parser guarantees every extension introduces at least one modification.
/// Positions are that of the `extend` keyword.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeSystemExtension<'src> {
    Schema(SchemaExtension<'src>),
    Scalar(ScalarTypeExtension<'src>),
    Object(ObjectTypeExtension<'src>),
    Interface(InterfaceTypeExtension<'src>),
    Union(UnionTypeExtension<'src>),
    Enum(EnumTypeExtension<'src>),
    InputObject(InputObjectTypeExtension<'src>),
}

#[inherent]
impl AstNode for TypeSystemExtension<'_> {
    pub fn position(&self) -> SourcePosition {
        match self {
            TypeSystemExtension::Schema(ext) => ext.pos,
            TypeSystemExtension::Scalar(ext) => ext.pos,
            TypeSystemExtension::Object(ext) => ext.pos,
            TypeSystemExtension::Interface(ext) => ext.pos,
            TypeSystemExtension::Union(ext) => ext.pos,
            TypeSystemExtension::Enum(ext) => ext.pos,
            TypeSystemExtension::InputObject(ext) => ext.pos,
        }
    }
}

// =========================================================
// Extension nodes
// =========================================================

/// `extend schema ...` - adds directives or root operation types.
///
/// See [SchemaExtension](https://spec.graphql.org/draft/#SchemaExtension).
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaExtension<'src> {
    pub pos: SourcePosition,
    pub directives: Vec<Directive<'src>>,
    pub root_operation_defs: Vec<RootOperationTypeDefinition<'src>>,
}

/// `extend scalar Name @dir ...` - requires at least one directive (a
/// scalar extension has no other productive body).
///
/// See
/// [ScalarTypeExtension](https://spec.graphql.org/draft/#ScalarTypeExtension).
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarTypeExtension<'src> {
    pub pos: SourcePosition,
    pub name: Name<'src>,
    pub directives: Vec<Directive<'src>>,
}

/// `extend type Name ...` - adds interfaces, directives, or fields.
///
/// See
/// [ObjectTypeExtension](https://spec.graphql.org/draft/#ObjectTypeExtension).
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectTypeExtension<'src> {
    pub pos: SourcePosition,
    pub name: Name<'src>,
    pub interfaces: Vec<NamedType<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub fields: Vec<FieldDefinition<'src>>,
}

/// `extend interface Name ...` - adds interfaces, directives, or fields.
///
/// See
/// [InterfaceTypeExtension](https://spec.graphql.org/draft/#InterfaceTypeExtension).
#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceTypeExtension<'src> {
    pub pos: SourcePosition,
    pub name: Name<'src>,
    pub interfaces: Vec<NamedType<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub fields: Vec<FieldDefinition<'src>>,
}

/// `extend union Name ...` - adds directives or member types.
///
/// See
/// [UnionTypeExtension](https://spec.graphql.org/draft/#UnionTypeExtension).
#[derive(Clone, Debug, PartialEq)]
pub struct UnionTypeExtension<'src> {
    pub pos: SourcePosition,
    pub name: Name<'src>,
    pub directives: Vec<Directive<'src>>,
    pub types: Vec<NamedType<'src>>,
}

/// `extend enum Name ...` - adds directives or enum values.
///
/// See
/// [EnumTypeExtension](https://spec.graphql.org/draft/#EnumTypeExtension).
#[derive(Clone, Debug, PartialEq)]
pub struct EnumTypeExtension<'src> {
    pub pos: SourcePosition,
    pub name: Name<'src>,
    pub directives: Vec<Directive<'src>>,
    pub values: Vec<EnumValueDefinition<'src>>,
}

/// `extend input Name ...` - adds directives or input fields.
///
/// See
/// [InputObjectTypeExtension](https://spec.graphql.org/draft/#InputObjectTypeExtension).
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectTypeExtension<'src> {
    pub pos: SourcePosition,
    pub name: Name<'src>,
    pub directives: Vec<Directive<'src>>,
    pub fields: Vec<InputValueDefinition<'src>>,
}

#[inherent]
impl AstNode for SchemaExtension<'_> {
    pub fn position(&self) -> SourcePosition {
        self.pos
    }
}

#[inherent]
impl AstNode for ScalarTypeExtension<'_> {
    pub fn position(&self) -> SourcePosition {
        self.pos
    }
}

#[inherent]
impl AstNode for ObjectTypeExtension<'_> {
    pub fn position(&self) -> SourcePosition {
        self.pos
    }
}

#[inherent]
impl AstNode for InterfaceTypeExtension<'_> {
    pub fn position(&self) -> SourcePosition {
        self.pos
    }
}

#[inherent]
impl AstNode for UnionTypeExtension<'_> {
    pub fn position(&self) -> SourcePosition {
        self.pos
    }
}

#[inherent]
impl AstNode for EnumTypeExtension<'_> {
    pub fn position(&self) -> SourcePosition {
        self.pos
    }
}

#[inherent]
impl AstNode for InputObjectTypeExtension<'_> {
    pub fn position(&self) -> SourcePosition {
        self.pos
    }
}
