use crate::ast::AstNode;
use crate::ast::Name;
use crate::SourcePosition;
use inherent::inherent;

/// A reference to a [type](https://spec.graphql.org/draft/#Type) in a
/// variable definition, field definition, or input value definition.
#[derive(Clone, Debug, PartialEq)]
pub enum Type<'src> {
    Named(NamedType<'src>),
    List(Box<ListType<'src>>),
    NonNull(NonNullType<'src>),
}

/// The nullable core of a type reference: a named type or a list type.
///
/// [`NonNullType`] wraps this instead of [`Type`], so a non-null type can
/// never wrap another non-null type - the invariant holds by construction.
#[derive(Clone, Debug, PartialEq)]
pub enum NullableType<'src> {
    Named(NamedType<'src>),
    List(Box<ListType<'src>>),
}

/// A [named type](https://spec.graphql.org/draft/#NamedType), e.g. `User`
/// or `String`.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedType<'src> {
    pub pos: SourcePosition,
    pub name: Name<'src>,
}

/// A [list type](https://spec.graphql.org/draft/#ListType), e.g.
/// `[String]`. Position is that of the `[`.
#[derive(Clone, Debug, PartialEq)]
pub struct ListType<'src> {
    pub pos: SourcePosition,
    pub item: Type<'src>,
}

/// A [non-null type](https://spec.graphql.org/draft/#NonNullType), e.g.
/// `String!`. Position is that of the `!`.
#[derive(Clone, Debug, PartialEq)]
pub struct NonNullType<'src> {
    pub pos: SourcePosition,
    pub ty: NullableType<'src>,
}

impl<'src> From<NullableType<'src>> for Type<'src> {
    fn from(ty: NullableType<'src>) -> Self {
        match ty {
            NullableType::Named(named) => Type::Named(named),
            NullableType::List(list) => Type::List(list),
        }
    }
}

#[inherent]
impl AstNode for Type<'_> {
    pub fn position(&self) -> SourcePosition {
        match self {
            Type::Named(ty) => ty.pos,
            Type::List(ty) => ty.pos,
            Type::NonNull(ty) => ty.pos,
        }
    }
}

#[inherent]
impl AstNode for NullableType<'_> {
    pub fn position(&self) -> SourcePosition {
        match self {
            NullableType::Named(ty) => ty.pos,
            NullableType::List(ty) => ty.pos,
        }
    }
}

#[inherent]
impl AstNode for NamedType<'_> {
    pub fn position(&self) -> SourcePosition {
        self.pos
    }
}

#[inherent]
impl AstNode for ListType<'_> {
    pub fn position(&self) -> SourcePosition {
        self.pos
    }
}

#[inherent]
impl AstNode for NonNullType<'_> {
    pub fn position(&self) -> SourcePosition {
        self.pos
    }
}
