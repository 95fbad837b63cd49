use crate::ast::AstNode;
use crate::ast::Name;
use crate::ast::Value;
use crate::SourcePosition;
use inherent::inherent;

/// A [directive](https://spec.graphql.org/draft/#Directive) applied at a
/// call site, e.g. `@include(if: $flag)`. Position is that of the `@`.
///
/// No directive-location or repeatability checking happens here - that is
/// validation, not parsing.
#[derive(Clone, Debug, PartialEq)]
pub struct Directive<'src> {
    pub pos: SourcePosition,
    pub name: Name<'src>,
    pub arguments: Vec<Argument<'src>>,
}

/// A single `name: value`
/// [argument](https://spec.graphql.org/draft/#Argument) to a field or
/// directive.
#[derive(Clone, Debug, PartialEq)]
pub struct Argument<'src> {
    pub pos: SourcePosition,
    pub name: Name<'src>,
    pub value: Value<'src>,
}

#[inherent]
impl AstNode for Directive<'_> {
    pub fn position(&self) -> SourcePosition {
        self.pos
    }
}

#[inherent]
impl AstNode for Argument<'_> {
    pub fn position(&self) -> SourcePosition {
        self.pos
    }
}
