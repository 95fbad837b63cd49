use crate::ast::AstNode;
use crate::SourcePosition;
use inherent::inherent;
use std::borrow::Cow;

/// A GraphQL [name](https://spec.graphql.org/draft/#Name) (identifier).
///
/// Names are used for type names, field names, argument names, directive
/// names, enum values, and more. The grammar guarantees
/// `[_A-Za-z][_0-9A-Za-z]*`. `value` borrows from the source text.
#[derive(Clone, Debug, PartialEq)]
pub struct Name<'src> {
    pub pos: SourcePosition,
    pub value: Cow<'src, str>,
}

#[inherent]
impl AstNode for Name<'_> {
    pub fn position(&self) -> SourcePosition {
        self.pos
    }
}
