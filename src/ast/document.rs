use crate::ast::AstNode;
use crate::ast::FragmentDefinition;
use crate::ast::OperationDefinition;
use crate::ast::TypeSystemDefinition;
use crate::ast::TypeSystemExtension;
use crate::SourcePosition;
use inherent::inherent;

/// The root of a parsed GraphQL
/// [document](https://spec.graphql.org/draft/#Document): its definitions
/// in source order.
#[derive(Clone, Debug, PartialEq)]
pub struct Document<'src> {
    pub definitions: Vec<Definition<'src>>,
}

/// One top-level [definition](https://spec.graphql.org/draft/#Definition).
///
/// The three variant families are disjoint: executable definitions
/// (operations and fragments), type-system definitions, and type-system
/// extensions.
#[derive(Clone, Debug, PartialEq)]
pub enum Definition<'src> {
    Executable(ExecutableDefinition<'src>),
    TypeSystem(TypeSystemDefinition<'src>),
    Extension(TypeSystemExtension<'src>),
}

/// An
/// [executable definition](https://spec.graphql.org/draft/#ExecutableDefinition):
/// an operation or a fragment.
#[derive(Clone, Debug, PartialEq)]
pub enum ExecutableDefinition<'src> {
    Operation(OperationDefinition<'src>),
    Fragment(FragmentDefinition<'src>),
}

#[inherent]
impl AstNode for Definition<'_> {
    pub fn position(&self) -> SourcePosition {
        match self {
            Definition::Executable(def) => def.position(),
            Definition::TypeSystem(def) => def.position(),
            Definition::Extension(def) => def.position(),
        }
    }
}

#[inherent]
impl AstNode for ExecutableDefinition<'_> {
    pub fn position(&self) -> SourcePosition {
        match self {
            ExecutableDefinition::Operation(def) => def.pos,
            ExecutableDefinition::Fragment(def) => def.pos,
        }
    }
}
