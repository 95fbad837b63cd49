use crate::ast::Argument;
use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::Type;
use crate::ast::Value;
use crate::ast::Variable;
use crate::SourcePosition;
use inherent::inherent;
use std::fmt;

// =========================================================
// Operations
// =========================================================

/// The type of an [operation](https://spec.graphql.org/draft/#OperationType).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OperationType {
    Query,
    Mutation,
    Subscription,
}

impl OperationType {
    /// The keyword spelling of this operation type.
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationType::Query => "query",
            OperationType::Mutation => "mutation",
            OperationType::Subscription => "subscription",
        }
    }

    /// Maps a keyword literal to an operation type.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "query" => Some(OperationType::Query),
            "mutation" => Some(OperationType::Mutation),
            "subscription" => Some(OperationType::Subscription),
            _ => None,
        }
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An
/// [operation definition](https://spec.graphql.org/draft/#OperationDefinition)
/// - a query, mutation, or subscription.
///
/// The shorthand form `{ ... }` produces `operation_type = Query` with no
/// name, no variable definitions, and no directives.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationDefinition<'src> {
    pub pos: SourcePosition,
    pub operation_type: OperationType,
    pub name: Option<Name<'src>>,
    pub variable_definitions: Vec<VariableDefinition<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub selection_set: SelectionSet<'src>,
}

/// A
/// [fragment definition](https://spec.graphql.org/draft/#FragmentDefinition),
/// e.g. `fragment Avatar on User { url }`. The name may not be `on`.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentDefinition<'src> {
    pub pos: SourcePosition,
    pub name: Name<'src>,
    pub type_condition: NamedType<'src>,
    pub directives: Vec<Directive<'src>>,
    pub selection_set: SelectionSet<'src>,
}

/// A
/// [variable definition](https://spec.graphql.org/draft/#VariableDefinition)
/// such as `$id: ID! = "0"`. Position is that of the `$`.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinition<'src> {
    pub pos: SourcePosition,
    pub variable: Variable<'src>,
    pub ty: Type<'src>,
    pub default_value: Option<Value<'src>>,
    pub directives: Vec<Directive<'src>>,
}

// =========================================================
// Selections
// =========================================================

/// A braced
/// [selection set](https://spec.graphql.org/draft/#SelectionSet); never
/// empty. Position is that of the `{`.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionSet<'src> {
    pub pos: SourcePosition,
    pub selections: Vec<Selection<'src>>,
}

/// One [selection](https://spec.graphql.org/draft/#Selection) within a
/// selection set.
#[derive(Clone, Debug, PartialEq)]
pub enum Selection<'src> {
    Field(Field<'src>),
    FragmentSpread(FragmentSpread<'src>),
    InlineFragment(InlineFragment<'src>),
}

/// A [field selection](https://spec.graphql.org/draft/#Field), optionally
/// aliased, with arguments, directives, and a nested selection set.
#[derive(Clone, Debug, PartialEq)]
pub struct Field<'src> {
    pub pos: SourcePosition,
    pub alias: Option<Name<'src>>,
    pub name: Name<'src>,
    pub arguments: Vec<Argument<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub selection_set: Option<SelectionSet<'src>>,
}

/// A [fragment spread](https://spec.graphql.org/draft/#FragmentSpread),
/// e.g. `...Avatar`. Position is that of the `...`.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpread<'src> {
    pub pos: SourcePosition,
    pub name: Name<'src>,
    pub directives: Vec<Directive<'src>>,
}

/// An
/// [inline fragment](https://spec.graphql.org/draft/#InlineFragment),
/// e.g. `... on User { name }`. Position is that of the `...`.
#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment<'src> {
    pub pos: SourcePosition,
    pub type_condition: Option<NamedType<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub selection_set: SelectionSet<'src>,
}

#[inherent]
impl AstNode for OperationDefinition<'_> {
    pub fn position(&self) -> SourcePosition {
        self.pos
    }
}

#[inherent]
impl AstNode for FragmentDefinition<'_> {
    pub fn position(&self) -> SourcePosition {
        self.pos
    }
}

#[inherent]
impl AstNode for VariableDefinition<'_> {
    pub fn position(&self) -> SourcePosition {
        self.pos
    }
}

#[inherent]
impl AstNode for SelectionSet<'_> {
    pub fn position(&self) -> SourcePosition {
        self.pos
    }
}

#[inherent]
impl AstNode for Selection<'_> {
    pub fn position(&self) -> SourcePosition {
        match self {
            Selection::Field(field) => field.pos,
            Selection::FragmentSpread(spread) => spread.pos,
            Selection::InlineFragment(inline) => inline.pos,
        }
    }
}

#[inherent]
impl AstNode for Field<'_> {
    pub fn position(&self) -> SourcePosition {
        self.pos
    }
}

#[inherent]
impl AstNode for FragmentSpread<'_> {
    pub fn position(&self) -> SourcePosition {
        self.pos
    }
}

#[inherent]
impl AstNode for InlineFragment<'_> {
    pub fn position(&self) -> SourcePosition {
        self.pos
    }
}
