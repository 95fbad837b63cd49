//! Typed AST for parsed GraphQL documents.
//!
//! All node types are parameterized over a `'src` lifetime that borrows
//! strings from the source text via [`Cow<'src, str>`] - names, numeric
//! lexemes, and enum values point straight into the input, while decoded
//! string values own their storage.
//!
//! Nodes are built by the parser and immutable thereafter; a parent
//! exclusively owns its children and no cycles exist. Every node carries a
//! [`SourcePosition`] for the first source character contributing to it
//! (a description, when present, counts), exposed uniformly through
//! [`AstNode::position`].
//!
//! Each closed family - definitions, selections, values, types - is a
//! tagged enum, so traversals can match exhaustively.
//!
//! [`Cow<'src, str>`]: std::borrow::Cow
//! [`SourcePosition`]: crate::SourcePosition

mod ast_node;
mod document;
mod executable_defs;
mod name;
mod shared_nodes;
mod type_extensions;
mod type_system_defs;
mod types;
mod values;

pub use ast_node::AstNode;
pub use document::Definition;
pub use document::Document;
pub use document::ExecutableDefinition;
pub use executable_defs::Field;
pub use executable_defs::FragmentDefinition;
pub use executable_defs::FragmentSpread;
pub use executable_defs::InlineFragment;
pub use executable_defs::OperationDefinition;
pub use executable_defs::OperationType;
pub use executable_defs::Selection;
pub use executable_defs::SelectionSet;
pub use executable_defs::VariableDefinition;
pub use name::Name;
pub use shared_nodes::Argument;
pub use shared_nodes::Directive;
pub use type_extensions::EnumTypeExtension;
pub use type_extensions::InputObjectTypeExtension;
pub use type_extensions::InterfaceTypeExtension;
pub use type_extensions::ObjectTypeExtension;
pub use type_extensions::ScalarTypeExtension;
pub use type_extensions::SchemaExtension;
pub use type_extensions::TypeSystemExtension;
pub use type_extensions::UnionTypeExtension;
pub use type_system_defs::DirectiveDefinition;
pub use type_system_defs::EnumTypeDefinition;
pub use type_system_defs::EnumValueDefinition;
pub use type_system_defs::FieldDefinition;
pub use type_system_defs::InputObjectTypeDefinition;
pub use type_system_defs::InputValueDefinition;
pub use type_system_defs::InterfaceTypeDefinition;
pub use type_system_defs::ObjectTypeDefinition;
pub use type_system_defs::RootOperationTypeDefinition;
pub use type_system_defs::ScalarTypeDefinition;
pub use type_system_defs::SchemaDefinition;
pub use type_system_defs::TypeSystemDefinition;
pub use type_system_defs::UnionTypeDefinition;
pub use types::ListType;
pub use types::NamedType;
pub use types::NonNullType;
pub use types::NullableType;
pub use types::Type;
pub use values::BooleanValue;
pub use values::EnumValue;
pub use values::FloatValue;
pub use values::IntValue;
pub use values::ListValue;
pub use values::NullValue;
pub use values::ObjectField;
pub use values::ObjectValue;
pub use values::StringValue;
pub use values::Value;
pub use values::Variable;
