//! Recursive descent parser for GraphQL documents.
//!
//! [`Parser`] pulls tokens from a [`Lexer`] through a two-token lookahead
//! window (`cur`, `peek`) and builds the typed AST in [`crate::ast`]. The
//! grammar is LL(2): two tokens are exactly enough to distinguish an
//! aliased field from a plain one (`NAME COLON` prefix) and to route a
//! description string to the type-system keyword behind it.
//!
//! The parser is fail-fast: the first lexical or syntactic error aborts
//! `parse_document` and no partial AST is returned. Comment tokens are
//! dropped as the window advances.

use crate::ast::Argument;
use crate::ast::BooleanValue;
use crate::ast::Definition;
use crate::ast::Directive;
use crate::ast::DirectiveDefinition;
use crate::ast::Document;
use crate::ast::EnumTypeDefinition;
use crate::ast::EnumTypeExtension;
use crate::ast::EnumValue;
use crate::ast::EnumValueDefinition;
use crate::ast::ExecutableDefinition;
use crate::ast::Field;
use crate::ast::FieldDefinition;
use crate::ast::FloatValue;
use crate::ast::FragmentDefinition;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use crate::ast::InputObjectTypeDefinition;
use crate::ast::InputObjectTypeExtension;
use crate::ast::InputValueDefinition;
use crate::ast::IntValue;
use crate::ast::InterfaceTypeDefinition;
use crate::ast::InterfaceTypeExtension;
use crate::ast::ListType;
use crate::ast::ListValue;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::NonNullType;
use crate::ast::NullValue;
use crate::ast::NullableType;
use crate::ast::ObjectField;
use crate::ast::ObjectTypeDefinition;
use crate::ast::ObjectTypeExtension;
use crate::ast::ObjectValue;
use crate::ast::OperationDefinition;
use crate::ast::OperationType;
use crate::ast::RootOperationTypeDefinition;
use crate::ast::ScalarTypeDefinition;
use crate::ast::ScalarTypeExtension;
use crate::ast::SchemaDefinition;
use crate::ast::SchemaExtension;
use crate::ast::Selection;
use crate::ast::SelectionSet;
use crate::ast::StringValue;
use crate::ast::Type;
use crate::ast::TypeSystemDefinition;
use crate::ast::TypeSystemExtension;
use crate::ast::UnionTypeDefinition;
use crate::ast::UnionTypeExtension;
use crate::ast::Value;
use crate::ast::Variable;
use crate::ast::VariableDefinition;
use crate::token::Token;
use crate::token::TokenKind;
use crate::Error;
use crate::Lexer;
use crate::ParseError;
use crate::ParseErrorKind;
use crate::SourcePosition;
use std::borrow::Cow;

/// Nesting limit shared by selection sets, type references, and list /
/// object values. Deeply nested adversarial input fails with a parse error
/// instead of overflowing the stack.
const MAX_RECURSION_DEPTH: usize = 512;

/// A recursive descent parser over a [`Lexer`]'s token stream.
///
/// # Example
///
/// ```rust
/// use gqlparse::{Lexer, Parser};
///
/// let lexer = Lexer::new("{ viewer { name } }");
/// let mut parser = Parser::new(lexer).unwrap();
/// let document = parser.parse_document().unwrap();
/// assert_eq!(document.definitions.len(), 1);
/// ```
pub struct Parser<'src> {
    /// The token source.
    lexer: Lexer<'src>,

    /// The token under consideration.
    cur: Token<'src>,

    /// One token of lookahead past `cur`.
    peek: Token<'src>,

    /// Current nesting depth of selection sets, types, and composite
    /// values; bounded by [`MAX_RECURSION_DEPTH`].
    depth: usize,
}

impl<'src> Parser<'src> {
    /// Creates a parser, prefetching the two-token window. Fails if either
    /// of the first two significant tokens fails to lex.
    pub fn new(mut lexer: Lexer<'src>) -> Result<Self, Error> {
        let cur = Self::next_significant(&mut lexer)?;
        let peek = Self::next_significant(&mut lexer)?;
        Ok(Self {
            lexer,
            cur,
            peek,
            depth: 0,
        })
    }

    /// Parses a complete document: definitions until EOF, in source order.
    pub fn parse_document(&mut self) -> Result<Document<'src>, Error> {
        let mut definitions = Vec::new();
        while self.cur.kind != TokenKind::Eof {
            definitions.push(self.parse_definition()?);
        }
        Ok(Document { definitions })
    }

    // =========================================================================
    // Token window management
    // =========================================================================

    /// Pulls the next non-comment token from the lexer.
    fn next_significant(lexer: &mut Lexer<'src>) -> Result<Token<'src>, Error> {
        loop {
            let token = lexer.next_token()?;
            if token.kind != TokenKind::Comment {
                return Ok(token);
            }
        }
    }

    /// Advances the window: `peek` becomes `cur`, the lexer supplies a new
    /// `peek`.
    fn advance(&mut self) -> Result<(), Error> {
        let next = Self::next_significant(&mut self.lexer)?;
        self.cur = std::mem::replace(&mut self.peek, next);
        Ok(())
    }

    /// Errors unless `cur` has the given kind.
    fn expect(&self, kind: TokenKind) -> Result<(), Error> {
        if self.cur.kind != kind {
            return Err(self.error_at_cur(ParseErrorKind::ExpectedToken {
                expected: kind,
                found: self.cur.kind,
            }));
        }
        Ok(())
    }

    /// Errors unless `cur` has the given kind; advances on success.
    fn expect_and_advance(&mut self, kind: TokenKind) -> Result<(), Error> {
        self.expect(kind)?;
        self.advance()
    }

    /// Errors unless `cur` is a `Name` token with the given literal;
    /// advances on success.
    fn expect_literal_and_advance(&mut self, literal: &str) -> Result<(), Error> {
        if self.cur.kind != TokenKind::Name || self.cur.literal != literal {
            return Err(self.error_at_cur(ParseErrorKind::ExpectedLiteral {
                expected: literal.to_string(),
                found: self.cur.literal.to_string(),
            }));
        }
        self.advance()
    }

    /// Errors unless `cur` has one of the given kinds.
    fn expect_one_of(&self, kinds: &[TokenKind]) -> Result<(), Error> {
        if kinds.contains(&self.cur.kind) {
            return Ok(());
        }
        Err(self.error_at_cur(ParseErrorKind::ExpectedOneOf {
            expected: kinds.to_vec(),
            found: self.cur.kind,
        }))
    }

    /// `true` when `cur` is a `Name` with the given keyword literal.
    fn cur_is_keyword(&self, keyword: &str) -> bool {
        self.cur.kind == TokenKind::Name && self.cur.literal == keyword
    }

    /// The position of `cur`'s first character.
    fn cur_pos(&self) -> SourcePosition {
        self.cur.position()
    }

    /// Steals `cur`'s literal, leaving an empty one behind. `cur` is
    /// always advanced past immediately afterwards.
    fn take_literal(&mut self) -> Cow<'src, str> {
        std::mem::replace(&mut self.cur.literal, Cow::Borrowed(""))
    }

    // =========================================================================
    // Error and recursion helpers
    // =========================================================================

    /// Builds a parse error located at `pos`.
    fn error_at(&self, pos: SourcePosition, kind: ParseErrorKind) -> Error {
        Error::Parse(ParseError {
            line: pos.line,
            column: pos.column,
            kind,
        })
    }

    /// Builds a parse error located at the current token.
    fn error_at_cur(&self, kind: ParseErrorKind) -> Error {
        self.error_at(self.cur.position(), kind)
    }

    /// Bumps the nesting depth, failing once it passes
    /// [`MAX_RECURSION_DEPTH`].
    fn enter_recursion(&mut self) -> Result<(), Error> {
        self.depth += 1;
        if self.depth > MAX_RECURSION_DEPTH {
            return Err(self.error_at_cur(ParseErrorKind::RecursionLimitExceeded));
        }
        Ok(())
    }

    // =========================================================================
    // Top-level dispatch
    // =========================================================================

    /// Parses one top-level definition.
    ///
    /// `{` starts a shorthand query. Otherwise the routing keyword is
    /// `cur`, or `peek` when `cur` is a description string - descriptions
    /// attach only to type-system definitions, so a description followed
    /// by an executable keyword fails inside the routed parser.
    fn parse_definition(&mut self) -> Result<Definition<'src>, Error> {
        if self.cur.kind == TokenKind::BraceOpen {
            let operation = self.parse_anonymous_operation_definition()?;
            return Ok(Definition::Executable(ExecutableDefinition::Operation(
                operation,
            )));
        }

        let keyword = if is_description(self.cur.kind) {
            &self.peek
        } else {
            &self.cur
        };

        if keyword.kind == TokenKind::Name {
            let literal = keyword.literal.clone();
            match literal.as_ref() {
                "schema" => {
                    let def = self.parse_schema_definition()?;
                    return Ok(Definition::TypeSystem(TypeSystemDefinition::Schema(def)));
                }
                "scalar" => {
                    let def = self.parse_scalar_type_definition()?;
                    return Ok(Definition::TypeSystem(TypeSystemDefinition::Scalar(def)));
                }
                "type" => {
                    let def = self.parse_object_type_definition()?;
                    return Ok(Definition::TypeSystem(TypeSystemDefinition::Object(def)));
                }
                "interface" => {
                    let def = self.parse_interface_type_definition()?;
                    return Ok(Definition::TypeSystem(TypeSystemDefinition::Interface(
                        def,
                    )));
                }
                "union" => {
                    let def = self.parse_union_type_definition()?;
                    return Ok(Definition::TypeSystem(TypeSystemDefinition::Union(def)));
                }
                "enum" => {
                    let def = self.parse_enum_type_definition()?;
                    return Ok(Definition::TypeSystem(TypeSystemDefinition::Enum(def)));
                }
                "input" => {
                    let def = self.parse_input_object_type_definition()?;
                    return Ok(Definition::TypeSystem(TypeSystemDefinition::InputObject(
                        def,
                    )));
                }
                "directive" => {
                    let def = self.parse_directive_definition()?;
                    return Ok(Definition::TypeSystem(TypeSystemDefinition::Directive(
                        def,
                    )));
                }
                "query" | "mutation" | "subscription" => {
                    let def = self.parse_operation_definition()?;
                    return Ok(Definition::Executable(ExecutableDefinition::Operation(
                        def,
                    )));
                }
                "fragment" => {
                    let def = self.parse_fragment_definition()?;
                    return Ok(Definition::Executable(ExecutableDefinition::Fragment(
                        def,
                    )));
                }
                "extend" => {
                    let ext = self.parse_type_system_extension()?;
                    return Ok(Definition::Extension(ext));
                }
                _ => {}
            }
        }

        Err(self.error_at_cur(ParseErrorKind::UnexpectedKeyword(
            self.cur.literal.to_string(),
        )))
    }

    // =========================================================================
    // Operations and selections
    // =========================================================================

    /// Parses the shorthand form `{ ... }`: an unnamed query with no
    /// variables and no directives.
    fn parse_anonymous_operation_definition(
        &mut self,
    ) -> Result<OperationDefinition<'src>, Error> {
        let pos = self.cur_pos();
        let selection_set = self.parse_selection_set()?;
        Ok(OperationDefinition {
            pos,
            operation_type: OperationType::Query,
            name: None,
            variable_definitions: Vec::new(),
            directives: Vec::new(),
            selection_set,
        })
    }

    /// Parses `query|mutation|subscription Name? VariableDefinitions?
    /// Directives? SelectionSet`.
    fn parse_operation_definition(&mut self) -> Result<OperationDefinition<'src>, Error> {
        let pos = self.cur_pos();
        let operation_type = self.parse_operation_type()?;

        let name = if self.cur.kind == TokenKind::Name {
            Some(self.parse_name()?)
        } else {
            None
        };

        let variable_definitions = if self.cur.kind == TokenKind::ParenOpen {
            self.parse_variable_definitions()?
        } else {
            Vec::new()
        };

        let directives = self.parse_directives()?;
        let selection_set = self.parse_selection_set()?;

        Ok(OperationDefinition {
            pos,
            operation_type,
            name,
            variable_definitions,
            directives,
            selection_set,
        })
    }

    /// Parses an operation type keyword. Only `query`, `mutation`, and
    /// `subscription` exist; anything else is an error (reachable via root
    /// operation type definitions).
    fn parse_operation_type(&mut self) -> Result<OperationType, Error> {
        self.expect(TokenKind::Name)?;
        match OperationType::from_keyword(&self.cur.literal) {
            Some(operation_type) => {
                self.advance()?;
                Ok(operation_type)
            }
            None => Err(self.error_at_cur(ParseErrorKind::UnknownRootOperationType(
                self.cur.literal.to_string(),
            ))),
        }
    }

    /// Parses `fragment Name on NamedType Directives? SelectionSet`. The
    /// fragment name may not be `on`.
    fn parse_fragment_definition(&mut self) -> Result<FragmentDefinition<'src>, Error> {
        let pos = self.cur_pos();
        self.expect_literal_and_advance("fragment")?;

        if self.cur_is_keyword("on") {
            return Err(self.error_at_cur(ParseErrorKind::ReservedName {
                name: "on".to_string(),
                context: "a fragment name",
            }));
        }
        let name = self.parse_name()?;
        let type_condition = self.parse_type_condition()?;
        let directives = self.parse_directives()?;
        let selection_set = self.parse_selection_set()?;

        Ok(FragmentDefinition {
            pos,
            name,
            type_condition,
            directives,
            selection_set,
        })
    }

    /// Parses `on NamedType`.
    fn parse_type_condition(&mut self) -> Result<NamedType<'src>, Error> {
        self.expect_literal_and_advance("on")?;
        self.parse_named_type()
    }

    /// Parses `{ Selection+ }`.
    fn parse_selection_set(&mut self) -> Result<SelectionSet<'src>, Error> {
        self.enter_recursion()?;
        let result = self.parse_selection_set_inner();
        self.depth -= 1;
        result
    }

    fn parse_selection_set_inner(&mut self) -> Result<SelectionSet<'src>, Error> {
        let pos = self.cur_pos();
        self.expect_and_advance(TokenKind::BraceOpen)?;

        let mut selections = Vec::new();
        while !matches!(self.cur.kind, TokenKind::BraceClose | TokenKind::Eof) {
            selections.push(self.parse_selection()?);
        }

        self.expect_and_advance(TokenKind::BraceClose)?;
        if selections.is_empty() {
            return Err(self.error_at(
                pos,
                ParseErrorKind::EmptyConstruct {
                    construct: "selection set",
                },
            ));
        }

        Ok(SelectionSet { pos, selections })
    }

    /// Parses one selection: a fragment form after `...`, a field
    /// otherwise.
    fn parse_selection(&mut self) -> Result<Selection<'src>, Error> {
        if self.cur.kind == TokenKind::Spread {
            return self.parse_fragment();
        }
        Ok(Selection::Field(self.parse_field()?))
    }

    /// Parses `Alias? Name Arguments? Directives? SelectionSet?`. An alias
    /// exists when the lookahead window shows `NAME COLON`.
    fn parse_field(&mut self) -> Result<Field<'src>, Error> {
        let pos = self.cur_pos();

        let alias = if self.cur.kind == TokenKind::Name && self.peek.kind == TokenKind::Colon
        {
            let alias = self.parse_name()?;
            self.advance()?; // consume ':'
            Some(alias)
        } else {
            None
        };

        let name = self.parse_name()?;

        let arguments = if self.cur.kind == TokenKind::ParenOpen {
            self.parse_arguments()?
        } else {
            Vec::new()
        };

        let directives = self.parse_directives()?;

        let selection_set = if self.cur.kind == TokenKind::BraceOpen {
            Some(self.parse_selection_set()?)
        } else {
            None
        };

        Ok(Field {
            pos,
            alias,
            name,
            arguments,
            directives,
            selection_set,
        })
    }

    /// Parses the selection after a `...`: an inline fragment when `on`
    /// follows, a fragment spread otherwise.
    fn parse_fragment(&mut self) -> Result<Selection<'src>, Error> {
        let pos = self.cur_pos();
        self.expect_and_advance(TokenKind::Spread)?;

        if self.cur_is_keyword("on") {
            Ok(Selection::InlineFragment(self.parse_inline_fragment(pos)?))
        } else {
            Ok(Selection::FragmentSpread(self.parse_fragment_spread(pos)?))
        }
    }

    /// Parses `on NamedType Directives? SelectionSet` after a `...`.
    fn parse_inline_fragment(
        &mut self,
        pos: SourcePosition,
    ) -> Result<InlineFragment<'src>, Error> {
        self.advance()?; // consume 'on'
        let type_condition = self.parse_named_type()?;
        let directives = self.parse_directives()?;
        let selection_set = self.parse_selection_set()?;

        Ok(InlineFragment {
            pos,
            type_condition: Some(type_condition),
            directives,
            selection_set,
        })
    }

    /// Parses `FragmentName Directives?` after a `...`.
    fn parse_fragment_spread(
        &mut self,
        pos: SourcePosition,
    ) -> Result<FragmentSpread<'src>, Error> {
        let name = self.parse_name()?;
        let directives = self.parse_directives()?;
        Ok(FragmentSpread {
            pos,
            name,
            directives,
        })
    }

    // =========================================================================
    // Variables, types, values
    // =========================================================================

    /// Parses `( VariableDefinition+ )`.
    fn parse_variable_definitions(
        &mut self,
    ) -> Result<Vec<VariableDefinition<'src>>, Error> {
        let pos = self.cur_pos();
        self.expect_and_advance(TokenKind::ParenOpen)?;

        let mut definitions = Vec::new();
        while !matches!(self.cur.kind, TokenKind::ParenClose | TokenKind::Eof) {
            definitions.push(self.parse_variable_definition()?);
        }

        self.expect_and_advance(TokenKind::ParenClose)?;
        if definitions.is_empty() {
            return Err(self.error_at(
                pos,
                ParseErrorKind::EmptyConstruct {
                    construct: "variable definition list",
                },
            ));
        }

        Ok(definitions)
    }

    /// Parses `$Name : Type ( = Value )? Directives?`. The node's position
    /// is that of the `$`.
    fn parse_variable_definition(&mut self) -> Result<VariableDefinition<'src>, Error> {
        let pos = self.cur_pos();
        let variable = self.parse_variable()?;
        self.expect_and_advance(TokenKind::Colon)?;
        let ty = self.parse_type()?;

        let default_value = if self.cur.kind == TokenKind::Equals {
            self.advance()?;
            Some(self.parse_value()?)
        } else {
            None
        };

        let directives = self.parse_directives()?;

        Ok(VariableDefinition {
            pos,
            variable,
            ty,
            default_value,
            directives,
        })
    }

    /// Parses `$Name`.
    fn parse_variable(&mut self) -> Result<Variable<'src>, Error> {
        let pos = self.cur_pos();
        self.expect_and_advance(TokenKind::Dollar)?;
        let name = self.parse_name()?;
        Ok(Variable { pos, name })
    }

    /// Parses a type reference: a named type or a bracketed list type,
    /// optionally followed by a single `!`. A second `!` cannot attach -
    /// the non-null wrapper is produced at most once per core type, so
    /// non-null never nests.
    fn parse_type(&mut self) -> Result<Type<'src>, Error> {
        self.enter_recursion()?;
        let result = self.parse_type_inner();
        self.depth -= 1;
        result
    }

    fn parse_type_inner(&mut self) -> Result<Type<'src>, Error> {
        let pos = self.cur_pos();

        let core = match self.cur.kind {
            TokenKind::BracketOpen => {
                self.advance()?;
                let item = self.parse_type()?;
                self.expect_and_advance(TokenKind::BracketClose)?;
                NullableType::List(Box::new(ListType { pos, item }))
            }
            TokenKind::Name => NullableType::Named(self.parse_named_type()?),
            kind => {
                return Err(self.error_at_cur(ParseErrorKind::UnexpectedTypeToken(kind)));
            }
        };

        if self.cur.kind == TokenKind::Bang {
            let bang_pos = self.cur_pos();
            self.advance()?;
            return Ok(Type::NonNull(NonNullType {
                pos: bang_pos,
                ty: core,
            }));
        }

        Ok(core.into())
    }

    /// Parses a single-name type reference.
    fn parse_named_type(&mut self) -> Result<NamedType<'src>, Error> {
        let pos = self.cur_pos();
        let name = self.parse_name()?;
        Ok(NamedType { pos, name })
    }

    /// Parses a name token into a [`Name`] node.
    fn parse_name(&mut self) -> Result<Name<'src>, Error> {
        self.expect(TokenKind::Name)?;
        let name = Name {
            pos: self.cur_pos(),
            value: self.take_literal(),
        };
        self.advance()?;
        Ok(name)
    }

    /// Parses a value literal, dispatching on the current token kind. The
    /// reserved names `true`, `false`, and `null` become boolean/null
    /// values; any other name is an enum value.
    fn parse_value(&mut self) -> Result<Value<'src>, Error> {
        self.enter_recursion()?;
        let result = self.parse_value_inner();
        self.depth -= 1;
        result
    }

    fn parse_value_inner(&mut self) -> Result<Value<'src>, Error> {
        let pos = self.cur_pos();
        match self.cur.kind {
            TokenKind::Int => {
                let value = self.take_literal();
                self.advance()?;
                Ok(Value::Int(IntValue { pos, value }))
            }
            TokenKind::Float => {
                let value = self.take_literal();
                self.advance()?;
                Ok(Value::Float(FloatValue { pos, value }))
            }
            TokenKind::String | TokenKind::BlockString => {
                Ok(Value::String(self.parse_string_value()?))
            }
            TokenKind::Name => match self.cur.literal.as_ref() {
                "true" => {
                    self.advance()?;
                    Ok(Value::Boolean(BooleanValue { pos, value: true }))
                }
                "false" => {
                    self.advance()?;
                    Ok(Value::Boolean(BooleanValue { pos, value: false }))
                }
                "null" => {
                    self.advance()?;
                    Ok(Value::Null(NullValue { pos }))
                }
                _ => {
                    let value = self.take_literal();
                    self.advance()?;
                    Ok(Value::Enum(EnumValue { pos, value }))
                }
            },
            TokenKind::Dollar => Ok(Value::Variable(self.parse_variable()?)),
            TokenKind::BracketOpen => self.parse_list_value(),
            TokenKind::BraceOpen => self.parse_object_value(),
            kind => Err(self.error_at_cur(ParseErrorKind::UnexpectedValueToken(kind))),
        }
    }

    /// Parses `[ Value* ]`. Empty lists are legal.
    fn parse_list_value(&mut self) -> Result<Value<'src>, Error> {
        let pos = self.cur_pos();
        self.expect_and_advance(TokenKind::BracketOpen)?;

        let mut values = Vec::new();
        while !matches!(self.cur.kind, TokenKind::BracketClose | TokenKind::Eof) {
            values.push(self.parse_value()?);
        }

        self.expect_and_advance(TokenKind::BracketClose)?;
        Ok(Value::List(ListValue { pos, values }))
    }

    /// Parses `{ ObjectField* }`, preserving field order. Empty objects
    /// are legal.
    fn parse_object_value(&mut self) -> Result<Value<'src>, Error> {
        let pos = self.cur_pos();
        self.expect_and_advance(TokenKind::BraceOpen)?;

        let mut fields = Vec::new();
        while !matches!(self.cur.kind, TokenKind::BraceClose | TokenKind::Eof) {
            fields.push(self.parse_object_field()?);
        }

        self.expect_and_advance(TokenKind::BraceClose)?;
        Ok(Value::Object(ObjectValue { pos, fields }))
    }

    /// Parses `Name : Value` inside an object value.
    fn parse_object_field(&mut self) -> Result<ObjectField<'src>, Error> {
        let pos = self.cur_pos();
        let name = self.parse_name()?;
        self.expect_and_advance(TokenKind::Colon)?;
        let value = self.parse_value()?;
        Ok(ObjectField { pos, name, value })
    }

    /// Parses a string or block-string token into a [`StringValue`].
    fn parse_string_value(&mut self) -> Result<StringValue<'src>, Error> {
        self.expect_one_of(&[TokenKind::String, TokenKind::BlockString])?;
        let value = StringValue {
            pos: self.cur_pos(),
            value: self.take_literal(),
            block: self.cur.kind == TokenKind::BlockString,
        };
        self.advance()?;
        Ok(value)
    }

    /// Parses the description string in front of a type-system definition,
    /// if present.
    fn parse_optional_description(&mut self) -> Result<Option<StringValue<'src>>, Error> {
        if is_description(self.cur.kind) {
            return Ok(Some(self.parse_string_value()?));
        }
        Ok(None)
    }

    // =========================================================================
    // Directives and arguments (call-site form)
    // =========================================================================

    /// Parses zero or more `@ Name Arguments?` repetitions.
    fn parse_directives(&mut self) -> Result<Vec<Directive<'src>>, Error> {
        let mut directives = Vec::new();
        while self.cur.kind == TokenKind::At {
            directives.push(self.parse_directive()?);
        }
        Ok(directives)
    }

    /// Parses `@ Name Arguments?`.
    fn parse_directive(&mut self) -> Result<Directive<'src>, Error> {
        let pos = self.cur_pos();
        self.expect_and_advance(TokenKind::At)?;
        let name = self.parse_name()?;

        let arguments = if self.cur.kind == TokenKind::ParenOpen {
            self.parse_arguments()?
        } else {
            Vec::new()
        };

        Ok(Directive {
            pos,
            name,
            arguments,
        })
    }

    /// Parses `( Argument+ )`.
    fn parse_arguments(&mut self) -> Result<Vec<Argument<'src>>, Error> {
        let pos = self.cur_pos();
        self.expect_and_advance(TokenKind::ParenOpen)?;

        let mut arguments = Vec::new();
        while !matches!(self.cur.kind, TokenKind::ParenClose | TokenKind::Eof) {
            arguments.push(self.parse_argument()?);
        }

        self.expect_and_advance(TokenKind::ParenClose)?;
        if arguments.is_empty() {
            return Err(self.error_at(
                pos,
                ParseErrorKind::EmptyConstruct {
                    construct: "argument list",
                },
            ));
        }

        Ok(arguments)
    }

    /// Parses `Name : Value`.
    fn parse_argument(&mut self) -> Result<Argument<'src>, Error> {
        let pos = self.cur_pos();
        let name = self.parse_name()?;
        self.expect_and_advance(TokenKind::Colon)?;
        let value = self.parse_value()?;
        Ok(Argument { pos, name, value })
    }

    // =========================================================================
    // Type-system definitions
    // =========================================================================

    /// Parses `Description? schema Directives? { RootOperationTypeDefinition+ }`.
    fn parse_schema_definition(&mut self) -> Result<SchemaDefinition<'src>, Error> {
        let pos = self.cur_pos();
        let description = self.parse_optional_description()?;
        self.expect_literal_and_advance("schema")?;
        let directives = self.parse_directives()?;
        let root_operation_defs = self.parse_root_operation_defs()?;

        Ok(SchemaDefinition {
            pos,
            description,
            directives,
            root_operation_defs,
        })
    }

    /// Parses `{ RootOperationTypeDefinition+ }`.
    fn parse_root_operation_defs(
        &mut self,
    ) -> Result<Vec<RootOperationTypeDefinition<'src>>, Error> {
        let pos = self.cur_pos();
        self.expect_and_advance(TokenKind::BraceOpen)?;

        let mut defs = Vec::new();
        while !matches!(self.cur.kind, TokenKind::BraceClose | TokenKind::Eof) {
            defs.push(self.parse_root_operation_type_definition()?);
        }

        self.expect_and_advance(TokenKind::BraceClose)?;
        if defs.is_empty() {
            return Err(self.error_at(
                pos,
                ParseErrorKind::EmptyConstruct {
                    construct: "root operation type definition list",
                },
            ));
        }

        Ok(defs)
    }

    /// Parses `OperationType : NamedType`.
    fn parse_root_operation_type_definition(
        &mut self,
    ) -> Result<RootOperationTypeDefinition<'src>, Error> {
        let pos = self.cur_pos();
        let operation_type = self.parse_operation_type()?;
        self.expect_and_advance(TokenKind::Colon)?;
        let ty = self.parse_named_type()?;

        Ok(RootOperationTypeDefinition {
            pos,
            operation_type,
            ty,
        })
    }

    /// Parses `Description? scalar Name Directives?`.
    fn parse_scalar_type_definition(&mut self) -> Result<ScalarTypeDefinition<'src>, Error> {
        let pos = self.cur_pos();
        let description = self.parse_optional_description()?;
        self.expect_literal_and_advance("scalar")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives()?;

        Ok(ScalarTypeDefinition {
            pos,
            description,
            name,
            directives,
        })
    }

    /// Parses `Description? type Name ImplementsInterfaces? Directives?
    /// FieldsDefinition?`.
    fn parse_object_type_definition(&mut self) -> Result<ObjectTypeDefinition<'src>, Error> {
        let pos = self.cur_pos();
        let description = self.parse_optional_description()?;
        self.expect_literal_and_advance("type")?;
        let name = self.parse_name()?;

        let interfaces = if self.cur_is_keyword("implements") {
            self.parse_implements_interfaces()?
        } else {
            Vec::new()
        };

        let directives = self.parse_directives()?;

        let fields = if self.cur.kind == TokenKind::BraceOpen {
            self.parse_fields_definition()?
        } else {
            Vec::new()
        };

        Ok(ObjectTypeDefinition {
            pos,
            description,
            name,
            interfaces,
            directives,
            fields,
        })
    }

    /// Parses `Description? interface Name ImplementsInterfaces?
    /// Directives? FieldsDefinition?`.
    fn parse_interface_type_definition(
        &mut self,
    ) -> Result<InterfaceTypeDefinition<'src>, Error> {
        let pos = self.cur_pos();
        let description = self.parse_optional_description()?;
        self.expect_literal_and_advance("interface")?;
        let name = self.parse_name()?;

        let interfaces = if self.cur_is_keyword("implements") {
            self.parse_implements_interfaces()?
        } else {
            Vec::new()
        };

        let directives = self.parse_directives()?;

        let fields = if self.cur.kind == TokenKind::BraceOpen {
            self.parse_fields_definition()?
        } else {
            Vec::new()
        };

        Ok(InterfaceTypeDefinition {
            pos,
            description,
            name,
            interfaces,
            directives,
            fields,
        })
    }

    /// Parses `implements &? NamedType ( & NamedType )*` - the leading
    /// `&` is optional.
    fn parse_implements_interfaces(&mut self) -> Result<Vec<NamedType<'src>>, Error> {
        self.expect_literal_and_advance("implements")?;
        if self.cur.kind == TokenKind::Amp {
            self.advance()?;
        }

        let mut interfaces = Vec::new();
        loop {
            interfaces.push(self.parse_named_type()?);
            if self.cur.kind == TokenKind::Amp {
                self.advance()?;
                continue;
            }
            break;
        }
        Ok(interfaces)
    }

    /// Parses `{ FieldDefinition+ }`.
    fn parse_fields_definition(&mut self) -> Result<Vec<FieldDefinition<'src>>, Error> {
        let pos = self.cur_pos();
        self.expect_and_advance(TokenKind::BraceOpen)?;

        let mut fields = Vec::new();
        while !matches!(self.cur.kind, TokenKind::BraceClose | TokenKind::Eof) {
            fields.push(self.parse_field_definition()?);
        }

        self.expect_and_advance(TokenKind::BraceClose)?;
        if fields.is_empty() {
            return Err(self.error_at(
                pos,
                ParseErrorKind::EmptyConstruct {
                    construct: "field definition list",
                },
            ));
        }

        Ok(fields)
    }

    /// Parses `Description? Name ArgumentsDefinition? : Type Directives?`.
    fn parse_field_definition(&mut self) -> Result<FieldDefinition<'src>, Error> {
        let pos = self.cur_pos();
        let description = self.parse_optional_description()?;
        let name = self.parse_name()?;

        let arguments = if self.cur.kind == TokenKind::ParenOpen {
            self.parse_arguments_definition()?
        } else {
            Vec::new()
        };

        self.expect_and_advance(TokenKind::Colon)?;
        let ty = self.parse_type()?;
        let directives = self.parse_directives()?;

        Ok(FieldDefinition {
            pos,
            description,
            name,
            arguments,
            ty,
            directives,
        })
    }

    /// Parses `( InputValueDefinition+ )`.
    fn parse_arguments_definition(
        &mut self,
    ) -> Result<Vec<InputValueDefinition<'src>>, Error> {
        let pos = self.cur_pos();
        self.expect_and_advance(TokenKind::ParenOpen)?;

        let mut arguments = Vec::new();
        while !matches!(self.cur.kind, TokenKind::ParenClose | TokenKind::Eof) {
            arguments.push(self.parse_input_value_definition()?);
        }

        self.expect_and_advance(TokenKind::ParenClose)?;
        if arguments.is_empty() {
            return Err(self.error_at(
                pos,
                ParseErrorKind::EmptyConstruct {
                    construct: "argument definition list",
                },
            ));
        }

        Ok(arguments)
    }

    /// Parses `Description? Name : Type ( = Value )? Directives?` - used
    /// for argument definitions and input object fields alike.
    fn parse_input_value_definition(
        &mut self,
    ) -> Result<InputValueDefinition<'src>, Error> {
        let pos = self.cur_pos();
        let description = self.parse_optional_description()?;
        let name = self.parse_name()?;
        self.expect_and_advance(TokenKind::Colon)?;
        let ty = self.parse_type()?;

        let default_value = if self.cur.kind == TokenKind::Equals {
            self.advance()?;
            Some(self.parse_value()?)
        } else {
            None
        };

        let directives = self.parse_directives()?;

        Ok(InputValueDefinition {
            pos,
            description,
            name,
            ty,
            default_value,
            directives,
        })
    }

    /// Parses `Description? union Name Directives? UnionMemberTypes?`.
    fn parse_union_type_definition(&mut self) -> Result<UnionTypeDefinition<'src>, Error> {
        let pos = self.cur_pos();
        let description = self.parse_optional_description()?;
        self.expect_literal_and_advance("union")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives()?;

        let types = if self.cur.kind == TokenKind::Equals {
            self.parse_union_member_types()?
        } else {
            Vec::new()
        };

        Ok(UnionTypeDefinition {
            pos,
            description,
            name,
            directives,
            types,
        })
    }

    /// Parses `= |? NamedType ( | NamedType )*` - the leading `|` is
    /// optional.
    fn parse_union_member_types(&mut self) -> Result<Vec<NamedType<'src>>, Error> {
        self.expect_and_advance(TokenKind::Equals)?;
        if self.cur.kind == TokenKind::Pipe {
            self.advance()?;
        }

        let mut types = Vec::new();
        loop {
            types.push(self.parse_named_type()?);
            if self.cur.kind == TokenKind::Pipe {
                self.advance()?;
                continue;
            }
            break;
        }
        Ok(types)
    }

    /// Parses `Description? enum Name Directives? EnumValuesDefinition?`.
    fn parse_enum_type_definition(&mut self) -> Result<EnumTypeDefinition<'src>, Error> {
        let pos = self.cur_pos();
        let description = self.parse_optional_description()?;
        self.expect_literal_and_advance("enum")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives()?;

        let values = if self.cur.kind == TokenKind::BraceOpen {
            self.parse_enum_values_definition()?
        } else {
            Vec::new()
        };

        Ok(EnumTypeDefinition {
            pos,
            description,
            name,
            directives,
            values,
        })
    }

    /// Parses `{ EnumValueDefinition+ }`.
    fn parse_enum_values_definition(
        &mut self,
    ) -> Result<Vec<EnumValueDefinition<'src>>, Error> {
        let pos = self.cur_pos();
        self.expect_and_advance(TokenKind::BraceOpen)?;

        let mut values = Vec::new();
        while !matches!(self.cur.kind, TokenKind::BraceClose | TokenKind::Eof) {
            values.push(self.parse_enum_value_definition()?);
        }

        self.expect_and_advance(TokenKind::BraceClose)?;
        if values.is_empty() {
            return Err(self.error_at(
                pos,
                ParseErrorKind::EmptyConstruct {
                    construct: "enum value definition list",
                },
            ));
        }

        Ok(values)
    }

    /// Parses `Description? EnumValueName Directives?`.
    fn parse_enum_value_definition(&mut self) -> Result<EnumValueDefinition<'src>, Error> {
        let pos = self.cur_pos();
        let description = self.parse_optional_description()?;
        let name = self.parse_enum_value_name()?;
        let directives = self.parse_directives()?;

        Ok(EnumValueDefinition {
            pos,
            description,
            name,
            directives,
        })
    }

    /// Parses an enum value name: any name except `true`, `false`, and
    /// `null`, which would be ambiguous with the value literals.
    fn parse_enum_value_name(&mut self) -> Result<Name<'src>, Error> {
        self.expect(TokenKind::Name)?;
        if matches!(self.cur.literal.as_ref(), "true" | "false" | "null") {
            return Err(self.error_at_cur(ParseErrorKind::ReservedName {
                name: self.cur.literal.to_string(),
                context: "an enum value",
            }));
        }
        self.parse_name()
    }

    /// Parses `Description? input Name Directives? InputFieldsDefinition?`.
    fn parse_input_object_type_definition(
        &mut self,
    ) -> Result<InputObjectTypeDefinition<'src>, Error> {
        let pos = self.cur_pos();
        let description = self.parse_optional_description()?;
        self.expect_literal_and_advance("input")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives()?;

        let fields = if self.cur.kind == TokenKind::BraceOpen {
            self.parse_input_fields_definition()?
        } else {
            Vec::new()
        };

        Ok(InputObjectTypeDefinition {
            pos,
            description,
            name,
            directives,
            fields,
        })
    }

    /// Parses `{ InputValueDefinition+ }`.
    fn parse_input_fields_definition(
        &mut self,
    ) -> Result<Vec<InputValueDefinition<'src>>, Error> {
        let pos = self.cur_pos();
        self.expect_and_advance(TokenKind::BraceOpen)?;

        let mut fields = Vec::new();
        while !matches!(self.cur.kind, TokenKind::BraceClose | TokenKind::Eof) {
            fields.push(self.parse_input_value_definition()?);
        }

        self.expect_and_advance(TokenKind::BraceClose)?;
        if fields.is_empty() {
            return Err(self.error_at(
                pos,
                ParseErrorKind::EmptyConstruct {
                    construct: "input field definition list",
                },
            ));
        }

        Ok(fields)
    }

    /// Parses `Description? directive @ Name ArgumentsDefinition?
    /// repeatable? on DirectiveLocations`.
    fn parse_directive_definition(&mut self) -> Result<DirectiveDefinition<'src>, Error> {
        let pos = self.cur_pos();
        let description = self.parse_optional_description()?;
        self.expect_literal_and_advance("directive")?;
        self.expect_and_advance(TokenKind::At)?;
        let name = self.parse_name()?;

        let arguments = if self.cur.kind == TokenKind::ParenOpen {
            self.parse_arguments_definition()?
        } else {
            Vec::new()
        };

        let repeatable = if self.cur_is_keyword("repeatable") {
            self.advance()?;
            true
        } else {
            false
        };

        self.expect_literal_and_advance("on")?;
        let locations = self.parse_directive_locations()?;

        Ok(DirectiveDefinition {
            pos,
            description,
            name,
            arguments,
            repeatable,
            locations,
        })
    }

    /// Parses `|? Name ( | Name )*` - the leading `|` is optional.
    /// Location names are not validated against the known locations.
    fn parse_directive_locations(&mut self) -> Result<Vec<Name<'src>>, Error> {
        if self.cur.kind == TokenKind::Pipe {
            self.advance()?;
        }

        let mut locations = Vec::new();
        loop {
            locations.push(self.parse_name()?);
            if self.cur.kind == TokenKind::Pipe {
                self.advance()?;
                continue;
            }
            break;
        }
        Ok(locations)
    }

    // =========================================================================
    // Type-system extensions
    // =========================================================================

    /// Dispatches `extend <keyword> ...` on the lookahead token. Every
    /// extension must introduce at least one modification; descriptions
    /// are not permitted on extensions.
    fn parse_type_system_extension(&mut self) -> Result<TypeSystemExtension<'src>, Error> {
        let keyword = if self.peek.kind == TokenKind::Name {
            self.peek.literal.clone()
        } else {
            Cow::Borrowed("")
        };

        match keyword.as_ref() {
            "schema" => Ok(TypeSystemExtension::Schema(self.parse_schema_extension()?)),
            "scalar" => Ok(TypeSystemExtension::Scalar(
                self.parse_scalar_type_extension()?,
            )),
            "type" => Ok(TypeSystemExtension::Object(
                self.parse_object_type_extension()?,
            )),
            "interface" => Ok(TypeSystemExtension::Interface(
                self.parse_interface_type_extension()?,
            )),
            "union" => Ok(TypeSystemExtension::Union(
                self.parse_union_type_extension()?,
            )),
            "enum" => Ok(TypeSystemExtension::Enum(self.parse_enum_type_extension()?)),
            "input" => Ok(TypeSystemExtension::InputObject(
                self.parse_input_object_type_extension()?,
            )),
            _ => Err(self.error_at(
                self.peek.position(),
                ParseErrorKind::UnexpectedExtension(self.peek.literal.to_string()),
            )),
        }
    }

    /// Parses `extend schema Directives? ( { RootOperationTypeDefinition+ } )?`.
    fn parse_schema_extension(&mut self) -> Result<SchemaExtension<'src>, Error> {
        let pos = self.cur_pos();
        self.expect_literal_and_advance("extend")?;
        self.expect_literal_and_advance("schema")?;

        let directives = self.parse_directives()?;

        let root_operation_defs = if self.cur.kind == TokenKind::BraceOpen {
            self.parse_root_operation_defs()?
        } else {
            Vec::new()
        };

        if directives.is_empty() && root_operation_defs.is_empty() {
            return Err(self.error_at(
                pos,
                ParseErrorKind::ExtensionRequiresModification {
                    construct: "schema",
                    requirement: "directives or root operation types",
                },
            ));
        }

        Ok(SchemaExtension {
            pos,
            directives,
            root_operation_defs,
        })
    }

    /// Parses `extend scalar Name Directives` - directives are the only
    /// productive body a scalar extension has, so at least one is
    /// required.
    fn parse_scalar_type_extension(&mut self) -> Result<ScalarTypeExtension<'src>, Error> {
        let pos = self.cur_pos();
        self.expect_literal_and_advance("extend")?;
        self.expect_literal_and_advance("scalar")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives()?;

        if directives.is_empty() {
            return Err(self.error_at(
                pos,
                ParseErrorKind::ExtensionRequiresModification {
                    construct: "scalar",
                    requirement: "at least one directive",
                },
            ));
        }

        Ok(ScalarTypeExtension {
            pos,
            name,
            directives,
        })
    }

    /// Parses `extend type Name ImplementsInterfaces? Directives?
    /// FieldsDefinition?`.
    fn parse_object_type_extension(&mut self) -> Result<ObjectTypeExtension<'src>, Error> {
        let pos = self.cur_pos();
        self.expect_literal_and_advance("extend")?;
        self.expect_literal_and_advance("type")?;
        let name = self.parse_name()?;

        let interfaces = if self.cur_is_keyword("implements") {
            self.parse_implements_interfaces()?
        } else {
            Vec::new()
        };

        let directives = self.parse_directives()?;

        let fields = if self.cur.kind == TokenKind::BraceOpen {
            self.parse_fields_definition()?
        } else {
            Vec::new()
        };

        if interfaces.is_empty() && directives.is_empty() && fields.is_empty() {
            return Err(self.error_at(
                pos,
                ParseErrorKind::ExtensionRequiresModification {
                    construct: "type",
                    requirement: "an implements clause, directives, or fields",
                },
            ));
        }

        Ok(ObjectTypeExtension {
            pos,
            name,
            interfaces,
            directives,
            fields,
        })
    }

    /// Parses `extend interface Name ImplementsInterfaces? Directives?
    /// FieldsDefinition?`.
    fn parse_interface_type_extension(
        &mut self,
    ) -> Result<InterfaceTypeExtension<'src>, Error> {
        let pos = self.cur_pos();
        self.expect_literal_and_advance("extend")?;
        self.expect_literal_and_advance("interface")?;
        let name = self.parse_name()?;

        let interfaces = if self.cur_is_keyword("implements") {
            self.parse_implements_interfaces()?
        } else {
            Vec::new()
        };

        let directives = self.parse_directives()?;

        let fields = if self.cur.kind == TokenKind::BraceOpen {
            self.parse_fields_definition()?
        } else {
            Vec::new()
        };

        if interfaces.is_empty() && directives.is_empty() && fields.is_empty() {
            return Err(self.error_at(
                pos,
                ParseErrorKind::ExtensionRequiresModification {
                    construct: "interface",
                    requirement: "an implements clause, directives, or fields",
                },
            ));
        }

        Ok(InterfaceTypeExtension {
            pos,
            name,
            interfaces,
            directives,
            fields,
        })
    }

    /// Parses `extend union Name Directives? UnionMemberTypes?`.
    fn parse_union_type_extension(&mut self) -> Result<UnionTypeExtension<'src>, Error> {
        let pos = self.cur_pos();
        self.expect_literal_and_advance("extend")?;
        self.expect_literal_and_advance("union")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives()?;

        let types = if self.cur.kind == TokenKind::Equals {
            self.parse_union_member_types()?
        } else {
            Vec::new()
        };

        if directives.is_empty() && types.is_empty() {
            return Err(self.error_at(
                pos,
                ParseErrorKind::ExtensionRequiresModification {
                    construct: "union",
                    requirement: "directives or member types",
                },
            ));
        }

        Ok(UnionTypeExtension {
            pos,
            name,
            directives,
            types,
        })
    }

    /// Parses `extend enum Name Directives? EnumValuesDefinition?`.
    fn parse_enum_type_extension(&mut self) -> Result<EnumTypeExtension<'src>, Error> {
        let pos = self.cur_pos();
        self.expect_literal_and_advance("extend")?;
        self.expect_literal_and_advance("enum")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives()?;

        let values = if self.cur.kind == TokenKind::BraceOpen {
            self.parse_enum_values_definition()?
        } else {
            Vec::new()
        };

        if directives.is_empty() && values.is_empty() {
            return Err(self.error_at(
                pos,
                ParseErrorKind::ExtensionRequiresModification {
                    construct: "enum",
                    requirement: "directives or enum values",
                },
            ));
        }

        Ok(EnumTypeExtension {
            pos,
            name,
            directives,
            values,
        })
    }

    /// Parses `extend input Name Directives? InputFieldsDefinition?`.
    fn parse_input_object_type_extension(
        &mut self,
    ) -> Result<InputObjectTypeExtension<'src>, Error> {
        let pos = self.cur_pos();
        self.expect_literal_and_advance("extend")?;
        self.expect_literal_and_advance("input")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives()?;

        let fields = if self.cur.kind == TokenKind::BraceOpen {
            self.parse_input_fields_definition()?
        } else {
            Vec::new()
        };

        if directives.is_empty() && fields.is_empty() {
            return Err(self.error_at(
                pos,
                ParseErrorKind::ExtensionRequiresModification {
                    construct: "input",
                    requirement: "directives or input fields",
                },
            ));
        }

        Ok(InputObjectTypeExtension {
            pos,
            name,
            directives,
            fields,
        })
    }
}

/// `true` for the token kinds that can carry a description.
fn is_description(kind: TokenKind) -> bool {
    matches!(kind, TokenKind::String | TokenKind::BlockString)
}
