//! Shared helpers for lexer and parser tests.

use crate::ast::Definition;
use crate::ast::Document;
use crate::ast::ExecutableDefinition;
use crate::ast::Field;
use crate::ast::FragmentDefinition;
use crate::ast::OperationDefinition;
use crate::ast::Selection;
use crate::ast::SelectionSet;
use crate::ast::TypeSystemDefinition;
use crate::ast::TypeSystemExtension;
use crate::token::Token;
use crate::token::TokenKind;
use crate::Error;
use crate::LexError;
use crate::Lexer;
use std::borrow::Cow;

/// Builds an expected token. `Cow` compares by content, so borrowed
/// expectations match owned actuals.
pub fn tok(
    kind: TokenKind,
    literal: &'static str,
    start: usize,
    end: usize,
    line: usize,
    column: usize,
) -> Token<'static> {
    Token {
        kind,
        literal: Cow::Borrowed(literal),
        start,
        end,
        line,
        column,
    }
}

/// Lexes the first token, panicking on error.
pub fn lex_first(input: &str) -> Token<'_> {
    let mut lexer = Lexer::new(input);
    match lexer.next_token() {
        Ok(token) => token,
        Err(err) => panic!("unexpected lex error for {input:?}: {err}"),
    }
}

/// Lexes the whole input into a token vector ending with the Eof token.
pub fn lex_all(input: &str) -> Vec<Token<'_>> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();
    loop {
        match lexer.next_token() {
            Ok(token) => {
                let done = token.kind == TokenKind::Eof;
                tokens.push(token);
                if done {
                    return tokens;
                }
            }
            Err(err) => panic!("unexpected lex error for {input:?}: {err}"),
        }
    }
}

/// Lexes until the first error, panicking if the input lexes cleanly.
pub fn lex_err(input: &str) -> LexError {
    let mut lexer = Lexer::new(input);
    loop {
        match lexer.next_token() {
            Err(err) => return err,
            Ok(token) if token.kind == TokenKind::Eof => {
                panic!("expected a lex error for {input:?}")
            }
            Ok(_) => {}
        }
    }
}

/// Parses a document, panicking on error.
pub fn parse_ok(input: &str) -> Document<'_> {
    match crate::parse(input) {
        Ok(doc) => doc,
        Err(err) => panic!("unexpected parse failure for {input:?}: {err}"),
    }
}

/// Parses a document, panicking unless it fails.
pub fn parse_err(input: &str) -> Error {
    match crate::parse(input) {
        Ok(_) => panic!("expected a parse failure for {input:?}"),
        Err(err) => err,
    }
}

/// Parses a document expected to hold exactly one operation definition.
pub fn as_operation<'a, 'src>(def: &'a Definition<'src>) -> &'a OperationDefinition<'src> {
    match def {
        Definition::Executable(ExecutableDefinition::Operation(op)) => op,
        other => panic!("expected an operation definition, got {other:?}"),
    }
}

pub fn as_fragment<'a, 'src>(def: &'a Definition<'src>) -> &'a FragmentDefinition<'src> {
    match def {
        Definition::Executable(ExecutableDefinition::Fragment(frag)) => frag,
        other => panic!("expected a fragment definition, got {other:?}"),
    }
}

pub fn as_type_system<'a, 'src>(
    def: &'a Definition<'src>,
) -> &'a TypeSystemDefinition<'src> {
    match def {
        Definition::TypeSystem(def) => def,
        other => panic!("expected a type-system definition, got {other:?}"),
    }
}

pub fn as_extension<'a, 'src>(def: &'a Definition<'src>) -> &'a TypeSystemExtension<'src> {
    match def {
        Definition::Extension(ext) => ext,
        other => panic!("expected a type-system extension, got {other:?}"),
    }
}

/// The first selection of a selection set, which must be a field.
pub fn first_field<'a, 'src>(set: &'a SelectionSet<'src>) -> &'a Field<'src> {
    match &set.selections[0] {
        Selection::Field(field) => field,
        other => panic!("expected a field selection, got {other:?}"),
    }
}
