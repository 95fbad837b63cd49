//! A GraphQL front-end: a streaming lexer and a recursive-descent parser
//! producing a typed AST for GraphQL documents, covering both the
//! Executable and Type System sublanguages.
//!
//! The crate performs no semantic checking beyond what the grammar itself
//! enforces - duplicate fields, type existence, and directive locations are
//! a validator's problem. There is no I/O and no internal concurrency:
//! [`parse`] is a synchronous function from `&str` to a [`Document`] or an
//! [`Error`].
//!
//! # Example
//!
//! ```rust
//! use gqlparse::ast::{Definition, ExecutableDefinition};
//!
//! let doc = gqlparse::parse("query GetUser { user { name } }").unwrap();
//! assert!(matches!(
//!     doc.definitions[0],
//!     Definition::Executable(ExecutableDefinition::Operation(_)),
//! ));
//! ```
//!
//! Token values and AST strings borrow from the input wherever no decoding
//! is required, so the input buffer must outlive the parsed document.
//!
//! [`Document`]: ast::Document

pub mod ast;
mod error;
mod lex_error;
mod lexer;
mod parse_error;
mod parser;
mod source_position;
pub mod token;

pub use error::Error;
pub use lex_error::LexError;
pub use lex_error::LexErrorKind;
pub use lexer::Lexer;
pub use parse_error::ParseError;
pub use parse_error::ParseErrorKind;
pub use parser::Parser;
pub use source_position::SourcePosition;
pub use token::Token;
pub use token::TokenKind;

/// Parses a complete GraphQL document from source text.
///
/// This is the convenience entry point wrapping [`Lexer`] and [`Parser`].
/// The first lexical or syntactic error aborts the parse; no partial AST
/// is returned.
pub fn parse(input: &str) -> Result<ast::Document<'_>, Error> {
    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer)?;
    parser.parse_document()
}

#[cfg(test)]
mod tests;
