use crate::LexError;
use crate::ParseError;

/// Any error produced while turning source text into a
/// [`Document`](crate::ast::Document).
///
/// The two variants are the lex-vs-parse discriminator: [`LexError`] means a
/// malformed token, [`ParseError`] means well-formed tokens in an order the
/// grammar rejects. Both render as `Error at L:C: <message>`.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    /// A malformed token.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// A grammar violation.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl Error {
    /// Returns the 1-based line of the error location.
    pub fn line(&self) -> usize {
        match self {
            Error::Lex(err) => err.line,
            Error::Parse(err) => err.line,
        }
    }

    /// Returns the 1-based column of the error location.
    pub fn column(&self) -> usize {
        match self {
            Error::Lex(err) => err.column,
            Error::Parse(err) => err.column,
        }
    }
}
