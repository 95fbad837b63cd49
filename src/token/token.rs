use crate::token::TokenKind;
use crate::SourcePosition;
use std::borrow::Cow;

/// A lexical token with its semantic value and source location.
///
/// # Literal values
///
/// `literal` is the *semantic* value of the token:
/// - `Name`, `Int`, `Float`: the raw lexeme, borrowed from the source.
/// - `String`: the unescaped content, freshly allocated.
/// - `BlockString`: the normalized value (indentation stripped, blank
///   edge lines removed, lines joined with `\n`), freshly allocated.
/// - `Comment`: the text after `#` up to the line terminator, borrowed.
/// - Punctuators and `Eof`: empty.
///
/// # Location
///
/// `start`/`end` delimit the half-open byte interval `[start, end)` of the
/// full source lexeme - for string tokens this includes the quotes, and for
/// comments the leading `#`. `line`/`column` are the 1-based coordinates of
/// the first character of the lexeme. Invariant:
/// `0 <= start <= end <= input.len()`.
#[derive(Clone, Debug, PartialEq)]
pub struct Token<'src> {
    /// The kind of token.
    pub kind: TokenKind,

    /// The semantic value of the token. Borrows from the source text when
    /// no unescaping/normalization was required.
    pub literal: Cow<'src, str>,

    /// Byte offset of the first character of the lexeme (inclusive).
    pub start: usize,

    /// Byte offset after the last character of the lexeme (exclusive).
    pub end: usize,

    /// 1-based line of the first character of the lexeme.
    pub line: usize,

    /// 1-based column of the first character of the lexeme.
    pub column: usize,
}

impl Token<'_> {
    /// Returns the position of the first character of this token's lexeme.
    pub fn position(&self) -> SourcePosition {
        SourcePosition::new(self.start, self.line, self.column)
    }
}
