use std::fmt;

/// The kind of a lexical token.
///
/// Punctuators, names, numeric literals, string literals, comments, and the
/// end-of-input marker. The token's semantic value lives in
/// [`Token::literal`](crate::token::Token::literal), not here.
///
/// See the
/// [Lexical Tokens](https://spec.graphql.org/draft/#sec-Language.Source-Text.Lexical-Tokens)
/// section of the GraphQL spec.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TokenKind {
    /// End of input. Emitted on every call once the input is exhausted.
    Eof,

    /// `!`
    Bang,
    /// `$`
    Dollar,
    /// `&`
    Amp,
    /// `(`
    ParenOpen,
    /// `)`
    ParenClose,
    /// `...`
    Spread,
    /// `:`
    Colon,
    /// `=`
    Equals,
    /// `@`
    At,
    /// `[`
    BracketOpen,
    /// `]`
    BracketClose,
    /// `{`
    BraceOpen,
    /// `|`
    Pipe,
    /// `}`
    BraceClose,

    /// A name: `/[_A-Za-z][_0-9A-Za-z]*/`. Keywords (`query`, `type`,
    /// `on`, ...) are ordinary names; the parser disambiguates by literal.
    Name,
    /// An integer literal.
    Int,
    /// A float literal (fractional part, exponent part, or both).
    Float,
    /// A `"`-delimited string. The literal holds the unescaped value.
    String,
    /// A `"""`-delimited block string. The literal holds the normalized
    /// value.
    BlockString,
    /// A `#` comment. The literal holds the text after the `#` up to (but
    /// not including) the line terminator.
    Comment,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TokenKind::Eof => "<EOF>",
            TokenKind::Bang => "`!`",
            TokenKind::Dollar => "`$`",
            TokenKind::Amp => "`&`",
            TokenKind::ParenOpen => "`(`",
            TokenKind::ParenClose => "`)`",
            TokenKind::Spread => "`...`",
            TokenKind::Colon => "`:`",
            TokenKind::Equals => "`=`",
            TokenKind::At => "`@`",
            TokenKind::BracketOpen => "`[`",
            TokenKind::BracketClose => "`]`",
            TokenKind::BraceOpen => "`{`",
            TokenKind::Pipe => "`|`",
            TokenKind::BraceClose => "`}`",
            TokenKind::Name => "Name",
            TokenKind::Int => "Int",
            TokenKind::Float => "Float",
            TokenKind::String => "String",
            TokenKind::BlockString => "BlockString",
            TokenKind::Comment => "Comment",
        };
        f.write_str(s)
    }
}
