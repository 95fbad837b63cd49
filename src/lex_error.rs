/// Categorizes lexical errors for programmatic handling.
///
/// Each variant's `#[error(...)]` string is the stable human-readable
/// message; [`LexError`] prefixes it with the source location. Messages are
/// relied on by tests - treat them as part of the public contract.
///
/// Characters embedded in messages are pre-rendered by the lexer: printable
/// ASCII as-is, `"` as `\"`, end of input as `<EOF>`, and everything else
/// as `U+XXXX`. Escape-sequence variants carry the *captured sequence* -
/// the source slice from the initiating backslash through the last
/// character read.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum LexErrorKind {
    /// A character that cannot start any token.
    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(String),

    /// A `.` that is not part of a `...` spread and not followed by a
    /// digit.
    #[error("unexpected '.'")]
    UnexpectedDot,

    /// A `.` directly followed by a digit, e.g. `.5` - GraphQL numbers
    /// require an integer part.
    #[error("invalid number, expected digit before '.'")]
    ExpectedDigitBeforeDot,

    /// A leading `0` followed by another digit, e.g. `00` or `01`.
    #[error("invalid number, unexpected digit after 0: '{0}'")]
    UnexpectedDigitAfterZero(String),

    /// A digit was required but something else appeared. Covers missing
    /// integer/fraction/exponent digits and the trailing `.`/name-start
    /// restriction on numeric literals.
    #[error("invalid number, expected digit but got '{0}'")]
    ExpectedDigit(String),

    /// EOF or a raw line terminator inside a `"` string.
    #[error("unterminated string")]
    UnterminatedString,

    /// A control character below U+0020 inside a `"` string.
    #[error("invalid character in string literal: '\\u{0:04X}'")]
    InvalidCharacterInString(u32),

    /// A backslash escape other than
    /// `\" \\ \/ \b \f \n \r \t \u`.
    #[error("unknown escape sequence '\\{0}'")]
    UnknownEscapeSequence(String),

    /// A non-hex character inside a Unicode escape.
    #[error("invalid hex digit '{digit}' in Unicode escape sequence '{sequence}'")]
    InvalidHexDigit { digit: String, sequence: String },

    /// `\u{}` with no digits between the braces.
    #[error("unicode escape sequence cannot be empty")]
    EmptyUnicodeEscape,

    /// `\u{...}` with more than 8 hex digits.
    #[error("unicode escape sequence '{0}' is too long")]
    UnicodeEscapeTooLong(String),

    /// A variable-width escape whose value is not a Unicode scalar value
    /// (a surrogate, or above U+10FFFF).
    #[error("unicode escape sequence '{0}' is out of range or invalid")]
    UnicodeOutOfRange(String),

    /// A fixed-width escape whose value is a trailing surrogate or
    /// otherwise not a scalar value and not a leading surrogate.
    #[error("invalid Unicode escape sequence '{0}'")]
    InvalidUnicodeEscape(String),

    /// A leading surrogate not followed by `\`.
    #[error("expected '\\u' for trailing surrogate in Unicode escape sequence")]
    ExpectedTrailingSurrogateEscape,

    /// A leading surrogate followed by `\` but not `\u`.
    #[error("expected 'u' after '\\' in Unicode escape sequence")]
    ExpectedUnicodeEscapeU,

    /// A `\uXXXX\uXXXX` pair whose second value is not a trailing
    /// surrogate.
    #[error("invalid trailing surrogate in Unicode escape sequence '{0}'")]
    InvalidTrailingSurrogate(String),

    /// EOF inside a `\u{...}` escape.
    #[error("unterminated Unicode escape sequence")]
    UnterminatedUnicodeEscape,

    /// EOF before the closing `"""` of a block string.
    #[error("unterminated block string")]
    UnterminatedBlockString,
}

/// A lexical error with its source location.
///
/// `line`/`column` are 1-based and point at the offending character - for
/// escape-sequence errors, at the initiating backslash.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("Error at {line}:{column}: {kind}")]
pub struct LexError {
    /// 1-based line of the offending position.
    pub line: usize,

    /// 1-based column of the offending position.
    pub column: usize,

    /// What went wrong.
    pub kind: LexErrorKind,
}
