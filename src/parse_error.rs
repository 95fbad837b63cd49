use crate::token::TokenKind;

/// Categorizes syntactic errors for programmatic handling.
///
/// Each variant's `#[error(...)]` string is the stable human-readable
/// message; [`ParseError`] prefixes it with the source location.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ParseErrorKind {
    /// A specific token kind was required but something else appeared.
    #[error("expected {expected}, got {found}")]
    ExpectedToken {
        expected: TokenKind,
        found: TokenKind,
    },

    /// One of several token kinds was required but something else
    /// appeared.
    #[error("{}", format_expected_one_of(.expected, .found))]
    ExpectedOneOf {
        expected: Vec<TokenKind>,
        found: TokenKind,
    },

    /// A specific keyword literal was required but something else
    /// appeared.
    #[error("expected {expected}, got {found}")]
    ExpectedLiteral { expected: String, found: String },

    /// A top-level definition started with a name that introduces no known
    /// definition kind.
    #[error("unexpected keyword {0}")]
    UnexpectedKeyword(String),

    /// A token that cannot start a type reference.
    #[error("unexpected token in type: {0}")]
    UnexpectedTypeToken(TokenKind),

    /// A token that cannot start a value.
    #[error("unexpected value token: {0}")]
    UnexpectedValueToken(TokenKind),

    /// `extend` followed by a keyword that names no extensible construct.
    #[error("unexpected extension: {0}")]
    UnexpectedExtension(String),

    /// A root operation type other than `query`, `mutation`, or
    /// `subscription`.
    #[error("unknown root operation type: '{0}'")]
    UnknownRootOperationType(String),

    /// A name with special meaning used where it is not allowed - `on` as
    /// a fragment name, `true`/`false`/`null` as an enum value.
    #[error("'{name}' may not be used as {context}")]
    ReservedName {
        name: String,
        context: &'static str,
    },

    /// A braced or parenthesized group that requires at least one entry
    /// was empty.
    #[error("{construct} cannot be empty")]
    EmptyConstruct { construct: &'static str },

    /// A type-system extension that introduces no modification.
    #[error("extend {construct} must add {requirement}")]
    ExtensionRequiresModification {
        construct: &'static str,
        requirement: &'static str,
    },

    /// Nesting of selection sets, list/object values, or list types
    /// exceeded the parser's recursion limit.
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,
}

/// A syntactic error with its source location.
///
/// `line`/`column` are 1-based and point at the token that made the parse
/// fail.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("Error at {line}:{column}: {kind}")]
pub struct ParseError {
    /// 1-based line of the offending token.
    pub line: usize,

    /// 1-based column of the offending token.
    pub column: usize,

    /// What went wrong.
    pub kind: ParseErrorKind,
}

/// Renders the `ExpectedOneOf` message:
/// `expected one of [String, BlockString], got Name`.
fn format_expected_one_of(expected: &[TokenKind], found: &TokenKind) -> String {
    let mut list = String::new();
    for (i, kind) in expected.iter().enumerate() {
        if i > 0 {
            list.push_str(", ");
        }
        list.push_str(&kind.to_string());
    }
    format!("expected one of [{list}], got {found}")
}
