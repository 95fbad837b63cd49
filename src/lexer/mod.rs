//! A streaming lexer for GraphQL source text.
//!
//! [`Lexer`] walks a UTF-8 input and produces [`Token`]s one at a time,
//! on demand. Token values borrow from the source wherever no decoding is
//! required (names, numbers, comments); string and block-string values are
//! freshly allocated because escape processing and indentation
//! normalization are lossy.
//!
//! Comments are *returned* (as [`TokenKind::Comment`]) rather than skipped,
//! so callers that want them can have them; the parser drops them by
//! pulling the next token.

mod block_string;
mod cursor;
mod escapes;

use crate::lexer::cursor::CharCursor;
use crate::token::Token;
use crate::token::TokenKind;
use crate::LexError;
use crate::LexErrorKind;
use crate::SourcePosition;
use std::borrow::Cow;

/// A streaming GraphQL lexer.
///
/// # Example
///
/// ```rust
/// use gqlparse::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("{ name }");
/// let token = lexer.next_token().unwrap();
/// assert_eq!(token.kind, TokenKind::BraceOpen);
/// ```
pub struct Lexer<'src> {
    /// The full source text.
    input: &'src str,

    /// Cursor over the source code points.
    cursor: CharCursor<'src>,

    /// Position of the backslash that opened the escape sequence currently
    /// being read, if any. Escape errors report this position, and the
    /// "captured sequence" in their messages runs from here to the current
    /// read offset.
    capture: Option<SourcePosition>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the first code point of `input`.
    pub fn new(input: &'src str) -> Self {
        Self {
            input,
            cursor: CharCursor::new(input),
            capture: None,
        }
    }

    /// Returns the next significant token.
    ///
    /// Insignificant characters - space, tab, line terminators, and commas
    /// - are skipped first. At end of input an `Eof` token is returned, on
    /// this call and every subsequent one.
    pub fn next_token(&mut self) -> Result<Token<'src>, LexError> {
        self.skip_insignificant();
        self.capture = None;

        let start = self.cursor.offset();
        let line = self.cursor.line();
        let column = self.cursor.column();

        let (kind, literal): (TokenKind, Cow<'src, str>) = match self.cursor.current() {
            Some(ch) if is_name_start(ch) => {
                (TokenKind::Name, Cow::Borrowed(self.read_name()))
            }
            Some(ch) if ch.is_ascii_digit() || ch == '-' => {
                let (kind, literal) = self.read_number()?;
                (kind, Cow::Borrowed(literal))
            }
            Some('!') => self.punctuator(TokenKind::Bang),
            Some('$') => self.punctuator(TokenKind::Dollar),
            Some('&') => self.punctuator(TokenKind::Amp),
            Some('(') => self.punctuator(TokenKind::ParenOpen),
            Some(')') => self.punctuator(TokenKind::ParenClose),
            Some('.') => match self.cursor.peek() {
                Some('.') if self.cursor.peek_nth(1) == Some('.') => {
                    self.cursor.advance();
                    self.cursor.advance();
                    self.cursor.advance();
                    (TokenKind::Spread, Cow::Borrowed(""))
                }
                Some(ch) if ch.is_ascii_digit() => {
                    return Err(self.error(LexErrorKind::ExpectedDigitBeforeDot));
                }
                _ => return Err(self.error(LexErrorKind::UnexpectedDot)),
            },
            Some(':') => self.punctuator(TokenKind::Colon),
            Some('=') => self.punctuator(TokenKind::Equals),
            Some('@') => self.punctuator(TokenKind::At),
            Some('[') => self.punctuator(TokenKind::BracketOpen),
            Some(']') => self.punctuator(TokenKind::BracketClose),
            Some('{') => self.punctuator(TokenKind::BraceOpen),
            Some('|') => self.punctuator(TokenKind::Pipe),
            Some('}') => self.punctuator(TokenKind::BraceClose),
            Some('"') => {
                if self.cursor.peek() == Some('"') && self.cursor.peek_nth(1) == Some('"') {
                    (TokenKind::BlockString, Cow::Owned(self.read_block_string()?))
                } else {
                    (TokenKind::String, Cow::Owned(self.read_string()?))
                }
            }
            Some('#') => (TokenKind::Comment, Cow::Borrowed(self.read_comment())),
            None => (TokenKind::Eof, Cow::Borrowed("")),
            Some(ch) => {
                return Err(
                    self.error(LexErrorKind::UnexpectedCharacter(print_char(Some(ch))))
                );
            }
        };

        Ok(Token {
            kind,
            literal,
            start,
            end: self.cursor.offset(),
            line,
            column,
        })
    }

    // =========================================================================
    // Scanning helpers
    // =========================================================================

    /// Consumes a single-character punctuator.
    fn punctuator(&mut self, kind: TokenKind) -> (TokenKind, Cow<'src, str>) {
        self.cursor.advance();
        (kind, Cow::Borrowed(""))
    }

    /// Skips whitespace, line terminators, and commas.
    ///
    /// GraphQL treats commas exactly like whitespace. Comments are *not*
    /// skipped here; they are returned as tokens.
    fn skip_insignificant(&mut self) {
        while let Some(ch) = self.cursor.current() {
            if is_white_space(ch) || is_line_terminator(ch) || ch == ',' {
                self.cursor.advance();
            } else {
                break;
            }
        }
    }

    /// Reads a name: a greedy run of `[_0-9A-Za-z]`. The first character
    /// has already been validated as a name-start.
    fn read_name(&mut self) -> &'src str {
        let start = self.cursor.offset();
        while let Some(ch) = self.cursor.current() {
            if is_name_continue(ch) {
                self.cursor.advance();
            } else {
                break;
            }
        }
        &self.input[start..self.cursor.offset()]
    }

    /// Reads an integer or float literal.
    ///
    /// Grammar: `'-'? IntegerPart FractionalPart? ExponentPart?` where a
    /// leading `0` may not be followed by another digit. Numeric literals
    /// may not be immediately followed by a `.` or a name-start character
    /// (<https://spec.graphql.org/draft/#note-dea61>).
    fn read_number(&mut self) -> Result<(TokenKind, &'src str), LexError> {
        let start = self.cursor.offset();
        let mut kind = TokenKind::Int;

        if self.cursor.current() == Some('-') {
            self.cursor.advance();
        }

        match self.cursor.current() {
            Some('0') => {
                self.cursor.advance();
                if let Some(ch) = self.cursor.current() {
                    if ch.is_ascii_digit() {
                        return Err(self.error(LexErrorKind::UnexpectedDigitAfterZero(
                            print_char(Some(ch)),
                        )));
                    }
                }
            }
            Some(ch) if ch.is_ascii_digit() => {
                self.read_digits();
            }
            other => {
                return Err(self.error(LexErrorKind::ExpectedDigit(print_char(other))));
            }
        }

        if self.cursor.current() == Some('.') {
            kind = TokenKind::Float;
            self.cursor.advance();
            self.expect_digits()?;
        }

        if matches!(self.cursor.current(), Some('e') | Some('E')) {
            kind = TokenKind::Float;
            self.cursor.advance();
            if matches!(self.cursor.current(), Some('+') | Some('-')) {
                self.cursor.advance();
            }
            self.expect_digits()?;
        }

        match self.cursor.current() {
            Some(ch) if ch == '.' || is_name_start(ch) => {
                Err(self.error(LexErrorKind::ExpectedDigit(print_char(Some(ch)))))
            }
            _ => Ok((kind, &self.input[start..self.cursor.offset()])),
        }
    }

    /// Consumes a run of ASCII digits.
    fn read_digits(&mut self) {
        while let Some(ch) = self.cursor.current() {
            if ch.is_ascii_digit() {
                self.cursor.advance();
            } else {
                break;
            }
        }
    }

    /// Requires at least one digit at the current position, then consumes
    /// the whole run.
    fn expect_digits(&mut self) -> Result<(), LexError> {
        match self.cursor.current() {
            Some(ch) if ch.is_ascii_digit() => {
                self.read_digits();
                Ok(())
            }
            other => Err(self.error(LexErrorKind::ExpectedDigit(print_char(other)))),
        }
    }

    /// Reads a `"`-delimited string, resolving escapes.
    ///
    /// See the
    /// [String Value](https://spec.graphql.org/draft/#StringValue) grammar.
    fn read_string(&mut self) -> Result<String, LexError> {
        let mut value = String::new();

        self.cursor.advance(); // consume opening "

        loop {
            match self.cursor.current() {
                Some('"') => break,
                None => return Err(self.error(LexErrorKind::UnterminatedString)),
                Some(ch) if is_line_terminator(ch) => {
                    return Err(self.error(LexErrorKind::UnterminatedString));
                }
                Some(ch) if (ch as u32) < 0x20 => {
                    return Err(
                        self.error(LexErrorKind::InvalidCharacterInString(ch as u32))
                    );
                }
                Some('\\') => {
                    self.capture_start();
                    self.cursor.advance();
                    match self.cursor.current() {
                        Some('u') => {
                            let ch = self.read_escaped_unicode()?;
                            value.push(ch);
                        }
                        other => match other.and_then(escape_char) {
                            Some(esc) => value.push(esc),
                            None => {
                                return Err(self.error(
                                    LexErrorKind::UnknownEscapeSequence(print_char(other)),
                                ));
                            }
                        },
                    }
                    self.capture = None;
                }
                Some(ch) => value.push(ch),
            }
            self.cursor.advance();
        }

        self.cursor.advance(); // consume closing "
        Ok(value)
    }

    /// Reads a comment: `#` through the end of the line. The returned
    /// literal excludes the leading `#`.
    fn read_comment(&mut self) -> &'src str {
        self.cursor.advance(); // consume '#'
        let start = self.cursor.offset();
        while let Some(ch) = self.cursor.current() {
            if is_line_terminator(ch) {
                break;
            }
            self.cursor.advance();
        }
        &self.input[start..self.cursor.offset()]
    }

    // =========================================================================
    // Error helpers
    // =========================================================================

    /// Builds a [`LexError`] at the capture position if one is set (escape
    /// sequences), otherwise at the current cursor position.
    fn error(&self, kind: LexErrorKind) -> LexError {
        let pos = self.capture.unwrap_or_else(|| self.cursor.position());
        LexError {
            line: pos.line,
            column: pos.column,
            kind,
        }
    }

    /// Marks the current position (the backslash) as the start of an
    /// escape sequence.
    fn capture_start(&mut self) {
        self.capture = Some(self.cursor.position());
    }

    /// The source slice from the capture position through the current read
    /// offset, rendered into escape-sequence error messages.
    fn captured_sequence(&self) -> &'src str {
        match self.capture {
            Some(pos) => &self.input[pos.offset..self.cursor.rd_offset()],
            None => "",
        }
    }
}

// =============================================================================
// Character classification
// =============================================================================

/// Returns `true` if `ch` can start a GraphQL name: `_` or an ASCII
/// letter.
fn is_name_start(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}

/// Returns `true` if `ch` can continue a GraphQL name: `_`, an ASCII
/// letter, or an ASCII digit.
fn is_name_continue(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphanumeric()
}

/// Returns `true` for LF and CR.
fn is_line_terminator(ch: char) -> bool {
    ch == '\n' || ch == '\r'
}

/// Returns `true` for space and tab.
fn is_white_space(ch: char) -> bool {
    ch == ' ' || ch == '\t'
}

/// Maps a single-character escape to its value: `\" \\ \/ \b \f \n \r \t`.
fn escape_char(ch: char) -> Option<char> {
    match ch {
        '"' => Some('"'),
        '\\' => Some('\\'),
        '/' => Some('/'),
        'b' => Some('\u{0008}'),
        'f' => Some('\u{000C}'),
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        _ => None,
    }
}

/// Renders a code point for error messages: `<EOF>` for end of input, `\"`
/// for a double quote, the character itself for printable ASCII, and
/// `U+XXXX` otherwise.
fn print_char(ch: Option<char>) -> String {
    match ch {
        None => "<EOF>".to_string(),
        Some('"') => "\\\"".to_string(),
        Some(ch) if (' '..='~').contains(&ch) => ch.to_string(),
        Some(ch) => format!("U+{:04X}", ch as u32),
    }
}
