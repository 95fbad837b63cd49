//! Block strings: `"""`-delimited literals and their indentation
//! normalization.
//!
//! See the [Block String](https://spec.graphql.org/draft/#BlockString)
//! grammar. Inside the body only `\"""` is an escape (it yields a literal
//! `"""`); every other backslash is preserved verbatim.

use crate::lexer::Lexer;
use crate::LexError;
use crate::LexErrorKind;

impl<'src> Lexer<'src> {
    /// Reads a `"""`-delimited block string and returns its normalized
    /// value. The cursor sits on the first `"`.
    pub(super) fn read_block_string(&mut self) -> Result<String, LexError> {
        self.cursor.advance(); // consume first "
        self.cursor.advance(); // consume second "
        self.cursor.advance(); // consume third "

        let mut raw = String::new();

        loop {
            match self.cursor.current() {
                None => {
                    return Err(self.error(LexErrorKind::UnterminatedBlockString));
                }
                Some('"')
                    if self.cursor.peek() == Some('"')
                        && self.cursor.peek_nth(1) == Some('"') =>
                {
                    self.cursor.advance();
                    self.cursor.advance();
                    self.cursor.advance();
                    break;
                }
                Some('\\')
                    if self.cursor.peek() == Some('"')
                        && self.cursor.peek_nth(1) == Some('"')
                        && self.cursor.peek_nth(2) == Some('"') =>
                {
                    self.cursor.advance();
                    self.cursor.advance();
                    self.cursor.advance();
                    self.cursor.advance();
                    raw.push_str("\"\"\"");
                }
                Some(ch) => {
                    raw.push(ch);
                    self.cursor.advance();
                }
            }
        }

        Ok(normalize_block_string(&raw))
    }
}

/// Normalizes a raw block-string body per the GraphQL spec:
///
/// 1. Split on line terminators (LF, CR, and CRLF each delimit once).
/// 2. Compute the common indent: the minimum leading-whitespace count
///    across all lines except the first, among lines with any
///    non-whitespace content.
/// 3. Strip that many characters from every line except the first. Lines
///    shorter than the common indent (all-whitespace stubs) are left
///    intact.
/// 4. Drop leading and trailing blank lines.
/// 5. Join with `\n`.
///
/// The first retained line may keep indentation the rest lost - the first
/// source line is excluded from both the computation and the stripping.
fn normalize_block_string(raw: &str) -> String {
    let mut lines = split_lines(raw);

    let mut common_indent: Option<usize> = None;
    for line in lines.iter().skip(1) {
        let indent = leading_whitespace_count(line);
        if indent < line.len() {
            common_indent = Some(match common_indent {
                Some(current) => current.min(indent),
                None => indent,
            });
        }
    }

    if let Some(indent) = common_indent {
        if indent > 0 {
            for line in lines.iter_mut().skip(1) {
                if line.len() >= indent {
                    *line = &line[indent..];
                }
            }
        }
    }

    let first = lines.iter().position(|line| !is_blank(line));
    match first {
        None => String::new(),
        Some(start) => {
            // rposition is Some whenever position is
            let end = lines
                .iter()
                .rposition(|line| !is_blank(line))
                .map_or(start, |i| i + 1);
            lines[start..end].join("\n")
        }
    }
}

/// Splits on LF, CR, and CRLF, each counting as a single delimiter. Text
/// after the final delimiter forms the last line; a trailing delimiter
/// does not produce a trailing empty line.
fn split_lines(s: &str) -> Vec<&str> {
    let bytes = s.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b == b'\n' || b == b'\r' {
            lines.push(&s[start..i]);
            if b == b'\r' && bytes.get(i + 1) == Some(&b'\n') {
                i += 1;
            }
            start = i + 1;
        }
        i += 1;
    }
    if start < s.len() {
        lines.push(&s[start..]);
    }
    lines
}

/// Counts leading spaces and tabs.
fn leading_whitespace_count(line: &str) -> usize {
    line.chars().take_while(|&ch| ch == ' ' || ch == '\t').count()
}

/// A blank line contains only spaces and tabs.
fn is_blank(line: &str) -> bool {
    line.chars().all(|ch| ch == ' ' || ch == '\t')
}
