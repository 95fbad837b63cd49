use crate::SourcePosition;

/// A cursor over UTF-8 source text, yielding one code point at a time with
/// byte-offset, 1-based line, and 1-based column coordinates.
///
/// End of input is modeled as `current() == None`.
///
/// # Line terminators
///
/// A bare LF, a bare CR, and a CR LF pair each count as exactly one line
/// break: when the cursor advances off a CR it looks ahead for a following
/// LF and skips it as part of the same break. An LF immediately followed by
/// a CR counts as two breaks - the LF increments the line, then the CR
/// increments it again.
pub(crate) struct CharCursor<'src> {
    /// The full source text.
    input: &'src str,

    /// The current code point, or `None` at end of input.
    ch: Option<char>,

    /// Byte offset of the current code point (`input.len()` at EOF).
    offset: usize,

    /// Byte offset of the next code point to read (after the current one).
    rd_offset: usize,

    /// 1-based line of the current code point.
    line: usize,

    /// 1-based column of the current code point. Tabs do not expand.
    column: usize,
}

impl<'src> CharCursor<'src> {
    /// Creates a cursor positioned at the first code point of `input`.
    pub(crate) fn new(input: &'src str) -> Self {
        let mut cursor = Self {
            input,
            ch: None,
            offset: 0,
            rd_offset: 0,
            line: 1,
            column: 0,
        };
        cursor.advance();
        cursor
    }

    /// Returns the current code point, or `None` at end of input.
    pub(crate) fn current(&self) -> Option<char> {
        self.ch
    }

    /// Byte offset of the current code point.
    pub(crate) fn offset(&self) -> usize {
        self.offset
    }

    /// Byte offset just past the current code point. Used to delimit
    /// captured escape sequences.
    pub(crate) fn rd_offset(&self) -> usize {
        self.rd_offset
    }

    /// 1-based line of the current code point.
    pub(crate) fn line(&self) -> usize {
        self.line
    }

    /// 1-based column of the current code point.
    pub(crate) fn column(&self) -> usize {
        self.column
    }

    /// The position of the current code point.
    pub(crate) fn position(&self) -> SourcePosition {
        SourcePosition::new(self.offset, self.line, self.column)
    }

    /// Peeks at the code point after the current one without advancing.
    pub(crate) fn peek(&self) -> Option<char> {
        self.peek_nth(0)
    }

    /// Peeks `n` code points past the one returned by [`peek`](Self::peek).
    /// `peek_nth(0)` is equivalent to `peek()`.
    pub(crate) fn peek_nth(&self, n: usize) -> Option<char> {
        self.input.get(self.rd_offset..)?.chars().nth(n)
    }

    /// Moves to the next code point, updating line/column bookkeeping.
    ///
    /// Leaving a CR consumes a directly following LF as part of the same
    /// line break. At end of input this is a no-op apart from the column
    /// increment, so callers must check [`current`](Self::current) first.
    pub(crate) fn advance(&mut self) {
        match self.ch {
            Some('\r') => {
                self.line += 1;
                self.column = 0;
                if self.input.as_bytes().get(self.rd_offset) == Some(&b'\n') {
                    self.rd_offset += 1;
                }
            }
            Some('\n') => {
                self.line += 1;
                self.column = 0;
            }
            _ => {}
        }

        match self.input.get(self.rd_offset..).and_then(|s| s.chars().next()) {
            Some(ch) => {
                self.offset = self.rd_offset;
                self.ch = Some(ch);
                self.rd_offset += ch.len_utf8();
            }
            None => {
                self.ch = None;
                self.offset = self.input.len();
            }
        }
        self.column += 1;
    }
}
