/// A position in GraphQL source text.
///
/// This is a pure data struct with no mutation methods. The lexer computes
/// position values as it scans input, and the parser copies them onto AST
/// nodes.
///
/// # Indexing Convention
///
/// - `offset`: byte offset from the start of the document (0-based)
/// - `line`: line number (1-based: the first line is 1)
/// - `column`: code-point column within the current line (1-based). Every
///   code point advances the column by exactly 1 - a tab counts as one
///   column, and so does a 4-byte emoji.
///
/// Line counting folds line terminators the way the lexer does: a bare LF,
/// a bare CR, and a CR LF pair each start exactly one new line, while an LF
/// immediately followed by a CR starts two.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SourcePosition {
    /// Byte offset from the start of the document (0-based).
    pub offset: usize,

    /// Line number (1-based).
    pub line: usize,

    /// Code-point column within the current line (1-based).
    pub column: usize,
}

impl SourcePosition {
    /// Creates a new `SourcePosition`.
    pub fn new(offset: usize, line: usize, column: usize) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }
}
