use std::fmt::{self, Display};

/// A point in selector source text.
///
/// Selectors found in themes are occasionally split across several lines, so besides the byte
/// offset a position also carries the line and column it falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// The byte offset from the start of the text.
    pub offset: usize,

    /// The line number (1-based).
    pub line: usize,

    /// The column number (1-based), counted in characters.
    pub column: usize,
}

impl Position {
    /// Locates the byte `offset` in `src`.
    ///
    /// Offsets past the end of `src` are clamped to its length.
    pub fn locate(src: &str, offset: usize) -> Self {
        let offset = offset.min(src.len());
        let before = src.get(..offset).unwrap_or(src);
        let line_start = before.rfind('\n').map(|idx| idx + 1).unwrap_or(0);

        Self {
            offset,
            line: before.matches('\n').count() + 1,
            column: before[line_start..].chars().count() + 1,
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}:{}", self.line, self.column)
    }
}
