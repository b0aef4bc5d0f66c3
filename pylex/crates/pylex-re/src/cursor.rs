//! Byte cursor for traversing rule files.
//!
//! Rule files are treated as raw bytes: every byte value is a symbol of the
//! alphabet, so the cursor never decodes UTF-8. It tracks line/column
//! information for error reporting.

/// A position in the rule source, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Line number (1-based).
    pub line: u32,
    /// Column number (1-based, in bytes).
    pub column: u32,
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A cursor for traversing rule source byte by byte.
///
/// # Example
///
/// ```
/// use pylex_re::cursor::Cursor;
///
/// let mut cursor = Cursor::new(b"a\nb");
/// assert_eq!(cursor.bump(), Some(b'a'));
/// assert_eq!(cursor.bump(), Some(b'\n'));
/// assert_eq!(cursor.position().line, 2);
/// ```
pub struct Cursor<'a> {
    /// The source bytes being traversed.
    source: &'a [u8],

    /// Current byte offset in the source.
    offset: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a [u8]) -> Self {
        Self {
            source,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the byte under the cursor without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.source.get(self.offset).copied()
    }

    /// Consumes and returns the byte under the cursor.
    ///
    /// Returns `None` once the end of the source is reached; further calls
    /// keep returning `None`.
    #[inline]
    pub fn bump(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.offset += 1;
        if byte == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(byte)
    }

    /// Returns true if the cursor is at the end of the source.
    pub fn is_at_end(&self) -> bool {
        self.offset >= self.source.len()
    }

    /// Returns the current line/column.
    pub fn position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
        }
    }

    /// Returns the current byte offset.
    pub fn offset(&self) -> usize {
        self.offset
    }
}
