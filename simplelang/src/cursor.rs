//! Character scanner.
use itertools::{multipeek, MultiPeek};
use std::str::CharIndices;

/// Character returned when the cursor is beyond the end of the source.
pub const EOF_CHAR: char = '\0';

/// Wrapper for source code that keeps a cursor position.
///
/// Allows forward lookup via peeking.
pub struct Cursor<'a> {
    /// Iterator over UTF-8 encoded source code.
    ///
    /// `MultiPeek` buffers consumed characters so the lexer can look
    /// ahead without indexing into the string, which is impossible
    /// for variable width characters.
    chars: MultiPeek<CharIndices<'a>>,
    /// Byte position and value of the current character.
    current: (usize, char),
    /// Number of bytes in the source.
    len: usize,
    /// Line of the current character, counting from 1.
    line: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            chars: multipeek(source.char_indices()),
            current: (0, EOF_CHAR),
            len: source.len(),
            line: 1,
        }
    }

    /// Advance the cursor and return the new current character.
    ///
    /// Returns [`EOF_CHAR`] once the source is exhausted.
    pub fn next(&mut self) -> char {
        if self.current.1 == '\n' {
            self.line += 1;
        }

        self.current = match self.chars.next() {
            Some(pair) => pair,
            // There is no end-of-file character, so
            // the null-byte stands in for it.
            None => (self.len, EOF_CHAR),
        };

        self.current.1
    }

    /// Current character under the cursor.
    #[inline]
    pub fn current(&self) -> char {
        self.current.1
    }

    /// Character after the current one, without advancing the cursor.
    pub fn peek(&mut self) -> char {
        self.chars.reset_peek();
        let c = self.chars.peek().map(|(_, c)| *c).unwrap_or(EOF_CHAR);
        self.chars.reset_peek();
        c
    }

    /// Byte offset of the current character.
    #[inline]
    pub fn offset(&self) -> u32 {
        self.current.0 as u32
    }

    /// Byte offset of the character after the current one.
    pub fn peek_offset(&mut self) -> u32 {
        self.chars.reset_peek();
        let offset = self.chars.peek().map(|(i, _)| *i).unwrap_or(self.len);
        self.chars.reset_peek();
        offset as u32
    }

    /// Line of the current character.
    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Indicates if the cursor is at the end of the source.
    #[inline]
    pub fn at_end(&self) -> bool {
        self.current.0 >= self.len
    }
}
