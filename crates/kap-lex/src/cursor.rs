//! Byte cursor for traversing source code.
//!
//! Unlike a `char`-oriented cursor, this one walks raw bytes: the scanner
//! built on top of it must be able to classify and report on any byte,
//! including ones that are not valid UTF-8.

/// Column width of a tab stop.
const TAB_SIZE: u32 = 4;

/// A cursor over a byte slice that tracks line and column as it advances.
///
/// # Example
///
/// ```
/// use kap_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new(b"ab");
/// assert_eq!(cursor.current(), Some(b'a'));
/// cursor.advance();
/// assert_eq!(cursor.current(), Some(b'b'));
/// ```
pub struct Cursor<'a> {
    source: &'a [u8],
    position: usize,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a [u8]) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// The byte at the current position, or `None` at end of buffer.
    #[inline]
    pub fn current(&self) -> Option<u8> {
        self.byte_at(0)
    }

    /// The byte `offset` bytes ahead of the current position.
    #[inline]
    pub fn byte_at(&self, offset: usize) -> Option<u8> {
        self.source.get(self.position + offset).copied()
    }

    /// Advances past one byte, updating line/column.
    ///
    /// - `\n` advances the line and resets column to 1.
    /// - `\t` advances the column to the next multiple of [`TAB_SIZE`].
    /// - `\r` does not change the column.
    /// - any other byte advances the column by 1.
    #[inline]
    pub fn advance(&mut self) {
        let Some(b) = self.current() else { return };
        self.position += 1;
        match b {
            b'\n' => {
                self.line += 1;
                self.column = 1;
            }
            b'\t' => {
                self.column += TAB_SIZE - ((self.column - 1) % TAB_SIZE);
            }
            b'\r' => {}
            _ => {
                self.column += 1;
            }
        }
    }

    /// Advances by `count` bytes, applying the same per-byte accounting as
    /// [`Cursor::advance`] to each one.
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.is_at_end() {
                break;
            }
            self.advance();
        }
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn slice_from(&self, start: usize) -> &'a [u8] {
        &self.source[start..self.position]
    }

    pub fn remaining(&self) -> &'a [u8] {
        &self.source[self.position..]
    }

    pub fn byte_len(&self) -> usize {
        self.source.len()
    }

    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            position: self.position,
            line: self.line,
            column: self.column,
        }
    }

    pub fn restore(&mut self, snapshot: CursorSnapshot) {
        self.position = snapshot.position;
        self.line = snapshot.line;
        self.column = snapshot.column;
    }
}

/// A snapshot of cursor state that can be restored later.
#[derive(Clone, Copy, Debug)]
pub struct CursorSnapshot {
    pub position: usize,
    pub line: u32,
    pub column: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cursor() {
        let cursor = Cursor::new(b"let x = 42;");
        assert_eq!(cursor.current(), Some(b'l'));
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.line(), 1);
        assert_eq!(cursor.column(), 1);
    }

    #[test]
    fn test_advance() {
        let mut cursor = Cursor::new(b"abc");
        cursor.advance();
        assert_eq!(cursor.current(), Some(b'b'));
        cursor.advance();
        assert_eq!(cursor.current(), Some(b'c'));
        cursor.advance();
        assert_eq!(cursor.current(), None);
    }

    #[test]
    fn test_is_at_end() {
        let mut cursor = Cursor::new(b"a");
        assert!(!cursor.is_at_end());
        cursor.advance();
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_newline_resets_column() {
        let mut cursor = Cursor::new(b"ab\ncd");
        cursor.advance_n(3); // "ab\n"
        assert_eq!(cursor.line(), 2);
        assert_eq!(cursor.column(), 1);
    }

    #[test]
    fn test_tab_advances_to_next_stop() {
        let mut cursor = Cursor::new(b"\t\tx");
        cursor.advance();
        assert_eq!(cursor.column(), 5);
        cursor.advance();
        assert_eq!(cursor.column(), 9);
    }

    #[test]
    fn test_tab_from_non_aligned_column() {
        let mut cursor = Cursor::new(b"ab\tx");
        cursor.advance_n(2); // column now 3
        assert_eq!(cursor.column(), 3);
        cursor.advance(); // tab: 3 -> 5
        assert_eq!(cursor.column(), 5);
    }

    #[test]
    fn test_carriage_return_no_column_change() {
        let mut cursor = Cursor::new(b"a\rb");
        cursor.advance(); // 'a', column -> 2
        assert_eq!(cursor.column(), 2);
        cursor.advance(); // '\r', column unchanged
        assert_eq!(cursor.column(), 2);
    }

    #[test]
    fn test_slice_from() {
        let mut cursor = Cursor::new(b"let x");
        let start = cursor.position();
        cursor.advance_n(3);
        assert_eq!(cursor.slice_from(start), b"let");
    }

    #[test]
    fn test_snapshot_restore() {
        let mut cursor = Cursor::new(b"let x = 42;");
        let snapshot = cursor.snapshot();
        cursor.advance_n(6);
        cursor.restore(snapshot);
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.line(), 1);
        assert_eq!(cursor.column(), 1);
    }

    #[test]
    fn test_empty_source() {
        let mut cursor = Cursor::new(b"");
        assert!(cursor.is_at_end());
        assert_eq!(cursor.current(), None);
        cursor.advance();
        assert!(cursor.is_at_end());
    }
}
