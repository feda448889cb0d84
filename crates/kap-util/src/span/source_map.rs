//! Source map for managing source files and computing source locations.
//!
//! Content is held as raw bytes rather than `str`: the scanner built on top
//! of this type must be able to classify and report on any byte, including
//! ones that are not valid UTF-8 (see [`crate::error::SourceError`]).

use std::fs;
use std::path::Path;
use std::sync::Arc;

use memmap2::Mmap;

use super::{FileId, Span};
use crate::error::{SourceError, SourceResult};

/// Backing storage for a [`SourceFile`]'s bytes.
///
/// Small or empty files are read into an owned buffer (memory-mapping a
/// zero-length file is rejected by the OS on some platforms); anything else
/// is memory-mapped.
enum SourceBytes {
    Mapped(Mmap),
    Owned(Vec<u8>),
}

impl std::ops::Deref for SourceBytes {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            SourceBytes::Mapped(m) => m,
            SourceBytes::Owned(v) => v,
        }
    }
}

/// A source file with its content and metadata
///
/// # Examples
///
/// ```
/// use kap_util::span::SourceFile;
///
/// let file = SourceFile::from_bytes(0, "main.src", b"main do end;".to_vec());
/// assert_eq!(file.name(), "main.src");
/// assert_eq!(file.content(), b"main do end;");
/// ```
pub struct SourceFile {
    id: FileId,
    name: String,
    content: SourceBytes,
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Load a source file from disk, memory-mapping it when non-empty.
    pub fn open(id: usize, path: impl AsRef<Path>) -> SourceResult<Self> {
        let path = path.as_ref();
        let name = path.to_string_lossy().into_owned();
        let file = fs::File::open(path).map_err(|e| SourceError::io(&name, e))?;
        let metadata = file.metadata().map_err(|e| SourceError::io(&name, e))?;

        let content = if metadata.len() == 0 {
            SourceBytes::Owned(Vec::new())
        } else {
            // SAFETY: the mapping is read-only and this process does not rely
            // on the file being left untouched by other processes for
            // correctness beyond what any text editor would already assume.
            match unsafe { Mmap::map(&file) } {
                Ok(mmap) => SourceBytes::Mapped(mmap),
                Err(_) => SourceBytes::Owned(fs::read(path).map_err(|e| SourceError::io(&name, e))?),
            }
        };

        Ok(Self::from_source_bytes(id, name, content))
    }

    /// Build a source file directly from an in-memory byte buffer (tests,
    /// embedded fixtures, or any caller that already has the bytes).
    pub fn from_bytes(id: usize, name: impl Into<String>, content: Vec<u8>) -> Self {
        Self::from_source_bytes(id, name.into(), SourceBytes::Owned(content))
    }

    fn from_source_bytes(id: usize, name: String, content: SourceBytes) -> Self {
        let line_starts = Self::compute_line_starts(&content);
        Self {
            id: FileId(id),
            name,
            content,
            line_starts,
        }
    }

    fn compute_line_starts(content: &[u8]) -> Arc<[usize]> {
        let mut line_starts = vec![0];
        for (i, &b) in content.iter().enumerate() {
            if b == b'\n' {
                line_starts.push(i + 1);
            }
        }
        line_starts.into()
    }

    #[inline]
    pub fn id(&self) -> FileId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    #[inline]
    pub fn byte_count(&self) -> usize {
        self.content.len()
    }

    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Byte offset where a line starts (0-indexed line number).
    #[inline]
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Convert a byte offset to 1-indexed (line, column), both in bytes.
    pub fn offset_to_line_col(&self, offset: usize) -> (u32, u32) {
        match self.line_starts.binary_search(&offset) {
            Ok(line) => (line as u32 + 1, 1),
            Err(insert_point) => {
                let line = insert_point - 1;
                let line_start = self.line_starts.get(line).copied().unwrap_or(0);
                let col = offset - line_start + 1;
                (line as u32 + 1, col as u32)
            }
        }
    }

    /// The byte slice for line `n`, 1-indexed, with no trailing `\n`/`\r`.
    ///
    /// Panics if `n` is out of range; `getLine` is a precondition-checked
    /// operation (§6) so an out-of-range call is a caller defect.
    pub fn get_line(&self, n: usize) -> &[u8] {
        self.line_at(n)
            .unwrap_or_else(|| panic!("line {n} out of range (file has {} lines)", self.line_count()))
    }

    pub fn line_at(&self, line: usize) -> Option<&[u8]> {
        if line == 0 {
            return None;
        }
        let start = self.line_start(line - 1)?;
        let end = self.line_start(line).unwrap_or(self.content.len());
        let slice = &self.content[start..end];
        let slice = slice.strip_suffix(b"\n").unwrap_or(slice);
        let slice = slice.strip_suffix(b"\r").unwrap_or(slice);
        Some(slice)
    }

    pub fn extract(&self, range: std::ops::Range<usize>) -> &[u8] {
        &self.content[range]
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("line_count", &self.line_count())
            .finish()
    }
}

/// A registry of source files loaded during a single run.
///
/// # Examples
///
/// ```
/// use kap_util::span::SourceMap;
///
/// let mut map = SourceMap::new();
/// let file_id = map.add_bytes("main.src", b"main do end;".to_vec());
/// let file = map.get(file_id).unwrap();
/// assert_eq!(file.name(), "main.src");
/// ```
#[derive(Default)]
pub struct SourceMap {
    files: Vec<Arc<SourceFile>>,
}

impl SourceMap {
    #[inline]
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    /// Load and register a file from disk.
    pub fn add_file(&mut self, path: impl AsRef<Path>) -> SourceResult<FileId> {
        let id = self.files.len();
        let file = SourceFile::open(id, path)?;
        let file_id = file.id();
        self.files.push(Arc::new(file));
        Ok(file_id)
    }

    /// Register an in-memory buffer (tests, fixtures).
    pub fn add_bytes(&mut self, name: impl Into<String>, content: Vec<u8>) -> FileId {
        let id = self.files.len();
        let file = SourceFile::from_bytes(id, name, content);
        let file_id = file.id();
        self.files.push(Arc::new(file));
        file_id
    }

    #[inline]
    pub fn get(&self, id: FileId) -> Option<Arc<SourceFile>> {
        self.files.get(id.0).cloned()
    }

    #[inline]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Render a span in the diagnostic format used throughout this crate
    /// family: a `-->` location line, the source line, and a caret+tilde
    /// underline built from the span's column and length.
    pub fn format_span(&self, span: Span, underline_len: usize) -> Option<String> {
        let file = self.get(span.file_id)?;
        let line = file.line_at(span.line as usize)?;
        let line = String::from_utf8_lossy(line);

        let mut result = String::new();
        result.push_str(&format!("{}:{}:{}: ", file.name(), span.line, span.column));
        result.push('\n');
        result.push_str(&line);
        result.push('\n');
        for _ in 1..span.column {
            result.push(' ');
        }
        result.push('^');
        for _ in 0..underline_len.saturating_sub(1) {
            result.push('~');
        }

        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_file_from_bytes() {
        let file = SourceFile::from_bytes(0, "test.src", b"main do end;".to_vec());
        assert_eq!(file.id().0, 0);
        assert_eq!(file.name(), "test.src");
        assert_eq!(file.content(), b"main do end;");
    }

    #[test]
    fn test_line_count() {
        let file = SourceFile::from_bytes(0, "test.src", b"line1\nline2\nline3".to_vec());
        assert_eq!(file.line_count(), 3);
    }

    #[test]
    fn test_line_start() {
        let file = SourceFile::from_bytes(0, "test.src", b"line1\nline2\nline3".to_vec());
        assert_eq!(file.line_start(0), Some(0));
        assert_eq!(file.line_start(1), Some(6));
        assert_eq!(file.line_start(2), Some(12));
        assert_eq!(file.line_start(3), None);
    }

    #[test]
    fn test_offset_to_line_col() {
        let file = SourceFile::from_bytes(0, "test.src", b"main do end;".to_vec());
        assert_eq!(file.offset_to_line_col(0), (1, 1));
        assert_eq!(file.offset_to_line_col(5), (1, 6));
    }

    #[test]
    fn test_get_line_strips_terminator() {
        let file = SourceFile::from_bytes(0, "test.src", b"line1\r\nline2\n".to_vec());
        assert_eq!(file.get_line(1), b"line1");
        assert_eq!(file.get_line(2), b"line2");
    }

    #[test]
    fn test_empty_file() {
        let file = SourceFile::from_bytes(0, "empty.src", Vec::new());
        assert_eq!(file.line_count(), 1);
        assert_eq!(file.byte_count(), 0);
        assert_eq!(file.offset_to_line_col(0), (1, 1));
    }

    #[test]
    fn test_source_map_add_and_get() {
        let mut map = SourceMap::new();
        let file_id = map.add_bytes("main.src", b"main do end;".to_vec());
        let file = map.get(file_id).unwrap();
        assert_eq!(file.name(), "main.src");
        assert_eq!(map.file_count(), 1);
    }

    #[test]
    fn test_source_map_open_missing_file() {
        let mut map = SourceMap::new();
        let err = map.add_file("/nonexistent/path/does/not/exist.src");
        assert!(err.is_err());
    }

    #[test]
    fn test_format_span() {
        let mut map = SourceMap::new();
        let file_id = map.add_bytes("main.src", b"main do end;".to_vec());
        let span = Span::with_file(0, 4, file_id, 1, 1);
        let formatted = map.format_span(span, 4).unwrap();
        assert!(formatted.contains("main.src:1:1"));
        assert!(formatted.contains("main do end;"));
        assert!(formatted.contains('^'));
    }
}
