//! Line cursor with a single held-back line, shared by the `.clstr` and FASTA readers.

use std::io::{self, BufRead};

use crate::error::{ReaderError, Result};

/// Marker that opens a cluster header or a FASTA defline.
pub const HEADER_MARKER: char = '>';

pub(crate) struct LineCursor<R: BufRead> {
    reader: R,
    buffer: Vec<u8>,
    held: Option<Vec<u8>>,
    line_number: usize,
}

impl<R: BufRead> LineCursor<R> {
    pub(crate) fn new(reader: R) -> Self {
        LineCursor {
            reader,
            buffer: Vec::with_capacity(256),
            held: None,
            line_number: 0,
        }
    }

    /// Number of physical lines consumed so far. Peeking does not count.
    pub(crate) fn line_number(&self) -> usize {
        self.line_number
    }

    pub(crate) fn into_inner(self) -> R {
        self.reader
    }

    // raw bytes: text is decoded once the line is counted
    fn read_physical(&mut self) -> io::Result<Option<Vec<u8>>> {
        self.buffer.clear();
        if self.reader.read_until(b'\n', &mut self.buffer)? == 0 {
            return Ok(None);
        }
        Ok(Some(self.buffer.trim_ascii().to_vec()))
    }

    /// Consume the next line (trimmed), taking the held-back line first.
    pub(crate) fn next_line(&mut self) -> Result<Option<String>> {
        let raw = match self.held.take() {
            Some(raw) => raw,
            None => match self.read_physical()? {
                Some(raw) => raw,
                None => return Ok(None),
            },
        };
        self.line_number += 1;

        String::from_utf8(raw)
            .map(Some)
            .map_err(|_| ReaderError::structural(self.line_number, "line is not valid UTF-8"))
    }

    /// Look at the bytes of the next line without consuming it.
    fn peek_line(&mut self) -> io::Result<Option<&[u8]>> {
        if self.held.is_none() {
            self.held = self.read_physical()?;
        }
        Ok(self.held.as_deref())
    }

    /// Whether the line after the current one belongs to the same record body:
    /// it exists, is not blank and is not a header.
    pub(crate) fn body_continues(&mut self) -> io::Result<bool> {
        Ok(self
            .peek_line()?
            .is_some_and(|next| !next.is_empty() && !next.starts_with(&[HEADER_MARKER as u8])))
    }

    ///
    /// Skip blank lines up to the next header and return its text without the marker.
    /// `Ok(None)` means the input is exhausted.
    ///
    /// # Arguments
    /// - stray: message used when a non-blank, non-header line is found first
    pub(crate) fn next_header(&mut self, stray: &str) -> Result<Option<String>> {
        while let Some(line) = self.next_line()? {
            if let Some(label) = line.strip_prefix(HEADER_MARKER) {
                return Ok(Some(label.trim().to_string()));
            }
            if !line.is_empty() {
                return Err(ReaderError::structural(self.line_number, stray));
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    fn cursor(text: &'static str) -> LineCursor<&'static [u8]> {
        LineCursor::new(text.as_bytes())
    }

    #[rstest]
    fn test_peek_does_not_advance_line_number() {
        let mut lines = cursor("a\nb\n");

        assert_eq!(lines.peek_line().unwrap(), Some(&b"a"[..]));
        assert_eq!(lines.line_number(), 0);
        assert_eq!(lines.next_line().unwrap().as_deref(), Some("a"));
        assert_eq!(lines.line_number(), 1);
        assert_eq!(lines.peek_line().unwrap(), Some(&b"b"[..]));
        assert_eq!(lines.peek_line().unwrap(), Some(&b"b"[..]));
        assert_eq!(lines.next_line().unwrap().as_deref(), Some("b"));
        assert_eq!(lines.next_line().unwrap(), None);
        assert_eq!(lines.line_number(), 2);
    }

    #[rstest]
    #[case("x\n", true)]
    #[case("  x  \r\n", true)]
    #[case(">h\n", false)]
    #[case("\n", false)]
    #[case("   \n", false)]
    #[case("", false)]
    fn test_body_continues(#[case] text: &'static str, #[case] expected: bool) {
        assert_eq!(cursor(text).body_continues().unwrap(), expected);
    }

    #[rstest]
    fn test_next_header_skips_blank_lines() {
        let mut lines = cursor("\n\n>Cluster 7 \n");
        assert_eq!(
            lines.next_header("stray").unwrap().as_deref(),
            Some("Cluster 7")
        );
        assert_eq!(lines.line_number(), 3);
        assert_eq!(lines.next_header("stray").unwrap(), None);
    }

    #[rstest]
    fn test_next_header_rejects_stray_line() {
        let mut lines = cursor("\nnot a header\n");
        let err = lines.next_header("stray line").unwrap_err();
        assert_eq!(err.line_number(), Some(2));
    }

    #[rstest]
    fn test_invalid_utf8_reports_its_line() {
        let mut lines = LineCursor::new(&b"ok\n\nbad \xff\xfe\nafter\n"[..]);
        assert_eq!(lines.next_line().unwrap().as_deref(), Some("ok"));
        assert_eq!(lines.next_line().unwrap().as_deref(), Some(""));

        // peeking at the bad line is fine, consuming it is not
        assert!(lines.body_continues().unwrap());
        let err = lines.next_line().unwrap_err();
        assert!(matches!(err, ReaderError::Structural { line: 3, .. }));
    }
}
