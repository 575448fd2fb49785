//! Minimal FASTA reader with the same pull API as the cluster reader.

use std::io::{BufRead, Write};
use std::path::Path;

use log::debug;

use cdhit_core::models::Sequence;
use cdhit_core::utils::{DynamicReader, get_dynamic_reader_w_stdin};

use crate::error::{ReaderError, Result};
use crate::lines::{HEADER_MARKER, LineCursor};

///
/// Pull-based FASTA reader. Wrapped sequence lines are joined; the defline is
/// split into a name and an optional comment.
///
/// ```rust
/// use cdhit_io::FastaReader;
///
/// let text = ">ID1 first\nGAGU\nUA\n>ID2\nCAUAACAAATT\n";
/// let records = FastaReader::new(text.as_bytes()).read_all().unwrap();
///
/// assert_eq!(records[0].name, "ID1");
/// assert_eq!(records[0].comment.as_deref(), Some("first"));
/// assert_eq!(records[0].sequence, "GAGUUA");
/// assert_eq!(records[1].sequence, "CAUAACAAATT");
/// ```
pub struct FastaReader<R: BufRead> {
    lines: LineCursor<R>,
    failed: bool,
}

impl FastaReader<DynamicReader> {
    /// Open a plain or gzipped file, or standard input when the path is `-`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Opening FASTA file {}", path.display());
        Ok(FastaReader::new(get_dynamic_reader_w_stdin(path)?))
    }
}

impl<R: BufRead> FastaReader<R> {
    pub fn new(reader: R) -> Self {
        FastaReader {
            lines: LineCursor::new(reader),
            failed: false,
        }
    }

    /// Number of physical lines consumed so far.
    pub fn line_number(&self) -> usize {
        self.lines.line_number()
    }

    /// Read the next record; `Ok(None)` once the input is exhausted.
    pub fn read_item(&mut self) -> Result<Option<Sequence>> {
        if self.failed {
            return Err(ReaderError::structural(
                self.lines.line_number(),
                "reader stopped by an earlier error",
            ));
        }
        let result = self.next_record();
        self.failed = result.is_err();
        result
    }

    pub fn read_all(&mut self) -> Result<Vec<Sequence>> {
        self.by_ref().collect()
    }

    fn next_record(&mut self) -> Result<Option<Sequence>> {
        let Some(defline) = self
            .lines
            .next_header("sequence data found before the first FASTA header")?
        else {
            return Ok(None);
        };
        if defline.is_empty() {
            return Err(ReaderError::structural(
                self.lines.line_number(),
                "FASTA header without a sequence name",
            ));
        }

        let mut sequence = String::new();
        loop {
            let Some(line) = self.lines.next_line()? else {
                return Err(ReaderError::structural(
                    self.lines.line_number(),
                    "end of input before the sequence of the record",
                ));
            };
            if line.is_empty() {
                continue;
            }
            if line.starts_with(HEADER_MARKER) {
                return Err(ReaderError::structural(
                    self.lines.line_number(),
                    "FASTA header without sequence lines",
                ));
            }

            sequence.push_str(&line);
            if !self.lines.body_continues()? {
                return Ok(Some(Sequence::from_defline(&defline, sequence)));
            }
        }
    }
}

impl<R: BufRead> Iterator for FastaReader<R> {
    type Item = Result<Sequence>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        self.read_item().transpose()
    }
}

/// Open a FASTA file (plain or gzipped, `-` for stdin) for reading.
pub fn read_fasta<P: AsRef<Path>>(path: P) -> Result<FastaReader<DynamicReader>> {
    FastaReader::from_path(path)
}

///
/// Copy every record of a FASTA file to `out`, prepending `prefix` to each name.
/// Sequences are written on a single line.
///
/// # Arguments
/// - path: FASTA file to read
/// - prefix: text prepended to every sequence name
/// - out: destination
///
/// # Returns
/// The number of records written.
pub fn relabel_fasta<P: AsRef<Path>, W: Write>(path: P, prefix: &str, out: &mut W) -> Result<usize> {
    let mut written = 0;
    for record in read_fasta(path)? {
        let mut record = record?;
        record.name = format!("{}{}", prefix, record.name);
        writeln!(out, "{}", record)?;
        written += 1;
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    fn reader(text: &'static str) -> FastaReader<&'static [u8]> {
        FastaReader::new(text.as_bytes())
    }

    #[rstest]
    fn test_read_records_one_by_one() {
        let mut records = reader(">ID1\nGAGUUA\n>ID2\nCAUAAC\nAAATT\n");

        let first = records.read_item().unwrap().unwrap();
        assert_eq!(first.defline(), "ID1");
        assert_eq!(first.sequence, "GAGUUA");

        let second = records.read_item().unwrap().unwrap();
        assert_eq!(second.sequence, "CAUAACAAATT");

        assert!(records.read_item().unwrap().is_none());
    }

    #[rstest]
    #[case("ACGT\n>ID1\nACGT\n", 1)]
    #[case(">ID1\n>ID2\nACGT\n", 2)]
    #[case(">ID1\nACGT\n>ID2\n", 3)]
    #[case(">\nACGT\n", 1)]
    fn test_damaged_input(#[case] text: &'static str, #[case] line: usize) {
        let err = reader(text).read_all().unwrap_err();
        assert!(matches!(err, ReaderError::Structural { .. }));
        assert_eq!(err.line_number(), Some(line));
    }

    #[rstest]
    fn test_blank_lines_between_records() {
        let records = reader("\n>ID1\nAC\nGT\n\n\n>ID2 desc\nTT\n").read_all().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].sequence, "ACGT");
        assert_eq!(records[1].comment.as_deref(), Some("desc"));
    }

    #[rstest]
    fn test_relabel_fasta() {
        let mut input = tempfile::NamedTempFile::new().unwrap();
        writeln!(input, ">s1 first sample\nACG\nT\n>s2\nGG").unwrap();

        let mut out = Vec::new();
        let n = relabel_fasta(input.path(), "left_", &mut out).unwrap();

        assert_eq!(n, 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            ">left_s1 first sample\nACGT\n>left_s2\nGG\n"
        );
    }
}
