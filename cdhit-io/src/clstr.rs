//! Streaming reader for CD-HIT `.clstr` cluster reports.
//!
//! A report is a sequence of clusters, each a `>` header followed by one line per member:
//!
//! ```text
//! >Cluster 0
//! 0	502nt, >read_1... *
//! 1	502nt, >read_7... at 1:502:1:503/-/97.81%
//! ```
//!
//! [ClstrReader] pulls one [Cluster] at a time from any [BufRead], keeping a single
//! line of lookahead to find where a cluster ends.

use std::io::BufRead;
use std::path::Path;

use log::{debug, warn};

use cdhit_core::models::{Cluster, Member};
use cdhit_core::utils::{DynamicReader, get_dynamic_reader_w_stdin};

use crate::error::{ReaderError, Result};
use crate::lines::{HEADER_MARKER, LineCursor};

/// What to do with a cluster that does not have exactly one representative member.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RepresentativePolicy {
    /// Log a warning and yield the cluster; the first representative found names it.
    #[default]
    Warn,
    /// Fail with [ReaderError::MissingRepresentative] or [ReaderError::MultipleRepresentatives].
    Strict,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ReaderState {
    Active,
    Exhausted,
    Poisoned,
}

/// Builder for a [ClstrReader] with non-default settings.
///
/// ```rust
/// use cdhit_io::{ClstrReader, RepresentativePolicy};
///
/// let text = ">Cluster 0\n0\t281aa, >seqA... *\n";
/// let mut reader = ClstrReader::builder()
///     .with_representative_policy(RepresentativePolicy::Strict)
///     .from_reader(text.as_bytes());
///
/// let cluster = reader.read_item().unwrap().unwrap();
/// assert_eq!(cluster.representative_name(), Some("seqA"));
/// assert!(reader.read_item().unwrap().is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ClstrReaderBuilder {
    policy: RepresentativePolicy,
}

impl ClstrReaderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_representative_policy(mut self, policy: RepresentativePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn from_reader<R: BufRead>(self, reader: R) -> ClstrReader<R> {
        ClstrReader {
            lines: LineCursor::new(reader),
            policy: self.policy,
            state: ReaderState::Active,
        }
    }

    /// Open a plain or gzipped file, or standard input when the path is `-`.
    pub fn from_path<P: AsRef<Path>>(self, path: P) -> Result<ClstrReader<DynamicReader>> {
        let path = path.as_ref();
        debug!("Opening cluster report {}", path.display());
        let reader = get_dynamic_reader_w_stdin(path)?;
        Ok(self.from_reader(reader))
    }
}

///
/// Pull-based reader over a `.clstr` cluster report.
///
/// Clusters come out in file order through [ClstrReader::read_item], [ClstrReader::read_all]
/// or iteration. The first error stops the reader: later calls to `read_item` fail
/// and iteration ends. Dropping the reader closes the underlying source.
///
pub struct ClstrReader<R: BufRead> {
    lines: LineCursor<R>,
    policy: RepresentativePolicy,
    state: ReaderState,
}

impl ClstrReader<DynamicReader> {
    pub fn builder() -> ClstrReaderBuilder {
        ClstrReaderBuilder::new()
    }

    /// Open a plain or gzipped file, or standard input when the path is `-`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        ClstrReaderBuilder::new().from_path(path)
    }
}

impl<R: BufRead> ClstrReader<R> {
    pub fn new(reader: R) -> Self {
        ClstrReaderBuilder::new().from_reader(reader)
    }

    /// Number of physical lines consumed so far.
    pub fn line_number(&self) -> usize {
        self.lines.line_number()
    }

    pub fn representative_policy(&self) -> RepresentativePolicy {
        self.policy
    }

    /// Give back the underlying reader. A line held for lookahead is dropped.
    pub fn into_inner(self) -> R {
        self.lines.into_inner()
    }

    ///
    /// Read the next cluster.
    ///
    /// # Returns
    /// - `Ok(Some(cluster))` for the next cluster in the file
    /// - `Ok(None)` once the input is exhausted
    /// - `Err(_)` for malformed input; the reader is unusable afterwards
    pub fn read_item(&mut self) -> Result<Option<Cluster>> {
        match self.state {
            ReaderState::Exhausted => return Ok(None),
            ReaderState::Poisoned => {
                return Err(ReaderError::structural(
                    self.lines.line_number(),
                    "reader stopped by an earlier error",
                ));
            }
            ReaderState::Active => {}
        }

        let result = self.next_cluster();
        match &result {
            Ok(Some(_)) => {}
            Ok(None) => self.state = ReaderState::Exhausted,
            Err(_) => self.state = ReaderState::Poisoned,
        }
        result
    }

    /// Read every remaining cluster, stopping at the first error.
    pub fn read_all(&mut self) -> Result<Vec<Cluster>> {
        self.by_ref().collect()
    }

    fn next_cluster(&mut self) -> Result<Option<Cluster>> {
        let Some(label) = self
            .lines
            .next_header("member line found outside of a cluster")?
        else {
            return Ok(None);
        };

        let members = self.collect_members()?;
        let cluster = Cluster::new(label, members);
        self.check_representative(&cluster)?;

        debug!(
            "Read {} with {} members (line {})",
            cluster.label(),
            cluster.len(),
            self.lines.line_number()
        );
        Ok(Some(cluster))
    }

    fn collect_members(&mut self) -> Result<Vec<Member>> {
        let mut members = Vec::new();

        loop {
            let Some(line) = self.lines.next_line()? else {
                return Err(ReaderError::structural(
                    self.lines.line_number(),
                    "end of input before the first member of the cluster",
                ));
            };
            let line_number = self.lines.line_number();

            // only reachable before the first member: the lookahead ends a group on these
            if line.is_empty() {
                continue;
            }
            if line.starts_with(HEADER_MARKER) {
                return Err(ReaderError::structural(
                    line_number,
                    "cluster header without member lines",
                ));
            }

            let member = line
                .parse::<Member>()
                .map_err(|reason| ReaderError::MalformedMemberLine {
                    line: line_number,
                    text: line.clone(),
                    reason,
                })?;
            members.push(member);

            if !self.lines.body_continues()? {
                return Ok(members);
            }
        }
    }

    fn check_representative(&self, cluster: &Cluster) -> Result<()> {
        let count = cluster.representative_count();
        if count == 1 {
            return Ok(());
        }

        let line = self.lines.line_number();
        match self.policy {
            RepresentativePolicy::Warn => {
                if count == 0 {
                    warn!("{} (ending at line {}) has no representative sequence", cluster.label(), line);
                } else {
                    warn!(
                        "{} (ending at line {}) has {} representative sequences, using {}",
                        cluster.label(),
                        line,
                        count,
                        cluster.representative_name().unwrap_or_default()
                    );
                }
                Ok(())
            }
            RepresentativePolicy::Strict if count == 0 => Err(ReaderError::MissingRepresentative {
                label: cluster.label().to_string(),
                line,
            }),
            RepresentativePolicy::Strict => Err(ReaderError::MultipleRepresentatives {
                label: cluster.label().to_string(),
                line,
                count,
            }),
        }
    }
}

impl<R: BufRead> Iterator for ClstrReader<R> {
    type Item = Result<Cluster>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.state == ReaderState::Poisoned {
            return None;
        }
        self.read_item().transpose()
    }
}

/// Open a CD-HIT `.clstr` file (plain or gzipped, `-` for stdin) for reading.
pub fn read_cdhit<P: AsRef<Path>>(path: P) -> Result<ClstrReader<DynamicReader>> {
    ClstrReader::from_path(path)
}
