use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::consts::*;
use crate::errors::CompareError;

/// Molecule type of the compared datasets; picks `cd-hit` or `cd-hit-est`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeqType {
    Nucleotide,
    Protein,
}

impl SeqType {
    /// Protein when the path mentions `faa`, nucleotide otherwise.
    pub fn infer_from_path(path: &Path) -> SeqType {
        match path.to_string_lossy().contains("faa") {
            true => SeqType::Protein,
            false => SeqType::Nucleotide,
        }
    }

    /// Binary for this type: the environment override if set, else the CD-HIT default.
    pub fn default_program(&self) -> String {
        let (var, fallback) = match self {
            SeqType::Protein => (CDHIT_BIN_ENV, DEFAULT_CDHIT_BIN),
            SeqType::Nucleotide => (CDHIT_EST_BIN_ENV, DEFAULT_CDHIT_EST_BIN),
        };
        env::var(var).unwrap_or_else(|_| fallback.to_string())
    }
}

impl FromStr for SeqType {
    type Err = CompareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nucl" | "nt" | "dna" => Ok(SeqType::Nucleotide),
            "prot" | "aa" | "protein" => Ok(SeqType::Protein),
            _ => Err(CompareError::InvalidSeqType(s.to_string())),
        }
    }
}

///
/// Settings for [crate::compare_fasta]. Unset fields fall back to defaults
/// derived from the input paths.
///
/// ```rust
/// use cdhit_compare::{CompareOptions, SeqType};
///
/// let options = CompareOptions::new()
///     .with_tags("left", "right")
///     .with_identity(0.9)
///     .with_seq_type(SeqType::Protein);
/// assert_eq!(options.identity(), 0.9);
/// ```
#[derive(Clone, Debug)]
pub struct CompareOptions {
    tag1: Option<String>,
    tag2: Option<String>,
    identity: f64,
    seq_type: Option<SeqType>,
    tempdir: Option<PathBuf>,
    program: Option<String>,
}

impl Default for CompareOptions {
    fn default() -> Self {
        CompareOptions {
            tag1: None,
            tag2: None,
            identity: DEFAULT_IDENTITY,
            seq_type: None,
            tempdir: None,
            program: None,
        }
    }
}

impl CompareOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of the two datasets, used as sequence name prefixes.
    pub fn with_tags(mut self, tag1: impl Into<String>, tag2: impl Into<String>) -> Self {
        self.tag1 = Some(tag1.into());
        self.tag2 = Some(tag2.into());
        self
    }

    pub fn with_tag1(mut self, tag: impl Into<String>) -> Self {
        self.tag1 = Some(tag.into());
        self
    }

    pub fn with_tag2(mut self, tag: impl Into<String>) -> Self {
        self.tag2 = Some(tag.into());
        self
    }

    pub fn with_identity(mut self, identity: f64) -> Self {
        self.identity = identity;
        self
    }

    pub fn with_seq_type(mut self, seq_type: SeqType) -> Self {
        self.seq_type = Some(seq_type);
        self
    }

    /// Directory the temporary working directory is created in.
    pub fn with_tempdir(mut self, dir: PathBuf) -> Self {
        self.tempdir = Some(dir);
        self
    }

    /// Explicit clustering binary, bypassing the environment and defaults.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = Some(program.into());
        self
    }

    pub fn identity(&self) -> f64 {
        self.identity
    }

    pub fn tempdir(&self) -> PathBuf {
        self.tempdir.clone().unwrap_or_else(env::temp_dir)
    }

    pub fn seq_type_for(&self, first: &Path) -> SeqType {
        self.seq_type
            .unwrap_or_else(|| SeqType::infer_from_path(first))
    }

    pub fn program_for(&self, seq_type: SeqType) -> String {
        self.program
            .clone()
            .unwrap_or_else(|| seq_type.default_program())
    }

    /// Prefixes for the two datasets: the tags if given, else derived from the file names.
    pub fn prefixes_for(&self, first: &Path, second: &Path) -> (String, String) {
        let resolve = |tag: &Option<String>, path: &Path| match tag {
            Some(tag) => with_separator(tag),
            None => default_prefix(path),
        };
        (resolve(&self.tag1, first), resolve(&self.tag2, second))
    }
}

fn with_separator(tag: &str) -> String {
    match tag.ends_with(PREFIX_SEPARATOR) {
        true => tag.to_string(),
        false => format!("{}{}", tag, PREFIX_SEPARATOR),
    }
}

///
/// Dataset prefix derived from a file name: the base name up to the first
/// `_` or `.`, followed by the separator (`sampleA_R1.fa.gz` gives `sampleA_`).
///
pub fn default_prefix(path: &Path) -> String {
    let basename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = basename
        .split(PREFIX_SEPARATOR)
        .next()
        .unwrap_or_default()
        .split('.')
        .next()
        .unwrap_or_default();
    format!("{}{}", stem, PREFIX_SEPARATOR)
}
