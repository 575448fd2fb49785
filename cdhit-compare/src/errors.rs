use std::path::PathBuf;

use cdhit_io::ReaderError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompareError {
    #[error("{0} is not installed or is not a CD-HIT binary. Please install it and try again.")]
    CdHitNotFound(String),

    #[error("Prefixes are identical ({0}): specify different tags for the two datasets")]
    IdenticalPrefixes(String),

    #[error("Prefix {0} is the start of prefix {1}: specify tags where neither extends the other")]
    OverlappingPrefixes(String, String),

    #[error("Identity threshold must be in (0, 1], got {0}")]
    InvalidIdentity(f64),

    #[error("Unknown sequence type '{0}', expected 'nucl' or 'prot'")]
    InvalidSeqType(String),

    #[error("{program} exited with status {code:?}: {stderr}")]
    CdHitFailed {
        program: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("Can't read FASTA file {path}: {source}")]
    Relabel {
        path: PathBuf,
        #[source]
        source: ReaderError,
    },

    #[error(transparent)]
    Reader(#[from] ReaderError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CompareError>;
