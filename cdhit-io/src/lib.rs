//! # Readers for CD-HIT output.
//!
//! Streaming, pull-based readers for the `.clstr` cluster report written by CD-HIT and
//! CD-HIT-EST, and for the FASTA files they cluster. Both read plain or gzipped files
//! (detected from the content) and standard input.
//!
//! ```rust
//! use cdhit_io::ClstrReader;
//!
//! let report = ">Cluster 0\n0\t281aa, >seqA... *\n1\t281aa, >seqB... at 97.81%\n";
//! for cluster in ClstrReader::new(report.as_bytes()) {
//!     let cluster = cluster.unwrap();
//!     assert_eq!(cluster.representative_name(), Some("seqA"));
//!     assert_eq!(cluster.len(), 2);
//! }
//! ```
//!
pub mod clstr;
pub mod error;
pub mod fasta;
mod lines;

// re-expose core functions
pub use clstr::*;
pub use error::*;
pub use fasta::*;
pub use lines::HEADER_MARKER;
