//! Constants for the compare workflow: environment variables, default
//! binaries, file names and report bucket names.

/// Environment variable overriding the protein clustering binary (`cd-hit`).
pub const CDHIT_BIN_ENV: &str = "CDHIT_BIN";

/// Environment variable overriding the nucleotide clustering binary (`cd-hit-est`).
pub const CDHIT_EST_BIN_ENV: &str = "CDHIT_EST_BIN";

pub const DEFAULT_CDHIT_BIN: &str = "cd-hit";
pub const DEFAULT_CDHIT_EST_BIN: &str = "cd-hit-est";

/// Text the `-h` output of every CD-HIT suite binary contains.
pub const CDHIT_BANNER: &str = "CD-HIT";

/// Sequence identity threshold passed to `-c`.
pub const DEFAULT_IDENTITY: f64 = 0.95;

/// Description length kept in the `.clstr` file (`-d`), long enough to keep full names.
pub const DESCRIPTION_LENGTH: &str = "1000";

/// Separator between the dataset prefix and the original sequence name.
pub const PREFIX_SEPARATOR: &str = "_";

pub const RELABELED_FASTA: &str = "seqs.fasta";
pub const CLUSTER_OUTPUT: &str = "clusters.fasta";
pub const CLSTR_EXTENSION: &str = ".clstr";

/// Two-member clusters with one sequence from each dataset.
pub const BOTH_BUCKET: &str = "both";
/// Clusters with more than two members.
pub const MULTIPLE_BUCKET: &str = "multiple";
/// Two-member clusters with both sequences from the same dataset.
pub const DUPLICATE_BUCKET: &str = "dupl";
