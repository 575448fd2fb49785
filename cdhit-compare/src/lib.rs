//! # Compare two sequence datasets with CD-HIT
//!
//! Both FASTA inputs are relabeled with a per-dataset prefix, clustered together with
//! `cd-hit` (proteins) or `cd-hit-est` (nucleotides), and the resulting clusters are
//! sorted into buckets: sequences unique to one dataset, pairs shared by both, pairs
//! duplicated inside one dataset, and larger groups.
//!
//! The clustering binary is resolved from [CompareOptions::with_program], then the
//! `CDHIT_BIN` / `CDHIT_EST_BIN` environment variables, then `PATH`.
//!
pub mod classify;
pub mod consts;
pub mod errors;
pub mod options;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::process::Command;

use cdhit_io::{read_cdhit, relabel_fasta};
use log::{debug, info};

pub use classify::{CompareReport, classify_clusters};
pub use errors::{CompareError, Result};
pub use options::{CompareOptions, SeqType, default_prefix};

use crate::consts::*;

///
/// Check that `program` runs and identifies itself as CD-HIT when asked for help.
///
/// CD-HIT exits with a non-zero status after printing its usage, so only the
/// banner is inspected.
///
pub fn check_cdhit(program: &str) -> Result<()> {
    let output = Command::new(program)
        .arg("-h")
        .output()
        .map_err(|_| CompareError::CdHitNotFound(program.to_string()))?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    if stdout.contains(CDHIT_BANNER) || stderr.contains(CDHIT_BANNER) {
        Ok(())
    } else {
        Err(CompareError::CdHitNotFound(program.to_string()))
    }
}

fn run_cdhit(program: &str, workdir: &Path, identity: f64) -> Result<()> {
    let mut command = Command::new(program);
    command
        .current_dir(workdir)
        .args(["-i", RELABELED_FASTA, "-o", CLUSTER_OUTPUT])
        .args(["-c", &identity.to_string()])
        .args(["-d", DESCRIPTION_LENGTH]);
    debug!("Running {:?} in {}", command, workdir.display());

    let output = command.output()?;
    if output.status.success() {
        Ok(())
    } else {
        Err(CompareError::CdHitFailed {
            program: program.to_string(),
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}

fn write_relabeled(fasta1: &Path, fasta2: &Path, prefixes: (&str, &str), target: &Path) -> Result<()> {
    let mut out = BufWriter::new(File::create(target)?);
    for (path, prefix) in [(fasta1, prefixes.0), (fasta2, prefixes.1)] {
        let count = relabel_fasta(path, prefix, &mut out).map_err(|source| CompareError::Relabel {
            path: path.to_path_buf(),
            source,
        })?;
        info!(
            "Relabeled {} sequences from {} (prefix: {})",
            count,
            path.display(),
            prefix
        );
    }
    out.flush()?;
    Ok(())
}

///
/// Cluster two FASTA files together and report which sequences are shared.
///
/// Work files live in a temporary directory under [CompareOptions::tempdir]
/// that is removed when the comparison ends.
///
/// # Arguments
///
/// - fasta1: first dataset
/// - fasta2: second dataset
/// - options: tags, identity threshold, sequence type and binary
///
pub fn compare_fasta<P: AsRef<Path>, Q: AsRef<Path>>(
    fasta1: P,
    fasta2: Q,
    options: &CompareOptions,
) -> Result<CompareReport> {
    let (fasta1, fasta2) = (fasta1.as_ref(), fasta2.as_ref());

    let (prefix1, prefix2) = options.prefixes_for(fasta1, fasta2);
    if prefix1 == prefix2 {
        return Err(CompareError::IdenticalPrefixes(prefix1));
    }
    // a relabeled name could then belong to either dataset
    if prefix2.starts_with(&prefix1) {
        return Err(CompareError::OverlappingPrefixes(prefix1, prefix2));
    }
    if prefix1.starts_with(&prefix2) {
        return Err(CompareError::OverlappingPrefixes(prefix2, prefix1));
    }

    let identity = options.identity();
    if !(identity > 0.0 && identity <= 1.0) {
        return Err(CompareError::InvalidIdentity(identity));
    }

    let seq_type = options.seq_type_for(fasta1);
    let program = options.program_for(seq_type);
    check_cdhit(&program)?;

    let workdir = tempfile::Builder::new()
        .prefix("cdhit-compare")
        .tempdir_in(options.tempdir())?;
    debug!("Working directory: {}", workdir.path().display());

    write_relabeled(
        fasta1,
        fasta2,
        (prefix1.as_str(), prefix2.as_str()),
        &workdir.path().join(RELABELED_FASTA),
    )?;

    info!("Clustering with {} at identity {}", program, identity);
    run_cdhit(&program, workdir.path(), identity)?;

    let report_path = workdir
        .path()
        .join(format!("{}{}", CLUSTER_OUTPUT, CLSTR_EXTENSION));
    let clusters = read_cdhit(report_path)?.read_all()?;
    info!("Read {} clusters", clusters.len());

    Ok(classify_clusters(&clusters, &prefix1, &prefix2))
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::*;

    #[rstest]
    fn test_missing_binary_is_not_found() {
        let err = check_cdhit("/nonexistent/bin/cd-hit").unwrap_err();
        assert!(matches!(err, CompareError::CdHitNotFound(_)));
    }

    #[rstest]
    fn test_identical_prefixes_rejected() {
        let options = CompareOptions::new().with_tags("same", "same_");
        let err = compare_fasta("a.faa", "b.faa", &options).unwrap_err();
        assert!(matches!(err, CompareError::IdenticalPrefixes(ref p) if p == "same_"));
    }

    #[rstest]
    #[case("S", "S_1")]
    #[case("S_1", "S")]
    fn test_overlapping_prefixes_rejected(#[case] tag1: &str, #[case] tag2: &str) {
        let options = CompareOptions::new().with_tags(tag1, tag2);
        let err = compare_fasta("a.faa", "b.faa", &options).unwrap_err();
        assert!(matches!(
            err,
            CompareError::OverlappingPrefixes(ref short, ref long) if short == "S_" && long == "S_1_"
        ));
    }

    #[rstest]
    #[case(0.0)]
    #[case(1.5)]
    #[case(-0.2)]
    fn test_identity_out_of_range(#[case] identity: f64) {
        let options = CompareOptions::new().with_identity(identity);
        let err = compare_fasta("a.faa", "b.faa", &options).unwrap_err();
        assert!(matches!(err, CompareError::InvalidIdentity(_)));
    }

    #[rstest]
    fn test_validation_happens_before_running() {
        let options = CompareOptions::new().with_program("/nonexistent/bin/cd-hit");
        let err = compare_fasta("a.faa", "b.faa", &options).unwrap_err();
        assert!(matches!(err, CompareError::CdHitNotFound(_)));
    }
}
