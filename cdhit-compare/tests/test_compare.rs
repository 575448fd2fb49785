//! End-to-end comparison against a stand-in clustering binary.
#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use cdhit_compare::{CompareError, CompareOptions, SeqType, compare_fasta};
use pretty_assertions::assert_eq;
use rstest::*;

// Answers `-h` with a CD-HIT banner, checks the relabeled input and writes a fixed report.
const FAKE_CDHIT: &str = r#"#!/bin/sh
if [ "$1" = "-h" ]; then
    echo "====== CD-HIT version 4.8.1 (built on Jan 1 2024) ======"
    exit 1
fi
grep -q '^>correct1_ID1$' seqs.fasta || exit 2
grep -q '^>correct2_ID4$' seqs.fasta || exit 2
out=""
while [ $# -gt 0 ]; do
    case "$1" in
        -o) out="$2"; shift ;;
    esac
    shift
done
printf '>Cluster 0\n0\t11aa, >correct1_ID2... *\n1\t11aa, >correct2_ID2... at 100.00%%\n' > "$out.clstr"
printf '>Cluster 1\n0\t6aa, >correct1_ID1... *\n' >> "$out.clstr"
printf '>Cluster 2\n0\t5aa, >correct2_ID3... *\n1\t5aa, >correct2_ID4... at 100.00%%\n' >> "$out.clstr"
printf '>Cluster 3\n0\t5aa, >correct1_ID3... *\n1\t5aa, >correct1_ID4... at 100.00%%\n2\t5aa, >correct2_ID1... at 100.00%%\n' >> "$out.clstr"
touch "$out"
"#;

const FAILING_CDHIT: &str = r#"#!/bin/sh
if [ "$1" = "-h" ]; then
    echo "CD-HIT"
    exit 0
fi
echo "out of memory" >&2
exit 3
"#;

#[fixture]
fn path_to_data() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .join("tests/data")
}

fn install_script(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("cd-hit");
    fs::write(&path, body).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

#[rstest]
fn test_compare_with_stand_in_binary(path_to_data: PathBuf) {
    let bin_dir = tempfile::tempdir().unwrap();
    let program = install_script(bin_dir.path(), FAKE_CDHIT);
    let work_root = tempfile::tempdir().unwrap();

    let options = CompareOptions::new()
        .with_program(program.to_string_lossy())
        .with_tempdir(work_root.path().to_path_buf());
    let report = compare_fasta(
        path_to_data.join("fasta/correct1.faa"),
        path_to_data.join("fasta/correct2.faa"),
        &options,
    )
    .unwrap();

    assert_eq!(
        report.to_string(),
        "correct1_\tID1\nboth\tID2:ID2\nmultiple\tID3:ID4:ID1\ndupl\tID3:ID4\n"
    );
    assert_eq!(report.bucket("correct2_").len(), 0);

    // the working directory is removed once the comparison ends
    assert_eq!(fs::read_dir(work_root.path()).unwrap().count(), 0);
}

#[rstest]
fn test_compare_reports_failed_run(path_to_data: PathBuf) {
    let bin_dir = tempfile::tempdir().unwrap();
    let program = install_script(bin_dir.path(), FAILING_CDHIT);

    let options = CompareOptions::new()
        .with_tags("left", "right")
        .with_seq_type(SeqType::Protein)
        .with_program(program.to_string_lossy());
    let err = compare_fasta(
        path_to_data.join("fasta/correct1.faa"),
        path_to_data.join("fasta/correct2.faa"),
        &options,
    )
    .unwrap_err();

    match err {
        CompareError::CdHitFailed { code, stderr, .. } => {
            assert_eq!(code, Some(3));
            assert_eq!(stderr, "out of memory");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[rstest]
fn test_compare_rejects_damaged_input(path_to_data: PathBuf) {
    let bin_dir = tempfile::tempdir().unwrap();
    let program = install_script(bin_dir.path(), FAKE_CDHIT);

    let options = CompareOptions::new().with_program(program.to_string_lossy());
    let err = compare_fasta(
        path_to_data.join("fasta/damaged1.faa"),
        path_to_data.join("fasta/correct2.faa"),
        &options,
    )
    .unwrap_err();

    assert!(matches!(err, CompareError::Relabel { .. }));
}
