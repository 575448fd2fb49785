use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::ArgMatches;

use cdhit_compare::{CompareOptions, SeqType, compare_fasta};

pub fn compare_options(matches: &ArgMatches) -> Result<CompareOptions> {
    let mut options = CompareOptions::new();

    if let Some(tag) = matches.get_one::<String>("tag1") {
        options = options.with_tag1(tag);
    }
    if let Some(tag) = matches.get_one::<String>("tag2") {
        options = options.with_tag2(tag);
    }
    if let Some(identity) = matches.get_one::<f64>("id") {
        options = options.with_identity(*identity);
    }
    if let Some(seq_type) = matches.get_one::<String>("type") {
        options = options.with_seq_type(seq_type.parse::<SeqType>()?);
    }
    if let Some(dir) = matches.get_one::<String>("tempdir") {
        options = options.with_tempdir(PathBuf::from(dir));
    }

    Ok(options)
}

pub fn run_compare(matches: &ArgMatches) -> Result<()> {
    let fasta1 = matches
        .get_one::<String>("fasta1")
        .expect("A path to the first FASTA file is required.");

    let fasta2 = matches
        .get_one::<String>("fasta2")
        .expect("A path to the second FASTA file is required.");

    let options = compare_options(matches)?;
    let report = compare_fasta(fasta1, fasta2, &options)
        .with_context(|| format!("Failed to compare {} and {}", fasta1, fasta2))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write!(out, "{}", report)?;
    out.flush()?;

    Ok(())
}
