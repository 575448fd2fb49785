use std::collections::BTreeMap;
use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::ArgMatches;
use serde::Serialize;

use cdhit_core::models::Cluster;
use cdhit_io::{ClstrReader, RepresentativePolicy};

const HISTOGRAM_WIDTH: usize = 50;

#[derive(Serialize, Debug, PartialEq)]
pub struct ReportStats {
    pub input: String,
    pub clusters: usize,
    pub sequences: usize,
    pub min_size: usize,
    pub mean_size: f64,
    pub max_size: usize,
}

impl ReportStats {
    pub fn from_sizes(input: &str, sizes: &[usize]) -> Self {
        let sequences: usize = sizes.iter().sum();
        let mean_size = match sizes.len() {
            0 => 0.0,
            n => sequences as f64 / n as f64,
        };
        ReportStats {
            input: input.to_string(),
            clusters: sizes.len(),
            sequences,
            min_size: sizes.iter().copied().min().unwrap_or(0),
            mean_size,
            max_size: sizes.iter().copied().max().unwrap_or(0),
        }
    }
}

#[derive(Serialize)]
struct InfoOutput<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    stats: Option<&'a ReportStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    histogram: Option<&'a BTreeMap<usize, usize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    clusters: Option<&'a [Cluster]>,
}

/// Number of clusters per cluster size.
pub fn size_histogram(sizes: &[usize]) -> BTreeMap<usize, usize> {
    let mut histogram = BTreeMap::new();
    for size in sizes {
        *histogram.entry(*size).or_insert(0) += 1;
    }
    histogram
}

pub fn write_stats<W: Write>(out: &mut W, stats: &ReportStats) -> io::Result<()> {
    writeln!(out, "Input file: {}", stats.input)?;
    writeln!(out, "Number of clusters: {}", stats.clusters)?;
    writeln!(out, "Total sequences: {}", stats.sequences)?;
    writeln!(
        out,
        "Cluster size: min {}, mean {:.2}, max {}",
        stats.min_size, stats.mean_size, stats.max_size
    )
}

pub fn write_histogram<W: Write>(out: &mut W, histogram: &BTreeMap<usize, usize>) -> io::Result<()> {
    let tallest = histogram.values().copied().max().unwrap_or(0);
    let size_width = histogram
        .keys()
        .last()
        .map(|size| size.to_string().len())
        .unwrap_or(1);

    for (size, count) in histogram {
        // at least one mark for any non-empty bin
        let bar = (count * HISTOGRAM_WIDTH).div_ceil(tallest.max(1));
        writeln!(
            out,
            "{:>width$} | {} {}",
            size,
            "#".repeat(bar),
            count,
            width = size_width
        )?;
    }
    Ok(())
}

pub fn write_cluster<W: Write>(out: &mut W, cluster: &Cluster) -> io::Result<()> {
    writeln!(out, "{}", cluster)?;
    for member in cluster {
        writeln!(out, "   {}", member)?;
    }
    Ok(())
}

pub fn run_info(matches: &ArgMatches) -> Result<()> {
    let clstr = matches
        .get_one::<String>("clstr")
        .expect("A path to a cluster report is required.");

    let show_stats = !matches.get_flag("no-stats");
    let show_hist = matches.get_flag("hist");
    let show_all = matches.get_flag("all");
    let as_json = matches.get_flag("json");
    let policy = match matches.get_flag("strict") {
        true => RepresentativePolicy::Strict,
        false => RepresentativePolicy::Warn,
    };

    let reader = ClstrReader::builder()
        .with_representative_policy(policy)
        .from_path(clstr)
        .with_context(|| format!("Failed to open cluster report {}", clstr))?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let mut sizes = Vec::new();
    let mut kept = Vec::new();
    for cluster in reader {
        let cluster = cluster.with_context(|| format!("Failed to read {}", clstr))?;
        sizes.push(cluster.len());
        if show_all {
            match as_json {
                true => kept.push(cluster),
                false => write_cluster(&mut out, &cluster)?,
            }
        }
    }

    let stats = ReportStats::from_sizes(clstr, &sizes);
    let histogram = size_histogram(&sizes);

    if as_json {
        let output = InfoOutput {
            stats: show_stats.then_some(&stats),
            histogram: show_hist.then_some(&histogram),
            clusters: show_all.then_some(kept.as_slice()),
        };
        serde_json::to_writer_pretty(&mut out, &output).context("Failed to serialize output")?;
        writeln!(out)?;
    } else {
        if show_stats {
            write_stats(&mut out, &stats)?;
        }
        if show_hist {
            write_histogram(&mut out, &histogram)?;
        }
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use cdhit_core::models::Member;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_stats_from_sizes() {
        let stats = ReportStats::from_sizes("x.clstr", &[1, 2, 1, 3, 1, 1, 1]);
        assert_eq!(stats.clusters, 7);
        assert_eq!(stats.sequences, 10);
        assert_eq!(stats.min_size, 1);
        assert_eq!(stats.max_size, 3);

        let mut out = Vec::new();
        write_stats(&mut out, &stats).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Input file: x.clstr\nNumber of clusters: 7\nTotal sequences: 10\nCluster size: min 1, mean 1.43, max 3\n"
        );
    }

    #[rstest]
    fn test_stats_of_empty_report() {
        let stats = ReportStats::from_sizes("empty.clstr", &[]);
        assert_eq!(stats.clusters, 0);
        assert_eq!(stats.mean_size, 0.0);
        assert_eq!(stats.min_size, 0);
    }

    #[rstest]
    fn test_histogram() {
        let histogram = size_histogram(&[1, 2, 1, 3, 1, 1, 1]);
        assert_eq!(histogram, BTreeMap::from([(1, 5), (2, 1), (3, 1)]));

        let mut out = Vec::new();
        write_histogram(&mut out, &histogram).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], format!("1 | {} 5", "#".repeat(50)));
        assert_eq!(lines[1], format!("2 | {} 1", "#".repeat(10)));
    }

    #[rstest]
    fn test_write_cluster() {
        let members = vec![
            "0\t300aa, >a... *".parse::<Member>().unwrap(),
            "1\t290aa, >b... at 95.00%".parse::<Member>().unwrap(),
        ];
        let cluster = Cluster::new("Cluster 0", members);

        let mut out = Vec::new();
        write_cluster(&mut out, &cluster).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Cluster(label=Cluster 0, len=2)");
        assert!(lines[1].starts_with("   Member(ordinal=0, name=a"));
    }
}
