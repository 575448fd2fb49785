use std::fmt::{self, Display};

use cdhit_core::models::{Cluster, Member};
use log::warn;

use crate::consts::*;

/// Which input a relabeled sequence came from, with its original name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin<'a> {
    First(&'a str),
    Second(&'a str),
}

impl<'a> Origin<'a> {
    fn name(&self) -> &'a str {
        match self {
            Origin::First(name) | Origin::Second(name) => name,
        }
    }

    fn same_dataset(&self, other: &Origin) -> bool {
        matches!(
            (self, other),
            (Origin::First(_), Origin::First(_)) | (Origin::Second(_), Origin::Second(_))
        )
    }
}

///
/// Outcome of comparing two datasets: entries grouped into buckets, in the
/// order first-only, second-only, `both`, `multiple`, `dupl`.
///
#[derive(Debug, Clone, PartialEq)]
pub struct CompareReport {
    buckets: Vec<(String, Vec<String>)>,
}

impl CompareReport {
    fn new(prefix1: &str, prefix2: &str) -> Self {
        let buckets = [prefix1, prefix2, BOTH_BUCKET, MULTIPLE_BUCKET, DUPLICATE_BUCKET]
            .into_iter()
            .map(|bucket| (bucket.to_string(), Vec::new()))
            .collect();
        CompareReport { buckets }
    }

    fn push(&mut self, bucket: &str, entry: String) {
        if let Some((_, entries)) = self.buckets.iter_mut().find(|(name, _)| name == bucket) {
            entries.push(entry);
        }
    }

    pub fn buckets(&self) -> &[(String, Vec<String>)] {
        &self.buckets
    }

    /// Entries of one bucket, empty if the bucket is unknown.
    pub fn bucket(&self, name: &str) -> &[String] {
        self.buckets
            .iter()
            .find(|(bucket, _)| bucket == name)
            .map(|(_, entries)| entries.as_slice())
            .unwrap_or(&[])
    }

    /// Number of entries across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(|(_, entries)| entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Display for CompareReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (bucket, entries) in &self.buckets {
            for entry in entries {
                writeln!(f, "{}\t{}", bucket, entry)?;
            }
        }
        Ok(())
    }
}

// the longer prefix is tried first so `S_1_x` is not read as `S_` + `1_x`
fn origin<'a>(member: &'a Member, prefix1: &str, prefix2: &str) -> Option<Origin<'a>> {
    let name = member.name();
    let first = || name.strip_prefix(prefix1).map(Origin::First);
    let second = || name.strip_prefix(prefix2).map(Origin::Second);

    if prefix2.len() > prefix1.len() {
        second().or_else(first)
    } else {
        first().or_else(second)
    }
}

///
/// Sort the clusters of a combined clustering run into comparison buckets.
///
/// Sequence names must carry `prefix1` or `prefix2`; members with neither
/// are logged and left out.
///
/// # Arguments
///
/// - clusters: clusters of the relabeled union of both datasets
/// - prefix1: name prefix of the first dataset
/// - prefix2: name prefix of the second dataset
///
pub fn classify_clusters<'c, I>(clusters: I, prefix1: &str, prefix2: &str) -> CompareReport
where
    I: IntoIterator<Item = &'c Cluster>,
{
    let mut report = CompareReport::new(prefix1, prefix2);

    for cluster in clusters {
        let origins: Vec<Origin> = cluster
            .iter()
            .filter_map(|member| {
                let found = origin(member, prefix1, prefix2);
                if found.is_none() {
                    warn!(
                        "{}: sequence {} has neither prefix {} nor {}",
                        cluster.label(),
                        member.name(),
                        prefix1,
                        prefix2
                    );
                }
                found
            })
            .collect();

        let joined = || {
            origins
                .iter()
                .map(Origin::name)
                .collect::<Vec<_>>()
                .join(":")
        };

        match origins.as_slice() {
            [] => {}
            [Origin::First(name)] => report.push(prefix1, name.to_string()),
            [Origin::Second(name)] => report.push(prefix2, name.to_string()),
            [a, b] if a.same_dataset(b) => report.push(DUPLICATE_BUCKET, joined()),
            [_, _] => report.push(BOTH_BUCKET, joined()),
            _ => report.push(MULTIPLE_BUCKET, joined()),
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    use cdhit_core::models::Member;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn cluster(label: &str, lines: &[&str]) -> Cluster {
        let members = lines
            .iter()
            .map(|line| line.parse::<Member>().unwrap())
            .collect();
        Cluster::new(label, members)
    }

    #[fixture]
    fn clusters() -> Vec<Cluster> {
        vec![
            cluster("Cluster 0", &["0\t300aa, >left_g1... *"]),
            cluster("Cluster 1", &["0\t280aa, >right_g9... *"]),
            cluster(
                "Cluster 2",
                &["0\t250aa, >left_g2... *", "1\t250aa, >right_g2... at 100.00%"],
            ),
            cluster(
                "Cluster 3",
                &["0\t240aa, >right_g3... *", "1\t239aa, >right_g4... at 99.58%"],
            ),
            cluster(
                "Cluster 4",
                &[
                    "0\t200aa, >left_g5... *",
                    "1\t200aa, >right_g5... at 100.00%",
                    "2\t198aa, >right_g6... at 97.00%",
                ],
            ),
        ]
    }

    #[rstest]
    fn test_classify_buckets(clusters: Vec<Cluster>) {
        let report = classify_clusters(&clusters, "left_", "right_");

        assert_eq!(report.bucket("left_"), ["g1"]);
        assert_eq!(report.bucket("right_"), ["g9"]);
        assert_eq!(report.bucket("both"), ["g2:g2"]);
        assert_eq!(report.bucket("dupl"), ["g3:g4"]);
        assert_eq!(report.bucket("multiple"), ["g5:g5:g6"]);
        assert_eq!(report.len(), 5);
    }

    #[rstest]
    fn test_report_display_order(clusters: Vec<Cluster>) {
        let report = classify_clusters(&clusters, "left_", "right_");
        assert_eq!(
            report.to_string(),
            "left_\tg1\nright_\tg9\nboth\tg2:g2\nmultiple\tg5:g5:g6\ndupl\tg3:g4\n"
        );
    }

    #[rstest]
    fn test_unknown_prefix_is_skipped() {
        let clusters = vec![cluster(
            "Cluster 0",
            &["0\t100aa, >other_x... *", "1\t100aa, >left_y... at 98.00%"],
        )];
        let report = classify_clusters(&clusters, "left_", "right_");

        assert_eq!(report.bucket("left_"), ["y"]);
        assert_eq!(report.len(), 1);
    }

    #[rstest]
    fn test_empty_input() {
        let report = classify_clusters(&Vec::<Cluster>::new(), "a_", "b_");
        assert!(report.is_empty());
        assert_eq!(report.to_string(), "");
        assert_eq!(report.buckets().len(), 5);
    }

    #[rstest]
    #[case("S_", "S_1_")]
    #[case("S_1_", "S_")]
    fn test_nested_prefixes_use_longest_match(#[case] prefix1: &str, #[case] prefix2: &str) {
        let clusters = vec![
            cluster("Cluster 0", &["0\t100aa, >S_1_x... *"]),
            cluster("Cluster 1", &["0\t100aa, >S_y... *"]),
        ];
        let report = classify_clusters(&clusters, prefix1, prefix2);

        assert_eq!(report.bucket("S_1_"), ["x"]);
        assert_eq!(report.bucket("S_"), ["y"]);
    }
}
