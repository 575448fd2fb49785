use std::fmt::{self, Display};
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::MemberLineError;

/// Outer shape of a member line: `0\t281aa, >seqA... <tail>`.
static RECORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<ordinal>\d+)\s+(?P<size>\d+)(?P<unit>aa|nt),\s+>(?P<name>.+?)\.\.\.\s+(?P<tail>.+)$",
    )
    .expect("member record pattern is valid")
});

/// Alignment tail of a non-representative line: `at [qs:qe:rs:re/][+|-/]97.81%`.
static TAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^at\s+(?:(?P<qs>\d+):(?P<qe>\d+):(?P<rs>\d+):(?P<re>\d+)/)?(?:(?P<strand>[+-])/)?(?P<percent>\d+(?:\.\d+)?)%$",
    )
    .expect("alignment tail pattern is valid")
});

const REPRESENTATIVE_MARKER: &str = "*";

///
/// Molecule type of a clustered sequence, taken from the `aa`/`nt` length unit.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SequenceKind {
    Protein,
    NucleicAcid,
    Unknown,
}

impl Display for SequenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SequenceKind::Protein => "Protein",
            SequenceKind::NucleicAcid => "DNA/RNA",
            SequenceKind::Unknown => "None",
        };
        write!(f, "{}", s)
    }
}

///
/// Orientation of a nucleotide alignment against the representative.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Strand {
    Plus,
    Minus,
    NotApplicable,
}

impl Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Strand::Plus => "+",
            Strand::Minus => "-",
            Strand::NotApplicable => ".",
        };
        write!(f, "{}", s)
    }
}

///
/// Alignment coordinates printed by CD-HIT when run with `-p 1`:
/// start and end on the member, then start and end on the representative (1-based).
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AlignmentSpan {
    pub query_start: u32,
    pub query_end: u32,
    pub representative_start: u32,
    pub representative_end: u32,
}

impl Display for AlignmentSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            self.query_start, self.query_end, self.representative_start, self.representative_end
        )
    }
}

///
/// One sequence's membership in a cluster, parsed from a single `.clstr` line.
///
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Member {
    ordinal: u32,
    name: String,
    length: u32,
    kind: SequenceKind,
    is_representative: bool,
    identity: f64,
    strand: Strand,
    alignment: Option<AlignmentSpan>,
}

impl Member {
    /// Position of the member inside its cluster, as printed in the file.
    pub fn ordinal(&self) -> u32 {
        self.ordinal
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Residue or base count.
    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn kind(&self) -> SequenceKind {
        self.kind
    }

    pub fn is_representative(&self) -> bool {
        self.is_representative
    }

    /// Percent identity to the representative; 100.0 for the representative itself.
    pub fn identity(&self) -> f64 {
        self.identity
    }

    pub fn strand(&self) -> Strand {
        self.strand
    }

    pub fn alignment(&self) -> Option<&AlignmentSpan> {
        self.alignment.as_ref()
    }
}

impl Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Member(ordinal={}, name={}, length={}, identity={}, representative={}, kind={}, strand={})",
            self.ordinal,
            self.name,
            self.length,
            self.identity,
            self.is_representative,
            self.kind,
            self.strand
        )
    }
}

fn parse_number<T: FromStr>(digits: &str) -> Result<T, MemberLineError> {
    digits
        .parse::<T>()
        .map_err(|_| MemberLineError::Number(digits.to_string()))
}

impl FromStr for Member {
    type Err = MemberLineError;

    ///
    /// Parse one trimmed member line of a `.clstr` file.
    ///
    /// # Arguments:
    /// - line: a line such as `1\t502nt, >read_7... at 1:502:1:503/-/97.81%`
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let caps = RECORD_RE
            .captures(line)
            .ok_or(MemberLineError::RecordShape)?;

        let ordinal: u32 = parse_number(&caps["ordinal"])?;
        let length: u32 = parse_number(&caps["size"])?;
        if length == 0 {
            return Err(MemberLineError::ZeroLength);
        }

        let kind = match &caps["unit"] {
            "aa" => SequenceKind::Protein,
            "nt" => SequenceKind::NucleicAcid,
            _ => SequenceKind::Unknown,
        };

        let mut strand = match kind {
            SequenceKind::NucleicAcid => Strand::Plus,
            _ => Strand::NotApplicable,
        };

        let tail = caps["tail"].trim();
        let mut alignment = None;

        let (is_representative, identity) = if tail == REPRESENTATIVE_MARKER {
            (true, 100.0)
        } else {
            let attrs = TAIL_RE
                .captures(tail)
                .ok_or_else(|| MemberLineError::AlignmentTail(tail.to_string()))?;

            if let (Some(qs), Some(qe), Some(rs), Some(re)) = (
                attrs.name("qs"),
                attrs.name("qe"),
                attrs.name("rs"),
                attrs.name("re"),
            ) {
                alignment = Some(AlignmentSpan {
                    query_start: parse_number(qs.as_str())?,
                    query_end: parse_number(qe.as_str())?,
                    representative_start: parse_number(rs.as_str())?,
                    representative_end: parse_number(re.as_str())?,
                });
            }

            if let Some(sign) = attrs.name("strand") {
                // the pattern only admits `+` or `-`
                let signed = match sign.as_str() {
                    "-" => Strand::Minus,
                    _ => Strand::Plus,
                };
                if kind == SequenceKind::Protein {
                    return Err(MemberLineError::ProteinStrand(signed));
                }
                strand = signed;
            }

            let identity: f64 = parse_number(&attrs["percent"])?;
            if !(0.0..=100.0).contains(&identity) {
                return Err(MemberLineError::IdentityOutOfRange(identity));
            }
            (false, identity)
        };

        Ok(Member {
            ordinal,
            name: caps["name"].to_string(),
            length,
            kind,
            is_representative,
            identity,
            strand,
            alignment,
        })
    }
}
