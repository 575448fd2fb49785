use std::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

///
/// A single FASTA record: identifier, optional description and the full
/// (unwrapped) sequence.
///
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sequence {
    pub name: String,
    pub comment: Option<String>,
    pub sequence: String,
}

impl Sequence {
    pub fn new(name: impl Into<String>, comment: Option<String>, sequence: impl Into<String>) -> Self {
        Sequence {
            name: name.into(),
            comment,
            sequence: sequence.into(),
        }
    }

    ///
    /// Build a record from a defline (without `>`). The first whitespace
    /// delimited token is the name, the rest is the comment.
    ///
    pub fn from_defline(defline: &str, sequence: impl Into<String>) -> Self {
        let defline = defline.trim();
        let (name, comment) = match defline.split_once(char::is_whitespace) {
            Some((name, rest)) => {
                let rest = rest.trim();
                (name, (!rest.is_empty()).then(|| rest.to_string()))
            }
            None => (defline, None),
        };
        Sequence::new(name, comment, sequence)
    }

    /// Name and comment joined by a single space.
    pub fn defline(&self) -> String {
        match &self.comment {
            Some(comment) => format!("{} {}", self.name, comment),
            None => self.name.clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    ///
    /// Render the record as FASTA text, wrapping the sequence every
    /// `line_length` characters (0 disables wrapping). No trailing newline.
    ///
    pub fn to_fasta(&self, line_length: usize) -> String {
        let mut out = format!(">{}\n", self.defline());
        if line_length == 0 {
            out.push_str(&self.sequence);
            return out;
        }

        let residues: Vec<char> = self.sequence.chars().collect();
        let lines: Vec<String> = residues
            .chunks(line_length)
            .map(|chunk| chunk.iter().collect())
            .collect();
        out.push_str(&lines.join("\n"));
        out
    }
}

impl Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_fasta(0))
    }
}
