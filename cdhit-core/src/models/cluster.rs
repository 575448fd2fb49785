use std::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::models::Member;

///
/// Cluster struct, one group of sequences from a `.clstr` file together
/// with the name of its representative.
///
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cluster {
    label: String,
    members: Vec<Member>,
    representative_name: Option<String>,
}

impl Cluster {
    ///
    /// Create a new [Cluster] from a header label and its members in file order.
    ///
    /// The representative name is taken from the first member flagged as
    /// representative; clusters without one keep `None`.
    pub fn new(label: impl Into<String>, members: Vec<Member>) -> Self {
        let representative_name = members
            .iter()
            .find(|m| m.is_representative())
            .map(|m| m.name().to_string());

        Cluster {
            label: label.into(),
            members,
            representative_name,
        }
    }

    /// Header text without the leading `>`, e.g. `Cluster 3`.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn representative_name(&self) -> Option<&str> {
        self.representative_name.as_deref()
    }

    pub fn representative(&self) -> Option<&Member> {
        self.members.iter().find(|m| m.is_representative())
    }

    /// Number of members carrying the representative marker. Well formed clusters have exactly one.
    pub fn representative_count(&self) -> usize {
        self.members.iter().filter(|m| m.is_representative()).count()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Member> {
        self.members.iter()
    }

    pub fn into_members(self) -> Vec<Member> {
        self.members
    }
}

impl<'a> IntoIterator for &'a Cluster {
    type Item = &'a Member;
    type IntoIter = std::slice::Iter<'a, Member>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

impl Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cluster(label={}, len={})", self.label, self.members.len())
    }
}
