pub mod cluster;
pub mod member;
pub mod sequence;

// re-export for cleaner imports
pub use self::cluster::Cluster;
pub use self::member::{AlignmentSpan, Member, SequenceKind, Strand};
pub use self::sequence::Sequence;
