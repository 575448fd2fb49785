//! # Core models for reading CD-HIT output.
//!
//! This crate holds the data model shared by the rest of the workspace: [models::Cluster]
//! and [models::Member] for `.clstr` cluster reports, [models::Sequence] for FASTA records,
//! and the decompressing line source every reader is built on ([utils::get_dynamic_reader]).
//!
//! A member line is parsed with [std::str::FromStr]:
//!
//! ```rust
//! use cdhit_core::models::{Member, SequenceKind, Strand};
//!
//! let member: Member = "1\t502nt, >read_7... at 1:502:1:503/-/97.81%".parse().unwrap();
//! assert_eq!(member.kind(), SequenceKind::NucleicAcid);
//! assert_eq!(member.strand(), Strand::Minus);
//! assert_eq!(member.identity(), 97.81);
//! ```
pub mod errors;
pub mod models;
pub mod utils;

pub use errors::MemberLineError;
