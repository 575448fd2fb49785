use thiserror::Error;

use crate::models::Strand;

/// Reasons a single `.clstr` member line can be rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MemberLineError {
    #[error("line does not match '<ordinal> <size>aa|nt, ><name>... <tail>'")]
    RecordShape,

    #[error("alignment descriptor is not '*' or 'at [span/][strand/]<percent>%': {0}")]
    AlignmentTail(String),

    #[error("number out of range: {0}")]
    Number(String),

    #[error("sequence length must be positive")]
    ZeroLength,

    #[error("identity {0}% is outside 0-100")]
    IdentityOutOfRange(f64),

    #[error("protein records carry no strand, found '{0}'")]
    ProteinStrand(Strand),
}
