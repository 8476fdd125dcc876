use fairroll_crypto::HexError;
use fairroll_types::{RollField, Sha512Hash};
use thiserror::Error;

/// Why a roll failed verification. Every variant is conclusive.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FairnessError {
    #[error("malformed hex in {field}: {source}")]
    MalformedEncoding {
        field: RollField,
        #[source]
        source: HexError,
    },

    #[error("serverRand does not match serverHash: committed {committed}, computed {computed}")]
    CommitmentMismatch {
        committed: String,
        computed: Sha512Hash,
    },

    #[error("roll values do not match: claimed {claimed}, computed {computed}")]
    OutcomeMismatch { claimed: i64, computed: i64 },

    #[error("win value must be positive, got {0}")]
    InvalidWinValue(i64),
}
