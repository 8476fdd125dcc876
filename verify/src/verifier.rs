//! End-to-end verification of a disclosed roll record.

use crate::commitment::check_commitment;
use crate::roll::{classify, combine, outcome_space, reduce};
use crate::FairnessError;
use fairroll_crypto::decode_hex;
use fairroll_types::{Outcome, RollField, RollRecord, Sha512Hash};
use serde::Serialize;

/// A verified roll together with the digests recomputed along the way.
///
/// Callers use the digests to report each step; the verifier itself never logs.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Verification {
    pub outcome: Outcome,
    /// `SHA-512(server_rand)`, equal to the published commitment.
    pub commitment: Sha512Hash,
    /// `SHA-512(server_rand || client_rand)`.
    pub combined: Sha512Hash,
}

/// Recomputes a roll from its disclosed seeds and checks it against the record.
#[derive(Clone, Copy, Debug, Default)]
pub struct FairnessVerifier;

impl FairnessVerifier {
    pub fn new() -> Self {
        Self
    }

    /// Verify a record, returning only the outcome.
    pub fn verify(&self, record: &RollRecord) -> Result<Outcome, FairnessError> {
        self.verify_detailed(record).map(|v| v.outcome)
    }

    /// Verify a record, returning the outcome and intermediate digests.
    ///
    /// Checks run in order and the first failure is returned:
    /// 1. all three hex fields decode
    /// 2. `SHA-512(server_rand)` equals `server_hash`
    /// 3. `win_value` is positive
    /// 4. `SHA-512(server_rand || client_rand) mod win_value` equals `roll_value`
    pub fn verify_detailed(&self, record: &RollRecord) -> Result<Verification, FairnessError> {
        let server_hash = decode_field(record, RollField::ServerHash)?;
        let server_rand = decode_field(record, RollField::ServerRand)?;
        let client_rand = decode_field(record, RollField::ClientRand)?;

        let commitment = check_commitment(&server_hash, &server_rand)?;

        let space = outcome_space(record.win_value)?;
        let combined = combine(&server_rand, &client_rand);
        // reduce() < win_value <= i64::MAX
        let value = reduce(&combined, space) as i64;

        if value != record.roll_value {
            return Err(FairnessError::OutcomeMismatch {
                claimed: record.roll_value,
                computed: value,
            });
        }

        Ok(Verification {
            outcome: classify(value, record.bet_value, record.win_value),
            commitment,
            combined,
        })
    }
}

/// Verify a record with the default verifier.
pub fn verify(record: &RollRecord) -> Result<Outcome, FairnessError> {
    FairnessVerifier.verify(record)
}

fn decode_field(record: &RollRecord, field: RollField) -> Result<Vec<u8>, FairnessError> {
    decode_hex(record.field(field))
        .map_err(|source| FairnessError::MalformedEncoding { field, source })
}
