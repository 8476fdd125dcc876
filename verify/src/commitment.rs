//! Server commitments: `SHA-512(server_rand)` published ahead of the roll.

use crate::FairnessError;
use fairroll_crypto::{encode_hex, sha512};
use fairroll_types::Sha512Hash;

/// The commitment a server publishes for `server_rand`.
pub fn commitment(server_rand: &[u8]) -> Sha512Hash {
    sha512(server_rand)
}

/// Check that `server_rand` hashes to the committed `server_hash`.
///
/// Returns the recomputed commitment on success.
pub fn check_commitment(
    server_hash: &[u8],
    server_rand: &[u8],
) -> Result<Sha512Hash, FairnessError> {
    let computed = commitment(server_rand);
    if computed.as_bytes()[..] != *server_hash {
        return Err(FairnessError::CommitmentMismatch {
            committed: encode_hex(server_hash),
            computed,
        });
    }
    Ok(computed)
}
