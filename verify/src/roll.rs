//! Roll derivation: combine both seeds, reduce into the outcome space, classify.

use std::num::NonZeroU64;

use crate::FairnessError;
use fairroll_crypto::sha512_multi;
use fairroll_types::{Outcome, RollResult, Sha512Hash};
use num_bigint::BigUint;

/// `SHA-512(server_rand || client_rand)`. Server bytes always come first.
pub fn combine(server_rand: &[u8], client_rand: &[u8]) -> Sha512Hash {
    sha512_multi(&[server_rand, client_rand])
}

/// Validate the size of the outcome space.
pub fn outcome_space(win_value: i64) -> Result<NonZeroU64, FairnessError> {
    u64::try_from(win_value)
        .ok()
        .and_then(NonZeroU64::new)
        .ok_or(FairnessError::InvalidWinValue(win_value))
}

/// Read `digest` as a big-endian unsigned integer and reduce it modulo `modulus`.
///
/// The 512-bit value does not fit any native integer, so the reduction runs
/// on a `BigUint`. The result is always in `[0, modulus)`.
pub fn reduce(digest: &Sha512Hash, modulus: NonZeroU64) -> u64 {
    let comb_value = BigUint::from_bytes_be(digest.as_bytes());
    let remainder = comb_value % BigUint::from(modulus.get());
    // A zero remainder has no digits; anything else fits in one.
    remainder.iter_u64_digits().next().unwrap_or(0)
}

/// The roll produced by a pair of seeds in an outcome space of `win_value`.
pub fn roll_value(
    server_rand: &[u8],
    client_rand: &[u8],
    win_value: i64,
) -> Result<i64, FairnessError> {
    let space = outcome_space(win_value)?;
    let roll = reduce(&combine(server_rand, client_rand), space);
    // roll < win_value <= i64::MAX
    Ok(roll as i64)
}

/// Classify a verified roll. Rolls strictly below `bet_value` win `win_value`;
/// everything else loses `bet_value`.
pub fn classify(value: i64, bet_value: i64, win_value: i64) -> Outcome {
    if value < bet_value {
        Outcome {
            value,
            result: RollResult::Win,
            amount: win_value,
        }
    } else {
        Outcome {
            value,
            result: RollResult::Loss,
            amount: bet_value,
        }
    }
}
