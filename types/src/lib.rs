//! Fundamental types for provably fair roll verification.
//!
//! This crate defines the types shared across every other crate in the workspace:
//! the roll record disclosed by the dice service, the verified outcome, and the
//! SHA-512 digest type used for commitments.

pub mod hash;
pub mod outcome;
pub mod record;

pub use hash::Sha512Hash;
pub use outcome::{Outcome, RollResult};
pub use record::{RollField, RollRecord};
