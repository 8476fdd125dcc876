//! Provably fair roll verification.
//!
//! A dice service commits to `SHA-512(server_rand)` before a roll and reveals
//! `server_rand` afterwards. The roll is `SHA-512(server_rand || client_rand)`
//! read as a big-endian integer, reduced modulo `win_value`. Verification:
//! - **Commitment**: the revealed secret hashes to the published commitment
//! - **Derivation**: the recomputed roll equals the claimed roll
//! - **Classification**: rolls strictly below `bet_value` win
//!
//! Everything here is pure and deterministic; reporting is left to callers.

pub mod commitment;
pub mod error;
pub mod roll;
pub mod verifier;

pub use commitment::{check_commitment, commitment};
pub use error::FairnessError;
pub use roll::{classify, combine, outcome_space, reduce, roll_value};
pub use verifier::{verify, FairnessVerifier, Verification};
