//! Nullable infrastructure for deterministic testing.
//!
//! The roll source is abstracted behind [`fairroll_client::RollSource`].
//! This crate provides test-friendly implementations that:
//! - Return pre-configured records
//! - Can be inspected programmatically
//! - Never touch the network
//!
//! Usage: swap [`fairroll_client::RollClient`] for [`NullRollSource`] in tests,
//! and build consistent records with [`RollFixture`].

pub mod fixture;
pub mod source;

pub use fixture::RollFixture;
pub use source::NullRollSource;
