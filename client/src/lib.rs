//! Retrieval of disclosed roll records.
//!
//! The verifier itself never touches the network; this crate is the only
//! place that does. [`RollSource`] abstracts the retrieval so the CLI can be
//! driven by [`RollClient`] in production and by a nullable in tests.

pub mod client;
pub mod error;

use std::future::Future;

use fairroll_types::RollRecord;

pub use client::{RollClient, DEFAULT_BASE_URL};
pub use error::ClientError;

/// Something that can produce the disclosed record for a past roll.
pub trait RollSource: Send + Sync {
    /// Fetch the record of roll `request_id` placed by `address`.
    fn fetch_roll(
        &self,
        address: &str,
        request_id: i64,
    ) -> impl Future<Output = Result<RollRecord, ClientError>> + Send;

    /// Human-readable name of this source.
    fn name(&self) -> &str;
}
