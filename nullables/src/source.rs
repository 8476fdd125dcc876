//! Nullable roll source — serve canned records without a network.

use std::collections::HashMap;
use std::sync::Mutex;

use fairroll_client::{ClientError, RollSource};
use fairroll_types::RollRecord;

/// A roll source that answers from an in-memory table and records every request.
pub struct NullRollSource {
    records: Mutex<HashMap<(String, i64), RollRecord>>,
    requests: Mutex<Vec<(String, i64)>>,
}

impl NullRollSource {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Serve `record` for roll `request_id` of `address`.
    pub fn with_record(self, address: &str, request_id: i64, record: RollRecord) -> Self {
        self.insert(address, request_id, record);
        self
    }

    pub fn insert(&self, address: &str, request_id: i64, record: RollRecord) {
        self.records
            .lock()
            .unwrap()
            .insert((address.to_string(), request_id), record);
    }

    /// Every `(address, request_id)` fetched so far, in order.
    pub fn requests(&self) -> Vec<(String, i64)> {
        self.requests.lock().unwrap().clone()
    }
}

impl Default for NullRollSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RollSource for NullRollSource {
    async fn fetch_roll(&self, address: &str, request_id: i64) -> Result<RollRecord, ClientError> {
        self.requests
            .lock()
            .unwrap()
            .push((address.to_string(), request_id));
        self.records
            .lock()
            .unwrap()
            .get(&(address.to_string(), request_id))
            .cloned()
            .ok_or_else(|| ClientError::RequestFailed("server response 404 Not Found".into()))
    }

    fn name(&self) -> &str {
        "null-source"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RollFixture;

    #[tokio::test]
    async fn serves_configured_record() {
        let record = RollFixture::new(b"server", b"client").record();
        let source = NullRollSource::new().with_record("addr", 3, record.clone());
        assert_eq!(source.fetch_roll("addr", 3).await.unwrap(), record);
        assert_eq!(source.requests(), vec![("addr".to_string(), 3)]);
    }

    #[tokio::test]
    async fn unknown_roll_is_request_failure() {
        let source = NullRollSource::new();
        let err = source.fetch_roll("addr", 1).await.unwrap_err();
        assert!(matches!(err, ClientError::RequestFailed(_)));
        assert_eq!(source.requests().len(), 1);
    }
}
