//! Human and machine-readable reporting of a verified roll.

use fairroll_types::{Outcome, RollRecord, Sha512Hash};
use fairroll_verify::Verification;
use serde::Serialize;
use tracing::info;

/// What the service claims, logged before anything is checked.
pub fn claim_summary(record: &RollRecord) -> String {
    format!(
        "claimed Server Hash: {}, Client Rand: {}",
        record.server_hash, record.client_rand
    )
}

/// Where a verified record came from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RollOrigin {
    Service { address: String, request_id: i64 },
    File { path: String },
}

/// Everything printed by `--json`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VerificationReport {
    pub origin: RollOrigin,
    pub server_hash: Sha512Hash,
    pub client_rand: String,
    pub combined_hash: Sha512Hash,
    pub bet_value: i64,
    pub win_value: i64,
    pub outcome: Outcome,
}

impl VerificationReport {
    pub fn new(origin: RollOrigin, record: &RollRecord, verification: &Verification) -> Self {
        Self {
            origin,
            server_hash: verification.commitment,
            client_rand: record.client_rand.clone(),
            combined_hash: verification.combined,
            bet_value: record.bet_value,
            win_value: record.win_value,
            outcome: verification.outcome,
        }
    }

    /// One-line verdict, e.g. `provably fair win of 100 Satoshi`.
    pub fn summary(&self) -> String {
        format!(
            "provably fair {} of {} Satoshi",
            self.outcome.result, self.outcome.amount
        )
    }

    /// Emit the verification steps as log events.
    pub fn log(&self) {
        info!("server hashes match");
        info!(combined_hash = %self.combined_hash, "roll value calculated at {}", self.outcome.value);
        info!(
            result = %self.outcome.result,
            amount = self.outcome.amount,
            "{}",
            self.summary()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fairroll_nullables::RollFixture;
    use fairroll_verify::FairnessVerifier;

    fn report(bet_value: i64) -> VerificationReport {
        let record = RollFixture::new(&[0x00], &[0xff]).bet(bet_value, 100).record();
        let verification = FairnessVerifier.verify_detailed(&record).unwrap();
        VerificationReport::new(
            RollOrigin::Service {
                address: "addr".into(),
                request_id: 9,
            },
            &record,
            &verification,
        )
    }

    #[test]
    fn summary_for_win_and_loss() {
        assert_eq!(report(50).summary(), "provably fair win of 100 Satoshi");
        assert_eq!(report(10).summary(), "provably fair loss of 10 Satoshi");
    }

    #[test]
    fn claim_summary_labels_unverified_hash() {
        let record = RollFixture::new(b"a", b"b").with_swapped_secret(b"c");
        let line = claim_summary(&record);
        assert!(line.starts_with("claimed Server Hash: "));
        assert!(line.contains(&record.server_hash));
        assert!(line.ends_with(&format!("Client Rand: {}", record.client_rand)));
    }

    #[test]
    fn json_layout() {
        let json = serde_json::to_value(report(50)).unwrap();
        assert_eq!(json["origin"]["kind"], "service");
        assert_eq!(json["origin"]["request_id"], 9);
        assert_eq!(json["client_rand"], "ff");
        assert_eq!(json["outcome"]["value"], 14);
        assert_eq!(json["outcome"]["result"], "win");
        assert_eq!(json["server_hash"].as_str().unwrap().len(), 128);
    }
}
