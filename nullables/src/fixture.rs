//! Deterministic roll fixtures — records that an honest service would produce.

use fairroll_crypto::encode_hex;
use fairroll_types::RollRecord;
use fairroll_verify::{commitment, roll_value};

/// Builds honest roll records from fixed seeds, with hooks to corrupt them.
#[derive(Clone, Debug)]
pub struct RollFixture {
    server_rand: Vec<u8>,
    client_rand: Vec<u8>,
    bet_value: i64,
    win_value: i64,
}

impl RollFixture {
    /// Seeds with a 50-in-100 bet.
    pub fn new(server_rand: &[u8], client_rand: &[u8]) -> Self {
        Self {
            server_rand: server_rand.to_vec(),
            client_rand: client_rand.to_vec(),
            bet_value: 50,
            win_value: 100,
        }
    }

    pub fn bet(mut self, bet_value: i64, win_value: i64) -> Self {
        self.bet_value = bet_value;
        self.win_value = win_value;
        self
    }

    /// The roll an honest service derives from these seeds.
    ///
    /// # Panics
    ///
    /// Panics if the configured `win_value` is not positive.
    pub fn roll(&self) -> i64 {
        roll_value(&self.server_rand, &self.client_rand, self.win_value)
            .expect("fixture win_value must be positive")
    }

    /// A record that verifies.
    pub fn record(&self) -> RollRecord {
        RollRecord {
            server_hash: commitment(&self.server_rand).to_hex(),
            server_rand: encode_hex(&self.server_rand),
            client_rand: encode_hex(&self.client_rand),
            bet_value: self.bet_value,
            win_value: self.win_value,
            roll_value: self.roll(),
        }
    }

    /// A record whose revealed secret no longer matches the commitment.
    pub fn with_swapped_secret(&self, other_secret: &[u8]) -> RollRecord {
        RollRecord {
            server_rand: encode_hex(other_secret),
            ..self.record()
        }
    }

    /// A record claiming a roll `delta` away from the honest one.
    pub fn with_claimed_roll_offset(&self, delta: i64) -> RollRecord {
        let record = self.record();
        RollRecord {
            roll_value: record.roll_value + delta,
            ..record
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fairroll_verify::{verify, FairnessError};

    #[test]
    fn honest_record_verifies() {
        let fixture = RollFixture::new(&[0x00], &[0xff]);
        assert_eq!(fixture.roll(), 14);
        assert!(verify(&fixture.record()).unwrap().is_win());
    }

    #[test]
    fn swapped_secret_fails_commitment() {
        let fixture = RollFixture::new(b"server", b"client");
        assert!(matches!(
            verify(&fixture.with_swapped_secret(b"other")),
            Err(FairnessError::CommitmentMismatch { .. })
        ));
    }

    #[test]
    fn offset_claim_fails_outcome() {
        let fixture = RollFixture::new(b"server", b"client").bet(10, 1_000);
        assert!(matches!(
            verify(&fixture.with_claimed_roll_offset(1)),
            Err(FairnessError::OutcomeMismatch { .. })
        ));
    }
}
