//! Command implementations, generic over where the roll comes from.

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use fairroll_client::RollSource;
use fairroll_types::RollRecord;
use fairroll_verify::FairnessVerifier;
use tracing::info;

use crate::report::{claim_summary, RollOrigin, VerificationReport};

/// Fetch roll `request_id` of `address` from `source` and verify it.
pub async fn fetch_and_verify<S: RollSource>(
    source: &S,
    address: &str,
    request_id: i64,
) -> anyhow::Result<VerificationReport> {
    info!("processing request ID {request_id}");
    let record = source
        .fetch_roll(address, request_id)
        .await
        .with_context(|| format!("fetching roll {request_id} for {address} via {}", source.name()))?;
    verify_record(
        RollOrigin::Service {
            address: address.to_string(),
            request_id,
        },
        &record,
    )
}

/// Verify a record stored as JSON at `path` (`-` reads stdin).
pub fn check_file(path: &Path) -> anyhow::Result<VerificationReport> {
    let record = read_record(path)?;
    verify_record(
        RollOrigin::File {
            path: path.display().to_string(),
        },
        &record,
    )
}

pub fn read_record(path: &Path) -> anyhow::Result<RollRecord> {
    if path.as_os_str() == "-" {
        parse_record(std::io::stdin().lock())
    } else {
        let file = std::fs::File::open(path)
            .with_context(|| format!("reading roll record from {}", path.display()))?;
        parse_record(file)
    }
}

/// Parse a JSON roll record from any reader.
pub fn parse_record(mut reader: impl Read) -> anyhow::Result<RollRecord> {
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .context("reading roll record")?;
    serde_json::from_str(&content).context("parsing roll record")
}

/// Verify `record` and log each step.
pub fn verify_record(origin: RollOrigin, record: &RollRecord) -> anyhow::Result<VerificationReport> {
    info!("{}", claim_summary(record));
    let verification = FairnessVerifier
        .verify_detailed(record)
        .context("roll failed verification")?;
    let report = VerificationReport::new(origin, record, &verification);
    report.log();
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fairroll_nullables::{NullRollSource, RollFixture};
    use fairroll_types::RollResult;
    use fairroll_verify::FairnessError;
    use std::io::Write;

    #[tokio::test]
    async fn fetch_and_verify_honest_roll() {
        let fixture = RollFixture::new(b"server secret", b"client seed");
        let source = NullRollSource::new().with_record("addr", 5, fixture.record());
        let report = fetch_and_verify(&source, "addr", 5).await.unwrap();
        assert_eq!(report.outcome.value, fixture.roll());
        assert_eq!(
            report.origin,
            RollOrigin::Service {
                address: "addr".into(),
                request_id: 5
            }
        );
        assert_eq!(source.requests(), vec![("addr".to_string(), 5)]);
    }

    #[tokio::test]
    async fn fetch_failure_is_reported() {
        let source = NullRollSource::new();
        let err = fetch_and_verify(&source, "addr", 5).await.unwrap_err();
        assert!(err.to_string().contains("fetching roll 5"));
    }

    #[tokio::test]
    async fn dishonest_roll_keeps_fairness_error() {
        let fixture = RollFixture::new(b"server secret", b"client seed");
        let source =
            NullRollSource::new().with_record("addr", 5, fixture.with_claimed_roll_offset(1));
        let err = fetch_and_verify(&source, "addr", 5).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<FairnessError>(),
            Some(FairnessError::OutcomeMismatch { .. })
        ));
    }

    #[test]
    fn check_file_reads_service_json() {
        let record = RollFixture::new(&[0x00], &[0xff]).record();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", serde_json::to_string(&record).unwrap()).unwrap();

        let report = check_file(file.path()).unwrap();
        assert_eq!(report.outcome.result, RollResult::Win);
        assert!(matches!(report.origin, RollOrigin::File { .. }));
    }

    #[test]
    fn check_file_rejects_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"ServerHash\": 1}}").unwrap();
        let err = check_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("parsing roll record"));
    }

    #[test]
    fn parse_record_reads_json_stream() {
        let record = RollFixture::new(&[0x00], &[0xff]).record();
        let json = serde_json::to_vec(&record).unwrap();
        let parsed = parse_record(std::io::Cursor::new(json)).unwrap();
        assert_eq!(parsed, record);

        let report = verify_record(RollOrigin::File { path: "-".into() }, &parsed).unwrap();
        assert_eq!(report.outcome.value, 14);
    }

    #[test]
    fn parse_record_rejects_truncated_stream() {
        let err = parse_record(std::io::Cursor::new(b"{\"ServerHash\": \"aa\"".to_vec()))
            .unwrap_err();
        assert!(err.to_string().contains("parsing roll record"));
    }

    #[test]
    fn check_file_missing() {
        assert!(check_file(Path::new("/nonexistent/roll.json")).is_err());
    }

    #[test]
    fn tampered_commitment_is_reported() {
        let record = RollFixture::new(b"a", b"b").with_swapped_secret(b"c");
        let err = verify_record(RollOrigin::File { path: "x".into() }, &record).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<FairnessError>(),
            Some(FairnessError::CommitmentMismatch { .. })
        ));
    }
}
