#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use fairroll_types::RollRecord;

#[derive(Debug, Arbitrary)]
struct Input {
    server_rand: Vec<u8>,
    client_rand: Vec<u8>,
    bet_value: i64,
    win_value: i64,
    claimed_roll: i64,
}

fuzz_target!(|input: Input| {
    let record = RollRecord {
        server_hash: fairroll_verify::commitment(&input.server_rand).to_hex(),
        server_rand: fairroll_crypto::encode_hex(&input.server_rand),
        client_rand: fairroll_crypto::encode_hex(&input.client_rand),
        bet_value: input.bet_value,
        win_value: input.win_value,
        roll_value: input.claimed_roll,
    };

    match fairroll_verify::verify(&record) {
        Ok(outcome) => {
            // Success implies the claim was the honest roll, inside the outcome space.
            assert_eq!(outcome.value, input.claimed_roll);
            assert!(outcome.value >= 0 && outcome.value < input.win_value);
            assert_eq!(outcome.is_win(), outcome.value < input.bet_value);
        }
        Err(fairroll_verify::FairnessError::OutcomeMismatch { computed, .. }) => {
            assert!(computed >= 0 && computed < input.win_value);
        }
        Err(fairroll_verify::FairnessError::InvalidWinValue(v)) => assert!(v <= 0),
        Err(e) => panic!("honest commitment rejected: {e}"),
    }
});
