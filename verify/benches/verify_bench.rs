use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::num::NonZeroU64;

use fairroll_types::RollRecord;

fn sample_record() -> RollRecord {
    let server = [0x5Au8; 32];
    let client = [0xA5u8; 32];
    RollRecord {
        server_hash: fairroll_verify::commitment(&server).to_hex(),
        server_rand: fairroll_crypto::encode_hex(&server),
        client_rand: fairroll_crypto::encode_hex(&client),
        bet_value: 4_950,
        win_value: 10_000,
        roll_value: fairroll_verify::roll_value(&server, &client, 10_000).unwrap(),
    }
}

fn verify_bench(c: &mut Criterion) {
    let record = sample_record();

    c.bench_function("verify_roll", |b| {
        b.iter(|| fairroll_verify::verify(black_box(&record)))
    });
}

fn reduce_bench(c: &mut Criterion) {
    let digest = fairroll_verify::combine(&[1u8; 32], &[2u8; 32]);
    let modulus = NonZeroU64::new(1_000_003).unwrap();

    c.bench_function("reduce_512bit", |b| {
        b.iter(|| fairroll_verify::reduce(black_box(&digest), modulus))
    });
}

criterion_group!(benches, verify_bench, reduce_bench);
criterion_main!(benches);
