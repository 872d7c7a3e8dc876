//! Benchmarks of plaintext circuit evaluation and wire bit-packing.

use boolean_circuit::{builder, circuitgen::random_circuit, Circuit, DebugInfo};
use criterion::{criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, SeedableRng};
use std::time::Duration;

fn adder_64() -> Circuit {
    let circ = builder::adder(64).unwrap();
    log::debug!("{}", circ.info());
    circ
}

fn bench_eval_adder(c: &mut Criterion) {
    let _ = pretty_env_logger::try_init();
    let circ = adder_64();
    let inputs = circ
        .pack_inputs(&[u64::MAX.to_be_bytes(), 1u64.to_be_bytes()])
        .unwrap();
    c.bench_function("eval::adder-64", move |bench| {
        bench.iter(|| circ.evaluate(&inputs));
    });
}

fn bench_codec_adder(c: &mut Criterion) {
    let circ = adder_64();
    let x = 0x0123_4567_89ab_cdefu64.to_be_bytes();
    let y = 0xfedc_ba98_7654_3210u64.to_be_bytes();
    let outputs = circ.evaluate(&circ.pack_inputs(&[x, y]).unwrap()).unwrap();
    c.bench_function("codec::adder-64", move |bench| {
        bench.iter(|| {
            let bits = circ.pack_inputs(&[x, y]).unwrap();
            (bits, circ.unpack_outputs(&outputs))
        });
    });
}

fn bench_eval_random(c: &mut Criterion) {
    let _ = pretty_env_logger::try_init();
    let mut rng = StdRng::seed_from_u64(0);
    let (circ, inputs) = random_circuit(128, 100_000, 128, &mut rng).unwrap();
    let debug = DebugInfo {
        meta: true,
        gates: false,
    };
    // Log the shape once, outside the timed loop.
    let _ = circ.evaluate_with(&inputs, &debug);
    c.bench_function("eval::random-100k", move |bench| {
        bench.iter(|| circ.evaluate(&inputs));
    });
}

criterion_group! {
    name = evaluation;
    config = Criterion::default().warm_up_time(Duration::from_millis(100));
    targets = bench_eval_adder, bench_codec_adder, bench_eval_random
}

criterion_main!(evaluation);
