//! Benchmarks for the ADSR envelope generator.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use polysub::dsp::envelope::Envelope;

use crate::BLOCK_SIZES;

const SAMPLE_RATE: f32 = 48_000.0;

fn render(env: &mut Envelope, buffer: &mut [f32]) {
    for sample in buffer.iter_mut() {
        *sample = env.process();
    }
}

pub fn bench_envelope(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/envelope");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // Attack phase (ramping up)
        let mut env = Envelope::new();
        env.set_adsr(1.0, 0.1, 0.7, 0.3, SAMPLE_RATE);
        env.note_on();
        group.bench_with_input(BenchmarkId::new("attack", size), &size, |b, _| {
            b.iter(|| render(black_box(&mut env), black_box(&mut buffer)))
        });

        // Release phase (exponential decay)
        let mut env = Envelope::new();
        env.set_adsr(0.001, 0.001, 0.7, 10.0, SAMPLE_RATE);
        env.note_on();
        for _ in 0..500 {
            env.process();
        }
        env.note_off();
        group.bench_with_input(BenchmarkId::new("release", size), &size, |b, _| {
            b.iter(|| render(black_box(&mut env), black_box(&mut buffer)))
        });
    }

    group.finish();
}
