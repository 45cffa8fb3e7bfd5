//! Benchmarks for the polyBLEP sawtooth and noise sources.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use polysub::dsp::oscillator::{saw, Noise};

use crate::BLOCK_SIZES;

pub fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oscillator");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        let dt = 440.0 / 48_000.0;
        let mut phase = 0.0f32;
        group.bench_with_input(BenchmarkId::new("saw", size), &size, |b, _| {
            b.iter(|| {
                for sample in buffer.iter_mut() {
                    *sample = saw(black_box(phase), black_box(dt));
                    phase += dt;
                    if phase >= 1.0 {
                        phase -= 1.0;
                    }
                }
            })
        });

        let mut noise = Noise::seeded(17);
        group.bench_with_input(BenchmarkId::new("noise", size), &size, |b, _| {
            b.iter(|| {
                for sample in buffer.iter_mut() {
                    *sample = noise.next_sample();
                }
                black_box(&buffer);
            })
        });
    }

    group.finish();
}
