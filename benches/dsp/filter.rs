//! Benchmarks for the ladder low-pass filter.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use polysub::dsp::filter::LadderFilter;

use crate::BLOCK_SIZES;

pub fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/filter");

    for &size in BLOCK_SIZES {
        let input: Vec<f32> = (0..size).map(|i| (i as f32 * 0.05).sin()).collect();
        let mut output = vec![0.0f32; size];

        let mut filter = LadderFilter::new(48_000.0);
        filter.set_cutoff(0.4);
        filter.set_resonance(0.6);

        group.bench_with_input(BenchmarkId::new("resonant", size), &size, |b, _| {
            b.iter(|| {
                for (out, &x) in output.iter_mut().zip(&input) {
                    *out = filter.process(black_box(x));
                }
            })
        });
    }

    group.finish();
}
