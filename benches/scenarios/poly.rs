//! Benchmarks for the full polyphonic engine render path.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use rtrb::RingBuffer;

use polysub::params::GlobalParams;
use polysub::synth::{message::SynthMessage, poly::PolySynth};

use crate::BLOCK_SIZES;

pub fn bench_poly(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/poly");

    for &voices in &[1usize, 8, 32] {
        let params = GlobalParams {
            voices,
            noise_level: 0.3,
            ..GlobalParams::default()
        };
        let (mut tx, rx) = RingBuffer::new(128);
        let mut synth = PolySynth::new(48_000.0, params, rx);

        // A sustained cluster so every slot is live for the whole run.
        for i in 0..voices {
            let _ = tx.push(SynthMessage::NoteOn {
                note: 40 + i as u8,
            });
        }

        let size = BLOCK_SIZES[BLOCK_SIZES.len() - 1];
        let mut left = vec![0.0f32; size];
        let mut right = vec![0.0f32; size];

        group.bench_with_input(
            BenchmarkId::new("render_block", voices),
            &voices,
            |b, _| {
                b.iter(|| {
                    synth.render_block(black_box(&mut left), black_box(&mut right));
                })
            },
        );
    }

    group.finish();
}
