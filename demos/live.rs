//! Live audio demo: plays a sustained chord, leans on the pedal, then
//! lets everything ring out.
//!
//! Run with: cargo run --example live --features live

use std::thread::sleep;
use std::time::Duration;

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::SampleFormat;
use rtrb::RingBuffer;

use polysub::params::GlobalParams;
use polysub::synth::{message::SynthMessage, poly::PolySynth};
use polysub::MAX_BLOCK_SIZE;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or("No output device available")?;
    println!("Output device: {}", device.name().unwrap_or_default());

    let supported_config = device.default_output_config()?;
    if supported_config.sample_format() != SampleFormat::F32 {
        return Err("Unsupported sample format".into());
    }
    let stream_config: cpal::StreamConfig = supported_config.into();
    let sample_rate = stream_config.sample_rate.0 as f32;
    let channels = stream_config.channels as usize;

    let (mut tx, rx) = RingBuffer::new(256);
    let mut synth = PolySynth::new(sample_rate, GlobalParams::default(), rx);

    let mut left = vec![0.0f32; MAX_BLOCK_SIZE];
    let mut right = vec![0.0f32; MAX_BLOCK_SIZE];

    let stream = device.build_output_stream(
        &stream_config,
        move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
            data.fill(0.0);
            let frames = (data.len() / channels).min(MAX_BLOCK_SIZE);
            synth.render_block(&mut left[..frames], &mut right[..frames]);

            for (i, frame) in data.chunks_mut(channels).enumerate().take(frames) {
                frame[0] = left[i];
                if channels > 1 {
                    frame[1] = right[i];
                }
            }
        },
        |err| eprintln!("Stream error: {err}"),
        None,
    )?;
    stream.play()?;

    println!("Playing a C major chord...");
    for note in [60u8, 64, 67] {
        tx.push(SynthMessage::NoteOn { note }).expect("queue full");
        sleep(Duration::from_millis(200));
    }
    sleep(Duration::from_secs(1));

    println!("Sustain pedal down, releasing keys...");
    tx.push(SynthMessage::Sustain { down: true }).expect("queue full");
    for note in [60u8, 64, 67] {
        tx.push(SynthMessage::NoteOff { note }).expect("queue full");
    }
    sleep(Duration::from_secs(1));

    println!("Pedal up.");
    tx.push(SynthMessage::Sustain { down: false }).expect("queue full");
    sleep(Duration::from_secs(2));

    Ok(())
}
