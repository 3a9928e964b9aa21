//! Blocking playback through the default output device.

use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use anyhow::{anyhow, bail, Result};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};

/// Play `samples` for `duration` seconds, blocking until done. The buffer is
/// followed by silence when `duration` outlasts it; a shorter `duration`
/// truncates playback. Device errors propagate; there is no retry.
pub fn play(samples: &[f32], sample_rate: u32, duration: f32) -> Result<()> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| anyhow!("No default output device"))?;
    let supported = device.default_output_config()?;
    if supported.sample_format() != cpal::SampleFormat::F32 {
        bail!(
            "Output device wants {:?} samples, only f32 is supported",
            supported.sample_format()
        );
    }

    let channels = supported.channels() as usize;
    let config = cpal::StreamConfig {
        channels: supported.channels(),
        sample_rate: cpal::SampleRate(sample_rate),
        buffer_size: cpal::BufferSize::Default,
    };

    let buffer: Arc<Vec<f32>> = Arc::new(samples.to_vec());
    let cursor = Arc::new(Mutex::new(0usize));

    let stream = device.build_output_stream(
        &config,
        {
            let buffer = Arc::clone(&buffer);
            let cursor = Arc::clone(&cursor);
            move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                let mut pos = match cursor.lock() {
                    Ok(pos) => pos,
                    Err(_) => return,
                };
                let mut frame = 0;
                while frame < data.len() {
                    let sample = buffer.get(*pos).copied().unwrap_or(0.0);
                    *pos += 1;
                    for ch in 0..channels {
                        if frame + ch < data.len() {
                            data[frame + ch] = sample;
                        }
                    }
                    frame += channels;
                }
            }
        },
        |err| eprintln!("Playback stream error: {}", err),
        None,
    )?;

    stream.play()?;
    thread::sleep(Duration::from_secs_f32(duration.max(0.0)));
    drop(stream);
    Ok(())
}
