//! Sine oscillator buffers and chord synthesis.
//!
//! One oscillator per input frequency, mixed additively, shaped by the
//! fixed ADSR envelope. The envelope alone decides signal length.

use std::f32::consts::PI;

use anyhow::Result;

use crate::envelope::Adsr;
use crate::render;

pub type SampleBuffer = Vec<f32>;

// Human audible band
pub const MIN_AUDIBLE_HZ: f32 = 20.0;
pub const MAX_AUDIBLE_HZ: f32 = 20000.0;

/// Elementwise clamp into the audible band. Values outside are silently
/// clipped, not rejected; an audibility policy, not a statistical one.
pub fn clamp_audible(samples: &[f32]) -> SampleBuffer {
    samples
        .iter()
        .map(|&s| s.clamp(MIN_AUDIBLE_HZ, MAX_AUDIBLE_HZ))
        .collect()
}

/// Render one sine oscillator at the given frequency.
pub fn sine_buffer(sample_rate: u32, freq: f32, n_samples: usize) -> SampleBuffer {
    let sr = sample_rate as f32;
    (0..n_samples)
        .map(|i| (2.0 * PI * freq * (i as f32 / sr)).sin())
        .collect()
}

/// Mix one oscillator per frequency and apply the envelope. More
/// frequencies make a denser chord, never a longer one; no frequencies
/// yield the envelope's worth of silence.
pub fn chord(sample_rate: u32, frequencies: &[f32], env: &Adsr) -> Result<SampleBuffer> {
    let curve = env.curve(sample_rate);
    let n_samples = curve.len();

    let oscillators: Vec<SampleBuffer> = frequencies
        .iter()
        .map(|&freq| sine_buffer(sample_rate, freq, n_samples))
        .collect();

    let mut signal = render::mix_buffers(oscillators)?;
    if signal.is_empty() {
        signal = vec![0.0; n_samples];
    }
    for (sample, amp) in signal.iter_mut().zip(curve.iter()) {
        *sample *= amp;
    }
    Ok(signal)
}
