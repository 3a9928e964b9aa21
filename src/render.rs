//! Buffer mixing and WAV output.

use std::path::Path;

use anyhow::{bail, Result};

use crate::synth::SampleBuffer;

/// Largest absolute sample value in the buffer.
pub fn peak(buffer: &[f32]) -> f32 {
    buffer.iter().map(|&sample| sample.abs()).fold(0.0, f32::max)
}

/// Sum same-length buffers into one signal, then pull the sum back to full
/// scale whenever the peak exceeds 1.0. Quiet mixes keep their level; dense
/// chords cannot clip no matter how many oscillators contributed.
pub fn mix_buffers(buffers: Vec<SampleBuffer>) -> Result<SampleBuffer> {
    if buffers.is_empty() {
        return Ok(Vec::new());
    }

    let buffer_length = buffers[0].len();
    if buffers.iter().any(|b| b.len() != buffer_length) {
        bail!("Buffers do not have the same length");
    }

    let mut mixed = vec![0.0; buffer_length];
    for buffer in buffers {
        for (i, sample) in buffer.into_iter().enumerate() {
            mixed[i] += sample;
        }
    }

    let max_amplitude = peak(&mixed);
    if max_amplitude > 1.0 {
        mixed.iter_mut().for_each(|sample| *sample /= max_amplitude);
    }

    Ok(mixed)
}

/// Write a mono 32-bit float WAV.
pub fn write_wav(sample_rate: u32, samples: &[f32], path: &Path) -> Result<()> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };
    let mut writer = hound::WavWriter::create(path, spec)?;
    for &sample in samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;
    Ok(())
}
