//! Sample generation for the supported distributions.
//! Parameter validation lives in rand_distr; its errors propagate as-is.

use anyhow::Result;
use rand_distr::{Beta, Distribution, Normal, Uniform};

pub fn normal(mean: f32, std: f32, num_samples: usize) -> Result<Vec<f32>> {
    let dist = Normal::new(mean, std)?;
    let mut rng = rand::thread_rng();
    Ok((0..num_samples).map(|_| dist.sample(&mut rng)).collect())
}

/// Unit-interval beta samples; callers rescale into a frequency range.
pub fn beta(alpha: f32, b: f32, num_samples: usize) -> Result<Vec<f32>> {
    let dist = Beta::new(alpha, b)?;
    let mut rng = rand::thread_rng();
    Ok((0..num_samples).map(|_| dist.sample(&mut rng)).collect())
}

pub fn uniform(low: f32, high: f32, num_samples: usize) -> Vec<f32> {
    let dist = Uniform::new(low, high);
    let mut rng = rand::thread_rng();
    (0..num_samples).map(|_| dist.sample(&mut rng)).collect()
}

/// Affine map from the unit interval into (low, high): s * (high - low) + low.
pub fn rescale_unit(samples: &mut [f32], low: f32, high: f32) {
    for s in samples.iter_mut() {
        *s = *s * (high - low) + low;
    }
}
