//! Histogram rendering for the raw sample values.
//!
//! Draws binned counts with a Gaussian kernel density overlay, scaled to
//! the count axis so the curve traces the bar tops.

use std::error::Error;
use std::f32::consts::PI;
use std::path::Path;

use itertools::{Itertools, MinMaxResult};
use plotters::prelude::*;

pub const DEFAULT_BINS: usize = 30;

const KDE_POINTS: usize = 200;

/// Render a histogram of `values` to a PNG at `out_path`.
pub fn histogram(
    values: &[f32],
    bins: usize,
    title: Option<&str>,
    out_path: &Path,
) -> Result<(), Box<dyn Error>> {
    let bins = bins.max(1);
    let (min, max) = bounds(values);
    let bin_width = (max - min) / bins as f32;
    let counts = bin_counts(values, min, bin_width, bins);
    let y_max = counts
        .iter()
        .map(|&count| count as f32)
        .fold(0.0f32, f32::max)
        .max(1.0);

    let root = BitMapBackend::new(out_path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(title.unwrap_or("Distribution"), ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(min..max, 0.0f32..(y_max * 1.1))?;

    chart
        .configure_mesh()
        .x_desc("Frequency (Hz)")
        .y_desc("Count")
        .draw()?;

    for (i, &count) in counts.iter().enumerate() {
        let x0 = min + bin_width * i as f32;
        let x1 = x0 + bin_width;
        chart.draw_series(std::iter::once(Rectangle::new(
            [(x0, 0.0), (x1, count as f32)],
            BLUE.mix(0.6).filled(),
        )))?;
    }

    if values.len() > 1 {
        if let Some(curve) = kde_curve(values, min, max) {
            let scale = values.len() as f32 * bin_width;
            chart.draw_series(LineSeries::new(
                curve.into_iter().map(|(x, density)| (x, density * scale)),
                &RED,
            ))?;
        }
    }

    root.present()?;
    Ok(())
}

/// Data range, widened to a unit span when the input is degenerate so the
/// chart always has a drawable axis.
fn bounds(values: &[f32]) -> (f32, f32) {
    let ordered = values
        .iter()
        .cloned()
        .minmax_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    match ordered {
        MinMaxResult::MinMax(lo, hi) if hi > lo => (lo, hi),
        MinMaxResult::MinMax(lo, _) => (lo, lo + 1.0),
        MinMaxResult::OneElement(x) => (x, x + 1.0),
        MinMaxResult::NoElements => (0.0, 1.0),
    }
}

fn bin_counts(values: &[f32], min: f32, bin_width: f32, bins: usize) -> Vec<usize> {
    let mut counts = vec![0usize; bins];
    for &v in values {
        let idx = (((v - min) / bin_width) as usize).min(bins - 1);
        counts[idx] += 1;
    }
    counts
}

/// Gaussian KDE with Silverman's bandwidth, evaluated across [min, max].
/// Returns None when the samples have no spread; a zero bandwidth would
/// blow the density up instead of drawing a curve.
fn kde_curve(values: &[f32], min: f32, max: f32) -> Option<Vec<(f32, f32)>> {
    let n = values.len() as f32;
    let mean = values.iter().sum::<f32>() / n;
    let variance = values.iter().map(|&v| (v - mean).powi(2)).sum::<f32>() / n;
    let sigma = variance.sqrt();
    if sigma < f32::EPSILON {
        return None;
    }
    let bandwidth = 1.06 * sigma * n.powf(-0.2);
    let norm = 1.0 / ((2.0 * PI).sqrt() * bandwidth * n);

    let curve = (0..KDE_POINTS)
        .map(|i| {
            let x = min + (max - min) * i as f32 / (KDE_POINTS - 1) as f32;
            let density = values
                .iter()
                .map(|&v| (-0.5 * ((x - v) / bandwidth).powi(2)).exp())
                .sum::<f32>()
                * norm;
            (x, density)
        })
        .collect();
    Some(curve)
}
