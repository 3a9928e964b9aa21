//! The distribution sonifier.
//!
//! `ProbabilitySounds` draws samples from a distribution, maps them into the
//! audible band, renders a sine chord under the fixed ADSR envelope, writes
//! the WAV, plays it, and plots a histogram of the raw samples.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::{anyhow, Result};

use crate::envelope::Adsr;
use crate::files;
use crate::logg::{Logger, LOG_FILE};
use crate::playback;
use crate::plot;
use crate::render;
use crate::sampling;
use crate::synth;

pub const DEFAULT_SAMPLE_RATE: u32 = 44100;
pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const DEFAULT_NUM_SAMPLES: usize = 100;
pub const DEFAULT_DURATION: f32 = 2.0;

pub struct ProbabilitySounds {
    pub sample_rate: u32,
    pub output_dir: PathBuf,
    envelope: Adsr,
    logger: Logger,
    seq: AtomicU64,
    playback: bool,
}

impl ProbabilitySounds {
    /// Create a sonifier writing artifacts under `output_dir`. The directory
    /// is created if absent; the log handle opens `soundslike.log` in the
    /// working directory.
    pub fn new(sample_rate: u32, output_dir: impl AsRef<Path>) -> Result<ProbabilitySounds> {
        let output_dir = output_dir.as_ref().to_path_buf();
        files::with_dir(&output_dir)?;
        let logger = Logger::open(LOG_FILE, "soundslike")?;
        logger.info(&format!(
            "Initialized ProbabilitySounds with sample_rate={}",
            sample_rate
        ));
        Ok(ProbabilitySounds {
            sample_rate,
            output_dir,
            envelope: Adsr::default(),
            logger,
            seq: AtomicU64::new(0),
            playback: true,
        })
    }

    /// Disable or re-enable audio output, for headless machines and tests.
    /// Rendering, saving, and plotting are unaffected.
    pub fn set_playback(&mut self, enabled: bool) {
        self.playback = enabled;
    }

    fn next_seq(&self) -> u64 {
        self.seq.fetch_add(1, Ordering::Relaxed)
    }

    /// Path for the next WAV artifact with the given prefix.
    pub fn generate_filename(&self, prefix: &str) -> PathBuf {
        self.output_dir
            .join(files::stamped_name(prefix, self.next_seq(), "wav"))
    }

    /// Clamp, synthesize, optionally save, play, and plot one distribution.
    pub fn play_distribution(
        &self,
        samples: &[f32],
        duration: f32,
        save: bool,
        prefix: &str,
        title: Option<&str>,
    ) -> Result<()> {
        self.logger
            .info(&format!("Playing distribution with {} samples", samples.len()));

        let frequencies = synth::clamp_audible(samples);
        if !frequencies.is_empty() {
            let lo = frequencies.iter().cloned().fold(f32::INFINITY, f32::min);
            let hi = frequencies.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
            self.logger
                .info(&format!("Frequency range: {:.1}Hz - {:.1}Hz", lo, hi));
        }

        let signal = synth::chord(self.sample_rate, &frequencies, &self.envelope)?;

        if save {
            let filename = self.generate_filename(prefix);
            render::write_wav(self.sample_rate, &signal, &filename)?;
            self.logger
                .info(&format!("Saved sound to {}", filename.display()));
        }

        if self.playback {
            playback::play(&signal, self.sample_rate, duration)?;
        }

        // Histogram over the raw samples, not the clamped frequencies.
        self.plot_distribution(samples, title, true)
    }

    /// Plot a histogram of the raw samples. With `save` off there is no
    /// interactive window to show, so only the summary line is logged.
    pub fn plot_distribution(&self, samples: &[f32], title: Option<&str>, save: bool) -> Result<()> {
        if save {
            let filename = self
                .output_dir
                .join(files::stamped_name("dist_plot", self.next_seq(), "png"));
            plot::histogram(samples, plot::DEFAULT_BINS, title, &filename)
                .map_err(|e| anyhow!("Failed to render histogram: {}", e))?;
            self.logger
                .info(&format!("Saved plot to {}", filename.display()));
        } else {
            self.logger
                .info(&format!("Skipped plot of {} samples (save=false)", samples.len()));
        }
        Ok(())
    }

    /// Sonify a normal distribution of frequencies.
    pub fn play_normal(&self, mean: f32, std: f32, num_samples: usize) -> Result<()> {
        self.logger.info(&format!(
            "Generating normal distribution: mean={}Hz, std={}Hz",
            mean, std
        ));
        let samples = sampling::normal(mean, std, num_samples)?;
        self.play_distribution(
            &samples,
            DEFAULT_DURATION,
            true,
            "normal",
            Some(&format!(
                "Normal Distribution (μ={:.1}Hz, σ={:.1}Hz)",
                mean, std
            )),
        )
    }

    /// Sonify a beta distribution rescaled into `freq_range`.
    pub fn play_beta(
        &self,
        a: f32,
        b: f32,
        freq_range: (f32, f32),
        num_samples: usize,
    ) -> Result<()> {
        self.logger
            .info(&format!("Generating beta distribution: a={}, b={}", a, b));
        let mut samples = sampling::beta(a, b, num_samples)?;
        let (min_freq, max_freq) = freq_range;
        sampling::rescale_unit(&mut samples, min_freq, max_freq);
        self.play_distribution(
            &samples,
            DEFAULT_DURATION,
            true,
            "beta",
            Some(&format!(
                "Beta Distribution (α={}, β={}, range={}-{}Hz)",
                a, b, min_freq, max_freq
            )),
        )
    }

    /// Sonify a uniform distribution of frequencies.
    pub fn play_uniform(&self, low: f32, high: f32, num_samples: usize) -> Result<()> {
        self.logger.info(&format!(
            "Generating uniform distribution: range={}-{}Hz",
            low, high
        ));
        let samples = sampling::uniform(low, high, num_samples);
        self.play_distribution(
            &samples,
            DEFAULT_DURATION,
            true,
            "uniform",
            Some(&format!("Uniform Distribution ({}-{}Hz)", low, high)),
        )
    }
}
