//! Fixed-shape ADSR amplitude envelope.
//! The envelope defines the nominal duration of every rendered signal;
//! sample count changes chord density, never length.

#[derive(Clone, Copy, Debug)]
pub struct Adsr {
    /// Attack time in seconds
    pub attack: f32,
    /// Decay time in seconds
    pub decay: f32,
    /// Sustain span as a fraction of the total duration
    pub sustain: f32,
    /// Amplitude held through the sustain span
    pub sustain_level: f32,
    /// Release time in seconds
    pub release: f32,
}

impl Default for Adsr {
    fn default() -> Adsr {
        Adsr::new(0.1, 0.1, 0.6, 0.7, 0.2)
    }
}

impl Adsr {
    pub fn new(attack: f32, decay: f32, sustain: f32, sustain_level: f32, release: f32) -> Adsr {
        if !(0.0..1.0).contains(&sustain) {
            panic!("Sustain must be a fraction of the total duration")
        }
        Adsr { attack, decay, sustain, sustain_level, release }
    }

    /// Total duration in seconds. The sustain span is a fraction of the
    /// whole, so attack + decay + release fill the remaining (1 - sustain).
    pub fn duration(&self) -> f32 {
        (self.attack + self.decay + self.release) / (1.0 - self.sustain)
    }

    /// Render the envelope as an amplitude curve at the given sample rate.
    pub fn curve(&self, sample_rate: u32) -> Vec<f32> {
        let sr = sample_rate as f32;
        let n = (self.duration() * sr) as usize;
        let n_attack = (self.attack * sr) as usize;
        let n_decay = (self.decay * sr) as usize;
        let n_release = (self.release * sr) as usize;
        let n_sustain = n.saturating_sub(n_attack + n_decay + n_release);

        let mut curve = Vec::with_capacity(n);
        for i in 0..n_attack {
            curve.push(i as f32 / n_attack as f32);
        }
        for i in 0..n_decay {
            curve.push(1.0 - (1.0 - self.sustain_level) * (i as f32 / n_decay as f32));
        }
        curve.extend(std::iter::repeat(self.sustain_level).take(n_sustain));
        for i in 0..n_release {
            curve.push(self.sustain_level * (1.0 - i as f32 / n_release as f32));
        }
        curve
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_duration_is_one_second() {
        let env = Adsr::default();
        assert!((env.duration() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_default_is_built_through_new() {
        let env = Adsr::default();
        let explicit = Adsr::new(0.1, 0.1, 0.6, 0.7, 0.2);
        assert_eq!(env.sustain, explicit.sustain);
        assert_eq!(env.sustain_level, explicit.sustain_level);
        assert!((env.duration() - explicit.duration()).abs() < 1e-6);
    }

    #[test]
    fn test_curve_length_matches_duration() {
        let env = Adsr::default();
        let curve = env.curve(44100);
        assert_eq!(curve.len(), 44100);
    }

    #[test]
    fn test_curve_peaks_after_attack() {
        let env = Adsr::default();
        let curve = env.curve(44100);
        let n_attack = (env.attack * 44100.0) as usize;
        assert!((curve[n_attack] - 1.0).abs() < 1e-6);
        for &v in &curve {
            assert!((0.0..=1.0).contains(&v), "Envelope left unit range: {}", v);
        }
    }

    #[test]
    fn test_curve_holds_sustain_level() {
        let env = Adsr::default();
        let curve = env.curve(44100);
        let mid = curve.len() / 2;
        assert!((curve[mid] - env.sustain_level).abs() < 1e-6);
    }

    #[test]
    fn test_curve_releases_to_silence() {
        let env = Adsr::default();
        let curve = env.curve(44100);
        let last = *curve.last().unwrap();
        assert!(last < 0.001, "Release did not fade out: {}", last);
    }

    #[test]
    #[should_panic]
    fn test_sustain_must_be_fractional() {
        Adsr::new(0.1, 0.1, 1.0, 0.7, 0.2);
    }
}
