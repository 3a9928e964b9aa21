//! soundslike: hear the shape of a probability distribution.
//!
//! Draws samples from a normal, beta, or uniform distribution, maps each
//! sample to an audible frequency, renders the resulting sine chord through
//! a fixed ADSR envelope, then writes a WAV, plays it, and plots a histogram
//! of the raw samples.

pub mod envelope;
pub mod files;
pub mod logg;
pub mod playback;
pub mod plot;
pub mod render;
pub mod sampling;
pub mod sonify;
pub mod synth;

pub use sonify::ProbabilitySounds;
