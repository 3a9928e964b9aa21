use std::env;
use std::process;

use anyhow::Result;

use soundslike::sonify::{DEFAULT_NUM_SAMPLES, DEFAULT_OUTPUT_DIR, DEFAULT_SAMPLE_RATE};
use soundslike::ProbabilitySounds;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: soundslike normal  [mean] [std] [num_samples]");
        eprintln!("       soundslike beta    [a] [b] [min_hz] [max_hz] [num_samples]");
        eprintln!("       soundslike uniform [low] [high] [num_samples]");
        process::exit(1);
    }

    let ps = ProbabilitySounds::new(DEFAULT_SAMPLE_RATE, DEFAULT_OUTPUT_DIR)?;

    match args[1].as_str() {
        "normal" => {
            let mean = arg_f32(&args, 2, 440.0)?;
            let std = arg_f32(&args, 3, 10.0)?;
            let n = arg_usize(&args, 4, DEFAULT_NUM_SAMPLES)?;
            ps.play_normal(mean, std, n)
        }
        "beta" => {
            let a = arg_f32(&args, 2, 1.0)?;
            let b = arg_f32(&args, 3, 1.0)?;
            let lo = arg_f32(&args, 4, 220.0)?;
            let hi = arg_f32(&args, 5, 880.0)?;
            let n = arg_usize(&args, 6, DEFAULT_NUM_SAMPLES)?;
            ps.play_beta(a, b, (lo, hi), n)
        }
        "uniform" => {
            let low = arg_f32(&args, 2, 220.0)?;
            let high = arg_f32(&args, 3, 880.0)?;
            let n = arg_usize(&args, 4, DEFAULT_NUM_SAMPLES)?;
            ps.play_uniform(low, high, n)
        }
        other => {
            eprintln!("Unknown distribution: {}", other);
            process::exit(1);
        }
    }
}

fn arg_f32(args: &[String], index: usize, default: f32) -> Result<f32> {
    match args.get(index) {
        Some(raw) => Ok(raw.parse()?),
        None => Ok(default),
    }
}

fn arg_usize(args: &[String], index: usize, default: usize) -> Result<usize> {
    match args.get(index) {
        Some(raw) => Ok(raw.parse()?),
        None => Ok(default),
    }
}
