mod common;

use std::fs;
use std::path::Path;

fn count_with_extension(dir: &Path, extension: &str) -> usize {
    fs::read_dir(dir)
        .expect("Output directory missing")
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry
                .path()
                .extension()
                .map(|ext| ext == extension)
                .unwrap_or(false)
        })
        .count()
}

#[test]
fn test_play_normal_writes_wav_and_png() {
    let ps = common::test_sonifier("normal");
    ps.play_normal(300.0, 50.0, 100).expect("play_normal failed");

    assert!(count_with_extension(&ps.output_dir, "wav") >= 1);
    assert!(count_with_extension(&ps.output_dir, "png") >= 1);
}

#[test]
fn test_play_beta_writes_wav_and_png() {
    let ps = common::test_sonifier("beta");
    ps.play_beta(2.0, 5.0, (220.0, 880.0), 50)
        .expect("play_beta failed");

    assert_eq!(count_with_extension(&ps.output_dir, "wav"), 1);
    assert_eq!(count_with_extension(&ps.output_dir, "png"), 1);
}

#[test]
fn test_play_uniform_writes_wav_and_png() {
    let ps = common::test_sonifier("uniform");
    ps.play_uniform(220.0, 880.0, 100)
        .expect("play_uniform failed");

    assert_eq!(count_with_extension(&ps.output_dir, "wav"), 1);
    assert_eq!(count_with_extension(&ps.output_dir, "png"), 1);
}

#[test]
fn test_saved_wav_is_one_second_within_full_scale() {
    let ps = common::test_sonifier("wav-contents");
    ps.play_normal(300.0, 50.0, 100).expect("play_normal failed");

    let wav_path = fs::read_dir(&ps.output_dir)
        .unwrap()
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .find(|path| path.extension().map(|ext| ext == "wav").unwrap_or(false))
        .expect("No wav written");

    let mut reader = hound::WavReader::open(&wav_path).expect("Unreadable wav");
    let spec = reader.spec();
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.sample_rate, 44100);
    assert_eq!(reader.len(), 44100);

    for sample in reader.samples::<f32>() {
        let sample = sample.expect("Bad sample");
        assert!(sample.abs() <= 1.0, "Sample clipped: {}", sample);
    }
}

#[test]
fn test_exact_counts_survive_a_rerun() {
    // Simulates two consecutive test-suite invocations sharing a checkout:
    // the fixture must clear the directory so counts start from zero.
    let first = common::test_sonifier("rerun");
    first.play_beta(2.0, 5.0, (220.0, 880.0), 10).expect("first run failed");
    assert_eq!(count_with_extension(&first.output_dir, "wav"), 1);

    let second = common::test_sonifier("rerun");
    second.play_beta(2.0, 5.0, (220.0, 880.0), 10).expect("second run failed");
    assert_eq!(count_with_extension(&second.output_dir, "wav"), 1);
    assert_eq!(count_with_extension(&second.output_dir, "png"), 1);
}

#[test]
fn test_repeated_runs_never_collide() {
    let ps = common::test_sonifier("repeat");
    ps.play_uniform(220.0, 880.0, 10).expect("first run failed");
    ps.play_uniform(220.0, 880.0, 10).expect("second run failed");

    assert_eq!(count_with_extension(&ps.output_dir, "wav"), 2);
    assert_eq!(count_with_extension(&ps.output_dir, "png"), 2);
}
