const TEST_RENDER_DIR: &str = "test-render";

use std::fs;
use std::path::Path;

use soundslike::ProbabilitySounds;

/// Sonifier pointed at a fresh subdirectory of the test render area, with
/// playback disabled so tests run on machines without an audio device.
/// The subdirectory is cleared first; artifact names never repeat, so
/// leftovers from an earlier run would otherwise inflate file counts.
pub fn test_sonifier(label: &str) -> ProbabilitySounds {
    let dir = format!("{}/{}", TEST_RENDER_DIR, label);
    if Path::new(&dir).exists() {
        fs::remove_dir_all(&dir).expect("Failed to clear test directory");
    }
    let mut ps = ProbabilitySounds::new(44100, dir).expect("Failed to build sonifier");
    ps.set_playback(false);
    ps
}
