//! Output directory handling and artifact naming.

use std::fs;
use std::path::Path;

use anyhow::Result;
use chrono::Local;

/// Ensure the directory exists. Tolerates a pre-existing directory.
pub fn with_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Build an artifact name from a prefix, a second-resolution timestamp, and a
/// per-instance sequence number. The sequence number keeps rapid successive
/// calls from colliding within the same second.
pub fn stamped_name(prefix: &str, seq: u64, extension: &str) -> String {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    format!("{}_{}_{:03}.{}", prefix, timestamp, seq, extension)
}
