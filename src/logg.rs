//! Instance-held logging handle.
//!
//! Writes timestamped INFO lines to a fixed log file and stdout. The handle
//! is constructed explicitly and owned by whoever needs it; nothing global.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::Mutex;

use anyhow::Result;
use chrono::Local;

pub const LOG_FILE: &str = "soundslike.log";

pub struct Logger {
    name: String,
    file: Mutex<File>,
}

impl Logger {
    pub fn open(path: &str, name: &str) -> Result<Logger> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Logger {
            name: name.to_string(),
            file: Mutex::new(file),
        })
    }

    /// Log an INFO line to both sinks. Sink write failures are swallowed;
    /// a broken log must not abort synthesis.
    pub fn info(&self, message: &str) {
        let line = format!(
            "{} - {} - INFO - {}",
            Local::now().format("%Y-%m-%d %H:%M:%S,%3f"),
            self.name,
            message
        );
        println!("{}", line);
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(file, "{}", line);
        }
    }
}
