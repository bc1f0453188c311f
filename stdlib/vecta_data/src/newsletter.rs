use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};

use crate::error::Result;
use crate::scan_log::TIMESTAMP_FORMAT;

/// Plain-text archive of community newsletters. Each issue is appended under
/// a `=== timestamp ===` banner.
#[derive(Debug, Clone)]
pub struct Newsletter {
    path: PathBuf,
}

impl Newsletter {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append_at(&self, at: NaiveDateTime, text: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        write!(file, "\n\n=== {} ===\n{text}", at.format(TIMESTAMP_FORMAT))?;
        log::debug!("saved {} bytes of newsletter to {}", text.len(), self.path.display());
        Ok(())
    }

    pub fn append(&self, text: &str) -> Result<()> {
        self.append_at(Local::now().naive_local(), text)
    }

    /// Whole archive, or an empty string when nothing has been saved yet.
    pub fn read(&self) -> Result<String> {
        if !self.path.exists() {
            return Ok(String::new());
        }
        Ok(fs::read_to_string(&self.path)?)
    }
}
