//! Plain file sink.
//!
//! Writes tickets to a regular file (or `/dev/stdout`) instead of a printer.
//! The bytes are exactly what the printer would receive.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::PrintSink;
use crate::error::CashoutError;

pub struct FileSink {
    file: File,
    path: PathBuf,
}

impl FileSink {
    /// Create (or truncate) `path`.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, CashoutError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| {
            CashoutError::Transport(format!("Failed to create {}: {}", path.display(), e))
        })?;
        Ok(Self {
            file,
            path: path.to_path_buf(),
        })
    }

    /// Open `path` for appending, so several tickets can be captured in a row.
    pub fn append<P: AsRef<Path>>(path: P) -> Result<Self, CashoutError> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                CashoutError::Transport(format!("Failed to open {}: {}", path.display(), e))
            })?;
        Ok(Self {
            file,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PrintSink for FileSink {
    fn send(&mut self, data: &[u8]) -> Result<(), CashoutError> {
        self.file.write_all(data)?;
        self.file.flush()?;
        tracing::info!(path = %self.path.display(), bytes = data.len(), "ticket written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("cashout-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_create_and_send() {
        let path = temp_path("create.bin");
        let mut sink = FileSink::create(&path).unwrap();
        sink.send(&[0x1B, 0x2A, 0x0C]).unwrap();
        drop(sink);
        assert_eq!(std::fs::read(&path).unwrap(), vec![0x1B, 0x2A, 0x0C]);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_append_keeps_previous_tickets() {
        let path = temp_path("append.bin");
        FileSink::create(&path).unwrap().send(&[0x0C]).unwrap();
        FileSink::append(&path).unwrap().send(&[0x0C]).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), vec![0x0C, 0x0C]);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_create_in_missing_directory() {
        let result = FileSink::create("/nonexistent/dir/ticket.bin");
        assert!(matches!(result, Err(CashoutError::Transport(_))));
    }
}
