//! Static message pool.

use rand::seq::SliceRandom;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Returned when the pool file has no usable line.
pub const EMPTY_POOL: &str = "No messages available in file.";

/// Returned when the pool file cannot be read.
pub const MISSING_POOL: &str = "message.txt file not found!";

/// One-message-per-line file sampled uniformly.
///
/// The file is read on every draw, so edits take effect without a restart.
#[derive(Debug, Clone)]
pub struct MessagePool {
    path: PathBuf,
}

impl MessagePool {
    /// Pool backed by `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Pick one non-blank, trimmed line at random.
    ///
    /// Never fails: an empty or unreadable file yields a fixed placeholder.
    pub async fn draw(&self) -> String {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Message file unreadable");
                return MISSING_POOL.to_string();
            }
        };

        let lines: Vec<&str> = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        debug!(lines = lines.len(), "Drawing from message pool");
        lines
            .choose(&mut rand::thread_rng())
            .map(|line| line.to_string())
            .unwrap_or_else(|| EMPTY_POOL.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn draws_only_non_blank_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "  first  \n\n   \nsecond").unwrap();
        let pool = MessagePool::new(file.path());

        for _ in 0..50 {
            let line = pool.draw().await;
            assert!(line == "first" || line == "second", "unexpected {line:?}");
        }
    }

    #[tokio::test]
    async fn empty_file_yields_placeholder() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert_eq!(MessagePool::new(file.path()).draw().await, EMPTY_POOL);
    }

    #[tokio::test]
    async fn missing_file_yields_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let pool = MessagePool::new(dir.path().join("absent.txt"));
        assert_eq!(pool.draw().await, MISSING_POOL);
    }
}
