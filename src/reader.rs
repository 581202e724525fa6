// Async buffered corpus reading. The corpus is read once, line by line,
// before any pipeline stage runs; stats are kept for the run summary.

use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

/// Configuration for corpus reading behavior.
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Buffer size for async reading (default: 8KB).
    pub buffer_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self { buffer_size: 8192 }
    }
}

/// Statistics for a corpus read.
#[derive(Debug, Clone)]
pub struct ReadStats {
    pub file_path: String,
    pub lines_read: u64,
    pub bytes_read: u64,
}

/// Reads a corpus file into its raw lines with async buffered I/O.
pub struct CorpusReader {
    config: ReaderConfig,
}

impl CorpusReader {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Read the whole corpus line-by-line. The file must be valid UTF-8;
    /// a decoding error is fatal since partial corpora produce silently
    /// truncated output.
    pub async fn read_corpus<P: AsRef<Path>>(&self, path: P) -> Result<(Vec<String>, ReadStats)> {
        let path = path.as_ref();
        debug!("Starting corpus read: {}", path.display());

        let file = File::open(path)
            .await
            .with_context(|| format!("failed to open corpus {}", path.display()))?;

        let reader = BufReader::with_capacity(self.config.buffer_size, file);
        let mut lines = reader.lines();
        let mut corpus = Vec::new();
        let mut byte_count = 0u64;

        while let Some(line) = lines
            .next_line()
            .await
            .with_context(|| format!("read error in {} at line {}", path.display(), corpus.len() + 1))?
        {
            byte_count += line.len() as u64 + 1;
            corpus.push(line);
        }

        let stats = ReadStats {
            file_path: path.display().to_string(),
            lines_read: corpus.len() as u64,
            bytes_read: byte_count,
        };
        info!(
            "Read {}: {} lines, {} bytes",
            path.display(),
            stats.lines_read,
            stats.bytes_read
        );
        Ok((corpus, stats))
    }
}

impl Default for CorpusReader {
    fn default() -> Self {
        Self::new(ReaderConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn read(content: &str) -> (Vec<String>, ReadStats) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("corpus.txt");
        tokio::fs::write(&path, content).await.unwrap();
        CorpusReader::default().read_corpus(&path).await.unwrap()
    }

    #[tokio::test]
    async fn test_read_lines() {
        let (lines, stats) = read("첫 줄\n둘째 줄\n셋째 줄").await;
        assert_eq!(lines, vec!["첫 줄", "둘째 줄", "셋째 줄"]);
        assert_eq!(stats.lines_read, 3);
        assert!(stats.bytes_read > 0);
    }

    #[tokio::test]
    async fn test_read_empty_file() {
        let (lines, stats) = read("").await;
        assert!(lines.is_empty());
        assert_eq!(stats.lines_read, 0);
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let result = CorpusReader::default()
            .read_corpus(dir.path().join("absent.txt"))
            .await;
        assert!(result.is_err());
    }
}
