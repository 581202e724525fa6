// The driver: Segment -> tighten -> Segment -> Normalize -> Segment ->
// tighten -> persist. Re-segmenting after normalization is required because
// reading expansions and structural-punctuation rewrites introduce new
// sentence boundaries; segmentation is idempotent, so the extra passes are
// safe on already-clean input.

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::path::Path;
use std::time::Instant;
use tracing::info;

use crate::normalizer::Normalizer;
use crate::reader::{CorpusReader, ReaderConfig};
use crate::segmenter::Segmenter;
use crate::tighten;
use crate::writer;

/// Configuration for a pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Suppress the console progress bar.
    pub no_progress: bool,
    /// Buffer size handed to the corpus reader.
    pub buffer_size: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            no_progress: false,
            buffer_size: 8192,
        }
    }
}

/// Line-count and timing summary for one pipeline run.
#[derive(Debug, Clone, Serialize)]
pub struct RunStats {
    pub input_path: String,
    pub output_path: String,
    pub lines_read: u64,
    pub bytes_read: u64,
    pub sentences_original: usize,
    pub sentences_written: usize,
    pub duration_ms: u64,
}

/// Run the full normalization pipeline from `input` to `output`.
pub async fn run<P: AsRef<Path>>(input: P, output: P, config: PipelineConfig) -> Result<RunStats> {
    let started = Instant::now();

    let reader = CorpusReader::new(ReaderConfig {
        buffer_size: config.buffer_size,
    });
    let (corpus, read_stats) = reader.read_corpus(&input).await?;

    let segmenter = Segmenter::new();
    let normalizer = Normalizer::with_standard_lexicon()?;

    let body = segmenter.segment_lines(&corpus);
    let sentences_original = body.len();
    info!(count = body.len(), "[Step 1] Split by sentence");

    let body = tighten::tighten_lines(body);
    info!("[Step 2] Tightened surrounding whitespace");

    let body = segmenter.segment_lines(&body);
    info!(count = body.len(), "[Step 3] Re-split by sentence");

    let progress = if config.no_progress {
        ProgressBar::hidden()
    } else {
        let bar = ProgressBar::new(body.len() as u64);
        bar.set_style(
            ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        bar
    };

    let mut normalized = Vec::with_capacity(body.len());
    for line in &body {
        if let Some(sentence) = normalizer.normalize_line(line)? {
            normalized.push(sentence);
        }
        progress.inc(1);
    }
    progress.finish_and_clear();
    info!(count = normalized.len(), "[Step 4] Normalization completed");

    let body = segmenter.segment_lines(&normalized);
    info!(count = body.len(), "[Step 5] Re-split by sentence");

    let body = tighten::tighten_lines(body);
    info!("[Step 6] Final tightening done");

    writer::write_sentences(&output, &body).await?;

    let stats = RunStats {
        input_path: read_stats.file_path,
        output_path: output.as_ref().display().to_string(),
        lines_read: read_stats.lines_read,
        bytes_read: read_stats.bytes_read,
        sentences_original,
        sentences_written: body.len(),
        duration_ms: started.elapsed().as_millis() as u64,
    };
    info!(?stats, "Pipeline run complete");
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_end_to_end_counts() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("in.txt");
        let output = dir.path().join("out.txt");
        tokio::fs::write(&input, "오늘은 2023년입니다. 내일도 옵니다.\n")
            .await
            .unwrap();

        let config = PipelineConfig {
            no_progress: true,
            ..Default::default()
        };
        let stats = run(&input, &output, config).await.unwrap();

        assert_eq!(stats.lines_read, 1);
        assert_eq!(stats.sentences_original, 2);
        assert_eq!(stats.sentences_written, 2);

        let written = tokio::fs::read_to_string(&output).await.unwrap();
        assert_eq!(written, "오늘은 이천이십삼년입니다\n내일도 옵니다\n");
    }
}
