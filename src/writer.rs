// Persistence: one cleaned sentence per output line, UTF-8, with a
// guaranteed trailing newline and no other framing.

use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;
use tracing::info;

/// Write the normalized body to `path`, one sentence per line.
pub async fn write_sentences<P: AsRef<Path>>(path: P, sentences: &[String]) -> Result<()> {
    let path = path.as_ref();
    let mut content = sentences.join("\n");
    if !content.is_empty() {
        content.push('\n');
    }
    fs::write(path, content)
        .await
        .with_context(|| format!("failed to write output {}", path.display()))?;
    info!("Wrote {} sentences to {}", sentences.len(), path.display());
    Ok(())
}
