use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use konorm::pipeline::{self, PipelineConfig};

#[derive(Parser, Debug)]
#[command(name = "konorm")]
#[command(about = "Korean corpus normalizer producing phonetic hangul-only sentences")]
#[command(version)]
struct Args {
    /// Input corpus file (UTF-8, one or more raw lines)
    input: PathBuf,

    /// Output file, one normalized sentence per line
    output: PathBuf,

    /// Suppress the console progress bar
    #[arg(long)]
    no_progress: bool,

    /// Stats output file path
    #[arg(long, default_value = "run_stats.json")]
    stats_out: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .json()
        .init();

    let args = Args::parse();

    info!("Starting konorm");
    info!(?args, "Parsed CLI arguments");

    if !args.input.exists() {
        anyhow::bail!("Input corpus does not exist: {}", args.input.display());
    }
    if !args.input.is_file() {
        anyhow::bail!("Input path is not a file: {}", args.input.display());
    }

    let config = PipelineConfig {
        no_progress: args.no_progress,
        ..Default::default()
    };
    let stats = pipeline::run(&args.input, &args.output, config).await?;

    let stats_json = serde_json::to_string_pretty(&stats)?;
    tokio::fs::write(&args.stats_out, stats_json).await?;
    info!("Wrote run stats to {}", args.stats_out.display());

    println!("konorm v{} - normalization complete", env!("CARGO_PKG_VERSION"));
    println!("  Corpus lines read: {}", stats.lines_read);
    println!("  Sentences after first split: {}", stats.sentences_original);
    println!("  Sentences written: {}", stats.sentences_written);
    println!("  Elapsed: {}ms", stats.duration_ms);

    Ok(())
}
