pub mod hangul;
pub mod lexicon;
pub mod normalizer;
pub mod pipeline;
pub mod reader;
pub mod rewrite;
pub mod segmenter;
pub mod tighten;
pub mod writer;

// Re-export main types for convenient access
pub use lexicon::{LangTag, Lexicon, StandardLexicon};
pub use normalizer::Normalizer;
pub use pipeline::{PipelineConfig, RunStats};
pub use segmenter::Segmenter;
