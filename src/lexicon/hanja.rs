// Logograph-to-reading substitution backed by an embedded reading table.
// The table holds one most-common reading per character; disambiguation by
// context is out of scope. Loading happens once at construction so a run
// never degrades mid-corpus on a missing resource.

use anyhow::{Context, Result};
use std::collections::HashMap;
use tracing::debug;

use crate::hangul;

const HANJA_TSV: &str = include_str!("data/hanja.tsv");

/// Reading table for CJK logographs embedded in Korean text.
pub struct HanjaTable {
    readings: HashMap<char, String>,
}

impl HanjaTable {
    /// Parse the embedded TSV resource into the lookup table.
    pub fn load() -> Result<Self> {
        let mut readings = HashMap::new();
        for (lineno, line) in HANJA_TSV.lines().enumerate() {
            if line.is_empty() {
                continue;
            }
            let (glyph, reading) = line
                .split_once('\t')
                .with_context(|| format!("malformed hanja table entry at line {}", lineno + 1))?;
            let mut glyph_chars = glyph.chars();
            let glyph_char = glyph_chars
                .next()
                .with_context(|| format!("empty glyph in hanja table at line {}", lineno + 1))?;
            anyhow::ensure!(
                glyph_chars.next().is_none() && hangul::is_logograph(glyph_char),
                "invalid glyph {glyph:?} in hanja table at line {}",
                lineno + 1
            );
            readings.insert(glyph_char, reading.to_string());
        }
        debug!("Loaded {} hanja readings", readings.len());
        Ok(Self { readings })
    }

    /// Substitution mode: each known logograph becomes its reading, every
    /// other character (unknown logographs included) passes through.
    pub fn substitute(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            match self.readings.get(&c) {
                Some(reading) => out.push_str(reading),
                None => out.push(c),
            }
        }
        out
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.readings.len()
    }
}
