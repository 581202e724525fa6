// Sentence segmentation: one sentence per output line, split on
// sentence-final punctuation. Idempotent on already-segmented input, which
// the driver relies on by running it before and after normalization.

use tracing::debug;

use crate::hangul;

/// Splits raw corpus lines into one-sentence-per-line units.
pub struct Segmenter;

impl Segmenter {
    pub fn new() -> Self {
        Self
    }

    /// Segment a whole body, preserving input order and dropping segments
    /// that are empty or whitespace-only.
    pub fn segment_lines(&self, lines: &[String]) -> Vec<String> {
        let mut body = Vec::with_capacity(lines.len());
        for line in lines {
            for segment in self.segment_line(line) {
                body.push(segment);
            }
        }
        debug!("Segmented {} lines into {} sentences", lines.len(), body.len());
        body
    }

    /// Segment one input line into sentences.
    pub fn segment_line(&self, line: &str) -> Vec<String> {
        let line = line.replace('…', ".");
        let line = strip_initialism_periods(&line);
        let line = squash_punctuation_runs(&line);
        let line = insert_sentence_breaks(&line);

        line.split('\n')
            .filter(|segment| !segment.trim().is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Delete periods that belong to an initial-letter sequence: a period right
/// after ".X" and a period between two capitals, so "U.S.A." collapses to
/// "USA" instead of splitting. Context is evaluated against the original
/// line for every period, then all deletions apply in one pass.
fn strip_initialism_periods(line: &str) -> String {
    let chars: Vec<char> = line.chars().collect();
    let mut out = String::with_capacity(line.len());
    for (i, &c) in chars.iter().enumerate() {
        if c == '.' {
            let after_initial =
                i >= 2 && chars[i - 2] == '.' && chars[i - 1].is_ascii_uppercase();
            let between_capitals = i >= 1
                && chars[i - 1].is_ascii_uppercase()
                && chars.get(i + 1).is_some_and(char::is_ascii_uppercase);
            if after_initial || between_capitals {
                continue;
            }
        }
        out.push(c);
    }
    out
}

/// Collapse runs of the same sentence-final mark: "했다!!!" -> "했다!".
fn squash_punctuation_runs(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut prev = None;
    for c in line.chars() {
        if matches!(c, '.' | '?' | '!') && prev == Some(c) {
            continue;
        }
        out.push(c);
        prev = Some(c);
    }
    out
}

/// Insert a break after a sentence-final mark followed by a space or comma,
/// and after a run-on boundary: a mark squeezed between hangul syllables
/// with no space, which is rewritten to a period before the break.
fn insert_sentence_breaks(line: &str) -> String {
    let chars: Vec<char> = line.chars().collect();
    let mut out = String::with_capacity(line.len() + 8);
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if matches!(c, '.' | '?' | '!') {
            if matches!(chars.get(i + 1), Some(' ') | Some(',')) {
                out.push(c);
                out.push('\n');
                i += 2;
                continue;
            }
            let run_on = i > 0
                && hangul::is_syllable(chars[i - 1])
                && chars.get(i + 1).copied().is_some_and(hangul::is_syllable);
            if run_on {
                out.push('.');
                out.push('\n');
                i += 1;
                continue;
            }
        }
        out.push(c);
        i += 1;
    }
    out
}
