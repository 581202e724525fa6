// Latin-letter reading, in two passes. Acronym capitals are spelled out
// letter-by-letter from a fixed table; whatever Latin remains is handed to
// the loanword transliterator as maximal runs. The acronym pass must run
// first so "ABC" is never whole-word transliterated.

use anyhow::Result;
use regex_automata::meta::Regex;

use crate::lexicon::{LangTag, Lexicon};
use crate::rewrite;

/// Korean letter-name spellings for the acronym pass, A through Z.
pub const ACRONYM_NAMES: [&str; 26] = [
    "에이", "비", "씨", "디", "이", "에프", "지", "에이치", "아이", "제이", "케이", "엘", "엠",
    "엔", "오", "피", "큐", "알", "에스", "티", "유", "브이", "더블유", "엑스", "와이", "지",
];

/// Spells out capital letters that are not part of a mixed-case word: a
/// capital counts when the next character is anything but a lowercase
/// letter, end of line included.
pub struct AcronymPass;

impl AcronymPass {
    pub fn new() -> Self {
        Self
    }

    pub fn apply(&self, line: &str) -> String {
        let mut line = line.to_string();
        while let Some((start, end, letter)) = first_acronym_capital(&line) {
            let spelled = ACRONYM_NAMES[(letter as u8 - b'A') as usize];
            line = rewrite::replace_span(&line, start..end, spelled);
        }
        line
    }
}

impl Default for AcronymPass {
    fn default() -> Self {
        Self::new()
    }
}

fn first_acronym_capital(line: &str) -> Option<(usize, usize, char)> {
    let mut iter = line.char_indices().peekable();
    while let Some((i, c)) = iter.next() {
        if c.is_ascii_uppercase() {
            let next_is_lowercase = iter
                .peek()
                .is_some_and(|&(_, next)| next.is_ascii_lowercase());
            if !next_is_lowercase {
                return Some((i, i + 1, c));
            }
        }
    }
    None
}

/// Transliterates every maximal Latin run left after the acronym pass.
pub struct LoanwordPass {
    run: Regex,
}

impl LoanwordPass {
    pub fn new() -> Result<Self> {
        Ok(Self {
            run: Regex::new("[A-Za-z]+")?,
        })
    }

    pub fn apply(&self, line: &str, lexicon: &dyn Lexicon) -> Result<String> {
        let mut line = line.to_string();
        while let Some(m) = self.run.find(&line) {
            let reading = lexicon.transliterate(&line[m.range()], LangTag::Italian)?;
            // The rescan loop only terminates if readings carry no Latin.
            anyhow::ensure!(
                !reading.chars().any(|c| c.is_ascii_alphabetic()),
                "transliteration of {:?} returned Latin letters: {reading:?}",
                &line[m.range()],
            );
            line = rewrite::replace_span(&line, m.range(), &reading);
        }
        Ok(line)
    }
}
