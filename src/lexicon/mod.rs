// The three reading services the normalizer delegates to. They are modeled
// as one narrow capability trait so the rewrite passes never see a backing
// dictionary format. All backends load their resources fully at construction;
// a service failure during normalization is a hard stop for the run.

use anyhow::Result;

pub mod hanja;
pub mod loanword;
pub mod numbers;

pub use hanja::HanjaTable;
pub use loanword::Transliterator;
pub use numbers::SinoKoreanReader;

/// Source-language tag for loanword transliteration. The normalizer is fixed
/// to Italian-style letter phonetics; the tag exists so the contract carries
/// the parameter rather than the backend hardcoding it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LangTag {
    Italian,
}

/// Reading services for the normalizer's resource-backed passes.
pub trait Lexicon {
    /// Korean number-word reading of a non-negative integer, given as its
    /// decimal digit run. Total for any digit run.
    fn read_number(&self, digits: &str) -> Result<String>;

    /// Replace each logograph in `text` with its most common Korean reading,
    /// leaving every non-logograph character untouched (substitution mode).
    fn read_logographs(&self, text: &str) -> Result<String>;

    /// Korean phonetic transliteration of a Latin-letter token.
    fn transliterate(&self, token: &str, lang: LangTag) -> Result<String>;
}

/// Built-in backends bundled behind the `Lexicon` trait: sino-Korean number
/// reading, an embedded hanja reading table, and the letter-phonetics
/// transliterator.
pub struct StandardLexicon {
    numbers: SinoKoreanReader,
    hanja: HanjaTable,
    transliterator: Transliterator,
}

impl StandardLexicon {
    pub fn new() -> Result<Self> {
        Ok(Self {
            numbers: SinoKoreanReader::new(),
            hanja: HanjaTable::load()?,
            transliterator: Transliterator::new(),
        })
    }
}

impl Lexicon for StandardLexicon {
    fn read_number(&self, digits: &str) -> Result<String> {
        self.numbers.read(digits)
    }

    fn read_logographs(&self, text: &str) -> Result<String> {
        Ok(self.hanja.substitute(text))
    }

    fn transliterate(&self, token: &str, lang: LangTag) -> Result<String> {
        self.transliterator.read(token, lang)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_lexicon_wires_all_services() {
        let lexicon = StandardLexicon::new().unwrap();
        assert_eq!(lexicon.read_number("2023").unwrap(), "이천이십삼");
        assert_eq!(lexicon.read_logographs("韓國").unwrap(), "한국");
        let read = lexicon.transliterate("Tom", LangTag::Italian).unwrap();
        assert!(read.chars().all(crate::hangul::is_syllable));
        assert!(!read.is_empty());
    }
}
