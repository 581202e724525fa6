// Per-sentence normalization: an ordered battery of deletion, substitution,
// and reading passes. The order is load-bearing (bullets before digit
// reading, glued-Latin deletion before transliteration, acronyms before
// whole-word transliteration) and ends with the strip that guarantees the
// hangul-only postcondition.

use anyhow::Result;
use tracing::debug;

pub mod cleanup;
pub mod digits;
pub mod hanja;
pub mod jamo;
pub mod latin;

pub use cleanup::CleanupPass;
pub use digits::DigitReadingPass;
pub use hanja::HanjaReadingPass;
pub use jamo::JamoReadingPass;
pub use latin::{AcronymPass, LoanwordPass, ACRONYM_NAMES};

use crate::lexicon::{Lexicon, StandardLexicon};

pub struct Normalizer {
    cleanup: CleanupPass,
    digits: DigitReadingPass,
    hanja: HanjaReadingPass,
    jamo: JamoReadingPass,
    acronym: AcronymPass,
    loanword: LoanwordPass,
    lexicon: Box<dyn Lexicon>,
}

impl Normalizer {
    pub fn new(lexicon: Box<dyn Lexicon>) -> Result<Self> {
        Ok(Self {
            cleanup: CleanupPass::new()?,
            digits: DigitReadingPass::new()?,
            hanja: HanjaReadingPass::new(),
            jamo: JamoReadingPass::new(),
            acronym: AcronymPass::new(),
            loanword: LoanwordPass::new()?,
            lexicon,
        })
    }

    /// Normalizer over the built-in reading services.
    pub fn with_standard_lexicon() -> Result<Self> {
        Self::new(Box::new(StandardLexicon::new()?))
    }

    /// Run the full pass battery over one sentence. Returns `None` when the
    /// sentence is empty or whitespace-only after all rewrites.
    pub fn normalize_line(&self, line: &str) -> Result<Option<String>> {
        let line = self.cleanup.strip_numeric_bullet(line);
        let line = self.digits.apply(&line, self.lexicon.as_ref())?;
        let line = self.cleanup.delete_annotations(&line);
        let line = self.cleanup.delete_addresses(&line);
        let line = self.cleanup.delete_punctuation_noise(&line);
        let line = self.cleanup.delete_glued_latin(&line);
        let line = self.cleanup.break_structural(&line);
        let line = self.cleanup.space_symbols(&line);
        let line = self.jamo.apply(&line);
        let line = self.hanja.apply(&line, self.lexicon.as_ref())?;
        let line = self.acronym.apply(&line);
        let line = self.loanword.apply(&line, self.lexicon.as_ref())?;
        let line = self.cleanup.strip_non_hangul(&line);

        if line.trim().is_empty() {
            Ok(None)
        } else {
            Ok(Some(line))
        }
    }

    /// Normalize a whole body in input order, dropping emptied sentences.
    pub fn normalize_lines(&self, lines: &[String]) -> Result<Vec<String>> {
        let mut body = Vec::with_capacity(lines.len());
        for line in lines {
            if let Some(normalized) = self.normalize_line(line)? {
                body.push(normalized);
            }
        }
        debug!("Normalized {} sentences into {}", lines.len(), body.len());
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hangul;

    fn normalizer() -> Normalizer {
        Normalizer::with_standard_lexicon().unwrap()
    }

    fn normalize(line: &str) -> Option<String> {
        normalizer().normalize_line(line).unwrap()
    }

    #[test]
    fn test_digit_reading_round_trip() {
        let out = normalize("오늘은 2023년입니다.").unwrap();
        assert_eq!(out, "오늘은 이천이십삼년입니다");
        assert!(!out.chars().any(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_floating_point_reading() {
        let out = normalize("원주율은 3.14이다").unwrap();
        assert_eq!(out, "원주율은 삼점일사이다");
    }

    #[test]
    fn test_acronym_vs_loanword_routing() {
        let out = normalize("CEO Tom은 방문했다.").unwrap();
        assert_eq!(out, "씨이오 톰은 방문했다");
    }

    #[test]
    fn test_glued_latin_annotation_removed() {
        assert_eq!(normalize("정부(government)발표").unwrap(), "정부발표");
        assert_eq!(normalize("정부 government 발표").unwrap(), "정부 발표");
    }

    #[test]
    fn test_hanja_gloss_and_reading() {
        assert_eq!(normalize("정부(政府)는 발표했다").unwrap(), "정부는 발표했다");
        assert_eq!(normalize("大韓民國 만세").unwrap(), "대한민국 만세");
    }

    #[test]
    fn test_jamo_names_read() {
        assert_eq!(normalize("ㄱ은 첫 자음이다").unwrap(), "기역은 첫 자음이다");
    }

    #[test]
    fn test_structural_punctuation_becomes_break() {
        let out = normalize("제목: 본문").unwrap();
        assert_eq!(out, "제목\n 본문");
    }

    #[test]
    fn test_postcondition_hangul_or_whitespace_only() {
        let inputs = [
            "오늘 주가는 1,234포인트로 3.5% 올랐다!",
            "연락처: kim@example.com 또는 www.example.co.kr 입니다.",
            "KBS 뉴스 --- 【김철수 기자】 (예: 특보)",
            "가격은 $100 정도, 환율은 1300원/달러.",
        ];
        let n = normalizer();
        for input in inputs {
            if let Some(out) = n.normalize_line(input).unwrap() {
                assert!(
                    out.chars().all(|c| hangul::is_syllable(c) || c.is_whitespace()),
                    "{input:?} -> {out:?}"
                );
            }
        }
    }

    #[test]
    fn test_emptied_sentence_dropped() {
        assert_eq!(normalize("!!! ---"), None);
        assert_eq!(normalize(""), None);
        assert_eq!(normalize("(전부 괄호 안)"), None);
    }

    #[test]
    fn test_bullet_then_digit_order() {
        // the leading "1." is a bullet, the "3" is content; surrounding
        // whitespace is the tightening stage's job, not the normalizer's
        let out = normalize("1. 사과 3개").unwrap();
        assert_eq!(out.trim(), "사과 삼개");
    }
}
