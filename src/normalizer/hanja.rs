// Logograph resolution. A logograph run directly after a hangul syllable is
// the "hangul(hanja)" gloss pattern with the parentheses already removed, so
// the run is redundant and deleted; otherwise the sentence goes to the
// reading translator.

use anyhow::Result;

use crate::hangul;
use crate::lexicon::Lexicon;

pub struct HanjaReadingPass;

impl HanjaReadingPass {
    pub fn new() -> Self {
        Self
    }

    pub fn apply(&self, line: &str, lexicon: &dyn Lexicon) -> Result<String> {
        if !line.chars().any(hangul::is_logograph) {
            return Ok(line.to_string());
        }

        let glossed = line
            .chars()
            .zip(line.chars().skip(1))
            .any(|(a, b)| hangul::is_syllable(a) && hangul::is_logograph(b));

        if glossed {
            Ok(line.chars().filter(|&c| !hangul::is_logograph(c)).collect())
        } else {
            lexicon.read_logographs(line)
        }
    }
}

impl Default for HanjaReadingPass {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::StandardLexicon;

    fn apply(line: &str) -> String {
        let lexicon = StandardLexicon::new().unwrap();
        HanjaReadingPass::new().apply(line, &lexicon).unwrap()
    }

    #[test]
    fn test_standalone_logographs_read() {
        assert_eq!(apply("大韓民國 만세"), "대한민국 만세");
    }

    #[test]
    fn test_gloss_runs_deleted() {
        // paren deletion upstream leaves "정부政府" shapes behind
        assert_eq!(apply("정부政府 발표"), "정부 발표");
    }

    #[test]
    fn test_gloss_policy_applies_to_whole_line() {
        assert_eq!(apply("정부政府와 國會"), "정부와 ");
    }

    #[test]
    fn test_no_logographs_is_a_no_op() {
        assert_eq!(apply("한글만 있는 문장"), "한글만 있는 문장");
    }
}
