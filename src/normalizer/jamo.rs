// Bare consonant letters read as their full names. Substitutions are
// single-codepoint, so a plain map over the line is offset-safe.

use std::collections::HashMap;

/// Letter names for the 14 plain and 5 tense consonants.
const JAMO_NAMES: [(char, &str); 19] = [
    ('ㄱ', "기역"),
    ('ㄴ', "니은"),
    ('ㄷ', "디귿"),
    ('ㄹ', "리을"),
    ('ㅁ', "미음"),
    ('ㅂ', "비읍"),
    ('ㅅ', "시옷"),
    ('ㅇ', "이응"),
    ('ㅈ', "지읒"),
    ('ㅊ', "치읓"),
    ('ㅋ', "키읔"),
    ('ㅌ', "티읕"),
    ('ㅍ', "피읖"),
    ('ㅎ', "히읗"),
    ('ㄲ', "쌍기역"),
    ('ㄸ', "쌍디귿"),
    ('ㅃ', "쌍비읍"),
    ('ㅆ', "쌍시옷"),
    ('ㅉ', "쌍지읒"),
];

pub struct JamoReadingPass {
    names: HashMap<char, &'static str>,
}

impl JamoReadingPass {
    pub fn new() -> Self {
        Self {
            names: JAMO_NAMES.iter().copied().collect(),
        }
    }

    pub fn apply(&self, line: &str) -> String {
        let mut out = String::with_capacity(line.len());
        for c in line.chars() {
            match self.names.get(&c) {
                Some(name) => out.push_str(name),
                None => out.push(c),
            }
        }
        out
    }
}

impl Default for JamoReadingPass {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_consonant_names() {
        let pass = JamoReadingPass::new();
        assert_eq!(pass.apply("ㄱ"), "기역");
        assert_eq!(pass.apply("ㅋ부터 ㅎ까지"), "키읔부터 히읗까지");
    }

    #[test]
    fn test_tense_consonant_names() {
        let pass = JamoReadingPass::new();
        assert_eq!(pass.apply("ㄲ"), "쌍기역");
        assert_eq!(pass.apply("ㅆ과 ㅉ"), "쌍시옷과 쌍지읒");
    }

    #[test]
    fn test_vowel_letters_untouched() {
        let pass = JamoReadingPass::new();
        // the vowel ㅏ has no consonant name; it falls to the terminal strip
        assert_eq!(pass.apply("ㅏ"), "ㅏ");
    }

    #[test]
    fn test_composed_syllables_untouched() {
        let pass = JamoReadingPass::new();
        assert_eq!(pass.apply("기역은 그대로"), "기역은 그대로");
    }
}
