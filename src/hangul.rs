// Script classification and syllable composition for the rewrite passes.
// All classification is by codepoint range; no Unicode tables are consulted.

/// First codepoint of the precomposed hangul syllable block (가).
pub const SYLLABLE_BASE: u32 = 0xAC00;
/// Last codepoint of the precomposed hangul syllable block (힣).
pub const SYLLABLE_LAST: u32 = 0xD7A3;

const VOWEL_COUNT: u32 = 21;
const TAIL_COUNT: u32 = 28;

/// True for characters in the precomposed syllable block 가..힣.
pub fn is_syllable(c: char) -> bool {
    (SYLLABLE_BASE..=SYLLABLE_LAST).contains(&(c as u32))
}

/// True for compatibility jamo letters ㄱ..ㆎ appearing outside a composed
/// syllable block.
pub fn is_compat_jamo(c: char) -> bool {
    (0x3131..=0x318E).contains(&(c as u32))
}

/// True for CJK logographs: the unified ideograph block plus the
/// compatibility ideograph block used by older Korean corpora.
pub fn is_logograph(c: char) -> bool {
    let cp = c as u32;
    (0x4E00..=0x9FFF).contains(&cp) || (0xF900..=0xFAFF).contains(&cp)
}

/// Word character for spacing-symbol context checks: a hangul syllable or an
/// ASCII letter.
pub fn is_word_char(c: char) -> bool {
    is_syllable(c) || c.is_ascii_alphabetic()
}

/// Compose a precomposed syllable from jamo indices.
///
/// `lead` is 0..=18 (ㄱ..ㅎ), `vowel` 0..=20 (ㅏ..ㅣ), `tail` 0..=27 where 0
/// means no final consonant. Returns `None` when an index is out of range.
pub fn compose(lead: u32, vowel: u32, tail: u32) -> Option<char> {
    if lead > 18 || vowel > 20 || tail >= TAIL_COUNT {
        return None;
    }
    char::from_u32(SYLLABLE_BASE + (lead * VOWEL_COUNT + vowel) * TAIL_COUNT + tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syllable_range() {
        assert!(is_syllable('가'));
        assert!(is_syllable('힣'));
        assert!(is_syllable('한'));
        assert!(!is_syllable('ㄱ'));
        assert!(!is_syllable('a'));
        assert!(!is_syllable('漢'));
    }

    #[test]
    fn test_compat_jamo_range() {
        assert!(is_compat_jamo('ㄱ'));
        assert!(is_compat_jamo('ㅎ'));
        assert!(is_compat_jamo('ㅡ'));
        assert!(!is_compat_jamo('가'));
    }

    #[test]
    fn test_logograph_ranges() {
        assert!(is_logograph('漢'));
        assert!(is_logograph('字'));
        assert!(is_logograph('\u{F900}'));
        assert!(!is_logograph('한'));
        assert!(!is_logograph('A'));
    }

    #[test]
    fn test_compose_basic() {
        // ㄱ + ㅏ = 가, ㅎ + ㅏ + ㄴ = 한
        assert_eq!(compose(0, 0, 0), Some('가'));
        assert_eq!(compose(18, 0, 4), Some('한'));
        // ㅌ + ㅗ + ㅁ = 톰
        assert_eq!(compose(16, 8, 16), Some('톰'));
    }

    #[test]
    fn test_compose_out_of_range() {
        assert_eq!(compose(19, 0, 0), None);
        assert_eq!(compose(0, 21, 0), None);
        assert_eq!(compose(0, 0, 28), None);
    }
}
