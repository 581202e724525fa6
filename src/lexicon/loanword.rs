// Latin-to-hangul phonetic transliteration. The mapping follows Italian
// letter phonetics: vowels keep their plain values, c/g soften before e/i,
// ch/gh harden, gn is a palatal nasal, h is silent, geminates collapse.
// Consonants with no following vowel either close the previous syllable
// (nasals and the liquid) or stand alone on the neutral vowel ㅡ.

use anyhow::{bail, Result};

use super::LangTag;
use crate::hangul;

// Lead consonant indices into the composed-syllable formula.
const LEAD_G: u32 = 0;
const LEAD_N: u32 = 2;
const LEAD_D: u32 = 3;
const LEAD_R: u32 = 5;
const LEAD_M: u32 = 6;
const LEAD_B: u32 = 7;
const LEAD_S: u32 = 9;
const LEAD_NG: u32 = 11;
const LEAD_J: u32 = 12;
const LEAD_CH: u32 = 14;
const LEAD_K: u32 = 15;
const LEAD_T: u32 = 16;
const LEAD_P: u32 = 17;
const LEAD_H: u32 = 18;

// Vowel indices.
const V_A: u32 = 0;
const V_YA: u32 = 2;
const V_E: u32 = 5;
const V_YE: u32 = 7;
const V_O: u32 = 8;
const V_WA: u32 = 9;
const V_YO: u32 = 12;
const V_U: u32 = 13;
const V_WO: u32 = 14;
const V_WE: u32 = 15;
const V_WI: u32 = 16;
const V_YU: u32 = 17;
const V_EU: u32 = 18;
const V_I: u32 = 20;

// Tail consonant indices.
const TAIL_G: u32 = 1;
const TAIL_N: u32 = 4;
const TAIL_L: u32 = 8;
const TAIL_M: u32 = 16;

#[derive(Debug, Clone, Copy)]
struct Syllable {
    lead: u32,
    vowel: u32,
    tail: u32,
}

impl Syllable {
    fn open(lead: u32, vowel: u32) -> Self {
        Self { lead, vowel, tail: 0 }
    }
}

/// Phonetic transliterator for Latin-letter tokens.
pub struct Transliterator;

impl Transliterator {
    pub fn new() -> Self {
        Self
    }

    /// Deterministic per (token, tag); output contains only hangul syllables.
    pub fn read(&self, token: &str, lang: LangTag) -> Result<String> {
        match lang {
            LangTag::Italian => read_italian(token),
        }
    }
}

impl Default for Transliterator {
    fn default() -> Self {
        Self::new()
    }
}

fn read_italian(token: &str) -> Result<String> {
    let chars: Vec<char> = token
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect();

    let mut sylls: Vec<Syllable> = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];

        if let Some((vowel, consumed)) = vowel_at(&chars, i) {
            sylls.push(Syllable::open(LEAD_NG, vowel));
            i += consumed;
            continue;
        }

        // Silent h outside the ch/gh digraphs.
        if c == 'h' && vowel_at(&chars, i + 1).is_none() {
            i += 1;
            continue;
        }

        if c == 'q' {
            // qu + vowel is a velar onset with a w-glide.
            if chars.get(i + 1) == Some(&'u') {
                if let Some((vowel, consumed)) = glided_vowel_at(&chars, i + 2) {
                    sylls.push(Syllable::open(LEAD_K, vowel));
                    i += 2 + consumed;
                    continue;
                }
            }
            sylls.push(Syllable::open(LEAD_K, V_EU));
            i += 1;
            continue;
        }

        if c == 'x' {
            // Velar coda plus sibilant onset.
            match sylls.last_mut() {
                Some(prev) if prev.tail == 0 => prev.tail = TAIL_G,
                _ => sylls.push(Syllable::open(LEAD_K, V_EU)),
            }
            if let Some((vowel, consumed)) = vowel_at(&chars, i + 1) {
                sylls.push(Syllable::open(LEAD_S, vowel));
                i += 1 + consumed;
            } else {
                sylls.push(Syllable::open(LEAD_S, V_EU));
                i += 1;
            }
            continue;
        }

        let (lead, consumed) = onset_at(&chars, i);
        let mut skip = consumed;
        if consumed == 1 {
            // Geminate: collapse the repeat, closing the previous syllable
            // with a nasal/liquid coda when one fits.
            while chars.get(i + skip) == Some(&c) {
                skip += 1;
            }
            if skip > 1 {
                if let (Some(tail), Some(prev)) = (coda_for(lead), sylls.last_mut()) {
                    if prev.tail == 0 {
                        prev.tail = tail;
                    }
                }
            }
        }
        i += skip;

        if let Some((vowel, vowel_consumed)) = vowel_at(&chars, i) {
            sylls.push(Syllable::open(lead, vowel));
            i += vowel_consumed;
        } else {
            match (coda_for(lead), sylls.last_mut()) {
                (Some(tail), Some(prev)) if prev.tail == 0 => prev.tail = tail,
                _ => sylls.push(Syllable::open(lead, V_EU)),
            }
        }
    }

    let mut out = String::with_capacity(sylls.len() * 3);
    for syll in sylls {
        match hangul::compose(syll.lead, syll.vowel, syll.tail) {
            Some(composed) => out.push(composed),
            None => bail!("jamo index out of range while transliterating {token:?}"),
        }
    }
    Ok(out)
}

/// Onset consonant at `i`: digraph lookup first, then the single-letter
/// table, with identical geminates collapsed into one onset.
fn onset_at(chars: &[char], i: usize) -> (u32, usize) {
    let c = chars[i];
    let next = chars.get(i + 1).copied();

    let digraph = match (c, next) {
        ('c', Some('h')) => Some((LEAD_K, 2)),
        ('g', Some('h')) => Some((LEAD_G, 2)),
        ('g', Some('n')) => Some((LEAD_N, 2)),
        // ci/gi before another vowel: the i only marks the soft onset.
        ('c', Some('i')) if vowel_at(chars, i + 2).is_some() => Some((LEAD_CH, 2)),
        ('g', Some('i')) if vowel_at(chars, i + 2).is_some() => Some((LEAD_J, 2)),
        ('s', Some('c')) if matches!(chars.get(i + 2), Some('e') | Some('i')) => {
            Some((LEAD_S, 2))
        }
        _ => None,
    };
    if let Some(found) = digraph {
        return found;
    }

    let soft = matches!(next, Some('e') | Some('i'));
    let lead = match c {
        'b' | 'v' => LEAD_B,
        'c' => {
            if soft {
                LEAD_CH
            } else {
                LEAD_K
            }
        }
        'd' => LEAD_D,
        'f' | 'p' => LEAD_P,
        'g' => {
            if soft {
                LEAD_J
            } else {
                LEAD_G
            }
        }
        'h' => LEAD_H,
        'j' | 'z' => LEAD_J,
        'k' => LEAD_K,
        'l' | 'r' => LEAD_R,
        'm' => LEAD_M,
        'n' => LEAD_N,
        's' => LEAD_S,
        't' => LEAD_T,
        _ => LEAD_NG,
    };
    (lead, 1)
}

/// Vowel (or glide + vowel) starting at `i`.
fn vowel_at(chars: &[char], i: usize) -> Option<(u32, usize)> {
    let c = chars.get(i)?;
    let next = chars.get(i + 1).copied();
    let parsed = match c {
        'a' => (V_A, 1),
        'e' => (V_E, 1),
        'i' => (V_I, 1),
        'o' => (V_O, 1),
        'u' => (V_U, 1),
        'y' => match next {
            Some('a') => (V_YA, 2),
            Some('e') => (V_YE, 2),
            Some('i') => (V_I, 2),
            Some('o') => (V_YO, 2),
            Some('u') => (V_YU, 2),
            _ => (V_I, 1),
        },
        'w' => match next {
            Some('a') => (V_WA, 2),
            Some('e') => (V_WE, 2),
            Some('i') => (V_WI, 2),
            Some('o') => (V_WO, 2),
            Some('u') => (V_U, 2),
            _ => (V_U, 1),
        },
        _ => return None,
    };
    Some(parsed)
}

/// Vowel at `i` merged with a preceding w-glide (for qu-).
fn glided_vowel_at(chars: &[char], i: usize) -> Option<(u32, usize)> {
    let parsed = match chars.get(i)? {
        'a' => (V_WA, 1),
        'e' => (V_WE, 1),
        'i' => (V_WI, 1),
        'o' => (V_WO, 1),
        'u' => (V_U, 1),
        _ => return None,
    };
    Some(parsed)
}

/// Tail index for consonants allowed to close the previous syllable.
fn coda_for(lead: u32) -> Option<u32> {
    match lead {
        LEAD_M => Some(TAIL_M),
        LEAD_N => Some(TAIL_N),
        LEAD_R => Some(TAIL_L),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(token: &str) -> String {
        Transliterator::new().read(token, LangTag::Italian).unwrap()
    }

    #[test]
    fn test_simple_open_syllables() {
        assert_eq!(read("casa"), "카사");
        assert_eq!(read("vino"), "비노");
    }

    #[test]
    fn test_nasal_coda_attaches() {
        assert_eq!(read("Tom"), "톰");
        assert_eq!(read("banca"), "반카");
    }

    #[test]
    fn test_soft_and_hard_c_g() {
        assert_eq!(read("ciao"), "차오");
        assert_eq!(read("chiesa"), "키에사");
        assert_eq!(read("gelato"), "젤라토");
        // hard g stays velar before a back vowel
        assert!(read("gusto").starts_with('구'));
    }

    #[test]
    fn test_geminates_collapse() {
        assert_eq!(read("anno"), "안노");
        assert_eq!(read("pizza"), "피자");
    }

    #[test]
    fn test_trailing_obstruent_gets_neutral_vowel() {
        assert_eq!(read("test"), "테스트");
    }

    #[test]
    fn test_output_is_hangul_only() {
        for token in ["xylophone", "quarterly", "hymn", "Strzyz"] {
            let out = read(token);
            assert!(
                out.chars().all(crate::hangul::is_syllable),
                "{token} -> {out}"
            );
        }
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(read("espresso"), read("espresso"));
    }
}
