// Sino-Korean number-word reading. Values are grouped in myriads (10^4) and
// read group-by-group with the magnitude units 만, 억, 조, ...; within a
// group the positional units 천/백/십 drop the leading 일.

use anyhow::Result;

const DIGITS: [&str; 10] = ["", "일", "이", "삼", "사", "오", "육", "칠", "팔", "구"];

/// Digit syllables including zero, used when a run is read digit-by-digit.
pub const DIGIT_SYLLABLES: [&str; 10] =
    ["영", "일", "이", "삼", "사", "오", "육", "칠", "팔", "구"];

// Myriad units up to 10^36, which covers any value a u128 can hold.
const GROUP_UNITS: [&str; 10] = ["", "만", "억", "조", "경", "해", "자", "양", "구", "간"];

const POSITIONAL: [(u32, &str); 3] = [(1000, "천"), (100, "백"), (10, "십")];

/// Number-word reader for non-negative integers given as decimal digit runs.
pub struct SinoKoreanReader;

impl SinoKoreanReader {
    pub fn new() -> Self {
        Self
    }

    /// Read a digit run as Korean number words. Leading zeros are ignored;
    /// an all-zero run reads as 영. Runs too large for the myriad units fall
    /// back to digit-by-digit reading so the service stays total.
    pub fn read(&self, digits: &str) -> Result<String> {
        anyhow::ensure!(
            !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()),
            "not a digit run: {digits:?}"
        );

        let significant = digits.trim_start_matches('0');
        if significant.is_empty() {
            return Ok("영".to_string());
        }
        if significant.len() > 4 * GROUP_UNITS.len() {
            return Ok(read_digit_by_digit(significant));
        }

        // u128 holds 38 digits; the unit table caps us at 40, so parse of a
        // 39-40 digit run can still overflow. Fall back rather than fail.
        let value: u128 = match significant.parse() {
            Ok(v) => v,
            Err(_) => return Ok(read_digit_by_digit(significant)),
        };
        Ok(read_value(value))
    }
}

impl Default for SinoKoreanReader {
    fn default() -> Self {
        Self::new()
    }
}

fn read_value(mut value: u128) -> String {
    let mut groups = Vec::new();
    while value > 0 {
        groups.push((value % 10_000) as u32);
        value /= 10_000;
    }

    let mut out = String::new();
    for (rank, &group) in groups.iter().enumerate().rev() {
        if group == 0 {
            continue;
        }
        // 10,000 itself reads 만, not 일만; higher units keep the 일.
        if !(group == 1 && rank == 1) {
            read_group(group, &mut out);
        }
        out.push_str(GROUP_UNITS[rank]);
    }
    out
}

fn read_group(mut group: u32, out: &mut String) {
    for (place, unit) in POSITIONAL {
        let digit = group / place;
        if digit > 0 {
            if digit > 1 {
                out.push_str(DIGITS[digit as usize]);
            }
            out.push_str(unit);
        }
        group %= place;
    }
    if group > 0 {
        out.push_str(DIGITS[group as usize]);
    }
}

fn read_digit_by_digit(digits: &str) -> String {
    digits
        .bytes()
        .map(|b| DIGIT_SYLLABLES[(b - b'0') as usize])
        .collect()
}
