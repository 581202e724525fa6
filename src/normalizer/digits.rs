// Digit reading: every maximal numeric token becomes its Korean reading.
// One token is resolved per iteration and the scan restarts from the top,
// since the spliced reading shifts every offset after it.

use anyhow::Result;
use regex_automata::meta::Regex;

use crate::lexicon::numbers::DIGIT_SYLLABLES;
use crate::lexicon::Lexicon;
use crate::rewrite;

pub struct DigitReadingPass {
    token: Regex,
}

impl DigitReadingPass {
    pub fn new() -> Result<Self> {
        // Optional sign, digit run, and a decimal part only when digits
        // actually follow the point; a bare trailing period is sentence
        // punctuation.
        Ok(Self {
            token: Regex::new(r"[+-]?[0-9]+(\.[0-9]+)?")?,
        })
    }

    pub fn apply(&self, line: &str, lexicon: &dyn Lexicon) -> Result<String> {
        let mut line = line.to_string();
        while let Some(m) = self.token.find(&line) {
            let reading = read_token(&line[m.range()], lexicon)?;
            line = rewrite::replace_span(&line, m.range(), &reading);
        }
        Ok(line)
    }
}

fn read_token(token: &str, lexicon: &dyn Lexicon) -> Result<String> {
    let (sign, body) = match token.strip_prefix(['+', '-']) {
        Some(rest) => (&token[..1], rest),
        None => ("", token),
    };

    let mut out = String::from(sign);
    match body.split_once('.') {
        None => out.push_str(&lexicon.read_number(body)?),
        Some((integer, fraction)) => {
            out.push_str(&lexicon.read_number(integer)?);
            out.push_str("점");
            for digit in fraction.bytes() {
                out.push_str(DIGIT_SYLLABLES[(digit - b'0') as usize]);
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::StandardLexicon;

    fn apply(line: &str) -> String {
        let lexicon = StandardLexicon::new().unwrap();
        DigitReadingPass::new().unwrap().apply(line, &lexicon).unwrap()
    }

    #[test]
    fn test_integer_reading_in_context() {
        assert_eq!(apply("오늘은 2023년입니다."), "오늘은 이천이십삼년입니다.");
    }

    #[test]
    fn test_floating_reading() {
        assert_eq!(apply("원주율은 3.14이다"), "원주율은 삼점일사이다");
        assert_eq!(apply("0.05"), "영점영오");
    }

    #[test]
    fn test_multiple_tokens_left_to_right() {
        assert_eq!(apply("1과 20과 300"), "일과 이십과 삼백");
    }

    #[test]
    fn test_sign_is_preserved_for_terminal_strip() {
        assert_eq!(apply("-5도"), "-오도");
        assert_eq!(apply("+10점"), "+십점");
    }

    #[test]
    fn test_trailing_period_is_not_a_decimal_point() {
        assert_eq!(apply("모두 120."), "모두 백이십.");
    }

    #[test]
    fn test_no_digits_is_a_no_op() {
        assert_eq!(apply("숫자 없음"), "숫자 없음");
    }
}
