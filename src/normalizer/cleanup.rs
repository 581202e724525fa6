// Deletion and substitution rules that run around the reading passes:
// bullet markers, asides, addresses, punctuation noise, glued Latin
// annotations, structural punctuation, and the terminal non-hangul strip.

use anyhow::Result;
use regex_automata::meta::Regex;

use crate::hangul;
use crate::rewrite;

pub struct CleanupPass {
    numeric_bullet: Regex,
    jamo_bullet: Regex,
    example_span: Regex,
    example_lead: Regex,
    paren_span: Regex,
    web_address: Regex,
    email: Regex,
    dash_run: Regex,
    quote_run: Regex,
    byline: Regex,
    title_ref: Regex,
    bracket_run: Regex,
    glued_latin: Regex,
}

impl CleanupPass {
    pub fn new() -> Result<Self> {
        Ok(Self {
            numeric_bullet: Regex::new(r"^\s*[\(\[<〈《【〔]*\s*[0-9]+[\)\.\]>〉》】〕]")?,
            jamo_bullet: Regex::new(r"^\s*[\(\[<〈《【〔]*\s*[ㄱ-ㅎ가-힣][\)\]>〉》】〕]\s*")?,
            example_span: Regex::new(r"\(예:[^\)]*\)|\[예:[^\]]*\]")?,
            example_lead: Regex::new(r"^[ \t]*예:")?,
            paren_span: Regex::new(r"\([^\)]+\)")?,
            web_address: Regex::new(
                r#"(file://|gopher://|news://|nntp://|telnet://|https?://|ftps?://|sftp://|www\.)([a-z0-9-]+\.)+[a-z0-9]{2,4}[^ㄱ-힣\)\]\.,'"\s]*"#,
            )?,
            email: Regex::new(r"[A-Za-z0-9_]+[A-Za-z0-9_\.]*@[A-Za-z0-9_]+[A-Za-z0-9_\.]*\.[A-Za-z]+")?,
            dash_run: Regex::new(r"[ㅡ-]+")?,
            quote_run: Regex::new(r#"[`'"＂‘’“”]+"#)?,
            byline: Regex::new(r"【[^】]*기자[ \t]*】")?,
            title_ref: Regex::new(r"〔[^〕]*〕")?,
            bracket_run: Regex::new(r"[\[\]〈〉《》「」『』{}]+")?,
            glued_latin: Regex::new(r"[가-힣] ?[A-Za-z]+( [A-Za-z]+)?")?,
        })
    }

    /// Strip a leading ordinal bullet like "1.", "(2)", "[3]" when followed
    /// by non-digit content.
    pub fn strip_numeric_bullet(&self, line: &str) -> String {
        if let Some(m) = self.numeric_bullet.find(line) {
            let rest = &line[m.end()..];
            if rest.chars().next().is_some_and(|c| !c.is_ascii_digit()) {
                return rest.to_string();
            }
        }
        line.to_string()
    }

    /// Delete example annotations, single-letter bullet markers, and every
    /// parenthesized aside (one nesting level).
    pub fn delete_annotations(&self, line: &str) -> String {
        if self.example_lead.is_match(line) {
            return String::new();
        }
        let line = rewrite::delete_all(&self.example_span, line);
        let line = rewrite::delete_all(&self.jamo_bullet, &line);
        rewrite::delete_all(&self.paren_span, &line)
    }

    /// Delete web addresses and email addresses.
    pub fn delete_addresses(&self, line: &str) -> String {
        let line = rewrite::delete_all(&self.web_address, line);
        rewrite::delete_all(&self.email, &line)
    }

    /// Delete dash runs, quotation marks, reporter bylines, bracketed title
    /// references, residual bracket characters, and the sharp sign.
    pub fn delete_punctuation_noise(&self, line: &str) -> String {
        let line = rewrite::delete_all(&self.dash_run, line);
        let line = rewrite::delete_all(&self.quote_run, &line);
        let line = rewrite::delete_all(&self.byline, &line);
        let line = rewrite::delete_all(&self.title_ref, &line);
        let line = rewrite::delete_all(&self.bracket_run, &line);
        line.replace('#', "")
    }

    /// Delete a Latin run glued to a hangul syllable (at most one
    /// intervening space): a trailing annotation, not content.
    pub fn delete_glued_latin(&self, line: &str) -> String {
        let mut out = String::with_capacity(line.len());
        let mut last = 0;
        for m in self.glued_latin.find_iter(line) {
            out.push_str(&line[last..m.start()]);
            // Keep the anchoring syllable, drop the annotation.
            if let Some(anchor) = line[m.range()].chars().next() {
                out.push(anchor);
            }
            last = m.end();
        }
        out.push_str(&line[last..]);
        out
    }

    /// Structural punctuation becomes a line break; the next segmentation
    /// pass turns those into sentence boundaries.
    pub fn break_structural(&self, line: &str) -> String {
        line.replace(['=', ':', ';'], "\n")
    }

    /// Spacing-role symbols become a literal space: the middle dot, an
    /// arrow, and a tilde squeezed between word characters.
    pub fn space_symbols(&self, line: &str) -> String {
        let chars: Vec<char> = line.chars().collect();
        let mut out = String::with_capacity(line.len());
        for (i, &c) in chars.iter().enumerate() {
            match c {
                '·' | '→' => out.push(' '),
                '~' => {
                    let between_words = i > 0
                        && hangul::is_word_char(chars[i - 1])
                        && chars.get(i + 1).copied().is_some_and(hangul::is_word_char);
                    out.push(if between_words { ' ' } else { '~' });
                }
                _ => out.push(c),
            }
        }
        out
    }

    /// Terminal cleanup: only hangul syllables and whitespace survive.
    pub fn strip_non_hangul(&self, line: &str) -> String {
        line.chars()
            .filter(|&c| hangul::is_syllable(c) || c.is_whitespace())
            .collect()
    }
}
