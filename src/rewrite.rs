// Offset-safe string rewriting used by every reading pass.
//
// A match span is valid only against the exact string it was computed from:
// splicing a replacement of a different length desynchronizes every span
// computed earlier. The safe disciplines are to resolve the leftmost match
// and re-find from scratch (`replace_span` in a find loop), or to build the
// output in one left-to-right pass over spans that were all computed against
// the same unmutated string (`delete_all`).

use regex_automata::meta::Regex;
use std::ops::Range;

/// Replace `span` (byte offsets into `line`) with `replacement`.
///
/// The span must have been computed against this exact `line` value and must
/// lie on character boundaries, which regex match spans always do.
pub fn replace_span(line: &str, span: Range<usize>, replacement: &str) -> String {
    let mut out = String::with_capacity(line.len() + replacement.len());
    out.push_str(&line[..span.start]);
    out.push_str(replacement);
    out.push_str(&line[span.end..]);
    out
}

/// Delete every non-overlapping match of `pattern` in one left-to-right pass.
///
/// Safe without rescanning: all spans come from the same unmutated string and
/// the output is assembled in ascending span order.
pub fn delete_all(pattern: &Regex, line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut last = 0;
    for m in pattern.find_iter(line) {
        out.push_str(&line[last..m.start()]);
        last = m.end();
    }
    out.push_str(&line[last..]);
    out
}
