// Whitespace tightening between pipeline stages: strip surrounding
// whitespace per line and collapse interior runs to a single space.

/// Tighten one line with a fresh allocation.
pub fn tighten_line(line: &str) -> String {
    let mut result = String::with_capacity(line.len());
    tighten_line_into(line, &mut result);
    result
}

/// Tighten into a supplied buffer so batch callers can reuse the allocation.
pub fn tighten_line_into(line: &str, buffer: &mut String) {
    buffer.clear();
    buffer.reserve(line.len());

    let mut prev_was_space = false;
    for ch in line.chars() {
        if ch.is_whitespace() {
            if !prev_was_space && !buffer.is_empty() {
                buffer.push(' ');
                prev_was_space = true;
            }
        } else {
            buffer.push(ch);
            prev_was_space = false;
        }
    }

    // A trailing run was emitted as one space before the line ended.
    if buffer.ends_with(' ') {
        buffer.pop();
    }
}

/// Tighten a whole body of sentences, preserving order.
pub fn tighten_lines(lines: Vec<String>) -> Vec<String> {
    let mut buffer = String::new();
    lines
        .into_iter()
        .map(|line| {
            tighten_line_into(&line, &mut buffer);
            buffer.clone()
        })
        .collect()
}
