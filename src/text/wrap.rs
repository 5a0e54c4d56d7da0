//! Character-budget word wrapping.

/// Split `text` into paragraphs on hard line breaks.
///
/// Literal two-character `\n` sequences (as typed into form fields) count as line breaks.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    text.replace("\\n", "\n")
        .split('\n')
        .map(|p| p.trim_end_matches('\r').to_owned())
        .collect()
}

/// Greedy word wrap with at most `width` characters per line.
///
/// Runs of whitespace collapse to a single space and words longer than `width` are split into
/// `width`-sized chunks. A blank paragraph yields no lines.
pub fn wrap_paragraph(paragraph: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in paragraph.split_whitespace() {
        let word_len = word.chars().count();

        if word_len > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let chars: Vec<char> = word.chars().collect();
            let mut chunks = chars.chunks(width).peekable();
            while let Some(chunk) = chunks.next() {
                if chunks.peek().is_some() {
                    lines.push(chunk.iter().collect());
                } else {
                    current = chunk.iter().collect();
                    current_len = chunk.len();
                }
            }
            continue;
        }

        let needed = if current_len == 0 {
            word_len
        } else {
            current_len + 1 + word_len
        };
        if needed > width {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        } else {
            if current_len > 0 {
                current.push(' ');
            }
            current.push_str(word);
            current_len = needed;
        }
    }

    if current_len > 0 {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
#[path = "../../tests/unit/text/wrap.rs"]
mod tests;
