//! Display reflow helper.
//!
//! Long resource ids and source lists blow out table columns, so the
//! table view reflows them onto multiple lines. Reflow is a display
//! concern only and never participates in resource identity.

/// Reflow `text` into newline-joined lines of at most `width` columns.
///
/// Greedy fill on whitespace; a single token longer than `width` is
/// hard-broken at `width` so ids without spaces still wrap.
pub fn reflow(text: &str, width: usize) -> String {
    if width == 0 || text.is_empty() {
        return text.to_string();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word = word;

        // Hard-break tokens that can never fit on one line.
        while word.chars().count() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let split = word
                .char_indices()
                .nth(width)
                .map(|(i, _)| i)
                .unwrap_or(word.len());
            lines.push(word[..split].to_string());
            word = &word[split..];
        }
        if word.is_empty() {
            continue;
        }

        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines.join("\n")
}
