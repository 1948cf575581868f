//! Shared utility functions.

/// One-line preview of user or model text for log lines.
///
/// Runs of whitespace (including newlines) collapse to a single space and
/// the result is cut to at most `max_chars` characters, with `...` marking
/// the cut.
pub fn log_preview(text: &str, max_chars: usize) -> String {
    let mut preview = String::new();
    let mut taken = 0;
    for word in text.split_whitespace() {
        let sep = usize::from(taken > 0);
        let len = word.chars().count();
        if taken + sep + len > max_chars {
            let room = max_chars.saturating_sub(taken + sep);
            if room > 0 {
                if sep == 1 {
                    preview.push(' ');
                }
                preview.extend(word.chars().take(room));
            }
            preview.push_str("...");
            return preview;
        }
        if sep == 1 {
            preview.push(' ');
        }
        preview.push_str(word);
        taken += sep + len;
    }
    preview
}
