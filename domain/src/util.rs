//! Shared utility functions.

/// Truncate a string to at most `max_bytes`, backing up so the cut never
/// lands inside a UTF-8 character.
///
/// Returns a sub-slice of the original string; short strings come back
/// unchanged. Used to keep log lines and previews bounded.
pub fn truncate_str(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
