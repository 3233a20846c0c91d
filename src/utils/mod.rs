//! Utility modules for common functionality

use uuid::Uuid;

/// Generate a short random identifier: the first 8 hex chars of a UUID v4.
/// Used to stamp workflow drafts at handoff.
pub fn short_id() -> String {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(8);
    id
}

/// Truncate a string to at most `max_bytes` bytes, ensuring the cut lands on
/// a valid UTF-8 char boundary. Returns the longest prefix that fits.
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
