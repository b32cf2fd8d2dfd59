//! Short content previews for script listings.

/// Maximum number of characters of content shown in a preview.
pub const PREVIEW_CHARS: usize = 50;

/// Appended when content was cut short.
pub const TRUNCATION_MARKER: &str = "...";

/// Render the listing preview for a piece of script content.
///
/// Counts characters, not bytes, so multi-byte text is never split
/// mid code point.
///
/// ```
/// use scriptbox_core::preview::preview;
///
/// assert_eq!(preview("print('hi')"), "print('hi')");
/// assert_eq!(preview(&"x".repeat(51)), format!("{}...", "x".repeat(50)));
/// ```
pub fn preview(content: &str) -> String {
    match content.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => {
            let mut out = String::with_capacity(cut + TRUNCATION_MARKER.len());
            out.push_str(&content[..cut]);
            out.push_str(TRUNCATION_MARKER);
            out
        }
        None => content.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_content_is_unchanged() {
        let content = "a".repeat(40);
        assert_eq!(preview(&content), content);
    }

    #[test]
    fn exactly_fifty_chars_has_no_marker() {
        let content = "b".repeat(50);
        assert_eq!(preview(&content), content);
    }

    #[test]
    fn long_content_is_truncated_with_marker() {
        let content = "c".repeat(60);
        let out = preview(&content);
        assert_eq!(out, format!("{}...", "c".repeat(50)));
    }

    #[test]
    fn multibyte_content_counts_chars() {
        let content = "é".repeat(55);
        let out = preview(&content);
        assert_eq!(out.chars().count(), 53);
        assert!(out.starts_with(&"é".repeat(50)));
        assert!(out.ends_with(TRUNCATION_MARKER));
    }

    #[test]
    fn empty_content() {
        assert_eq!(preview(""), "");
    }
}
