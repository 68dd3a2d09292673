//! Grapheme-safe prefix clipping.
//!
//! Bounds a string to a maximum character count without ever splitting a
//! grapheme cluster, so clipped text never ends in half an emoji or a
//! stranded combining mark.

use unicode_segmentation::UnicodeSegmentation;

/// Return the longest prefix of `text` holding at most `max_chars`
/// characters, clipped at a grapheme-cluster boundary.
///
/// Borrows from the input; nothing is allocated. For ASCII input this is
/// exactly the first `max_chars` characters.
///
/// # Examples
///
/// ```
/// use debug_overlay::clip_graphemes;
///
/// assert_eq!(clip_graphemes("hello", 10), "hello");
/// assert_eq!(clip_graphemes("hello world", 5), "hello");
/// ```
pub fn clip_graphemes(text: &str, max_chars: usize) -> &str {
    if max_chars == 0 {
        return "";
    }
    // Byte length bounds the char count, so short strings skip the scan.
    if text.len() <= max_chars {
        return text;
    }

    let mut chars: usize = 0;
    let mut end: usize = 0;

    for (offset, grapheme) in text.grapheme_indices(true) {
        let n = grapheme.chars().count();
        if chars + n > max_chars {
            break;
        }
        chars += n;
        end = offset + grapheme.len();
    }

    &text[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_fits() {
        assert_eq!(clip_graphemes("hello", 10), "hello");
    }

    #[test]
    fn clip_exact_fit() {
        assert_eq!(clip_graphemes("hello", 5), "hello");
    }

    #[test]
    fn clip_ascii() {
        assert_eq!(clip_graphemes("hello world", 5), "hello");
    }

    #[test]
    fn clip_empty_text() {
        assert_eq!(clip_graphemes("", 5), "");
    }

    #[test]
    fn clip_zero_chars() {
        assert_eq!(clip_graphemes("hello", 0), "");
    }

    #[test]
    fn clip_multibyte() {
        // Each CJK character is one char (3 bytes); clipping counts chars.
        assert_eq!(clip_graphemes("你好世界", 2), "你好");
    }

    #[test]
    fn clip_preserves_combining_mark() {
        // "e" + combining acute is one grapheme of two chars; a budget of
        // one char cannot split it, so the whole cluster is dropped.
        let text = "e\u{0301}x";
        assert_eq!(clip_graphemes(text, 1), "");
        assert_eq!(clip_graphemes(text, 2), "e\u{0301}");
        assert_eq!(clip_graphemes(text, 3), text);
    }

    #[test]
    fn clip_borrows_input() {
        let text = String::from("hello world");
        let clipped = clip_graphemes(&text, 5);
        assert!(std::ptr::eq(clipped.as_ptr(), text.as_ptr()));
    }
}
