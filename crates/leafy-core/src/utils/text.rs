//! String utility functions for list-view display.
//!
//! All lengths are counted in characters, not bytes, so accented titles and
//! synopses are never cut inside a code point.

/// The marker appended to text shortened by [`truncate_at_word`].
pub const ELLIPSIS: &str = " ...";

/// Shortens `s` to fit a budget of `n` characters, cutting at a word boundary.
///
/// Strings of at most `n` characters are returned unchanged. Longer strings
/// keep their first `n - 1` characters, are cut back to the last space inside
/// that window, and get [`ELLIPSIS`] appended.
///
/// A window without any space has no word boundary to fall back to, so all
/// `n - 1` characters are kept and the marker follows them directly. Nothing
/// further is dropped: a single long word such as a URL loses only its tail.
///
/// # Examples
///
/// ```
/// use leafy_core::utils::text::truncate_at_word;
///
/// assert_eq!(truncate_at_word("short", 10), "short");
/// assert_eq!(truncate_at_word("the quick brown fox", 12), "the quick ...");
/// assert_eq!(truncate_at_word("supercalifragilistic", 6), "super ...");
/// ```
pub fn truncate_at_word(s: &str, n: usize) -> String {
    if s.chars().count() <= n {
        return s.to_string();
    }

    let window: String = s.chars().take(n.saturating_sub(1)).collect();
    let kept = window.rfind(' ').map_or(window.as_str(), |idx| &window[..idx]);

    let mut result = String::with_capacity(kept.len() + ELLIPSIS.len());
    result.push_str(kept);
    result.push_str(ELLIPSIS);
    result
}

/// Capitalizes the first character of a string.
///
/// # Examples
///
/// ```
/// use leafy_core::utils::text::capfirst;
///
/// assert_eq!(capfirst("book"), "Book");
/// assert_eq!(capfirst(""), "");
/// ```
pub fn capfirst(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |c| {
        let mut result = c.to_uppercase().to_string();
        result.extend(chars);
        result
    })
}

/// Turns a snake_case field name into a human label ("`category_age`" -> "Category age").
pub fn humanize_field(name: &str) -> String {
    capfirst(&name.replace('_', " "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_unchanged() {
        assert_eq!(truncate_at_word("hello world", 200), "hello world");
    }

    #[test]
    fn test_truncate_exact_length_unchanged() {
        assert_eq!(truncate_at_word("abcde", 5), "abcde");
    }

    #[test]
    fn test_truncate_breaks_at_last_space() {
        let out = truncate_at_word("one two three four five", 10);
        assert_eq!(out, "one two ...");
    }

    #[test]
    fn test_truncate_never_splits_word() {
        let text = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do \
                    eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim \
                    ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut \
                    aliquip ex ea commodo consequat. Duis aute irure dolor in reprehenderit";
        for budget in [10, 37, 80, 200] {
            let out = truncate_at_word(text, budget);
            if text.chars().count() <= budget {
                assert_eq!(out, text);
                continue;
            }
            assert!(out.ends_with(ELLIPSIS));
            let body = out.strip_suffix(ELLIPSIS).unwrap();
            assert!(body.chars().count() < budget);
            // The kept prefix is followed by a space in the source: no word was cut.
            assert!(text.starts_with(body));
            assert_eq!(text[body.len()..].chars().next(), Some(' '));
        }
    }

    #[test]
    fn test_truncate_without_space_keeps_window() {
        assert_eq!(truncate_at_word("abcdefghij", 5), "abcd ...");
    }

    #[test]
    fn test_truncate_space_after_window_is_not_used() {
        // The only space sits past the `n - 1` window, so the window is kept.
        let out = truncate_at_word("https://example.org/a-long-path rest", 10);
        assert_eq!(out, "https://e ...");
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        let out = truncate_at_word("été à la plage ensoleillée", 12);
        assert_eq!(out, "été à la ...");
    }

    #[test]
    fn test_capfirst() {
        assert_eq!(capfirst("hello"), "Hello");
        assert_eq!(capfirst("HELLO"), "HELLO");
        assert_eq!(capfirst(""), "");
    }

    #[test]
    fn test_humanize_field() {
        assert_eq!(humanize_field("category_age"), "Category age");
        assert_eq!(humanize_field("title"), "Title");
    }
}
