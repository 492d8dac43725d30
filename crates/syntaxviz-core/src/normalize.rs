//! Line-ending normalization for node text.
//!
//! Source files arrive with `\n` or `\r\n` line endings depending on where
//! they were written. Tree views want one visible, comparable form, so every
//! line feed becomes the marker [`LINE_FEED_MARKER`].
//!
//! Only `\r\n` and `\n` are collapsed. A lone `\r` (classic Mac line
//! ending) is left as-is.

/// Visible marker substituted for every line feed.
pub const LINE_FEED_MARKER: &str = "LF";

/// Normalize line endings in `text`.
///
/// Replaces each `\r\n` with `\n`, then each `\n` with [`LINE_FEED_MARKER`].
/// Every other character, including a lone `\r`, is passed through.
///
/// ```
/// use syntaxviz_core::normalize;
///
/// assert_eq!(normalize("a\r\nb\nc"), "aLFbLFc");
/// assert_eq!(normalize("a\rb"), "a\rb");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\n', LINE_FEED_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("", "")]
    #[case("plain text", "plain text")]
    #[case("\n", "LF")]
    #[case("\r\n", "LF")]
    #[case("\r", "\r")]
    #[case("one\ntwo\r\nthree\rfour", "oneLFtwoLFthree\rfour")]
    #[case("\r\r\n", "\rLF")]
    #[case("\n\r", "LF\r")]
    #[case("\r\n\n", "LFLF")]
    #[case("tab\tnul\0", "tab\tnul\0")]
    #[case("héllo\r\nwörld ✓", "hélloLFwörld ✓")]
    fn normalizes_line_endings(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize(input), expected);
    }

    #[test]
    fn all_three_conventions_collapse_to_the_same_marker_except_lone_cr() {
        let unix = normalize("a\nb\n");
        let windows = normalize("a\r\nb\r\n");
        let mac = normalize("a\rb\r");

        assert_eq!(unix, "aLFbLF");
        assert_eq!(unix, windows);
        assert_eq!(mac, "a\rb\r");
    }

    #[test]
    fn marker_text_already_present_is_untouched() {
        assert_eq!(normalize("LF\n"), "LFLF");
        assert_eq!(normalize("HELLO"), "HELLO");
    }
}
