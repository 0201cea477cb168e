//! Splitting response text into reveal segments

use once_cell::sync::Lazy;
use regex::Regex;

/// Angle-bracket tags (shortest match, single line) or a single space
static DELIMITER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<.*?>| ").expect("delimiter pattern is valid"));

/// Split `text` into segments for a staged reveal.
///
/// Tags and single spaces become their own segments, and the runs between
/// them are kept as well, so concatenating the result gives back `text`.
/// Adjacent delimiters produce no empty run between them.
pub fn segments(text: &str) -> Vec<&str> {
    let mut result = Vec::new();
    let mut last = 0;

    for found in DELIMITER.find_iter(text) {
        if found.start() > last {
            result.push(&text[last..found.start()]);
        }
        result.push(found.as_str());
        last = found.end();
    }

    if last < text.len() {
        result.push(&text[last..]);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_words_and_spaces() {
        assert_eq!(segments("Hello world"), vec!["Hello", " ", "world"]);
    }

    #[test]
    fn test_tags_are_segments() {
        assert_eq!(
            segments("<b>bold</b> text"),
            vec!["<b>", "bold", "</b>", " ", "text"]
        );
    }

    #[test]
    fn test_tag_with_attributes_stays_whole() {
        assert_eq!(
            segments(r#"<a href="x">link</a>"#),
            vec![r#"<a href="x">"#, "link", "</a>"]
        );
    }

    #[test]
    fn test_consecutive_spaces() {
        assert_eq!(segments("a  b"), vec!["a", " ", " ", "b"]);
    }

    #[test]
    fn test_leading_and_trailing_delimiters() {
        assert_eq!(segments(" a "), vec![" ", "a", " "]);
    }

    #[test]
    fn test_newlines_stay_inside_runs() {
        assert_eq!(segments("one\ntwo three"), vec!["one\ntwo", " ", "three"]);
    }

    #[test]
    fn test_unclosed_bracket_is_text() {
        assert_eq!(segments("a <b"), vec!["a", " ", "<b"]);
    }

    #[test]
    fn test_empty_text() {
        assert!(segments("").is_empty());
    }

    #[test]
    fn test_round_trip() {
        let samples = [
            "",
            " ",
            "Hello world",
            "**Bold** and <i>italic</i>  with   gaps",
            "<p>\n  Multi\nline <br/> text\n</p>",
            "unicode ✓ — ünïcödé <span>日本語</span> ",
            "<<>>< >",
            "tabs\tare\tnot delimiters",
        ];

        for sample in samples {
            assert_eq!(segments(sample).concat(), sample, "round trip of {:?}", sample);
        }
    }

    #[test]
    fn test_segmentation_is_deterministic() {
        let text = "<h1>Title</h1> some body text <br> end";
        assert_eq!(segments(text), segments(text));
    }

    #[test]
    fn test_no_empty_segments() {
        let text = "  <a><b>  x  ";
        assert!(segments(text).iter().all(|s| !s.is_empty()));
    }

    /// Text rich in delimiters, newlines and multibyte characters
    fn markup_text() -> impl Strategy<Value = String> {
        "[a-z<> \n/=\"✓é日本]{0,64}"
    }

    proptest! {
        #[test]
        fn segments_rebuild_any_text(text in markup_text()) {
            prop_assert_eq!(segments(&text).concat(), text.clone());
        }

        #[test]
        fn segments_rebuild_arbitrary_unicode(text in any::<String>()) {
            prop_assert_eq!(segments(&text).concat(), text.clone());
        }

        #[test]
        fn segments_are_never_empty(text in markup_text()) {
            prop_assert!(segments(&text).iter().all(|s| !s.is_empty()));
        }

        #[test]
        fn segmentation_is_repeatable(text in markup_text()) {
            prop_assert_eq!(segments(&text), segments(&text));
        }
    }
}
