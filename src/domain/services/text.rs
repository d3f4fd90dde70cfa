// src/domain/services/text.rs
//
// Pure text shaping for bookmark descriptions: word-count trimming and
// cleanup of reader-endpoint boilerplate.

use regex::Regex;
use std::sync::OnceLock;

/// Word cap applied to every stored description.
pub const MAX_DESCRIPTION_WORDS: usize = 50;

fn excess_newlines() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n{3,}").expect("valid regex"))
}

/// Truncate `text` to at most `max_words` whitespace-separated words.
///
/// Text within the cap is returned unchanged, original whitespace included.
/// Over the cap, the first `max_words` words are rejoined with single spaces
/// and an ellipsis marker is appended.
pub fn trim_to_words(text: &str, max_words: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= max_words {
        return text.to_string();
    }
    format!("{}...", words[..max_words].join(" "))
}

/// Strip reader-endpoint boilerplate from a raw summary response.
///
/// Drops lines that start with `Title:`, `URL Source:` or
/// `Markdown Content:`, removes a leading `Markdown Content:` prefix, trims
/// surrounding dashes and whitespace, and collapses runs of three or more
/// newlines down to two.
pub fn clean_reader_summary(raw: &str) -> String {
    let kept: Vec<&str> = raw
        .lines()
        .filter(|line| {
            !(line.starts_with("Title:")
                || line.starts_with("URL Source:")
                || line.starts_with("Markdown Content:"))
        })
        .collect();
    let mut text = kept.join("\n");

    if let Some(rest) = text.strip_prefix("Markdown Content:") {
        text = rest.trim_start_matches(' ').trim_start_matches('\n').to_string();
    }

    let text = text.trim_matches(|c: char| c.is_whitespace() || c == '-');
    excess_newlines().replace_all(text, "\n\n").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_within_cap_returns_input_unchanged() {
        let text = "short  text   with\toriginal whitespace";
        assert_eq!(trim_to_words(text, 50), text);
    }

    #[test]
    fn test_trim_at_exact_cap_returns_input_unchanged() {
        let text = (0..50).map(|i| i.to_string()).collect::<Vec<_>>().join(" ");
        assert_eq!(trim_to_words(&text, 50), text);
    }

    #[test]
    fn test_trim_over_cap_joins_first_words_with_ellipsis() {
        let text = (0..60).map(|i| format!("w{}", i)).collect::<Vec<_>>().join("  ");
        let expected = format!(
            "{}...",
            (0..50).map(|i| format!("w{}", i)).collect::<Vec<_>>().join(" ")
        );
        assert_eq!(trim_to_words(&text, 50), expected);
    }

    #[test]
    fn test_trim_empty_input() {
        assert_eq!(trim_to_words("", 50), "");
    }

    #[test]
    fn test_clean_strips_boilerplate_and_collapses_newlines() {
        let raw = "Title: Foo\nURL Source: bar\nMarkdown Content: \nHello\n\n\n\nWorld";
        assert_eq!(clean_reader_summary(raw), "Hello\n\nWorld");
    }

    #[test]
    fn test_clean_strips_leading_markdown_prefix() {
        // The whole prefix line is dropped by the line filter.
        assert_eq!(clean_reader_summary("Markdown Content: Hello"), "");
        assert_eq!(clean_reader_summary("Markdown Content:\nHello"), "Hello");
    }

    #[test]
    fn test_clean_trims_surrounding_dashes() {
        assert_eq!(clean_reader_summary("---\nActual content\n---"), "Actual content");
    }

    #[test]
    fn test_clean_keeps_interior_lines_mentioning_title() {
        let raw = "Body line\nThe Title: of this book\nMore";
        assert_eq!(clean_reader_summary(raw), "Body line\nThe Title: of this book\nMore");
    }

    #[test]
    fn test_clean_all_boilerplate_yields_empty() {
        let raw = "Title: x\nURL Source: y\nMarkdown Content:";
        assert_eq!(clean_reader_summary(raw), "");
    }
}
