//! Text helpers shared by the page and flow renderers.
//!
//! Widths and truncation limits count Unicode scalar values, not bytes.

use crate::models::resume::ResumeSnapshot;

/// Separator for the contact and links lines.
pub const FIELD_SEPARATOR: &str = " | ";
/// Separator for entry title lines ("Engineer — Acme").
pub const TITLE_SEPARATOR: &str = " — ";
/// Prefix for every wrapped bullet line in the page document.
pub const BULLET_PREFIX: &str = "  • ";

/// Greedy word wrap.
///
/// Words are packed onto the current line while
/// `current_width + (1 if line non-empty) + len(word) <= width`. A word longer than
/// `width` gets a line of its own and is never split. Empty or all-whitespace input
/// yields no lines.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        let space_len = usize::from(!current.is_empty());

        if current_width + space_len + word_len <= width {
            if space_len == 1 {
                current.push(' ');
            }
            current.push_str(word);
            current_width += space_len + word_len;
        } else {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            current.push_str(word);
            current_width = word_len;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Joins the non-empty parts with `sep`, keeping their order.
pub fn join_nonempty<'a, I>(parts: I, sep: &str) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    parts
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(sep)
}

/// Returns at most the first `max_chars` characters of `text`. No ellipsis.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// "email | phone | location", empty parts skipped.
pub fn contact_line(snapshot: &ResumeSnapshot) -> String {
    join_nonempty(
        [
            snapshot.email.as_str(),
            snapshot.phone.as_str(),
            snapshot.location.as_str(),
        ],
        FIELD_SEPARATOR,
    )
}

/// "linkedin | github", empty parts skipped.
pub fn links_line(snapshot: &ResumeSnapshot) -> String {
    join_nonempty(
        [snapshot.linkedin.as_str(), snapshot.github.as_str()],
        FIELD_SEPARATOR,
    )
}

/// Comma-joined string skills. Never truncated here.
pub fn skills_line(snapshot: &ResumeSnapshot) -> String {
    snapshot.skill_names().collect::<Vec<_>>().join(", ")
}

/// The display name, or "Unnamed" when the record has none.
pub fn display_name(snapshot: &ResumeSnapshot) -> &str {
    if snapshot.full_name.is_empty() {
        "Unnamed"
    } else {
        &snapshot.full_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_wrap_empty_and_whitespace() {
        assert!(wrap_text("", 10).is_empty());
        assert!(wrap_text("   \t\n  ", 10).is_empty());
    }

    #[test]
    fn test_wrap_packs_greedily() {
        let lines = wrap_text("the quick brown fox jumps", 10);
        assert_eq!(lines, vec!["the quick", "brown fox", "jumps"]);
    }

    #[test]
    fn test_wrap_exact_fit_stays_on_line() {
        // "aaaa bbbbb" is exactly 10 characters.
        assert_eq!(wrap_text("aaaa bbbbb", 10), vec!["aaaa bbbbb"]);
    }

    #[test]
    fn test_wrap_long_word_kept_whole() {
        let lines = wrap_text("a supercalifragilistic b", 5);
        assert_eq!(lines, vec!["a", "supercalifragilistic", "b"]);
    }

    #[test]
    fn test_wrap_normalizes_whitespace() {
        assert_eq!(wrap_text("  one\n\ttwo   three ", 95), vec!["one two three"]);
    }

    #[test]
    fn test_wrap_counts_characters_not_bytes() {
        // Each word is 4 characters but more than 4 bytes.
        let lines = wrap_text("éééé üüüü", 9);
        assert_eq!(lines, vec!["éééé üüüü"]);
    }

    #[test]
    fn test_join_nonempty_skips_empty_parts() {
        assert_eq!(join_nonempty(["a", "", "c"], " | "), "a | c");
        assert_eq!(join_nonempty(["", ""], " | "), "");
        assert_eq!(join_nonempty(["Engineer", "Acme"], TITLE_SEPARATOR), "Engineer — Acme");
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("hello", 3), "hel");
        assert_eq!(truncate_chars("hello", 5), "hello");
        assert_eq!(truncate_chars("hello", 50), "hello");
        assert_eq!(truncate_chars("ééééé", 2), "éé");
        assert_eq!(truncate_chars("", 2), "");
    }

    #[test]
    fn test_contact_and_links_lines() {
        let snapshot = ResumeSnapshot {
            email: "john@example.com".into(),
            phone: "555-1234".into(),
            github: "https://github.com/johndoe".into(),
            ..Default::default()
        };
        assert_eq!(contact_line(&snapshot), "john@example.com | 555-1234");
        assert_eq!(links_line(&snapshot), "https://github.com/johndoe");
    }

    #[test]
    fn test_skills_line_drops_non_strings() {
        let snapshot = ResumeSnapshot {
            skills: vec![json!("Python"), json!(42), json!("Go")],
            ..Default::default()
        };
        assert_eq!(skills_line(&snapshot), "Python, Go");
    }

    #[test]
    fn test_display_name_defaults_to_unnamed() {
        assert_eq!(display_name(&ResumeSnapshot::default()), "Unnamed");
        let named = ResumeSnapshot {
            full_name: "John Doe".into(),
            ..Default::default()
        };
        assert_eq!(display_name(&named), "John Doe");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn wrapped_lines_fit_unless_single_long_word(
            text in "[a-zA-Z]{0,15}( {1,3}[a-zA-Z]{0,15}){0,30}",
            width in 1usize..40
        ) {
            for line in wrap_text(&text, width) {
                let len = line.chars().count();
                prop_assert!(
                    len <= width || !line.contains(' '),
                    "line {:?} exceeds width {} and is not a single word",
                    line,
                    width
                );
            }
        }

        #[test]
        fn rejoined_lines_reconstruct_words(
            text in "[a-z]{0,12}([ \t\n]{1,3}[a-z]{0,12}){0,30}",
            width in 1usize..60
        ) {
            let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
            let rejoined = wrap_text(&text, width).join(" ");
            prop_assert_eq!(rejoined, normalized);
        }
    }
}
