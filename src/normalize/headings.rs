//! Heading Blank-Line Insertion
//!
//! Global pass guaranteeing a blank line before every heading that
//! directly follows a non-blank line.

use std::sync::OnceLock;

use regex::Regex;

/// Matches a non-blank line end butting directly against a heading line.
fn heading_after_text() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([^\n])\n(#+ )").expect("heading pattern is valid"))
}

/// Insert a blank line before every heading that has none.
///
/// A heading at the very start of the document has no preceding line and
/// is left alone, as is any heading already separated by a blank line.
/// Fenced-code-block context is not consulted: a shell comment like
/// `# foo` inside a fence gains a blank line too, matching the rest of
/// the heading rule's purely textual view of the document.
pub fn ensure_heading_gaps(text: &str) -> String {
    heading_after_text()
        .replace_all(text, "${1}\n\n${2}")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line_inserted_after_text() {
        assert_eq!(ensure_heading_gaps("text\n# Heading"), "text\n\n# Heading");
    }

    #[test]
    fn test_heading_at_start_of_document_untouched() {
        assert_eq!(ensure_heading_gaps("# Title\nbody"), "# Title\nbody");
    }

    #[test]
    fn test_already_separated_heading_untouched() {
        let text = "text\n\n# Heading\n";
        assert_eq!(ensure_heading_gaps(text), text);
    }

    #[test]
    fn test_consecutive_headings_get_separated() {
        assert_eq!(
            ensure_heading_gaps("# One\n## Two"),
            "# One\n\n## Two"
        );
    }

    #[test]
    fn test_multiple_headings_in_one_document() {
        let text = "intro\n# One\nbody\n## Two\nmore";
        assert_eq!(
            ensure_heading_gaps(text),
            "intro\n\n# One\nbody\n\n## Two\nmore"
        );
    }

    #[test]
    fn test_hashes_without_space_are_not_headings() {
        let text = "text\n#nospace";
        assert_eq!(ensure_heading_gaps(text), text);
    }

    #[test]
    fn test_leading_blank_line_then_heading_untouched() {
        let text = "\n# Heading";
        assert_eq!(ensure_heading_gaps(text), text);
    }

    #[test]
    fn test_idempotent() {
        let once = ensure_heading_gaps("a\n# H\nb\n### Deep");
        assert_eq!(ensure_heading_gaps(&once), once);
    }
}
