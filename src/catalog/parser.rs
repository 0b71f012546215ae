//! Bracket-tag parser for theme names.
//!
//! Theme names encode their grouping inline: `"[UI][Dark Mode] Midnight"`
//! carries the tags `UI` and `Dark Mode` and displays as `Midnight`. Parsing
//! is total — every string is a valid theme name — so the rest of the
//! catalog never has to handle a parse failure.

/// Sentinel category for themes whose name carries no tags.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// The derived projection of one theme name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName {
    /// Tags in order of appearance. Duplicates are preserved; an untagged
    /// name gets the single [`UNCATEGORIZED`] sentinel.
    pub tags: Vec<String>,
    /// The name with every bracket segment removed and the result trimmed.
    pub display_name: String,
}

/// Parse a theme name into its tags and display name.
///
/// Scans left to right for non-overlapping `[...]` segments. The inner text
/// is trimmed and kept only when non-empty. Unbalanced brackets are not
/// segments and pass through into the display name untouched.
pub fn parse(name: &str) -> ParsedName {
    let mut tags = Vec::new();
    let mut display = String::with_capacity(name.len());
    let mut rest = name;

    while let Some(open) = rest.find('[') {
        match rest[open + 1..].find(']') {
            Some(close) => {
                let inner = &rest[open + 1..open + 1 + close];
                let trimmed = inner.trim();
                if !trimmed.is_empty() {
                    tags.push(trimmed.to_string());
                }
                display.push_str(&rest[..open]);
                rest = &rest[open + 1 + close + 1..];
            }
            // No closing bracket ahead: nothing after this point can match.
            None => break,
        }
    }
    display.push_str(rest);

    if tags.is_empty() {
        tags.push(UNCATEGORIZED.to_string());
    }

    ParsedName {
        tags,
        display_name: display.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untagged_name_is_uncategorized() {
        let parsed = parse("Classic");
        assert_eq!(parsed.tags, vec![UNCATEGORIZED]);
        assert_eq!(parsed.display_name, "Classic");
    }

    #[test]
    fn single_tag_is_stripped_from_display() {
        let parsed = parse("[UI] Dark");
        assert_eq!(parsed.tags, vec!["UI"]);
        assert_eq!(parsed.display_name, "Dark");
    }

    #[test]
    fn multiple_tags_keep_order_of_appearance() {
        let parsed = parse("[UI][Dark Mode] Midnight");
        assert_eq!(parsed.tags, vec!["UI", "Dark Mode"]);
        assert_eq!(parsed.display_name, "Midnight");
    }

    #[test]
    fn duplicate_tags_are_preserved() {
        let parsed = parse("[UI][UI] Twice");
        assert_eq!(parsed.tags, vec!["UI", "UI"]);
    }

    #[test]
    fn inner_text_is_trimmed() {
        let parsed = parse("[ UI ] Dark");
        assert_eq!(parsed.tags, vec!["UI"]);
    }

    #[test]
    fn empty_brackets_contribute_no_tag() {
        let parsed = parse("[] Plain");
        assert_eq!(parsed.tags, vec![UNCATEGORIZED]);
        assert_eq!(parsed.display_name, "Plain");
    }

    #[test]
    fn unbalanced_open_bracket_passes_through() {
        let parsed = parse("[UI Dark");
        assert_eq!(parsed.tags, vec![UNCATEGORIZED]);
        assert_eq!(parsed.display_name, "[UI Dark");
    }

    #[test]
    fn stray_close_bracket_passes_through() {
        let parsed = parse("UI] Dark");
        assert_eq!(parsed.tags, vec![UNCATEGORIZED]);
        assert_eq!(parsed.display_name, "UI] Dark");
    }

    #[test]
    fn tag_in_the_middle_of_the_name() {
        let parsed = parse("Dark [UI] Blue");
        assert_eq!(parsed.tags, vec!["UI"]);
        assert_eq!(parsed.display_name, "Dark  Blue");
    }

    #[test]
    fn empty_string_parses() {
        let parsed = parse("");
        assert_eq!(parsed.tags, vec![UNCATEGORIZED]);
        assert_eq!(parsed.display_name, "");
    }

    #[test]
    fn non_ascii_tags_parse() {
        let parsed = parse("[深色] 午夜");
        assert_eq!(parsed.tags, vec!["深色"]);
        assert_eq!(parsed.display_name, "午夜");
    }

    // Re-parsing a display name yields no tags unless the display name itself
    // happened to contain a fresh bracket pair.
    #[test]
    fn display_name_contains_no_bracket_segment() {
        for name in ["[UI] Dark", "[a][b] c", "x [y] z", "[][][]", "plain"] {
            let display = parse(name).display_name;
            let reparsed = parse(&display);
            assert_eq!(reparsed.tags, vec![UNCATEGORIZED], "name: {name}");
            assert_eq!(reparsed.display_name, display, "name: {name}");
        }
    }

    #[cfg(feature = "fuzz-tests")]
    mod fuzz {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            // Totality: no input panics, and the display name never retains a
            // complete bracket segment.
            #[test]
            fn parse_is_total_and_strips_all_segments(name in ".{0,64}") {
                let parsed = parse(&name);
                prop_assert!(!parsed.tags.is_empty());
                if let Some(open) = parsed.display_name.find('[') {
                    prop_assert!(parsed.display_name[open + 1..].find(']').is_none());
                }
            }

            // Idempotence on the display projection.
            #[test]
            fn reparse_of_display_name_is_stable(name in ".{0,64}") {
                let display = parse(&name).display_name;
                let again = parse(&display);
                prop_assert_eq!(parse(&again.display_name).display_name, again.display_name);
            }
        }
    }
}
