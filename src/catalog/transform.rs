//! Pure name transforms for tag mutations.
//!
//! Every transform is a total `&str -> String` with no I/O; callers realize
//! the result against the host as a save-new-then-delete-old rename. The
//! same input always yields the same output.

use super::parser::parse;

/// What `add_tag` does when the tag is already present on the name.
///
/// The legacy behavior decorated the name again (`"[UI] [UI] Dark"` was
/// possible); dedup is opt-in via config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagPolicy {
    /// Always prepend, even when the tag is already present.
    #[default]
    AllowDuplicate,
    /// Return the name unchanged when the tag is already present.
    SkipExisting,
}

/// Prepend `"[tag] "` to the name.
pub fn add_tag(name: &str, tag: &str, policy: TagPolicy) -> String {
    if policy == TagPolicy::SkipExisting && parse(name).tags.iter().any(|t| t == tag) {
        return name.to_string();
    }
    format!("[{tag}] {name}")
}

/// Strip every bracket segment from the name and tag it with `new_tag` only.
///
/// This is the "move to this single category" operation: all prior tags are
/// discarded on purpose.
pub fn replace_all_tags(name: &str, new_tag: &str) -> String {
    format!("[{new_tag}] {}", parse(name).display_name)
}

/// Remove the first literal `"[tag]"` occurrence from the name, then trim.
///
/// Absent tags are a no-op, not an error.
pub fn remove_tag(name: &str, tag: &str) -> String {
    let needle = format!("[{tag}]");
    match name.find(&needle) {
        Some(at) => {
            let mut out = String::with_capacity(name.len());
            out.push_str(&name[..at]);
            out.push_str(&name[at + needle.len()..]);
            out.trim().to_string()
        }
        None => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_tag_prepends() {
        assert_eq!(add_tag("Dark", "UI", TagPolicy::AllowDuplicate), "[UI] Dark");
    }

    #[test]
    fn add_tag_allows_duplicates_by_default() {
        let name = add_tag("[UI] Dark", "UI", TagPolicy::default());
        assert_eq!(name, "[UI] [UI] Dark");
    }

    #[test]
    fn add_tag_skip_existing_is_a_noop_when_present() {
        assert_eq!(add_tag("[UI] Dark", "UI", TagPolicy::SkipExisting), "[UI] Dark");
    }

    #[test]
    fn add_tag_skip_existing_still_adds_new_tags() {
        assert_eq!(
            add_tag("[UI] Dark", "Night", TagPolicy::SkipExisting),
            "[Night] [UI] Dark"
        );
    }

    #[test]
    fn replace_all_tags_discards_every_prior_tag() {
        assert_eq!(replace_all_tags("[UI][Old] Midnight", "New"), "[New] Midnight");
    }

    #[test]
    fn replace_all_tags_on_untagged_name() {
        assert_eq!(replace_all_tags("Classic", "UI"), "[UI] Classic");
    }

    #[test]
    fn remove_tag_strips_first_occurrence_only() {
        assert_eq!(remove_tag("[UI] [UI] Dark", "UI"), "[UI] Dark");
    }

    #[test]
    fn remove_tag_missing_is_a_noop() {
        assert_eq!(remove_tag("Classic", "UI"), "Classic");
    }

    #[test]
    fn remove_tag_matches_literally_not_by_parse() {
        // "[ UI ]" parses to the tag "UI" but is not the literal "[UI]".
        assert_eq!(remove_tag("[ UI ] Dark", "UI"), "[ UI ] Dark");
    }

    #[test]
    fn add_then_remove_round_trips() {
        let name = "Classic";
        assert_eq!(
            remove_tag(&add_tag(name, "T", TagPolicy::AllowDuplicate), "T"),
            name
        );
    }

    #[cfg(feature = "fuzz-tests")]
    mod fuzz {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            // Round trip holds for any name that does not already embed the
            // tag literally.
            #[test]
            fn add_remove_round_trip(name in "[^\\[\\]]{0,40}") {
                let name = name.trim().to_string();
                let tagged = add_tag(&name, "T", TagPolicy::AllowDuplicate);
                prop_assert_eq!(remove_tag(&tagged, "T"), name);
            }
        }
    }
}
