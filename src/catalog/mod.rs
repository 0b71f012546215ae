//! Tag-indexed theme catalog.
//!
//! The catalog is a derived view over a flat list of host theme names: tags
//! and display names are projections of the name string and are recomputed
//! on every rebuild, never stored, so they cannot drift. Snapshots are
//! rebuilt from scratch whenever the underlying name list changes — catalogs
//! are tens of entries, so correctness wins over incremental cleverness.

pub mod parser;
pub mod transform;

use std::collections::BTreeSet;

pub use parser::{parse, ParsedName, UNCATEGORIZED};
pub use transform::{add_tag, remove_tag, replace_all_tags, TagPolicy};

/// Sentinel category holding the client-side favorites, always ordered first.
pub const FAVORITES: &str = "Favorites";

/// One theme with its derived projections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Canonical host-side identifier; unique within a snapshot.
    pub name: String,
    /// Tags parsed from `name`, in order of appearance.
    pub tags: Vec<String>,
    /// `name` with tags stripped.
    pub display_name: String,
}

impl Theme {
    fn from_name(name: &str) -> Self {
        let parsed = parse(name);
        Self {
            name: name.to_string(),
            tags: parsed.tags,
            display_name: parsed.display_name,
        }
    }

    /// True when this theme belongs to the given category label.
    pub fn in_category(&self, label: &str, favorites: &BTreeSet<String>) -> bool {
        if label == FAVORITES {
            favorites.contains(&self.name)
        } else {
            self.tags.iter().any(|t| t == label)
        }
    }
}

/// A derived grouping of themes sharing one label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub label: String,
    /// Members in catalog order. A theme appears at most once per category
    /// even when its name carries the tag twice.
    pub members: Vec<Theme>,
}

/// The fully derived catalog state at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSnapshot {
    /// All themes in source order (empty names skipped).
    pub themes: Vec<Theme>,
    /// Distinct tags encountered, in category order (excludes Favorites).
    pub tags: Vec<String>,
    /// Favorites first, then tag categories in collation order. Empty
    /// categories are included; hiding them is a presentation choice.
    pub categories: Vec<Category>,
}

/// Build a catalog snapshot from host theme names and the favorites set.
///
/// Deterministic: identical inputs produce structurally equal snapshots, so
/// callers may compare rebuilds directly.
pub fn build_index(theme_names: &[String], favorites: &BTreeSet<String>) -> CatalogSnapshot {
    let themes: Vec<Theme> = theme_names
        .iter()
        .filter(|name| !name.is_empty())
        .map(|name| Theme::from_name(name))
        .collect();

    let distinct: BTreeSet<&str> = themes
        .iter()
        .flat_map(|t| t.tags.iter().map(String::as_str))
        .collect();
    let mut tags: Vec<String> = distinct.into_iter().map(str::to_string).collect();
    tags.sort_by(|a, b| collation_key(a).cmp(&collation_key(b)));

    let mut categories = Vec::with_capacity(tags.len() + 1);
    categories.push(Category {
        label: FAVORITES.to_string(),
        members: members_of(&themes, FAVORITES, favorites),
    });
    for tag in &tags {
        categories.push(Category {
            label: tag.clone(),
            members: members_of(&themes, tag, favorites),
        });
    }

    CatalogSnapshot {
        themes,
        tags,
        categories,
    }
}

fn members_of(themes: &[Theme], label: &str, favorites: &BTreeSet<String>) -> Vec<Theme> {
    themes
        .iter()
        .filter(|t| t.in_category(label, favorites))
        .cloned()
        .collect()
}

/// Ordering key for category labels.
///
/// The deployment this grew out of sorted with CJK-aware locale collation;
/// we approximate with case-insensitive code-point order and the raw label
/// as tiebreak, which is deterministic across runs and platforms.
fn collation_key(label: &str) -> (String, String) {
    (label.to_lowercase(), label.to_string())
}

impl CatalogSnapshot {
    /// Look up a theme by its canonical name.
    pub fn theme(&self, name: &str) -> Option<&Theme> {
        self.themes.iter().find(|t| t.name == name)
    }

    /// True when a theme with this exact name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.theme(name).is_some()
    }

    /// Case-insensitive substring search over display names and full names,
    /// in catalog order.
    pub fn search(&self, query: &str) -> Vec<&Theme> {
        let needle = query.to_lowercase();
        self.themes
            .iter()
            .filter(|t| {
                t.display_name.to_lowercase().contains(&needle)
                    || t.name.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Members of one category label, if the category exists.
    pub fn category(&self, label: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.label == label)
    }
}
