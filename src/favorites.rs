//! Client-side favorites, persisted as a JSON array of theme names.
//!
//! Favorites live outside the host catalog and survive catalog reloads.
//! Entries pointing at deleted or renamed themes are tolerated: they simply
//! produce empty membership and are never pruned eagerly.

use crate::error::StoreError;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Default file name under the themedeck config directory.
const FAVORITES_FILE: &str = "favorites.json";

/// Toggle a name in the favorites set: insert if absent, remove if present.
pub fn toggle(favorites: &BTreeSet<String>, name: &str) -> BTreeSet<String> {
    let mut next = favorites.clone();
    if !next.remove(name) {
        next.insert(name.to_string());
    }
    next
}

/// Filesystem-backed favorites storage.
#[derive(Debug, Clone)]
pub struct FavoritesStore {
    path: PathBuf,
}

impl FavoritesStore {
    /// Open the store at its default location (`~/.config/themedeck/favorites.json`).
    pub fn open_default() -> Option<Self> {
        dirs::config_dir().map(|root| Self::open(root.join("themedeck").join(FAVORITES_FILE)))
    }

    /// Open a store backed by the given file path.
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Load the favorites set.
    ///
    /// A missing or malformed file degrades to an empty set so one bad write
    /// never bricks the catalog view.
    pub fn load(&self) -> BTreeSet<String> {
        let Ok(raw) = fs::read_to_string(&self.path) else {
            return BTreeSet::new();
        };
        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(names) => names.into_iter().collect(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "ignoring malformed favorites file");
                BTreeSet::new()
            }
        }
    }

    /// Persist the favorites set, creating parent directories as needed.
    pub fn save(&self, favorites: &BTreeSet<String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let names: Vec<&String> = favorites.iter().collect();
        let json = serde_json::to_vec_pretty(&names)?;
        // Write to a sibling temporary file first so partial writes do not
        // corrupt the last known-good favorites list.
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}
