//! Terminal rendering of the catalog and operation results.
//!
//! Output goes to stdout; diagnostics go to stderr so piping the catalog
//! into other tools stays clean.

use std::collections::BTreeSet;

use crossterm::style::{Color, Stylize};

use crate::catalog::{CatalogSnapshot, Theme, FAVORITES};
use crate::ops::BatchOutcome;

/// Catalog renderer with a single on/off color switch.
pub struct CatalogRenderer {
    color: bool,
}

impl CatalogRenderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Print the categorized tree.
    ///
    /// Empty categories are hidden unless `show_empty` is set; the snapshot
    /// itself always carries them.
    pub fn catalog(&self, snapshot: &CatalogSnapshot, favorites: &BTreeSet<String>, show_empty: bool) {
        for category in &snapshot.categories {
            if category.members.is_empty() && !show_empty {
                continue;
            }
            self.category_header(&category.label, category.members.len());
            for theme in &category.members {
                self.theme_line(theme, favorites);
            }
        }
    }

    /// Print search hits as a flat list.
    pub fn search_results(&self, hits: &[&Theme], favorites: &BTreeSet<String>) {
        if hits.is_empty() {
            self.info("no matching themes");
            return;
        }
        for theme in hits {
            self.theme_line(theme, favorites);
        }
    }

    /// Print per-item batch outcomes followed by a summary line.
    pub fn batch_report(&self, outcomes: &[BatchOutcome]) {
        let mut failed = 0usize;
        for outcome in outcomes {
            match (&outcome.result, &outcome.renamed_to) {
                (Ok(()), Some(new)) => {
                    println!("{} {} -> {new}", self.mark("✓", Color::Green), outcome.name)
                }
                (Ok(()), None) => {
                    println!("{} deleted {}", self.mark("✓", Color::Green), outcome.name)
                }
                (Err(e), _) => {
                    failed += 1;
                    println!("{} {}: {e}", self.mark("✗", Color::Red), outcome.name);
                }
            }
        }
        let done = outcomes.len() - failed;
        if failed == 0 {
            self.info(&format!("{done} of {} done", outcomes.len()));
        } else {
            self.warn(&format!("{done} of {} done, {failed} failed", outcomes.len()));
        }
    }

    fn category_header(&self, label: &str, count: usize) {
        let line = format!("{label} ({count})");
        if !self.color {
            println!("{line}");
        } else if label == FAVORITES {
            println!("{}", line.with(Color::Yellow).bold());
        } else {
            println!("{}", line.with(Color::Cyan).bold());
        }
    }

    fn theme_line(&self, theme: &Theme, favorites: &BTreeSet<String>) {
        let star = if favorites.contains(&theme.name) {
            " ★"
        } else {
            ""
        };
        // Show the full (tagged) name alongside the display name when the
        // two differ, since the full name is what mutation commands take.
        let full = if theme.display_name == theme.name {
            String::new()
        } else {
            format!("  {}", theme.name)
        };
        if self.color {
            println!(
                "  {}{}{}",
                theme.display_name.as_str().with(Color::White),
                star.with(Color::Yellow),
                full.as_str().with(Color::DarkGrey)
            );
        } else {
            println!("  {}{star}{full}", theme.display_name);
        }
    }

    fn mark(&self, glyph: &str, color: Color) -> String {
        if self.color {
            format!("{}", glyph.with(color))
        } else {
            glyph.to_string()
        }
    }

    /// Print an informational line to stderr.
    pub fn info(&self, msg: &str) {
        if self.color {
            eprintln!("{}", msg.with(Color::DarkGrey));
        } else {
            eprintln!("{msg}");
        }
    }

    /// Print a warning line to stderr.
    pub fn warn(&self, msg: &str) {
        if self.color {
            eprintln!("{}", format!("warning: {msg}").with(Color::Yellow));
        } else {
            eprintln!("warning: {msg}");
        }
    }

    /// Print an error line to stderr.
    pub fn error(&self, msg: &str) {
        if self.color {
            eprintln!("{}", format!("error: {msg}").with(Color::Red));
        } else {
            eprintln!("error: {msg}");
        }
    }
}
