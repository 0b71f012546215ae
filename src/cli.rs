//! CLI argument parsing via clap.

use clap::{Parser, Subcommand};

/// Organize a chat host's themes with bracket tags, favorites and batches.
#[derive(Debug, Parser)]
#[command(name = "themedeck", version)]
pub struct Args {
    /// Path to config file (default: ./themedeck.toml or ~/.config/themedeck/themedeck.toml).
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Override the host base URL.
    #[arg(long = "base-url")]
    pub base_url: Option<String>,

    /// Disable color output.
    #[arg(long = "no-color")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the categorized theme catalog.
    List {
        /// Filter themes by a case-insensitive substring.
        #[arg(short = 's', long = "search")]
        search: Option<String>,
        /// Also show empty categories.
        #[arg(long = "all")]
        all: bool,
    },
    /// Add a tag to one theme (prepends "[TAG] " to its name).
    AddTag { theme: String, tag: String },
    /// Remove one tag from one theme; a no-op when the tag is absent.
    RemoveTag { theme: String, tag: String },
    /// Move a theme to a single category, discarding all its other tags.
    SetTag { theme: String, tag: String },
    /// Rename a theme to a new full name (tags included as written).
    Rename {
        old: String,
        new: String,
        /// Overwrite an existing theme at the new name.
        #[arg(long = "force")]
        force: bool,
    },
    /// Delete one theme from the host.
    Delete {
        theme: String,
        /// Skip the confirmation prompt.
        #[arg(short = 'y', long = "yes")]
        yes: bool,
    },
    /// Apply one operation to every theme in a selection.
    Batch {
        #[command(subcommand)]
        op: BatchOp,
    },
    /// Toggle a theme in the favorites set, or list favorites with no name.
    Fav { theme: Option<String> },
    /// Print a random theme name, optionally from one category.
    Random {
        /// Restrict the pool to one category label.
        #[arg(short = 't', long = "tag")]
        tag: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum BatchOp {
    /// Add a tag to every selected theme.
    AddTag {
        tag: String,
        #[command(flatten)]
        select: BatchSelect,
    },
    /// Move every selected theme to a single category.
    SetTag {
        tag: String,
        #[command(flatten)]
        select: BatchSelect,
    },
    /// Remove a tag from every selected theme that carries it.
    RemoveTag {
        tag: String,
        #[command(flatten)]
        select: BatchSelect,
    },
    /// Delete every selected theme.
    Delete {
        #[command(flatten)]
        select: BatchSelect,
    },
}

/// Selection flags shared by all batch operations.
#[derive(Debug, clap::Args)]
pub struct BatchSelect {
    /// Select all members of one category label.
    #[arg(long = "tag", value_name = "LABEL", conflicts_with = "search")]
    pub in_tag: Option<String>,

    /// Select by case-insensitive substring over theme names.
    #[arg(long = "search", value_name = "QUERY")]
    pub search: Option<String>,

    /// Skip the confirmation prompt.
    #[arg(short = 'y', long = "yes")]
    pub yes: bool,
}
