//! CLI entry point for themedeck.

mod cli;

use std::collections::BTreeSet;
use std::io::{BufRead, Write};

use clap::Parser;
use themedeck::api::HostClient;
use themedeck::catalog::{add_tag, build_index, remove_tag, replace_all_tags, CatalogSnapshot};
use themedeck::config::{load_config, Config};
use themedeck::error::AppError;
use themedeck::favorites::{toggle, FavoritesStore};
use themedeck::ops::{
    plan_renames, random_pick, rename_theme, run_delete_batch, run_rename_batch, select_names,
    Selection,
};
use themedeck::render::CatalogRenderer;
use tracing_subscriber::EnvFilter;

use cli::{Args, BatchOp, BatchSelect, Command};

/// Favorites file used when no config directory can be resolved.
const FALLBACK_FAVORITES: &str = "themedeck-favorites.json";

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Diagnostics go to stderr so catalog output stays pipeable.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut config = match load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };
    if let Some(url) = &args.base_url {
        config.base_url = url.clone();
    }

    let renderer = CatalogRenderer::new(!args.no_color);
    if let Err(e) = run(args.command, &config, &renderer).await {
        renderer.error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(command: Command, config: &Config, renderer: &CatalogRenderer) -> Result<(), AppError> {
    let store = favorites_store(config);
    let favorites = store.load();

    match command {
        Command::List { search, all } => {
            let snapshot = fetch_snapshot(config, &favorites).await?;
            match search {
                Some(query) => renderer.search_results(&snapshot.search(&query), &favorites),
                None => renderer.catalog(&snapshot, &favorites, all || config.show_empty),
            }
        }

        Command::AddTag { theme, tag } => {
            let policy = config.tag_policy;
            apply_transform(config, renderer, &theme, |name| add_tag(name, &tag, policy)).await?;
        }
        Command::RemoveTag { theme, tag } => {
            apply_transform(config, renderer, &theme, |name| remove_tag(name, &tag)).await?;
        }
        Command::SetTag { theme, tag } => {
            apply_transform(config, renderer, &theme, |name| replace_all_tags(name, &tag))
                .await?;
        }

        Command::Rename { old, new, force } => {
            let client = HostClient::new(config)?;
            let themes = client.themes().await?;
            rename_theme(&client, &themes, &old, &new, force).await?;
            renderer.info(&format!("renamed `{old}` to `{new}`"));
        }

        Command::Delete { theme, yes } => {
            let client = HostClient::new(config)?;
            let themes = client.themes().await?;
            if !theme_known(&themes, &theme) {
                return Err(themedeck::error::OpError::UnknownTheme(theme).into());
            }
            if !yes && !confirm(&format!("delete theme `{theme}`?")) {
                return Err(AppError::Aborted);
            }
            client.delete_theme(&theme).await?;
            renderer.info(&format!("deleted `{theme}`"));
        }

        Command::Batch { op } => run_batch(op, config, renderer, &favorites).await?,

        Command::Fav { theme } => match theme {
            Some(name) => {
                let next = toggle(&favorites, &name);
                store.save(&next)?;
                if next.contains(&name) {
                    renderer.info(&format!("added `{name}` to favorites"));
                } else {
                    renderer.info(&format!("removed `{name}` from favorites"));
                }
            }
            None => {
                for name in &favorites {
                    println!("{name}");
                }
            }
        },

        Command::Random { tag } => {
            let snapshot = fetch_snapshot(config, &favorites).await?;
            match random_pick(&snapshot, tag.as_deref()) {
                Some(theme) => println!("{}", theme.name),
                None => renderer.info("no themes to pick from"),
            }
        }
    }

    Ok(())
}

/// Fetch theme names and build a fresh snapshot. The catalog is always
/// rebuilt from scratch; there is no incremental patching to get wrong.
async fn fetch_snapshot(
    config: &Config,
    favorites: &BTreeSet<String>,
) -> Result<CatalogSnapshot, AppError> {
    let client = HostClient::new(config)?;
    let names = client.theme_names().await?;
    Ok(build_index(&names, favorites))
}

/// Apply a single-theme name transform as a rename saga.
async fn apply_transform<F>(
    config: &Config,
    renderer: &CatalogRenderer,
    theme: &str,
    transform: F,
) -> Result<(), AppError>
where
    F: Fn(&str) -> String,
{
    let client = HostClient::new(config)?;
    let themes = client.themes().await?;
    if !theme_known(&themes, theme) {
        return Err(themedeck::error::OpError::UnknownTheme(theme.to_string()).into());
    }
    let new = transform(theme);
    if new == theme {
        renderer.info("no change");
        return Ok(());
    }
    rename_theme(&client, &themes, theme, &new, false).await?;
    renderer.info(&format!("renamed `{theme}` to `{new}`"));
    Ok(())
}

async fn run_batch(
    op: BatchOp,
    config: &Config,
    renderer: &CatalogRenderer,
    favorites: &BTreeSet<String>,
) -> Result<(), AppError> {
    let client = HostClient::new(config)?;
    let themes = client.themes().await?;
    let names: Vec<String> = themes
        .iter()
        .filter_map(|t| t.get("name").and_then(serde_json::Value::as_str))
        .map(str::to_string)
        .collect();
    let snapshot = build_index(&names, favorites);

    let (select, transform): (&BatchSelect, Option<Box<dyn Fn(&str) -> String>>) = match &op {
        BatchOp::AddTag { tag, select } => {
            let tag = tag.clone();
            let policy = config.tag_policy;
            (select, Some(Box::new(move |name: &str| add_tag(name, &tag, policy))))
        }
        BatchOp::SetTag { tag, select } => {
            let tag = tag.clone();
            (select, Some(Box::new(move |name: &str| replace_all_tags(name, &tag))))
        }
        BatchOp::RemoveTag { tag, select } => {
            let tag = tag.clone();
            (select, Some(Box::new(move |name: &str| remove_tag(name, &tag))))
        }
        BatchOp::Delete { select } => (select, None),
    };

    let selection = selection_from(select)?;
    let selected = select_names(&snapshot, &selection);
    if selected.is_empty() {
        renderer.info("selection matched no themes");
        return Ok(());
    }

    match transform {
        Some(transform) => {
            let plans = plan_renames(&selected, transform.as_ref());
            if plans.is_empty() {
                renderer.info("nothing to do");
                return Ok(());
            }
            if !select.yes && !confirm(&format!("rename {} theme(s)?", plans.len())) {
                return Err(AppError::Aborted);
            }
            let outcomes = run_rename_batch(&client, &themes, &plans, false).await;
            renderer.batch_report(&outcomes);
        }
        None => {
            if !select.yes && !confirm(&format!("delete {} theme(s)?", selected.len())) {
                return Err(AppError::Aborted);
            }
            let outcomes = run_delete_batch(&client, &selected).await;
            renderer.batch_report(&outcomes);
        }
    }
    Ok(())
}

fn selection_from(select: &BatchSelect) -> Result<Selection, AppError> {
    match (&select.in_tag, &select.search) {
        (Some(label), None) => Ok(Selection::Tag(label.clone())),
        (None, Some(query)) => Ok(Selection::Search(query.clone())),
        _ => Err(AppError::Usage(
            "select themes with --tag <LABEL> or --search <QUERY>".to_string(),
        )),
    }
}

fn favorites_store(config: &Config) -> FavoritesStore {
    match &config.favorites_path {
        Some(path) => FavoritesStore::open(path),
        None => FavoritesStore::open_default()
            .unwrap_or_else(|| FavoritesStore::open(FALLBACK_FAVORITES)),
    }
}

/// Ask a yes/no question on stderr and read the answer from stdin.
fn confirm(prompt: &str) -> bool {
    eprint!("{prompt} [y/N] ");
    let _ = std::io::stderr().flush();
    let mut line = String::new();
    if std::io::stdin().lock().read_line(&mut line).is_err() {
        return false;
    }
    matches!(line.trim().to_lowercase().as_str(), "y" | "yes")
}

fn theme_known(themes: &[serde_json::Value], name: &str) -> bool {
    themes
        .iter()
        .any(|t| t.get("name").and_then(serde_json::Value::as_str) == Some(name))
}
