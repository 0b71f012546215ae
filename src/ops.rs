//! Mutation operations against the host catalog.
//!
//! The host has no rename primitive, so every tag edit is realized as a
//! two-step saga: save the theme object under its new name, then delete the
//! old name. Saving first means there is never a window with zero copies of
//! the theme; a failure between the steps leaves both names present, which
//! is logged and surfaced rather than rolled back.

use std::collections::BTreeSet;

use serde_json::{json, Value};

use crate::api::{theme_object, HostClient};
use crate::catalog::CatalogSnapshot;
use crate::error::OpError;

/// One planned rename, derived from a pure transform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePlan {
    pub old: String,
    pub new: String,
}

/// Outcome of one batch item. Items are independent: a failure here never
/// affects the items before or after it.
#[derive(Debug)]
pub struct BatchOutcome {
    pub name: String,
    /// The new name for rename items; `None` for deletions.
    pub renamed_to: Option<String>,
    pub result: Result<(), OpError>,
}

/// How a batch selects its target themes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// All members of one category label.
    Tag(String),
    /// Case-insensitive substring match over display and full names.
    Search(String),
}

/// Resolve a selection to theme names, in catalog order.
pub fn select_names(snapshot: &CatalogSnapshot, selection: &Selection) -> Vec<String> {
    match selection {
        Selection::Tag(label) => snapshot
            .category(label)
            .map(|c| c.members.iter().map(|t| t.name.clone()).collect())
            .unwrap_or_default(),
        Selection::Search(query) => snapshot
            .search(query)
            .into_iter()
            .map(|t| t.name.clone())
            .collect(),
    }
}

/// Map names through a transform, dropping no-op results.
///
/// Skipping identity results means e.g. `remove-tag` over a mixed selection
/// only issues host calls for themes that actually carry the tag.
pub fn plan_renames<F>(names: &[String], transform: F) -> Vec<RenamePlan>
where
    F: Fn(&str) -> String,
{
    names
        .iter()
        .filter_map(|old| {
            let new = transform(old);
            (new != *old).then(|| RenamePlan {
                old: old.clone(),
                new,
            })
        })
        .collect()
}

/// Rename one theme via the save-then-delete saga.
///
/// Refuses to land on an existing name unless `force` is set; the host
/// upsert would silently overwrite it otherwise.
pub async fn rename_theme(
    client: &HostClient,
    themes: &[Value],
    old: &str,
    new: &str,
    force: bool,
) -> Result<(), OpError> {
    if old == new {
        return Ok(());
    }
    let theme = theme_object(themes, old).ok_or_else(|| OpError::UnknownTheme(old.to_string()))?;
    if !force && theme_object(themes, new).is_some() {
        return Err(OpError::NameCollision(new.to_string()));
    }

    let mut renamed = theme.clone();
    match renamed.as_object_mut() {
        Some(fields) => {
            fields.insert("name".to_string(), json!(new));
        }
        None => {
            return Err(crate::error::ApiError::Malformed(format!(
                "theme entry for `{old}` is not an object"
            ))
            .into());
        }
    }
    client.save_theme(&renamed).await?;

    if let Err(e) = client.delete_theme(old).await {
        // The new copy is saved but the old one remains; both names now
        // exist on the host until the user cleans up.
        tracing::warn!(old, new, error = %e, "rename saga incomplete: both names remain");
        return Err(e.into());
    }
    Ok(())
}

/// Execute planned renames strictly sequentially, best effort.
///
/// No cross-item atomicity: a failure at item k leaves items before k
/// renamed and items after k untouched until their own turn. A target name
/// already claimed by an earlier item of the same batch is refused as a
/// collision without touching the host: the theme list was fetched before
/// the batch started, so `rename_theme` alone cannot see names the batch
/// itself creates, and saving onto one would silently drop a theme.
pub async fn run_rename_batch(
    client: &HostClient,
    themes: &[Value],
    plans: &[RenamePlan],
    force: bool,
) -> Vec<BatchOutcome> {
    let mut outcomes = Vec::with_capacity(plans.len());
    let mut claimed: BTreeSet<&str> = BTreeSet::new();
    for plan in plans {
        let result = if !force && !claimed.insert(plan.new.as_str()) {
            Err(OpError::NameCollision(plan.new.clone()))
        } else {
            rename_theme(client, themes, &plan.old, &plan.new, force).await
        };
        if let Err(e) = &result {
            tracing::warn!(old = %plan.old, new = %plan.new, error = %e, "batch rename item failed");
        }
        outcomes.push(BatchOutcome {
            name: plan.old.clone(),
            renamed_to: Some(plan.new.clone()),
            result,
        });
    }
    outcomes
}

/// Delete the named themes strictly sequentially, best effort.
pub async fn run_delete_batch(client: &HostClient, names: &[String]) -> Vec<BatchOutcome> {
    let mut outcomes = Vec::with_capacity(names.len());
    for name in names {
        let result = client.delete_theme(name).await.map_err(OpError::from);
        if let Err(e) = &result {
            tracing::warn!(name = %name, error = %e, "batch delete item failed");
        }
        outcomes.push(BatchOutcome {
            name: name.clone(),
            renamed_to: None,
            result,
        });
    }
    outcomes
}

/// Pick a uniformly random theme, optionally restricted to one category.
pub fn random_pick<'a>(
    snapshot: &'a CatalogSnapshot,
    tag: Option<&str>,
) -> Option<&'a crate::catalog::Theme> {
    use rand::seq::SliceRandom;

    let pool: &[crate::catalog::Theme] = match tag {
        Some(label) => &snapshot.category(label)?.members,
        None => &snapshot.themes,
    };
    pool.choose(&mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{build_index, remove_tag, replace_all_tags};
    use std::collections::BTreeSet;

    fn snapshot(names: &[&str]) -> CatalogSnapshot {
        let names: Vec<String> = names.iter().map(|s| s.to_string()).collect();
        build_index(&names, &BTreeSet::new())
    }

    #[test]
    fn plan_renames_drops_identity_results() {
        let names: Vec<String> = vec!["[UI] Dark".into(), "Classic".into()];
        let plans = plan_renames(&names, |name| remove_tag(name, "UI"));
        assert_eq!(
            plans,
            vec![RenamePlan {
                old: "[UI] Dark".into(),
                new: "Dark".into()
            }]
        );
    }

    #[test]
    fn plan_renames_keeps_selection_order() {
        let names: Vec<String> = vec!["[A] one".into(), "[B] two".into()];
        let plans = plan_renames(&names, |name| replace_all_tags(name, "C"));
        assert_eq!(plans[0].old, "[A] one");
        assert_eq!(plans[1].old, "[B] two");
    }

    #[test]
    fn select_by_tag_uses_category_members() {
        let snap = snapshot(&["[UI] Dark", "[UI] Light", "Classic"]);
        let names = select_names(&snap, &Selection::Tag("UI".into()));
        assert_eq!(names, vec!["[UI] Dark", "[UI] Light"]);
    }

    #[test]
    fn select_by_unknown_tag_is_empty() {
        let snap = snapshot(&["Classic"]);
        assert!(select_names(&snap, &Selection::Tag("UI".into())).is_empty());
    }

    #[test]
    fn select_by_search_matches_substrings() {
        let snap = snapshot(&["[UI] Dark", "[UI] Darker", "Classic"]);
        let names = select_names(&snap, &Selection::Search("dark".into()));
        assert_eq!(names, vec!["[UI] Dark", "[UI] Darker"]);
    }

    #[test]
    fn random_pick_from_singleton_pool() {
        let snap = snapshot(&["[UI] Dark"]);
        assert_eq!(random_pick(&snap, None).expect("theme").name, "[UI] Dark");
        assert_eq!(
            random_pick(&snap, Some("UI")).expect("theme").name,
            "[UI] Dark"
        );
    }

    #[test]
    fn random_pick_from_unknown_category_is_none() {
        let snap = snapshot(&["[UI] Dark"]);
        assert!(random_pick(&snap, Some("Nope")).is_none());
    }

    #[test]
    fn random_pick_stays_inside_the_category() {
        let snap = snapshot(&["[UI] Dark", "[Night] Midnight", "Classic"]);
        for _ in 0..32 {
            let picked = random_pick(&snap, Some("UI")).expect("theme");
            assert_eq!(picked.name, "[UI] Dark");
        }
    }

    /// Client whose requests fail without touching the network; port 0 is
    /// never connectable, so only the pre-I/O refusal paths succeed.
    fn offline_client() -> HostClient {
        let mut config = crate::config::Config::default();
        config.base_url = "http://127.0.0.1:0".to_string();
        HostClient::new(&config).expect("client should build")
    }

    #[tokio::test]
    async fn rename_to_same_name_is_a_noop() {
        let client = offline_client();
        let themes = vec![json!({"name": "[UI] Dark"})];
        rename_theme(&client, &themes, "[UI] Dark", "[UI] Dark", false)
            .await
            .expect("identity rename issues no host calls");
    }

    #[tokio::test]
    async fn rename_of_unknown_theme_is_refused() {
        let client = offline_client();
        let themes = vec![json!({"name": "Classic"})];
        let err = rename_theme(&client, &themes, "Missing", "Elsewhere", false)
            .await
            .expect_err("must fail");
        assert!(matches!(err, OpError::UnknownTheme(name) if name == "Missing"));
    }

    #[tokio::test]
    async fn rename_onto_existing_name_is_refused() {
        let client = offline_client();
        let themes = vec![json!({"name": "[A] Dark"}), json!({"name": "[New] Dark"})];
        let err = rename_theme(&client, &themes, "[A] Dark", "[New] Dark", false)
            .await
            .expect_err("must fail");
        assert!(matches!(err, OpError::NameCollision(name) if name == "[New] Dark"));
    }

    // Two plans landing on one target: the second must be refused before it
    // reaches the host, or it would save over the first item's result.
    #[tokio::test]
    async fn batch_refuses_duplicate_targets_within_one_run() {
        let client = offline_client();
        let themes = vec![json!({"name": "[A] Dark"}), json!({"name": "[B] Dark"})];
        let plans = vec![
            RenamePlan {
                old: "[A] Dark".into(),
                new: "[New] Dark".into(),
            },
            RenamePlan {
                old: "[B] Dark".into(),
                new: "[New] Dark".into(),
            },
        ];
        let outcomes = run_rename_batch(&client, &themes, &plans, false).await;
        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].name, "[A] Dark");
        assert_eq!(outcomes[1].name, "[B] Dark");
        assert!(matches!(
            &outcomes[1].result,
            Err(OpError::NameCollision(name)) if name.as_str() == "[New] Dark"
        ));
    }

    #[tokio::test]
    async fn delete_batch_reports_one_outcome_per_item_in_order() {
        let client = offline_client();
        let names: Vec<String> = vec!["[A] one".into(), "[B] two".into()];
        let outcomes = run_delete_batch(&client, &names).await;
        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].name, "[A] one");
        assert_eq!(outcomes[1].name, "[B] two");
        assert!(outcomes.iter().all(|o| o.renamed_to.is_none()));
    }
}
