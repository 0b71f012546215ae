//! Client for the host's theme endpoints.
//!
//! The host exposes three JSON-over-POST endpoints: `settings/get` returns
//! the current settings blob (including the theme list), `themes/save`
//! upserts one theme object by name, and `themes/delete` removes one by
//! name. There is no rename primitive; renames are realized by the ops
//! layer as save-new-then-delete-old.

use std::time::Duration;

use serde_json::{json, Value};

use crate::config::Config;
use crate::error::ApiError;

/// Client for a SillyTavern-style settings API.
pub struct HostClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HostClient {
    /// Build a client from resolved configuration.
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.trim().to_string(),
        })
    }

    /// Fetch the full theme objects from the host settings.
    ///
    /// The settings payload must carry a top-level `themes` array of objects
    /// each exposing at least a `name` string.
    pub async fn themes(&self) -> Result<Vec<Value>, ApiError> {
        let settings = self.post_json("api/settings/get", &json!({})).await?;
        let Some(themes) = settings.get("themes").and_then(Value::as_array) else {
            return Err(ApiError::Malformed(
                "settings payload has no `themes` array".to_string(),
            ));
        };
        Ok(themes.clone())
    }

    /// Fetch just the theme names, in host order.
    ///
    /// Entries without a `name` string are skipped, matching the catalog's
    /// tolerance for falsy names.
    pub async fn theme_names(&self) -> Result<Vec<String>, ApiError> {
        Ok(self
            .themes()
            .await?
            .iter()
            .filter_map(|theme| theme.get("name").and_then(Value::as_str))
            .map(str::to_string)
            .collect())
    }

    /// Upsert one theme object by its `name` field.
    pub async fn save_theme(&self, theme: &Value) -> Result<(), ApiError> {
        tracing::debug!(name = theme.get("name").and_then(|v| v.as_str()), "saving theme");
        self.post_json("api/themes/save", theme).await?;
        Ok(())
    }

    /// Delete one theme by name.
    pub async fn delete_theme(&self, name: &str) -> Result<(), ApiError> {
        tracing::debug!(name, "deleting theme");
        self.post_json("api/themes/delete", &json!({ "name": name }))
            .await?;
        Ok(())
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let url = format!("{}/{path}", self.base_url);
        let mut req = self.http.post(&url).json(body);
        if !self.api_key.is_empty() {
            req = req.header("Authorization", format!("Bearer {}", self.api_key));
        }

        let response = req.send().await?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status(status, body));
        }

        // Some mutation endpoints reply with an empty or non-JSON body;
        // treat that as an empty object rather than a failure.
        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(json!({}));
        }
        serde_json::from_str(&text)
            .or_else(|_| Ok(Value::String(text)))
    }
}

/// Find the full theme object for a name within a fetched theme list.
pub(crate) fn theme_object<'a>(themes: &'a [Value], name: &str) -> Option<&'a Value> {
    themes
        .iter()
        .find(|theme| theme.get("name").and_then(Value::as_str) == Some(name))
}
