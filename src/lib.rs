//! themedeck — a tag-indexed theme catalog for SillyTavern-style chat hosts.
//!
//! Theme names embed bracket-delimited tags (`"[UI] Dark"`); themedeck
//! parses them into a categorized catalog, keeps a client-side favorites
//! set, and applies tag/rename/delete mutations back through the host's
//! REST settings API.
//!
//! # Quick start
//!
//! ```no_run
//! use std::collections::BTreeSet;
//! use themedeck::api::HostClient;
//! use themedeck::catalog::build_index;
//! use themedeck::config::load_config;
//!
//! # async fn example() {
//! let config = load_config(None).unwrap();
//! let client = HostClient::new(&config).unwrap();
//! let names = client.theme_names().await.unwrap();
//! let snapshot = build_index(&names, &BTreeSet::new());
//! for category in &snapshot.categories {
//!     println!("{} ({})", category.label, category.members.len());
//! }
//! # }
//! ```

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod favorites;
pub mod ops;
pub mod render;
