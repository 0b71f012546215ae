//! HTTP layer for the host's settings API.

mod client;

pub use client::HostClient;
pub(crate) use client::theme_object;
