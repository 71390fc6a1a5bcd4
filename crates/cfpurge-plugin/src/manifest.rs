use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub const PLUGIN_NAME: &str = env!("CARGO_PKG_NAME");

/// Prefixes a message with the plugin name so operators can trace it.
pub fn prefixed(message: impl Display) -> String {
    format!("{PLUGIN_NAME}: {message}")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginManifest {
    pub name: String,
    pub version: String,
    pub description: Option<String>,
}

impl PluginManifest {
    pub fn current() -> Self {
        Self {
            name: PLUGIN_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description: Some("Purges the CloudFlare zone cache after a site build".to_string()),
        }
    }
}
