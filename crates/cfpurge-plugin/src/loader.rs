use crate::manifest::PLUGIN_NAME;
use crate::options::PluginOptions;
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
struct SiteConfig {
    #[serde(default)]
    plugins: Vec<PluginEntry>,
}

/// A site's plugin list: either a bare name or `{ resolve, options }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PluginEntry {
    Name(String),
    Configured {
        resolve: String,
        #[serde(default)]
        options: Option<Value>,
    },
}

impl PluginEntry {
    fn resolve(&self) -> &str {
        match self {
            Self::Name(name) => name,
            Self::Configured { resolve, .. } => resolve,
        }
    }
}

/// Reads this plugin's options out of a site configuration file.
pub struct PluginLoader {
    path: PathBuf,
}

impl PluginLoader {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn load_options(&self) -> anyhow::Result<Option<PluginOptions>> {
        let data = fs::read_to_string(&self.path)?;
        let config: SiteConfig = serde_json::from_str(&data)?;

        let Some(entry) = config
            .plugins
            .into_iter()
            .find(|entry| entry.resolve() == PLUGIN_NAME)
        else {
            return Ok(None);
        };

        let options = match entry {
            PluginEntry::Configured {
                options: Some(options),
                ..
            } => serde_json::from_value(options)?,
            _ => PluginOptions::default(),
        };
        Ok(Some(options))
    }
}
