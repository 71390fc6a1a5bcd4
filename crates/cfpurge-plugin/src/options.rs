use crate::condition::Condition;
use cfpurge_core::PurgeOptions;
use serde::Deserialize;

/// Everything the host hands the plugin for one build.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PluginOptions {
    #[serde(default)]
    pub condition: Condition,
    #[serde(flatten)]
    pub purge: PurgeOptions,
}

impl PluginOptions {
    pub fn new(condition: Condition, purge: PurgeOptions) -> Self {
        Self { condition, purge }
    }
}
