pub mod condition;
pub mod host_api;
pub mod lifecycle;
pub mod loader;
pub mod manifest;
pub mod options;

pub use condition::Condition;
pub use host_api::{HostApi, Reporter, StandaloneHost, TracingReporter};
pub use lifecycle::{BuildContext, CachePurgePlugin, PurgeOutcome};
pub use loader::PluginLoader;
pub use manifest::{prefixed, PluginManifest, PLUGIN_NAME};
pub use options::PluginOptions;
