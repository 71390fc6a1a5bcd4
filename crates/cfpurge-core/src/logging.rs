use tracing_subscriber::{fmt, EnvFilter};

/// Workspace crates log at `info`; everything else (reqwest, hyper) only warns.
pub const DEFAULT_FILTER: &str = "warn,cfpurge_core=info,cfpurge_plugin=info,cfpurge_host=info";

pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}
