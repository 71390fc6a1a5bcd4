use anyhow::Context;
use cfpurge_core::logging::init_logging;
use cfpurge_plugin::{CachePurgePlugin, PluginLoader, PluginManifest, StandaloneHost};
use std::path::PathBuf;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();
    match run().await {
        Ok(code) => code,
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "host run failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<ExitCode> {
    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .context("usage: cfpurge-host <site-config.json>")?;

    let manifest = PluginManifest::current();
    tracing::info!(
        plugin = %manifest.name,
        version = %manifest.version,
        config = %path.display(),
        "loading site configuration"
    );

    let Some(options) = PluginLoader::new(path).load_options()? else {
        tracing::info!("plugin not listed in site configuration, nothing to do");
        return Ok(ExitCode::SUCCESS);
    };

    let host = StandaloneHost::new();
    let plugin = CachePurgePlugin::new()?;

    // A fatal report has already been logged by the hook.
    let Ok(ctx) = plugin.on_pre_init(&host, &options).await else {
        return Ok(ExitCode::FAILURE);
    };

    match plugin.on_post_build(&host, &options, &ctx).await {
        Ok(outcome) => {
            tracing::debug!(?outcome, "post-build finished");
            Ok(ExitCode::SUCCESS)
        }
        Err(_) => Ok(ExitCode::FAILURE),
    }
}
