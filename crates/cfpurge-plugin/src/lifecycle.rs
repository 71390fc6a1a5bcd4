use crate::host_api::HostApi;
use crate::manifest::prefixed;
use crate::options::PluginOptions;
use cfpurge_core::{format_error_chain, CoreError, CoreResult, PurgeClient};
use tracing::{info_span, Instrument};

/// State carried from the pre-build hook to the post-build hook of one build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildContext {
    pub condition_fulfilled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurgeOutcome {
    Skipped,
    Purged,
    /// Reported as a warning; the build still succeeds.
    Failed { status: Option<u16> },
}

pub struct CachePurgePlugin {
    client: PurgeClient,
}

impl CachePurgePlugin {
    pub fn new() -> CoreResult<Self> {
        Ok(Self::with_client(PurgeClient::new()?))
    }

    pub fn with_client(client: PurgeClient) -> Self {
        Self { client }
    }

    /// Evaluates the condition once and checks required options.
    ///
    /// Missing options are fatal even when the condition is false, so a
    /// misconfigured site is caught before the purge would ever be attempted.
    pub async fn on_pre_init(
        &self,
        api: &dyn HostApi,
        options: &PluginOptions,
    ) -> CoreResult<BuildContext> {
        let _span = info_span!("stage", stage = "pre_init").entered();
        let reporter = api.reporter();

        let condition_fulfilled = options.condition.evaluate(api, options);
        tracing::debug!(condition_fulfilled, "condition evaluated");

        let missing = options.purge.missing_required();
        if !missing.is_empty() {
            let err = CoreError::MissingOptions(missing.into_iter().map(str::to_string).collect());
            reporter.panic(&prefixed(&err));
            return Err(err);
        }

        if !condition_fulfilled {
            reporter.info(&prefixed("Will skip due to failed condition"));
        }

        Ok(BuildContext {
            condition_fulfilled,
        })
    }

    /// Purges the zone cache unless the pre-build hook decided to skip.
    pub async fn on_post_build(
        &self,
        api: &dyn HostApi,
        options: &PluginOptions,
        ctx: &BuildContext,
    ) -> CoreResult<PurgeOutcome> {
        if !ctx.condition_fulfilled {
            return Ok(PurgeOutcome::Skipped);
        }

        self.purge(api, options)
            .instrument(info_span!("stage", stage = "post_build"))
            .await
    }

    async fn purge(&self, api: &dyn HostApi, options: &PluginOptions) -> CoreResult<PurgeOutcome> {
        let reporter = api.reporter();

        let request = match self.client.build_request(&options.purge) {
            Ok(request) => request,
            Err(err) => {
                reporter.panic(&prefixed(&err));
                return Err(err);
            }
        };

        match self.client.send(&request).await {
            Ok(response) if response.is_success() => {
                reporter.info(&prefixed("Cleared CloudFlare cache successfully"));
                Ok(PurgeOutcome::Purged)
            }
            Ok(response) => {
                reporter.warn(&prefixed(format!(
                    "response from CloudFlare indicates cache clear failure: {}",
                    response.failure_report()
                )));
                Ok(PurgeOutcome::Failed {
                    status: Some(response.status),
                })
            }
            Err(err) => {
                reporter.warn(&prefixed(format!(
                    "CloudFlare cache clear request failed: {}",
                    format_error_chain(&err)
                )));
                Ok(PurgeOutcome::Failed {
                    status: err.status(),
                })
            }
        }
    }
}
