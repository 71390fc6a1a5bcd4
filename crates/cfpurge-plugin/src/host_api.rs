/// Severity-levelled sinks supplied by the host build.
pub trait Reporter: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    /// Fatal: the host aborts the build. Hooks return `Err` right after calling this.
    fn panic(&self, message: &str);
}

pub trait HostApi: Send + Sync {
    fn reporter(&self) -> &dyn Reporter;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn warn(&self, message: &str) {
        tracing::warn!("{message}");
    }

    fn panic(&self, message: &str) {
        tracing::error!(fatal = true, "{message}");
    }
}

/// Host used when the hooks are driven outside a site generator.
#[derive(Debug, Default)]
pub struct StandaloneHost {
    reporter: TracingReporter,
}

impl StandaloneHost {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HostApi for StandaloneHost {
    fn reporter(&self) -> &dyn Reporter {
        &self.reporter
    }
}
