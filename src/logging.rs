//! Logger injected into the version checker
//!
//! The checker only ever emits two kinds of log lines: a warning when the tag
//! fetch fails and an info line when a newer release is found. Callers that
//! don't care pass [`NoopLogger`]; the binary installs [`TracingLogger`].

/// Best-effort logging sink. Implementations must not panic.
pub trait UpdateLogger: Send + Sync {
    fn warn(&self, message: &str);
    fn info(&self, message: &str);
}

/// Logger that discards everything. The default when no logger is injected.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopLogger;

impl UpdateLogger for NoopLogger {
    fn warn(&self, _message: &str) {}
    fn info(&self, _message: &str) {}
}

/// Logger that forwards to the `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl UpdateLogger for TracingLogger {
    fn warn(&self, message: &str) {
        tracing::warn!("{message}");
    }

    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }
}
