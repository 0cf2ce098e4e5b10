use crate::{Error, Severity};

/// A policy for classifying and emitting errors at an application boundary.
///
/// Library code (`difftok-core`) never implements this itself: it returns
/// [`crate::Result`] and lets the caller choose a policy, so the engine
/// stays free of logging side effects on its hot path.
pub trait ErrorPolicy {
    /// Classify the error's severity. Defaults to [`Error::severity`]; a
    /// policy may override this to reclassify, e.g. downgrading a specific
    /// adapter error to a warning for a particular application.
    fn classify(&self, error: &Error) -> Severity {
        error.severity()
    }

    /// Emit the error according to the policy (log, send to UI, etc.).
    fn emit(&self, error: &Error);
}

/// A no-op policy. Useful in tests, or as the default for a caller that
/// doesn't want emission at all — only the `Result` matters to them.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPolicy;

impl ErrorPolicy for NoopPolicy {
    fn emit(&self, _error: &Error) {}
}

/// A policy that emits via `tracing`, at a level derived from severity.
#[cfg(feature = "tracing")]
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingPolicy;

#[cfg(feature = "tracing")]
impl ErrorPolicy for TracingPolicy {
    fn emit(&self, error: &Error) {
        match self.classify(error) {
            Severity::Warning => tracing::warn!(%error),
            Severity::Error => tracing::error!(%error),
            Severity::Fatal => tracing::error!(fatal = true, %error),
        }
    }
}
