#![doc = r#"
difftok-error — workspace-wide error type, severity, and policy-driven emission.

Overview
- A single [`Error`] enum shared by `difftok-core` (and any future crate in
  this workspace).
- [`Severity`] classification for coarse, programmatic handling.
- [`AdapterError`], [`ResourceError`], [`InvariantError`] for the three
  error classes named in the diff engine's error taxonomy.
- [`Result`] alias for ergonomic propagation.
- Policy-driven emission via [`ErrorPolicy`] so `difftok-core` stays
  side-effect free: it classifies and returns, the caller decides whether
  and how to log.

Quickstart
```rust
use difftok_error::{Error, InvariantError, Result};

fn check_monotonic(prev: u32, next: u32) -> Result<()> {
    if next <= prev {
        return Err(Error::from(InvariantError::NonMonotonicOffset { prev, next }));
    }
    Ok(())
}
```
"#]

pub mod adapter;
pub mod invariant;
pub mod policy;
pub mod resource;
pub mod severity;

pub use adapter::AdapterError;
pub use invariant::InvariantError;
#[cfg(feature = "tracing")]
pub use policy::TracingPolicy;
pub use policy::{ErrorPolicy, NoopPolicy};
pub use resource::ResourceError;
pub use severity::Severity;

/// Workspace-wide result alias. Use this throughout library code and
/// propagate failures with `?`.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Top-level error type for the diff engine.
///
/// Variants group failures into the three classes named by the engine's
/// error taxonomy; see [`Error::severity`] for programmatic classification.
/// Library code should return [`Result`] and let the caller decide how to
/// emit via an [`ErrorPolicy`] — `difftok-core` never logs on its own.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Adapter(#[from] AdapterError),
    #[error(transparent)]
    Resource(#[from] ResourceError),
    #[error(transparent)]
    Invariant(#[from] InvariantError),
}

impl Error {
    /// Coarse severity classification for programmatic handling.
    ///
    /// Typical usage: map severity to a logging level, or decide whether a
    /// caller should retry vs. abort.
    pub fn severity(&self) -> Severity {
        match self {
            Error::Adapter(_) => Severity::Error,
            Error::Resource(_) => Severity::Fatal,
            Error::Invariant(_) => Severity::Fatal,
        }
    }

    /// Returns true if this is a [`Error::Adapter`] failure, i.e. one that
    /// originated outside the engine and was surfaced verbatim.
    pub fn is_adapter(&self) -> bool {
        matches!(self, Error::Adapter(_))
    }
}
