//! Coarse-grained classification for programmatic handling of errors.
//!
//! Typical mappings:
//! - `Warning`: non-fatal, forward progress remains possible (unused by the
//!   engine today, but kept so a caller's match is exhaustive against future
//!   variants without a source change).
//! - `Error`: failures that should be handled or bubbled up.
//! - `Fatal`: irrecoverable for the current `diff` invocation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
    Fatal,
}
