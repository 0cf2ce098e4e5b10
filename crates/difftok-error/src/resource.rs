/// Arena allocation failure. Fatal to the current `diff` invocation.
///
/// Rust's global allocator aborts on OOM rather than returning an error, so
/// in practice this variant is unreachable on stock allocators; it exists
/// so a caller matching on [`crate::Error`] does not need an `unreachable!`
/// arm, and so a future fallible-arena backend has somewhere to report to.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ResourceError {
    #[error("failed to allocate {what} arena: {message}")]
    ArenaAllocation { what: &'static str, message: String },
}
