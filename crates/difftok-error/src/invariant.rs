/// A violated internal invariant — a programming error, either in the
/// engine itself or in how a `TokenSource` implementation upholds its
/// contract (non-monotonic offsets, a hash/equality disagreement, etc.).
#[derive(Debug, Clone, thiserror::Error)]
pub enum InvariantError {
    #[error("position offset did not increase: previous {prev}, next {next}")]
    NonMonotonicOffset { prev: u32, next: u32 },

    #[error("token_hash and token_eq disagree for two tokens hashing to {hash}")]
    HashEqualityMismatch { hash: u64 },

    #[error("position identity unknown after discard_all_tokens was called")]
    IdentityAfterDiscard,

    #[error("LCS run references an offset past the end of its stream: {offset} > {len}")]
    OffsetOutOfRange { offset: u32, len: u32 },
}
