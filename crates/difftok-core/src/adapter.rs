/// Identifies which of the two input sequences a call refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Original,
    Modified,
}

impl DataSource {
    pub(crate) fn index(self) -> usize {
        match self {
            DataSource::Original => 0,
            DataSource::Modified => 1,
        }
    }
}

/// The contract a caller must satisfy to drive [`crate::diff`].
///
/// The engine never inspects token content itself — only identity,
/// equality, and hash, all delegated to this trait. Tokenizing text vs.
/// binary data, reading from disk, and every other concern that produces a
/// `Self::Token` belongs to the implementor, not to `difftok-core`.
pub trait TokenSource {
    /// The opaque unit of comparison the engine diffs (typically a line).
    type Token;
    /// The error type surfaced verbatim by [`TokenSource::open`] and
    /// [`TokenSource::next_token`].
    type Error: std::error::Error + Send + Sync + 'static;

    /// Ready both sources for token emission. May return a count of
    /// leading tokens already known identical across both inputs — see
    /// [`crate::DiffOptions::prefix_lines`]. Returning `0` is always
    /// correct; a nonzero answer is a zero-cost optimization only, never
    /// required for correctness.
    fn open(&mut self, sources: [DataSource; 2]) -> Result<u32, Self::Error>;

    /// Produce the next token from `source`, or `None` at end of stream.
    fn next_token(&mut self, source: DataSource) -> Result<Option<Self::Token>, Self::Error>;

    /// Equality over tokens. Must agree with [`TokenSource::token_hash`]:
    /// `token_eq(a, b) == true` implies `token_hash(a) == token_hash(b)`.
    /// Case/whitespace sensitivity and every other notion of "equal" is
    /// the adapter's call, not the engine's.
    fn token_eq(&self, a: &Self::Token, b: &Self::Token) -> bool;

    /// Hash over tokens, consistent with [`TokenSource::token_eq`].
    fn token_hash(&self, token: &Self::Token) -> u64;

    /// Invited once both Position Streams are built, so the adapter can
    /// free its token storage. The engine never references a token after
    /// this call returns. Default: no-op, modeling the optional adapter
    /// capability from the engine's contract.
    fn discard_all_tokens(&mut self) {}
}
