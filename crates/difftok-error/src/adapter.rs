/// A failure reported by a `TokenSource` implementation (tokenizer, I/O, or
/// any other external collaborator the engine treats as opaque).
///
/// The engine never interprets these — it reports the adapter's message
/// verbatim, per the diff engine's error handling contract.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AdapterError {
    #[error("failed to open data sources: {message}")]
    Open { message: String },

    #[error("failed to read next token from source: {message}")]
    NextToken { message: String },
}
