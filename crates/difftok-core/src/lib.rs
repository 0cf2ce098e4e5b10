#![doc = r#"
difftok-core — a streaming, tokenized differencing engine.

Given two sources that each yield an ordered sequence of tokens (typically
lines, but the design is token-agnostic), this crate computes a compact
description of how the second sequence differs from the first: a series of
matched (`common`) and unmatched (`modified`) ranges, suitable for
downstream patch generation, three-way merge, or conflict rendering.

Callers implement [`TokenSource`] to describe how tokens are produced and
compared; the engine handles deduplication, the longest common subsequence
computation, and assembling the result into [`DiffChunk`]s.

Quickstart
```rust
use difftok_core::{diff, DataSource, DiffOptions, TokenSource};

struct Lines {
    original: std::vec::IntoIter<&'static str>,
    modified: std::vec::IntoIter<&'static str>,
}

impl TokenSource for Lines {
    type Token = &'static str;
    type Error = std::convert::Infallible;

    fn open(&mut self, _sources: [DataSource; 2]) -> Result<u32, Self::Error> {
        Ok(0)
    }

    fn next_token(&mut self, source: DataSource) -> Result<Option<Self::Token>, Self::Error> {
        Ok(match source {
            DataSource::Original => self.original.next(),
            DataSource::Modified => self.modified.next(),
        })
    }

    fn token_eq(&self, a: &Self::Token, b: &Self::Token) -> bool {
        a == b
    }

    fn token_hash(&self, token: &Self::Token) -> u64 {
        use std::hash::{Hash, Hasher};
        let mut hasher = fxhash::FxHasher::default();
        token.hash(&mut hasher);
        hasher.finish()
    }
}

let mut source = Lines {
    original: vec!["A", "B", "C"].into_iter(),
    modified: vec!["A", "X", "C"].into_iter(),
};
let chunks = diff(&mut source, DiffOptions::default()).unwrap();
assert_eq!(chunks.len(), 3);
```
"#]

pub mod adapter;
mod assemble;
pub mod chunk;
pub mod lcs;
pub mod options;
mod position;
mod token_tree;

pub use adapter::{DataSource, TokenSource};
pub use chunk::{ChunkKind, DiffChunk};
pub use lcs::LcsRun;
pub use options::DiffOptions;

use typed_arena::Arena;

/// Run the full pipeline: ingest both sources through a deduplicating
/// token tree, compute their longest common subsequence, and assemble the
/// result into a sequence of `common`/`modified` chunks.
///
/// The tree arena (and the tokens it references, once the adapter is
/// invited to discard them) is released before the LCS engine runs, to
/// bound peak memory — see the crate's design notes on arena scoping.
#[tracing::instrument(skip_all)]
pub fn diff<S: TokenSource>(
    adapter: &mut S,
    options: DiffOptions,
) -> difftok_error::Result<Vec<DiffChunk>> {
    let adapter_prefix_lines = adapter
        .open([DataSource::Original, DataSource::Modified])
        .map_err(|e| difftok_error::AdapterError::Open {
            message: e.to_string(),
        })?;
    // Both the caller and the adapter may know a leading run is already
    // identical; either is a valid hint to skip re-deriving it, so the
    // wider of the two wins.
    let prefix_lines = options.prefix_lines.max(adapter_prefix_lines);

    let (positions_original, positions_modified, total_matches) = {
        let arena = Arena::new();
        let mut tree = token_tree::TokenTree::new(&arena);

        let positions_original = position::ingest(adapter, &mut tree, DataSource::Original)?;
        let positions_modified = position::ingest(adapter, &mut tree, DataSource::Modified)?;

        adapter.discard_all_tokens();

        (positions_original, positions_modified, tree.total_matches())
        // `arena` and `tree` drop here — the scratch tree arena from
        // `spec.md` §5, released before LCS work begins.
    };

    let runs = lcs::compute(
        &positions_original,
        &positions_modified,
        &total_matches,
        prefix_lines,
    );
    Ok(assemble::assemble(&runs, options))
}

/// Low-level building block: assemble chunks directly from an
/// already-computed LCS run chain, without re-running ingestion.
///
/// Useful for a caller that caches or recomputes the LCS chain
/// independently (e.g. across repeated diffs of a changing "modified"
/// side against a fixed "original").
pub fn assemble_from_lcs(runs: &[LcsRun], options: DiffOptions) -> Vec<DiffChunk> {
    assemble::assemble(runs, options)
}
