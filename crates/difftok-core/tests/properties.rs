//! Property-style coverage over small, exhaustively-enumerable token
//! streams, checking the universal properties from the engine's design:
//! coverage, common-set equality, identity, prefix-optimization
//! equivalence, and optimality.

use difftok_core::{ChunkKind, DataSource, DiffChunk, DiffOptions, TokenSource};
use itertools::iproduct;

struct LineSource {
    lines: [Vec<char>; 2],
    cursor: [usize; 2],
}

impl LineSource {
    fn new(original: &[char], modified: &[char]) -> Self {
        Self {
            lines: [original.to_vec(), modified.to_vec()],
            cursor: [0, 0],
        }
    }
}

impl TokenSource for LineSource {
    type Token = char;
    type Error = std::convert::Infallible;

    fn open(&mut self, _sources: [DataSource; 2]) -> Result<u32, Self::Error> {
        Ok(0)
    }

    fn next_token(&mut self, source: DataSource) -> Result<Option<Self::Token>, Self::Error> {
        let idx = match source {
            DataSource::Original => 0,
            DataSource::Modified => 1,
        };
        let cursor = &mut self.cursor[idx];
        let token = self.lines[idx].get(*cursor).copied();
        if token.is_some() {
            *cursor += 1;
        }
        Ok(token)
    }

    fn token_eq(&self, a: &Self::Token, b: &Self::Token) -> bool {
        a == b
    }

    fn token_hash(&self, token: &Self::Token) -> u64 {
        *token as u64
    }
}

fn run(original: &[char], modified: &[char], options: DiffOptions) -> Vec<DiffChunk> {
    let mut source = LineSource::new(original, modified);
    difftok_core::diff(&mut source, options).unwrap()
}

/// Every 2-or-3 character string over a 2-letter alphabet, exhaustively.
fn small_strings() -> Vec<Vec<char>> {
    let alphabet = ['a', 'b'];
    let mut out = vec![vec![]];
    for len in 1..=4 {
        for bits in 0u32..(1 << len) {
            let s: Vec<char> = (0..len)
                .map(|i| alphabet[((bits >> i) & 1) as usize])
                .collect();
            out.push(s);
        }
    }
    out
}

fn longest_common_subsequence_len(a: &[char], b: &[char]) -> usize {
    let n = a.len();
    let m = b.len();
    let mut dp = vec![vec![0usize; m + 1]; n + 1];
    for i in 1..=n {
        for j in 1..=m {
            dp[i][j] = if a[i - 1] == b[j - 1] {
                dp[i - 1][j - 1] + 1
            } else {
                dp[i - 1][j].max(dp[i][j - 1])
            };
        }
    }
    dp[n][m]
}

#[test]
fn coverage_property() {
    for (original, modified) in iproduct!(small_strings(), small_strings()) {
        let chunks = run(&original, &modified, DiffOptions::default());
        let total_original: u32 = chunks.iter().map(|c| c.original_length).sum();
        let total_modified: u32 = chunks.iter().map(|c| c.modified_length).sum();
        assert_eq!(total_original, original.len() as u32);
        assert_eq!(total_modified, modified.len() as u32);
    }
}

#[test]
fn common_set_equality_property() {
    for (original, modified) in iproduct!(small_strings(), small_strings()) {
        let chunks = run(&original, &modified, DiffOptions::default());
        for chunk in &chunks {
            if chunk.kind == ChunkKind::Common {
                assert_eq!(chunk.original_length, chunk.modified_length);
                let o = &original[chunk.original_start as usize
                    ..(chunk.original_start + chunk.original_length) as usize];
                let m = &modified[chunk.modified_start as usize
                    ..(chunk.modified_start + chunk.modified_length) as usize];
                assert_eq!(o, m);
            }
        }
    }
}

#[test]
fn identity_property() {
    for source in small_strings() {
        let with_common = run(&source, &source, DiffOptions::default());
        if source.is_empty() {
            assert!(with_common.is_empty());
        } else {
            assert_eq!(with_common.len(), 1);
            assert_eq!(with_common[0].kind, ChunkKind::Common);
            assert_eq!(with_common[0].original_length, source.len() as u32);
        }

        let without_common = run(
            &source,
            &source,
            DiffOptions {
                want_common: false,
                prefix_lines: 0,
            },
        );
        assert!(without_common.is_empty());
    }
}

#[test]
fn prefix_optimization_equivalence_property() {
    for (original, modified) in iproduct!(small_strings(), small_strings()) {
        let shared_prefix = original
            .iter()
            .zip(modified.iter())
            .take_while(|(a, b)| a == b)
            .count() as u32;

        let baseline = run(&original, &modified, DiffOptions::default());
        for k in 0..=shared_prefix {
            let with_prefix = run(
                &original,
                &modified,
                DiffOptions {
                    want_common: true,
                    prefix_lines: k,
                },
            );
            assert_eq!(
                with_prefix, baseline,
                "prefix_lines={k} should not change the chunk chain for original={original:?} modified={modified:?}"
            );
        }
    }
}

#[test]
fn optimality_property() {
    for (original, modified) in iproduct!(small_strings(), small_strings()) {
        let chunks = run(&original, &modified, DiffOptions::default());
        let modified_total: u32 = chunks
            .iter()
            .filter(|c| c.kind == ChunkKind::Modified)
            .map(|c| c.original_length + c.modified_length)
            .sum();
        let lcs_len = longest_common_subsequence_len(&original, &modified) as u32;
        assert_eq!(
            modified_total,
            original.len() as u32 + modified.len() as u32 - 2 * lcs_len
        );
    }
}
