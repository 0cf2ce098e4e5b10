use std::cell::Cell;
use std::collections::HashMap;

use fxhash::FxBuildHasher;
use typed_arena::Arena;

use crate::adapter::TokenSource;

/// Canonical identity of a distinct token, shared by every token that
/// compares equal under the adapter's equality across both sources. Once
/// assigned, comparing two identities for equality is a plain integer
/// compare, regardless of how expensive the adapter's own equality check
/// is — this is the whole point of interning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Identity(pub(crate) u32);

pub(crate) struct TreeNode<T> {
    token: T,
    total_matches: [Cell<u32>; 2],
}

/// Scratch structure mapping each distinct token to one [`Identity`] node.
///
/// Backed by a `typed_arena::Arena` scoped to the ingestion phase: once
/// both Position Streams are built, [`TokenTree::total_matches`] snapshots
/// the per-identity match counts the LCS engine needs, and the tree
/// (arena included) can be dropped. Positions only ever carry the small
/// `Copy` [`Identity`] key, never a reference into the tree, so nothing
/// outlives the arena improperly.
pub(crate) struct TokenTree<'a, T> {
    arena: &'a Arena<TreeNode<T>>,
    nodes: Vec<&'a TreeNode<T>>,
    buckets: HashMap<u64, Vec<Identity>, FxBuildHasher>,
}

impl<'a, T> TokenTree<'a, T> {
    pub(crate) fn new(arena: &'a Arena<TreeNode<T>>) -> Self {
        Self {
            arena,
            nodes: Vec::new(),
            buckets: HashMap::default(),
        }
    }

    /// Intern `token` from `source` (0 = original, 1 = modified), returning
    /// its identity. Equal tokens across either source collapse onto the
    /// same node; distinct tokens that happen to hash-collide chain
    /// without misidentification because `adapter.token_eq` is the
    /// authoritative equality check, never the hash alone.
    pub(crate) fn intern<S>(&mut self, source: usize, token: T, adapter: &S) -> Identity
    where
        S: TokenSource<Token = T>,
    {
        let hash = adapter.token_hash(&token);

        if let Some(candidates) = self.buckets.get(&hash) {
            for &id in candidates {
                let node = self.nodes[id.0 as usize];
                if adapter.token_eq(&node.token, &token) {
                    node.total_matches[source].set(node.total_matches[source].get() + 1);
                    return id;
                }
            }
        }

        let id = Identity(self.nodes.len() as u32);
        let node = self.arena.alloc(TreeNode {
            token,
            total_matches: [Cell::new(0), Cell::new(0)],
        });
        node.total_matches[source].set(1);
        self.nodes.push(node);
        self.buckets.entry(hash).or_default().push(id);
        tracing::trace!(identity = id.0, source, "interned new token");
        id
    }

    /// Snapshot the `[original_count, modified_count]` pair for every
    /// identity assigned so far, indexed by `Identity`. Call once, after
    /// both Position Streams are built and before the tree is dropped —
    /// the LCS engine prunes identities with a zero count on either side,
    /// since those can never participate in a match.
    pub(crate) fn total_matches(&self) -> Vec<[u32; 2]> {
        self.nodes
            .iter()
            .map(|node| [node.total_matches[0].get(), node.total_matches[1].get()])
            .collect()
    }
}
