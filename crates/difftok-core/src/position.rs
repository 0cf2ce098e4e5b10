use crate::adapter::{DataSource, TokenSource};
use crate::token_tree::{Identity, TokenTree};

/// One `(identity, offset)` record in a source's ordered token stream.
/// `offset` is the 1-based index of this token within its source —
/// positions within one stream are strictly increasing from 1 to N.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Position {
    pub(crate) identity: Identity,
    pub(crate) offset: u32,
}

/// Build the Position Stream for one source by interning every token it
/// yields, in order.
pub(crate) fn ingest<S: TokenSource>(
    adapter: &mut S,
    tree: &mut TokenTree<'_, S::Token>,
    source: DataSource,
) -> difftok_error::Result<Vec<Position>> {
    let mut positions = Vec::new();
    let mut offset: u32 = 0;

    while let Some(token) = adapter
        .next_token(source)
        .map_err(|e| difftok_error::AdapterError::NextToken {
            message: e.to_string(),
        })?
    {
        offset += 1;
        let identity = tree.intern(source.index(), token, adapter);
        positions.push(Position { identity, offset });
    }

    tracing::debug!(source = ?source, count = positions.len(), "ingested position stream");
    Ok(positions)
}
