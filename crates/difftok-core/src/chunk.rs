/// A single record in the emitted diff: either a `common` run (identical
/// in both sources) or a `modified` run (replaced, inserted, or deleted).
///
/// `latest_start`/`latest_length` are reserved for a future three-way
/// variant of this record shape; the two-way engine always zeroes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiffChunk {
    pub kind: ChunkKind,
    pub original_start: u32,
    pub original_length: u32,
    pub modified_start: u32,
    pub modified_length: u32,
    pub latest_start: u32,
    pub latest_length: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChunkKind {
    Common,
    Modified,
}
