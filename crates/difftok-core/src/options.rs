/// Caller-recognized configuration for [`crate::diff`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffOptions {
    /// Emit `common` chunks for matched runs. When `false`, only
    /// `modified` chunks are emitted — matched runs still advance the
    /// cursors, they simply produce no output record.
    pub want_common: bool,
    /// Tokens at the start of both streams already known identical;
    /// elided from LCS work. Combined with whatever prefix the adapter
    /// itself reports from `TokenSource::open` by taking the larger of
    /// the two (either is a valid hint on its own). Clamped to the
    /// shorter stream's length at compute time if over-reported.
    pub prefix_lines: u32,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            want_common: true,
            prefix_lines: 0,
        }
    }
}
