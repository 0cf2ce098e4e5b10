use crate::chunk::{ChunkKind, DiffChunk};
use crate::lcs::LcsRun;
use crate::options::DiffOptions;

/// Walk an LCS run chain and the gaps between runs into a sequence of
/// [`DiffChunk`]s.
///
/// `runs` must be ordered and end with a terminator (`length == 0`) whose
/// offsets are `N_original + 1` / `N_modified + 1` — [`crate::lcs::compute`]
/// always produces such a chain. Internally the cursors are 1-based,
/// matching the tokenizer convention that token 1 is the first; chunk
/// starts are converted to 0-based only at emission, in this one place.
pub(crate) fn assemble(runs: &[LcsRun], options: DiffOptions) -> Vec<DiffChunk> {
    let mut chunks = Vec::new();
    let mut original_start = 1u32;
    let mut modified_start = 1u32;

    for run in runs {
        if original_start < run.original_offset || modified_start < run.modified_offset {
            chunks.push(DiffChunk {
                kind: ChunkKind::Modified,
                original_start: original_start - 1,
                original_length: run.original_offset - original_start,
                modified_start: modified_start - 1,
                modified_length: run.modified_offset - modified_start,
                latest_start: 0,
                latest_length: 0,
            });
        }

        // Terminator: stop after emitting the trailing gap above, before
        // advancing cursors into sentinel territory.
        if run.length == 0 {
            break;
        }

        original_start = run.original_offset;
        modified_start = run.modified_offset;

        if options.want_common {
            chunks.push(DiffChunk {
                kind: ChunkKind::Common,
                original_start: original_start - 1,
                original_length: run.length,
                modified_start: modified_start - 1,
                modified_length: run.length,
                latest_start: 0,
                latest_length: 0,
            });
        }

        original_start += run.length;
        modified_start += run.length;
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(original_offset: u32, modified_offset: u32, length: u32) -> LcsRun {
        LcsRun {
            original_offset,
            modified_offset,
            length,
        }
    }

    #[test]
    fn identical_sources_want_common() {
        let runs = [run(1, 1, 3), run(4, 4, 0)];
        let chunks = assemble(&runs, DiffOptions::default());
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].kind, ChunkKind::Common);
        assert_eq!(
            (chunks[0].original_start, chunks[0].original_length),
            (0, 3)
        );
    }

    #[test]
    fn identical_sources_without_common_is_empty() {
        let runs = [run(1, 1, 3), run(4, 4, 0)];
        let chunks = assemble(
            &runs,
            DiffOptions {
                want_common: false,
                prefix_lines: 0,
            },
        );
        assert!(chunks.is_empty());
    }

    #[test]
    fn pure_insertion_anchors_before_the_gap() {
        // Everything from modified[3..4] is new; original has nothing there.
        let runs = [run(1, 1, 3), run(4, 5, 0)];
        let chunks = assemble(&runs, DiffOptions::default());
        let modified_chunk = chunks
            .iter()
            .find(|c| c.kind == ChunkKind::Modified)
            .unwrap();
        assert_eq!(modified_chunk.original_start, 3);
        assert_eq!(modified_chunk.original_length, 0);
        assert_eq!(modified_chunk.modified_start, 3);
        assert_eq!(modified_chunk.modified_length, 1);
    }
}
