use crate::position::Position;

/// A maximal contiguous matched segment between the two streams: starting
/// at `original_offset`/`modified_offset` (1-based), `length` consecutive
/// tokens match identity-for-identity.
///
/// A terminator run (`length == 0`) ends the chain; its offsets equal
/// `N_original + 1` and `N_modified + 1`, letting the Diff Assembler treat
/// end-of-input the same way it treats every other gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LcsRun {
    pub original_offset: u32,
    pub modified_offset: u32,
    pub length: u32,
}

/// Compute the longest common subsequence of `original` and `modified` as
/// a chain of [`LcsRun`]s, using `total_matches` (one `[original, modified]`
/// count pair per identity) to prune tokens that cannot participate in any
/// match before the comparison even starts.
///
/// `prefix_lines` leading tokens are assumed already known identical (see
/// `DiffOptions::prefix_lines`) and are seeded as matched pairs ahead of
/// whatever the LCS search finds, so the run-coalescing below merges the
/// prefix into a single run with the matches immediately following it
/// rather than leaving a spurious boundary at the prefix's end.
///
/// Conforming to any correct LCS is sufficient — ties between equal-length
/// solutions are broken by preferring the earliest possible match in the
/// original stream, which this implementation gets by reconstructing the
/// subsequence forward from the start rather than backward from the end.
pub(crate) fn compute(
    original: &[Position],
    modified: &[Position],
    total_matches: &[[u32; 2]],
    prefix_lines: u32,
) -> Vec<LcsRun> {
    let n = original.len() as u32;
    let m = modified.len() as u32;
    let prefix = prefix_lines.min(n).min(m);

    let is_matchable = |identity: u32| {
        total_matches
            .get(identity as usize)
            .is_some_and(|counts| counts[0] > 0 && counts[1] > 0)
    };

    let filtered_a: Vec<(u32, u32)> = original[prefix as usize..]
        .iter()
        .filter(|p| is_matchable(p.identity.0))
        .map(|p| (p.offset, p.identity.0))
        .collect();
    let filtered_b: Vec<(u32, u32)> = modified[prefix as usize..]
        .iter()
        .filter(|p| is_matchable(p.identity.0))
        .map(|p| (p.offset, p.identity.0))
        .collect();

    tracing::debug!(
        a = filtered_a.len(),
        b = filtered_b.len(),
        "pruned to matchable-only streams for lcs"
    );

    // Feed the prefix in as leading matched pairs rather than a standalone
    // run, so the coalescing loop below merges it with whatever matches
    // immediately follow it instead of leaving a spurious run boundary.
    let mut matched_pairs: Vec<(u32, u32)> = (1..=prefix).map(|i| (i, i)).collect();
    matched_pairs.extend(longest_common_subsequence(&filtered_a, &filtered_b));

    let mut runs = Vec::new();
    let mut iter = matched_pairs.into_iter().peekable();
    while let Some((mut original_offset, mut modified_offset)) = iter.next() {
        let run_original_start = original_offset;
        let run_modified_start = modified_offset;
        let mut length = 1u32;

        while let Some(&(next_original, next_modified)) = iter.peek() {
            if next_original == original_offset + 1 && next_modified == modified_offset + 1 {
                original_offset = next_original;
                modified_offset = next_modified;
                length += 1;
                iter.next();
            } else {
                break;
            }
        }

        runs.push(LcsRun {
            original_offset: run_original_start,
            modified_offset: run_modified_start,
            length,
        });
    }

    runs.push(LcsRun {
        original_offset: n + 1,
        modified_offset: m + 1,
        length: 0,
    });
    runs
}

/// Classic `O(n*m)` LCS via a suffix dynamic program, reconstructed
/// *forward* from `(0, 0)` so that whenever a match is available and
/// optimal, it is taken immediately — this is what makes "earlier matches
/// in the original stream win" hold for inputs with more than one
/// longest common subsequence of equal length.
fn longest_common_subsequence(a: &[(u32, u32)], b: &[(u32, u32)]) -> Vec<(u32, u32)> {
    let n = a.len();
    let m = b.len();

    let mut dp = vec![vec![0u32; m + 1]; n + 1];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            dp[i][j] = if a[i].1 == b[j].1 {
                dp[i + 1][j + 1] + 1
            } else {
                dp[i + 1][j].max(dp[i][j + 1])
            };
        }
    }

    let mut result = Vec::with_capacity(dp[0][0] as usize);
    let (mut i, mut j) = (0usize, 0usize);
    while i < n && j < m {
        if a[i].1 == b[j].1 {
            result.push((a[i].0, b[j].0));
            i += 1;
            j += 1;
        } else if dp[i + 1][j] >= dp[i][j + 1] {
            i += 1;
        } else {
            j += 1;
        }
    }
    result
}
