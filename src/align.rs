use crate::interval::{Interval, IntervalPair};
use crate::matrix::EditMatrix;

/// A word pair's edit matrix together with its derived segmentation.
///
/// Callers that only need the segmentation (e.g. the transformation
/// builder) should prefer [`segment`], which drops the matrix once the
/// backtrace is done instead of retaining it.
#[derive(Debug, Clone)]
pub struct Alignment {
    /// The full edit-distance matrix for the pair.
    pub matrix: EditMatrix,
    /// The canonical left-to-right segmentation derived from it.
    pub segments: Vec<IntervalPair>,
}

impl Alignment {
    /// Compute the matrix and segmentation for `a` (rewrite source) and
    /// `b` (rewrite target), retaining both.
    pub fn compute(a: &str, b: &str) -> Self {
        let a_chars: Vec<char> = a.chars().collect();
        let b_chars: Vec<char> = b.chars().collect();
        let matrix = EditMatrix::compute(&a_chars, &b_chars);
        let segments = backtrace(&a_chars, &b_chars, &matrix);
        Alignment { matrix, segments }
    }
}

/// Derive the canonical segmentation of `a` into `b`, without retaining
/// the edit matrix used to compute it.
pub fn segment(a: &str, b: &str) -> Vec<IntervalPair> {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    if a_chars.is_empty() && b_chars.is_empty() {
        return vec![IntervalPair::new(Interval::new(0, 0), Interval::new(0, 0), false)];
    }
    if a_chars.is_empty() || b_chars.is_empty() {
        log::trace!("segmenting empty-word pair ({a:?}, {b:?})");
        return vec![IntervalPair::new(
            Interval::new(0, a_chars.len()),
            Interval::new(0, b_chars.len()),
            false,
        )];
    }

    let matrix = EditMatrix::compute(&a_chars, &b_chars);
    backtrace(&a_chars, &b_chars, &matrix)
}

/// First index of the minimum among `[delete, substitute, insert]`
/// predecessor costs — the fixed `delete < substitute < insert`
/// tie-break order the backtrace contract requires.
fn cheapest_step(delete: usize, substitute: usize, insert: usize) -> usize {
    let mut best = delete;
    let mut step = 0;
    if substitute < best {
        best = substitute;
        step = 1;
    }
    if insert < best {
        step = 2;
    }
    step
}

/// Backtrace from `(|a|, |b|)` toward `(0, 0)`, tiling both words into
/// an alternating-common segmentation. Assumes `a` and `b` are both
/// non-empty; empty-word cases are special-cased by [`segment`].
fn backtrace(a: &[char], b: &[char], m: &EditMatrix) -> Vec<IntervalPair> {
    let mut intervals = Vec::new();

    let mut i = a.len();
    let mut j = b.len();
    let mut end_a = i;
    let mut end_b = j;
    let mut common = a[i - 1] == b[j - 1];

    while i > 0 && j > 0 {
        let old_i = i;
        let old_j = j;
        let current_common = a[i - 1] == b[j - 1];

        if current_common {
            i -= 1;
            j -= 1;
        } else {
            let delete = m.get(i - 1, j);
            let substitute = m.get(i - 1, j - 1);
            let insert = m.get(i, j - 1);
            match cheapest_step(delete, substitute, insert) {
                0 => i -= 1,
                1 => {
                    i -= 1;
                    j -= 1;
                }
                _ => j -= 1,
            }
        }

        if current_common != common {
            intervals.push(IntervalPair::new(
                Interval::new(old_i, end_a),
                Interval::new(old_j, end_b),
                common,
            ));
            end_a = old_i;
            end_b = old_j;
            common = current_common;
            log::trace!("segment boundary at ({old_i}, {old_j}), common -> {common}");
        }
    }

    intervals.push(IntervalPair::new(
        Interval::new(i, end_a),
        Interval::new(j, end_b),
        common,
    ));

    if (i > 0 || j > 0) && common {
        intervals.push(IntervalPair::new(
            Interval::new(0, i),
            Interval::new(0, j),
            !common,
        ));
    }

    intervals.reverse();
    intervals
}
