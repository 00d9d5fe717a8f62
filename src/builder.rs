use crate::align;
use crate::interval::IntervalPair;
use crate::transform::Transformation;

/// Turn a segmentation of `(a, b)` into a [`Transformation::Seq`] whose
/// `apply(a) == b`.
///
/// Walks the segmentation left to right, threading a `pre` left-context
/// forward: a common segment becomes the left context for the next
/// edit (no operation is emitted for it), and a differing segment
/// emits an [`Transformation::Edit`] and resets the context. A trailing
/// common segment with no following edit is closed out with a
/// no-op-on-input `Edit(pre, "", "")` so `apply` still consumes it.
pub fn build_transformation(a: &[char], b: &[char], segments: &[IntervalPair]) -> Transformation {
    let mut steps = Vec::new();
    let mut pre = String::new();

    for seg in segments {
        let sub_a: String = a[seg.interval_a().start()..seg.interval_a().end()].iter().collect();
        let sub_b: String = b[seg.interval_b().start()..seg.interval_b().end()].iter().collect();
        if seg.common() {
            pre = sub_a;
        } else {
            steps.push(Transformation::edit(std::mem::take(&mut pre), sub_a, sub_b));
        }
    }

    if !pre.is_empty() {
        steps.push(Transformation::edit(pre, "", ""));
    }

    Transformation::Seq(steps)
}

/// Align `a` against `b` and derive the transformation that rewrites
/// `a` into `b`. Convenience wrapper combining [`align::segment`] and
/// [`build_transformation`].
pub fn analyze_word_pair(a: &str, b: &str) -> Transformation {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let segments = align::segment(a, b);
    build_transformation(&a_chars, &b_chars, &segments)
}
