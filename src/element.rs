use std::hash::{Hash, Hasher};

use crate::align;
use crate::builder;
use crate::interval::IntervalPair;
use crate::matrix::EditMatrix;
use crate::transform::Transformation;

/// Binds `(word_a, word_b)` to its derived alignment and
/// transformation, constructed once at creation time.
///
/// Equality is identity-like: the same `(word_a, word_b)` pair occurring
/// twice in a corpus produces two distinct elements, since the caller
/// (not this type) decides whether repeated pairs should collapse —
/// see the Open Question this resolves in `DESIGN.md`. Accordingly no
/// [`PartialEq`] is implemented; cluster membership is a `Vec`, not a
/// set, so no value equality is ever needed to place an element.
#[derive(Debug, Clone)]
pub struct TrainingElement {
    word_a: String,
    word_b: String,
    matrix: Option<EditMatrix>,
    segmentation: Vec<IntervalPair>,
    transformation: Transformation,
}

impl TrainingElement {
    /// Construct a training element from an already-normalised word
    /// pair, deriving its matrix, segmentation, and transformation.
    pub fn new(word_a: impl Into<String>, word_b: impl Into<String>) -> Self {
        let word_a = word_a.into();
        let word_b = word_b.into();
        let a_chars: Vec<char> = word_a.chars().collect();
        let b_chars: Vec<char> = word_b.chars().collect();

        let matrix = EditMatrix::compute(&a_chars, &b_chars);
        let segmentation = align::segment(&word_a, &word_b);
        let transformation = builder::build_transformation(&a_chars, &b_chars, &segmentation);

        TrainingElement {
            word_a,
            word_b,
            matrix: Some(matrix),
            segmentation,
            transformation,
        }
    }

    /// The rewrite source.
    pub fn word_a(&self) -> &str {
        &self.word_a
    }

    /// The rewrite target.
    pub fn word_b(&self) -> &str {
        &self.word_b
    }

    /// The derived segmentation.
    pub fn segmentation(&self) -> &[IntervalPair] {
        &self.segmentation
    }

    /// The derived transformation.
    pub fn transformation(&self) -> &Transformation {
        &self.transformation
    }

    /// The edit matrix, if still retained. `None` after [`Self::drop_matrix`].
    pub fn matrix(&self) -> Option<&EditMatrix> {
        self.matrix.as_ref()
    }

    /// Drop the retained edit matrix. Safe once the segmentation has
    /// been extracted and the matrix is no longer needed, bounding
    /// memory for large corpora per the `O(sum |A_i| * |B_i|)` budget.
    pub fn drop_matrix(&mut self) {
        self.matrix = None;
    }
}

impl Hash for TrainingElement {
    /// Delegates to the transformation's hash — used as the cluster
    /// set's fast bucket key, not as a value-equality proxy.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.transformation.hash(state);
    }
}
