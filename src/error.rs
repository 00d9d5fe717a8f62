use thiserror::Error;

/// Error taxonomy for the word-pair transformation core.
///
/// See the component design notes for the conditions each variant
/// surfaces under: [`Self::InvalidInterval`] is a programmer-bug
/// precondition violation (construction only reaches this path via
/// [`crate::interval::Interval::try_new`], since [`crate::interval::Interval::new`]
/// panics instead), [`Self::PatternNotFound`] is a normal, locally
/// recoverable outcome of [`crate::transform::Transformation::apply`],
/// and [`Self::NotJoinable`] only occurs if a caller calls
/// [`crate::transform::Transformation::join`] without first checking
/// `maybe_joinable`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordPairError {
    /// An interval was constructed with `start > end`.
    #[error("invalid interval: start ({start}) > end ({end})")]
    InvalidInterval {
        /// The requested start bound.
        start: usize,
        /// The requested end bound.
        end: usize,
    },
    /// An [`Transformation::Edit`](crate::transform::Transformation::Edit) applied
    /// to an input that does not contain `pre ++ replaced`.
    #[error("pattern `{pre}{replaced}` not found in `{remaining}`")]
    PatternNotFound {
        /// The edit's left-context constraint.
        pre: String,
        /// The edit's deleted substring.
        replaced: String,
        /// The residual input that was searched.
        remaining: String,
    },
    /// `join` was called on two transformations that are not joinable.
    #[error("transformations are not joinable")]
    NotJoinable,
}
