use std::fmt;

use crate::error::WordPairError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// A half-open range `[start, end)` over code-point positions.
pub struct Interval {
    start: usize,
    end: usize,
}

impl Interval {
    /// Build an interval.
    ///
    /// # Panics
    /// Panics if `start > end` — per the error taxonomy this is a
    /// programmer bug, not a recoverable condition. Use
    /// [`Self::try_new`] when the bounds come from untrusted arithmetic.
    pub fn new(start: usize, end: usize) -> Self {
        assert!(start <= end, "invalid interval: start ({start}) > end ({end})");
        Interval { start, end }
    }

    /// Build an interval, reporting `start > end` as
    /// [`WordPairError::InvalidInterval`] rather than panicking.
    pub fn try_new(start: usize, end: usize) -> Result<Self, WordPairError> {
        if start > end {
            return Err(WordPairError::InvalidInterval { start, end });
        }
        Ok(Interval { start, end })
    }

    /// Start bound (inclusive).
    pub fn start(&self) -> usize {
        self.start
    }

    /// End bound (exclusive).
    pub fn end(&self) -> usize {
        self.end
    }

    /// `end - start`.
    pub fn length(&self) -> usize {
        self.end - self.start
    }

    /// `length == 0`.
    pub fn is_empty(&self) -> bool {
        self.length() == 0
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// A pair of intervals over *A* and *B*, flagged as a shared (`common`)
/// or differing region.
///
/// Invariant: if `common`, `A[interval_a]` and `B[interval_b]` are equal
/// and non-empty; if not `common`, at least one of `interval_a,
/// interval_b` may be empty (a pure insert or pure delete).
pub struct IntervalPair {
    interval_a: Interval,
    interval_b: Interval,
    common: bool,
}

impl IntervalPair {
    /// Build an interval pair.
    pub fn new(interval_a: Interval, interval_b: Interval, common: bool) -> Self {
        IntervalPair {
            interval_a,
            interval_b,
            common,
        }
    }

    /// The interval over *A*.
    pub fn interval_a(&self) -> Interval {
        self.interval_a
    }

    /// The interval over *B*.
    pub fn interval_b(&self) -> Interval {
        self.interval_b
    }

    /// Whether this segment is a shared (common) region.
    pub fn common(&self) -> bool {
        self.common
    }
}

impl fmt::Display for IntervalPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({} : {} : {})",
            self.interval_a, self.interval_b, self.common
        )
    }
}
