use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::WordPairError;

/// A structured, executable description of how to rewrite one word into
/// another.
///
/// Closed under sequencing: the sole primitive is a contextual edit,
/// and sequences of edits are themselves transformations, so the
/// algebra composes without a separate "program" type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transformation {
    /// Scan the remaining input for the first occurrence of
    /// `pre ++ replaced`; emit everything scanned before `pre`, then
    /// `pre` verbatim, then `inserted`; consume up to and including the
    /// match.
    Edit {
        /// Left-context constraint, preserved verbatim in the output.
        pre: String,
        /// Substring deleted at the edit site.
        replaced: String,
        /// Substring emitted in place of `replaced`.
        inserted: String,
    },
    /// Apply each element in order, threading the residual input.
    Seq(Vec<Transformation>),
}

impl Transformation {
    /// Construct a contextual edit.
    pub fn edit(pre: impl Into<String>, replaced: impl Into<String>, inserted: impl Into<String>) -> Self {
        Transformation::Edit {
            pre: pre.into(),
            replaced: replaced.into(),
            inserted: inserted.into(),
        }
    }

    /// One step of application: thread `(emitted, remaining)` through
    /// this transformation.
    pub fn apply_step(&self, emitted: &str, remaining: &str) -> Result<(String, String), WordPairError> {
        match self {
            Transformation::Edit { pre, replaced, inserted } => {
                let needle = format!("{pre}{replaced}");
                let Some(k) = remaining.find(needle.as_str()) else {
                    return Err(WordPairError::PatternNotFound {
                        pre: pre.clone(),
                        replaced: replaced.clone(),
                        remaining: remaining.to_string(),
                    });
                };
                let mut out = String::with_capacity(emitted.len() + k + pre.len() + inserted.len());
                out.push_str(emitted);
                out.push_str(&remaining[..k]);
                out.push_str(pre);
                out.push_str(inserted);
                let rest = remaining[k + needle.len()..].to_string();
                Ok((out, rest))
            }
            Transformation::Seq(steps) => {
                let mut emitted = emitted.to_string();
                let mut remaining = remaining.to_string();
                for step in steps {
                    let (next_emitted, next_remaining) = step.apply_step(&emitted, &remaining)?;
                    emitted = next_emitted;
                    remaining = next_remaining;
                }
                Ok((emitted, remaining))
            }
        }
    }

    /// Apply this transformation to a whole word, discarding the
    /// trailing residual.
    pub fn apply(&self, word: &str) -> Result<String, WordPairError> {
        let (emitted, _) = self.apply_step("", word)?;
        Ok(emitted)
    }

    /// Whether `self` and `other` describe the same rule shape and can
    /// be generalised into one via [`Self::join`].
    pub fn maybe_joinable(&self, other: &Transformation) -> bool {
        match (self, other) {
            (
                Transformation::Edit { replaced: r1, inserted: i1, .. },
                Transformation::Edit { replaced: r2, inserted: i2, .. },
            ) => r1 == r2 && i1 == i2,
            (Transformation::Seq(a), Transformation::Seq(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.maybe_joinable(y))
            }
            (Transformation::Seq(a), edit @ Transformation::Edit { .. }) => {
                a.len() == 1 && a[0].maybe_joinable(edit)
            }
            (edit @ Transformation::Edit { .. }, Transformation::Seq(b)) => {
                b.len() == 1 && edit.maybe_joinable(&b[0])
            }
        }
    }

    /// The least-general transformation that subsumes `self` and
    /// `other`. Fails with [`WordPairError::NotJoinable`] if they are
    /// not joinable; callers that have already checked
    /// [`Self::maybe_joinable`] cannot observe this branch.
    pub fn join(&self, other: &Transformation) -> Result<Transformation, WordPairError> {
        if !self.maybe_joinable(other) {
            return Err(WordPairError::NotJoinable);
        }
        match (self, other) {
            (
                Transformation::Edit { pre: pre_a, replaced, inserted },
                Transformation::Edit { pre: pre_b, .. },
            ) => Ok(Transformation::Edit {
                pre: longest_common_suffix(pre_a, pre_b),
                replaced: replaced.clone(),
                inserted: inserted.clone(),
            }),
            (Transformation::Seq(a), Transformation::Seq(b)) => {
                let joined = a
                    .iter()
                    .zip(b)
                    .map(|(x, y)| x.join(y))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Transformation::Seq(joined))
            }
            (Transformation::Seq(a), edit @ Transformation::Edit { .. }) => {
                Ok(Transformation::Seq(vec![a[0].join(edit)?]))
            }
            (edit @ Transformation::Edit { .. }, Transformation::Seq(b)) => {
                Ok(Transformation::Seq(vec![edit.join(&b[0])?]))
            }
        }
    }
}

impl Hash for Transformation {
    /// Deliberately depends only on `(replaced, inserted)` for an
    /// [`Transformation::Edit`] (stable under generalisation of `pre`)
    /// and on the xor-fold of element hashes for a
    /// [`Transformation::Seq`] — joinable transformations hash
    /// identically, which is the property the clustering core's bucket
    /// key exploits.
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Transformation::Edit { replaced, inserted, .. } => {
                replaced.hash(state);
                inserted.hash(state);
            }
            Transformation::Seq(steps) => {
                let folded = steps.iter().fold(0u64, |acc, step| acc ^ hash_value(step));
                folded.hash(state);
            }
        }
    }
}

/// Hash a single value with a fresh, deterministic hasher — used to
/// fold per-element hashes independently of the outer hasher's state,
/// matching the xor-fold semantics [`Transformation::Seq`] requires.
pub(crate) fn hash_value<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

impl fmt::Display for Transformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transformation::Edit { pre, replaced, inserted } => {
                if !pre.is_empty() || !replaced.is_empty() {
                    write!(f, "find ~{pre}{replaced} and ")?;
                }
                if replaced.is_empty() {
                    write!(f, "add {inserted}")
                } else {
                    write!(f, "replace {replaced} with {inserted}")
                }
            }
            Transformation::Seq(steps) => {
                for (idx, step) in steps.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", then ")?;
                    }
                    write!(f, "{step}")?;
                }
                Ok(())
            }
        }
    }
}

fn longest_common_suffix(a: &str, b: &str) -> String {
    let a_rev: Vec<char> = a.chars().rev().collect();
    let b_rev: Vec<char> = b.chars().rev().collect();
    let n = a_rev.iter().zip(b_rev.iter()).take_while(|(x, y)| x == y).count();
    a_rev[..n].iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_apply_basic() {
        let t = Transformation::edit("", "", "ge");
        assert_eq!(t.apply("liegen").unwrap(), "geliegen");
    }

    #[test]
    fn edit_apply_skips_to_first_match() {
        let t = Transformation::edit("egen", "", "");
        let (emitted, remaining) = t.apply_step("ge", "liegen").unwrap();
        assert_eq!(emitted, "geliegen");
        assert!(remaining.is_empty());
    }

    #[test]
    fn edit_apply_pattern_not_found() {
        let t = Transformation::edit("x", "y", "z");
        assert!(matches!(t.apply("abc"), Err(WordPairError::PatternNotFound { .. })));
    }

    #[test]
    fn built_transformation_liegen_gelegen() {
        let t = Transformation::Seq(vec![
            Transformation::edit("", "", "ge"),
            Transformation::edit("l", "i", ""),
            Transformation::edit("egen", "", ""),
        ]);
        assert_eq!(t.apply("liegen").unwrap(), "gelegen");
    }

    #[test]
    fn reflexive_joinability() {
        let t = Transformation::Seq(vec![Transformation::edit("", "", "ge"), Transformation::edit("l", "i", "")]);
        assert!(t.maybe_joinable(&t));
        assert_eq!(t.join(&t).unwrap(), t);
    }

    #[test]
    fn idempotent_join() {
        let t = Transformation::edit("schmier", "en", "t");
        assert_eq!(t.join(&t).unwrap(), t);
    }

    #[test]
    fn join_is_symmetric() {
        let a = Transformation::edit("schmier", "en", "t");
        let b = Transformation::edit("f", "en", "t");
        assert_eq!(a.join(&b).unwrap(), b.join(&a).unwrap());
    }

    #[test]
    fn join_uses_longest_common_suffix_of_pre() {
        let a = Transformation::edit("schmier", "en", "t");
        let b = Transformation::edit("f", "en", "t");
        let joined = a.join(&b).unwrap();
        assert_eq!(joined, Transformation::edit("", "en", "t"));
    }

    #[test]
    fn join_preserves_application_on_inputs_already_handled() {
        let a = Transformation::edit("schmier", "en", "t");
        let b = Transformation::edit("f", "en", "t");
        let joined = a.join(&b).unwrap();
        assert_eq!(joined.apply("schmieren").unwrap(), a.apply("schmieren").unwrap());
        assert_eq!(joined.apply("fen").unwrap(), b.apply("fen").unwrap());
    }

    #[test]
    fn hash_consistency_for_joinable_edits() {
        let a = Transformation::edit("schmier", "en", "t");
        let b = Transformation::edit("f", "en", "t");
        assert!(a.maybe_joinable(&b));
        assert_eq!(hash_value(&a), hash_value(&b));
    }

    #[test]
    fn unequal_replaced_breaks_joinability() {
        let a = Transformation::edit("", "i", "");
        let b = Transformation::edit("", "en", "t");
        assert!(!a.maybe_joinable(&b));
        assert!(a.join(&b).is_err());
    }

    #[test]
    fn sequences_of_different_length_are_not_joinable() {
        let a = Transformation::Seq(vec![Transformation::edit("", "", "ge")]);
        let b = Transformation::Seq(vec![
            Transformation::edit("", "", "ge"),
            Transformation::edit("l", "i", ""),
        ]);
        assert!(!a.maybe_joinable(&b));
        assert!(matches!(a.join(&b), Err(WordPairError::NotJoinable)));
    }

    #[test]
    fn display_matches_recommended_wording() {
        assert_eq!(Transformation::edit("", "", "ge").to_string(), "add ge");
        assert_eq!(
            Transformation::edit("l", "i", "").to_string(),
            "find ~li and replace i with "
        );
        let seq = Transformation::Seq(vec![Transformation::edit("", "", "ge"), Transformation::edit("l", "i", "")]);
        assert_eq!(seq.to_string(), "add ge, then find ~li and replace i with ");
    }
}
