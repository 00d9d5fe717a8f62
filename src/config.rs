/// Tunables for building a [`crate::cluster::ClusterSet`] from a corpus of
/// word pairs.
#[derive(Debug, Clone, Default)]
pub struct ClusteringConfig {
    /// Whether a `(word_a, word_b)` pair that has already been added is
    /// silently skipped on a repeat `add_pair`, instead of seeding a second,
    /// redundant [`crate::element::TrainingElement`].
    ///
    /// Default `false`: [`crate::element::TrainingElement`] is identity-like
    /// by design (see its doc comment), so repeats are kept unless a caller
    /// opts into deduplication.
    pub dedupe_identical_pairs: bool,
}

impl ClusteringConfig {
    /// A config with deduplication enabled.
    pub fn deduping() -> Self {
        ClusteringConfig { dedupe_identical_pairs: true }
    }

    /// Build a [`crate::cluster::ClusterSet`] from an ordered corpus of
    /// word pairs, honoring [`Self::dedupe_identical_pairs`].
    pub fn build(&self, pairs: impl IntoIterator<Item = (String, String)>) -> crate::cluster::ClusterSet {
        let mut set = crate::cluster::ClusterSet::new();
        let mut seen = std::collections::HashSet::new();

        for (word_a, word_b) in pairs {
            if self.dedupe_identical_pairs {
                let key = (word_a.clone(), word_b.clone());
                if !seen.insert(key) {
                    log::debug!("skipping repeated pair ({word_a}, {word_b})");
                    continue;
                }
            }
            set.add(crate::element::TrainingElement::new(word_a, word_b));
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_keeps_repeats() {
        let set = ClusteringConfig::default().build(vec![
            ("liegen".to_string(), "gelegen".to_string()),
            ("liegen".to_string(), "gelegen".to_string()),
        ]);
        let total: usize = set.snapshot().iter().map(|v| v.members().len()).sum();
        assert_eq!(total, 2);
    }

    #[test]
    fn deduping_drops_repeats() {
        let set = ClusteringConfig::deduping().build(vec![
            ("liegen".to_string(), "gelegen".to_string()),
            ("liegen".to_string(), "gelegen".to_string()),
        ]);
        let total: usize = set.snapshot().iter().map(|v| v.members().len()).sum();
        assert_eq!(total, 1);
    }
}
