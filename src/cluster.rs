use std::collections::HashMap;

use crate::element::TrainingElement;
use crate::transform::{hash_value, Transformation};

/// An equivalence class of training elements whose transformations are
/// pairwise joinable and whose joined transformation still correctly
/// reproduces every member's `B` from its `A`.
#[derive(Debug)]
pub struct Cluster {
    transformation: Transformation,
    members: Vec<TrainingElement>,
}

impl Cluster {
    fn seed(first: TrainingElement) -> Self {
        let transformation = first.transformation().clone();
        Cluster {
            transformation,
            members: vec![first],
        }
    }

    /// The cluster's current, jointly-generalised transformation.
    pub fn transformation(&self) -> &Transformation {
        &self.transformation
    }

    /// The members that justify the current transformation, in
    /// insertion order.
    pub fn members(&self) -> &[TrainingElement] {
        &self.members
    }

    /// Check whether `candidate` may be admitted: its transformation
    /// must be joinable with the cluster's, and the resulting joined
    /// transformation must still reproduce every existing member's `B`
    /// from its `A`, as well as the candidate's own. `apply` failures
    /// during this check are treated as "cannot admit", not propagated.
    fn candidate_join(&self, candidate: &TrainingElement) -> Option<Transformation> {
        if !self.transformation.maybe_joinable(candidate.transformation()) {
            return None;
        }
        let joined = self.transformation.join(candidate.transformation()).ok()?;

        for member in &self.members {
            match joined.apply(member.word_a()) {
                Ok(out) if out == member.word_b() => {}
                _ => return None,
            }
        }
        match joined.apply(candidate.word_a()) {
            Ok(out) if out == candidate.word_b() => Some(joined),
            _ => None,
        }
    }

    /// An owned copy of this cluster's transformation and members, for
    /// callers that need to keep it past the owning [`ClusterSet`]'s
    /// lifetime — e.g. handing clusters off to an out-of-scope
    /// classifier-training collaborator.
    pub fn to_owned_snapshot(&self) -> OwnedCluster {
        OwnedCluster {
            transformation: self.transformation.clone(),
            members: self.members.clone(),
        }
    }
}

/// An owned copy of a cluster's transformation and members, returned by
/// [`Cluster::to_owned_snapshot`]. Unlike [`ClusterView`], outlives the
/// [`ClusterSet`] it was copied from.
#[derive(Debug, Clone)]
pub struct OwnedCluster {
    transformation: Transformation,
    members: Vec<TrainingElement>,
}

impl OwnedCluster {
    /// The cluster's transformation at the time of the copy.
    pub fn transformation(&self) -> &Transformation {
        &self.transformation
    }

    /// The cluster's members at the time of the copy, in insertion order.
    pub fn members(&self) -> &[TrainingElement] {
        &self.members
    }
}

/// A read-only, borrowing view onto a cluster, returned by
/// [`ClusterSet::snapshot`]. Cheaper than a deep value copy and cannot
/// observe mutations made to the `ClusterSet` after the snapshot was
/// taken, since it borrows it.
#[derive(Debug, Clone, Copy)]
pub struct ClusterView<'a> {
    transformation: &'a Transformation,
    members: &'a [TrainingElement],
}

impl<'a> ClusterView<'a> {
    /// The cluster's current transformation.
    pub fn transformation(&self) -> &'a Transformation {
        self.transformation
    }

    /// The cluster's members, in insertion order.
    pub fn members(&self) -> &'a [TrainingElement] {
        self.members
    }

    /// An owned copy of this view, for callers that need to keep it past
    /// the `ClusterSet`'s lifetime. Named to match [`Cluster::to_owned_snapshot`]
    /// rather than [`ToOwned::to_owned`], whose blanket `Clone` impl this
    /// type would otherwise also pick up with a different return type.
    pub fn to_owned_snapshot(&self) -> OwnedCluster {
        OwnedCluster {
            transformation: self.transformation.clone(),
            members: self.members.to_vec(),
        }
    }
}

/// Partitions a set of training examples into rule clusters.
///
/// A map from a hash key (the transformation's hash, §4.2) to a list
/// of clusters; hash collisions are kept as separate clusters rather
/// than merged, since a shared hash only means "possibly joinable", not
/// "joinable". Insertion order of both buckets and clusters within a
/// bucket is tracked explicitly so [`Self::snapshot`] is deterministic.
#[derive(Debug, Default)]
pub struct ClusterSet {
    bucket_order: Vec<u64>,
    buckets: HashMap<u64, Vec<Cluster>>,
}

impl ClusterSet {
    /// An empty cluster set.
    pub fn new() -> Self {
        ClusterSet {
            bucket_order: Vec::new(),
            buckets: HashMap::new(),
        }
    }

    /// Add a training element. Never fails: a rejected element simply
    /// seeds a new cluster in its bucket.
    pub fn add(&mut self, element: TrainingElement) {
        let key = hash_value(element.transformation());

        if !self.buckets.contains_key(&key) {
            self.bucket_order.push(key);
        }
        let bucket = self.buckets.entry(key).or_default();

        for cluster in bucket.iter_mut() {
            if let Some(joined) = cluster.candidate_join(&element) {
                log::debug!(
                    "admitted ({}, {}) into existing cluster, bucket {key:#x}",
                    element.word_a(),
                    element.word_b()
                );
                cluster.transformation = joined;
                cluster.members.push(element);
                return;
            }
        }

        log::debug!(
            "seeded new cluster for ({}, {}), bucket {key:#x}",
            element.word_a(),
            element.word_b()
        );
        bucket.push(Cluster::seed(element));
    }

    /// A deterministic, read-only snapshot of the current partition:
    /// clusters in insertion order, each with its current
    /// transformation and member list (itself in insertion order).
    pub fn snapshot(&self) -> Vec<ClusterView<'_>> {
        let mut views = Vec::new();
        for key in &self.bucket_order {
            if let Some(bucket) = self.buckets.get(key) {
                for cluster in bucket {
                    views.push(ClusterView {
                        transformation: &cluster.transformation,
                        members: &cluster.members,
                    });
                }
            }
        }
        views
    }

    /// Total number of clusters across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Whether no elements have been added yet.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
