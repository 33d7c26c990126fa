// Copyright (c) The imd Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The four cut finders (C4-C7) tried, in fixed priority order, by the
//! recursive driver (C8, [`crate::discover`]).
//!
//! Each finder returns `Some(partition)` on success or `None` on failure;
//! there is no retry or global recovery (§4.8, §7).

pub mod exclusive;
pub mod loop_cut;
pub mod parallel;
pub mod sequential;

use crate::cluster::Cluster;
use indexmap::{IndexMap, IndexSet};
use petgraph::unionfind::UnionFind;

/// Groups `cluster`'s activities by the equivalence classes of a union-find
/// seeded with `same_component`, an iterator of position pairs (indices
/// into `cluster`'s canonical order) that must end up in the same class.
///
/// The returned groups preserve `cluster`'s canonical order: a group
/// appears at the position of the first activity (in cluster order) that
/// belongs to it.
pub(crate) fn union_find_groups(
    cluster: &Cluster,
    same_component: impl IntoIterator<Item = (usize, usize)>,
) -> Vec<Cluster> {
    let mut uf: UnionFind<usize> = UnionFind::new(cluster.len());
    for (i, j) in same_component {
        uf.union(i, j);
    }

    let mut groups: IndexMap<usize, Cluster> = IndexMap::new();
    for (idx, activity) in cluster.iter().enumerate() {
        let root = uf.find(idx);
        groups
            .entry(root)
            .or_insert_with(IndexSet::new)
            .insert(activity.clone());
    }
    groups.into_iter().map(|(_, group)| group).collect()
}

/// True if `partition` is a single block: since the blocks always exactly
/// repartition the input cluster, a single block means no progress was
/// made and the cut must fail (§4.4-§4.7, "the cut fails when...").
pub(crate) fn is_no_progress(partition: &[Cluster]) -> bool {
    partition.len() <= 1
}
