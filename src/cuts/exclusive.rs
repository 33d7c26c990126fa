// Copyright (c) The imd Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::cluster::Cluster;
use crate::cuts::{is_no_progress, union_find_groups};
use crate::dfg::Dfg;

/// Exclusive cut (C4, §4.4): partitions `cluster` into the connected
/// components of the symmetric closure of the induced DFG. Two activities
/// fall in the same component iff there is an undirected DFG path between
/// them wholly inside `cluster`.
///
/// Returns `None` if the cut fails (a single component results).
pub fn find(dfg: &Dfg, cluster: &Cluster) -> Option<Vec<Cluster>> {
    let induced = dfg.induced(cluster);
    let mut pairs = Vec::new();
    for (i, a) in cluster.iter().enumerate() {
        if let Some(successors) = induced.out(a) {
            for b in successors {
                if let Some(j) = cluster.get_index_of(b) {
                    pairs.push((i, j));
                }
            }
        }
    }

    let groups = union_find_groups(cluster, pairs);
    if is_no_progress(&groups) {
        None
    } else {
        Some(groups)
    }
}
