// Copyright (c) The imd Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::cluster::{self, Cluster};
use crate::cuts::{is_no_progress, union_find_groups};
use crate::dfg::Dfg;

/// Parallel cut (C6, §4.6): partitions `cluster` into the connected
/// components of the negated DFG (mutual edges cancelled, self-loops
/// irrelevant since negation only considers `a != b` pairs), then requires
/// every component to intersect both start(cluster) and end(cluster).
///
/// Returns `None` if the cut fails: a single component results, or some
/// component misses the start or end set.
pub fn find(dfg: &Dfg, cluster: &Cluster) -> Option<Vec<Cluster>> {
    let start = cluster::start(dfg, cluster);
    let end = cluster::end(dfg, cluster);

    let negated = dfg.negated(cluster);
    let mut pairs = Vec::new();
    for (i, a) in cluster.iter().enumerate() {
        if let Some(successors) = negated.out(a) {
            for b in successors {
                if let Some(j) = cluster.get_index_of(b) {
                    pairs.push((i, j));
                }
            }
        }
    }
    let groups = union_find_groups(cluster, pairs);

    if is_no_progress(&groups) {
        return None;
    }
    let every_group_spans_start_and_end = groups
        .iter()
        .all(|group| group.iter().any(|a| start.contains(a)) && group.iter().any(|a| end.contains(a)));
    if !every_group_spans_start_and_end {
        return None;
    }
    Some(groups)
}
