// Copyright (c) The imd Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::cluster::{self, Cluster};
use crate::cuts::union_find_groups;
use crate::dfg::Dfg;
use crate::reachability;

/// Loop cut (C7, §4.7). Produces one or two children: a body (the start and
/// end sets plus every fragment that loops back through an end activity to
/// a start activity) and, if non-empty, a redo (every fragment that routes
/// forward from a start activity to an end activity).
///
/// Returns `None` if the cut fails: no redo resulted and the body is just
/// the whole input cluster again, i.e. no fragment was actually pulled out.
pub fn find(dfg: &Dfg, cluster: &Cluster) -> Option<Vec<Cluster>> {
    let start = cluster::start(dfg, cluster);
    let end = cluster::end(dfg, cluster);
    let mut boundary: Cluster = start.clone();
    for a in &end {
        boundary.insert(a.clone());
    }

    let fragments = loop_fragments(dfg, cluster, &boundary);

    let induced = dfg.induced(cluster);
    let (body_fragments, redo_fragments) = classify_fragments(&induced, cluster, &start, &end, fragments);

    let mut body: Cluster = start.clone();
    for fragment in &body_fragments {
        for a in fragment {
            body.insert(a.clone());
        }
    }
    for a in &end {
        body.insert(a.clone());
    }

    let mut redo = Cluster::new();
    for fragment in &redo_fragments {
        for a in fragment {
            redo.insert(a.clone());
        }
    }

    let no_progress = redo.is_empty() && body.len() == cluster.len();
    if no_progress {
        return None;
    }

    let mut result = vec![body];
    if !redo.is_empty() {
        result.push(redo);
    }
    Some(result)
}

/// Connected components of the loop-auxiliary graph (§4.7 step 2-3) over
/// `cluster \ boundary`.
fn loop_fragments(dfg: &Dfg, cluster: &Cluster, boundary: &Cluster) -> Vec<Cluster> {
    let remainder: Cluster = cluster
        .iter()
        .filter(|a| !boundary.contains(*a))
        .cloned()
        .collect();
    if remainder.is_empty() {
        return Vec::new();
    }

    let aux = dfg.loop_aux(cluster, boundary);
    let mut pairs = Vec::new();
    for (i, a) in remainder.iter().enumerate() {
        if let Some(successors) = aux.out(a) {
            for b in successors {
                if let Some(j) = remainder.get_index_of(b) {
                    pairs.push((i, j));
                }
            }
        }
    }
    union_find_groups(&remainder, pairs)
}

/// Classifies each fragment as body or redo (§4.7 step 4) by inspecting the
/// DFS trail of a DFG path back to start/end.
fn classify_fragments(
    induced: &crate::relation::Relation,
    universe: &Cluster,
    start: &Cluster,
    end: &Cluster,
    fragments: Vec<Cluster>,
) -> (Vec<Cluster>, Vec<Cluster>) {
    let mut body_fragments = Vec::new();
    let mut redo_fragments = Vec::new();

    for fragment in fragments {
        if is_body(induced, universe, &fragment, start, end) {
            body_fragments.push(fragment);
        } else if is_redo(induced, universe, &fragment, start, end) {
            redo_fragments.push(fragment);
        } else {
            // Neither check passed (no route back to start/end through the
            // other boundary set); default to body so no activity is ever
            // dropped from the partition.
            body_fragments.push(fragment);
        }
    }
    (body_fragments, redo_fragments)
}

/// A DFG path from `fragment` back to `start` that passes through `end`.
fn is_body(
    induced: &crate::relation::Relation,
    universe: &Cluster,
    fragment: &Cluster,
    start: &Cluster,
    end: &Cluster,
) -> bool {
    reachability::path(induced, universe, fragment, start)
        .map_or(false, |trail| trail.iter().any(|a| end.contains(a)))
}

/// A DFG path from `fragment` to `end` that passes through `start`.
fn is_redo(
    induced: &crate::relation::Relation,
    universe: &Cluster,
    fragment: &Cluster,
    start: &Cluster,
    end: &Cluster,
) -> bool {
    reachability::path(induced, universe, fragment, end)
        .map_or(false, |trail| trail.iter().any(|a| start.contains(a)))
}
