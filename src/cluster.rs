// Copyright (c) The imd Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::activity::Activity;
use crate::dfg::Dfg;
use indexmap::IndexSet;

/// A non-empty set of activities: the current recursion input (§3,
/// "Cluster"). Represented as an [`IndexSet`] so iteration always follows
/// the canonical (first-occurrence) order required by §5.
pub type Cluster = IndexSet<Activity>;

/// Start activities of `cluster` (§4.3): those whose every DFG predecessor
/// lies outside `cluster`, including activities with no predecessor at all.
pub fn start(dfg: &Dfg, cluster: &Cluster) -> Cluster {
    cluster
        .iter()
        .filter(|a| {
            let predecessors = dfg.in_(*a);
            predecessors.is_empty() || predecessors.iter().any(|p| !cluster.contains(p))
        })
        .cloned()
        .collect()
}

/// End activities of `cluster` (§4.3): those whose every DFG successor lies
/// outside `cluster`, including activities with no successor at all.
pub fn end(dfg: &Dfg, cluster: &Cluster) -> Cluster {
    cluster
        .iter()
        .filter(|a| {
            let successors = dfg.out(*a);
            successors.is_empty() || successors.iter().any(|s| !cluster.contains(s))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{acts, log_of};

    #[test]
    fn start_end_of_simple_sequence() {
        let log = log_of(vec![vec!["a", "b", "c", "d"]]);
        let dfg = Dfg::build(&log).unwrap();
        let cluster: Cluster = dfg.alphabet().clone();
        assert_eq!(start(&dfg, &cluster), [acts("a")].into_iter().collect());
        assert_eq!(end(&dfg, &cluster), [acts("d")].into_iter().collect());
    }

    #[test]
    fn start_end_respect_cluster_boundary() {
        // a -> b -> c: restricting the cluster to {b, c} makes b a start
        // activity even though it has a global predecessor, because that
        // predecessor (a) is outside the cluster.
        let log = log_of(vec![vec!["a", "b", "c"]]);
        let dfg = Dfg::build(&log).unwrap();
        let cluster: Cluster = [acts("b"), acts("c")].into_iter().collect();
        assert_eq!(start(&dfg, &cluster), [acts("b")].into_iter().collect());
        assert_eq!(end(&dfg, &cluster), [acts("c")].into_iter().collect());
    }
}
