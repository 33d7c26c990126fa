// Copyright (c) The imd Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::activity::Activity;
use crate::errors::Error;
use crate::log::EventLog;
use crate::relation::Relation;
use indexmap::{IndexMap, IndexSet};

/// The directly-follows graph (DFG) of a log (§4.1, C1).
///
/// Built once from a log and treated as read-only thereafter (§5,
/// "Mutation discipline"). Every derived relation used by a cut (negated
/// graph, loop-auxiliary graph) is constructed fresh from this immutable
/// DFG and discarded after the cut attempt completes.
#[derive(Clone, Debug)]
pub struct Dfg {
    alphabet: IndexSet<Activity>,
    out: IndexMap<Activity, IndexSet<Activity>>,
    in_: IndexMap<Activity, IndexSet<Activity>>,
}

impl Dfg {
    /// Sweeps every trace of `log`, inserting `(x, y)` into `out(x)` and
    /// `in(y)` for every directly-following pair `x, y`.
    pub fn build(log: &EventLog) -> Result<Self, Error> {
        let alphabet = log.alphabet();
        if alphabet.is_empty() {
            return Err(Error::EmptyLog);
        }

        let mut out: IndexMap<Activity, IndexSet<Activity>> = IndexMap::new();
        let mut in_: IndexMap<Activity, IndexSet<Activity>> = IndexMap::new();

        for trace in log.traces() {
            for pair in trace.windows(2) {
                let (x, y) = (&pair[0], &pair[1]);
                out.entry(x.clone()).or_insert_with(IndexSet::new).insert(y.clone());
                in_.entry(y.clone()).or_insert_with(IndexSet::new).insert(x.clone());
            }
        }

        Ok(Dfg { alphabet, out, in_ })
    }

    /// The full alphabet of the log, in first-occurrence order.
    pub fn alphabet(&self) -> &IndexSet<Activity> {
        &self.alphabet
    }

    /// Global predecessors of `a` (empty set if `a` is never preceded).
    pub fn in_(&self, a: &Activity) -> IndexSet<Activity> {
        self.in_.get(a).cloned().unwrap_or_default()
    }

    /// Global successors of `a` (empty set if `a` is never followed).
    pub fn out(&self, a: &Activity) -> IndexSet<Activity> {
        self.out.get(a).cloned().unwrap_or_default()
    }

    /// The DFG restricted to edges with both endpoints in `cluster` (§3,
    /// "Induced subgraph"), as a [`Relation`] suitable for the reachability
    /// kernel.
    pub fn induced(&self, cluster: &IndexSet<Activity>) -> Relation {
        let mut relation = Relation::new();
        for a in cluster {
            if let Some(successors) = self.out.get(a) {
                for b in successors {
                    if cluster.contains(b) {
                        relation.insert_edge(a.clone(), b.clone());
                    }
                }
            }
        }
        relation
    }

    /// The negated (complement) DFG restricted to `cluster` (§3, §4.6).
    ///
    /// For every ordered pair `(a, b)` with `a != b` inside `cluster`, an
    /// edge exists iff the DFG has no edge `a -> b`; mutual DFG edges
    /// (`a -> b` and `b -> a` both present) cancel the complement edge in
    /// both directions, since activities that can directly follow each
    /// other both ways are parallelism candidates (§9).
    pub fn negated(&self, cluster: &IndexSet<Activity>) -> Relation {
        let mut relation = Relation::new();
        for a in cluster {
            for b in cluster {
                if a == b {
                    continue;
                }
                let a_to_b = self.out.get(a).map_or(false, |s| s.contains(b));
                let b_to_a = self.out.get(b).map_or(false, |s| s.contains(a));
                if !a_to_b && !b_to_a {
                    relation.insert_edge(a.clone(), b.clone());
                }
            }
        }
        relation
    }

    /// The DFG on `cluster` with every edge touching `boundary` removed
    /// (§4.7 step 2, the loop-auxiliary graph).
    pub fn loop_aux(&self, cluster: &IndexSet<Activity>, boundary: &IndexSet<Activity>) -> Relation {
        let mut relation = Relation::new();
        for a in cluster {
            if boundary.contains(a) {
                continue;
            }
            if let Some(successors) = self.out.get(a) {
                for b in successors {
                    if cluster.contains(b) && !boundary.contains(b) {
                        relation.insert_edge(a.clone(), b.clone());
                    }
                }
            }
        }
        relation
    }
}
