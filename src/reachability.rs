// Copyright (c) The imd Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::activity::Activity;
use crate::relation::Relation;
use fixedbitset::FixedBitSet;
use indexmap::IndexSet;

/// The set of activities explored along the first successful DFS branch of a
/// [`path`] query (§4.2, §9 "Visited-set side channel").
///
/// In the original design this is the reachability kernel's visited set,
/// read once after the DFS completes; here it is simply the value `path`
/// returns, with no ambient state to leak across calls.
pub type Trail = IndexSet<Activity>;

/// Does a directed path exist in `relation` from any activity of `src` to
/// any activity of `dst`? `universe` is the stable index domain used to
/// size the DFS visited set -- in practice always the owning [`Dfg`]'s
/// alphabet, since every cluster is a subset of it.
///
/// Sources are tried in `src`'s canonical order; the first source from
/// which `dst` is reachable determines the returned trail, matching "the
/// visited set after a successful call is the set of activities explored
/// along the first successful branch" (§4.2).
///
/// [`Dfg`]: crate::dfg::Dfg
pub fn path(
    relation: &Relation,
    universe: &IndexSet<Activity>,
    src: &IndexSet<Activity>,
    dst: &IndexSet<Activity>,
) -> Option<Trail> {
    for start in src {
        if let Some(trail) = dfs_from(relation, universe, start, dst) {
            return Some(trail);
        }
    }
    None
}

fn dfs_from(
    relation: &Relation,
    universe: &IndexSet<Activity>,
    start: &Activity,
    dst: &IndexSet<Activity>,
) -> Option<Trail> {
    let mut visited = FixedBitSet::with_capacity(universe.len());
    let mut trail = Trail::new();
    let mut stack = vec![start.clone()];

    if let Some(ix) = universe.get_index_of(start) {
        visited.set(ix, true);
    }

    while let Some(a) = stack.pop() {
        trail.insert(a.clone());
        if dst.contains(&a) {
            return Some(trail);
        }
        if let Some(successors) = relation.out(&a) {
            for b in successors {
                let is_new = match universe.get_index_of(b) {
                    Some(ix) => {
                        let seen = visited.contains(ix);
                        visited.set(ix, true);
                        !seen
                    }
                    None => true,
                };
                if is_new {
                    stack.push(b.clone());
                }
            }
        }
    }
    None
}

/// Strongly connected pair test (§4.2): `a` and `b` are mutually reachable
/// in the DFG relation.
pub fn scc_pair(
    dfg_relation: &Relation,
    universe: &IndexSet<Activity>,
    a: &Activity,
    b: &Activity,
) -> bool {
    let a_set = single(a);
    let b_set = single(b);
    path(dfg_relation, universe, &a_set, &b_set).is_some()
        && path(dfg_relation, universe, &b_set, &a_set).is_some()
}

/// Neither `path(A,B)` nor `path(B,A)` holds in the DFG relation (§4.2).
pub fn not_connected(
    dfg_relation: &Relation,
    universe: &IndexSet<Activity>,
    a: &IndexSet<Activity>,
    b: &IndexSet<Activity>,
) -> bool {
    path(dfg_relation, universe, a, b).is_none() && path(dfg_relation, universe, b, a).is_none()
}

/// `path(A,B,R) || path(B,A,R)` for an arbitrary relation `R` (§4.2).
pub fn connected(
    relation: &Relation,
    universe: &IndexSet<Activity>,
    a: &IndexSet<Activity>,
    b: &IndexSet<Activity>,
) -> bool {
    path(relation, universe, a, b).is_some() || path(relation, universe, b, a).is_some()
}

fn single(a: &Activity) -> IndexSet<Activity> {
    let mut set = IndexSet::new();
    set.insert(a.clone());
    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dfg::Dfg;
    use crate::test_support::{acts, log_of};

    #[test]
    fn path_finds_transitive_successor() {
        let log = log_of(vec![vec!["a", "b", "c"]]);
        let dfg = Dfg::build(&log).unwrap();
        let universe = dfg.alphabet().clone();
        let rel = dfg.induced(&universe);
        let src = single(&acts("a"));
        let dst = single(&acts("c"));
        let trail = path(&rel, &universe, &src, &dst).unwrap();
        assert!(trail.contains(&acts("a")));
        assert!(trail.contains(&acts("b")));
        assert!(trail.contains(&acts("c")));
    }

    #[test]
    fn path_absent_when_unreachable() {
        let log = log_of(vec![vec!["a", "b"], vec!["c", "d"]]);
        let dfg = Dfg::build(&log).unwrap();
        let universe = dfg.alphabet().clone();
        let rel = dfg.induced(&universe);
        assert!(path(&rel, &universe, &single(&acts("a")), &single(&acts("d"))).is_none());
    }

    #[test]
    fn scc_pair_detects_mutual_reachability() {
        let log = log_of(vec![vec!["a", "b", "a"]]);
        let dfg = Dfg::build(&log).unwrap();
        let universe = dfg.alphabet().clone();
        let rel = dfg.induced(&universe);
        assert!(scc_pair(&rel, &universe, &acts("a"), &acts("b")));
    }

    #[test]
    fn not_connected_holds_for_disjoint_components() {
        let log = log_of(vec![vec!["a", "b"], vec!["c", "d"]]);
        let dfg = Dfg::build(&log).unwrap();
        let universe = dfg.alphabet().clone();
        let rel = dfg.induced(&universe);
        assert!(not_connected(
            &rel,
            &universe,
            &single(&acts("a")),
            &single(&acts("c"))
        ));
    }
}
