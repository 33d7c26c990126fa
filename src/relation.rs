// Copyright (c) The imd Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::activity::Activity;
use indexmap::{IndexMap, IndexSet};

/// A named directed relation over activities, represented as an
/// out-adjacency map.
///
/// The reachability kernel ([`crate::reachability`]) is parameterised by
/// this type rather than by an enum tag: the DFG, the negated DFG, and the
/// loop-auxiliary graph are each built fresh as a `Relation` for the
/// duration of a single cut attempt and then discarded (§5, §9 "Global
/// mutable relation tables").
#[derive(Clone, Debug, Default)]
pub struct Relation {
    out: IndexMap<Activity, IndexSet<Activity>>,
}

impl Relation {
    pub fn new() -> Self {
        Relation { out: IndexMap::new() }
    }

    pub fn insert_edge(&mut self, from: Activity, to: Activity) {
        self.out.entry(from).or_insert_with(IndexSet::new).insert(to);
    }

    /// The successors of `a` in this relation, if any.
    pub fn out(&self, a: &Activity) -> Option<&IndexSet<Activity>> {
        self.out.get(a)
    }
}
