// Copyright (c) The imd Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::activity::Activity;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// A mined process tree (§3): a recursive expression over the four IMD
/// operators with activity leaves.
///
/// `Xor`, `Seq` and `Par` nodes always have at least two children; `Loop`
/// has exactly one (body only) or two (body, redo) (§8, property 3).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum ProcessTree {
    /// A single activity.
    Leaf(Activity),
    /// Exclusive choice between children.
    Xor(Vec<ProcessTree>),
    /// Ordered sequence of children.
    Seq(Vec<ProcessTree>),
    /// Concurrent execution of children.
    Par(Vec<ProcessTree>),
    /// A loop: `body`, optionally followed by `redo`.
    Loop(Vec<ProcessTree>),
}

impl ProcessTree {
    /// The multiset of leaf activities, in tree-traversal order.
    pub fn leaves(&self) -> Vec<Activity> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves(&self, out: &mut Vec<Activity>) {
        match self {
            ProcessTree::Leaf(a) => out.push(a.clone()),
            ProcessTree::Xor(children)
            | ProcessTree::Seq(children)
            | ProcessTree::Par(children)
            | ProcessTree::Loop(children) => {
                for child in children {
                    child.collect_leaves(out);
                }
            }
        }
    }

    /// The set of leaf activities, for coverage checks (§8, property 1).
    pub fn leaf_set(&self) -> IndexSet<Activity> {
        self.leaves().into_iter().collect()
    }
}
