// Copyright (c) The imd Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property tests over generated logs, gated behind the `proptest09`
//! feature like the rest of the optional proptest support.

#![cfg(all(test, feature = "proptest09"))]

use crate::tree::ProcessTree;
use crate::{discover, Activity};
use proptest::prelude::*;

const ALPHABET: [&str; 4] = ["a", "b", "c", "d"];

fn arb_trace() -> impl Strategy<Value = Vec<Activity>> {
    proptest::collection::vec(proptest::sample::select(&ALPHABET[..]), 1..6)
        .prop_map(|names| names.into_iter().map(Activity::new).collect())
}

fn arb_log() -> impl Strategy<Value = Vec<Vec<Activity>>> {
    proptest::collection::vec(arb_trace(), 1..8)
}

/// Every xor/seq/par node has at least two children and every loop node has
/// one or two (property 3); no node is a single-child wrapper (property 4).
fn check_shape(tree: &ProcessTree) {
    match tree {
        ProcessTree::Leaf(_) => {}
        ProcessTree::Xor(children) | ProcessTree::Seq(children) | ProcessTree::Par(children) => {
            assert!(children.len() >= 2, "xor/seq/par must have at least two children");
            for child in children {
                check_shape(child);
            }
        }
        ProcessTree::Loop(children) => {
            assert!(
                children.len() == 1 || children.len() == 2,
                "loop must have one or two children, got {}",
                children.len()
            );
            for child in children {
                check_shape(child);
            }
        }
    }
}

proptest! {
    /// Property 1: the mined tree's leaf set is exactly the log's alphabet.
    #[test]
    fn leaf_coverage_matches_log_alphabet(log in arb_log()) {
        let mut alphabet: Vec<_> = log.iter().flatten().cloned().collect();
        alphabet.sort();
        alphabet.dedup();

        let tree = discover(log).expect("generated logs are never empty");
        let mut leaves = tree.leaves();
        leaves.sort();
        leaves.dedup();

        prop_assert_eq!(leaves, alphabet);
    }

    /// Property 2: mining the same log twice yields the same tree.
    #[test]
    fn discover_is_deterministic(log in arb_log()) {
        let tree_a = discover(log.clone()).expect("generated logs are never empty");
        let tree_b = discover(log).expect("generated logs are never empty");
        prop_assert_eq!(tree_a, tree_b);
    }

    /// Properties 3-4: operator arities hold and no node is a trivial wrapper.
    #[test]
    fn operator_shape_invariants_hold(log in arb_log()) {
        let tree = discover(log).expect("generated logs are never empty");
        check_shape(&tree);
    }
}
