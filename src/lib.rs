// Copyright (c) The imd Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Inductive Miner - Directly-Follows (IMD): mines a [`ProcessTree`] out of
//! an event log.
//!
//! The mining pipeline builds a directly-follows graph from the log
//! ([`dfg`]), then recursively partitions the activity set by trying, in
//! fixed priority order, an exclusive cut, a sequential cut, a parallel
//! cut, and a loop cut ([`cuts`]), falling back to a flower loop when none
//! applies. None of this touches a file, a socket, or a clock; the crate's
//! only job is to turn traces into a tree.
//!
//! ```
//! use imd::{discover, Activity};
//!
//! let log = vec![
//!     vec![Activity::new("a"), Activity::new("b"), Activity::new("c")],
//! ];
//! let tree = discover(log).unwrap();
//! assert_eq!(tree.leaves().len(), 3);
//! ```

mod activity;
pub mod cluster;
pub mod cuts;
pub mod dfg;
mod discover;
mod errors;
pub mod log;
#[cfg(all(test, feature = "proptest09"))]
mod proptests;
pub mod reachability;
pub mod relation;
#[cfg(test)]
mod test_support;
mod tree;

pub use activity::Activity;
pub use discover::discover;
pub use errors::Error;
pub use log::EventLog;
pub use tree::ProcessTree;
