// Copyright (c) The imd Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use thiserror::Error;

/// Errors surfaced by [`discover`](crate::discover).
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum Error {
    /// The log contained no traces, or every trace was empty, leaving an
    /// empty alphabet to mine.
    #[error("event log is empty (no activities to mine)")]
    EmptyLog,

    /// Trace at `index` had zero activities. `discover` tolerates this by
    /// dropping the trace; this variant exists for callers that construct a
    /// log directly and want to validate it strictly before mining.
    #[error("trace at index {index} is empty")]
    EmptyTrace {
        /// Position of the empty trace within the log, in input order.
        index: usize,
    },

    /// A cut returned a partition that did not exactly repartition its input
    /// cluster (activities dropped or duplicated). This indicates a bug in
    /// the cut implementation, not a caller mistake; it should never be
    /// observed in practice.
    #[error("internal invariant violated: {0}")]
    InvariantViolation(String),
}
