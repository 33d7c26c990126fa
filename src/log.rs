// Copyright (c) The imd Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::activity::Activity;
use crate::errors::Error;
use indexmap::IndexSet;

/// A finite ordered sequence of activities (one case).
pub type Trace = Vec<Activity>;

/// An unordered collection of traces. Duplicate traces are not deduplicated
/// (the DFG only cares about adjacency, so repeats contribute no new
/// information, but callers are free to pass a log with repeats).
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    traces: Vec<Trace>,
}

impl EventLog {
    /// Builds an event log from any iterable of iterables of activities.
    ///
    /// Empty traces are dropped rather than rejected; see
    /// [`Error::EmptyTrace`] for the strict alternative.
    pub fn from_traces<T, A>(traces: T) -> Self
    where
        T: IntoIterator<Item = A>,
        A: IntoIterator<Item = Activity>,
    {
        let traces = traces
            .into_iter()
            .map(|trace| trace.into_iter().collect::<Trace>())
            .filter(|trace: &Trace| !trace.is_empty())
            .collect();
        EventLog { traces }
    }

    /// Validates the log strictly: every original trace must be non-empty.
    ///
    /// `from_traces` silently drops empty traces; this is the opt-in check
    /// for callers that want `EmptyTrace` surfaced instead.
    pub fn validate_strict<T, A>(traces: &T) -> Result<(), Error>
    where
        for<'a> &'a T: IntoIterator<Item = &'a A>,
        A: AsRef<[Activity]>,
    {
        for (index, trace) in traces.into_iter().enumerate() {
            if trace.as_ref().is_empty() {
                return Err(Error::EmptyTrace { index });
            }
        }
        Ok(())
    }

    /// Traces contained in this log, in input order.
    pub fn traces(&self) -> &[Trace] {
        &self.traces
    }

    pub fn is_empty(&self) -> bool {
        self.traces.is_empty()
    }

    /// The alphabet of this log: every distinct activity, in first-occurrence
    /// order.
    pub fn alphabet(&self) -> IndexSet<Activity> {
        let mut alphabet = IndexSet::new();
        for trace in &self.traces {
            for activity in trace {
                alphabet.insert(activity.clone());
            }
        }
        alphabet
    }
}
