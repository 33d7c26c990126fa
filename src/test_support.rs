// Copyright (c) The imd Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared helpers for unit tests across modules. Not part of the public API.

#![cfg(test)]

use crate::activity::Activity;
use crate::log::EventLog;

pub(crate) fn acts(name: &str) -> Activity {
    Activity::new(name)
}

pub(crate) fn trace_of(names: &[&str]) -> Vec<Activity> {
    names.iter().map(|n| Activity::new(*n)).collect()
}

pub(crate) fn log_of(traces: Vec<Vec<&str>>) -> EventLog {
    EventLog::from_traces(traces.into_iter().map(|t| trace_of(&t)))
}
