// Copyright (c) The imd Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::activity::Activity;
use crate::cluster::Cluster;
use crate::cuts::{exclusive, loop_cut, parallel, sequential};
use crate::dfg::Dfg;
use crate::errors::Error;
use crate::log::EventLog;
use crate::tree::ProcessTree;
use tracing::{debug, trace};

/// Mines a process tree out of `log` (§6, the single external entry point).
///
/// Every trace is expected non-empty; empty traces are silently dropped
/// (use [`EventLog::validate_strict`] first for strict behaviour). Returns
/// [`Error::EmptyLog`] if the resulting alphabet is empty.
pub fn discover<T, A>(log: T) -> Result<ProcessTree, Error>
where
    T: IntoIterator<Item = A>,
    A: IntoIterator<Item = Activity>,
{
    let log = EventLog::from_traces(log);
    let dfg = Dfg::build(&log)?;
    let cluster: Cluster = dfg.alphabet().clone();
    imd(&dfg, cluster, 0)
}

/// The recursive driver (C8, §4.8): base case, then fixed-priority cut
/// dispatch, then the flower-loop fallback.
fn imd(dfg: &Dfg, cluster: Cluster, depth: usize) -> Result<ProcessTree, Error> {
    let span = tracing::debug_span!("imd", cluster_size = cluster.len(), depth);
    let _enter = span.enter();

    if cluster.len() == 1 {
        let activity = cluster.iter().next().expect("non-empty cluster").clone();
        debug!(activity = %activity, "base case: single activity");
        return Ok(ProcessTree::Leaf(activity));
    }

    if let Some(partition) = try_cut("xor", exclusive::find(dfg, &cluster), &cluster)? {
        return Ok(ProcessTree::Xor(recurse(dfg, partition, depth + 1)?));
    }
    if let Some(partition) = try_cut("seq", sequential::find(dfg, &cluster), &cluster)? {
        return Ok(ProcessTree::Seq(recurse(dfg, partition, depth + 1)?));
    }
    if let Some(partition) = try_cut("par", parallel::find(dfg, &cluster), &cluster)? {
        return Ok(ProcessTree::Par(recurse(dfg, partition, depth + 1)?));
    }
    if let Some(partition) = try_cut("loop", loop_cut::find(dfg, &cluster), &cluster)? {
        return Ok(ProcessTree::Loop(recurse(dfg, partition, depth + 1)?));
    }

    debug!("no cut applies, falling back to flower loop");
    let flower = cluster
        .iter()
        .map(|a| ProcessTree::Leaf(a.clone()))
        .collect();
    Ok(ProcessTree::Loop(flower))
}

/// Tries one cut and logs the attempt. On success, in debug builds only,
/// validates the candidate partition against the §7 invariant (every cut
/// must exactly repartition its input cluster) -- a correct cut can never
/// fail this, so the check is a debug-only defensive boundary rather than
/// something release builds pay for on every recursive call.
fn try_cut(
    name: &'static str,
    candidate: Option<Vec<Cluster>>,
    cluster: &Cluster,
) -> Result<Option<Vec<Cluster>>, Error> {
    match candidate {
        None => {
            trace!(cut = name, "cut failed");
            Ok(None)
        }
        Some(partition) => {
            debug!(cut = name, children = partition.len(), "cut succeeded");
            if cfg!(debug_assertions) {
                validate_partition(name, cluster, &partition)?;
            }
            Ok(Some(partition))
        }
    }
}

/// Every activity of `cluster` must appear in exactly one block of
/// `partition` (§7, `InvariantViolation`).
fn validate_partition(cut: &str, cluster: &Cluster, partition: &[Cluster]) -> Result<(), Error> {
    let mut seen = Cluster::new();
    for block in partition {
        for activity in block {
            if !seen.insert(activity.clone()) {
                return Err(Error::InvariantViolation(format!(
                    "{} cut duplicated activity {}",
                    cut, activity
                )));
            }
        }
    }
    if seen.len() != cluster.len() || !cluster.iter().all(|a| seen.contains(a)) {
        return Err(Error::InvariantViolation(format!(
            "{} cut did not exactly repartition its input cluster",
            cut
        )));
    }
    Ok(())
}

fn recurse(dfg: &Dfg, partition: Vec<Cluster>, depth: usize) -> Result<Vec<ProcessTree>, Error> {
    partition
        .into_iter()
        .map(|block| imd(dfg, block, depth))
        .collect()
}
