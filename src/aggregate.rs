//! Fan-out/fan-in aggregation: one concurrent fetch per endpoint, an
//! all-or-nothing barrier, then flattening into a single table.

use futures::stream::{FuturesUnordered, StreamExt};
use serde_json::Value;

use crate::error::FetchError;
use crate::session::SessionHandle;
use crate::table::Table;

/// Fetch every endpoint concurrently and consolidate the results.
///
/// All fetches are dispatched at once and every one of them is awaited to
/// completion, success or failure, before anything is returned. If any
/// endpoint fails, the first failure observed (by completion order) becomes
/// the aggregation's failure and no table is produced. On success, results
/// are collected back into endpoint order, flattened, and turned into a
/// [`Table`].
pub async fn aggregate(handle: &SessionHandle, endpoints: &[&str]) -> Result<Table, FetchError> {
    let mut in_flight: FuturesUnordered<_> = endpoints
        .iter()
        .enumerate()
        .map(|(index, endpoint)| async move { (index, handle.fetch_json(endpoint).await) })
        .collect();

    let mut slots: Vec<Option<Value>> = Vec::new();
    slots.resize_with(endpoints.len(), || None);
    let mut first_failure: Option<FetchError> = None;

    // Drain the whole set: the barrier never abandons an in-flight call,
    // even once a failure has been seen.
    while let Some((index, result)) = in_flight.next().await {
        match result {
            Ok(value) => slots[index] = Some(value),
            Err(err) => {
                tracing::warn!(endpoint = endpoints[index], error = %err, "fetch failed");
                if first_failure.is_none() {
                    first_failure = Some(err);
                }
            }
        }
    }

    if let Some(err) = first_failure {
        return Err(err);
    }

    // Every slot is filled once the drain finishes without failure.
    let results: Vec<Value> = slots.into_iter().flatten().collect();
    let records = flatten(results);
    tracing::info!(
        endpoints = endpoints.len(),
        rows = records.len(),
        "building table"
    );
    Ok(Table::from_records(records))
}

/// Concatenate per-endpoint results into one flat record sequence.
///
/// Array results contribute their elements in order; a non-array result is
/// treated as a single-record contribution. Endpoint blocks keep their
/// relative order, records keep their order within a block.
pub fn flatten(results: Vec<Value>) -> Vec<Value> {
    let mut records = Vec::new();
    for result in results {
        match result {
            Value::Array(items) => records.extend(items),
            other => records.push(other),
        }
    }
    records
}
