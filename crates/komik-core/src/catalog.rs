//! Catalog loading: one fetch, merged behind the pinned titles.

use std::fmt::Display;

use komik_api::{CatalogQuery, CatalogService};

use crate::debug_log::{self, DebugEvent, SharedEventLog};
use crate::models::CatalogRecord;
use crate::pinned::pinned_records;

/// Pinned records first, in declared order, then remote records in API
/// order. A failed fetch contributes nothing. No de-duplication.
pub fn merge<E>(
    pinned: Vec<CatalogRecord>,
    remote: Result<Vec<CatalogRecord>, E>,
) -> Vec<CatalogRecord> {
    let mut records = pinned;
    if let Ok(remote) = remote {
        records.extend(remote);
    }
    records
}

/// Fetch one page from `service` and return the merged catalog.
///
/// Never fails: fetch errors are logged and recorded in `log`, and the
/// catalog degrades to the pinned set.
pub async fn load_catalog<S: CatalogService>(
    service: &S,
    query: &CatalogQuery,
    generation: u64,
    log: &SharedEventLog,
) -> Vec<CatalogRecord> {
    debug_log::record(
        log,
        DebugEvent::CatalogRequested {
            generation,
            limit: query.limit,
        },
    );

    let remote = service
        .fetch_catalog(query)
        .await
        .map(|data| data.into_iter().map(CatalogRecord::from).collect::<Vec<_>>());

    match &remote {
        Ok(records) => {
            tracing::debug!(generation, count = records.len(), "catalog fetched");
            debug_log::record(
                log,
                DebugEvent::CatalogFetched {
                    generation,
                    remote_count: records.len(),
                },
            );
        }
        Err(e) => report_failure(generation, e, log),
    }

    merge(pinned_records(), remote)
}

fn report_failure(generation: u64, error: &impl Display, log: &SharedEventLog) {
    tracing::warn!(generation, error = %error, "catalog fetch failed, showing pinned titles only");
    debug_log::record(
        log,
        DebugEvent::CatalogFetchFailed {
            generation,
            message: error.to_string(),
        },
    );
}
