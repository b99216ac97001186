//! Concurrent fan-out over catalog sources followed by deduplication.

use std::sync::Arc;

use futures::future::join_all;
use parkmatch_core::{CanonicalPark, RawParkRecord};

use crate::dedup::DedupEngine;
use crate::error::CatalogError;
use crate::source::ParkSource;

/// Merges every configured catalog into one deduplicated park list.
///
/// Sources are held in priority order: records of earlier sources come first
/// in the merged list, so they win when [`DedupEngine`] folds duplicates.
pub struct ParkAggregator {
    sources: Vec<Arc<dyn ParkSource>>,
    dedup: DedupEngine,
}

impl ParkAggregator {
    #[must_use]
    pub fn new(sources: Vec<Arc<dyn ParkSource>>, dedup: DedupEngine) -> Self {
        Self { sources, dedup }
    }

    /// Source names in priority order.
    #[must_use]
    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    /// Fetches every source concurrently and concatenates the results in
    /// priority order, stamping each record with its source's rank.
    ///
    /// A failing source contributes an empty list; the failure is logged and
    /// never propagated.
    pub async fn collect_raw(&self) -> Vec<RawParkRecord> {
        let results = join_all(self.sources.iter().map(|source| source.fetch())).await;

        let mut merged = Vec::new();
        for (rank, (source, result)) in self.sources.iter().zip(results).enumerate() {
            match result {
                Ok(records) => {
                    tracing::debug!(
                        source = source.name(),
                        rank,
                        count = records.len(),
                        "collected catalog records"
                    );
                    merged.extend(records.into_iter().map(|mut r| {
                        r.source_rank = rank;
                        r
                    }));
                }
                Err(e) => {
                    tracing::warn!(
                        source = source.name(),
                        error = %e,
                        "catalog source failed; continuing without it"
                    );
                }
            }
        }
        merged
    }

    /// Runs one aggregation pass: fetch, merge, deduplicate.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::EmptyResult`] only when the merged list is
    /// empty before deduplication, i.e. every source failed or returned
    /// nothing.
    pub async fn canonical_parks(&self) -> Result<Vec<CanonicalPark>, CatalogError> {
        let merged = self.collect_raw().await;
        if merged.is_empty() {
            return Err(CatalogError::EmptyResult);
        }

        let merged_count = merged.len();
        let parks = self.dedup.dedup(merged);
        tracing::info!(
            merged = merged_count,
            canonical = parks.len(),
            "aggregated park catalogs"
        );
        Ok(parks)
    }
}

#[cfg(test)]
#[path = "aggregator_test.rs"]
mod tests;
