//! Name + proximity clustering of merged catalog records.

use std::collections::HashMap;

use parkmatch_core::{
    haversine_meters, normalize_name, CanonicalPark, Coordinate, RawParkRecord, PARK_STOPWORDS,
};

/// Default merge radius: entries of the same venue sit well inside 1 km.
pub const DEFAULT_CLUSTER_RADIUS_METERS: f64 = 1_000.0;

/// Folds raw records into one canonical record per physical park.
///
/// Records are bucketed by normalized name. Within a bucket, a record whose
/// great-circle distance to any already accepted record is at most the
/// cluster radius is a duplicate and dropped. Output keeps input order, so
/// the first-seen (highest-priority) record of each cluster wins.
///
/// Cost is quadratic per name bucket, which is fine for catalogs of a few
/// thousand parks.
#[derive(Debug, Clone, Copy)]
pub struct DedupEngine {
    cluster_radius_meters: f64,
}

impl Default for DedupEngine {
    fn default() -> Self {
        Self {
            cluster_radius_meters: DEFAULT_CLUSTER_RADIUS_METERS,
        }
    }
}

impl DedupEngine {
    #[must_use]
    pub fn new(cluster_radius_meters: f64) -> Self {
        Self {
            cluster_radius_meters,
        }
    }

    #[must_use]
    pub fn cluster_radius_meters(&self) -> f64 {
        self.cluster_radius_meters
    }

    /// Deduplicates `records`, preserving input order.
    #[must_use]
    pub fn dedup(&self, records: Vec<RawParkRecord>) -> Vec<CanonicalPark> {
        let mut accepted_by_name: HashMap<String, Vec<Coordinate>> = HashMap::new();
        let mut result = Vec::with_capacity(records.len());

        for record in records {
            let key = normalize_name(&record.name, PARK_STOPWORDS);
            let point = record.coordinate();
            let cluster = accepted_by_name.entry(key).or_default();

            let is_duplicate = cluster
                .iter()
                .any(|kept| haversine_meters(point, *kept) <= self.cluster_radius_meters);
            if is_duplicate {
                tracing::trace!(id = record.id, name = %record.name, "dropped duplicate park");
                continue;
            }

            cluster.push(point);
            result.push(CanonicalPark::from(record));
        }

        result
    }
}
