//! Park catalog ingestion: tolerant source fetchers, concurrent aggregation
//! and name + proximity deduplication.

pub mod aggregator;
pub mod client;
pub mod decode;
pub mod dedup;
pub mod error;
pub mod nearby;
pub mod source;
pub mod types;

pub use aggregator::ParkAggregator;
pub use client::CatalogClient;
pub use decode::decode_queue_times;
pub use dedup::{DedupEngine, DEFAULT_CLUSTER_RADIUS_METERS};
pub use error::CatalogError;
pub use nearby::rank_nearby;
pub use source::{ParkSource, QueueTimesSource, ThemeParksListSource};
