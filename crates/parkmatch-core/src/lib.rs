//! Shared data model, geometry, name normalization and configuration for the
//! park identity-resolution layer.

pub mod app_config;
pub mod config;
pub mod geo;
pub mod normalize;
pub mod types;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use geo::{haversine_meters, EARTH_RADIUS_METERS};
pub use normalize::{
    cache_file_key, normalize_name, separator_folded, token_set, MATCH_STOPWORDS,
    PARK_STOPWORDS,
};
pub use types::{
    CanonicalPark, Coordinate, CoordinateError, NearbyPark, RawParkRecord, SearchCandidate,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
