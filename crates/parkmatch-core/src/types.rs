//! Park and search-candidate records shared across the workspace.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A validated WGS-84 point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordinateError {
    #[error("{axis} is not a finite number")]
    NonFinite { axis: &'static str },

    #[error("{axis} {value} is outside [{min}, {max}]")]
    OutOfRange {
        axis: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl Coordinate {
    /// Builds a coordinate, rejecting non-finite or out-of-range values.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateError`] naming the offending axis.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        check_axis("latitude", latitude, 90.0)?;
        check_axis("longitude", longitude, 180.0)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

fn check_axis(axis: &'static str, value: f64, bound: f64) -> Result<(), CoordinateError> {
    if !value.is_finite() {
        return Err(CoordinateError::NonFinite { axis });
    }
    if !(-bound..=bound).contains(&value) {
        return Err(CoordinateError::OutOfRange {
            axis,
            value,
            min: -bound,
            max: bound,
        });
    }
    Ok(())
}

/// One park as reported by a single catalog source.
///
/// Lives only between a fetch and the dedup fold that consumes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawParkRecord {
    pub id: i64,
    pub name: String,
    pub slug: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub country: Option<String>,
    pub continent: Option<String>,
    /// Position of the producing source in the aggregator's priority order
    /// (0 = highest priority).
    pub source_rank: usize,
}

impl RawParkRecord {
    #[must_use]
    pub fn coordinate(&self) -> Coordinate {
        Coordinate {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// One physical park after deduplication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalPark {
    pub id: i64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country: Option<String>,
}

impl CanonicalPark {
    #[must_use]
    pub fn coordinate(&self) -> Coordinate {
        Coordinate {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

impl From<RawParkRecord> for CanonicalPark {
    fn from(record: RawParkRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            latitude: record.latitude,
            longitude: record.longitude,
            country: record.country,
        }
    }
}

/// A canonical park paired with its distance from one query origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbyPark {
    pub id: i64,
    pub name: String,
    pub distance_meters: f64,
    pub country: Option<String>,
}

/// A park returned by the external search service.
///
/// Image references are kept raw (possibly relative); they are absolutized
/// against the image host when resolved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchCandidate {
    pub id: Option<i64>,
    pub name: String,
    pub city: Option<String>,
    pub country: Option<String>,
    pub main_image_ref: Option<String>,
    pub other_image_refs: Vec<String>,
}

impl SearchCandidate {
    /// Convenience constructor for a candidate carrying only a name.
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            ..Self::default()
        }
    }
}
