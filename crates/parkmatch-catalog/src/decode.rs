//! Tolerant decoding of catalog payloads into [`RawParkRecord`]s.
//!
//! Source A payloads are tried against an ordered list of shapes; each
//! attempt is independent and the first one that decodes *and* converts
//! cleanly wins. A single record with unusable coordinates fails the whole
//! attempt (and, if no other shape fits, the whole batch).

use parkmatch_core::{Coordinate, RawParkRecord};
use serde::de::Error as _;
use serde_json::Value;

use crate::error::CatalogError;
use crate::types::{QueueTimesGroup, QueueTimesPark, QueueTimesRoot, ThemeParksRecord};

type ShapeDecoder = fn(Value) -> Result<Vec<QueueTimesPark>, serde_json::Error>;

fn decode_groups(value: Value) -> Result<Vec<QueueTimesPark>, serde_json::Error> {
    let groups: Vec<QueueTimesGroup> = serde_json::from_value(value)?;
    Ok(groups.into_iter().flat_map(|g| g.parks).collect())
}

fn decode_flat(value: Value) -> Result<Vec<QueueTimesPark>, serde_json::Error> {
    serde_json::from_value(value)
}

fn decode_wrapped(value: Value) -> Result<Vec<QueueTimesPark>, serde_json::Error> {
    let root: QueueTimesRoot = serde_json::from_value(value)?;
    Ok(root.parks)
}

/// Source A shapes in priority order.
const QUEUE_TIMES_SHAPES: [(&str, ShapeDecoder); 3] = [
    ("array of groups", decode_groups),
    ("flat array", decode_flat),
    ("wrapped object", decode_wrapped),
];

/// Decodes a source A body, trying each known shape in order.
///
/// # Errors
///
/// - [`CatalogError::Parse`] if the body is not JSON or no shape matched.
/// - [`CatalogError::DataCorrupted`] if a shape matched structurally but a
///   record's coordinates could not be interpreted. This takes precedence
///   over shape mismatches reported by later attempts.
pub fn decode_queue_times(body: &str, context: &str) -> Result<Vec<RawParkRecord>, CatalogError> {
    let value: Value = serde_json::from_str(body).map_err(|e| CatalogError::Parse {
        context: context.to_owned(),
        source: e,
    })?;

    let mut corrupted: Option<CatalogError> = None;
    let mut last_mismatch: Option<serde_json::Error> = None;

    for (shape, decode) in QUEUE_TIMES_SHAPES {
        let parks = match decode(value.clone()) {
            Ok(parks) => parks,
            Err(e) => {
                tracing::trace!(context, shape, error = %e, "catalog shape did not match");
                last_mismatch = Some(e);
                continue;
            }
        };

        match parks
            .into_iter()
            .map(queue_times_record)
            .collect::<Result<Vec<_>, _>>()
        {
            Ok(records) => {
                tracing::debug!(context, shape, count = records.len(), "decoded catalog");
                return Ok(records);
            }
            Err(e) => {
                tracing::debug!(context, shape, error = %e, "catalog shape matched but data is corrupted");
                corrupted.get_or_insert(e);
            }
        }
    }

    if let Some(e) = corrupted {
        return Err(e);
    }
    Err(CatalogError::Parse {
        context: context.to_owned(),
        source: last_mismatch
            .unwrap_or_else(|| serde_json::Error::custom("no decode shape configured")),
    })
}

/// Converts one source A park, resolving coordinates from the primary key
/// and then each fallback key in order.
///
/// # Errors
///
/// Returns [`CatalogError::DataCorrupted`] when no key yields a number, or
/// when the resulting point is non-finite or out of range.
pub fn queue_times_record(park: QueueTimesPark) -> Result<RawParkRecord, CatalogError> {
    let context = format!("park {} ({})", park.id, park.name);
    let latitude = first_coordinate(&[park.latitude.as_ref(), park.lat.as_ref()])
        .ok_or_else(|| CatalogError::DataCorrupted {
            context: context.clone(),
            reason: "missing coordinate for latitude".to_owned(),
        })?;
    let longitude = first_coordinate(&[
        park.longitude.as_ref(),
        park.lng.as_ref(),
        park.lon.as_ref(),
    ])
    .ok_or_else(|| CatalogError::DataCorrupted {
        context: context.clone(),
        reason: "missing coordinate for longitude".to_owned(),
    })?;

    let point =
        Coordinate::new(latitude, longitude).map_err(|e| CatalogError::DataCorrupted {
            context,
            reason: e.to_string(),
        })?;

    Ok(RawParkRecord {
        id: park.id,
        name: park.name,
        slug: park.slug,
        latitude: point.latitude,
        longitude: point.longitude,
        country: park.country,
        continent: park.continent,
        source_rank: 0,
    })
}

/// Converts one source B record, or `None` when its coordinates are missing,
/// unparseable, or outside the valid range.
#[must_use]
pub fn theme_parks_record(record: ThemeParksRecord) -> Option<RawParkRecord> {
    let coords = record.coords.as_ref()?;
    let latitude = coords.lat.as_deref().and_then(parse_numeric_str)?;
    let longitude = coords.lng.as_deref().and_then(parse_numeric_str)?;
    let point = Coordinate::new(latitude, longitude).ok()?;
    Some(RawParkRecord {
        id: record.id,
        name: record.name,
        slug: None,
        latitude: point.latitude,
        longitude: point.longitude,
        country: record.country,
        continent: None,
        source_rank: 0,
    })
}

/// First candidate, in key priority order, holding a number or a numeric string.
fn first_coordinate(candidates: &[Option<&Value>]) -> Option<f64> {
    candidates
        .iter()
        .find_map(|value| value.and_then(coordinate_value))
}

/// Interprets a JSON value as a coordinate component.
fn coordinate_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_numeric_str(s),
        _ => None,
    }
}

fn parse_numeric_str(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok()
}

#[cfg(test)]
#[path = "decode_test.rs"]
mod tests;
