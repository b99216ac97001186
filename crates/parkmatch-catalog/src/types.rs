//! Wire types for the two upstream park catalogs.
//!
//! ## Source A: Queue-Times `parks.json`
//!
//! The canonical endpoint returns an **array of groups**, each with a nested
//! `parks` array. Mirrors have been seen returning a **flat array** of parks
//! or an object **wrapping** the array under `parks`. Park objects carry
//! `latitude`/`longitude`, sometimes only `lat` and `lng`/`lon`, and the
//! values arrive either as JSON numbers or as numeric strings. Coordinates
//! are therefore kept as raw [`serde_json::Value`]s here and interpreted in
//! [`crate::decode`].
//!
//! `slug`, `country` and `continent` are advisory; a value of the wrong JSON
//! type is treated as absent instead of failing the record.
//!
//! ## Source B: theme-parks list
//!
//! `{ "data": [ { id, name, city?, state?, country?, coords: { lat, lng } } ] }`
//! with `coords.lat`/`coords.lng` always strings. Records without usable
//! coordinates are skipped individually.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accepts any JSON value, keeping it only when it is a string.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

/// A group of parks (usually one operator or country) from source A.
#[derive(Debug, Deserialize)]
pub struct QueueTimesGroup {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    pub parks: Vec<QueueTimesPark>,
}

/// `{ "parks": [...] }` wrapper served by some source A mirrors.
#[derive(Debug, Deserialize)]
pub struct QueueTimesRoot {
    pub parks: Vec<QueueTimesPark>,
}

/// One park from source A, coordinates still undecoded.
#[derive(Debug, Deserialize)]
pub struct QueueTimesPark {
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub slug: Option<String>,
    #[serde(default)]
    pub latitude: Option<Value>,
    #[serde(default)]
    pub lat: Option<Value>,
    #[serde(default)]
    pub longitude: Option<Value>,
    #[serde(default)]
    pub lng: Option<Value>,
    #[serde(default)]
    pub lon: Option<Value>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub continent: Option<String>,
}

/// Top-level response of the source B list endpoint.
#[derive(Debug, Deserialize)]
pub struct ThemeParksListResponse {
    pub data: Vec<ThemeParksRecord>,
}

/// One park from source B.
#[derive(Debug, Deserialize)]
pub struct ThemeParksRecord {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub coords: Option<ThemeParksCoords>,
}

/// Source B coordinates, served as numeric strings.
#[derive(Debug, Deserialize)]
pub struct ThemeParksCoords {
    #[serde(default)]
    pub lat: Option<String>,
    #[serde(default)]
    pub lng: Option<String>,
}
