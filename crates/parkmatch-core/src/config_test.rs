use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

fn assert_invalid(map: &HashMap<&str, &str>, expected_var: &str) {
    let result = build_app_config(lookup_from_map(map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == expected_var),
        "expected InvalidEnvVar({expected_var}), got: {result:?}"
    );
}

#[test]
fn build_app_config_uses_defaults_for_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.queue_times_url, "https://queue-times.com/parks.json");
    assert_eq!(cfg.image_base_url, "https://rcdb.com");
    assert_eq!(cfg.image_cache_dir, PathBuf::from("./cache/park-images"));
    assert_eq!(cfg.request_timeout_secs, 15);
    assert_eq!(cfg.image_dimension, 150);
    assert_eq!(cfg.image_quality, 75);
    assert_eq!(cfg.image_limit, 4);
    assert!((cfg.cluster_radius_meters - 1000.0).abs() < f64::EPSILON);
    assert!((cfg.match_threshold - 0.45).abs() < f64::EPSILON);
    assert_eq!(cfg.location_timeout_secs, 10);
}

#[test]
fn build_app_config_reads_overrides() {
    let mut map = HashMap::new();
    map.insert("PARKMATCH_SEARCH_URL", "http://localhost:9000/search");
    map.insert("PARKMATCH_IMAGE_CACHE_DIR", "/tmp/park-images");
    map.insert("PARKMATCH_IMAGE_DIMENSION", "300");
    map.insert("PARKMATCH_IMAGE_QUALITY", "90");
    map.insert("PARKMATCH_CLUSTER_RADIUS_METERS", "250.5");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.search_url, "http://localhost:9000/search");
    assert_eq!(cfg.image_cache_dir, PathBuf::from("/tmp/park-images"));
    assert_eq!(cfg.image_dimension, 300);
    assert_eq!(cfg.image_quality, 90);
    assert!((cfg.cluster_radius_meters - 250.5).abs() < f64::EPSILON);
}

#[test]
fn build_app_config_rejects_non_numeric_timeout() {
    let mut map = HashMap::new();
    map.insert("PARKMATCH_REQUEST_TIMEOUT_SECS", "soon");
    assert_invalid(&map, "PARKMATCH_REQUEST_TIMEOUT_SECS");
}

#[test]
fn build_app_config_rejects_zero_image_dimension() {
    let mut map = HashMap::new();
    map.insert("PARKMATCH_IMAGE_DIMENSION", "0");
    assert_invalid(&map, "PARKMATCH_IMAGE_DIMENSION");
}

#[test]
fn build_app_config_rejects_quality_out_of_range() {
    let mut map = HashMap::new();
    map.insert("PARKMATCH_IMAGE_QUALITY", "0");
    assert_invalid(&map, "PARKMATCH_IMAGE_QUALITY");

    map.insert("PARKMATCH_IMAGE_QUALITY", "101");
    assert_invalid(&map, "PARKMATCH_IMAGE_QUALITY");
}

#[test]
fn build_app_config_rejects_zero_image_limit() {
    let mut map = HashMap::new();
    map.insert("PARKMATCH_IMAGE_LIMIT", "0");
    assert_invalid(&map, "PARKMATCH_IMAGE_LIMIT");
}

#[test]
fn build_app_config_rejects_negative_cluster_radius() {
    let mut map = HashMap::new();
    map.insert("PARKMATCH_CLUSTER_RADIUS_METERS", "-5");
    assert_invalid(&map, "PARKMATCH_CLUSTER_RADIUS_METERS");
}

#[test]
fn build_app_config_rejects_threshold_above_one() {
    let mut map = HashMap::new();
    map.insert("PARKMATCH_MATCH_THRESHOLD", "1.5");
    assert_invalid(&map, "PARKMATCH_MATCH_THRESHOLD");
}
