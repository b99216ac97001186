use std::path::PathBuf;

/// Runtime settings for the catalog, matching and image-cache services.
///
/// Built once by [`crate::load_app_config`] and handed to service
/// constructors; nothing in the workspace reads the environment directly.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub log_level: String,
    /// Catalog source A (tolerant multi-shape JSON).
    pub queue_times_url: String,
    /// Catalog source B (paginated list with string coordinates).
    pub theme_parks_url: String,
    /// Search service queried with `?q=<park name>`.
    pub search_url: String,
    /// Base used to absolutize scheme-less image references.
    pub image_base_url: String,
    pub image_cache_dir: PathBuf,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Side length in pixels of the square thumbnails written to disk.
    pub image_dimension: u32,
    /// JPEG quality, 1..=100.
    pub image_quality: u8,
    pub image_limit: usize,
    pub cluster_radius_meters: f64,
    pub match_threshold: f64,
    pub location_timeout_secs: u64,
}
