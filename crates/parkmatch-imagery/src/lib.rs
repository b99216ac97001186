//! Park imagery: search-service client, staged name matching, in-memory URL
//! resolution cache and the on-disk thumbnail cache.

pub mod client;
pub mod disk;
pub mod download;
pub mod error;
pub mod matcher;
pub mod process;
pub mod resolver;
pub mod search;
pub mod types;

pub use client::build_http_client;
pub use disk::ImageDiskCache;
pub use download::{HttpImageDownloader, ImageDownloader};
pub use error::ImageryError;
pub use matcher::{
    fuzzy_score, jaccard, levenshtein, levenshtein_ratio, MatchRule, NameMatch, NameMatcher,
    DEFAULT_MATCH_THRESHOLD,
};
pub use process::{encode_thumbnail, encode_thumbnail_blocking, ThumbnailSettings};
pub use resolver::{ImageResolutionCache, ParkImageResolver};
pub use search::{resolve_image_url, SearchService, ThemeParksSearchClient};
