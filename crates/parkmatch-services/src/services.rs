use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use parkmatch_catalog::{
    rank_nearby, CatalogClient, DedupEngine, ParkAggregator, ParkSource, QueueTimesSource,
    ThemeParksListSource,
};
use parkmatch_core::{AppConfig, NearbyPark};
use parkmatch_imagery::{
    build_http_client, HttpImageDownloader, ImageDiskCache, NameMatcher, ParkImageResolver,
    ThemeParksSearchClient, ThumbnailSettings,
};

use crate::error::ServicesError;
use crate::location::{LocationBridge, LocationDevice, LocationProvider};

/// Every long-lived service of the park layer, built once and passed by
/// reference to whoever needs it.
pub struct ParkServices {
    aggregator: ParkAggregator,
    resolver: Arc<ParkImageResolver>,
    images: ImageDiskCache,
    image_limit: usize,
    location_timeout: Duration,
}

impl ParkServices {
    /// Wires the production HTTP sources, search client and disk cache.
    ///
    /// Catalog priority: theme-parks list first, then queue-times, so the
    /// list source's records win duplicate clusters.
    ///
    /// # Errors
    ///
    /// Returns [`ServicesError`] if an HTTP client cannot be built or a
    /// configured URL does not parse.
    pub fn from_config(config: &AppConfig) -> Result<Self, ServicesError> {
        let catalog_client = CatalogClient::new(config.request_timeout_secs, &config.user_agent)?;
        let sources: Vec<Arc<dyn ParkSource>> = vec![
            Arc::new(ThemeParksListSource::new(
                catalog_client.clone(),
                &config.theme_parks_url,
            )),
            Arc::new(QueueTimesSource::new(catalog_client, &config.queue_times_url)),
        ];
        let aggregator =
            ParkAggregator::new(sources, DedupEngine::new(config.cluster_radius_meters));

        let http = build_http_client(config.request_timeout_secs, &config.user_agent)?;
        let search = ThemeParksSearchClient::with_client(http.clone(), &config.search_url)?;
        let resolver = Arc::new(ParkImageResolver::new(
            Arc::new(search),
            NameMatcher::new(config.match_threshold),
            &config.image_base_url,
        )?);
        let images = ImageDiskCache::new(
            config.image_cache_dir.clone(),
            Arc::clone(&resolver),
            Arc::new(HttpImageDownloader::with_client(http)),
            ThumbnailSettings::new(config.image_dimension, config.image_quality),
        );

        tracing::info!(
            sources = ?aggregator.source_names(),
            cache_dir = %config.image_cache_dir.display(),
            "park services ready"
        );

        Ok(Self {
            aggregator,
            resolver,
            images,
            image_limit: config.image_limit,
            location_timeout: Duration::from_secs(config.location_timeout_secs),
        })
    }

    #[must_use]
    pub fn aggregator(&self) -> &ParkAggregator {
        &self.aggregator
    }

    #[must_use]
    pub fn resolver(&self) -> &ParkImageResolver {
        &self.resolver
    }

    #[must_use]
    pub fn images(&self) -> &ImageDiskCache {
        &self.images
    }

    /// A location bridge over `device` using the configured timeout.
    #[must_use]
    pub fn location_bridge(&self, device: Arc<dyn LocationDevice>) -> LocationBridge {
        LocationBridge::new(device, self.location_timeout)
    }

    /// The `limit` canonical parks nearest to the device, closest first.
    ///
    /// # Errors
    ///
    /// Returns [`ServicesError::Location`] when no position is available and
    /// [`ServicesError::Catalog`] with `EmptyResult` when every catalog
    /// source failed.
    pub async fn nearest_parks(
        &self,
        location: &dyn LocationProvider,
        limit: usize,
    ) -> Result<Vec<NearbyPark>, ServicesError> {
        let origin = location.current_location().await?;
        let parks = self.aggregator.canonical_parks().await?;
        let nearby = rank_nearby(&parks, origin, limit);
        tracing::debug!(
            candidates = parks.len(),
            returned = nearby.len(),
            "ranked nearby parks"
        );
        Ok(nearby)
    }

    /// Cached main thumbnail for a park, if one can be obtained.
    pub async fn park_thumbnail(&self, park_name: &str) -> Option<PathBuf> {
        self.images.local_main_image(park_name).await
    }

    /// Up to the configured number of cached thumbnails for a park.
    pub async fn park_gallery(&self, park_name: &str) -> Vec<PathBuf> {
        self.images.local_images(park_name, self.image_limit).await
    }
}
