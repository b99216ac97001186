//! Name-addressed on-disk thumbnail cache.
//!
//! Files live at `<dir>/<key>-<index>.jpg` where `key` is
//! [`cache_file_key`] of the park name. Presence of a file is the only
//! freshness signal: once written, a thumbnail is served until something
//! outside this crate deletes it.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parkmatch_core::cache_file_key;
use reqwest::Url;

use crate::download::ImageDownloader;
use crate::error::ImageryError;
use crate::process::{encode_thumbnail, ThumbnailSettings};
use crate::resolver::ParkImageResolver;

const CACHE_EXTENSION: &str = "jpg";

/// Downloads, shrinks and persists park thumbnails.
///
/// Lookups never fail: any error on a single image is logged and that image
/// is skipped.
pub struct ImageDiskCache {
    directory: PathBuf,
    resolver: Arc<ParkImageResolver>,
    downloader: Arc<dyn ImageDownloader>,
    thumbnail: ThumbnailSettings,
}

impl ImageDiskCache {
    #[must_use]
    pub fn new(
        directory: impl Into<PathBuf>,
        resolver: Arc<ParkImageResolver>,
        downloader: Arc<dyn ImageDownloader>,
        thumbnail: ThumbnailSettings,
    ) -> Self {
        Self {
            directory: directory.into(),
            resolver,
            downloader,
            thumbnail,
        }
    }

    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Deterministic path of image `index` for cache key `key`.
    #[must_use]
    pub fn file_path(&self, key: &str, index: usize) -> PathBuf {
        self.directory
            .join(format!("{key}-{index}.{CACHE_EXTENSION}"))
    }

    /// Local file of the park's main picture, downloading it on first use.
    pub async fn local_main_image(&self, park_name: &str) -> Option<PathBuf> {
        let key = cache_file_key(park_name);
        if key.is_empty() {
            return None;
        }
        if let Some(existing) = self.existing_files(&key, 1).await.into_iter().next() {
            tracing::debug!(park = park_name, path = %existing.display(), "thumbnail cache hit");
            return Some(existing);
        }

        let url = match self.resolver.main_picture_url(park_name).await {
            Ok(Some(url)) => url,
            Ok(None) => {
                tracing::debug!(park = park_name, "no main picture found");
                return None;
            }
            Err(e) => {
                tracing::warn!(park = park_name, error = %e, "main picture lookup failed");
                return None;
            }
        };

        match self.fetch_and_store(&url, &key, 0).await {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::warn!(park = park_name, url = %url, error = %e, "skipping thumbnail");
                None
            }
        }
    }

    /// Up to `limit` local thumbnails for a park.
    ///
    /// If any file for indices `0..limit` is already on disk those are
    /// returned without touching the network. Otherwise the picture list is
    /// fetched and each image processed in turn; an image that fails is
    /// skipped and its index left empty.
    pub async fn local_images(&self, park_name: &str, limit: usize) -> Vec<PathBuf> {
        let key = cache_file_key(park_name);
        if key.is_empty() || limit == 0 {
            return Vec::new();
        }

        let cached = self.existing_files(&key, limit).await;
        if !cached.is_empty() {
            tracing::debug!(park = park_name, count = cached.len(), "thumbnail cache hit");
            return cached;
        }

        let urls = match self.resolver.picture_urls(park_name, limit).await {
            Ok(urls) => urls,
            Err(e) => {
                tracing::warn!(park = park_name, error = %e, "picture lookup failed");
                return Vec::new();
            }
        };

        let mut stored = Vec::with_capacity(urls.len());
        for (index, url) in urls.iter().enumerate() {
            match self.fetch_and_store(url, &key, index).await {
                Ok(path) => stored.push(path),
                Err(e) => {
                    tracing::warn!(park = park_name, url = %url, index, error = %e, "skipping thumbnail");
                }
            }
        }
        tracing::debug!(park = park_name, stored = stored.len(), "thumbnails cached");
        stored
    }

    /// Existing files among indices `0..limit`, in index order.
    async fn existing_files(&self, key: &str, limit: usize) -> Vec<PathBuf> {
        let mut found = Vec::new();
        for index in 0..limit {
            let path = self.file_path(key, index);
            if tokio::fs::metadata(&path).await.is_ok_and(|m| m.is_file()) {
                found.push(path);
            }
        }
        found
    }

    async fn fetch_and_store(
        &self,
        url: &Url,
        key: &str,
        index: usize,
    ) -> Result<PathBuf, ImageryError> {
        let bytes = self.downloader.download(url).await?;
        let jpeg = encode_thumbnail(bytes, self.thumbnail).await?;
        self.store(key, index, &jpeg).await
    }

    /// Writes via a uniquely named temp file and a rename, so readers never
    /// observe a partial thumbnail.
    async fn store(&self, key: &str, index: usize, data: &[u8]) -> Result<PathBuf, ImageryError> {
        tokio::fs::create_dir_all(&self.directory).await?;
        let path = self.file_path(key, index);
        let temp_path = self
            .directory
            .join(format!(".{key}-{index}.{}.tmp", uuid::Uuid::new_v4()));

        let written = match tokio::fs::write(&temp_path, data).await {
            Ok(()) => tokio::fs::rename(&temp_path, &path).await,
            Err(e) => Err(e),
        };
        if let Err(e) = written {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(e.into());
        }
        Ok(path)
    }
}

#[cfg(test)]
#[path = "disk_test.rs"]
mod tests;
