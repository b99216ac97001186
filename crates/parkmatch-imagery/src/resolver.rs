//! Park name → image URL resolution with an in-memory, single-flight cache.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use parkmatch_core::{normalize_name, MATCH_STOPWORDS};
use reqwest::Url;
use tokio::sync::{Mutex, OnceCell};

use crate::error::ImageryError;
use crate::matcher::NameMatcher;
use crate::search::{resolve_image_url, SearchService};

/// Process-lifetime cache of resolved image URLs keyed by normalized name.
///
/// Each key owns a [`OnceCell`]; concurrent lookups of an uncached key wait
/// on the same cell, so only one resolution runs. A failed resolution leaves
/// the cell empty and the next caller retries. A resolution that succeeded
/// with "no image" is cached like any other answer. Entries never expire.
#[derive(Debug, Default)]
pub struct ImageResolutionCache {
    entries: Mutex<HashMap<String, Arc<OnceCell<Option<Url>>>>>,
}

impl ImageResolutionCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached answer for `key`, running `resolve` at most once
    /// across all concurrent callers when the key is not yet cached.
    ///
    /// # Errors
    ///
    /// Propagates the error of `resolve`; errors are not cached.
    pub async fn get_or_resolve<F, Fut>(
        &self,
        key: &str,
        resolve: F,
    ) -> Result<Option<Url>, ImageryError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Option<Url>, ImageryError>>,
    {
        let cell = {
            let mut entries = self.entries.lock().await;
            Arc::clone(entries.entry(key.to_owned()).or_default())
        };

        if let Some(hit) = cell.get() {
            tracing::debug!(key, "image resolution cache hit");
            return Ok(hit.clone());
        }

        tracing::debug!(key, "image resolution cache miss");
        cell.get_or_try_init(resolve).await.cloned()
    }

    /// Cached answer for `key`, without resolving.
    pub async fn cached(&self, key: &str) -> Option<Option<Url>> {
        let entries = self.entries.lock().await;
        entries.get(key).and_then(|cell| cell.get().cloned())
    }

    /// Number of keys with a settled answer.
    pub async fn len(&self) -> usize {
        let entries = self.entries.lock().await;
        entries.values().filter(|cell| cell.initialized()).count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// Finds image URLs for a park name through the search service.
pub struct ParkImageResolver {
    search: Arc<dyn SearchService>,
    matcher: NameMatcher,
    image_base: Url,
    cache: ImageResolutionCache,
}

impl ParkImageResolver {
    /// Creates a resolver.
    ///
    /// # Errors
    ///
    /// Returns [`ImageryError::InvalidUrl`] if `image_base` does not parse.
    pub fn new(
        search: Arc<dyn SearchService>,
        matcher: NameMatcher,
        image_base: &str,
    ) -> Result<Self, ImageryError> {
        let image_base = Url::parse(image_base).map_err(|e| ImageryError::InvalidUrl {
            url: image_base.to_owned(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            search,
            matcher,
            image_base,
            cache: ImageResolutionCache::new(),
        })
    }

    #[must_use]
    pub fn cache(&self) -> &ImageResolutionCache {
        &self.cache
    }

    /// Main picture of the best-matching search candidate, cached per
    /// normalized park name.
    ///
    /// `Ok(None)` when the search returns nothing or the chosen candidate
    /// has no usable main picture.
    ///
    /// # Errors
    ///
    /// Returns the search error when the service call fails.
    pub async fn main_picture_url(&self, park_name: &str) -> Result<Option<Url>, ImageryError> {
        let key = normalize_name(park_name, MATCH_STOPWORDS);
        self.cache
            .get_or_resolve(&key, || async {
                let candidates = self.search.search(park_name).await?;
                let Some(found) = self.matcher.best_match(park_name, &candidates) else {
                    return Ok(None);
                };
                tracing::debug!(
                    park = park_name,
                    candidate = %found.candidate.name,
                    rule = ?found.rule,
                    "matched search candidate"
                );
                Ok(found
                    .candidate
                    .main_image_ref
                    .as_deref()
                    .and_then(|raw| resolve_image_url(&self.image_base, raw)))
            })
            .await
    }

    /// Up to `limit` image URLs of the best-matching candidate: main picture
    /// first, then the others in service order, without duplicates.
    ///
    /// Not cached; every call queries the search service.
    ///
    /// # Errors
    ///
    /// Returns the search error when the service call fails.
    pub async fn picture_urls(
        &self,
        park_name: &str,
        limit: usize,
    ) -> Result<Vec<Url>, ImageryError> {
        if limit == 0 {
            return Ok(Vec::new());
        }
        let candidates = self.search.search(park_name).await?;
        let Some(found) = self.matcher.best_match(park_name, &candidates) else {
            return Ok(Vec::new());
        };

        let mut urls: Vec<Url> = Vec::with_capacity(limit);
        let refs = found
            .candidate
            .main_image_ref
            .iter()
            .chain(&found.candidate.other_image_refs);
        for raw in refs {
            let Some(url) = resolve_image_url(&self.image_base, raw) else {
                continue;
            };
            if !urls.contains(&url) {
                urls.push(url);
            }
            if urls.len() >= limit {
                break;
            }
        }
        Ok(urls)
    }
}

#[cfg(test)]
#[path = "resolver_test.rs"]
mod tests;
