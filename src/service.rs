// atelier-suggestions/src/service.rs

use crate::aggregate;
use crate::cache::{cache_key, SuggestionCache, DEFAULT_TTL};
use crate::gateway::DataGateway;
use crate::types::{SuggestionDomain, SuggestionItem};
use futures::future::join_all;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Tuning knobs for the suggestion pipeline
#[derive(Debug, Clone)]
pub struct SuggestionConfig {
    /// How long a computed list stays valid in the cache
    pub ttl: Duration,
    /// Queries shorter than this (trimmed, in characters) short-circuit to
    /// an empty list without touching cache or gateway
    pub min_query_len: usize,
    pub title_cap: usize,
    pub material_cap: usize,
    pub tag_cap: usize,
    pub category_cap: usize,
    pub artisan_cap: usize,
    pub business_cap: usize,
    pub specialty_cap: usize,
    pub location_cap: usize,
    pub city_cap: usize,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            ttl: DEFAULT_TTL,
            min_query_len: 2,
            title_cap: 3,
            material_cap: 2,
            tag_cap: 2,
            category_cap: 2,
            artisan_cap: 3,
            business_cap: 2,
            specialty_cap: 2,
            location_cap: 2,
            city_cap: 5,
        }
    }
}

/// Facade over the suggestion pipeline: cache lookup, record fetch,
/// extraction, aggregation.
///
/// One instance services all call sites; construct it once and share it by
/// `Arc` rather than reaching for a global. All failure modes degrade to
/// "no suggestions": a failed fetch is logged, returned as an empty list,
/// and never cached, so the next call retries.
///
/// Overlapping calls with different queries populate the cache
/// independently and may resolve out of order; callers that care should
/// compare responses against their current input before rendering.
pub struct SuggestionService {
    gateway: Arc<dyn DataGateway>,
    cache: SuggestionCache,
    config: SuggestionConfig,
}

impl SuggestionService {
    pub fn new(gateway: Arc<dyn DataGateway>) -> Self {
        Self::with_config(gateway, SuggestionConfig::default())
    }

    pub fn with_config(gateway: Arc<dyn DataGateway>, config: SuggestionConfig) -> Self {
        Self {
            gateway,
            cache: SuggestionCache::with_ttl(config.ttl),
            config,
        }
    }

    /// Generic dispatcher over the wire domain string
    ///
    /// Unknown domains are not an error: the subsystem is decorative and
    /// must never block the primary search flow.
    pub async fn suggestions(&self, query: &str, domain: &str) -> Vec<SuggestionItem> {
        match SuggestionDomain::parse(domain) {
            Some(SuggestionDomain::Creations) => self.creation_suggestions(query).await,
            Some(SuggestionDomain::Creators) => self.creator_suggestions(query).await,
            Some(SuggestionDomain::Cities) => self.city_suggestions(query).await,
            None => {
                debug!(domain = %domain, "unknown suggestion domain");
                Vec::new()
            }
        }
    }

    /// Suggestions drawn from creation rows: titles, materials, tags,
    /// categories
    pub async fn creation_suggestions(&self, query: &str) -> Vec<SuggestionItem> {
        let Some(query) = self.usable_query(query) else {
            return Vec::new();
        };

        let key = cache_key(SuggestionDomain::Creations, query);
        if let Some(items) = self.cache.get(&key) {
            debug!(query = %query, "creation suggestions served from cache");
            return items;
        }

        let records = match self.gateway.fetch_all_creations().await {
            Ok(records) => records,
            Err(error) => {
                warn!(query = %query, error = %error, "creation fetch failed, returning no suggestions");
                return Vec::new();
            }
        };

        let items = aggregate::creation_suggestions(&records, query, &self.config);
        debug!(query = %query, count = items.len(), "creation suggestions computed");
        self.cache.set(key, items.clone());
        items
    }

    /// Suggestions drawn from creator rows: names, business names,
    /// specialties, locations
    pub async fn creator_suggestions(&self, query: &str) -> Vec<SuggestionItem> {
        let Some(query) = self.usable_query(query) else {
            return Vec::new();
        };

        let key = cache_key(SuggestionDomain::Creators, query);
        if let Some(items) = self.cache.get(&key) {
            debug!(query = %query, "creator suggestions served from cache");
            return items;
        }

        let records = match self.gateway.fetch_all_creators().await {
            Ok(records) => records,
            Err(error) => {
                warn!(query = %query, error = %error, "creator fetch failed, returning no suggestions");
                return Vec::new();
            }
        };

        let items = aggregate::creator_suggestions(&records, query, &self.config);
        debug!(query = %query, count = items.len(), "creator suggestions computed");
        self.cache.set(key, items.clone());
        items
    }

    /// Distinct city suggestions drawn from creator locations
    pub async fn city_suggestions(&self, query: &str) -> Vec<SuggestionItem> {
        let Some(query) = self.usable_query(query) else {
            return Vec::new();
        };

        let key = cache_key(SuggestionDomain::Cities, query);
        if let Some(items) = self.cache.get(&key) {
            debug!(query = %query, "city suggestions served from cache");
            return items;
        }

        let records = match self.gateway.fetch_all_creators().await {
            Ok(records) => records,
            Err(error) => {
                warn!(query = %query, error = %error, "creator fetch failed, returning no suggestions");
                return Vec::new();
            }
        };

        let items = aggregate::city_suggestions(&records, query, &self.config);
        debug!(query = %query, count = items.len(), "city suggestions computed");
        self.cache.set(key, items.clone());
        items
    }

    /// Warm the cache for a batch of queries
    ///
    /// Failures stay per-query and silent; a cold cache is the worst case.
    pub async fn prefetch(&self, domain: SuggestionDomain, queries: &[&str]) {
        let tasks = queries.iter().map(|query| async move {
            let count = self.suggestions(query, domain.as_str()).await.len();
            debug!(query = %query, domain = %domain.as_str(), count, "prefetched suggestions");
        });

        join_all(tasks).await;
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Drop cache entries past their TTL
    pub fn purge_expired(&self) {
        self.cache.purge_expired();
    }

    /// (total, expired) cached entry counts
    pub fn cache_stats(&self) -> (usize, usize) {
        self.cache.stats()
    }

    fn usable_query<'a>(&self, query: &'a str) -> Option<&'a str> {
        let trimmed = query.trim();
        if trimmed.chars().count() < self.config.min_query_len {
            return None;
        }
        Some(trimmed)
    }
}
