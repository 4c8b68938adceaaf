// atelier-suggestions/src/lib.rs

//! Atelier Suggestions Engine
//!
//! Typed autocomplete for the artisan marketplace: pulls creation and
//! creator records from the hosted backend, derives suggestion entries
//! across dimensions (titles, materials, tags, categories, artisan names,
//! business names, specialties, locations, cities), deduplicates and caps
//! them, and caches results under a TTL.

use std::sync::Arc;

pub mod aggregate;
pub mod cache;
pub mod extract;
pub mod gateway;
pub mod service;
pub mod types;

pub use types::*;

// Re-export key types for easy access
pub use crate::{
    cache::{SuggestionCache, DEFAULT_TTL},
    gateway::{DataGateway, SupabaseGateway},
    service::{SuggestionConfig, SuggestionService},
};

/// Wire a suggestion service to a Supabase-backed gateway
pub fn init_suggestions(base_url: &str, api_key: &str) -> anyhow::Result<SuggestionService> {
    let gateway = SupabaseGateway::new(base_url, api_key)?;
    Ok(SuggestionService::new(Arc::new(gateway)))
}

/// Same, with explicit pipeline configuration
pub fn init_suggestions_with_config(
    base_url: &str,
    api_key: &str,
    config: SuggestionConfig,
) -> anyhow::Result<SuggestionService> {
    let gateway = SupabaseGateway::new(base_url, api_key)?;
    Ok(SuggestionService::with_config(Arc::new(gateway), config))
}
