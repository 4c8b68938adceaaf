// atelier-suggestions/src/aggregate.rs

//! Per-domain assembly of extractor outputs.
//!
//! Dimension order is fixed per domain; the concatenated list is then
//! deduplicated by display text, first occurrence wins. There is no global
//! cap beyond the sum of the per-dimension caps.

use crate::extract;
use crate::service::SuggestionConfig;
use crate::types::{CreationRecord, CreatorRecord, SuggestionItem};
use std::collections::HashSet;

/// Keep only the first occurrence of each distinct `text`, preserving order
///
/// Items with different dimensions but identical text collapse to the
/// first-seen one, including its kind and icon. A "Tag" match can therefore
/// suppress a later "Catégorie" match with the same text; that tie-break is
/// intentional and pinned by tests.
pub fn dedupe_by_text(items: Vec<SuggestionItem>) -> Vec<SuggestionItem> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.text.clone()))
        .collect()
}

/// Creation-side suggestions: title → material → tag → category
pub fn creation_suggestions(
    records: &[CreationRecord],
    query: &str,
    config: &SuggestionConfig,
) -> Vec<SuggestionItem> {
    let mut items = Vec::new();
    items.extend(extract::creation_titles(records, query, config.title_cap));
    items.extend(extract::materials(records, query, config.material_cap));
    items.extend(extract::tags(records, query, config.tag_cap));
    items.extend(extract::categories(records, query, config.category_cap));

    dedupe_by_text(items)
}

/// Creator-side suggestions: name → business name → specialty → location
pub fn creator_suggestions(
    records: &[CreatorRecord],
    query: &str,
    config: &SuggestionConfig,
) -> Vec<SuggestionItem> {
    let mut items = Vec::new();
    items.extend(extract::artisan_names(records, query, config.artisan_cap));
    items.extend(extract::business_names(records, query, config.business_cap));
    items.extend(extract::specialties(records, query, config.specialty_cap));
    items.extend(extract::locations(records, query, config.location_cap));

    dedupe_by_text(items)
}

/// City suggestions: the single city dimension
pub fn city_suggestions(
    records: &[CreatorRecord],
    query: &str,
    config: &SuggestionConfig,
) -> Vec<SuggestionItem> {
    dedupe_by_text(extract::cities(records, query, config.city_cap))
}
