// atelier-suggestions/src/extract.rs

//! Pure per-dimension extractors.
//!
//! Each function scans one field axis of a record list for case-insensitive
//! substring matches of the query and caps its own output, so no single
//! dimension can crowd the combined result. No side effects, no I/O.

use crate::types::{category_label, CreationRecord, CreatorRecord, Dimension, SuggestionItem};
use std::collections::HashSet;

fn contains(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Creation titles matching the query, one item per creation
pub fn creation_titles(
    records: &[CreationRecord],
    query: &str,
    cap: usize,
) -> Vec<SuggestionItem> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| contains(&record.title, &needle))
        .take(cap)
        .map(|record| SuggestionItem::new(Dimension::CreationTitle, &record.id, record.title.clone()))
        .collect()
}

/// Distinct materials matching the query across all creations
pub fn materials(records: &[CreationRecord], query: &str, cap: usize) -> Vec<SuggestionItem> {
    let needle = query.to_lowercase();
    let mut seen = HashSet::new();
    let mut items = Vec::new();

    'records: for record in records {
        for material in &record.materials {
            let lower = material.to_lowercase();
            if !lower.contains(&needle) || !seen.insert(lower) {
                continue;
            }
            items.push(SuggestionItem::new(
                Dimension::Material,
                material,
                material.clone(),
            ));
            if items.len() == cap {
                break 'records;
            }
        }
    }

    items
}

/// Distinct tags matching the query across all creations
pub fn tags(records: &[CreationRecord], query: &str, cap: usize) -> Vec<SuggestionItem> {
    let needle = query.to_lowercase();
    let mut seen = HashSet::new();
    let mut items = Vec::new();

    'records: for record in records {
        for tag in &record.tags {
            let lower = tag.to_lowercase();
            if !lower.contains(&needle) || !seen.insert(lower) {
                continue;
            }
            items.push(SuggestionItem::new(Dimension::Tag, tag, tag.clone()));
            if items.len() == cap {
                break 'records;
            }
        }
    }

    items
}

/// Distinct categories whose label or code matches the query
pub fn categories(records: &[CreationRecord], query: &str, cap: usize) -> Vec<SuggestionItem> {
    let needle = query.to_lowercase();
    let mut seen = HashSet::new();
    let mut items = Vec::new();

    for record in records {
        if record.category.is_empty() {
            continue;
        }
        let label = category_label(&record.category);
        if !contains(&label, &needle) && !contains(&record.category, &needle) {
            continue;
        }
        if !seen.insert(record.category.to_lowercase()) {
            continue;
        }
        items.push(SuggestionItem::new(Dimension::Category, &record.category, label));
        if items.len() == cap {
            break;
        }
    }

    items
}

/// Artisan display names matching the query, one item per creator
pub fn artisan_names(records: &[CreatorRecord], query: &str, cap: usize) -> Vec<SuggestionItem> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| {
            !record.display_name.is_empty() && contains(&record.display_name, &needle)
        })
        .take(cap)
        .map(|record| {
            SuggestionItem::new(Dimension::ArtisanName, &record.id, record.display_name.clone())
        })
        .collect()
}

/// Business names matching the query, one item per creator
pub fn business_names(records: &[CreatorRecord], query: &str, cap: usize) -> Vec<SuggestionItem> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| {
            !record.business_name.is_empty() && contains(&record.business_name, &needle)
        })
        .take(cap)
        .map(|record| {
            SuggestionItem::new(Dimension::BusinessName, &record.id, record.business_name.clone())
        })
        .collect()
}

/// Distinct specialties matching the query across all creators
pub fn specialties(records: &[CreatorRecord], query: &str, cap: usize) -> Vec<SuggestionItem> {
    let needle = query.to_lowercase();
    let mut seen = HashSet::new();
    let mut items = Vec::new();

    'records: for record in records {
        for specialty in &record.specialties {
            let lower = specialty.to_lowercase();
            if !lower.contains(&needle) || !seen.insert(lower) {
                continue;
            }
            items.push(SuggestionItem::new(
                Dimension::Specialty,
                specialty,
                specialty.clone(),
            ));
            if items.len() == cap {
                break 'records;
            }
        }
    }

    items
}

/// Locations matching the query, one item per creator
///
/// Unlike [`cities`], location matches surface per creator so the caller
/// can route to a specific artisan's area.
pub fn locations(records: &[CreatorRecord], query: &str, cap: usize) -> Vec<SuggestionItem> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| !record.location.is_empty() && contains(&record.location, &needle))
        .take(cap)
        .map(|record| SuggestionItem::new(Dimension::Location, &record.id, record.location.clone()))
        .collect()
}

/// Distinct cities matching the query across all creator locations
///
/// First-seen spelling wins when locations differ only by case.
pub fn cities(records: &[CreatorRecord], query: &str, cap: usize) -> Vec<SuggestionItem> {
    let needle = query.to_lowercase();
    let mut seen = HashSet::new();
    let mut items = Vec::new();

    for record in records {
        if record.location.is_empty() {
            continue;
        }
        let lower = record.location.to_lowercase();
        if !lower.contains(&needle) || !seen.insert(lower) {
            continue;
        }
        items.push(SuggestionItem::new(
            Dimension::City,
            &record.location,
            record.location.clone(),
        ));
        if items.len() == cap {
            break;
        }
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creation(id: &str, title: &str, materials: &[&str], tags: &[&str], category: &str) -> CreationRecord {
        CreationRecord {
            id: id.to_string(),
            title: title.to_string(),
            materials: materials.iter().map(|s| s.to_string()).collect(),
            tags: tags.iter().map(|s| s.to_string()).collect(),
            category: category.to_string(),
            creator: None,
            created_at: None,
        }
    }

    fn creator(id: &str, name: &str, business: &str, location: &str, specialties: &[&str]) -> CreatorRecord {
        CreatorRecord {
            id: id.to_string(),
            display_name: name.to_string(),
            business_name: business.to_string(),
            location: location.to_string(),
            specialties: specialties.iter().map(|s| s.to_string()).collect(),
            verified: false,
            created_at: None,
        }
    }

    #[test]
    fn test_title_match_is_case_insensitive() {
        let records = vec![
            creation("c1", "Bracelet en Argent", &[], &[], "bijoux"),
            creation("c2", "Vase en grès", &[], &[], "poterie"),
        ];

        let items = creation_titles(&records, "ARGENT", 3);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "title_c1");
        assert_eq!(items[0].text, "Bracelet en Argent");
        assert_eq!(items[0].kind, "Titre de création");
    }

    #[test]
    fn test_title_cap() {
        let records: Vec<_> = (0..5)
            .map(|i| creation(&format!("c{i}"), &format!("Bracelet {i}"), &[], &[], "bijoux"))
            .collect();

        assert_eq!(creation_titles(&records, "bracelet", 3).len(), 3);
    }

    #[test]
    fn test_materials_dedupe_within_dimension() {
        let records = vec![
            creation("c1", "Bracelet", &["argent", "pierre"], &[], "bijoux"),
            creation("c2", "Bague", &["Argent"], &[], "bijoux"),
        ];

        let items = materials(&records, "argent", 2);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "material_argent");
    }

    #[test]
    fn test_category_matches_label_and_code() {
        let records = vec![creation("c1", "Couteau", &[], &[], "metal")];

        // label "Métal"
        assert_eq!(categories(&records, "métal", 2).len(), 1);
        // raw code "metal"
        let by_code = categories(&records, "metal", 2);
        assert_eq!(by_code.len(), 1);
        assert_eq!(by_code[0].text, "Métal");
        assert_eq!(by_code[0].id, "category_metal");
    }

    #[test]
    fn test_empty_fields_never_match() {
        let records = vec![creation("c1", "Sac", &[], &[], "")];
        assert!(categories(&records, "cuir", 2).is_empty());

        let creators = vec![creator("a1", "Léa", "", "", &[])];
        assert!(business_names(&creators, "léa", 2).is_empty());
        assert!(locations(&creators, "paris", 2).is_empty());
    }

    #[test]
    fn test_cities_collapse_locations() {
        let creators = vec![
            creator("a1", "Léa", "Atelier Léa", "Paris", &[]),
            creator("a2", "Marc", "Bois & Co", "paris", &[]),
            creator("a3", "Nina", "Terre Cuite", "Lyon", &[]),
        ];

        let items = cities(&creators, "par", 5);
        assert_eq!(items.len(), 1);
        // first-seen spelling wins
        assert_eq!(items[0].text, "Paris");
        assert_eq!(items[0].id, "city_Paris");
        assert_eq!(items[0].kind, "Ville");

        let per_creator = locations(&creators, "par", 2);
        assert_eq!(per_creator.len(), 2);
    }

    #[test]
    fn test_specialties_capped() {
        let creators = vec![creator(
            "a1",
            "Léa",
            "Atelier",
            "Paris",
            &["bijouterie", "joaillerie", "sertissage"],
        )];

        let items = specialties(&creators, "i", 2);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].text, "bijouterie");
    }
}
