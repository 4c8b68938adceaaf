// atelier-suggestions/src/types.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Suggestion domains exposed to the app shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionDomain {
    Creations,
    Creators,
    Cities,
}

impl SuggestionDomain {
    /// Permissive parse of the wire string; unknown domains yield `None`
    /// so the dispatcher can degrade to an empty result instead of failing.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "creations" => Some(SuggestionDomain::Creations),
            "creators" => Some(SuggestionDomain::Creators),
            "cities" => Some(SuggestionDomain::Cities),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SuggestionDomain::Creations => "creations",
            SuggestionDomain::Creators => "creators",
            SuggestionDomain::Cities => "cities",
        }
    }
}

/// A single attribute axis scanned for suggestion candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    CreationTitle,
    Material,
    Tag,
    Category,
    ArtisanName,
    BusinessName,
    Specialty,
    Location,
    City,
}

impl Dimension {
    /// User-facing label, shown next to the suggestion text
    pub fn label(&self) -> &'static str {
        match self {
            Dimension::CreationTitle => "Titre de création",
            Dimension::Material => "Matériau",
            Dimension::Tag => "Tag",
            Dimension::Category => "Catégorie",
            Dimension::ArtisanName => "Artisan",
            Dimension::BusinessName => "Boutique",
            Dimension::Specialty => "Spécialité",
            Dimension::Location => "Lieu",
            Dimension::City => "Ville",
        }
    }

    /// Display glyph, constant per dimension
    pub fn icon(&self) -> &'static str {
        match self {
            Dimension::CreationTitle => "🎨",
            Dimension::Material => "🧵",
            Dimension::Tag => "🏷️",
            Dimension::Category => "📂",
            Dimension::ArtisanName => "👤",
            Dimension::BusinessName => "🏪",
            Dimension::Specialty => "✨",
            Dimension::Location => "📍",
            Dimension::City => "🏙️",
        }
    }

    /// Id prefix, combined with a source identifier into the item id
    pub fn prefix(&self) -> &'static str {
        match self {
            Dimension::CreationTitle => "title",
            Dimension::Material => "material",
            Dimension::Tag => "tag",
            Dimension::Category => "category",
            Dimension::ArtisanName => "artisan",
            Dimension::BusinessName => "business",
            Dimension::Specialty => "specialty",
            Dimension::Location => "location",
            Dimension::City => "city",
        }
    }
}

/// A typed autocomplete entry, immutable once produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionItem {
    /// `{dimension-prefix}_{source-identifier}`, unique within one result list
    pub id: String,
    /// Human-readable label; the deduplication key across dimensions
    pub text: String,
    /// Dimension label, e.g. "Matériau"
    #[serde(rename = "type")]
    pub kind: String,
    pub icon: String,
}

impl SuggestionItem {
    pub fn new(dimension: Dimension, source: &str, text: impl Into<String>) -> Self {
        Self {
            id: format!("{}_{}", dimension.prefix(), source),
            text: text.into(),
            kind: dimension.label().to_string(),
            icon: dimension.icon().to_string(),
        }
    }
}

/// Deserialize a nullable field into its default
///
/// `#[serde(default)]` alone only covers absent fields; the backend also
/// serves explicit nulls for empty list columns.
fn null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Nested creator summary carried on denormalized creation rows
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatorSummary {
    #[serde(default, deserialize_with = "null_to_default")]
    pub display_name: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub business_name: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub location: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub specialties: Vec<String>,
}

/// A creation (product) row as served by the backend
///
/// List fields are nullable in the wire payload; they normalize to empty
/// at the deserialization boundary so the nullability never reaches the
/// extractors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreationRecord {
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub materials: Vec<String>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub category: String,
    #[serde(default)]
    pub creator: Option<CreatorSummary>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A creator (artisan) row as served by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatorRecord {
    pub id: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub display_name: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub business_name: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub location: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub specialties: Vec<String>,
    /// Present on the row but unused by suggestions
    #[serde(default, deserialize_with = "null_to_default")]
    pub verified: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Display label for a category code
///
/// Unknown codes fall back to the capitalized code so new backend
/// categories still render without a crate release.
pub fn category_label(code: &str) -> String {
    match code {
        "bijoux" => "Bijoux".to_string(),
        "poterie" => "Poterie".to_string(),
        "textile" => "Textile".to_string(),
        "bois" => "Bois".to_string(),
        "verre" => "Verre".to_string(),
        "cuir" => "Cuir".to_string(),
        "metal" => "Métal".to_string(),
        "papier" => "Papier".to_string(),
        other => {
            let mut chars = other.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        }
    }
}

/// Error types for gateway operations
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("network error: {0}")]
    Network(String),

    #[error("service error ({status}): {message}")]
    Service { status: u16, message: String },

    #[error("decode error: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            GatewayError::Decode(err.to_string())
        } else {
            GatewayError::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_parse() {
        assert_eq!(
            SuggestionDomain::parse("creations"),
            Some(SuggestionDomain::Creations)
        );
        assert_eq!(
            SuggestionDomain::parse("cities"),
            Some(SuggestionDomain::Cities)
        );
        assert_eq!(SuggestionDomain::parse("Creations"), None);
        assert_eq!(SuggestionDomain::parse(""), None);
    }

    #[test]
    fn test_item_id_composition() {
        let item = SuggestionItem::new(Dimension::Material, "argent", "argent");
        assert_eq!(item.id, "material_argent");
        assert_eq!(item.kind, "Matériau");
        assert_eq!(item.icon, Dimension::Material.icon());
    }

    #[test]
    fn test_item_serializes_kind_as_type() {
        let item = SuggestionItem::new(Dimension::City, "Paris", "Paris");
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "Ville");
        assert_eq!(json["id"], "city_Paris");
    }

    #[test]
    fn test_null_list_fields_normalize_to_empty() {
        let raw = r#"{
            "id": "creation-1",
            "title": "Bracelet en argent",
            "materials": null,
            "tags": null,
            "category": "bijoux"
        }"#;
        let record: CreationRecord = serde_json::from_str(raw).unwrap();
        assert!(record.materials.is_empty());
        assert!(record.tags.is_empty());
        assert!(record.creator.is_none());
    }

    #[test]
    fn test_category_label_fallback() {
        assert_eq!(category_label("bijoux"), "Bijoux");
        assert_eq!(category_label("metal"), "Métal");
        assert_eq!(category_label("ceramique"), "Ceramique");
        assert_eq!(category_label(""), "");
    }
}
