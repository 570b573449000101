use komik_api::mangadex::types::MangaResource;
use komik_api::LocalizedText;
use serde::{Deserialize, Serialize};

/// Publication status of a title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PublicationStatus {
    Ongoing,
    Completed,
    #[default]
    Unknown,
}

impl PublicationStatus {
    /// Map an API status string. Anything other than ongoing/completed
    /// (hiatus, cancelled, missing) is `Unknown`.
    pub fn from_api_str(s: &str) -> Self {
        if s.eq_ignore_ascii_case("ongoing") {
            Self::Ongoing
        } else if s.eq_ignore_ascii_case("completed") {
            Self::Completed
        } else {
            Self::Unknown
        }
    }

    pub fn is_ongoing(self) -> bool {
        self == Self::Ongoing
    }
}

/// Hand-curated fields for pinned titles. Each one, when set, wins over
/// the value derived from API data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualOverride {
    pub image_url: Option<String>,
    pub rating: Option<String>,
    pub synopsis: Option<String>,
    pub genres: Option<Vec<String>>,
}

/// One manga title in the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub id: String,
    pub title: LocalizedText,
    pub status: PublicationStatus,
    pub description: Option<LocalizedText>,
    /// Localized tag names in API order.
    pub tags: Option<Vec<LocalizedText>>,
    /// File name from the first `cover_art` relationship.
    pub cover_file_name: Option<String>,
    pub manual: ManualOverride,
}

impl CatalogRecord {
    /// A pinned record with a single English title.
    pub fn pinned(id: &str, title: &str, status: PublicationStatus, manual: ManualOverride) -> Self {
        Self {
            id: id.to_string(),
            title: LocalizedText::from_pairs([("en", title)]),
            status,
            manual,
            ..Default::default()
        }
    }
}

impl From<MangaResource> for CatalogRecord {
    fn from(resource: MangaResource) -> Self {
        let cover_file_name = resource.cover_file_name().map(str::to_string);
        let attrs = resource.attributes;
        Self {
            id: resource.id,
            title: attrs.title,
            status: attrs
                .status
                .as_deref()
                .map(PublicationStatus::from_api_str)
                .unwrap_or_default(),
            description: attrs.description,
            tags: attrs
                .tags
                .map(|tags| tags.into_iter().map(|t| t.attributes.name).collect()),
            cover_file_name,
            manual: ManualOverride::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(PublicationStatus::from_api_str("ongoing"), PublicationStatus::Ongoing);
        assert_eq!(PublicationStatus::from_api_str("Ongoing"), PublicationStatus::Ongoing);
        assert_eq!(PublicationStatus::from_api_str("completed"), PublicationStatus::Completed);
        assert_eq!(PublicationStatus::from_api_str("hiatus"), PublicationStatus::Unknown);
        assert_eq!(PublicationStatus::from_api_str("cancelled"), PublicationStatus::Unknown);
    }

    #[test]
    fn test_from_manga_resource() {
        let json = r#"{
            "id": "123",
            "attributes": {
                "title": { "en": "Frieren" },
                "status": "completed",
                "description": { "en": "After the party defeats the Demon King..." },
                "tags": [
                    { "attributes": { "name": { "en": "Fantasy" } } },
                    { "attributes": { "name": { "ja": "冒険" } } }
                ]
            },
            "relationships": [
                { "type": "cover_art", "attributes": { "fileName": "abc" } }
            ]
        }"#;
        let resource: MangaResource = serde_json::from_str(json).unwrap();
        let record = CatalogRecord::from(resource);

        assert_eq!(record.id, "123");
        assert_eq!(record.title.get("en"), Some("Frieren"));
        assert_eq!(record.status, PublicationStatus::Completed);
        assert_eq!(record.cover_file_name.as_deref(), Some("abc"));
        let tags = record.tags.unwrap();
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].get("en"), Some("Fantasy"));
        assert_eq!(record.manual, ManualOverride::default());
    }

    #[test]
    fn test_missing_status_is_unknown() {
        let json = r#"{ "id": "x", "attributes": { "title": { "en": "T" } } }"#;
        let resource: MangaResource = serde_json::from_str(json).unwrap();
        assert_eq!(CatalogRecord::from(resource).status, PublicationStatus::Unknown);
    }
}
