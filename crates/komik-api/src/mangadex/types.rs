use serde::Deserialize;

use crate::localized::LocalizedText;

/// Relationship type that carries the cover file name.
pub const COVER_ART: &str = "cover_art";

// ── Manga list response (JSON:API envelope) ─────────────────────

#[derive(Debug, Deserialize)]
pub struct MangaListResponse {
    pub data: Vec<MangaResource>,
    pub limit: Option<u32>,
    pub total: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MangaResource {
    pub id: String,
    pub attributes: MangaAttributes,
    #[serde(default)]
    pub relationships: Vec<Relationship>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MangaAttributes {
    #[serde(default)]
    pub title: LocalizedText,
    pub status: Option<String>,
    pub description: Option<LocalizedText>,
    pub tags: Option<Vec<MangaTag>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MangaTag {
    pub attributes: TagAttributes,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TagAttributes {
    #[serde(default)]
    pub name: LocalizedText,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Relationship {
    #[serde(rename = "type")]
    pub kind: String,
    pub attributes: Option<CoverAttributes>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CoverAttributes {
    #[serde(rename = "fileName")]
    pub file_name: Option<String>,
}

impl MangaResource {
    /// File name carried by the first `cover_art` relationship.
    pub fn cover_file_name(&self) -> Option<&str> {
        self.relationships
            .iter()
            .find(|r| r.kind == COVER_ART)?
            .attributes
            .as_ref()?
            .file_name
            .as_deref()
    }
}
