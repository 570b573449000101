//! Trait definitions for manga catalog services.
//!
//! The catalog loader and UI only talk to a `CatalogService`, so the
//! MangaDex client can be swapped for a fake in tests.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::mangadex::types::MangaResource;

/// A read-only manga catalog source.
pub trait CatalogService: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch one page of the catalog. Single round trip, no retry.
    fn fetch_catalog(
        &self,
        query: &CatalogQuery,
    ) -> impl Future<Output = Result<Vec<MangaResource>, Self::Error>> + Send;
}

/// Parameters for a catalog request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    pub limit: u32,
    pub sort: SortOrder,
    pub content_rating: ContentRating,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            limit: 30,
            sort: SortOrder::default(),
            content_rating: ContentRating::default(),
        }
    }
}

/// Server-side ordering of catalog results. Always descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    FollowedCount,
    Rating,
    LatestUploadedChapter,
    CreatedAt,
}

impl SortOrder {
    /// MangaDex `order[...]` query key.
    pub fn query_key(self) -> &'static str {
        match self {
            Self::FollowedCount => "order[followedCount]",
            Self::Rating => "order[rating]",
            Self::LatestUploadedChapter => "order[latestUploadedChapter]",
            Self::CreatedAt => "order[createdAt]",
        }
    }
}

/// Content rating filter sent with catalog requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentRating {
    #[default]
    Safe,
    Suggestive,
    Erotica,
}

impl ContentRating {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::Suggestive => "suggestive",
            Self::Erotica => "erotica",
        }
    }
}

impl std::fmt::Display for ContentRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
