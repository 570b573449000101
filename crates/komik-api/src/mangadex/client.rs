use reqwest::Client;
use url::Url;

use super::error::MangaDexError;
use super::types::{MangaListResponse, MangaResource, COVER_ART};
use crate::http;
use crate::traits::{CatalogQuery, CatalogService};

pub const BASE_URL: &str = "https://api.mangadex.org/";

/// MangaDex REST client bound to a fixed base URL.
pub struct MangaDexClient {
    base_url: Url,
    http: Client,
}

impl MangaDexClient {
    /// Client using the process-wide shared HTTP client.
    pub fn new(base_url: &str) -> Result<Self, MangaDexError> {
        Self::with_http(http::shared_client(), base_url)
    }

    /// Client using an injected HTTP client.
    pub fn with_http(http: Client, base_url: &str) -> Result<Self, MangaDexError> {
        let mut base_url = Url::parse(base_url)?;
        // `Url::join` drops the last path segment unless the base ends in '/'.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self { base_url, http })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Check the HTTP response for errors and return the body text on failure.
    async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, MangaDexError> {
        if resp.status().is_success() {
            Ok(resp)
        } else {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(status, "MangaDex API error");
            Err(MangaDexError::Api {
                status,
                message: body,
            })
        }
    }

    /// `GET /manga` with cover art included.
    pub async fn list_manga(&self, query: &CatalogQuery) -> Result<Vec<MangaResource>, MangaDexError> {
        let url = self.base_url.join("manga")?;
        let params = query_pairs(query);
        tracing::debug!(%url, limit = query.limit, "fetching manga list");

        let resp = self.http.get(url).query(&params).send().await?;

        let resp = Self::check_response(resp).await?;
        let list: MangaListResponse = resp
            .json()
            .await
            .map_err(|e| MangaDexError::Parse(e.to_string()))?;

        tracing::debug!(
            count = list.data.len(),
            limit = ?list.limit,
            total = ?list.total,
            "manga list received"
        );
        Ok(list.data)
    }
}

impl CatalogService for MangaDexClient {
    type Error = MangaDexError;

    async fn fetch_catalog(&self, query: &CatalogQuery) -> Result<Vec<MangaResource>, MangaDexError> {
        self.list_manga(query).await
    }
}

/// Query string for a catalog request, in the order MangaDex documents them.
pub fn query_pairs(query: &CatalogQuery) -> Vec<(&'static str, String)> {
    vec![
        ("limit", query.limit.to_string()),
        ("includes[]", COVER_ART.to_string()),
        (query.sort.query_key(), "desc".to_string()),
        ("contentRating[]", query.content_rating.as_str().to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{ContentRating, SortOrder};

    #[test]
    fn test_default_query_pairs() {
        let pairs = query_pairs(&CatalogQuery::default());
        assert_eq!(
            pairs,
            vec![
                ("limit", "30".to_string()),
                ("includes[]", "cover_art".to_string()),
                ("order[followedCount]", "desc".to_string()),
                ("contentRating[]", "safe".to_string()),
            ]
        );
    }

    #[test]
    fn test_custom_query_pairs() {
        let query = CatalogQuery {
            limit: 10,
            sort: SortOrder::Rating,
            content_rating: ContentRating::Suggestive,
        };
        let pairs = query_pairs(&query);
        assert_eq!(pairs[0], ("limit", "10".to_string()));
        assert_eq!(pairs[2], ("order[rating]", "desc".to_string()));
        assert_eq!(pairs[3], ("contentRating[]", "suggestive".to_string()));
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let client = MangaDexClient::new("https://example.org/api").unwrap();
        assert_eq!(client.base_url().as_str(), "https://example.org/api/");
        assert_eq!(
            client.base_url().join("manga").unwrap().as_str(),
            "https://example.org/api/manga"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let err = MangaDexClient::new("not a url").err().unwrap();
        assert!(matches!(err, MangaDexError::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn test_transport_error_is_reported() {
        // Port 9 (discard) is closed on test machines; the connect fails fast.
        let client = MangaDexClient::new("http://127.0.0.1:9/").unwrap();
        let result = client.fetch_catalog(&CatalogQuery::default()).await;
        assert!(matches!(result, Err(MangaDexError::Http(_))));
    }
}
