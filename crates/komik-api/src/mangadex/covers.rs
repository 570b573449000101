//! Cover image URLs and downloads.
//!
//! The upload host rejects requests without a browser-like user agent, so
//! cover downloads override the API user agent per request.

use reqwest::header;
use reqwest::Client;

use super::error::MangaDexError;

pub const COVER_BASE_URL: &str = "https://uploads.mangadex.org/covers";

/// User agent sent with cover downloads unless configured otherwise.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0";

/// Thumbnail URL: `{base}/{manga_id}/{file_name}.256.jpg`.
pub fn cover_url(base: &str, manga_id: &str, file_name: &str) -> String {
    format!(
        "{}/{manga_id}/{file_name}.256.jpg",
        base.trim_end_matches('/')
    )
}

/// Download a cover image into memory.
pub async fn fetch_cover(
    http: &Client,
    url: &str,
    user_agent: &str,
) -> Result<Vec<u8>, MangaDexError> {
    let resp = http
        .get(url)
        .header(header::USER_AGENT, user_agent)
        .send()
        .await?;

    if !resp.status().is_success() {
        let status = resp.status().as_u16();
        tracing::debug!(status, url, "cover download rejected");
        return Err(MangaDexError::Api {
            status,
            message: format!("cover download failed: {url}"),
        });
    }

    let bytes = resp.bytes().await?;
    Ok(bytes.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cover_url_pattern() {
        assert_eq!(
            cover_url(COVER_BASE_URL, "123", "abc"),
            "https://uploads.mangadex.org/covers/123/abc.256.jpg"
        );
    }

    #[test]
    fn test_cover_url_trims_trailing_slash() {
        assert_eq!(
            cover_url("https://img.example/covers/", "m", "f.png"),
            "https://img.example/covers/m/f.png.256.jpg"
        );
    }

    #[tokio::test]
    async fn test_fetch_cover_transport_error() {
        let http = Client::new();
        let result = fetch_cover(&http, "http://127.0.0.1:9/covers/x/y.256.jpg", BROWSER_USER_AGENT).await;
        assert!(matches!(result, Err(MangaDexError::Http(_))));
    }
}
