use std::collections::HashMap;

use iced::widget::image;
use komik_api::mangadex::covers;

/// State of a cover image for a given URL.
#[derive(Debug, Clone)]
pub enum CoverState {
    Loading,
    Loaded(image::Handle),
    Failed,
}

/// In-memory map from image URL to cover state. Lives for the whole
/// process; nothing touches disk.
#[derive(Debug, Default)]
pub struct CoverCache {
    states: HashMap<String, CoverState>,
}

impl CoverCache {
    pub fn get(&self, url: &str) -> Option<&CoverState> {
        self.states.get(url)
    }

    /// Mark unseen, non-empty URLs as loading and return them for download.
    pub fn claim<'a>(&mut self, urls: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        let mut claimed = Vec::new();
        for url in urls {
            if url.is_empty() || self.states.contains_key(url) {
                continue;
            }
            self.states.insert(url.to_string(), CoverState::Loading);
            claimed.push(url.to_string());
        }
        claimed
    }

    pub fn finish(&mut self, url: String, result: Result<Vec<u8>, String>) {
        let state = match result {
            Ok(bytes) => CoverState::Loaded(image::Handle::from_bytes(bytes)),
            Err(_) => CoverState::Failed,
        };
        self.states.insert(url, state);
    }
}

/// Download a cover into memory. Errors are stringified for `Message: Clone`.
pub async fn fetch_cover(
    http: reqwest::Client,
    url: String,
    user_agent: String,
) -> Result<Vec<u8>, String> {
    covers::fetch_cover(&http, &url, &user_agent)
        .await
        .map_err(|e| e.to_string())
}
