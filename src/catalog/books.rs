//! Public books API client (volume search)

use serde::Deserialize;

use crate::Result;

/// Default books API base URL
pub const DEFAULT_BOOKS_URL: &str = "https://www.googleapis.com/books/v1/volumes";

/// Query behind the curated textbook shelf on the library page
const CURATED_QUERY: &str = "ncert textbook";

/// One volume record
#[derive(Debug, Clone, Deserialize)]
pub struct Volume {
    pub id: String,
    #[serde(rename = "volumeInfo", default)]
    pub volume_info: VolumeInfo,
}

/// Volume metadata
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VolumeInfo {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "pageCount", default)]
    pub page_count: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
struct VolumeList {
    #[serde(default)]
    items: Vec<Volume>,
}

/// Client for the public books API
///
/// Searches return an empty `Vec` on failure; detail lookups return `None`.
/// Failures are logged, never surfaced.
pub struct BooksClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl BooksClient {
    /// Create a client against `base_url`, optionally authenticated
    #[must_use]
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key,
        }
    }

    /// Search volumes matching `query`
    pub async fn search(&self, query: &str) -> Vec<Volume> {
        let url = self.query_url(query);
        match self.fetch::<VolumeList>(&url).await {
            Ok(list) => list.items,
            Err(e) => {
                tracing::warn!(error = %e, query, "book search failed, returning empty");
                Vec::new()
            }
        }
    }

    /// The curated textbook shelf
    pub async fn curated(&self) -> Vec<Volume> {
        self.search(CURATED_QUERY).await
    }

    /// Full record for one volume, or None if the fetch fails
    pub async fn details(&self, volume_id: &str) -> Option<Volume> {
        let mut url = format!("{}/{volume_id}", self.base_url);
        if let Some(key) = &self.api_key {
            url.push_str(&format!("?key={key}"));
        }
        match self.fetch(&url).await {
            Ok(volume) => Some(volume),
            Err(e) => {
                tracing::warn!(error = %e, volume_id, "volume fetch failed");
                None
            }
        }
    }

    fn query_url(&self, query: &str) -> String {
        let mut url = format!("{}?q={}", self.base_url, urlencoding::encode(query));
        if let Some(key) = &self.api_key {
            url.push_str(&format!("&key={key}"));
        }
        url
    }

    async fn fetch<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.json::<T>().await?)
    }
}
