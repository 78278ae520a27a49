//! Minimal client for The Metropolitan Museum of Art collection API.
//!
//! This crate provides a focused client for the public objects endpoint:
//! - Fetch a single object record by numeric id
//! - Typed records with the fields the discovery flow cares about
//!
//! The API requires no authentication. Missing attributes come back as
//! empty strings rather than nulls, so every string field defaults to
//! empty on deserialization.

use serde::Deserialize;
use thiserror::Error;

const API_BASE: &str = "https://collectionapi.metmuseum.org/public/collection/v1";

/// Errors that can occur when fetching a record.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),
}

/// Met collection API client.
#[derive(Debug, Clone)]
pub struct MetClient {
    client: reqwest::Client,
    base_url: String,
}

impl MetClient {
    /// Create a new client against the public collection endpoint.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .connect_timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("Failed to build HTTP client"),
            base_url: API_BASE.to_string(),
        }
    }

    /// Point the client at a different base URL (local test servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch a single object record by id.
    ///
    /// One outbound request per call; retry policy belongs to the caller.
    pub async fn fetch_object(&self, id: u32) -> Result<ArtObject, Error> {
        let url = format!("{}/objects/{id}", self.base_url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api {
                status,
                message: body,
            });
        }

        response
            .json::<ArtObject>()
            .await
            .map_err(|e| Error::Parse(e.to_string()))
    }
}

impl Default for MetClient {
    fn default() -> Self {
        Self::new()
    }
}

/// One artwork record from the collection.
///
/// Only the fields the discovery flow uses are kept; the API sends many
/// more, which serde ignores.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ArtObject {
    #[serde(rename = "objectID")]
    pub object_id: u32,
    pub title: String,
    #[serde(rename = "primaryImage")]
    pub primary_image: String,
    #[serde(rename = "artistDisplayName")]
    pub artist_display_name: String,
    pub culture: String,
    pub department: String,
    #[serde(rename = "objectDate")]
    pub object_date: String,
    pub medium: String,
    #[serde(rename = "objectURL")]
    pub object_url: String,
}

impl ArtObject {
    /// Whether the record carries a primary image. Records without one
    /// are never displayable.
    pub fn has_image(&self) -> bool {
        !self.primary_image.is_empty()
    }

    /// Title for display, falling back to "Untitled".
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            "Untitled"
        } else {
            &self.title
        }
    }
}
