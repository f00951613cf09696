//! REST implementation of [`PortalApi`] over `reqwest`.
//!
//! ERROR HANDLING
//! ==============
//! Any non-2xx status is an error regardless of body; callers only distinguish
//! success from failure, so the status code is carried for logs and nothing
//! else.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::PortalApi;
use super::types::{
    Announcement, ApiError, Collection, ISSUES_PATH, Location, NewIssue, NewPost, POSTS_PATH, Post, Representative,
    User,
};
use crate::config::ApiTimeouts;

pub struct HttpPortalApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpPortalApi {
    /// Build a client rooted at `base_url` (trailing `/` ignored).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::HttpClientBuild`] if the TLS backend cannot initialize.
    pub fn new(base_url: &str, timeouts: ApiTimeouts) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| ApiError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_string() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_collection<T: DeserializeOwned>(&self, collection: Collection) -> Result<Vec<T>, ApiError> {
        let response = self
            .http
            .get(self.url(collection.path()))
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { status: status.as_u16() });
        }
        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        let items: Vec<T> = serde_json::from_slice(&body).map_err(|e| ApiError::Parse(e.to_string()))?;
        debug!(%collection, count = items.len(), "collection fetched");
        Ok(items)
    }

    async fn post_json(&self, path: &str, body: &impl Serialize) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { status: status.as_u16() });
        }
        Ok(())
    }
}

#[async_trait]
impl PortalApi for HttpPortalApi {
    async fn list_representatives(&self) -> Result<Vec<Representative>, ApiError> {
        self.get_collection(Collection::Representatives).await
    }

    async fn list_locations(&self) -> Result<Vec<Location>, ApiError> {
        self.get_collection(Collection::Locations).await
    }

    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.get_collection(Collection::Users).await
    }

    async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        self.get_collection(Collection::Posts).await
    }

    async fn list_announcements(&self) -> Result<Vec<Announcement>, ApiError> {
        self.get_collection(Collection::Announcements).await
    }

    async fn create_issue(&self, issue: &NewIssue) -> Result<(), ApiError> {
        self.post_json(ISSUES_PATH, issue).await
    }

    async fn create_post(&self, post: &NewPost) -> Result<(), ApiError> {
        self.post_json(POSTS_PATH, post).await
    }
}

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;
