//! Backend API access.
//!
//! SYSTEM CONTEXT
//! ==============
//! `PortalApi` is the seam between the portal view and the backend that owns
//! persistence. `http` implements it over REST; tests substitute an in-memory
//! double so loader and submission behavior can be checked without a network.

pub mod http;
pub mod types;

use async_trait::async_trait;

pub use http::HttpPortalApi;
use types::{Announcement, ApiError, Location, NewIssue, NewPost, Post, Representative, User};

/// Read and create operations the portal page needs from the backend.
#[async_trait]
pub trait PortalApi: Send + Sync {
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-2xx status, or a malformed body.
    async fn list_representatives(&self) -> Result<Vec<Representative>, ApiError>;

    /// # Errors
    ///
    /// See [`PortalApi::list_representatives`].
    async fn list_locations(&self) -> Result<Vec<Location>, ApiError>;

    /// # Errors
    ///
    /// See [`PortalApi::list_representatives`].
    async fn list_users(&self) -> Result<Vec<User>, ApiError>;

    /// # Errors
    ///
    /// See [`PortalApi::list_representatives`].
    async fn list_posts(&self) -> Result<Vec<Post>, ApiError>;

    /// # Errors
    ///
    /// See [`PortalApi::list_representatives`].
    async fn list_announcements(&self) -> Result<Vec<Announcement>, ApiError>;

    /// Create an issue via `POST /api/issues`.
    ///
    /// # Errors
    ///
    /// Any non-2xx response or transport failure.
    async fn create_issue(&self, issue: &NewIssue) -> Result<(), ApiError>;

    /// Create a post via `POST /api/posts`.
    ///
    /// # Errors
    ///
    /// Any non-2xx response or transport failure.
    async fn create_post(&self, post: &NewPost) -> Result<(), ApiError>;
}
