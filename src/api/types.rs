//! Wire DTOs for the backend API boundary.
//!
//! DESIGN
//! ======
//! Read-side entities mirror the backend's JSON (camelCase). Nested objects
//! such as a post's `user` are back-references supplied for display only and
//! are never edited here. Write-side requests are explicit typed structs built
//! by form validation, never loose JSON maps.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by backend API calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request could not be sent or the response body not read.
    #[error("API request failed: {0}")]
    Request(String),

    /// The backend returned a non-success HTTP status.
    #[error("API response error: status {status}")]
    Status { status: u16 },

    /// The response body could not be deserialized.
    #[error("API response parse failed: {0}")]
    Parse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// COLLECTIONS
// =============================================================================

/// The five read collections loaded when the portal view mounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Representatives,
    Locations,
    Users,
    Posts,
    Announcements,
}

impl Collection {
    #[cfg(test)]
    pub const ALL: [Collection; 5] =
        [Self::Representatives, Self::Locations, Self::Users, Self::Posts, Self::Announcements];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Representatives => "representatives",
            Self::Locations => "locations",
            Self::Users => "users",
            Self::Posts => "posts",
            Self::Announcements => "announcements",
        }
    }

    /// Backend path of the collection's list endpoint.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Representatives => "/api/representatives",
            Self::Locations => "/api/locations",
            Self::Users => "/api/users",
            Self::Posts => "/api/posts",
            Self::Announcements => "/api/announcements",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

pub const ISSUES_PATH: &str = "/api/issues";
pub const POSTS_PATH: &str = "/api/posts";

// =============================================================================
// READ ENTITIES
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
}

/// A government representative.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Representative {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    /// Free-text description of the representative's remit.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub responsibilities: String,
    /// Location the representative covers, when the backend joins it in.
    #[serde(default)]
    pub location: Option<Location>,
}

/// An activity update posted by a user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub content: Option<String>,
    /// Image reference; not validated as a URL.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Authoring user (display-only back-reference).
    #[serde(default)]
    pub user: Option<User>,
}

/// An announcement published by a representative.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,
    /// Authoring representative (display-only back-reference).
    #[serde(default)]
    pub representative: Option<Representative>,
}

// =============================================================================
// WRITE REQUESTS
// =============================================================================

/// Body of `POST /api/issues`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIssue {
    pub title: String,
    pub description: String,
    pub user_id: String,
    pub representative_id: String,
}

/// Body of `POST /api/posts`. Absent optional fields are omitted from the JSON.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub user_id: String,
}

/// Accept backend identifiers given either as JSON strings or integers.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(id) => Ok(id),
        serde_json::Value::Number(number) if number.is_i64() || number.is_u64() => Ok(number.to_string()),
        other => Err(D::Error::custom(format!("expected string or integer id, got {other}"))),
    }
}

/// Free text the backend may send as `null`; reads as empty.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
