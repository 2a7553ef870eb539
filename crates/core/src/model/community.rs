use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ids::UserId;

/// Author attribution embedded in posts, artworks and comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: UserId,
    pub name: String,
}

/// A community feed post, fetched from the backend and never mutated locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    pub user: Author,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// A like on an artwork. Only the liker's identity matters to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkLike {
    pub user_id: UserId,
}

/// A comment attached to an artwork.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtworkComment {
    pub user: Author,
    pub content: String,
}

/// A gallery artwork with its likes and comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artwork {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub image_url: String,
    pub user: Author,
    #[serde(default)]
    pub likes: Vec<ArtworkLike>,
    #[serde(default)]
    pub comments: Vec<ArtworkComment>,
}

impl Artwork {
    /// True if the given user has already liked this artwork.
    #[must_use]
    pub fn liked_by(&self, user: &UserId) -> bool {
        self.likes.iter().any(|like| &like.user_id == user)
    }
}
