//! Art gallery: browsing, uploading, likes, and comments.

use reqwest::multipart::{Form, Part};
use serde::Serialize;

use heartspace_core::model::Artwork;

use crate::api::ApiClient;
use crate::error::ApiError;

#[derive(Debug, Serialize)]
struct NewCommentBody<'a> {
    content: &'a str,
}

/// An image upload with its caption fields.
#[derive(Debug, Clone)]
pub struct NewArtwork {
    pub title: String,
    pub description: Option<String>,
    pub file_name: String,
    pub image: Vec<u8>,
}

/// The gallery endpoints.
#[derive(Clone)]
pub struct GalleryService {
    api: ApiClient,
}

impl GalleryService {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn artworks(&self) -> Result<Vec<Artwork>, ApiError> {
        self.api.get_json("/artworks").await
    }

    /// Uploads a new artwork as a multipart form and returns the stored
    /// record.
    pub async fn upload(&self, new: NewArtwork) -> Result<Artwork, ApiError> {
        let mut form = Form::new()
            .text("title", new.title)
            .part("image", Part::bytes(new.image).file_name(new.file_name));
        if let Some(description) = new.description {
            form = form.text("description", description);
        }
        self.api.post_multipart("/artworks", form).await
    }

    /// Toggles the caller's like; the backend returns the updated artwork.
    pub async fn toggle_like(&self, artwork_id: u64) -> Result<Artwork, ApiError> {
        self.api
            .post_empty(&format!("/artworks/{artwork_id}/like"))
            .await
    }

    /// Adds a comment and returns the updated artwork.
    pub async fn comment(&self, artwork_id: u64, content: &str) -> Result<Artwork, ApiError> {
        self.api
            .post_json(
                &format!("/artworks/{artwork_id}/comments"),
                &NewCommentBody { content },
            )
            .await
    }
}
