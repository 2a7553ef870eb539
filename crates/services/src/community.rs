//! Community feed: newest-first posts plus sharing.

use serde::Serialize;

use heartspace_core::model::Post;

use crate::api::ApiClient;
use crate::error::ApiError;

#[derive(Debug, Serialize)]
struct NewPostBody<'a> {
    content: &'a str,
}

/// The community feed endpoints.
#[derive(Clone)]
pub struct CommunityService {
    api: ApiClient,
}

impl CommunityService {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Fetches the feed, newest first.
    ///
    /// The backend returns posts in insertion order; ordering is applied
    /// here so the caller never has to care.
    pub async fn feed(&self) -> Result<Vec<Post>, ApiError> {
        let mut posts: Vec<Post> = self.api.get_json("/posts").await?;
        newest_first(&mut posts);
        Ok(posts)
    }

    /// Shares a new post and returns the stored record.
    pub async fn share(&self, content: &str) -> Result<Post, ApiError> {
        self.api.post_json("/posts", &NewPostBody { content }).await
    }
}

fn newest_first(posts: &mut [Post]) {
    posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
