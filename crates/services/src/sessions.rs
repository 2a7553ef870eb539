//! Remote group sessions: wire decoding, the backend endpoints, and the
//! `SessionDirectory` facade that applies the roster rules to fresh fetches.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use heartspace_core::Clock;
use heartspace_core::model::{Session, SessionId, UserId};

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::roster;

// ─── wire shapes ─────────────────────────────────────────────────────────────

/// Ids arrive as JSON numbers from the seeded backend and as strings for
/// user-created rows; both normalize to strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawId {
    Num(u64),
    Str(String),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            Self::Num(n) => n.to_string(),
            Self::Str(s) => s,
        }
    }
}

/// Attendee entries are plain ids in most responses but `{"userId": ...}`
/// objects in a couple of older ones.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum AttendeeDto {
    Plain(RawId),
    Keyed {
        #[serde(rename = "userId")]
        user_id: RawId,
    },
}

impl AttendeeDto {
    fn into_user_id(self) -> UserId {
        match self {
            Self::Plain(id) | Self::Keyed { user_id: id } => UserId::new(id.into_string()),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionDto {
    id: RawId,
    title: String,
    creator_id: RawId,
    #[serde(default)]
    date: String,
    #[serde(default)]
    time: String,
    max_attendees: u32,
    #[serde(default)]
    attendees: Vec<AttendeeDto>,
}

impl SessionDto {
    /// Validates one wire record into a domain `Session`.
    ///
    /// Returns `None` (after logging) for records that fail domain
    /// validation; one bad row must not sink a whole listing.
    fn into_session(self) -> Option<Session> {
        let id = self.id.into_string();
        match Session::new(
            SessionId::new(id.clone()),
            self.title,
            UserId::new(self.creator_id.into_string()),
            self.date,
            self.time,
            self.max_attendees,
            self.attendees
                .into_iter()
                .map(AttendeeDto::into_user_id)
                .collect(),
        ) {
            Ok(session) => Some(session),
            Err(e) => {
                warn!(session = %id, error = %e, "dropping invalid session record");
                None
            }
        }
    }
}

fn decode_sessions(dtos: Vec<SessionDto>) -> Vec<Session> {
    dtos.into_iter().filter_map(SessionDto::into_session).collect()
}

/// Payload for creating a session.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSession {
    pub title: String,
    pub date: String,
    pub time: String,
    pub max_attendees: u32,
}

// ─── backend endpoints ───────────────────────────────────────────────────────

/// The session endpoints of the backend, behind a trait so the directory
/// can be exercised against a scripted implementation in tests.
#[async_trait]
pub trait SessionApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Session>, ApiError>;
    async fn create(&self, new: &NewSession) -> Result<Session, ApiError>;
    async fn join(&self, id: &SessionId) -> Result<Session, ApiError>;
    async fn leave(&self, id: &SessionId) -> Result<Session, ApiError>;
    async fn cancel(&self, id: &SessionId) -> Result<(), ApiError>;
}

/// `SessionApi` over the real backend.
#[derive(Clone)]
pub struct HttpSessionApi {
    api: ApiClient,
}

impl HttpSessionApi {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl SessionApi for HttpSessionApi {
    async fn list(&self) -> Result<Vec<Session>, ApiError> {
        let dtos: Vec<SessionDto> = self.api.get_json("/sessions").await?;
        Ok(decode_sessions(dtos))
    }

    async fn create(&self, new: &NewSession) -> Result<Session, ApiError> {
        let dto: SessionDto = self.api.post_json("/sessions", new).await?;
        dto.into_session()
            .ok_or_else(|| ApiError::Decode("created session failed validation".to_owned()))
    }

    async fn join(&self, id: &SessionId) -> Result<Session, ApiError> {
        let dto: SessionDto = self
            .api
            .post_empty(&format!("/sessions/{}/join", id.as_str()))
            .await?;
        dto.into_session()
            .ok_or_else(|| ApiError::Decode("joined session failed validation".to_owned()))
    }

    async fn leave(&self, id: &SessionId) -> Result<Session, ApiError> {
        let dto: SessionDto = self
            .api
            .post_empty(&format!("/sessions/{}/leave", id.as_str()))
            .await?;
        dto.into_session()
            .ok_or_else(|| ApiError::Decode("left session failed validation".to_owned()))
    }

    async fn cancel(&self, id: &SessionId) -> Result<(), ApiError> {
        self.api.delete(&format!("/sessions/{}", id.as_str())).await
    }
}

// ─── directory ───────────────────────────────────────────────────────────────

/// Read-through facade over the session endpoints.
///
/// Every view starts from a fresh fetch; nothing is cached between calls,
/// so a failed fetch leaves the caller's previous data untouched.
pub struct SessionDirectory {
    api: Arc<dyn SessionApi>,
    clock: Clock,
}

impl SessionDirectory {
    #[must_use]
    pub fn new(api: Arc<dyn SessionApi>, clock: Clock) -> Self {
        Self { api, clock }
    }

    fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// The full roster, soonest first, malformed schedules last.
    pub async fn roster(&self) -> Result<Vec<Session>, ApiError> {
        let sessions = self.api.list().await?;
        Ok(roster::sort_all(&sessions))
    }

    /// The viewer's next `limit` upcoming involvements.
    pub async fn upcoming(
        &self,
        viewer: &UserId,
        limit: usize,
    ) -> Result<Vec<Session>, ApiError> {
        let sessions = self.api.list().await?;
        Ok(roster::compute_upcoming(&sessions, viewer, self.now(), limit))
    }

    pub async fn create(&self, new: &NewSession) -> Result<Session, ApiError> {
        self.api.create(new).await
    }

    pub async fn join(&self, id: &SessionId) -> Result<Session, ApiError> {
        self.api.join(id).await
    }

    pub async fn leave(&self, id: &SessionId) -> Result<Session, ApiError> {
        self.api.leave(id).await
    }

    pub async fn cancel(&self, id: &SessionId) -> Result<(), ApiError> {
        self.api.cancel(id).await
    }
}
