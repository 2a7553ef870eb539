use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use thiserror::Error;

use crate::model::ids::{SessionId, UserId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("session title cannot be empty")]
    EmptyTitle,

    #[error("max attendees must be > 0")]
    InvalidMaxAttendees,
}

/// A scheduled group event with a capacity and an attendee roster.
///
/// Sessions are fetched from the backend and treated as a read-only snapshot
/// for the duration of one render cycle; they are never cached locally. The
/// date and time come over the wire as the form-input strings the backend
/// stores (`YYYY-MM-DD` and `HH:MM`), so combining them can fail for
/// user-created records and callers must tolerate that per session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    id: SessionId,
    title: String,
    creator_id: UserId,
    date: String,
    time: String,
    max_attendees: u32,
    attendees: Vec<UserId>,
}

impl Session {
    /// Creates a new Session snapshot.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyTitle` for a blank title and
    /// `SessionError::InvalidMaxAttendees` for a zero capacity. The date and
    /// time strings are accepted as-is; schedule parsing is deferred to
    /// [`Session::starts_at`].
    pub fn new(
        id: SessionId,
        title: impl Into<String>,
        creator_id: UserId,
        date: impl Into<String>,
        time: impl Into<String>,
        max_attendees: u32,
        attendees: Vec<UserId>,
    ) -> Result<Self, SessionError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(SessionError::EmptyTitle);
        }
        if max_attendees == 0 {
            return Err(SessionError::InvalidMaxAttendees);
        }

        Ok(Self {
            id,
            title: title.trim().to_owned(),
            creator_id,
            date: date.into(),
            time: time.into(),
            max_attendees,
            attendees,
        })
    }

    #[must_use]
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn creator_id(&self) -> &UserId {
        &self.creator_id
    }

    /// Scheduled date as stored, `YYYY-MM-DD`.
    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Scheduled time as stored, `HH:MM` (seconds optional).
    #[must_use]
    pub fn time(&self) -> &str {
        &self.time
    }

    #[must_use]
    pub fn max_attendees(&self) -> u32 {
        self.max_attendees
    }

    #[must_use]
    pub fn attendees(&self) -> &[UserId] {
        &self.attendees
    }

    #[must_use]
    pub fn attendee_count(&self) -> usize {
        self.attendees.len()
    }

    #[must_use]
    pub fn has_attendee(&self, user: &UserId) -> bool {
        self.attendees.iter().any(|a| a == user)
    }

    /// Combines the date and time fields into a single comparable timestamp.
    ///
    /// Returns `None` when either field fails to parse; a malformed record
    /// must never abort a whole listing, so there is no error type here.
    /// Times are interpreted as UTC.
    #[must_use]
    pub fn starts_at(&self) -> Option<DateTime<Utc>> {
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok()?;
        let time = self.time.trim();
        let time = NaiveTime::parse_from_str(time, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M:%S"))
            .ok()?;
        Some(date.and_time(time).and_utc())
    }

    /// True if the session starts strictly after `now`.
    ///
    /// A session with an unparseable schedule is never upcoming.
    #[must_use]
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.starts_at().is_some_and(|at| at > now)
    }
}
