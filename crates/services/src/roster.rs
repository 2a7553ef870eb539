//! Pure session-roster rules: which sessions a user sees, in what order,
//! and what action each one offers.
//!
//! Everything here is a function of its inputs. Time is always passed in
//! explicitly so callers can pin a `Clock` in tests.

use chrono::{DateTime, Utc};

use heartspace_core::model::{Session, UserId};

// ─── classification ──────────────────────────────────────────────────────────

/// A user's relationship to one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStatus {
    pub is_creator: bool,
    pub is_attending: bool,
    pub is_full: bool,
}

/// The single action a roster entry offers its viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    /// The viewer created this session; they manage it rather than join it.
    Hosting,
    /// The viewer is on the roster and may leave.
    Leave,
    /// Open seat available.
    Join,
    /// No seats left and the viewer is not on the roster.
    Full,
}

/// Computes the viewer's status for one session.
///
/// Fullness counts current attendees against capacity; the creator is not
/// implicitly an attendee.
#[must_use]
pub fn classify(session: &Session, viewer: &UserId) -> SessionStatus {
    SessionStatus {
        is_creator: session.creator_id() == viewer,
        is_attending: session.has_attendee(viewer),
        is_full: session.attendee_count() >= session.max_attendees() as usize,
    }
}

impl SessionAction {
    /// Button/badge label for the action.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Hosting => "Hosting",
            Self::Leave => "Leave",
            Self::Join => "Join",
            Self::Full => "Full",
        }
    }
}

impl SessionStatus {
    /// Resolves the status into the one action shown for the entry.
    ///
    /// Precedence is creator, then attending, then capacity: a creator of a
    /// full session still sees `Hosting`, and an attendee of a full session
    /// can still `Leave`.
    #[must_use]
    pub fn action(self) -> SessionAction {
        if self.is_creator {
            SessionAction::Hosting
        } else if self.is_attending {
            SessionAction::Leave
        } else if self.is_full {
            SessionAction::Full
        } else {
            SessionAction::Join
        }
    }
}

// ─── filtering and ordering ──────────────────────────────────────────────────

/// The viewer's upcoming involvements, soonest first.
///
/// Keeps only sessions that parse to a schedule strictly after `now` and
/// that the viewer either created or attends, then truncates to `limit`.
/// The sort is stable, so equal start times keep their fetch order.
#[must_use]
pub fn compute_upcoming(
    sessions: &[Session],
    viewer: &UserId,
    now: DateTime<Utc>,
    limit: usize,
) -> Vec<Session> {
    let mut involved: Vec<Session> = sessions
        .iter()
        .filter(|s| s.is_upcoming(now))
        .filter(|s| s.creator_id() == viewer || s.has_attendee(viewer))
        .cloned()
        .collect();
    involved.sort_by_key(Session::starts_at);
    involved.truncate(limit);
    involved
}

/// Every session ordered by start time, soonest first.
///
/// Sessions whose schedule fails to parse sort after all dated ones, in
/// their original relative order, so a malformed record is visible at the
/// bottom of the list instead of silently dropped.
#[must_use]
pub fn sort_all(sessions: &[Session]) -> Vec<Session> {
    let mut ordered: Vec<Session> = sessions.to_vec();
    // `None < Some(_)` for Option, so map missing schedules to the max key.
    ordered.sort_by_key(|s| match s.starts_at() {
        Some(at) => (0u8, Some(at)),
        None => (1, None),
    });
    ordered
}
