//! End-to-end session flows over a scripted backend.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use heartspace_core::model::{Session, SessionId, UserId};
use heartspace_core::time::fixed_clock;
use services::{ApiError, NewSession, SessionAction, SessionApi, SessionDirectory, classify};

/// In-memory stand-in for the backend session endpoints.
struct ScriptedApi {
    caller: UserId,
    sessions: Mutex<Vec<Session>>,
    next_id: Mutex<u64>,
}

impl ScriptedApi {
    fn new(caller: &str, sessions: Vec<Session>) -> Self {
        Self {
            caller: UserId::new(caller),
            sessions: Mutex::new(sessions),
            next_id: Mutex::new(100),
        }
    }

    fn rebuild(session: &Session, attendees: Vec<UserId>) -> Session {
        Session::new(
            session.id().clone(),
            session.title(),
            session.creator_id().clone(),
            session.date(),
            session.time(),
            session.max_attendees(),
            attendees,
        )
        .unwrap()
    }

    fn update<F>(&self, id: &SessionId, f: F) -> Result<Session, ApiError>
    where
        F: FnOnce(&Session) -> Vec<UserId>,
    {
        let mut sessions = self.sessions.lock().unwrap();
        let slot = sessions
            .iter_mut()
            .find(|s| s.id() == id)
            .ok_or_else(|| ApiError::Decode("no such session".to_owned()))?;
        *slot = Self::rebuild(slot, f(slot));
        Ok(slot.clone())
    }
}

#[async_trait]
impl SessionApi for ScriptedApi {
    async fn list(&self) -> Result<Vec<Session>, ApiError> {
        Ok(self.sessions.lock().unwrap().clone())
    }

    async fn create(&self, new: &NewSession) -> Result<Session, ApiError> {
        let mut next_id = self.next_id.lock().unwrap();
        let session = Session::new(
            SessionId::new(next_id.to_string()),
            new.title.clone(),
            self.caller.clone(),
            new.date.clone(),
            new.time.clone(),
            new.max_attendees,
            vec![],
        )
        .map_err(|e| ApiError::Decode(e.to_string()))?;
        *next_id += 1;
        self.sessions.lock().unwrap().push(session.clone());
        Ok(session)
    }

    async fn join(&self, id: &SessionId) -> Result<Session, ApiError> {
        self.update(id, |s| {
            let mut attendees = s.attendees().to_vec();
            if !s.has_attendee(&self.caller) {
                attendees.push(self.caller.clone());
            }
            attendees
        })
    }

    async fn leave(&self, id: &SessionId) -> Result<Session, ApiError> {
        self.update(id, |s| {
            s.attendees()
                .iter()
                .filter(|a| **a != self.caller)
                .cloned()
                .collect()
        })
    }

    async fn cancel(&self, id: &SessionId) -> Result<(), ApiError> {
        self.sessions.lock().unwrap().retain(|s| s.id() != id);
        Ok(())
    }
}

fn session(id: &str, creator: &str, date: &str, time: &str, max: u32, attendees: &[&str]) -> Session {
    Session::new(
        SessionId::new(id),
        "Healing Circle",
        UserId::new(creator),
        date,
        time,
        max,
        attendees.iter().map(|a| UserId::new(*a)).collect(),
    )
    .unwrap()
}

fn seeded() -> Vec<Session> {
    // The fixed clock reads 2025-03-14T01:20:00Z.
    vec![
        session("s-1", "host", "2025-03-20", "18:00", 10, &["me"]),
        session("s-2", "host", "2025-03-15", "10:00", 10, &["other"]),
        session("s-3", "me", "2025-03-14", "09:00", 10, &[]),
        session("s-4", "host", "2025-03-01", "18:00", 10, &["me"]),
        session("s-5", "host", "not-a-date", "18:00", 10, &["me"]),
    ]
}

fn directory(api: Arc<ScriptedApi>) -> SessionDirectory {
    SessionDirectory::new(api, fixed_clock())
}

#[tokio::test]
async fn upcoming_is_limited_to_the_soonest_involvement() {
    let dir = directory(Arc::new(ScriptedApi::new("me", seeded())));
    let me = UserId::new("me");

    let next = dir.upcoming(&me, 1).await.unwrap();
    assert_eq!(next.len(), 1);
    assert_eq!(next[0].id().as_str(), "s-3");

    let all = dir.upcoming(&me, 10).await.unwrap();
    let ids: Vec<_> = all.iter().map(|s| s.id().as_str()).collect();
    assert_eq!(ids, vec!["s-3", "s-1"]);
}

#[tokio::test]
async fn roster_orders_everything_with_malformed_last() {
    let dir = directory(Arc::new(ScriptedApi::new("me", seeded())));

    let roster = dir.roster().await.unwrap();
    let ids: Vec<_> = roster.iter().map(|s| s.id().as_str()).collect();
    assert_eq!(ids, vec!["s-4", "s-3", "s-2", "s-1", "s-5"]);
}

#[tokio::test]
async fn joining_then_leaving_updates_the_roster_view() {
    let api = Arc::new(ScriptedApi::new("me", seeded()));
    let dir = directory(api);
    let me = UserId::new("me");
    let target = SessionId::new("s-2");

    let joined = dir.join(&target).await.unwrap();
    assert!(joined.has_attendee(&me));
    let upcoming = dir.upcoming(&me, 10).await.unwrap();
    assert!(upcoming.iter().any(|s| s.id() == &target));

    let left = dir.leave(&target).await.unwrap();
    assert!(!left.has_attendee(&me));
    let upcoming = dir.upcoming(&me, 10).await.unwrap();
    assert!(!upcoming.iter().any(|s| s.id() == &target));
}

#[tokio::test]
async fn a_full_session_offers_no_seat_to_strangers() {
    let full = session("s-9", "host", "2025-03-20", "18:00", 2, &["a", "b"]);
    let api = Arc::new(ScriptedApi::new("me", vec![full]));
    let dir = directory(api);

    let roster = dir.roster().await.unwrap();
    let status = classify(&roster[0], &UserId::new("me"));
    assert_eq!(status.action(), SessionAction::Full);
    // An existing attendee still gets the leave action.
    assert_eq!(
        classify(&roster[0], &UserId::new("a")).action(),
        SessionAction::Leave
    );
}

#[tokio::test]
async fn created_sessions_show_up_as_hosted() {
    let api = Arc::new(ScriptedApi::new("me", vec![]));
    let dir = directory(api);
    let me = UserId::new("me");

    let created = dir
        .create(&NewSession {
            title: "Sunset Reflection".to_owned(),
            date: "2025-03-16".to_owned(),
            time: "19:30".to_owned(),
            max_attendees: 6,
        })
        .await
        .unwrap();
    assert_eq!(classify(&created, &me).action(), SessionAction::Hosting);

    let upcoming = dir.upcoming(&me, 10).await.unwrap();
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].title(), "Sunset Reflection");

    dir.cancel(created.id()).await.unwrap();
    assert!(dir.upcoming(&me, 10).await.unwrap().is_empty());
}
