//! Profile extras kept on the device, plus derived profile statistics.

use std::sync::Arc;

use heartspace_core::model::{Artwork, Session, UserId};
use storage::{KeyValueStore, StorageError, keys};

use crate::progress_tracker::ProgressTracker;

/// Headline numbers shown on the profile page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileStats {
    pub active_programs: usize,
    pub completed_chapters: usize,
    pub sessions_hosted: usize,
    pub artworks_shared: usize,
}

impl ProfileStats {
    /// Derives the stats from current progress plus remote snapshots.
    #[must_use]
    pub fn compute(
        tracker: &ProgressTracker,
        sessions: &[Session],
        artworks: &[Artwork],
        user: &UserId,
    ) -> Self {
        Self {
            active_programs: tracker.active_program_count(),
            completed_chapters: tracker.completed_chapter_count(),
            sessions_hosted: sessions
                .iter()
                .filter(|s| s.creator_id() == user)
                .count(),
            artworks_shared: artworks.iter().filter(|a| &a.user.id == user).count(),
        }
    }
}

/// Free-text profile fields (location, bio) persisted only on the device.
///
/// These never go to the backend; clearing a field removes its key so an
/// unset field and a never-set field are indistinguishable.
#[derive(Clone)]
pub struct ProfileService {
    store: Arc<dyn KeyValueStore>,
}

impl ProfileService {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn location(&self) -> Result<Option<String>, StorageError> {
        self.store.get_item(keys::USER_LOCATION)
    }

    pub fn set_location(&self, location: &str) -> Result<(), StorageError> {
        self.set_or_remove(keys::USER_LOCATION, location)
    }

    pub fn bio(&self) -> Result<Option<String>, StorageError> {
        self.store.get_item(keys::USER_BIO)
    }

    pub fn set_bio(&self, bio: &str) -> Result<(), StorageError> {
        self.set_or_remove(keys::USER_BIO, bio)
    }

    fn set_or_remove(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let value = value.trim();
        if value.is_empty() {
            self.store.remove_item(key)
        } else {
            self.store.set_item(key, value)
        }
    }
}
