//! Wires the service layer together over one store, one API client, and one
//! clock, so the presentation layer has a single assembly point.

use std::sync::Arc;

use heartspace_core::Clock;
use heartspace_core::model::Catalog;
use storage::{KeyValueStore, ProgressStore};

use crate::api::ApiClient;
use crate::auth::AuthService;
use crate::community::CommunityService;
use crate::error::AppServicesError;
use crate::gallery::GalleryService;
use crate::profile::ProfileService;
use crate::progress_tracker::ProgressTracker;
use crate::sessions::{HttpSessionApi, SessionDirectory};

/// Everything the app needs, constructed once at startup.
pub struct AppServices {
    auth: AuthService,
    community: CommunityService,
    gallery: GalleryService,
    profile: ProfileService,
    sessions: SessionDirectory,
    tracker: ProgressTracker,
}

impl AppServices {
    /// Assembles the full service graph.
    ///
    /// # Errors
    ///
    /// `AppServicesError::Progress` if the persisted progress record cannot
    /// be read from the store.
    pub fn new(
        base_url: impl Into<String>,
        store: Arc<dyn KeyValueStore>,
        clock: Clock,
    ) -> Result<Self, AppServicesError> {
        let api = ApiClient::new(base_url, store.clone());
        let catalog = Arc::new(Catalog::builtin());
        let tracker = ProgressTracker::load(catalog, ProgressStore::new(store.clone()))?;

        Ok(Self {
            auth: AuthService::new(api.clone(), store.clone()),
            community: CommunityService::new(api.clone()),
            gallery: GalleryService::new(api.clone()),
            profile: ProfileService::new(store),
            sessions: SessionDirectory::new(Arc::new(HttpSessionApi::new(api)), clock),
            tracker,
        })
    }

    #[must_use]
    pub fn auth(&self) -> &AuthService {
        &self.auth
    }

    #[must_use]
    pub fn community(&self) -> &CommunityService {
        &self.community
    }

    #[must_use]
    pub fn gallery(&self) -> &GalleryService {
        &self.gallery
    }

    #[must_use]
    pub fn profile(&self) -> &ProfileService {
        &self.profile
    }

    #[must_use]
    pub fn sessions(&self) -> &SessionDirectory {
        &self.sessions
    }

    #[must_use]
    pub fn tracker(&self) -> &ProgressTracker {
        &self.tracker
    }

    #[must_use]
    pub fn tracker_mut(&mut self) -> &mut ProgressTracker {
        &mut self.tracker
    }

    /// Signs out and resets local progress in one step.
    ///
    /// # Errors
    ///
    /// Propagates the first storage failure; keys already removed stay
    /// removed.
    pub fn sign_out(&mut self) -> Result<(), AppServicesError> {
        self.auth.sign_out()?;
        self.tracker.reset()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heartspace_core::model::{ChapterId, ProgramId};
    use heartspace_core::time::fixed_clock;
    use storage::MemoryStore;

    #[test]
    fn assembles_over_a_fresh_store() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let services =
            AppServices::new("http://localhost:3000/api", store, fixed_clock()).unwrap();

        assert!(!services.auth().is_signed_in());
        assert_eq!(services.tracker().completed_chapter_count(), 0);
        assert_eq!(services.tracker().catalog().len(), 3);
    }

    #[test]
    fn sign_out_wipes_progress_too() {
        let store = Arc::new(MemoryStore::new());
        let mut services = AppServices::new(
            "http://localhost:3000/api",
            store.clone() as Arc<dyn KeyValueStore>,
            fixed_clock(),
        )
        .unwrap();

        services
            .tracker_mut()
            .complete(ProgramId::new(1), &ChapterId::new("ew-1"))
            .unwrap();
        store.set_item(storage::keys::TOKEN, "tok").unwrap();

        services.sign_out().unwrap();
        assert!(!services.auth().is_signed_in());
        assert_eq!(services.tracker().completed_chapter_count(), 0);
        assert_eq!(store.get_item(storage::keys::PROGRESS).unwrap(), None);
    }
}
