#![forbid(unsafe_code)]

pub mod api;
pub mod app_services;
pub mod auth;
pub mod community;
pub mod error;
pub mod gallery;
pub mod profile;
pub mod progress_tracker;
pub mod roster;
pub mod sessions;

pub use heartspace_core::Clock;

pub use api::ApiClient;
pub use app_services::AppServices;
pub use auth::AuthService;
pub use community::CommunityService;
pub use error::{ApiError, AppServicesError, AuthError, ProgressError};
pub use gallery::{GalleryService, NewArtwork};
pub use profile::{ProfileService, ProfileStats};
pub use progress_tracker::{ProgramSummary, ProgressTracker};
pub use roster::{SessionAction, SessionStatus, classify, compute_upcoming, sort_all};
pub use sessions::{HttpSessionApi, NewSession, SessionApi, SessionDirectory};
