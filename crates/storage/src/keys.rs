//! Fixed keys in the local key-value store.
//!
//! Each key holds one self-contained value; there is no namespacing or
//! enumeration. The names are part of the persisted format and must not
//! change without a migration.

/// Serialized `ProgressRecord` (JSON object of program id -> chapter id -> bool).
pub const PROGRESS: &str = "programProgress";

/// The session token issued at sign-in. Its presence means "signed in".
pub const TOKEN: &str = "token";

/// Serialized `CurrentUser` (JSON), cached so a reload needs no re-fetch.
pub const USER: &str = "user";

/// Free-text profile location, edited locally.
pub const USER_LOCATION: &str = "userLocation";

/// Free-text profile bio, edited locally.
pub const USER_BIO: &str = "userBio";

/// Every key the client owns, in sign-out clearing order.
pub const ALL: &[&str] = &[USER, TOKEN, USER_LOCATION, USER_BIO, PROGRESS];
