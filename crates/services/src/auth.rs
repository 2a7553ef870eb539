//! Account sign-up, sign-in, and the locally persisted identity.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use heartspace_core::model::CurrentUser;
use storage::{KeyValueStore, keys};

use crate::api::ApiClient;
use crate::error::AuthError;

#[derive(Debug, Serialize)]
struct SignUpBody<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct SignInBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct AuthResponse {
    token: String,
    user: CurrentUser,
}

/// Sign-up/sign-in against the backend, with the resulting token and user
/// snapshot persisted locally so later requests and restarts pick them up.
#[derive(Clone)]
pub struct AuthService {
    api: ApiClient,
    store: Arc<dyn KeyValueStore>,
}

impl AuthService {
    #[must_use]
    pub fn new(api: ApiClient, store: Arc<dyn KeyValueStore>) -> Self {
        Self { api, store }
    }

    /// Creates an account and signs in as it.
    ///
    /// # Errors
    ///
    /// `AuthError::Api` if the backend rejects the request (for example a
    /// duplicate email), `AuthError::Storage` if persisting the session
    /// fails.
    pub async fn sign_up(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<CurrentUser, AuthError> {
        let response: AuthResponse = self
            .api
            .post_json(
                "/auth/signup",
                &SignUpBody {
                    name,
                    email,
                    password,
                },
            )
            .await?;
        self.persist(response)
    }

    /// Signs in to an existing account.
    ///
    /// # Errors
    ///
    /// `AuthError::Api` on bad credentials, `AuthError::Storage` if
    /// persisting the session fails.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<CurrentUser, AuthError> {
        let response: AuthResponse = self
            .api
            .post_json("/auth/signin", &SignInBody { email, password })
            .await?;
        self.persist(response)
    }

    /// The locally persisted user, if any.
    ///
    /// A malformed stored snapshot is logged and treated as signed-out
    /// rather than surfaced; a corrupt value must never lock someone out of
    /// the sign-in screen.
    ///
    /// # Errors
    ///
    /// `AuthError::Storage` only if the store itself cannot be read.
    pub fn current_user(&self) -> Result<Option<CurrentUser>, AuthError> {
        let Some(raw) = self.store.get_item(keys::USER)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                warn!(error = %e, "stored user snapshot is malformed; treating as signed out");
                Ok(None)
            }
        }
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        matches!(self.store.get_item(keys::TOKEN), Ok(Some(_)))
    }

    /// Removes every locally owned key, including tracked progress.
    ///
    /// # Errors
    ///
    /// Returns the first removal failure; removal stops there so the
    /// caller can retry.
    pub fn sign_out(&self) -> Result<(), storage::StorageError> {
        for key in keys::ALL {
            self.store.remove_item(key)?;
        }
        Ok(())
    }

    fn persist(&self, response: AuthResponse) -> Result<CurrentUser, AuthError> {
        let user_json = serde_json::to_string(&response.user)
            .map_err(|e| storage::StorageError::Serialization(e.to_string()))?;
        self.store.set_item(keys::TOKEN, &response.token)?;
        self.store.set_item(keys::USER, &user_json)?;
        Ok(response.user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::MemoryStore;

    fn service_over(store: Arc<MemoryStore>) -> AuthService {
        let api = ApiClient::new("http://localhost:3000/api", store.clone());
        AuthService::new(api, store)
    }

    #[test]
    fn current_user_round_trips_through_the_store() {
        let store = Arc::new(MemoryStore::new());
        let service = service_over(store.clone());
        assert!(service.current_user().unwrap().is_none());
        assert!(!service.is_signed_in());

        store
            .set_item(
                keys::USER,
                r#"{"id":"u-1","name":"Maya Chen","email":"maya@example.com"}"#,
            )
            .unwrap();
        store.set_item(keys::TOKEN, "tok-1").unwrap();

        let user = service.current_user().unwrap().unwrap();
        assert_eq!(user.name, "Maya Chen");
        assert!(service.is_signed_in());
    }

    #[test]
    fn malformed_user_snapshot_reads_as_signed_out() {
        let store = Arc::new(MemoryStore::new());
        store.set_item(keys::USER, "{not json").unwrap();
        let service = service_over(store);
        assert!(service.current_user().unwrap().is_none());
    }

    #[test]
    fn sign_out_clears_every_owned_key() {
        let store = Arc::new(MemoryStore::new());
        for key in keys::ALL {
            store.set_item(key, "x").unwrap();
        }
        let service = service_over(store.clone());
        service.sign_out().unwrap();
        for key in keys::ALL {
            assert_eq!(store.get_item(key).unwrap(), None);
        }
    }
}
