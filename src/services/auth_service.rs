use std::sync::Arc;

use crate::errors::ServiceError;
use crate::services::{crypto, validation};
use crate::stores::UserStore;
use crate::types::db::{user, Role};

/// Authentication service that orchestrates registration and login
///
/// Coordinates the validation rules, the credential hasher, and the
/// user store. Returns identity values only; no session tokens are
/// issued, the caller keeps the returned `User` for the session.
pub struct AuthService {
    user_store: Arc<UserStore>,
}

impl AuthService {
    pub fn new(user_store: Arc<UserStore>) -> Self {
        Self { user_store }
    }

    /// Register a new student account
    ///
    /// Validates username and password together, reporting every
    /// violated rule at once, then hashes and inserts. Registration
    /// always produces the STUDENT role.
    ///
    /// # Arguments
    /// * `username` - Desired username; trimmed before validation
    /// * `password` - Plaintext password, hashed before storage
    ///
    /// # Returns
    /// * `Ok(user::Model)` - The created account with its generated id
    /// * `Err(ServiceError::Validation)` - One or more rules violated
    /// * `Err(ServiceError::Conflict)` - Username already taken
    ///   (case-insensitive)
    pub async fn register(&self, username: &str, password: &str) -> Result<user::Model, ServiceError> {
        let username = username.trim();

        let errors = validation::validate_credentials(username, password);
        if !errors.is_empty() {
            return Err(ServiceError::Validation(errors));
        }

        let salt = crypto::generate_salt();
        let password_hash = crypto::hash_password(password, &salt)?;

        let created = self
            .user_store
            .insert_user(username, &password_hash, &salt, Role::Student)
            .await?;

        tracing::info!(username = %created.username, "registered new student account");
        Ok(created)
    }

    /// Authenticate a login attempt
    ///
    /// Wrong credentials are signalled by absence, never by an error;
    /// only store failures are raised.
    ///
    /// # Returns
    /// * `Ok(Some(user))` - Credentials match
    /// * `Ok(None)` - Empty input, unknown username, or wrong password
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<user::Model>, ServiceError> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Ok(None);
        }

        let Some(user) = self.user_store.find_by_username(username).await? else {
            return Ok(None);
        };

        if crypto::verify_password(password, &user.salt, &user.password_hash)? {
            Ok(Some(user))
        } else {
            tracing::debug!(username = %username, "password mismatch on login attempt");
            Ok(None)
        }
    }
}
