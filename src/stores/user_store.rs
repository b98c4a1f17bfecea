use chrono::Utc;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::errors::ServiceError;
use crate::types::db::user;
use crate::types::db::Role;

const DUPLICATE_USERNAME: &str = "Username already exists. Pick another one.";

/// UserStore manages account rows in the embedded database
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Look up a user by username, case-insensitively
    ///
    /// # Returns
    /// * `Ok(Some(user))` - The matching row
    /// * `Ok(None)` - No user with that name
    /// * `Err(ServiceError::Database)` - Store failure
    pub async fn find_by_username(&self, username: &str) -> Result<Option<user::Model>, ServiceError> {
        user::Entity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(user::Column::Username)))
                    .eq(username.trim().to_lowercase()),
            )
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::database("find_user_by_username", e))
    }

    /// Insert a new user row
    ///
    /// Pre-checks the username for a friendlier message; the unique
    /// index on `username` remains the authoritative duplicate guard,
    /// and its violation is translated to the same Conflict error.
    ///
    /// # Arguments
    /// * `username` - Already-validated username (stored trimmed)
    /// * `password_hash` - Base64 digest from the credential hasher
    /// * `salt` - Base64 salt the digest was computed with
    /// * `role` - Role for the new account
    ///
    /// # Returns
    /// * `Ok(user::Model)` - The created row with its generated id
    /// * `Err(ServiceError::Conflict)` - Username already taken
    pub async fn insert_user(
        &self,
        username: &str,
        password_hash: &str,
        salt: &str,
        role: Role,
    ) -> Result<user::Model, ServiceError> {
        if self.find_by_username(username).await?.is_some() {
            return Err(ServiceError::conflict(DUPLICATE_USERNAME));
        }

        let new_user = user::ActiveModel {
            username: Set(username.trim().to_string()),
            password_hash: Set(password_hash.to_string()),
            salt: Set(salt.to_string()),
            role: Set(role),
            created_at: Set(Utc::now().timestamp()),
            ..Default::default()
        };

        new_user.insert(&self.db).await.map_err(|e| {
            if ServiceError::is_unique_violation(&e) {
                ServiceError::conflict(DUPLICATE_USERNAME)
            } else {
                ServiceError::database("insert_user", e)
            }
        })
    }
}
