// Shared fixtures for integration tests
#![allow(dead_code)]

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection};

use program_advisor::app_data::AppData;
use program_advisor::services::crypto;
use program_advisor::types::db::{user, Role};

/// Create an isolated in-memory database with the full schema
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    db.execute_unprepared("PRAGMA foreign_keys = ON;")
        .await
        .expect("Failed to enable foreign keys");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Create an isolated AppData over a fresh in-memory database
pub async fn setup_app() -> AppData {
    AppData::new(setup_test_db().await)
}

/// Insert an account with the given role and return the row
pub async fn create_actor(app: &AppData, username: &str, password: &str, role: Role) -> user::Model {
    let salt = crypto::generate_salt();
    let password_hash = crypto::hash_password(password, &salt).expect("Failed to hash password");
    app.user_store
        .insert_user(username, &password_hash, &salt, role)
        .await
        .expect("Failed to insert actor")
}

pub async fn admin_actor(app: &AppData) -> user::Model {
    create_actor(app, "admin", "admin#123", Role::Admin).await
}

pub async fn student_actor(app: &AppData) -> user::Model {
    create_actor(app, "student", "student#123", Role::Student).await
}
