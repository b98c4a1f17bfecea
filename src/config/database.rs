use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection};

use crate::config::Settings;
use crate::errors::{DatabaseError, ServiceError};

/// Connect to the embedded database
///
/// # Returns
/// * `Ok(DatabaseConnection)` - Connection established
/// * `Err(ServiceError::Database)` - Engine unreachable or
///   mis-provisioned; fatal at startup
pub async fn connect(settings: &Settings) -> Result<DatabaseConnection, ServiceError> {
    let db = Database::connect(settings.database_url())
        .await
        .map_err(|e| DatabaseError::Connect { source: e })?;

    enable_foreign_keys(&db).await?;

    tracing::debug!(url = settings.database_url(), "connected to database");
    Ok(db)
}

/// SQLite enforces foreign keys only when opted in per connection.
pub async fn enable_foreign_keys(db: &DatabaseConnection) -> Result<(), ServiceError> {
    db.execute_unprepared("PRAGMA foreign_keys = ON;")
        .await
        .map_err(|e| ServiceError::database("enable_foreign_keys", e))?;
    Ok(())
}

/// Bring the schema up to date
pub async fn migrate(db: &DatabaseConnection) -> Result<(), ServiceError> {
    Migrator::up(db, None)
        .await
        .map_err(|e| ServiceError::database("migrate", e))?;

    tracing::debug!("database migrations completed");
    Ok(())
}
