use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::stores::{CatalogStore, UserStore};

/// Centralized application data following the main-owned stores pattern
///
/// All stores are created once from a single connection and shared via
/// `Arc`; services extract what they need. No process-wide statics, so
/// tests can build isolated instances per case.
pub struct AppData {
    pub db: DatabaseConnection,
    pub user_store: Arc<UserStore>,
    pub catalog_store: Arc<CatalogStore>,
}

impl AppData {
    /// Build stores over an already-connected, already-migrated database
    pub fn new(db: DatabaseConnection) -> Self {
        let user_store = Arc::new(UserStore::new(db.clone()));
        let catalog_store = Arc::new(CatalogStore::new(db.clone()));
        Self {
            db,
            user_store,
            catalog_store,
        }
    }
}
