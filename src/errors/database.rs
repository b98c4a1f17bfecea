use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    /// The embedded engine could not be reached or provisioned. Fatal
    /// at startup; surfaced as "service unavailable" in flight.
    #[error("Database unavailable: {source}")]
    Connect {
        #[source]
        source: sea_orm::DbErr,
    },

    #[error("Database error: {operation} failed: {source}")]
    Operation {
        operation: String,
        #[source]
        source: sea_orm::DbErr,
    },
}
