// Configuration layer - environment settings, database, logging

pub mod database;
pub mod logging;
pub mod settings;

pub use settings::Settings;
