use std::env;

const DEFAULT_DATABASE_URL: &str = "sqlite://advisor.db?mode=rwc";

/// Application settings loaded from the environment
#[derive(Debug, Clone)]
pub struct Settings {
    database_url: String,
}

impl Settings {
    /// Load settings from environment variables, falling back to the
    /// local-file defaults of a single-user installation
    pub fn from_env() -> Self {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        Self { database_url }
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_database_url_points_at_local_file() {
        let settings = Settings {
            database_url: DEFAULT_DATABASE_URL.to_string(),
        };
        assert!(settings.database_url().starts_with("sqlite://"));
        assert!(settings.database_url().contains("mode=rwc"));
    }
}
