//! Admin service configuration.

use std::env;

use common::{DatabaseConfig, ServiceConfig};

/// Admin service configuration.
#[derive(Debug, Clone)]
pub struct AdminServiceConfig {
    /// Service name and default log level
    pub service: ServiceConfig,
    /// Database connection settings
    pub database: DatabaseConfig,
    /// Apply pending migrations on connect
    pub run_migrations: bool,
}

impl AdminServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup, falling back to defaults.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let parse = |key: &str| lookup(key).and_then(|v| v.parse().ok());

        Self {
            service: ServiceConfig {
                log_level: lookup("SALESSAVVY_LOG_LEVEL").unwrap_or(defaults.service.log_level),
                ..defaults.service
            },
            database: DatabaseConfig {
                url: lookup("SALESSAVVY_DATABASE_URL")
                    .or_else(|| lookup("DATABASE_URL"))
                    .unwrap_or(defaults.database.url),
                max_connections: parse("SALESSAVVY_DB_MAX_CONNECTIONS")
                    .unwrap_or(defaults.database.max_connections),
                min_connections: parse("SALESSAVVY_DB_MIN_CONNECTIONS")
                    .unwrap_or(defaults.database.min_connections),
            },
            run_migrations: lookup("SALESSAVVY_RUN_MIGRATIONS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.run_migrations),
        }
    }

    /// Replace the database URL, keeping pool settings.
    pub fn with_database_url(mut self, url: impl Into<String>) -> Self {
        self.database.url = url.into();
        self
    }
}

impl Default for AdminServiceConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                service_name: "salessavvy-admin".to_string(),
                ..ServiceConfig::default()
            },
            database: DatabaseConfig::default(),
            run_migrations: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> AdminServiceConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AdminServiceConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_prefixed_database_url_wins() {
        let config = load(&[
            ("SALESSAVVY_DATABASE_URL", "postgres://admin@db/sales"),
            ("DATABASE_URL", "postgres://other@db/other"),
        ]);
        assert_eq!(config.database.url, "postgres://admin@db/sales");
    }

    #[test]
    fn test_falls_back_to_database_url() {
        let config = load(&[("DATABASE_URL", "postgres://other@db/other")]);
        assert_eq!(config.database.url, "postgres://other@db/other");
    }

    #[test]
    fn test_pool_and_migration_settings_from_vars() {
        let config = load(&[
            ("SALESSAVVY_DB_MAX_CONNECTIONS", "3"),
            ("SALESSAVVY_DB_MIN_CONNECTIONS", "1"),
            ("SALESSAVVY_RUN_MIGRATIONS", "false"),
            ("SALESSAVVY_LOG_LEVEL", "debug"),
        ]);
        assert_eq!(config.database.max_connections, 3);
        assert_eq!(config.database.min_connections, 1);
        assert!(!config.run_migrations);
        assert_eq!(config.service.log_level, "debug");
    }

    #[test]
    fn test_unparsable_numbers_keep_defaults() {
        let config = load(&[("SALESSAVVY_DB_MAX_CONNECTIONS", "many")]);
        assert_eq!(
            config.database.max_connections,
            AdminServiceConfig::default().database.max_connections
        );
    }

    #[test]
    fn test_default_config() {
        let config = AdminServiceConfig::default();
        assert_eq!(config.service.service_name, "salessavvy-admin");
        assert_eq!(config.service.log_level, "info");
        assert!(config.database.url.starts_with("postgres://"));
        assert!(config.run_migrations);
    }

    #[test]
    fn test_with_database_url_keeps_pool_settings() {
        let config = AdminServiceConfig::default().with_database_url("sqlite::memory:");
        assert_eq!(config.database.url, "sqlite::memory:");
        assert_eq!(config.database.max_connections, 10);
    }
}
