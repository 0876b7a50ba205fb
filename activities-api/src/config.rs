use std::{path::Path, str::FromStr};

use serde::Deserialize;
use serde_with::serde_as;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode};
use strum::{Display, EnumString};

pub const DEFAULT_DATABASE_URL: &str = "sqlite://mergington.db";

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub database: DatabaseSettings,
}

#[serde_as]
#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub port: u16,
    pub host: String,
    /// Directory served under `/static`.
    pub static_dir: String,
    pub seed_fixtures: bool,
}

#[serde_as]
#[derive(Deserialize, Clone, Debug)]
pub struct DatabaseSettings {
    pub url: String,
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub max_connections: u32,
}

impl ApplicationSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseSettings {
    pub fn connect_options(&self) -> Result<SqliteConnectOptions, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(&self.url)?
            .create_if_missing(true)
            .foreign_keys(true)
            .busy_timeout(std::time::Duration::from_secs(5));

        if self.is_in_memory() {
            Ok(options)
        } else {
            Ok(options.journal_mode(SqliteJournalMode::Wal))
        }
    }

    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }
}

pub fn read_config() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");

    let environment = Environment::from_str(
        std::env::var("APP_ENVIRONMENT")
            .unwrap_or_else(|_| "local".into())
            .as_str(),
    )
    .map_err(|err| config::ConfigError::Message(format!("Failed to parse APP_ENVIRONMENT: {err}")))?;

    build_settings(
        &base_path.join("config"),
        environment,
        std::env::var("DATABASE_URL").ok(),
    )
}

/// Layer defaults, `base.yaml`, `{environment}.yaml`, `MERGINGTON_*`
/// variables and finally `database_url`, later sources winning.
fn build_settings(
    config_directory: &Path,
    environment: Environment,
    database_url: Option<String>,
) -> Result<Settings, config::ConfigError> {
    let environment_filename = format!("{}.yaml", environment);

    let settings = config::Config::builder()
        .set_default("application.host", "0.0.0.0")?
        .set_default("application.port", 8000)?
        .set_default("application.static_dir", "static")?
        .set_default("application.seed_fixtures", true)?
        .set_default("database.url", DEFAULT_DATABASE_URL)?
        .set_default("database.max_connections", 5)?
        .add_source(config::File::from(config_directory.join("base.yaml")).required(false))
        .add_source(
            config::File::from(config_directory.join(environment_filename)).required(false),
        )
        .add_source(
            config::Environment::with_prefix("MERGINGTON")
                .prefix_separator("_")
                .separator("__"),
        )
        .set_override_option("database.url", database_url)?
        .build()?;

    settings.try_deserialize::<Settings>()
}

#[derive(Display, Debug, EnumString)]
pub enum Environment {
    #[strum(ascii_case_insensitive, serialize = "local")]
    Local,
    #[strum(ascii_case_insensitive, serialize = "production")]
    Production,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_config_files() {
        let settings =
            build_settings(Path::new("does-not-exist"), Environment::Local, None).unwrap();

        assert_eq!(settings.application.port, 8000);
        assert_eq!(settings.application.static_dir, "static");
        assert!(settings.application.seed_fixtures);
        assert_eq!(settings.database.url, DEFAULT_DATABASE_URL);
        assert!(!settings.database.is_in_memory());
    }

    #[test]
    fn database_url_overrides_default() {
        let settings = build_settings(
            Path::new("does-not-exist"),
            Environment::Production,
            Some("sqlite::memory:".to_string()),
        )
        .unwrap();

        assert_eq!(settings.database.url, "sqlite::memory:");
        assert!(settings.database.is_in_memory());
    }

    #[test]
    fn environment_parses_case_insensitively() {
        assert!(matches!(
            Environment::from_str("Production"),
            Ok(Environment::Production)
        ));
        assert!(matches!(Environment::from_str("LOCAL"), Ok(Environment::Local)));
        assert!(Environment::from_str("staging").is_err());
        assert_eq!(Environment::Local.to_string(), "local");
    }

    #[test]
    fn connect_options_accept_default_url() {
        let settings = DatabaseSettings {
            url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: 5,
        };
        assert!(settings.connect_options().is_ok());
    }
}
