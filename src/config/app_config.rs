use serde::Deserialize;

use crate::infrastructure::user::MutationPolicy;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub users: MutationPolicy,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn,user_accounts::event=info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    /// Layered load: `config/default`, `config/local`, then `APP__*` variables
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::builder().build()?.try_deserialize()
    }

    fn builder() -> config::ConfigBuilder<config::builder::DefaultState> {
        config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Permission;
    use crate::infrastructure::user::{DateFormatVersion, Enforcement};

    fn from_toml(source: &str) -> AppConfig {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_defaults_reproduce_legacy_behaviour() {
        let config = AppConfig::default();

        assert_eq!(config.logging.level, "warn,user_accounts::event=info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert_eq!(config.users, MutationPolicy::default());
    }

    #[test]
    fn test_empty_source_uses_defaults() {
        let config = from_toml("");
        assert_eq!(config.users.id_length, 16);
    }

    #[test]
    fn test_users_section_overrides() {
        let config = from_toml(
            r#"
            [logging]
            level = "debug"
            format = "json"

            [users]
            enforcement = "reject"
            skip_unchanged = true
            update_permission = "update"
            id_length = 32
            date_format = "iso"
            "#,
        );

        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.users.enforcement, Enforcement::Reject);
        assert!(config.users.skip_unchanged);
        assert_eq!(config.users.update_permission, Permission::Update);
        assert_eq!(config.users.create_permission, Permission::Create);
        assert_eq!(config.users.id_length, 32);
        assert_eq!(config.users.date_format, DateFormatVersion::Iso);
    }
}
