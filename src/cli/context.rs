//! Shared setup for CLI commands

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use crate::config::AppConfig;
use crate::domain::{Admin, DateText, Permission, User};
use crate::infrastructure::event::LoggingEventSink;
use crate::infrastructure::logging;
use crate::infrastructure::user::{InMemoryUserRepository, UserMutationService};

/// Service wired for command-line use
pub type CliService = UserMutationService<InMemoryUserRepository, LoggingEventSink>;

pub struct CliContext {
    pub repository: Arc<InMemoryUserRepository>,
    pub service: CliService,
}

impl CliContext {
    /// Load configuration, start logging and seed the store
    pub async fn prepare(users: Option<&Path>) -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = AppConfig::load().context("Failed to load configuration")?;
        logging::init_logging(&config.logging)?;
        config.users.validate()?;

        let seed = match users {
            Some(path) => load_users(path)?,
            None => Vec::new(),
        };
        info!(count = seed.len(), "User store seeded");

        let repository = Arc::new(InMemoryUserRepository::with_users(seed));
        let service = UserMutationService::new(repository.clone(), Arc::new(LoggingEventSink::new()))
            .with_policy(config.users);

        Ok(Self {
            repository,
            service,
        })
    }
}

/// Read a JSON array of users
pub fn load_users(path: &Path) -> anyhow::Result<Vec<User>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read users from {}", path.display()))?;

    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse users from {}", path.display()))
}

/// The acting admin for a CLI invocation
pub fn cli_actor(permissions: Vec<Permission>) -> Admin {
    let user = User {
        id: "cli".to_string(),
        name: "Command line".to_string(),
        email: "cli@localhost.localdomain".to_string(),
        is_admin: true,
        created_at: DateText::invalid(),
        expires_at: DateText::invalid(),
    };
    Admin::new(user, permissions)
}

/// Print a value as pretty JSON on stdout
pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
