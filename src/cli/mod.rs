//! CLI module for user-accounts
//!
//! Runs user mutations against an in-memory store seeded from a JSON file,
//! with events written to the log output:
//! - `create`: create a user
//! - `update`: shallow-merge fields over a stored user
//! - `group`: partition stored users by role

pub mod context;
pub mod create;
pub mod group;
pub mod update;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::Permission;

/// user-accounts - Create, update and group user records
#[derive(Parser)]
#[command(name = "user-accounts")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// JSON file holding an array of users to seed the store with
    #[arg(long, global = true, env = "USER_ACCOUNTS_USERS")]
    pub users: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create a user and emit a UserCreated event
    Create(create::CreateArgs),

    /// Update a stored user and emit a UserUpdated event
    Update(update::UpdateArgs),

    /// Print stored users grouped by role
    Group,
}

/// Permissions held by the acting admin
#[derive(Args, Debug, Clone)]
pub struct ActorArgs {
    /// Permission granted to the actor, repeatable; all permissions when omitted
    #[arg(long = "permission", value_parser = parse_permission)]
    pub permissions: Vec<Permission>,
}

impl ActorArgs {
    pub fn resolved(&self) -> Vec<Permission> {
        if self.permissions.is_empty() {
            Permission::all()
        } else {
            self.permissions.clone()
        }
    }
}

fn parse_permission(value: &str) -> Result<Permission, String> {
    match value {
        "create" => Ok(Permission::Create),
        "update" => Ok(Permission::Update),
        "read" => Ok(Permission::Read),
        "delete" => Ok(Permission::Delete),
        other => Err(format!(
            "Unknown permission '{}', expected create, update, read or delete",
            other
        )),
    }
}

/// Dispatch a parsed command line
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let context = context::CliContext::prepare(cli.users.as_deref()).await?;

    match cli.command {
        Command::Create(args) => create::run(&context, args).await,
        Command::Update(args) => update::run(&context, args).await,
        Command::Group => group::run(&context).await,
    }
}
