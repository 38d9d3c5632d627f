//! Create command

use clap::Args;

use super::context::{cli_actor, print_json, CliContext};
use super::ActorArgs;
use crate::domain::Role;

#[derive(Args, Debug, Clone)]
pub struct CreateArgs {
    /// Display name
    #[arg(long)]
    pub name: String,

    /// Email address
    #[arg(long)]
    pub email: String,

    /// Role: admin or user
    #[arg(long, default_value = "user")]
    pub role: Role,

    #[command(flatten)]
    pub actor: ActorArgs,
}

pub async fn run(context: &CliContext, args: CreateArgs) -> anyhow::Result<()> {
    let actor = cli_actor(args.actor.resolved());

    let outcome = context
        .service
        .create_user(&actor, args.name, args.email, args.role)
        .await?;

    print_json(&outcome)
}
