//! Update command

use clap::Args;

use super::context::{cli_actor, print_json, CliContext};
use super::ActorArgs;
use crate::domain::UserPatch;

#[derive(Args, Debug, Clone)]
pub struct UpdateArgs {
    /// ID of the stored user
    #[arg(long)]
    pub id: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    /// New admin flag
    #[arg(long)]
    pub admin: Option<bool>,

    #[command(flatten)]
    pub actor: ActorArgs,
}

impl UpdateArgs {
    pub fn patch(&self) -> UserPatch {
        UserPatch {
            name: self.name.clone(),
            email: self.email.clone(),
            is_admin: self.admin,
            ..UserPatch::default()
        }
    }
}

pub async fn run(context: &CliContext, args: UpdateArgs) -> anyhow::Result<()> {
    let actor = cli_actor(args.actor.resolved());

    let outcome = context
        .service
        .update_user(&actor, &args.id, args.patch())
        .await?;

    print_json(&outcome)
}
