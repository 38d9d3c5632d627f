//! Group command

use super::context::{print_json, CliContext};
use crate::domain::{group_by_role, UserRepository};

pub async fn run(context: &CliContext) -> anyhow::Result<()> {
    let users = context.repository.list().await?;
    print_json(&group_by_role(users))
}
