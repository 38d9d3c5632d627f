//! Role-based partitioning of users

use serde::{Deserialize, Serialize};

use super::entity::User;

/// Users split by their admin flag
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleGroups {
    pub admin: Vec<User>,
    pub user: Vec<User>,
}

impl RoleGroups {
    pub fn len(&self) -> usize {
        self.admin.len() + self.user.len()
    }

    pub fn is_empty(&self) -> bool {
        self.admin.is_empty() && self.user.is_empty()
    }
}

/// Partition users by `is_admin`, keeping input order within each bucket
pub fn group_by_role(users: impl IntoIterator<Item = User>) -> RoleGroups {
    users
        .into_iter()
        .fold(RoleGroups::default(), |mut groups, user| {
            if user.is_admin {
                groups.admin.push(user);
            } else {
                groups.user.push(user);
            }
            groups
        })
}
