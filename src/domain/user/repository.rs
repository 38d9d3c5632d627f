//! User repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::User;
use crate::domain::DomainError;

/// Lookup side of the external user store
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Get a user by its ID, failing with `NotFound` when absent
    async fn get_by_id(&self, id: &str) -> Result<User, DomainError>;

    /// List all users known to the store
    async fn list(&self) -> Result<Vec<User>, DomainError>;
}
