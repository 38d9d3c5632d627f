//! Event sink trait

use async_trait::async_trait;

use super::UserEventType;
use crate::domain::error::DomainError;
use crate::domain::user::User;

#[cfg(test)]
use mockall::automock;

/// Append side of the external event log
///
/// Ordering, persistence and delivery guarantees belong to the log.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait EventSink: Send + Sync {
    /// Appends an event carrying `payload`
    async fn add_event(&self, event_type: UserEventType, payload: &User) -> Result<(), DomainError>;
}
