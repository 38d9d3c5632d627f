//! Event sink that writes events to the tracing output

use async_trait::async_trait;
use tracing::info;

use crate::domain::{DomainError, EventSink, User, UserEvent, UserEventType};

/// Log target for appended events, enabled at `info` by the default filter
pub const EVENT_LOG_TARGET: &str = "user_accounts::event";

/// Writes each event as a structured log line carrying its JSON form
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingEventSink;

impl LoggingEventSink {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EventSink for LoggingEventSink {
    async fn add_event(&self, event_type: UserEventType, payload: &User) -> Result<(), DomainError> {
        let event = UserEvent::new(event_type, payload.clone());
        let json = serde_json::to_string(&event)
            .map_err(|e| DomainError::internal(format!("Failed to serialize event: {}", e)))?;

        info!(
            target: EVENT_LOG_TARGET,
            event_type = %event_type,
            user_id = %payload.id,
            event = %json,
            "Event appended"
        );

        Ok(())
    }
}
