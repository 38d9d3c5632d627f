//! In-memory event log

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use crate::domain::{DomainError, EventSink, User, UserEvent, UserEventType};

/// Append-only event log held in memory
#[derive(Debug, Default)]
pub struct InMemoryEventLog {
    events: RwLock<Vec<UserEvent>>,
    should_fail: AtomicBool,
}

impl InMemoryEventLog {
    /// Creates a new empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether appends should fail
    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::SeqCst);
    }

    /// Snapshot of all appended events, oldest first
    pub fn events(&self) -> Result<Vec<UserEvent>, DomainError> {
        let events = self
            .events
            .read()
            .map_err(|_| DomainError::internal("Failed to acquire lock"))?;

        Ok(events.clone())
    }

    /// Events of a single type, oldest first
    pub fn events_of(&self, event_type: UserEventType) -> Result<Vec<UserEvent>, DomainError> {
        Ok(self
            .events()?
            .into_iter()
            .filter(|e| e.event_type == event_type)
            .collect())
    }
}

#[async_trait]
impl EventSink for InMemoryEventLog {
    async fn add_event(&self, event_type: UserEventType, payload: &User) -> Result<(), DomainError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::event_log("Event log configured to fail"));
        }

        let mut events = self
            .events
            .write()
            .map_err(|_| DomainError::internal("Failed to acquire lock"))?;

        events.push(UserEvent::new(event_type, payload.clone()));
        Ok(())
    }
}
