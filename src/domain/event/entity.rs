//! User event entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::user::User;

/// Types of mutation recorded on the event log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserEventType {
    /// A user record was created
    UserCreated,
    /// A user record was updated
    UserUpdated,
}

impl UserEventType {
    /// Returns the event type as it appears on the log
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UserCreated => "UserCreated",
            Self::UserUpdated => "UserUpdated",
        }
    }
}

impl std::fmt::Display for UserEventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An event as appended to the log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserEvent {
    pub event_type: UserEventType,
    pub payload: User,
    pub occurred_at: DateTime<Utc>,
}

impl UserEvent {
    pub fn new(event_type: UserEventType, payload: User) -> Self {
        Self {
            event_type,
            payload,
            occurred_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::DateText;

    #[test]
    fn test_event_type_wire_names() {
        assert_eq!(
            serde_json::to_string(&UserEventType::UserCreated).unwrap(),
            "\"UserCreated\""
        );
        assert_eq!(UserEventType::UserUpdated.to_string(), "UserUpdated");
    }

    #[test]
    fn test_event_serialization() {
        let user = User {
            id: "abc".to_string(),
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            is_admin: true,
            created_at: DateText::new("2024-0-1"),
            expires_at: DateText::new("2025-0-3"),
        };

        let json = serde_json::to_value(UserEvent::new(UserEventType::UserCreated, user)).unwrap();

        assert_eq!(json["eventType"], "UserCreated");
        assert_eq!(json["payload"]["isAdmin"], true);
        assert!(json["occurredAt"].is_string());
    }
}
