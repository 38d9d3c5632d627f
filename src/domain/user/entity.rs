//! User entity and related types

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Textual date as carried on user records and emitted events
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateText(String);

impl DateText {
    /// Sentinel produced for values that do not describe a date
    pub const INVALID: &'static str = "Invalid Date";

    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn invalid() -> Self {
        Self(Self::INVALID.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_invalid(&self) -> bool {
        self.0 == Self::INVALID
    }
}

impl std::fmt::Display for DateText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Role requested when creating a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    #[default]
    User,
}

impl Role {
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            other => Err(format!("Unknown role '{}', expected 'admin' or 'user'", other)),
        }
    }
}

/// Capability an acting admin may hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    Create,
    Update,
    Read,
    Delete,
}

impl Permission {
    pub fn all() -> Vec<Self> {
        vec![Self::Create, Self::Update, Self::Read, Self::Delete]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Read => "read",
            Self::Delete => "delete",
        }
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// User record
///
/// Field names serialize in camelCase to match the payloads existing event
/// consumers already parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Opaque identifier, assigned at creation and never reassigned
    pub id: String,
    pub name: String,
    pub email: String,
    pub is_admin: bool,
    pub created_at: DateText,
    pub expires_at: DateText,
}

/// Partial user used for shallow-merge updates
///
/// The identifier is not part of the patch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateText>,
}

impl UserPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_is_admin(mut self, is_admin: bool) -> Self {
        self.is_admin = Some(is_admin);
        self
    }

    /// Check whether the patch carries no fields
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.is_admin.is_none()
            && self.created_at.is_none()
            && self.expires_at.is_none()
    }

    /// Overwrite the fields of `base` present in this patch, one level deep
    pub fn apply_to(&self, base: &User) -> User {
        let mut merged = base.clone();

        if let Some(name) = &self.name {
            merged.name = name.clone();
        }
        if let Some(email) = &self.email {
            merged.email = email.clone();
        }
        if let Some(is_admin) = self.is_admin {
            merged.is_admin = is_admin;
        }
        if let Some(created_at) = &self.created_at {
            merged.created_at = created_at.clone();
        }
        if let Some(expires_at) = &self.expires_at {
            merged.expires_at = expires_at.clone();
        }

        merged
    }
}

/// Acting principal: a user annotated with the permissions it holds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Admin {
    #[serde(flatten)]
    user: User,
    #[serde(default)]
    permissions: HashSet<Permission>,
}

impl Admin {
    pub fn new(user: User, permissions: impl IntoIterator<Item = Permission>) -> Self {
        Self {
            user,
            permissions: permissions.into_iter().collect(),
        }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn id(&self) -> &str {
        &self.user.id
    }

    pub fn has_permission(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: "0a1b2c3d4e5f6a7b".to_string(),
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            is_admin: false,
            created_at: DateText::new("2024-0-1"),
            expires_at: DateText::new("2025-0-3"),
        }
    }

    #[test]
    fn test_user_serializes_camel_case() {
        let json = serde_json::to_value(sample_user()).unwrap();

        assert_eq!(json["isAdmin"], false);
        assert_eq!(json["createdAt"], "2024-0-1");
        assert_eq!(json["expiresAt"], "2025-0-3");
        assert!(json.get("is_admin").is_none());
    }

    #[test]
    fn test_empty_patch_keeps_fields() {
        let user = sample_user();
        let patch = UserPatch::new();

        assert!(patch.is_empty());
        assert_eq!(patch.apply_to(&user), user);
    }

    #[test]
    fn test_patch_overwrites_present_fields_only() {
        let user = sample_user();
        let patch = UserPatch::new()
            .with_email("alice@new.example.com")
            .with_is_admin(true);

        let merged = patch.apply_to(&user);

        assert_eq!(merged.id, user.id);
        assert_eq!(merged.name, "Alice");
        assert_eq!(merged.email, "alice@new.example.com");
        assert!(merged.is_admin);
        assert_eq!(merged.created_at, user.created_at);
    }

    #[test]
    fn test_patch_deserializes_partial_json() {
        let patch: UserPatch = serde_json::from_str(r#"{"name":"Bob"}"#).unwrap();

        assert_eq!(patch.name.as_deref(), Some("Bob"));
        assert!(patch.email.is_none());
        assert!(!patch.is_empty());
    }

    #[test]
    fn test_admin_permissions() {
        let admin = Admin::new(sample_user(), [Permission::Create, Permission::Read]);

        assert!(admin.has_permission(Permission::Create));
        assert!(admin.has_permission(Permission::Read));
        assert!(!admin.has_permission(Permission::Update));
        assert_eq!(admin.id(), "0a1b2c3d4e5f6a7b");
    }

    #[test]
    fn test_admin_deserializes_flattened() {
        let json = r#"{
            "id": "ff00ff00ff00ff00",
            "name": "Root",
            "email": "root@example.com",
            "isAdmin": true,
            "createdAt": "2024-0-1",
            "expiresAt": "2025-0-3",
            "permissions": ["create", "update"]
        }"#;

        let admin: Admin = serde_json::from_str(json).unwrap();

        assert!(admin.user().is_admin);
        assert!(admin.has_permission(Permission::Update));
        assert!(!admin.has_permission(Permission::Delete));
    }

    #[test]
    fn test_role_parsing() {
        assert_eq!("admin".parse::<Role>(), Ok(Role::Admin));
        assert_eq!("user".parse::<Role>(), Ok(Role::User));
        assert!("owner".parse::<Role>().is_err());
        assert!(Role::Admin.is_admin());
        assert!(!Role::User.is_admin());
    }

    #[test]
    fn test_date_text_sentinel() {
        assert!(DateText::invalid().is_invalid());
        assert!(!DateText::new("2024-0-1").is_invalid());
        assert_eq!(DateText::invalid().to_string(), "Invalid Date");
    }
}
