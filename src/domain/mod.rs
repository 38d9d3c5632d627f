//! Domain layer - Core business logic and entities

pub mod error;
pub mod event;
pub mod user;

pub use error::DomainError;
pub use event::{EventSink, UserEvent, UserEventType};
pub use user::{
    group_by_role, validate_email, Admin, DateText, Permission, Role, RoleGroups, User,
    UserPatch, UserRepository, UserValidationError,
};
