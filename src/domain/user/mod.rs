//! User domain
//!
//! This module provides domain types for user accounts, including the user
//! entity, the acting admin principal, email validation, role grouping and
//! the lookup trait for the external user store.

mod entity;
mod grouping;
mod repository;
mod validation;

pub use entity::{Admin, DateText, Permission, Role, User, UserPatch};
pub use grouping::{group_by_role, RoleGroups};
pub use repository::UserRepository;
pub use validation::{validate_email, UserValidationError};
