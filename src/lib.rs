//! User accounts
//!
//! Create and update user records with every mutation recorded on an
//! external event log, plus:
//! - Structural email validation
//! - Versioned date text for record timestamps
//! - Hexadecimal record identifiers from an injectable random source
//! - Role-based grouping of users

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::{
    group_by_role, Admin, DomainError, EventSink, Permission, Role, RoleGroups, User, UserPatch,
    UserRepository,
};
pub use infrastructure::user::{
    format_date, Enforcement, MutationOutcome, MutationPolicy, UserMutationService,
};
