//! Infrastructure layer - Collaborator implementations and services

pub mod event;
pub mod logging;
pub mod user;
