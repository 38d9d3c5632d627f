//! User event domain module for mutation records sent to the event log

mod entity;
mod sink;

pub use entity::*;
pub use sink::*;
