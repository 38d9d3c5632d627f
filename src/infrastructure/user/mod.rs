//! User infrastructure module
//!
//! This module provides the pieces behind user mutations: date formatting,
//! identifier generation, the clock, an in-memory repository and the
//! mutation service.

mod clock;
mod date_format;
mod id_generator;
mod repository;
mod service;

pub use clock::{Clock, FixedClock, SystemClock};
pub use date_format::{format_date, one_year_after, DateFormatVersion, DateFormatter, DateInput};
pub use id_generator::{HexIdGenerator, IdGenerator, DEFAULT_ID_LENGTH};
pub use repository::InMemoryUserRepository;
pub use service::{Enforcement, MutationOutcome, MutationPolicy, UserMutationService};
