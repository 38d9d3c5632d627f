//! Event sink implementations

mod in_memory;
mod logging_sink;

pub use in_memory::InMemoryEventLog;
pub use logging_sink::{LoggingEventSink, EVENT_LOG_TARGET};
