pub mod base;
pub mod log_sink;
pub mod memory_sink;
pub mod null_sink;

// Re-export the primary Sink items so code outside can do
// "use crate::sinks::{Sink, create_sink};"
pub use base::{create_sink, Sink};
