pub mod base;
pub mod sql_tracker;

// Re-export the primary tracker items so code outside can do
// "use crate::trackers::{create_tracker, Tracker};".
pub use base::{create_tracker, Tracker, TrackerConfig};
