//! Library exports for statotron, shared between the binary and tests.

pub mod config;
pub mod models;
pub mod routes;
pub mod sinks;
pub mod startup;
pub mod state;
pub mod stats;
pub mod trackers;
pub mod utils;
