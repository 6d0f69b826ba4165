pub mod request_stat;

// Re-export from request_stat.rs so we can do "use crate::stats::RequestStat;".
pub use request_stat::RequestStat;
