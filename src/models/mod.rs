pub mod payload;
pub mod report;

// Re-export the wire models so code outside can do "use crate::models::ReportRequest;".
pub use payload::RequestPayload;
pub use report::{ReportRequest, SqlQuery};
