pub mod config;
pub mod csvio;
pub mod headers;
pub mod output;
pub mod summary;

// Re-export main types for easy access
pub use headers::{AuditStatus, HeaderAuditRow, REQUIRED_TOKENS};
pub use summary::{AuditSummary, CategoryCounts};
