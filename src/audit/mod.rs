pub mod auditor;
pub mod classify;
pub mod models;
pub mod report;

pub use auditor::BucketAuditor;
pub use classify::{alert_entries, alert_message, classify_grants};
pub use models::{AccessGrant, AuditReport, BucketDescriptor, BucketFinding, BucketInspection};
