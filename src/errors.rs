use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuditError {
    #[error("Failed to list buckets: {0}")]
    ListBuckets(String),

    #[error("Failed to read ACL for bucket '{bucket}': {reason}")]
    BucketAcl { bucket: String, reason: String },

    #[error("Failed to publish alert to '{topic_arn}': {reason}")]
    Publish { topic_arn: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Runtime error: {0}")]
    Runtime(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AuditError>;
