use serde::Serialize;

/// Grantee URI identifying unauthenticated public access
pub const ALL_USERS_URI: &str = "http://acs.amazonaws.com/groups/global/AllUsers";

/// Subject line used for every alert
pub const ALERT_SUBJECT: &str = "AWS S3 Security Alert";

/// Prefix of the alert body, followed by the comma-joined bucket names
pub const ALERT_MESSAGE_PREFIX: &str = "Public S3 Buckets Detected: ";

/// A bucket as returned by the listing call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketDescriptor {
    pub name: String,
    /// Region the bucket lives in, when the listing reports it
    pub region: Option<String>,
}

impl BucketDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            region: None,
        }
    }

    pub fn in_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }
}

/// One entry of a bucket ACL
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AccessGrant {
    pub grantee_uri: Option<String>,
    pub permission: Option<String>,
}

impl AccessGrant {
    /// Grant to a group grantee identified by `uri`
    pub fn group(uri: impl Into<String>) -> Self {
        Self {
            grantee_uri: Some(uri.into()),
            permission: None,
        }
    }

    pub fn with_permission(mut self, permission: impl Into<String>) -> Self {
        self.permission = Some(permission.into());
        self
    }

    /// True when the grantee is the AllUsers group
    pub fn is_all_users(&self) -> bool {
        self.grantee_uri.as_deref() == Some(ALL_USERS_URI)
    }
}

/// Outcome of inspecting a single bucket
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BucketInspection {
    Public { matching_grants: usize },
    Private,
    InspectionFailed { reason: String },
}

impl BucketInspection {
    pub fn is_public(&self) -> bool {
        matches!(self, BucketInspection::Public { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BucketFinding {
    pub bucket: String,
    #[serde(flatten)]
    pub inspection: BucketInspection,
}

/// Result of one audit run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct AuditReport {
    pub findings: Vec<BucketFinding>,
    pub message: Option<String>,
    pub published: bool,
}

impl AuditReport {
    /// Names of public buckets, in listing order
    pub fn public_buckets(&self) -> Vec<&str> {
        self.findings
            .iter()
            .filter(|f| f.inspection.is_public())
            .map(|f| f.bucket.as_str())
            .collect()
    }

    pub fn failed_buckets(&self) -> Vec<&str> {
        self.findings
            .iter()
            .filter(|f| matches!(f.inspection, BucketInspection::InspectionFailed { .. }))
            .map(|f| f.bucket.as_str())
            .collect()
    }

    pub fn summary(&self) -> String {
        format!(
            "Audited {} bucket(s): {} public, {} not inspected",
            self.findings.len(),
            self.public_buckets().len(),
            self.failed_buckets().len()
        )
    }
}
