use crate::audit::models::{AccessGrant, BucketDescriptor};
use crate::errors::Result;
use mockall::automock;

/// Object-storage listing and ACL inspection, abstracted to facilitate testing
#[automock]
pub trait BucketStore {
    fn list_buckets(&self) -> Result<Vec<BucketDescriptor>>;
    fn get_bucket_acl(&self, bucket: &BucketDescriptor) -> Result<Vec<AccessGrant>>;
}

/// Notification publishing, abstracted to facilitate testing
#[automock]
pub trait AlertPublisher {
    fn publish(&self, topic_arn: &str, message: &str, subject: &str) -> Result<()>;
}
