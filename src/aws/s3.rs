use std::cell::RefCell;
use std::collections::HashMap;

use aws_sdk_s3::Client;
use aws_sdk_s3::config::{Builder, Region};
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::types::Grant;

use crate::audit::models::{AccessGrant, BucketDescriptor};
use crate::aws::client::AwsContext;
use crate::errors::{AuditError, Result};
use crate::interfaces::BucketStore;

/// `BucketStore` backed by the S3 API
///
/// ACL requests go to the bucket's own region; S3 answers a request signed
/// for any other region with a redirect error.
pub struct S3BucketStore<'a> {
    client: Client,
    context: &'a AwsContext,
    regional: RefCell<HashMap<String, Client>>,
}

impl<'a> S3BucketStore<'a> {
    pub fn new(context: &'a AwsContext) -> Self {
        Self {
            client: Client::new(context.sdk_config()),
            context,
            regional: RefCell::new(HashMap::new()),
        }
    }

    /// Client for `region`, built once per region. `None` or the configured
    /// region use the default client.
    pub fn client_for(&self, region: Option<&str>) -> Client {
        let region = match region {
            Some(r) if !r.is_empty() => r,
            _ => return self.client.clone(),
        };
        if self.client.config().region().is_some_and(|r| r.to_string() == region) {
            return self.client.clone();
        }

        self.regional
            .borrow_mut()
            .entry(region.to_string())
            .or_insert_with(|| {
                let config = Builder::from(self.context.sdk_config())
                    .region(Region::new(region.to_string()))
                    .build();
                Client::from_conf(config)
            })
            .clone()
    }

    pub fn cached_regions(&self) -> usize {
        self.regional.borrow().len()
    }
}

/// Convert an SDK grant, keeping the grantee URI and permission
pub fn access_grant_from_sdk(grant: &Grant) -> AccessGrant {
    AccessGrant {
        grantee_uri: grant
            .grantee()
            .and_then(|g| g.uri())
            .map(str::to_string),
        permission: grant.permission().map(|p| p.as_str().to_string()),
    }
}

impl BucketStore for S3BucketStore<'_> {
    // Single ListBuckets call, no continuation handling
    fn list_buckets(&self) -> Result<Vec<BucketDescriptor>> {
        let output = self
            .context
            .block_on(self.client.list_buckets().send())
            .map_err(|e| AuditError::ListBuckets(DisplayErrorContext(&e).to_string()))?;

        Ok(output
            .buckets()
            .iter()
            .filter_map(|b| {
                let descriptor = BucketDescriptor::new(b.name()?);
                Some(match b.bucket_region() {
                    Some(region) => descriptor.in_region(region),
                    None => descriptor,
                })
            })
            .collect())
    }

    fn get_bucket_acl(&self, bucket: &BucketDescriptor) -> Result<Vec<AccessGrant>> {
        let client = self.client_for(bucket.region.as_deref());
        let output = self
            .context
            .block_on(client.get_bucket_acl().bucket(&bucket.name).send())
            .map_err(|e| AuditError::BucketAcl {
                bucket: bucket.name.clone(),
                reason: DisplayErrorContext(&e).to_string(),
            })?;

        Ok(output.grants().iter().map(access_grant_from_sdk).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::models::ALL_USERS_URI;
    use aws_config::{BehaviorVersion, SdkConfig};
    use aws_sdk_s3::types::{Grantee, Permission, Type};

    fn context_in(region: &str, runtime: &tokio::runtime::Runtime) -> AwsContext {
        let sdk_config = SdkConfig::builder()
            .region(Region::new(region.to_string()))
            .behavior_version(BehaviorVersion::latest())
            .build();
        AwsContext::from_sdk_config(runtime.handle().clone(), sdk_config)
    }

    fn region_of(client: &Client) -> Option<String> {
        client.config().region().map(|r| r.to_string())
    }

    #[test]
    fn acl_client_follows_bucket_region() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let context = context_in("us-east-1", &runtime);
        let store = S3BucketStore::new(&context);

        assert_eq!(region_of(&store.client_for(None)).as_deref(), Some("us-east-1"));
        assert_eq!(
            region_of(&store.client_for(Some("us-east-1"))).as_deref(),
            Some("us-east-1")
        );
        assert_eq!(store.cached_regions(), 0);

        assert_eq!(
            region_of(&store.client_for(Some("eu-west-1"))).as_deref(),
            Some("eu-west-1")
        );
        store.client_for(Some("eu-west-1"));
        store.client_for(Some("ap-southeast-2"));
        assert_eq!(store.cached_regions(), 2);
    }

    #[test]
    fn group_grant_keeps_uri_and_permission() {
        let grant = Grant::builder()
            .grantee(
                Grantee::builder()
                    .r#type(Type::Group)
                    .uri(ALL_USERS_URI)
                    .build()
                    .unwrap(),
            )
            .permission(Permission::Read)
            .build();

        let converted = access_grant_from_sdk(&grant);
        assert!(converted.is_all_users());
        assert_eq!(converted.permission.as_deref(), Some("READ"));
    }

    #[test]
    fn canonical_user_grant_has_no_uri() {
        let grant = Grant::builder()
            .grantee(
                Grantee::builder()
                    .r#type(Type::CanonicalUser)
                    .id("79a59df900b949e55d96a1e698fbacedfd6e09d98eacf8f8d5218e7cd47ef2be")
                    .build()
                    .unwrap(),
            )
            .permission(Permission::FullControl)
            .build();

        let converted = access_grant_from_sdk(&grant);
        assert_eq!(converted.grantee_uri, None);
        assert!(!converted.is_all_users());
        assert_eq!(converted.permission.as_deref(), Some("FULL_CONTROL"));
    }
}
