use std::future::Future;

use aws_config::{BehaviorVersion, SdkConfig};
use aws_sdk_s3::config::Region;
use tokio::runtime::{Handle, Runtime};

use crate::errors::{AuditError, Result};
use crate::utils::log_utils::Logger;

/// Shared AWS configuration plus the runtime the blocking adapters drive
pub struct AwsContext {
    // Kept alive for the CLI; `None` when borrowing the Lambda runtime's handle
    _runtime: Option<Runtime>,
    handle: Handle,
    sdk_config: SdkConfig,
}

impl AwsContext {
    /// Create a context with its own runtime, loading configuration from the
    /// default provider chain with optional region and profile overrides
    pub fn new(region: Option<String>, profile: Option<String>, verbose: u8) -> Result<Self> {
        let runtime = Runtime::new()
            .map_err(|e| AuditError::Runtime(format!("Failed to create runtime: {e}")))?;
        let logger = Logger::new(verbose);

        if let Some(region) = &region {
            logger.debug(&format!("Region override: {region}"));
        }
        if let Some(profile) = &profile {
            logger.debug(&format!("Profile override: {profile}"));
        }

        let sdk_config = runtime.block_on(async {
            let mut loader = aws_config::defaults(BehaviorVersion::latest());
            if let Some(region) = region {
                loader = loader.region(Region::new(region));
            }
            if let Some(profile) = profile {
                loader = loader.profile_name(profile);
            }
            loader.load().await
        });
        logger.debug(&format!("Resolved region: {:?}", sdk_config.region()));

        Ok(Self {
            handle: runtime.handle().clone(),
            _runtime: Some(runtime),
            sdk_config,
        })
    }

    /// Wrap an already loaded configuration and a handle to a running runtime.
    /// Blocking calls must then be made from outside an async context.
    pub fn from_sdk_config(handle: Handle, sdk_config: SdkConfig) -> Self {
        Self {
            _runtime: None,
            handle,
            sdk_config,
        }
    }

    pub fn sdk_config(&self) -> &SdkConfig {
        &self.sdk_config
    }

    pub(crate) fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.handle.block_on(future)
    }
}
