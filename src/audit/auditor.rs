use crate::audit::classify::{alert_entries, alert_message, classify_grants};
use crate::audit::models::{
    ALERT_SUBJECT, AuditReport, BucketDescriptor, BucketFinding, BucketInspection,
};
use crate::config::AuditConfig;
use crate::errors::Result;
use crate::interfaces::{AlertPublisher, BucketStore};
use crate::utils::log_utils::Logger;

/// Scans every bucket in the account and raises one alert for the public ones
pub struct BucketAuditor<'a, S: BucketStore, P: AlertPublisher> {
    store: &'a S,
    publisher: &'a P,
    config: &'a AuditConfig,
    logger: Logger,
}

impl<'a, S: BucketStore, P: AlertPublisher> BucketAuditor<'a, S, P> {
    pub fn new(store: &'a S, publisher: &'a P, config: &'a AuditConfig) -> Self {
        Self {
            store,
            publisher,
            config,
            logger: Logger::new(config.verbose),
        }
    }

    /// Inspect one bucket; a failed ACL read is recorded, never raised
    pub fn inspect_bucket(&self, descriptor: &BucketDescriptor) -> BucketInspection {
        let bucket = &descriptor.name;
        match self.store.get_bucket_acl(descriptor) {
            Ok(grants) => {
                self.logger
                    .debug(&format!("Bucket '{bucket}' has {} grant(s)", grants.len()));
                classify_grants(&grants)
            }
            Err(e) => {
                self.logger
                    .info(&format!("Skipping bucket '{bucket}', ACL not readable: {e}"));
                BucketInspection::InspectionFailed {
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Run the audit
    ///
    /// # Errors
    ///
    /// Returns an error if listing buckets or publishing the alert fails.
    /// Per-bucket ACL failures are absorbed into the report.
    pub fn audit_buckets(&self) -> Result<AuditReport> {
        let buckets = self.store.list_buckets()?;
        self.logger
            .info(&format!("Found {} bucket(s) to inspect", buckets.len()));

        let findings: Vec<BucketFinding> = buckets
            .into_iter()
            .map(|b| {
                let inspection = self.inspect_bucket(&b);
                if let BucketInspection::Public { matching_grants } = &inspection {
                    self.logger.info(&format!(
                        "Bucket '{}' is public ({matching_grants} AllUsers grant(s))",
                        b.name
                    ));
                }
                BucketFinding {
                    bucket: b.name,
                    inspection,
                }
            })
            .collect();

        let message = alert_message(&alert_entries(&findings));
        let mut report = AuditReport {
            findings,
            message,
            published: false,
        };

        match &report.message {
            None => self.logger.debug("No public buckets, nothing to publish"),
            Some(message) if self.config.dry_run => {
                self.logger
                    .normal(&format!("Dry run, not publishing: {message}"));
            }
            Some(message) => {
                self.publisher
                    .publish(&self.config.topic_arn, message, ALERT_SUBJECT)?;
                self.logger
                    .info(&format!("Published alert to {}", self.config.topic_arn));
                report.published = true;
            }
        }

        self.logger.info(&report.summary());
        Ok(report)
    }
}
