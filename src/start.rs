use aws_config::SdkConfig;
use tokio::runtime::Handle;

use crate::Args;
use crate::audit::BucketAuditor;
use crate::audit::models::AuditReport;
use crate::audit::report::write_report;
use crate::aws::{AwsContext, S3BucketStore, SnsAlertPublisher};
use crate::config::AuditConfig;
use crate::errors::{AuditError, Result};
use crate::utils::log_utils::Logger;

/// Run one audit against the account behind `context`
pub fn run_audit(context: &AwsContext, config: &AuditConfig) -> Result<AuditReport> {
    let store = S3BucketStore::new(context);
    let publisher = SnsAlertPublisher::new(context);
    BucketAuditor::new(&store, &publisher, config).audit_buckets()
}

/// Run one audit from inside a Tokio runtime, as the Lambda handler does.
/// The adapters block on the runtime handle, so the audit runs on a blocking
/// worker thread.
pub async fn run_audit_blocking(config: AuditConfig, sdk_config: SdkConfig) -> Result<AuditReport> {
    let handle = Handle::current();
    tokio::task::spawn_blocking(move || {
        let context = AwsContext::from_sdk_config(handle, sdk_config);
        run_audit(&context, &config)
    })
    .await
    .map_err(|e| AuditError::Runtime(format!("Audit task failed: {e}")))?
}

/// CLI entry: load AWS config, audit, then print and optionally save the report
pub fn run_app(args: &Args) -> Result<()> {
    let config = AuditConfig::from_args(args)?;
    let logger = Logger::new(config.verbose);

    let context = AwsContext::new(args.region.clone(), args.profile.clone(), config.verbose)?;
    let report = run_audit(&context, &config)?;

    logger.normal(&report.summary());
    for name in report.public_buckets() {
        logger.normal(&format!("  public: {name}"));
    }
    for name in report.failed_buckets() {
        logger.info(&format!("  not inspected: {name}"));
    }

    if let Some(path) = &args.report_json {
        write_report(&report, path)?;
        logger.info(&format!("Wrote report to {}", path.display()));
    }
    Ok(())
}
