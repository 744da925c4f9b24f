use aws_config::{BehaviorVersion, SdkConfig};
use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use serde_json::Value;

use s3_public_audit::audit::models::AuditReport;
use s3_public_audit::config::AuditConfig;
use s3_public_audit::run_audit_blocking;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = AuditConfig::from_env()?;
    let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    run(service_fn(|event| handle_event(event, &config, &sdk_config))).await
}

/// The event payload and context are not used
async fn handle_event(
    _event: LambdaEvent<Value>,
    config: &AuditConfig,
    sdk_config: &SdkConfig,
) -> Result<AuditReport, Error> {
    let report = run_audit_blocking(config.clone(), sdk_config.clone()).await?;
    Ok(report)
}
