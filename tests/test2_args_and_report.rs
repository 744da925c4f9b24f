use std::fs;
use std::path::PathBuf;

use clap::Parser;
use serde_json::Value;
use tempfile::NamedTempFile;

use s3_public_audit::Args;
use s3_public_audit::audit::models::{AuditReport, BucketFinding, BucketInspection};
use s3_public_audit::audit::report::write_report;
use s3_public_audit::config::AuditConfig;

const TOPIC: &str = "arn:aws:sns:us-east-1:123456789012:S3SecurityAlerts";

#[test]
fn test_args_parse_and_validate() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::try_parse_from([
        "s3-public-audit",
        "--topic-arn",
        TOPIC,
        "--region",
        "eu-west-1",
        "--dry-run",
        "-v",
        "-v",
    ])?;

    assert!(args.validate().is_ok());
    assert_eq!(args.region.as_deref(), Some("eu-west-1"));
    assert_eq!(args.verbose, 2);

    let config = AuditConfig::from_args(&args)?;
    assert_eq!(config.topic_arn, TOPIC);
    assert!(config.dry_run);
    Ok(())
}

#[test]
fn test_args_reject_placeholder_topic() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::try_parse_from([
        "s3-public-audit",
        "--topic-arn",
        "arn:aws:sns:us-east-1:YOUR_ACCOUNT_ID:S3SecurityAlerts",
    ])?;

    assert!(args.validate().is_err());
    assert!(AuditConfig::from_args(&args).is_err());
    Ok(())
}

#[test]
fn test_args_reject_missing_report_dir() {
    let result = Args::try_parse_from([
        "s3-public-audit",
        "--topic-arn",
        TOPIC,
        "--report-json",
        "/no/such/dir/report.json",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_report_written_as_json() -> Result<(), Box<dyn std::error::Error>> {
    let report = AuditReport {
        findings: vec![
            BucketFinding {
                bucket: "x".to_string(),
                inspection: BucketInspection::Public { matching_grants: 1 },
            },
            BucketFinding {
                bucket: "y".to_string(),
                inspection: BucketInspection::Private,
            },
        ],
        message: Some("Public S3 Buckets Detected: x".to_string()),
        published: false,
    };

    let out = NamedTempFile::new()?;
    let path: PathBuf = out.path().to_path_buf();
    write_report(&report, &path)?;

    let value: Value = serde_json::from_str(&fs::read_to_string(&path)?)?;
    assert_eq!(value["findings"][0]["status"], "public");
    assert_eq!(value["findings"][1]["status"], "private");
    assert_eq!(value["message"], "Public S3 Buckets Detected: x");
    assert_eq!(value["published"], false);
    Ok(())
}
