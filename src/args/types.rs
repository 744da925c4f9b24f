use clap::Parser;
use std::path::PathBuf;

use super::validators::{check_report_path, validate};

/// Environment variable holding the SNS topic ARN
pub const TOPIC_ARN_ENV: &str = "AUDIT_TOPIC_ARN";

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Report S3 buckets whose ACL grants access to AllUsers", long_about = None)]
pub struct Args {
    /// SNS topic that receives the alert
    #[arg(long, value_name = "ARN", env = TOPIC_ARN_ENV)]
    pub topic_arn: String,

    /// AWS region override (defaults to the SDK's provider chain)
    #[arg(long, env = "AWS_REGION")]
    pub region: Option<String>,

    /// Named profile from the shared AWS config files
    #[arg(long, value_name = "NAME")]
    pub profile: Option<String>,

    /// Inspect buckets and print the alert without publishing it
    #[arg(long)]
    pub dry_run: bool,

    /// Write the audit report as JSON to this file
    #[arg(long, value_name = "PATH", value_parser = check_report_path)]
    pub report_json: Option<PathBuf>,

    /// Print extra stuff (use -v -v or --verbose --verbose for even more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Validate the arguments, without modifying the Args
    ///
    /// # Errors
    ///
    /// Returns an error if the topic ARN or region are malformed.
    pub fn validate(&self) -> Result<(), String> {
        validate(self)
    }
}
