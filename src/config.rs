use std::collections::HashMap;

use crate::args::{Args, TOPIC_ARN_ENV, check_topic_arn};
use crate::errors::{AuditError, Result};

pub const DRY_RUN_ENV: &str = "AUDIT_DRY_RUN";
pub const VERBOSE_ENV: &str = "AUDIT_VERBOSE";

/// Settings shared by the CLI and the Lambda entry point
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditConfig {
    pub topic_arn: String,
    pub dry_run: bool,
    pub verbose: u8,
}

impl AuditConfig {
    pub fn from_args(args: &Args) -> Result<Self> {
        let config = Self {
            topic_arn: args.topic_arn.clone(),
            dry_run: args.dry_run,
            verbose: args.verbose,
        };
        config.validate()?;
        Ok(config)
    }

    /// Build from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_vars(&std::env::vars().collect())
    }

    /// Build from a variable map; Lambda runs default to info verbosity
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self> {
        let topic_arn = vars
            .get(TOPIC_ARN_ENV)
            .cloned()
            .ok_or_else(|| AuditError::Config(format!("{TOPIC_ARN_ENV} is not set")))?;
        let dry_run = vars
            .get(DRY_RUN_ENV)
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);
        let verbose = match vars.get(VERBOSE_ENV) {
            Some(v) => v.trim().parse::<u8>().map_err(|e| {
                AuditError::Config(format!("{VERBOSE_ENV}='{v}' is not a verbosity level: {e}"))
            })?,
            None => 1,
        };

        let config = Self {
            topic_arn,
            dry_run,
            verbose,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        check_topic_arn(&self.topic_arn)
            .map(|_| ())
            .map_err(AuditError::Config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARN: &str = "arn:aws:sns:us-east-1:123456789012:S3SecurityAlerts";

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn env_defaults() {
        let config = AuditConfig::from_vars(&vars(&[(TOPIC_ARN_ENV, ARN)])).unwrap();
        assert_eq!(
            config,
            AuditConfig {
                topic_arn: ARN.to_string(),
                dry_run: false,
                verbose: 1,
            }
        );
    }

    #[test]
    fn env_overrides() {
        let config = AuditConfig::from_vars(&vars(&[
            (TOPIC_ARN_ENV, ARN),
            (DRY_RUN_ENV, "TRUE"),
            (VERBOSE_ENV, "2"),
        ]))
        .unwrap();
        assert!(config.dry_run);
        assert_eq!(config.verbose, 2);
    }

    #[test]
    fn env_missing_topic() {
        let err = AuditConfig::from_vars(&HashMap::new()).unwrap_err();
        assert!(matches!(err, AuditError::Config(_)));
    }

    #[test]
    fn env_bad_verbosity() {
        let err =
            AuditConfig::from_vars(&vars(&[(TOPIC_ARN_ENV, ARN), (VERBOSE_ENV, "loud")])).unwrap_err();
        assert!(err.to_string().contains("AUDIT_VERBOSE"));
    }
}
