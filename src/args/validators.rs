use std::path::PathBuf;

use super::types::Args;

/// Checks that `raw` is a well-formed SNS topic ARN
///
/// Expected shape: `arn:<partition>:sns:<region>:<account-id>:<topic-name>`
///
/// # Returns
///
/// * `Result<String, String>` - The validated ARN or an error message
pub fn check_topic_arn(raw: &str) -> Result<String, String> {
    let parts: Vec<&str> = raw.split(':').collect();
    if parts.len() != 6 || parts[0] != "arn" {
        return Err(format!(
            "'{raw}' is not a topic ARN, expected arn:<partition>:sns:<region>:<account-id>:<topic>"
        ));
    }
    if parts[2] != "sns" {
        return Err(format!("'{raw}' names service '{}', expected 'sns'", parts[2]));
    }
    if parts[1].is_empty() || parts[3].is_empty() || parts[5].is_empty() {
        return Err(format!("'{raw}' has an empty partition, region or topic name"));
    }
    if parts[4].len() != 12 || !parts[4].chars().all(|c| c.is_ascii_digit()) {
        return Err(format!("'{raw}' has account id '{}', expected 12 digits", parts[4]));
    }
    Ok(raw.to_string())
}

/// Checks that the report file's parent directory exists
///
/// # Returns
///
/// * `Result<PathBuf, String>` - The validated PathBuf or an error message
pub fn check_report_path(file: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(file);
    if path.is_dir() {
        return Err(format!("'{file}' is a directory, expected a file path"));
    }
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.is_dir() => Err(format!(
            "The directory '{}' does not exist.",
            parent.display()
        )),
        _ => Ok(path),
    }
}

/// Validate the parsed arguments
///
/// # Errors
///
/// Returns an error if the arguments are inconsistent.
pub fn validate(args: &Args) -> Result<(), String> {
    check_topic_arn(&args.topic_arn)?;
    if let Some(region) = &args.region {
        if region.trim().is_empty() {
            return Err("--region must not be empty".to_string());
        }
    }
    Ok(())
}
