use aws_sdk_sns::Client;
use aws_sdk_sns::error::DisplayErrorContext;

use crate::aws::client::AwsContext;
use crate::errors::{AuditError, Result};
use crate::interfaces::AlertPublisher;

/// `AlertPublisher` backed by SNS
pub struct SnsAlertPublisher<'a> {
    client: Client,
    context: &'a AwsContext,
}

impl<'a> SnsAlertPublisher<'a> {
    pub fn new(context: &'a AwsContext) -> Self {
        Self {
            client: Client::new(context.sdk_config()),
            context,
        }
    }
}

impl AlertPublisher for SnsAlertPublisher<'_> {
    fn publish(&self, topic_arn: &str, message: &str, subject: &str) -> Result<()> {
        let request = self
            .client
            .publish()
            .topic_arn(topic_arn)
            .message(message)
            .subject(subject);

        self.context
            .block_on(request.send())
            .map_err(|e| AuditError::Publish {
                topic_arn: topic_arn.to_string(),
                reason: DisplayErrorContext(&e).to_string(),
            })?;
        Ok(())
    }
}
