pub mod client;
pub mod s3;
pub mod sns;

pub use client::AwsContext;
pub use s3::S3BucketStore;
pub use sns::SnsAlertPublisher;
