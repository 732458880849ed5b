//! CloudWatch alarm publishers.
//!
//! Implementations of `bugwatch_core::cloudwatch::AlarmPublisher`.

mod aws;
mod dry_run;

pub use aws::{create_client, AwsConfig, CloudWatchPublisher};
pub use dry_run::DryRunPublisher;
