//! Functional core for bugwatch.
//!
//! Domain types, validation and admin settings for the bug tracker and the
//! CloudWatch alarm configuration. No I/O lives here; storage and AWS calls
//! are reached through the traits in [`storage`] and [`cloudwatch`].

pub mod admin;
pub mod arn;
pub mod bugs;
pub mod cloudwatch;
pub mod serde;
pub mod storage;
pub mod validation;
