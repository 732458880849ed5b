//! Amazon Resource Name validation.
//!
//! Alert sources must point at an AWS resource that CloudWatch can notify.
//! Two shapes are accepted:
//!
//! - SNS topics: `arn:aws:sns:<region>:<account>:<topic>`
//! - Typed resources: `arn:aws:<service>:<region>:<account>:<type>:<name>`
//!
//! The account is always exactly twelve digits.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Pattern every alert source ARN must match.
pub const ARN_PATTERN: &str = r"^arn:aws:(sns:[a-z0-9-]+:\d{12}:[a-zA-Z0-9_-]+|[a-z0-9-]+:[a-z0-9-]+:\d{12}:[a-z0-9]+:[a-zA-Z0-9_-]+)$";

/// Error code reported alongside form errors.
pub const INVALID_ARN_CODE: &str = "Invalid_ARN";

static ARN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(ARN_PATTERN).expect("ARN regex"));

/// Returned when a value does not look like a supported ARN.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid AWS ARN")]
pub struct ArnError;

impl ArnError {
    /// Machine-readable error code.
    pub fn code(&self) -> &'static str {
        INVALID_ARN_CODE
    }
}

/// Checks that `value` is a well-formed ARN.
pub fn validate_arn(value: &str) -> Result<(), ArnError> {
    if ARN_REGEX.is_match(value) {
        Ok(())
    } else {
        Err(ArnError)
    }
}
