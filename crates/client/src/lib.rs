//! bugwatch_client - CLI client for the bugwatch admin API.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;

pub use client::BugwatchClient;
pub use error::{ClientError, Result};
