//! Alert source CLI commands.

use clap::{Parser, Subcommand};

use super::ListArgs;

/// Alert source management commands.
#[derive(Debug, Parser)]
pub struct SourcesCommand {
    #[command(subcommand)]
    pub action: SourcesAction,
}

/// Available alert source actions.
#[derive(Debug, Subcommand)]
pub enum SourcesAction {
    /// List alert sources. Search matches the ARN.
    List(ListArgs),
    /// Create an alert source.
    Create {
        /// Display name.
        #[arg(long)]
        name: String,
        /// SNS topic or resource ARN.
        #[arg(long)]
        value: String,
    },
    /// Get alert source by ID.
    Get {
        /// Alert source ID.
        id: i64,
    },
    /// Update an alert source.
    Update {
        /// Alert source ID.
        id: i64,
        /// Display name.
        #[arg(long)]
        name: String,
        /// SNS topic or resource ARN.
        #[arg(long)]
        value: String,
    },
    /// Delete alert source by ID.
    Delete {
        /// Alert source ID.
        id: i64,
    },
}
