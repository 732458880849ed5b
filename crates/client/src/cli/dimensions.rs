//! Dimension CLI commands.

use clap::{Parser, Subcommand};

use super::ListArgs;

/// Dimension management commands.
#[derive(Debug, Parser)]
pub struct DimensionsCommand {
    #[command(subcommand)]
    pub action: DimensionsAction,
}

/// Available dimension actions.
#[derive(Debug, Subcommand)]
pub enum DimensionsAction {
    /// List dimensions. Search matches the value.
    List(ListArgs),
    /// Create a dimension.
    Create {
        /// Dimension name, e.g. FunctionName.
        #[arg(long)]
        name: String,
        /// Dimension value, e.g. the Lambda function name.
        #[arg(long)]
        value: String,
    },
    /// Get dimension by ID.
    Get {
        /// Dimension ID.
        id: i64,
    },
    /// Update a dimension.
    Update {
        /// Dimension ID.
        id: i64,
        /// Dimension name.
        #[arg(long)]
        name: String,
        /// Dimension value.
        #[arg(long)]
        value: String,
    },
    /// Delete dimension by ID, along with its bugs.
    Delete {
        /// Dimension ID.
        id: i64,
    },
}
