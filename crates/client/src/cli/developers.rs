//! Developer CLI commands.

use clap::{Parser, Subcommand};

use super::ListArgs;

/// Developer management commands.
#[derive(Debug, Parser)]
pub struct DevelopersCommand {
    #[command(subcommand)]
    pub action: DevelopersAction,
}

/// Available developer actions.
#[derive(Debug, Subcommand)]
pub enum DevelopersAction {
    /// List developers. Search matches the username.
    List(ListArgs),
    /// Link a user as a developer.
    Create {
        /// User ID.
        #[arg(long)]
        user_id: i64,
    },
    /// Get developer by ID.
    Get {
        /// Developer ID.
        id: i64,
    },
    /// Update a developer.
    Update {
        /// Developer ID.
        id: i64,
        /// User ID.
        #[arg(long)]
        user_id: i64,
        /// Developer flag.
        #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
        is_developer: bool,
    },
    /// Delete developer by ID.
    Delete {
        /// Developer ID.
        id: i64,
    },
}
