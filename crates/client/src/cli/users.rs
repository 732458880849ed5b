//! User CLI commands.

use clap::{Parser, Subcommand};

use super::ListArgs;

/// User management commands.
#[derive(Debug, Parser)]
pub struct UsersCommand {
    #[command(subcommand)]
    pub action: UsersAction,
}

/// Available user actions.
#[derive(Debug, Subcommand)]
pub enum UsersAction {
    /// List users.
    List(ListArgs),
    /// Create a new user.
    Create {
        /// Username.
        #[arg(long)]
        username: String,
    },
    /// Delete user by ID.
    Delete {
        /// User ID.
        id: i64,
    },
}
