//! Bug CLI commands.

use clap::{Parser, Subcommand};

use super::ListArgs;

/// Bug triage commands.
#[derive(Debug, Parser)]
pub struct BugsCommand {
    #[command(subcommand)]
    pub action: BugsAction,
}

/// Available bug actions.
#[derive(Debug, Subcommand)]
pub enum BugsAction {
    /// List bugs.
    List(ListArgs),
    /// Get bug by ID.
    Get {
        /// Bug ID.
        bug_id: String,
    },
    /// Update a bug's resolved flag and owners.
    Update {
        /// Bug ID.
        bug_id: String,
        /// Mark resolved (true) or open (false).
        #[arg(long)]
        resolved: Option<bool>,
        /// Developer ID to own the bug. Repeat to assign several.
        #[arg(long)]
        owner: Vec<i64>,
        /// Remove every owner.
        #[arg(long, conflicts_with = "owner")]
        clear_owners: bool,
    },
    /// Delete bug by ID.
    Delete {
        /// Bug ID.
        bug_id: String,
    },
}
