//! Alarm CLI commands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::ListArgs;

/// Alarm management commands.
#[derive(Debug, Parser)]
pub struct AlarmsCommand {
    #[command(subcommand)]
    pub action: AlarmsAction,
}

/// Available alarm actions.
#[derive(Debug, Subcommand)]
pub enum AlarmsAction {
    /// List alarms.
    List(ListArgs),
    /// Create an alarm from a JSON form file and publish it.
    Create {
        /// Path to the alarm form (JSON).
        #[arg(long, short)]
        file: PathBuf,
    },
    /// Get alarm by ID.
    Get {
        /// Alarm ID.
        id: i64,
    },
    /// Replace an alarm from a JSON form file and publish it.
    Update {
        /// Alarm ID.
        id: i64,
        /// Path to the alarm form (JSON).
        #[arg(long, short)]
        file: PathBuf,
    },
    /// Delete alarm by ID. The CloudWatch alarm is left in place.
    Delete {
        /// Alarm ID.
        id: i64,
    },
}
