//! CLI command definitions.

pub mod alarms;
pub mod bugs;
pub mod developers;
pub mod dimensions;
pub mod health;
pub mod sources;
pub mod users;

use bugwatch_core::storage::ListQuery;
use clap::{Args, Parser, Subcommand, ValueEnum};

/// CLI client for the bugwatch admin API.
#[derive(Debug, Parser)]
#[command(name = "bugwatch-client")]
#[command(about = "CLI client for the bugwatch admin API", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "BUGWATCH_URL", default_value = "http://localhost:3000")]
    pub base_url: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Search and paging flags shared by every `list` action.
#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    /// Search term, for models that support search.
    #[arg(long, short)]
    pub search: Option<String>,
    /// Page number (1-based).
    #[arg(long)]
    pub page: Option<u32>,
}

impl From<ListArgs> for ListQuery {
    fn from(args: ListArgs) -> Self {
        ListQuery {
            q: args.search,
            page: args.page,
        }
    }
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// CloudWatch alarm management.
    Alarms(alarms::AlarmsCommand),
    /// Alert source (ARN) management.
    Sources(sources::SourcesCommand),
    /// Metric dimension management.
    Dimensions(dimensions::DimensionsCommand),
    /// User management.
    Users(users::UsersCommand),
    /// Developer management.
    Developers(developers::DevelopersCommand),
    /// Bug triage.
    Bugs(bugs::BugsCommand),
    /// Server health checks.
    Health(health::HealthCommand),
}
