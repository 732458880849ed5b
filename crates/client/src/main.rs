//! bugwatch-client CLI entry point.

use std::path::Path;

use bugwatch_client::cli::{Cli, Commands, OutputFormat};
use bugwatch_client::client::BugwatchClient;
use bugwatch_client::error::{ClientError, Result};
use bugwatch_client::output::{format_output, pretty};
use bugwatch_core::bugs::{BugForm, DeveloperForm};
use bugwatch_core::cloudwatch::{AlarmForm, AlertSourceForm, DimensionForm};
use bugwatch_core::storage::ListQuery;
use clap::Parser;

/// Print `value` as JSON or through its pretty formatter.
fn emit<T: serde::Serialize>(value: &T, format: OutputFormat, render: impl FnOnce(&T) -> String) {
    match format {
        OutputFormat::Json => println!("{}", format_output(value, format)),
        OutputFormat::Pretty => println!("{}", render(value)),
    }
}

/// Read an alarm form from a JSON file.
fn read_alarm_form(path: &Path) -> Result<AlarmForm> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = BugwatchClient::new(&cli.base_url);
    let format = cli.format;

    match cli.command {
        Commands::Alarms(alarms_cmd) => {
            use bugwatch_client::cli::alarms::AlarmsAction;
            match alarms_cmd.action {
                AlarmsAction::List(args) => {
                    let page = client.list_alarms(&ListQuery::from(args)).await?;
                    emit(&page, format, pretty::format_alarms);
                }
                AlarmsAction::Create { file } => {
                    let form = read_alarm_form(&file)?;
                    let alarm = client.create_alarm(&form).await?;
                    emit(&alarm, format, |a| format!("Created:\n{}", pretty::format_alarm(a)));
                }
                AlarmsAction::Get { id } => {
                    let alarm = client.get_alarm(id).await?;
                    emit(&alarm, format, pretty::format_alarm);
                }
                AlarmsAction::Update { id, file } => {
                    let form = read_alarm_form(&file)?;
                    let alarm = client.update_alarm(id, &form).await?;
                    emit(&alarm, format, |a| format!("Updated:\n{}", pretty::format_alarm(a)));
                }
                AlarmsAction::Delete { id } => {
                    client.delete_alarm(id).await?;
                    if !cli.quiet {
                        println!("Deleted alarm {}", id);
                    }
                }
            }
        }
        Commands::Sources(sources_cmd) => {
            use bugwatch_client::cli::sources::SourcesAction;
            match sources_cmd.action {
                SourcesAction::List(args) => {
                    let page = client.list_alert_sources(&ListQuery::from(args)).await?;
                    emit(&page, format, pretty::format_alert_sources);
                }
                SourcesAction::Create { name, value } => {
                    let source = client
                        .create_alert_source(&AlertSourceForm::new(name, value))
                        .await?;
                    emit(&source, format, |s| {
                        format!("Created:\n{}", pretty::format_alert_source(s))
                    });
                }
                SourcesAction::Get { id } => {
                    let source = client.get_alert_source(id).await?;
                    emit(&source, format, pretty::format_alert_source);
                }
                SourcesAction::Update { id, name, value } => {
                    let source = client
                        .update_alert_source(id, &AlertSourceForm::new(name, value))
                        .await?;
                    emit(&source, format, |s| {
                        format!("Updated:\n{}", pretty::format_alert_source(s))
                    });
                }
                SourcesAction::Delete { id } => {
                    client.delete_alert_source(id).await?;
                    if !cli.quiet {
                        println!("Deleted alert source {}", id);
                    }
                }
            }
        }
        Commands::Dimensions(dimensions_cmd) => {
            use bugwatch_client::cli::dimensions::DimensionsAction;
            match dimensions_cmd.action {
                DimensionsAction::List(args) => {
                    let page = client.list_dimensions(&ListQuery::from(args)).await?;
                    emit(&page, format, pretty::format_dimensions);
                }
                DimensionsAction::Create { name, value } => {
                    let dimension = client
                        .create_dimension(&DimensionForm::new(name, value))
                        .await?;
                    emit(&dimension, format, |d| {
                        format!("Created:\n{}", pretty::format_dimension(d))
                    });
                }
                DimensionsAction::Get { id } => {
                    let dimension = client.get_dimension(id).await?;
                    emit(&dimension, format, pretty::format_dimension);
                }
                DimensionsAction::Update { id, name, value } => {
                    let dimension = client
                        .update_dimension(id, &DimensionForm::new(name, value))
                        .await?;
                    emit(&dimension, format, |d| {
                        format!("Updated:\n{}", pretty::format_dimension(d))
                    });
                }
                DimensionsAction::Delete { id } => {
                    client.delete_dimension(id).await?;
                    if !cli.quiet {
                        println!("Deleted dimension {} and its bugs", id);
                    }
                }
            }
        }
        Commands::Users(users_cmd) => {
            use bugwatch_client::cli::users::UsersAction;
            match users_cmd.action {
                UsersAction::List(args) => {
                    let page = client.list_users(&ListQuery::from(args)).await?;
                    emit(&page, format, pretty::format_users);
                }
                UsersAction::Create { username } => {
                    let user = client.create_user(&username).await?;
                    emit(&user, format, |u| format!("Created:\n{}", pretty::format_user(u)));
                }
                UsersAction::Delete { id } => {
                    client.delete_user(id).await?;
                    if !cli.quiet {
                        println!("Deleted user {}", id);
                    }
                }
            }
        }
        Commands::Developers(developers_cmd) => {
            use bugwatch_client::cli::developers::DevelopersAction;
            match developers_cmd.action {
                DevelopersAction::List(args) => {
                    let page = client.list_developers(&ListQuery::from(args)).await?;
                    emit(&page, format, pretty::format_developers);
                }
                DevelopersAction::Create { user_id } => {
                    let developer = client
                        .create_developer(&DeveloperForm::new(user_id))
                        .await?;
                    emit(&developer, format, |d| {
                        format!("Created:\n{}", pretty::format_developer(d))
                    });
                }
                DevelopersAction::Get { id } => {
                    let developer = client.get_developer(id).await?;
                    emit(&developer, format, pretty::format_developer);
                }
                DevelopersAction::Update {
                    id,
                    user_id,
                    is_developer,
                } => {
                    let developer = client
                        .update_developer(
                            id,
                            &DeveloperForm {
                                user_id,
                                is_developer,
                            },
                        )
                        .await?;
                    emit(&developer, format, |d| {
                        format!("Updated:\n{}", pretty::format_developer(d))
                    });
                }
                DevelopersAction::Delete { id } => {
                    client.delete_developer(id).await?;
                    if !cli.quiet {
                        println!("Deleted developer {}", id);
                    }
                }
            }
        }
        Commands::Bugs(bugs_cmd) => {
            use bugwatch_client::cli::bugs::BugsAction;
            match bugs_cmd.action {
                BugsAction::List(args) => {
                    let page = client.list_bugs(&ListQuery::from(args)).await?;
                    emit(&page, format, pretty::format_bugs);
                }
                BugsAction::Get { bug_id } => {
                    let bug = client.get_bug(&bug_id).await?;
                    emit(&bug, format, pretty::format_bug);
                }
                BugsAction::Update {
                    bug_id,
                    resolved,
                    owner,
                    clear_owners,
                } => {
                    let mut form = BugForm {
                        resolved,
                        owners: None,
                    };
                    if clear_owners || !owner.is_empty() {
                        form = form.with_owners(owner);
                    }
                    if form.resolved.is_none() && form.owners.is_none() {
                        return Err(ClientError::InvalidInput(
                            "pass --resolved, --owner or --clear-owners".to_string(),
                        )
                        .into());
                    }
                    let bug = client.update_bug(&bug_id, &form).await?;
                    emit(&bug, format, |b| format!("Updated:\n{}", pretty::format_bug(b)));
                }
                BugsAction::Delete { bug_id } => {
                    client.delete_bug(&bug_id).await?;
                    if !cli.quiet {
                        println!("Deleted bug {}", bug_id);
                    }
                }
            }
        }
        Commands::Health(health_cmd) => {
            use bugwatch_client::cli::health::HealthAction;
            match health_cmd.action {
                HealthAction::Live => {
                    let live = client.livez().await?;
                    match format {
                        OutputFormat::Json => {
                            println!("{}", serde_json::json!({ "live": live }))
                        }
                        OutputFormat::Pretty => {
                            println!("Live: {}", if live { "yes" } else { "no" })
                        }
                    }
                }
                HealthAction::Storage => {
                    let health = client.healthz().await?;
                    emit(&health, format, |h| match &h.error {
                        Some(error) => format!("Storage: unhealthy\n  Error: {}", error),
                        None => "Storage: healthy".to_string(),
                    });
                }
            }
        }
    }

    Ok(())
}
