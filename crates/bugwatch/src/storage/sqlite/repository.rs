//! SQLite repository implementation.
//!
//! Implements the repository traits from `bugwatch_core::storage` using SQLite.
//! Multi-row writes (alarm inlines, bug owners) run in one transaction.

use std::collections::HashSet;

use async_trait::async_trait;
use chrono::Utc;
use rusqlite::{params, OptionalExtension};
use tokio_rusqlite::Connection;

use bugwatch_core::bugs::{
    Bug, BugDetail, BugForm, BugSummary, Developer, DeveloperForm, NewBug, User, UserForm,
};
use bugwatch_core::cloudwatch::{
    AlarmConfig, AlarmForm, AlarmSummary, AlertSource, AlertSourceForm, Choice, Dimension,
    DimensionForm,
};
use bugwatch_core::storage::{
    AlarmRepository, AlertSourceRepository, BugRepository, DeveloperRepository,
    DimensionRepository, ListParams, Page, RepositoryError, Result, StorageHealth,
    UserRepository,
};

use super::conversions::{
    format_datetime, row_to_alarm, row_to_alarm_action, row_to_alarm_dimension,
    row_to_alarm_summary, row_to_alert_source, row_to_bug, row_to_bug_owner, row_to_bug_summary,
    row_to_developer, row_to_dimension, row_to_user,
};
use super::error::{map_delete_error, map_tokio_rusqlite_error, map_tokio_rusqlite_error_with_id};
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// Fails with `QueryReturnedNoRows` when a write touched nothing.
fn expect_rows(rows: usize) -> tokio_rusqlite::Result<()> {
    if rows == 0 {
        Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
    } else {
        Ok(())
    }
}

/// Runs a searchable list query and its count query.
fn list_page<T>(
    conn: &rusqlite::Connection,
    select: &str,
    count: &str,
    params: &ListParams,
    map: fn(&rusqlite::Row) -> rusqlite::Result<T>,
) -> tokio_rusqlite::Result<Page<T>> {
    let pattern = params.like_pattern();
    let limit = params.per_page as i64;
    let offset = params.offset() as i64;

    let total: u64 = conn
        .query_row(count, params![pattern], |row| row.get::<_, i64>(0))
        .map_err(wrap_err)? as u64;

    let mut stmt = conn.prepare(select).map_err(wrap_err)?;
    let items = stmt
        .query_map(params![pattern, limit, offset], map)
        .map_err(wrap_err)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .map_err(wrap_err)?;

    Ok(Page::new(items, params, total))
}

/// Runs an unsearchable list query and its count query.
fn list_all_page<T>(
    conn: &rusqlite::Connection,
    select: &str,
    count: &str,
    params: &ListParams,
    map: fn(&rusqlite::Row) -> rusqlite::Result<T>,
) -> tokio_rusqlite::Result<Page<T>> {
    let limit = params.per_page as i64;
    let offset = params.offset() as i64;

    let total: u64 = conn
        .query_row(count, [], |row| row.get::<_, i64>(0))
        .map_err(wrap_err)? as u64;

    let mut stmt = conn.prepare(select).map_err(wrap_err)?;
    let items = stmt
        .query_map(params![limit, offset], map)
        .map_err(wrap_err)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .map_err(wrap_err)?;

    Ok(Page::new(items, params, total))
}

/// Loads an alarm with its inline rows.
fn load_alarm(conn: &rusqlite::Connection, id: i64) -> rusqlite::Result<Option<AlarmConfig>> {
    let Some(alarm) = conn
        .query_row(schema::SELECT_ALARM_BY_ID, [id], row_to_alarm)
        .optional()?
    else {
        return Ok(None);
    };

    let actions = conn
        .prepare(schema::SELECT_ALARM_ACTIONS)?
        .query_map([id], row_to_alarm_action)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    let dimensions = conn
        .prepare(schema::SELECT_ALARM_DIMENSIONS)?
        .query_map([id], row_to_alarm_dimension)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(Some(AlarmConfig {
        alarm,
        actions,
        dimensions,
    }))
}

/// Writes the action and dimension inline rows for an alarm.
fn insert_alarm_inlines(
    conn: &rusqlite::Connection,
    alarm_id: i64,
    form: &AlarmForm,
) -> rusqlite::Result<()> {
    for input in &form.actions {
        conn.execute(
            schema::INSERT_ALARM_ACTION,
            params![alarm_id, input.action.as_str(), input.arn_id],
        )?;
    }
    for input in &form.dimensions {
        conn.execute(
            schema::INSERT_ALARM_DIMENSION,
            params![alarm_id, input.dimension_id],
        )?;
    }
    Ok(())
}

/// Loads a bug with its dimension and owners.
fn load_bug(conn: &rusqlite::Connection, bug_id: &str) -> rusqlite::Result<Option<BugDetail>> {
    let Some(bug) = conn
        .query_row(schema::SELECT_BUG_BY_ID, [bug_id], row_to_bug)
        .optional()?
    else {
        return Ok(None);
    };

    let dimension = conn.query_row(
        schema::SELECT_DIMENSION_BY_ID,
        [bug.dimension_id],
        row_to_dimension,
    )?;

    let owners = conn
        .prepare(schema::SELECT_BUG_OWNERS)?
        .query_map([bug_id], row_to_bug_owner)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(Some(BugDetail {
        bug,
        dimension,
        owners,
    }))
}

/// SQLite-based repository implementation.
///
/// Provides async access to SQLite storage for all entity types.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Switch on foreign keys and create the schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::PRAGMAS).map_err(wrap_err)?;
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

// ============================================================================
// UserRepository implementation
// ============================================================================

#[async_trait]
impl UserRepository for SqliteRepository {
    async fn list_users(&self, params: &ListParams) -> Result<Page<User>> {
        let params = params.clone();

        self.conn
            .call(move |conn| {
                list_page(
                    conn,
                    schema::SELECT_USERS,
                    schema::COUNT_USERS,
                    &params,
                    row_to_user,
                )
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "User"))
    }

    async fn get_user(&self, id: i64) -> Result<Option<User>> {
        self.conn
            .call(move |conn| {
                conn.query_row(schema::SELECT_USER_BY_ID, [id], row_to_user)
                    .optional()
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "User", id.to_string()))
    }

    async fn create_user(&self, form: &UserForm) -> Result<User> {
        let username = form.username.clone();
        let created_at = format_datetime(&Utc::now());

        self.conn
            .call(move |conn| {
                conn.execute(schema::INSERT_USER, params![username, created_at])
                    .map_err(wrap_err)?;
                let id = conn.last_insert_rowid();
                conn.query_row(schema::SELECT_USER_BY_ID, [id], row_to_user)
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "User", &form.username))
    }

    async fn delete_user(&self, id: i64) -> Result<()> {
        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::DELETE_USER, [id])
                    .map_err(wrap_err)?;
                expect_rows(rows)
            })
            .await
            .map_err(|e| map_delete_error(e, "User", id.to_string(), "BugOwner"))
    }
}

// ============================================================================
// DeveloperRepository implementation
// ============================================================================

#[async_trait]
impl DeveloperRepository for SqliteRepository {
    async fn list_developers(&self, params: &ListParams) -> Result<Page<Developer>> {
        let params = params.clone();

        self.conn
            .call(move |conn| {
                list_page(
                    conn,
                    schema::SELECT_DEVELOPERS,
                    schema::COUNT_DEVELOPERS,
                    &params,
                    row_to_developer,
                )
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Developer"))
    }

    async fn get_developer(&self, id: i64) -> Result<Option<Developer>> {
        self.conn
            .call(move |conn| {
                conn.query_row(schema::SELECT_DEVELOPER_BY_ID, [id], row_to_developer)
                    .optional()
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Developer", id.to_string()))
    }

    async fn create_developer(&self, form: &DeveloperForm) -> Result<Developer> {
        let form = form.clone();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_DEVELOPER,
                    params![form.user_id, form.is_developer],
                )
                .map_err(wrap_err)?;
                let id = conn.last_insert_rowid();
                conn.query_row(schema::SELECT_DEVELOPER_BY_ID, [id], row_to_developer)
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| {
                map_tokio_rusqlite_error_with_id(e, "Developer", format!("user {}", form.user_id))
            })
    }

    async fn update_developer(&self, id: i64, form: &DeveloperForm) -> Result<Developer> {
        let form = form.clone();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::UPDATE_DEVELOPER,
                        params![id, form.user_id, form.is_developer],
                    )
                    .map_err(wrap_err)?;
                expect_rows(rows)?;
                conn.query_row(schema::SELECT_DEVELOPER_BY_ID, [id], row_to_developer)
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Developer", id.to_string()))
    }

    async fn delete_developer(&self, id: i64) -> Result<()> {
        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::DELETE_DEVELOPER, [id])
                    .map_err(wrap_err)?;
                expect_rows(rows)
            })
            .await
            .map_err(|e| map_delete_error(e, "Developer", id.to_string(), "BugOwner"))
    }
}

// ============================================================================
// BugRepository implementation
// ============================================================================

#[async_trait]
impl BugRepository for SqliteRepository {
    async fn list_bugs(&self, params: &ListParams) -> Result<Page<BugSummary>> {
        let params = params.clone();

        self.conn
            .call(move |conn| {
                list_all_page(
                    conn,
                    schema::SELECT_BUG_SUMMARIES,
                    schema::COUNT_BUGS,
                    &params,
                    row_to_bug_summary,
                )
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Bug"))
    }

    async fn get_bug(&self, bug_id: &str) -> Result<Option<BugDetail>> {
        let id = bug_id.to_string();

        self.conn
            .call(move |conn| load_bug(conn, &id).map_err(wrap_err))
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Bug", bug_id))
    }

    async fn create_bug(&self, bug: &NewBug) -> Result<Bug> {
        let new_bug = bug.clone();
        let now = format_datetime(&Utc::now());

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_BUG,
                    params![new_bug.bug_id, new_bug.dimension_id, now],
                )
                .map_err(wrap_err)?;
                conn.query_row(schema::SELECT_BUG_BY_ID, [&new_bug.bug_id], row_to_bug)
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Bug", &bug.bug_id))
    }

    async fn update_bug(&self, bug_id: &str, form: &BugForm) -> Result<BugDetail> {
        let id = bug_id.to_string();
        let form = form.clone();
        let now = format_datetime(&Utc::now());

        self.conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;

                let rows = tx
                    .execute(schema::UPDATE_BUG_RESOLVED, params![id, form.resolved, now])
                    .map_err(wrap_err)?;
                expect_rows(rows)?;

                if let Some(owners) = &form.owners {
                    let wanted: HashSet<i64> = owners.iter().map(|o| o.developer_id).collect();
                    let current: HashSet<i64> = tx
                        .prepare(schema::SELECT_BUG_OWNER_DEVELOPER_IDS)
                        .map_err(wrap_err)?
                        .query_map([&id], |row| row.get(0))
                        .map_err(wrap_err)?
                        .collect::<rusqlite::Result<_>>()
                        .map_err(wrap_err)?;

                    for developer_id in current.difference(&wanted) {
                        tx.execute(schema::DELETE_BUG_OWNER, params![id, developer_id])
                            .map_err(wrap_err)?;
                    }
                    // Preserve inline order for new owners.
                    for owner in owners {
                        if !current.contains(&owner.developer_id) {
                            tx.execute(
                                schema::INSERT_BUG_OWNER,
                                params![owner.developer_id, id, now],
                            )
                            .map_err(wrap_err)?;
                        }
                    }
                }

                let detail = load_bug(&tx, &id)
                    .map_err(wrap_err)?
                    .ok_or_else(|| wrap_err(rusqlite::Error::QueryReturnedNoRows))?;
                tx.commit().map_err(wrap_err)?;
                Ok(detail)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Bug", bug_id))
    }

    async fn delete_bug(&self, bug_id: &str) -> Result<()> {
        let id = bug_id.to_string();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::DELETE_BUG, [&id])
                    .map_err(wrap_err)?;
                expect_rows(rows)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Bug", bug_id))
    }
}

// ============================================================================
// AlarmRepository implementation
// ============================================================================

#[async_trait]
impl AlarmRepository for SqliteRepository {
    async fn list_alarms(&self, params: &ListParams) -> Result<Page<AlarmSummary>> {
        let params = params.clone();

        self.conn
            .call(move |conn| {
                list_all_page(
                    conn,
                    schema::SELECT_ALARM_SUMMARIES,
                    schema::COUNT_ALARMS,
                    &params,
                    row_to_alarm_summary,
                )
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Alarm"))
    }

    async fn get_alarm(&self, id: i64) -> Result<Option<AlarmConfig>> {
        self.conn
            .call(move |conn| load_alarm(conn, id).map_err(wrap_err))
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Alarm", id.to_string()))
    }

    async fn create_alarm(&self, form: &AlarmForm) -> Result<AlarmConfig> {
        let form = form.clone();
        let name = form.name.clone();

        self.conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;

                tx.execute(
                    schema::INSERT_ALARM,
                    params![
                        form.name,
                        form.description,
                        form.statistic.as_str(),
                        form.threshold,
                        form.comparison_operator.as_str(),
                        form.period,
                        form.is_active,
                        form.metric_name,
                        form.namespace.as_str(),
                        form.treat_missing_data.as_str(),
                        form.evaluation_periods
                    ],
                )
                .map_err(wrap_err)?;
                let alarm_id = tx.last_insert_rowid();

                insert_alarm_inlines(&tx, alarm_id, &form).map_err(wrap_err)?;

                let config = load_alarm(&tx, alarm_id)
                    .map_err(wrap_err)?
                    .ok_or_else(|| wrap_err(rusqlite::Error::QueryReturnedNoRows))?;
                tx.commit().map_err(wrap_err)?;
                Ok(config)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Alarm", name))
    }

    async fn update_alarm(&self, id: i64, form: &AlarmForm) -> Result<AlarmConfig> {
        let form = form.clone();

        self.conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;

                let rows = tx
                    .execute(
                        schema::UPDATE_ALARM,
                        params![
                            id,
                            form.name,
                            form.description,
                            form.statistic.as_str(),
                            form.threshold,
                            form.comparison_operator.as_str(),
                            form.period,
                            form.is_active,
                            form.metric_name,
                            form.namespace.as_str(),
                            form.treat_missing_data.as_str(),
                            form.evaluation_periods
                        ],
                    )
                    .map_err(wrap_err)?;
                expect_rows(rows)?;

                tx.execute(schema::DELETE_ALARM_ACTIONS, [id])
                    .map_err(wrap_err)?;
                tx.execute(schema::DELETE_ALARM_DIMENSIONS, [id])
                    .map_err(wrap_err)?;
                insert_alarm_inlines(&tx, id, &form).map_err(wrap_err)?;

                let config = load_alarm(&tx, id)
                    .map_err(wrap_err)?
                    .ok_or_else(|| wrap_err(rusqlite::Error::QueryReturnedNoRows))?;
                tx.commit().map_err(wrap_err)?;
                Ok(config)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Alarm", id.to_string()))
    }

    async fn delete_alarm(&self, id: i64) -> Result<()> {
        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::DELETE_ALARM, [id])
                    .map_err(wrap_err)?;
                expect_rows(rows)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Alarm", id.to_string()))
    }
}

// ============================================================================
// AlertSourceRepository implementation
// ============================================================================

#[async_trait]
impl AlertSourceRepository for SqliteRepository {
    async fn list_alert_sources(&self, params: &ListParams) -> Result<Page<AlertSource>> {
        let params = params.clone();

        self.conn
            .call(move |conn| {
                list_page(
                    conn,
                    schema::SELECT_ALERT_SOURCES,
                    schema::COUNT_ALERT_SOURCES,
                    &params,
                    row_to_alert_source,
                )
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "AlertSource"))
    }

    async fn get_alert_source(&self, id: i64) -> Result<Option<AlertSource>> {
        self.conn
            .call(move |conn| {
                conn.query_row(schema::SELECT_ALERT_SOURCE_BY_ID, [id], row_to_alert_source)
                    .optional()
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "AlertSource", id.to_string()))
    }

    async fn create_alert_source(&self, form: &AlertSourceForm) -> Result<AlertSource> {
        let form = form.clone();
        let value = form.value.clone();

        self.conn
            .call(move |conn| {
                conn.execute(schema::INSERT_ALERT_SOURCE, params![form.name, form.value])
                    .map_err(wrap_err)?;
                let id = conn.last_insert_rowid();
                conn.query_row(schema::SELECT_ALERT_SOURCE_BY_ID, [id], row_to_alert_source)
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "AlertSource", value))
    }

    async fn update_alert_source(&self, id: i64, form: &AlertSourceForm) -> Result<AlertSource> {
        let form = form.clone();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::UPDATE_ALERT_SOURCE,
                        params![id, form.name, form.value],
                    )
                    .map_err(wrap_err)?;
                expect_rows(rows)?;
                conn.query_row(schema::SELECT_ALERT_SOURCE_BY_ID, [id], row_to_alert_source)
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "AlertSource", id.to_string()))
    }

    async fn delete_alert_source(&self, id: i64) -> Result<()> {
        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::DELETE_ALERT_SOURCE, [id])
                    .map_err(wrap_err)?;
                expect_rows(rows)
            })
            .await
            .map_err(|e| map_delete_error(e, "AlertSource", id.to_string(), "AlarmAction"))
    }
}

// ============================================================================
// DimensionRepository implementation
// ============================================================================

#[async_trait]
impl DimensionRepository for SqliteRepository {
    async fn list_dimensions(&self, params: &ListParams) -> Result<Page<Dimension>> {
        let params = params.clone();

        self.conn
            .call(move |conn| {
                list_page(
                    conn,
                    schema::SELECT_DIMENSIONS,
                    schema::COUNT_DIMENSIONS,
                    &params,
                    row_to_dimension,
                )
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Dimension"))
    }

    async fn get_dimension(&self, id: i64) -> Result<Option<Dimension>> {
        self.conn
            .call(move |conn| {
                conn.query_row(schema::SELECT_DIMENSION_BY_ID, [id], row_to_dimension)
                    .optional()
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Dimension", id.to_string()))
    }

    async fn create_dimension(&self, form: &DimensionForm) -> Result<Dimension> {
        let form = form.clone();
        let value = form.value.clone();

        self.conn
            .call(move |conn| {
                conn.execute(schema::INSERT_DIMENSION, params![form.name, form.value])
                    .map_err(wrap_err)?;
                let id = conn.last_insert_rowid();
                conn.query_row(schema::SELECT_DIMENSION_BY_ID, [id], row_to_dimension)
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Dimension", value))
    }

    async fn update_dimension(&self, id: i64, form: &DimensionForm) -> Result<Dimension> {
        let form = form.clone();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::UPDATE_DIMENSION,
                        params![id, form.name, form.value],
                    )
                    .map_err(wrap_err)?;
                expect_rows(rows)?;
                conn.query_row(schema::SELECT_DIMENSION_BY_ID, [id], row_to_dimension)
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Dimension", id.to_string()))
    }

    async fn delete_dimension(&self, id: i64) -> Result<()> {
        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::DELETE_DIMENSION, [id])
                    .map_err(wrap_err)?;
                expect_rows(rows)
            })
            .await
            .map_err(|e| map_delete_error(e, "Dimension", id.to_string(), "AlarmDimension"))
    }
}

#[async_trait]
impl StorageHealth for SqliteRepository {
    async fn ping(&self) -> Result<()> {
        self.conn
            .call(|conn| {
                conn.query_row(schema::PING, [], |row| row.get::<_, i64>(0))
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bugwatch_core::cloudwatch::{ActionState, ComparisonOperator, Namespace, Statistic};

    const TOPIC: &str = "arn:aws:sns:ap-southeast-2:058188477434:LambdaErrorMetrix";

    async fn repo() -> SqliteRepository {
        SqliteRepository::new_in_memory().await.unwrap()
    }

    async fn dimension(repo: &SqliteRepository, value: &str) -> Dimension {
        repo.create_dimension(&DimensionForm::new(format!("FunctionName-{value}"), value))
            .await
            .unwrap()
    }

    async fn source(repo: &SqliteRepository) -> AlertSource {
        repo.create_alert_source(&AlertSourceForm::new("Ops topic", TOPIC))
            .await
            .unwrap()
    }

    async fn developer(repo: &SqliteRepository, username: &str) -> Developer {
        let user = repo.create_user(&UserForm::new(username)).await.unwrap();
        repo.create_developer(&DeveloperForm::new(user.id))
            .await
            .unwrap()
    }

    fn alarm_form(arn_id: i64, dimension_id: i64) -> AlarmForm {
        AlarmForm::new("lambda-errors-alarm", "Alarm for Lambda errors", "Errors")
            .with_statistic(Statistic::Sum)
            .with_threshold(3, ComparisonOperator::GreaterThanThreshold)
            .with_period(10)
            .with_action(ActionState::Alarm, arn_id)
            .with_action(ActionState::Ok, arn_id)
            .with_dimension(dimension_id)
    }

    // ==================== Alarm Tests ====================

    #[tokio::test]
    async fn test_alarm_create_and_get() {
        let repo = repo().await;
        let arn = source(&repo).await;
        let dim = dimension(&repo, "orders-api").await;

        let created = repo
            .create_alarm(&alarm_form(arn.arn_id, dim.dimension_id))
            .await
            .unwrap();

        assert_eq!(created.alarm.name, "lambda-errors-alarm");
        assert_eq!(created.alarm.statistic, Statistic::Sum);
        assert_eq!(created.alarm.threshold, 3);
        assert_eq!(created.alarm.period, 10);
        assert_eq!(created.alarm.namespace, Namespace::Lambda);
        assert!(created.alarm.is_active);
        assert_eq!(created.actions.len(), 2);
        assert_eq!(created.actions[0].action, ActionState::Alarm);
        assert_eq!(created.actions[0].source.value, TOPIC);
        assert_eq!(created.dimensions[0].dimension.value, "orders-api");

        let fetched = repo.get_alarm(created.alarm.alarm_id).await.unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn test_alarm_update_replaces_inlines() {
        let repo = repo().await;
        let arn = source(&repo).await;
        let first = dimension(&repo, "orders-api").await;
        let second = dimension(&repo, "billing-api").await;
        let created = repo
            .create_alarm(&alarm_form(arn.arn_id, first.dimension_id))
            .await
            .unwrap();

        let mut form = alarm_form(arn.arn_id, second.dimension_id).with_active(false);
        form.actions.truncate(1);
        let updated = repo
            .update_alarm(created.alarm.alarm_id, &form)
            .await
            .unwrap();

        assert!(!updated.alarm.is_active);
        assert_eq!(updated.actions.len(), 1);
        assert_eq!(updated.dimensions.len(), 1);
        assert_eq!(updated.dimensions[0].dimension.value, "billing-api");
    }

    #[tokio::test]
    async fn test_alarm_with_unknown_source_is_rolled_back() {
        let repo = repo().await;
        let dim = dimension(&repo, "orders-api").await;

        let result = repo.create_alarm(&alarm_form(999, dim.dimension_id)).await;

        assert!(matches!(result, Err(RepositoryError::InvalidData(_))));
        let page = repo.list_alarms(&ListParams::new(100)).await.unwrap();
        assert_eq!(page.total, 0);
    }

    #[tokio::test]
    async fn test_alarm_update_nonexistent() {
        let repo = repo().await;
        let arn = source(&repo).await;
        let dim = dimension(&repo, "orders-api").await;

        let result = repo
            .update_alarm(42, &alarm_form(arn.arn_id, dim.dimension_id))
            .await;

        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_alarm_delete_cascades_inlines_and_frees_source() {
        let repo = repo().await;
        let arn = source(&repo).await;
        let dim = dimension(&repo, "orders-api").await;
        let created = repo
            .create_alarm(&alarm_form(arn.arn_id, dim.dimension_id))
            .await
            .unwrap();

        repo.delete_alarm(created.alarm.alarm_id).await.unwrap();

        assert!(repo
            .get_alarm(created.alarm.alarm_id)
            .await
            .unwrap()
            .is_none());
        repo.delete_alert_source(arn.arn_id).await.unwrap();
        repo.delete_dimension(dim.dimension_id).await.unwrap();
    }

    // ==================== Alert Source / Dimension Tests ====================

    #[tokio::test]
    async fn test_alert_source_in_use_cannot_be_deleted() {
        let repo = repo().await;
        let arn = source(&repo).await;
        let dim = dimension(&repo, "orders-api").await;
        repo.create_alarm(&alarm_form(arn.arn_id, dim.dimension_id))
            .await
            .unwrap();

        let result = repo.delete_alert_source(arn.arn_id).await;

        assert!(matches!(
            result,
            Err(RepositoryError::InUse {
                entity_type: "AlertSource",
                referenced_by: "AlarmAction",
                ..
            })
        ));
        assert!(repo.get_alert_source(arn.arn_id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_dimension_linked_to_alarm_cannot_be_deleted() {
        let repo = repo().await;
        let arn = source(&repo).await;
        let dim = dimension(&repo, "orders-api").await;
        repo.create_alarm(&alarm_form(arn.arn_id, dim.dimension_id))
            .await
            .unwrap();

        let result = repo.delete_dimension(dim.dimension_id).await;

        assert!(matches!(result, Err(RepositoryError::InUse { .. })));
    }

    #[tokio::test]
    async fn test_dimension_delete_cascades_to_bugs() {
        let repo = repo().await;
        let dim = dimension(&repo, "orders-api").await;
        repo.create_bug(&NewBug::new("8f2c-ingest", dim.dimension_id))
            .await
            .unwrap();

        repo.delete_dimension(dim.dimension_id).await.unwrap();

        assert!(repo.get_bug("8f2c-ingest").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_dimension_value_is_unique() {
        let repo = repo().await;
        dimension(&repo, "orders-api").await;

        let result = repo
            .create_dimension(&DimensionForm::new("Resource", "orders-api"))
            .await;

        assert_eq!(
            result,
            Err(RepositoryError::AlreadyExists {
                entity_type: "Dimension",
                id: "orders-api".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn test_alert_source_search_by_value() {
        let repo = repo().await;
        source(&repo).await;
        repo.create_alert_source(&AlertSourceForm::new(
            "Error function",
            "arn:aws:lambda:ap-southeast-2:058188477434:function:ErrorLogFunctionPython",
        ))
        .await
        .unwrap();

        let page = repo
            .list_alert_sources(&ListParams::new(100).with_search("lambda"))
            .await
            .unwrap();

        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].name, "Error function");
    }

    // ==================== Bug Tests ====================

    #[tokio::test]
    async fn test_bug_create_sets_defaults() {
        let repo = repo().await;
        let dim = dimension(&repo, "orders-api").await;

        let bug = repo
            .create_bug(&NewBug::new("8f2c-ingest", dim.dimension_id))
            .await
            .unwrap();

        assert_eq!(bug.bug_id, "8f2c-ingest");
        assert_eq!(bug.dimension_id, dim.dimension_id);
        assert!(!bug.resolved);
        assert_eq!(bug.created_at, bug.updated_at);
    }

    #[tokio::test]
    async fn test_bug_duplicate_id() {
        let repo = repo().await;
        let dim = dimension(&repo, "orders-api").await;
        let bug = NewBug::new("8f2c-ingest", dim.dimension_id);
        repo.create_bug(&bug).await.unwrap();

        let result = repo.create_bug(&bug).await;

        assert!(matches!(
            result,
            Err(RepositoryError::AlreadyExists { entity_type: "Bug", .. })
        ));
    }

    #[tokio::test]
    async fn test_bug_update_resolves_and_assigns_owners() {
        let repo = repo().await;
        let dim = dimension(&repo, "orders-api").await;
        let ana = developer(&repo, "ana").await;
        let ben = developer(&repo, "ben").await;
        let bug = repo
            .create_bug(&NewBug::new("8f2c-ingest", dim.dimension_id))
            .await
            .unwrap();

        let detail = repo
            .update_bug(
                "8f2c-ingest",
                &BugForm::default()
                    .with_resolved(true)
                    .with_owners([ana.id, ben.id]),
            )
            .await
            .unwrap();

        assert!(detail.bug.resolved);
        assert!(detail.bug.updated_at >= bug.updated_at);
        assert_eq!(detail.bug.created_at, bug.created_at);
        assert_eq!(detail.owners.len(), 2);
        assert_eq!(detail.owners[0].developer.username, "ana");

        let detail = repo
            .update_bug("8f2c-ingest", &BugForm::default().with_owners([ben.id]))
            .await
            .unwrap();
        assert!(detail.bug.resolved);
        assert_eq!(detail.owners.len(), 1);
        assert_eq!(detail.owners[0].developer.username, "ben");
    }

    #[tokio::test]
    async fn test_bug_list_counts_developers() {
        let repo = repo().await;
        let dim = dimension(&repo, "orders-api").await;
        let ana = developer(&repo, "ana").await;
        repo.create_bug(&NewBug::new("8f2c-ingest", dim.dimension_id))
            .await
            .unwrap();
        repo.update_bug("8f2c-ingest", &BugForm::default().with_owners([ana.id]))
            .await
            .unwrap();

        let page = repo.list_bugs(&ListParams::new(100)).await.unwrap();

        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].developers, 1);
        assert_eq!(page.items[0].lambda_name, "orders-api");
    }

    #[tokio::test]
    async fn test_bug_update_nonexistent() {
        let repo = repo().await;

        let result = repo
            .update_bug("missing", &BugForm::default().with_resolved(true))
            .await;

        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_bug_with_unknown_dimension() {
        let repo = repo().await;

        let result = repo.create_bug(&NewBug::new("8f2c-ingest", 77)).await;

        assert!(matches!(result, Err(RepositoryError::InvalidData(_))));
    }

    // ==================== User / Developer Tests ====================

    #[tokio::test]
    async fn test_developer_owning_bug_cannot_be_deleted() {
        let repo = repo().await;
        let dim = dimension(&repo, "orders-api").await;
        let ana = developer(&repo, "ana").await;
        repo.create_bug(&NewBug::new("8f2c-ingest", dim.dimension_id))
            .await
            .unwrap();
        repo.update_bug("8f2c-ingest", &BugForm::default().with_owners([ana.id]))
            .await
            .unwrap();

        let result = repo.delete_developer(ana.id).await;
        assert!(matches!(result, Err(RepositoryError::InUse { .. })));

        let result = repo.delete_user(ana.user_id).await;
        assert!(matches!(result, Err(RepositoryError::InUse { .. })));
    }

    #[tokio::test]
    async fn test_user_delete_cascades_to_developer() {
        let repo = repo().await;
        let ana = developer(&repo, "ana").await;

        repo.delete_user(ana.user_id).await.unwrap();

        assert!(repo.get_developer(ana.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_one_developer_per_user() {
        let repo = repo().await;
        let ana = developer(&repo, "ana").await;

        let result = repo
            .create_developer(&DeveloperForm::new(ana.user_id))
            .await;

        assert!(matches!(result, Err(RepositoryError::AlreadyExists { .. })));
    }

    #[tokio::test]
    async fn test_developer_list_pages_and_searches() {
        let repo = repo().await;
        for i in 0..12 {
            developer(&repo, &format!("dev{i:02}")).await;
        }
        developer(&repo, "ana").await;

        let first = repo
            .list_developers(&ListParams::new(10))
            .await
            .unwrap();
        assert_eq!(first.items.len(), 10);
        assert_eq!(first.total, 13);
        assert!(first.has_next());

        let second = repo
            .list_developers(&ListParams::new(10).with_page(2))
            .await
            .unwrap();
        assert_eq!(second.items.len(), 3);

        let found = repo
            .list_developers(&ListParams::new(10).with_search("AN"))
            .await
            .unwrap();
        assert_eq!(found.total, 1);
        assert_eq!(found.items[0].username, "ana");
    }

    #[tokio::test]
    async fn test_username_is_unique() {
        let repo = repo().await;
        repo.create_user(&UserForm::new("ana")).await.unwrap();

        let result = repo.create_user(&UserForm::new("ana")).await;

        assert!(matches!(result, Err(RepositoryError::AlreadyExists { .. })));
    }

    #[tokio::test]
    async fn test_ping() {
        let repo = repo().await;
        assert!(repo.ping().await.is_ok());
    }
}
