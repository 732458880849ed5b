//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.
//! Choice columns hold the stored value from [`Choice::as_str`].

use bugwatch_core::bugs::{Bug, BugOwner, BugSummary, Developer, User};
use bugwatch_core::cloudwatch::{
    ActionState, Alarm, AlarmAction, AlarmDimension, AlarmSummary, AlertSource, Choice, Dimension,
};
use chrono::{DateTime, Utc};
use rusqlite::{types::Type, Row};

// ============================================================================
// Bug tracking conversions
// ============================================================================

/// Expected columns: id, username, created_at
pub fn row_to_user(row: &Row) -> rusqlite::Result<User> {
    let created_at: String = row.get(2)?;

    Ok(User {
        id: row.get(0)?,
        username: row.get(1)?,
        created_at: parse_datetime(2, &created_at)?,
    })
}

/// Expected columns: id, user_id, username, is_developer
pub fn row_to_developer(row: &Row) -> rusqlite::Result<Developer> {
    Ok(Developer {
        id: row.get(0)?,
        user_id: row.get(1)?,
        username: row.get(2)?,
        is_developer: row.get(3)?,
    })
}

/// Expected columns: bug_id, dimension_id, resolved, created_at, updated_at
pub fn row_to_bug(row: &Row) -> rusqlite::Result<Bug> {
    let created_at: String = row.get(3)?;
    let updated_at: String = row.get(4)?;

    Ok(Bug {
        bug_id: row.get(0)?,
        dimension_id: row.get(1)?,
        resolved: row.get(2)?,
        created_at: parse_datetime(3, &created_at)?,
        updated_at: parse_datetime(4, &updated_at)?,
    })
}

/// Expected columns: bug_id, resolved, created_at, owner count, dimension value
pub fn row_to_bug_summary(row: &Row) -> rusqlite::Result<BugSummary> {
    let created_at: String = row.get(2)?;

    Ok(BugSummary {
        bug_id: row.get(0)?,
        resolved: row.get(1)?,
        created_at: parse_datetime(2, &created_at)?,
        developers: row.get(3)?,
        lambda_name: row.get(4)?,
    })
}

/// Expected columns: id, bug_id, developer id, user_id, username, is_developer, created_at
pub fn row_to_bug_owner(row: &Row) -> rusqlite::Result<BugOwner> {
    let created_at: String = row.get(6)?;

    Ok(BugOwner {
        id: row.get(0)?,
        bug_id: row.get(1)?,
        developer: Developer {
            id: row.get(2)?,
            user_id: row.get(3)?,
            username: row.get(4)?,
            is_developer: row.get(5)?,
        },
        created_at: parse_datetime(6, &created_at)?,
    })
}

// ============================================================================
// Alarm configuration conversions
// ============================================================================

/// Expected columns: alarm_id, name, description, statistic, threshold,
/// comparison_operator, period, is_active, metric_name, namespace,
/// treat_missing_data, evaluation_periods
pub fn row_to_alarm(row: &Row) -> rusqlite::Result<Alarm> {
    let statistic: String = row.get(3)?;
    let comparison_operator: String = row.get(5)?;
    let namespace: String = row.get(9)?;
    let treat_missing_data: String = row.get(10)?;

    Ok(Alarm {
        alarm_id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        statistic: parse_choice(3, &statistic)?,
        threshold: row.get(4)?,
        comparison_operator: parse_choice(5, &comparison_operator)?,
        period: row.get(6)?,
        is_active: row.get(7)?,
        metric_name: row.get(8)?,
        namespace: parse_choice(9, &namespace)?,
        treat_missing_data: parse_choice(10, &treat_missing_data)?,
        evaluation_periods: row.get(11)?,
    })
}

/// Expected columns: alarm_id, name
pub fn row_to_alarm_summary(row: &Row) -> rusqlite::Result<AlarmSummary> {
    Ok(AlarmSummary {
        alarm_id: row.get(0)?,
        name: row.get(1)?,
    })
}

/// Expected columns: arn_id, name, value
pub fn row_to_alert_source(row: &Row) -> rusqlite::Result<AlertSource> {
    Ok(AlertSource {
        arn_id: row.get(0)?,
        name: row.get(1)?,
        value: row.get(2)?,
    })
}

/// Expected columns: dimension_id, name, value
pub fn row_to_dimension(row: &Row) -> rusqlite::Result<Dimension> {
    Ok(Dimension {
        dimension_id: row.get(0)?,
        name: row.get(1)?,
        value: row.get(2)?,
    })
}

/// Expected columns: id, alarm_id, action, arn_id, name, value
pub fn row_to_alarm_action(row: &Row) -> rusqlite::Result<AlarmAction> {
    let action: String = row.get(2)?;

    Ok(AlarmAction {
        id: row.get(0)?,
        alarm_id: row.get(1)?,
        action: parse_choice::<ActionState>(2, &action)?,
        source: AlertSource {
            arn_id: row.get(3)?,
            name: row.get(4)?,
            value: row.get(5)?,
        },
    })
}

/// Expected columns: id, alarm_id, dimension_id, name, value
pub fn row_to_alarm_dimension(row: &Row) -> rusqlite::Result<AlarmDimension> {
    Ok(AlarmDimension {
        id: row.get(0)?,
        alarm_id: row.get(1)?,
        dimension: Dimension {
            dimension_id: row.get(2)?,
            name: row.get(3)?,
            value: row.get(4)?,
        },
    })
}

// ============================================================================
// Helper functions
// ============================================================================

/// Parse a stored choice value.
fn parse_choice<C: Choice>(column: usize, s: &str) -> rusqlite::Result<C> {
    C::parse(s).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            column,
            Type::Text,
            Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Unknown choice value: {s}"),
            )),
        )
    })
}

/// Parse a datetime from RFC 3339 string.
fn parse_datetime(column: usize, s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(column, Type::Text, Box::new(e)))
}

/// Format a DateTime<Utc> for SQLite storage (RFC 3339).
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bugwatch_core::cloudwatch::{Namespace, Statistic, TreatMissingData};
    use rusqlite::Connection;

    #[test]
    fn test_format_datetime() {
        let dt = DateTime::parse_from_rfc3339("2024-06-15T10:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(format_datetime(&dt), "2024-06-15T10:30:00+00:00");
    }

    #[test]
    fn test_parse_datetime_round_trip() {
        let now = Utc::now();
        let parsed = parse_datetime(0, &format_datetime(&now)).unwrap();
        assert_eq!(parsed, now);
    }

    #[test]
    fn test_parse_datetime_invalid() {
        assert!(parse_datetime(0, "yesterday").is_err());
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!(
            parse_choice::<Namespace>(0, "AWS/EC2").unwrap(),
            Namespace::Ec2
        );
        assert_eq!(
            parse_choice::<TreatMissingData>(0, "notBreaching").unwrap(),
            TreatMissingData::NotBreaching
        );
        assert!(parse_choice::<Statistic>(0, "Median").is_err());
    }

    #[test]
    fn test_row_to_alarm() {
        let conn = Connection::open_in_memory().unwrap();
        let alarm = conn
            .query_row(
                "SELECT 3, 'errors', 'Lambda errors', 'Maximum', 5, 'GreaterThanThreshold', \
                 60, 1, 'Errors', 'AWS/Lambda', 'breaching', 2",
                [],
                row_to_alarm,
            )
            .unwrap();

        assert_eq!(alarm.alarm_id, 3);
        assert_eq!(alarm.statistic, Statistic::Maximum);
        assert_eq!(alarm.threshold, 5);
        assert!(alarm.is_active);
        assert_eq!(alarm.namespace, Namespace::Lambda);
        assert_eq!(alarm.treat_missing_data, TreatMissingData::Breaching);
        assert_eq!(alarm.evaluation_periods, 2);
    }

    #[test]
    fn test_row_to_alarm_action_parses_state() {
        let conn = Connection::open_in_memory().unwrap();
        let action = conn
            .query_row(
                "SELECT 1, 2, 'INSUFFICIENT_DATA', 3, 'ops', 'arn:aws:sns:us-east-1:123456789012:ops'",
                [],
                row_to_alarm_action,
            )
            .unwrap();

        assert_eq!(action.action, ActionState::InsufficientData);
        assert_eq!(action.source.arn_id, 3);
    }
}
