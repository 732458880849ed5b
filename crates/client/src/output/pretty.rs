//! Pretty output formatting.

use bugwatch_core::bugs::{BugDetail, BugSummary, Developer, User};
use bugwatch_core::cloudwatch::{AlarmConfig, AlarmSummary, AlertSource, Choice, Dimension};
use bugwatch_core::storage::Page;

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Format a page of rows under a titled header, with a paging footer.
fn format_page<T>(title: &str, page: &Page<T>, format_item: impl Fn(&T) -> String) -> String {
    if page.items.is_empty() {
        return format!("No {} found.", title.to_lowercase());
    }
    let mut output = format!("{} ({})\n", title, page.total);
    output.push_str(&"-".repeat(40));
    for item in &page.items {
        output.push_str(&format!("\n{}", format_item(item)));
        output.push('\n');
    }
    output.push_str(&format!("Page {} of {}", page.page, page.num_pages()));
    output
}

/// Format an alarm list row.
pub fn format_alarm_summary(alarm: &AlarmSummary) -> String {
    format!("{}\n  ID: {}", alarm.name, alarm.alarm_id)
}

/// Format alarms for display.
pub fn format_alarms(page: &Page<AlarmSummary>) -> String {
    format_page("ALARMS", page, format_alarm_summary)
}

/// Format an alarm with its actions and dimensions.
pub fn format_alarm(config: &AlarmConfig) -> String {
    let alarm = &config.alarm;
    let mut output = format!(
        "{} [{}]\n  ID: {}\n  Description: {}\n  Metric: {} {} ({})\n  Condition: {} {} for {} x {}s\n  Missing data: {}",
        alarm.name,
        if alarm.is_active { "active" } else { "inactive" },
        alarm.alarm_id,
        alarm.description,
        alarm.namespace.as_str(),
        alarm.metric_name,
        alarm.statistic.label(),
        alarm.comparison_operator.label(),
        alarm.threshold,
        alarm.evaluation_periods,
        alarm.period,
        alarm.treat_missing_data.label(),
    );
    for action in &config.actions {
        output.push_str(&format!(
            "\n  On {}: {}",
            action.action.as_str(),
            action.source.value
        ));
    }
    for dimension in &config.dimensions {
        output.push_str(&format!(
            "\n  Dimension: {}={}",
            dimension.dimension.name, dimension.dimension.value
        ));
    }
    output
}

/// Format an alert source for display.
pub fn format_alert_source(source: &AlertSource) -> String {
    format!("{}\n  ID: {}\n  ARN: {}", source.name, source.arn_id, source.value)
}

/// Format alert sources for display.
pub fn format_alert_sources(page: &Page<AlertSource>) -> String {
    format_page("ALERT SOURCES", page, format_alert_source)
}

/// Format a dimension for display.
pub fn format_dimension(dimension: &Dimension) -> String {
    format!(
        "{}\n  ID: {}\n  Name: {}",
        dimension.value, dimension.dimension_id, dimension.name
    )
}

/// Format dimensions for display.
pub fn format_dimensions(page: &Page<Dimension>) -> String {
    format_page("DIMENSIONS", page, format_dimension)
}

/// Format a user for display.
pub fn format_user(user: &User) -> String {
    format!(
        "{}\n  ID: {}\n  Joined: {}",
        user,
        user.id,
        user.created_at.format(DATE_FORMAT)
    )
}

/// Format users for display.
pub fn format_users(page: &Page<User>) -> String {
    format_page("USERS", page, format_user)
}

/// Format a developer for display.
pub fn format_developer(developer: &Developer) -> String {
    format!(
        "{}\n  ID: {}\n  User ID: {}",
        developer, developer.id, developer.user_id
    )
}

/// Format developers for display.
pub fn format_developers(page: &Page<Developer>) -> String {
    format_page("DEVELOPERS", page, format_developer)
}

/// Format a bug list row.
pub fn format_bug_summary(bug: &BugSummary) -> String {
    format!(
        "{} [{}]\n  Lambda: {}\n  Developers: {}\n  Created: {}",
        bug.bug_id,
        if bug.resolved { "resolved" } else { "open" },
        bug.lambda_name,
        bug.developers,
        bug.created_at.format(DATE_FORMAT)
    )
}

/// Format bugs for display.
pub fn format_bugs(page: &Page<BugSummary>) -> String {
    format_page("BUGS", page, format_bug_summary)
}

/// Format a bug with its owners.
pub fn format_bug(detail: &BugDetail) -> String {
    let mut output = format_bug_summary(&detail.summary());
    output.push_str(&format!(
        "\n  Updated: {}",
        detail.bug.updated_at.format(DATE_FORMAT)
    ));
    for owner in &detail.owners {
        output.push_str(&format!("\n  Owner: {}", owner.developer));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use bugwatch_core::storage::ListParams;
    use chrono::{TimeZone, Utc};

    fn dimension(id: i64, value: &str) -> Dimension {
        Dimension {
            dimension_id: id,
            name: "FunctionName".to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_format_empty_page() {
        let page: Page<Dimension> = Page::new(vec![], &ListParams::new(100), 0);
        assert_eq!(format_dimensions(&page), "No dimensions found.");
    }

    #[test]
    fn test_format_page_footer() {
        let params = ListParams::new(1).with_page(2);
        let page = Page::new(vec![dimension(2, "billing-worker")], &params, 3);

        let output = format_dimensions(&page);

        assert!(output.starts_with("DIMENSIONS (3)"));
        assert!(output.contains("billing-worker\n  ID: 2"));
        assert!(output.ends_with("Page 2 of 3"));
    }

    #[test]
    fn test_format_user() {
        let user = User {
            id: 7,
            username: "ana".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap(),
        };

        assert_eq!(format_user(&user), "ana\n  ID: 7\n  Joined: 2024-06-15 10:30");
    }
}
