use anyhow::Result;

use bugwatch_core::bugs::{BugForm, DeveloperForm, NewBug, UserForm};
use bugwatch_core::cloudwatch::{
    ActionState, AlarmForm, AlertSourceForm, ComparisonOperator, DimensionForm, Statistic,
    TreatMissingData,
};
use bugwatch_core::storage::ListParams;

use crate::state::AppState;

/// Seeds an empty database with a small demonstration dataset.
///
/// Alarms are written to storage only; nothing is sent to CloudWatch.
/// Does nothing when any dimension already exists.
pub async fn seed_demo_data(state: &AppState) -> Result<()> {
    let existing = state.dimensions.list_dimensions(&ListParams::new(1)).await?;
    if existing.total > 0 {
        tracing::info!("Database already has data, skipping demo seed");
        return Ok(());
    }

    let topic = state
        .alert_sources
        .create_alert_source(&AlertSourceForm::new(
            "Lambda error topic",
            "arn:aws:sns:ap-southeast-2:058188477434:LambdaErrorMetrix",
        ))
        .await?;
    let function = state
        .alert_sources
        .create_alert_source(&AlertSourceForm::new(
            "Error log function",
            "arn:aws:lambda:ap-southeast-2:058188477434:function:ErrorLogFunctionPython",
        ))
        .await?;

    let orders = state
        .dimensions
        .create_dimension(&DimensionForm::new("FunctionName", "orders-api"))
        .await?;
    let billing = state
        .dimensions
        .create_dimension(&DimensionForm::new("FunctionName", "billing-worker"))
        .await?;

    state
        .alarms
        .create_alarm(
            &AlarmForm::new("orders-api-errors", "Errors in the orders API", "Errors")
                .with_statistic(Statistic::Sum)
                .with_threshold(1, ComparisonOperator::GreaterThanOrEqualToThreshold)
                .with_period(60)
                .with_treat_missing_data(TreatMissingData::NotBreaching)
                .with_action(ActionState::Alarm, topic.arn_id)
                .with_action(ActionState::Alarm, function.arn_id)
                .with_action(ActionState::Ok, topic.arn_id)
                .with_dimension(orders.dimension_id),
        )
        .await?;
    state
        .alarms
        .create_alarm(
            &AlarmForm::new("billing-throttles", "Throttled billing invocations", "Throttles")
                .with_statistic(Statistic::Maximum)
                .with_threshold(5, ComparisonOperator::GreaterThanThreshold)
                .with_period(300)
                .with_action(ActionState::Alarm, topic.arn_id)
                .with_action(ActionState::InsufficientData, topic.arn_id)
                .with_dimension(billing.dimension_id),
        )
        .await?;

    let mut developer_ids = Vec::new();
    for username in ["ana", "ben", "chloe"] {
        let user = state.users.create_user(&UserForm::new(username)).await?;
        let developer = state
            .developers
            .create_developer(&DeveloperForm::new(user.id))
            .await?;
        developer_ids.push(developer.id);
    }

    state
        .bugs
        .create_bug(&NewBug::new("orders-api-7f3a91", orders.dimension_id))
        .await?;
    state
        .bugs
        .create_bug(&NewBug::new("orders-api-c02be4", orders.dimension_id))
        .await?;
    state
        .bugs
        .create_bug(&NewBug::new("billing-worker-5d18aa", billing.dimension_id))
        .await?;

    state
        .bugs
        .update_bug(
            "orders-api-7f3a91",
            &BugForm::default().with_owners(developer_ids.iter().take(2).copied()),
        )
        .await?;
    state
        .bugs
        .update_bug(
            "billing-worker-5d18aa",
            &BugForm::default()
                .with_resolved(true)
                .with_owners(developer_ids.last().copied()),
        )
        .await?;

    tracing::info!("Seeded demo data");
    Ok(())
}
