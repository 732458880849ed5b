use axum::{
    http::{header, Method, StatusCode},
    routing::{delete, get, post, MethodRouter},
    Router,
};
use bugwatch_core::admin::{
    ModelAdmin, ALARM_ADMIN, ALERT_SOURCE_ADMIN, BUG_ADMIN, DEVELOPER_ADMIN, DIMENSION_ADMIN,
    USER_ADMIN,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        admin::{get_model, list_models},
        alarms::{create_alarm, delete_alarm, get_alarm, list_alarms, update_alarm},
        alert_sources::{
            create_alert_source, delete_alert_source, get_alert_source, list_alert_sources,
            update_alert_source,
        },
        bugs::{create_bug, delete_bug, get_bug, list_bugs, update_bug},
        developers::{
            create_developer, delete_developer, get_developer, list_developers, update_developer,
        },
        dimensions::{
            create_dimension, delete_dimension, get_dimension, list_dimensions, update_dimension,
        },
        health::{healthz, livez},
        users::{create_user, delete_user, list_users},
    },
    state::AppState,
};

/// List route for a model, with a create method only when its admin allows adding.
fn collection_route(
    admin: &ModelAdmin,
    list: MethodRouter<AppState>,
    create: MethodRouter<AppState>,
) -> MethodRouter<AppState> {
    if admin.has_add_permission() {
        list.merge(create)
    } else {
        list
    }
}

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE]);

    // API routes with CORS
    let api_routes = Router::new()
        // Admin registry
        .route("/admin/models", get(list_models))
        .route("/admin/models/{name}", get(get_model))
        // Alarm configuration routes
        .route(
            "/alarms",
            collection_route(&ALARM_ADMIN, get(list_alarms), post(create_alarm)),
        )
        .route(
            "/alarms/{id}",
            get(get_alarm).put(update_alarm).delete(delete_alarm),
        )
        .route(
            "/alert-sources",
            collection_route(
                &ALERT_SOURCE_ADMIN,
                get(list_alert_sources),
                post(create_alert_source),
            ),
        )
        .route(
            "/alert-sources/{id}",
            get(get_alert_source)
                .put(update_alert_source)
                .delete(delete_alert_source),
        )
        .route(
            "/dimensions",
            collection_route(&DIMENSION_ADMIN, get(list_dimensions), post(create_dimension)),
        )
        .route(
            "/dimensions/{id}",
            get(get_dimension)
                .put(update_dimension)
                .delete(delete_dimension),
        )
        // Bug tracking routes
        .route(
            "/users",
            collection_route(&USER_ADMIN, get(list_users), post(create_user)),
        )
        .route("/users/{id}", delete(delete_user))
        .route(
            "/developers",
            collection_route(&DEVELOPER_ADMIN, get(list_developers), post(create_developer)),
        )
        .route(
            "/developers/{id}",
            get(get_developer)
                .put(update_developer)
                .delete(delete_developer),
        )
        .route(
            "/bugs",
            collection_route(&BUG_ADMIN, get(list_bugs), post(create_bug)),
        )
        .route(
            "/bugs/{bug_id}",
            get(get_bug).put(update_bug).delete(delete_bug),
        )
        .layer(cors);

    let request_timeout = state.request_timeout;

    // Main application router
    Router::new()
        .route("/livez", get(livez))
        .route("/healthz", get(healthz))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use bugwatch_core::bugs::{DeveloperForm, NewBug, UserForm};
    use bugwatch_core::cloudwatch::{AlarmPublisher, MetricAlarmRequest, PublishError};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::cloudwatch::DryRunPublisher;

    const TOPIC: &str = "arn:aws:sns:ap-southeast-2:058188477434:LambdaErrorMetrix";
    const FUNCTION: &str =
        "arn:aws:lambda:ap-southeast-2:058188477434:function:ErrorLogFunctionPython";

    struct FailingPublisher;

    #[async_trait]
    impl AlarmPublisher for FailingPublisher {
        async fn put_metric_alarm(
            &self,
            request: &MetricAlarmRequest,
        ) -> Result<(), PublishError> {
            Err(PublishError::Rejected {
                alarm_name: request.alarm_name.clone(),
                message: "Invalid period".to_string(),
            })
        }
    }

    async fn dry_run_state() -> (AppState, DryRunPublisher) {
        let publisher = DryRunPublisher::new();
        let state = AppState::in_memory(Arc::new(publisher.clone())).await;
        (state, publisher)
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, body.to_vec())
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn form_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn alarm_body(arn_id: i64, dimension_id: i64) -> Value {
        json!({
            "name": "lambda-errors-alarm",
            "description": "Alarm for Lambda errors",
            "statistic": "Sum",
            "threshold": 3,
            "comparison_operator": "GreaterThanThreshold",
            "period": 10,
            "metric_name": "Errors",
            "namespace": "AWS/Lambda",
            "treat_missing_data": "notBreaching",
            "actions": [
                {"action": "ALARM", "arn_id": arn_id},
                {"action": "OK", "arn_id": arn_id},
                {"action": "INSUFFICIENT_DATA", "arn_id": arn_id}
            ],
            "dimensions": [{"dimension_id": dimension_id}]
        })
    }

    /// Creates one alert source and one dimension through the API.
    async fn seed_alarm_refs(app: &Router) -> (i64, i64) {
        let (status, body) = send(
            app,
            form_request("POST", "/api/alert-sources", &format!("name=Ops+topic&value={TOPIC}")),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let source: Value = serde_json::from_slice(&body).unwrap();

        let (status, body) = send(
            app,
            form_request("POST", "/api/dimensions", "name=FunctionName&value=orders-api"),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let dimension: Value = serde_json::from_slice(&body).unwrap();

        (
            source["arn_id"].as_i64().unwrap(),
            dimension["dimension_id"].as_i64().unwrap(),
        )
    }

    #[tokio::test]
    async fn test_livez_and_healthz() {
        let (state, _) = dry_run_state().await;
        let app = create_app(state);

        let (status, _) = send(&app, get_request("/livez")).await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(&app, get_request("/healthz")).await;
        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["healthy"], true);
    }

    #[tokio::test]
    async fn test_admin_registry() {
        let (state, _) = dry_run_state().await;
        let app = create_app(state);

        let (status, body) = send(&app, get_request("/api/admin/models")).await;
        assert_eq!(status, StatusCode::OK);
        let models: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(models[0]["model"], "Alarm");
        assert_eq!(models[0]["list_display"], json!(["alarm_id", "name"]));

        let (status, body) = send(&app, get_request("/api/admin/models/bug")).await;
        assert_eq!(status, StatusCode::OK);
        let bug: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(bug["can_add"], false);

        let (status, _) = send(&app, get_request("/api/admin/models/widgets")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_bug_add_follows_admin_permission() {
        assert!(!BUG_ADMIN.has_add_permission());

        let (state, _) = dry_run_state().await;
        let dimension = state
            .dimensions
            .create_dimension(&bugwatch_core::cloudwatch::DimensionForm::new(
                "FunctionName",
                "orders-api",
            ))
            .await
            .unwrap();
        let body = json!({"bug_id": " 8f2c-ingest ", "dimension_id": dimension.dimension_id});

        let app = create_app(state.clone());
        let (status, _) = send(&app, json_request("POST", "/api/bugs", &body)).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

        let addable = ModelAdmin {
            can_add: true,
            ..BUG_ADMIN
        };
        let app = Router::new()
            .route(
                "/bugs",
                collection_route(&addable, get(list_bugs), post(create_bug)),
            )
            .with_state(state.clone());
        let (status, body) = send(&app, json_request("POST", "/bugs", &body)).await;
        assert_eq!(status, StatusCode::CREATED);
        let bug: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(bug["bug_id"], "8f2c-ingest");
        assert!(state.bugs.get_bug("8f2c-ingest").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_padded_arn_is_saved_trimmed() {
        let (state, _) = dry_run_state().await;
        let app = create_app(state);

        let (status, body) = send(
            &app,
            form_request(
                "POST",
                "/api/alert-sources",
                "name=+Ops+&value=+arn:aws:sns:us-east-1:123456789012:ops+",
            ),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        let source: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(source["name"], "Ops");
        assert_eq!(source["value"], "arn:aws:sns:us-east-1:123456789012:ops");
    }

    #[tokio::test]
    async fn test_blank_or_bad_page_falls_back_to_first() {
        let (state, _) = dry_run_state().await;
        let app = create_app(state);

        for uri in ["/api/dimensions?page=", "/api/dimensions?page=last"] {
            let (status, body) = send(&app, get_request(uri)).await;
            assert_eq!(status, StatusCode::OK);
            let page: Value = serde_json::from_slice(&body).unwrap();
            assert_eq!(page["page"], 1);
        }
    }

    #[tokio::test]
    async fn test_invalid_arn_is_rejected() {
        let (state, _) = dry_run_state().await;
        let app = create_app(state);

        let (status, body) = send(
            &app,
            form_request("POST", "/api/alert-sources", "name=Broken&value=not-an-arn"),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            json,
            json!({"field": "value", "code": "Invalid_ARN", "message": "Invalid AWS ARN"})
        );
    }

    #[tokio::test]
    async fn test_lambda_arn_is_accepted() {
        let (state, _) = dry_run_state().await;
        let app = create_app(state);

        let (status, _) = send(
            &app,
            form_request("POST", "/api/alert-sources", &format!("name=Fn&value={FUNCTION}")),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_create_alarm_publishes_once() {
        let (state, publisher) = dry_run_state().await;
        let app = create_app(state);
        let (arn_id, dimension_id) = seed_alarm_refs(&app).await;

        let (status, body) = send(
            &app,
            json_request("POST", "/api/alarms", &alarm_body(arn_id, dimension_id)),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        let created: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(created["name"], "lambda-errors-alarm");
        assert_eq!(created["actions"].as_array().unwrap().len(), 3);

        let requests = publisher.requests().await;
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.alarm_name, "lambda-errors-alarm");
        assert_eq!(request.period, 10);
        assert_eq!(request.ok_actions, vec![TOPIC.to_string()]);
        assert_eq!(request.alarm_actions, vec![TOPIC.to_string(), TOPIC.to_string()]);
        assert_eq!(request.dimensions[0].value, "orders-api");
    }

    #[tokio::test]
    async fn test_update_alarm_publishes_again() {
        let (state, publisher) = dry_run_state().await;
        let app = create_app(state);
        let (arn_id, dimension_id) = seed_alarm_refs(&app).await;
        let (_, body) = send(
            &app,
            json_request("POST", "/api/alarms", &alarm_body(arn_id, dimension_id)),
        )
        .await;
        let created: Value = serde_json::from_slice(&body).unwrap();
        let alarm_id = created["alarm_id"].as_i64().unwrap();

        let mut update = alarm_body(arn_id, dimension_id);
        update["is_active"] = json!(false);
        let (status, _) = send(
            &app,
            json_request("PUT", &format!("/api/alarms/{alarm_id}"), &update),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let requests = publisher.requests().await;
        assert_eq!(requests.len(), 2);
        assert!(!requests[1].actions_enabled);
    }

    #[tokio::test]
    async fn test_invalid_alarm_is_not_saved_or_published() {
        let (state, publisher) = dry_run_state().await;
        let app = create_app(state);
        let (arn_id, dimension_id) = seed_alarm_refs(&app).await;

        let mut body = alarm_body(arn_id, dimension_id);
        body["period"] = json!(5);
        let (status, response) = send(&app, json_request("POST", "/api/alarms", &body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json: Value = serde_json::from_slice(&response).unwrap();
        assert_eq!(json["field"], "period");
        assert!(publisher.requests().await.is_empty());

        let (_, list) = send(&app, get_request("/api/alarms")).await;
        let list: Value = serde_json::from_slice(&list).unwrap();
        assert_eq!(list["total"], 0);
    }

    #[tokio::test]
    async fn test_publish_failure_keeps_alarm() {
        let state = AppState::in_memory(Arc::new(FailingPublisher)).await;
        let app = create_app(state);
        let (arn_id, dimension_id) = seed_alarm_refs(&app).await;

        let (status, _) = send(
            &app,
            json_request("POST", "/api/alarms", &alarm_body(arn_id, dimension_id)),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);

        let (_, list) = send(&app, get_request("/api/alarms")).await;
        let list: Value = serde_json::from_slice(&list).unwrap();
        assert_eq!(list["total"], 1);
        assert_eq!(list["items"][0]["name"], "lambda-errors-alarm");
    }

    #[tokio::test]
    async fn test_protected_references_conflict() {
        let (state, _) = dry_run_state().await;
        let app = create_app(state);
        let (arn_id, dimension_id) = seed_alarm_refs(&app).await;
        send(
            &app,
            json_request("POST", "/api/alarms", &alarm_body(arn_id, dimension_id)),
        )
        .await;

        let delete_request = |uri: String| {
            Request::builder()
                .method("DELETE")
                .uri(uri)
                .body(Body::empty())
                .unwrap()
        };

        let (status, _) = send(&app, delete_request(format!("/api/alert-sources/{arn_id}"))).await;
        assert_eq!(status, StatusCode::CONFLICT);

        let (status, _) = send(&app, delete_request(format!("/api/dimensions/{dimension_id}"))).await;
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_bug_change_form() {
        let (state, _) = dry_run_state().await;
        let (_, dimension_id) = {
            let app = create_app(state.clone());
            seed_alarm_refs(&app).await
        };
        state
            .bugs
            .create_bug(&NewBug::new("8f2c-ingest", dimension_id))
            .await
            .unwrap();
        let user = state.users.create_user(&UserForm::new("ana")).await.unwrap();
        let developer = state
            .developers
            .create_developer(&DeveloperForm::new(user.id))
            .await
            .unwrap();
        let app = create_app(state);

        let (status, body) = send(
            &app,
            json_request(
                "PUT",
                "/api/bugs/8f2c-ingest",
                &json!({"resolved": true, "owners": [{"developer_id": developer.id}]}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let detail: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(detail["resolved"], true);
        assert_eq!(detail["owners"][0]["developer"]["username"], "ana");

        let (_, body) = send(&app, get_request("/api/bugs")).await;
        let list: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(list["items"][0]["developers"], 1);
        assert_eq!(list["items"][0]["lambda_name"], "orders-api");

        let (status, _) = send(&app, get_request("/api/bugs/missing")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_developer_list_is_paged_by_ten() {
        let (state, _) = dry_run_state().await;
        let app = create_app(state);

        for i in 0..11 {
            let (status, body) =
                send(&app, form_request("POST", "/api/users", &format!("username=dev{i}"))).await;
            assert_eq!(status, StatusCode::CREATED);
            let user: Value = serde_json::from_slice(&body).unwrap();
            let (status, _) = send(
                &app,
                form_request("POST", "/api/developers", &format!("user_id={}", user["id"])),
            )
            .await;
            assert_eq!(status, StatusCode::CREATED);
        }

        let (_, body) = send(&app, get_request("/api/developers")).await;
        let page: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(page["items"].as_array().unwrap().len(), 10);
        assert_eq!(page["per_page"], 10);
        assert_eq!(page["total"], 11);

        let (_, body) = send(&app, get_request("/api/developers?page=2")).await;
        let page: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(page["items"].as_array().unwrap().len(), 1);

        let (_, body) = send(&app, get_request("/api/developers?q=dev10")).await;
        let page: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(page["total"], 1);
    }

    #[tokio::test]
    async fn test_missing_alarm_is_not_found() {
        let (state, _) = dry_run_state().await;
        let app = create_app(state);

        let (status, _) = send(&app, get_request("/api/alarms/42")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
