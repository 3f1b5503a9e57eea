// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod forms;

use axum::{
    Json, Router,
    extract::{Path, RawQuery, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use talent_profile_api::ReturnPath;
use talent_profile_forms::FormKind;
use tracing::{info, warn};

use crate::forms::{EvaluateRequest, EvaluateResponse, LoadRequest, LoadResponse};

/// Talent Profile Server - HTTP service evaluating profile forms
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Route used after a save when the query names no return path
    #[arg(long, default_value = "/profile")]
    default_return_path: String,
}

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    /// Route used when a query names no return path.
    default_return_path: Arc<str>,
}

/// Error response body.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// Health check response.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct HealthResponse {
    status: String,
}

/// Resolved return path response.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct ReturnPathResponse {
    path: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
#[derive(Debug)]
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

/// Parses the `{kind}` path segment.
fn parse_kind(kind: &str) -> Result<FormKind, HttpError> {
    FormKind::from_str(kind).map_err(|err| {
        warn!(kind, "Unknown form kind requested");
        HttpError {
            status: StatusCode::NOT_FOUND,
            message: err.to_string(),
        }
    })
}

/// Handler for GET `/health`.
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("ok"),
    })
}

/// Handler for POST `/forms/{kind}/load`.
async fn handle_load_form(
    Path(kind): Path<String>,
    Json(req): Json<LoadRequest>,
) -> Result<Json<LoadResponse>, HttpError> {
    let kind: FormKind = parse_kind(&kind)?;
    info!(%kind, "Handling load form request");

    let response: LoadResponse = forms::load(kind, req)?;
    Ok(Json(response))
}

/// Handler for POST `/forms/{kind}/evaluate`.
async fn handle_evaluate_form(
    Path(kind): Path<String>,
    Json(req): Json<EvaluateRequest>,
) -> Result<Json<EvaluateResponse>, HttpError> {
    let kind: FormKind = parse_kind(&kind)?;
    info!(%kind, "Handling evaluate form request");

    let response: EvaluateResponse = forms::evaluate(kind, req)?;
    Ok(Json(response))
}

/// Handler for GET `/return-path`.
async fn handle_return_path(
    AxumState(app_state): AxumState<AppState>,
    RawQuery(query): RawQuery,
) -> Json<ReturnPathResponse> {
    let path: ReturnPath =
        ReturnPath::resolve(query.as_deref().unwrap_or_default(), &app_state.default_return_path);

    Json(ReturnPathResponse {
        path: path.as_str().to_string(),
    })
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route("/forms/{kind}/load", post(handle_load_form))
        .route("/forms/{kind}/evaluate", post(handle_evaluate_form))
        .route("/return-path", get(handle_return_path))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Talent Profile Server");

    let app_state: AppState = AppState {
        default_return_path: Arc::from(args.default_return_path.as_str()),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used)]

    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode as HttpStatusCode},
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn create_test_app() -> Router {
        build_router(AppState {
            default_return_path: Arc::from("/profile"),
        })
    }

    async fn post_json(app: Router, uri: &str, body: &Value) -> (HttpStatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::to_string(body).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();
        read_json(response).await
    }

    async fn get_json(app: Router, uri: &str) -> (HttpStatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        read_json(response).await
    }

    async fn read_json(response: Response) -> (HttpStatusCode, Value) {
        let status: HttpStatusCode = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body_bytes).unwrap())
    }

    fn government_context() -> Value {
        json!({
            "departments": [{ "id": "dept-1", "name": "Treasury Board Secretariat" }],
            "classifications": [
                { "id": "class-it-1", "group": "IT", "level": 1 },
                { "id": "class-it-2", "group": "IT", "level": 2 }
            ]
        })
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json(create_test_app(), "/health").await;

        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(body, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn test_unknown_form_kind_is_not_found() {
        let (status, body) = post_json(
            create_test_app(),
            "/forms/skills/evaluate",
            &json!({ "values": {} }),
        )
        .await;

        assert_eq!(status, HttpStatusCode::NOT_FOUND);
        assert_eq!(body["error"], json!(true));
    }

    #[tokio::test]
    async fn test_malformed_values_are_unprocessable() {
        let (status, body) = post_json(
            create_test_app(),
            "/forms/about-me/evaluate",
            &json!({ "values": { "preferredLang": "KLINGON" } }),
        )
        .await;

        assert_eq!(status, HttpStatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], json!(true));
        assert!(body["message"].as_str().unwrap().starts_with("Malformed values"));
    }

    #[tokio::test]
    async fn test_evaluate_non_employee_clears_government_fields() {
        let (status, body) = post_json(
            create_test_app(),
            "/forms/government-info/evaluate",
            &json!({
                "values": {
                    "govEmployeeYesNo": "no",
                    "department": "dept-1",
                    "govEmployeeType": "INDETERMINATE",
                    "currentClassificationGroup": "IT",
                    "currentClassificationLevel": "2",
                    "priorityEntitlementYesNo": "no"
                },
                "context": government_context(),
                "subject_id": "user-1"
            }),
        )
        .await;

        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(body["errors"], json!([]));
        assert_eq!(body["mutation"]["operationName"], json!("UpdateUserAsUser"));
        assert_eq!(body["payload"]["isGovEmployee"], json!(false));
        assert_eq!(body["payload"]["govEmployeeType"], Value::Null);
        assert_eq!(body["payload"]["department"], Value::Null);
        assert_eq!(
            body["payload"]["currentClassification"]["connect"],
            Value::Null
        );
        assert!(
            !body["visible_sections"]
                .as_array()
                .unwrap()
                .contains(&json!("govEmployee"))
        );
    }

    #[tokio::test]
    async fn test_evaluate_reports_required_visible_fields() {
        let (status, body) = post_json(
            create_test_app(),
            "/forms/government-info/evaluate",
            &json!({
                "values": { "govEmployeeYesNo": "yes", "priorityEntitlementYesNo": "no" },
                "context": government_context()
            }),
        )
        .await;

        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(body["payload"], Value::Null);
        let errors: Vec<&str> = body["errors"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["field"].as_str().unwrap())
            .collect();
        assert!(errors.contains(&"department"));
        assert!(errors.contains(&"govEmployeeType"));
    }

    #[tokio::test]
    async fn test_evaluate_replays_edit_over_previous_values() {
        let previous: Value = json!({
            "govEmployeeYesNo": "yes",
            "department": "dept-1",
            "govEmployeeType": "INDETERMINATE",
            "currentClassificationGroup": "IT",
            "currentClassificationLevel": "2",
            "priorityEntitlementYesNo": "no"
        });
        let mut values: Value = previous.clone();
        values["currentClassificationGroup"] = json!("FI");

        let (status, body) = post_json(
            create_test_app(),
            "/forms/government-info/evaluate",
            &json!({
                "values": values,
                "previous": previous,
                "context": government_context()
            }),
        )
        .await;

        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(body["reset_sections"], json!(["classificationLevel"]));
        assert_eq!(body["values"]["currentClassificationLevel"], Value::Null);
    }

    #[tokio::test]
    async fn test_load_maps_record_to_values() {
        let (status, body) = post_json(
            create_test_app(),
            "/forms/experience/load",
            &json!({
                "record": {
                    "id": "exp-1",
                    "userId": "user-1",
                    "experienceType": "work",
                    "role": "Analyst",
                    "division": "Census",
                    "startDate": "2020-01-15"
                }
            }),
        )
        .await;

        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(body["kind"], json!("experience"));
        assert_eq!(body["subject_id"], json!("exp-1"));
        assert_eq!(body["values"]["role"], json!("Analyst"));
        assert_eq!(body["values"]["team"], json!("Census"));
        assert_eq!(body["values"]["currentRole"], json!(true));
    }

    #[tokio::test]
    async fn test_evaluate_picks_mutation_from_experience_type() {
        let (status, body) = post_json(
            create_test_app(),
            "/forms/experience/evaluate",
            &json!({
                "values": {
                    "userId": "user-1",
                    "experienceType": "award",
                    "awardTitle": "Deputy Minister Award",
                    "issuedBy": "Treasury Board Secretariat",
                    "awardedDate": "2022-11-15",
                    "awardedTo": "MY_TEAM",
                    "awardedScope": "ORGANIZATIONAL",
                    "skills": [{ "id": "skill-1", "details": "Ran the rollout" }]
                }
            }),
        )
        .await;

        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(body["mutation"]["operationName"], json!("CreateAwardExperience"));
        assert_eq!(body["subject_id"], json!("user-1"));
        assert_eq!(body["visible_sections"], json!(["award"]));
        assert_eq!(body["payload"]["awardedScope"], json!("ORGANIZATIONAL"));
        assert_eq!(
            body["payload"]["skills"],
            json!({ "sync": [{ "id": "skill-1", "details": "Ran the rollout" }] })
        );
    }

    #[tokio::test]
    async fn test_return_path() {
        let (_, from) = get_json(create_test_app(), "/return-path?from=%2Fprofile%2Fskills").await;
        let (_, application) =
            get_json(create_test_app(), "/return-path?applicationId=app-1").await;
        let (status, fallback) = get_json(create_test_app(), "/return-path").await;

        assert_eq!(from["path"], json!("/profile/skills"));
        assert_eq!(application["path"], json!("/applications/app-1/review"));
        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(fallback["path"], json!("/profile"));
    }
}
