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

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use time::{Date, OffsetDateTime};
use tokio::sync::Mutex;
use tracing::{error, info};

use staffing_api::{
    ApiError, AvailabilityQuery, AvailabilityResponse, CheckAvailabilityQuery,
    CheckAvailabilityResponse, EligibilityQuery, EligibilityResponse, check_availability,
    check_project_eligibility, get_available_for_project, get_available_for_training,
    get_profiles_with_availability,
};
use staffing_persistence::Persistence;

/// Staffing Server - HTTP server for workforce availability queries
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// `MySQL`/`MariaDB` connection URL. Takes precedence over `--database`.
    #[arg(long)]
    mysql_url: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,
}

/// Application state shared across handlers.
///
/// The persistence layer holds a single connection, so it is wrapped in a
/// Mutex and each request holds the lock for the duration of its reads.
#[derive(Clone)]
struct AppState {
    persistence: Arc<Mutex<Persistence>>,
}

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Always `false`.
    success: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            success: false,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::DomainRuleViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal { .. } => {
                error!(error = %err, "Request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.message().to_string(),
        }
    }
}

/// The reference date for age calculations.
fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

/// Handler for GET `/availability`.
///
/// Splits the filtered population into available and unavailable profiles
/// for the requested window.
async fn handle_get_availability(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<AvailabilityResponse>, HttpError> {
    info!(
        start_date = query.start_date.as_deref().unwrap_or(""),
        end_date = query.end_date.as_deref().unwrap_or(""),
        purpose = query.purpose.as_deref().unwrap_or("all"),
        "Handling availability request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: AvailabilityResponse =
        get_profiles_with_availability(&mut *persistence, &query, today())?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/availability/check/{profile_id}`.
async fn handle_check_availability(
    AxumState(app_state): AxumState<AppState>,
    Path(profile_id): Path<i64>,
    Query(query): Query<CheckAvailabilityQuery>,
) -> Result<Json<CheckAvailabilityResponse>, HttpError> {
    info!(profile_id, "Handling availability check request");

    let mut persistence = app_state.persistence.lock().await;
    let response: CheckAvailabilityResponse =
        check_availability(&mut *persistence, profile_id, &query)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/availability/project/{project_id}`.
///
/// Uses the project's own dates; its current assignees are not blocked by it.
async fn handle_available_for_project(
    AxumState(app_state): AxumState<AppState>,
    Path(project_id): Path<i64>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<AvailabilityResponse>, HttpError> {
    info!(project_id, "Handling project availability request");

    let mut persistence = app_state.persistence.lock().await;
    let response: AvailabilityResponse =
        get_available_for_project(&mut *persistence, project_id, &query, today())?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/availability/training/{batch_id}`.
async fn handle_available_for_training(
    AxumState(app_state): AxumState<AppState>,
    Path(batch_id): Path<i64>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<AvailabilityResponse>, HttpError> {
    info!(batch_id, "Handling training availability request");

    let mut persistence = app_state.persistence.lock().await;
    let response: AvailabilityResponse =
        get_available_for_training(&mut *persistence, batch_id, &query, today())?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/eligibility/project/{profile_id}`.
async fn handle_project_eligibility(
    AxumState(app_state): AxumState<AppState>,
    Path(profile_id): Path<i64>,
    Query(query): Query<EligibilityQuery>,
) -> Result<Json<EligibilityResponse>, HttpError> {
    info!(profile_id, "Handling project eligibility request");

    let mut persistence = app_state.persistence.lock().await;
    let response: EligibilityResponse =
        check_project_eligibility(&mut *persistence, profile_id, &query)?;
    drop(persistence);

    Ok(Json(response))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/availability", get(handle_get_availability))
        .route(
            "/availability/check/{profile_id}",
            get(handle_check_availability),
        )
        .route(
            "/availability/project/{project_id}",
            get(handle_available_for_project),
        )
        .route(
            "/availability/training/{batch_id}",
            get(handle_available_for_training),
        )
        .route(
            "/eligibility/project/{profile_id}",
            get(handle_project_eligibility),
        )
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

    info!("Initializing Staffing Server");

    let persistence: Persistence = if let Some(url) = &args.mysql_url {
        info!("Using MySQL/MariaDB database");
        Persistence::new_with_mysql(url)?
    } else if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
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
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode as HttpStatusCode},
    };
    use serde_json::Value;
    use staffing_domain::{
        EnrollmentStatus, ProfileRecord, ProfileStage, Project, ProjectAssignment, ProjectStage,
        TrainingBatch, TrainingBatchStatus, TrainingEnrollment,
    };
    use time::macros::date;
    use tower::ServiceExt;

    fn create_test_profile(id: i64, first_name: &str, stage: ProfileStage) -> ProfileRecord {
        let mut profile: ProfileRecord = ProfileRecord::new(id);
        profile.first_name = Some(first_name.to_string());
        profile.worker_code = Some(format!("BSW-{id:04}"));
        profile.current_stage = Some(stage);
        profile
    }

    /// Project 1 covers May 2026 and batch 5 runs 10-12 May. Anil is on
    /// project 1, Chetan is enrolled in batch 5, Bharat is free and Deepa
    /// is a training candidate. Project 2 has no end date.
    fn create_test_app_state() -> AppState {
        let mut persistence: Persistence =
            Persistence::new_in_memory().expect("Failed to create in-memory persistence");

        for (id, end_date) in [(1, Some(date!(2026 - 05 - 31))), (2, None)] {
            persistence
                .add_project(&Project {
                    id,
                    project_code: Some(format!("PRJ-{id:03}")),
                    name: Some(format!("Project {id}")),
                    start_date: Some(date!(2026 - 05 - 01)),
                    end_date,
                    stage: ProjectStage::Ongoing,
                    location: Some(String::from("Nagpur")),
                    employer_id: None,
                    is_active: true,
                    is_deleted: false,
                })
                .unwrap();
        }
        persistence
            .add_training_batch(&TrainingBatch {
                id: 5,
                code: Some(String::from("TB-005")),
                name: Some(String::from("Batch 5")),
                program_name: Some(String::from("Site safety")),
                start_date: Some(date!(2026 - 05 - 10)),
                end_date: Some(date!(2026 - 05 - 12)),
                status: TrainingBatchStatus::Upcoming,
                location: None,
            })
            .unwrap();

        persistence
            .add_profile(&create_test_profile(1, "Anil", ProfileStage::Benched))
            .unwrap();
        persistence
            .add_profile(&create_test_profile(2, "Bharat", ProfileStage::Trained))
            .unwrap();
        persistence
            .add_profile(&create_test_profile(3, "Chetan", ProfileStage::Benched))
            .unwrap();
        persistence
            .add_profile(&create_test_profile(4, "Deepa", ProfileStage::Screening))
            .unwrap();

        persistence
            .add_assignment(&ProjectAssignment {
                id: 1001,
                project_id: 1,
                profile_id: 1,
                removed_at: None,
            })
            .unwrap();
        persistence
            .add_enrollment(&TrainingEnrollment {
                id: 5003,
                batch_id: 5,
                profile_id: 3,
                status: EnrollmentStatus::Enrolled,
            })
            .unwrap();

        AppState {
            persistence: Arc::new(Mutex::new(persistence)),
        }
    }

    async fn get_json(app: Router, uri: &str) -> (HttpStatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status: HttpStatusCode = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body_bytes).unwrap())
    }

    fn ids(entries: &Value) -> Vec<i64> {
        entries
            .as_array()
            .unwrap()
            .iter()
            .map(|entry| entry["id"].as_i64().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_availability_report() {
        let app: Router = build_router(create_test_app_state());

        let (status, body) = get_json(
            app,
            "/availability?startDate=2026-05-01&endDate=2026-05-31",
        )
        .await;

        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(ids(&body["data"]["available"]), vec![2, 4]);
        assert_eq!(ids(&body["data"]["unavailable"]), vec![1, 3]);
        assert_eq!(body["data"]["summary"]["unavailableByProject"], 1);
        assert_eq!(body["data"]["summary"]["unavailableByTraining"], 1);
        assert_eq!(body["pagination"]["limit"], 20);
        assert_eq!(
            body["data"]["unavailable"][0]["blockingEvents"][0]["type"],
            "PROJECT"
        );
        assert!(body["data"]["available"][0].get("blockingEvents").is_none());
    }

    #[tokio::test]
    async fn test_availability_filters_from_query_string() {
        let app: Router = build_router(create_test_app_state());

        let (status, body) = get_json(
            app,
            "/availability?startDate=2026-05-01&endDate=2026-05-31&purpose=project\
             &availabilityStatus=unavailable&search=chet",
        )
        .await;

        assert_eq!(status, HttpStatusCode::OK);
        assert!(body["data"]["available"].as_array().unwrap().is_empty());
        assert_eq!(ids(&body["data"]["unavailable"]), vec![3]);
    }

    #[tokio::test]
    async fn test_availability_requires_dates() {
        let app: Router = build_router(create_test_app_state());

        let (status, body) = get_json(app, "/availability?startDate=2026-05-01").await;

        assert_eq!(status, HttpStatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "startDate and endDate are required");
    }

    #[tokio::test]
    async fn test_availability_rejects_inverted_window() {
        let app: Router = build_router(create_test_app_state());

        let (status, body) = get_json(
            app,
            "/availability?startDate=2026-06-01&endDate=2026-05-01",
        )
        .await;

        assert_eq!(status, HttpStatusCode::BAD_REQUEST);
        assert_eq!(
            body["message"],
            "startDate must be before or equal to endDate"
        );
    }

    #[tokio::test]
    async fn test_check_availability_for_profile() {
        let app: Router = build_router(create_test_app_state());

        let (status, body) = get_json(
            app.clone(),
            "/availability/check/1?startDate=2026-05-25&endDate=2026-06-05",
        )
        .await;
        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(body["data"]["isAvailable"], false);
        assert_eq!(body["data"]["blockingEvents"][0]["overlapDays"], 7);

        let (_, body) = get_json(
            app,
            "/availability/check/1?startDate=2026-05-25&endDate=2026-06-05&excludeProjectId=1",
        )
        .await;
        assert_eq!(body["data"]["isAvailable"], true);
    }

    #[tokio::test]
    async fn test_project_availability() {
        let app: Router = build_router(create_test_app_state());

        let (status, body) = get_json(app, "/availability/project/1").await;

        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(ids(&body["data"]["available"]), vec![1, 2]);
        assert_eq!(ids(&body["data"]["unavailable"]), vec![3]);
    }

    #[tokio::test]
    async fn test_project_errors_map_to_statuses() {
        let app: Router = build_router(create_test_app_state());

        let (status, body) = get_json(app.clone(), "/availability/project/99").await;
        assert_eq!(status, HttpStatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);

        let (status, body) = get_json(app, "/availability/project/2").await;
        assert_eq!(status, HttpStatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["message"], "Project must have start and end dates");
    }

    #[tokio::test]
    async fn test_training_availability() {
        let app: Router = build_router(create_test_app_state());

        let (status, body) = get_json(app.clone(), "/availability/training/5").await;
        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(ids(&body["data"]["available"]), vec![4]);

        let (status, _) = get_json(app, "/availability/training/6").await;
        assert_eq!(status, HttpStatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_project_eligibility() {
        let app: Router = build_router(create_test_app_state());

        let (status, body) = get_json(app.clone(), "/eligibility/project/2").await;
        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(body["data"]["eligible"], true);
        assert!(body["data"].get("reason").is_none());

        let (_, body) = get_json(app.clone(), "/eligibility/project/4").await;
        assert_eq!(body["data"]["eligible"], false);
        assert_eq!(
            body["data"]["reason"],
            "Worker stage must be TRAINED or BENCHED, got: SCREENING"
        );

        let (status, _) = get_json(app, "/eligibility/project/2?requireBlueWorker=maybe").await;
        assert_eq!(status, HttpStatusCode::BAD_REQUEST);
    }
}
