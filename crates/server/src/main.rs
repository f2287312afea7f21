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
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::State as AxumState,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use study_plan::PlannerConfig;
use study_plan_api::{
    ApiError, ParseCoursesRequest, ParseCoursesResponse, TimetableRequest, TimetableResponse,
    generate_timetable, parse_courses, translate_core_error,
};
use study_plan_domain::{Hours, UrgencyPolicy};
use tracing::{error, info, warn};

/// Study Plan Server - builds day-by-day study timetables
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(flatten)]
    planner: PlannerArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server
    Serve {
        /// Port to bind the server to
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Plan one timetable from a JSON request file and print it
    Plan {
        /// Path to a timetable request in JSON
        #[arg(short, long)]
        input: PathBuf,
    },
}

/// Planner settings shared by every subcommand.
#[derive(clap::Args, Debug, Clone)]
struct PlannerArgs {
    /// Study hours per day, in steps of 0.5
    #[arg(long, global = true, default_value_t = 3.0)]
    hours_per_day: f64,

    /// Longest single session in hours
    #[arg(long, global = true, default_value_t = 2.0)]
    session_cap: f64,

    /// Number of courses featured on a study day
    #[arg(long, global = true, default_value_t = 3)]
    max_courses_per_day: usize,

    /// Every n-th day is a rest day (0 disables rest days)
    #[arg(long, global = true, default_value_t = 7)]
    rest_day_interval: u32,

    /// Longest review session on a rest day, in hours
    #[arg(long, global = true, default_value_t = 1.0)]
    rest_session_cap: f64,

    /// Days ahead of an exam that trigger exam review
    #[arg(long, global = true, default_value_t = 3)]
    exam_lookahead_days: u32,
}

impl PlannerArgs {
    /// Builds and validates the planner configuration.
    fn to_config(&self) -> Result<PlannerConfig, ApiError> {
        let hours = |field: &str, value: f64| -> Result<Hours, ApiError> {
            Hours::try_from(value).map_err(|e| ApiError::InvalidInput {
                field: field.to_string(),
                message: e.to_string(),
            })
        };

        let config: PlannerConfig = PlannerConfig {
            hours_per_day: hours("hours-per-day", self.hours_per_day)?,
            session_cap: hours("session-cap", self.session_cap)?,
            max_courses_per_day: self.max_courses_per_day,
            rest_day_interval: self.rest_day_interval,
            rest_session_cap: hours("rest-session-cap", self.rest_session_cap)?,
            exam_lookahead_days: self.exam_lookahead_days,
            urgency: UrgencyPolicy::default(),
        };
        config.validate().map_err(translate_core_error)?;
        Ok(config)
    }
}

/// Application state shared across handlers.
///
/// The planner is pure, so handlers only need read access to its settings.
#[derive(Clone)]
struct AppState {
    /// Planner settings used for every request.
    config: Arc<PlannerConfig>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HealthResponse {
    /// Always `ok` while the server is up.
    status: String,
    /// Server version.
    version: String,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
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
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::DomainRuleViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            error!(error = %err, "Request failed");
        } else {
            warn!(error = %err, "Request rejected");
        }

        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Handler for POST `/timetable` endpoint.
///
/// Generates a timetable from raw course entries.
async fn handle_timetable(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<TimetableRequest>,
) -> Result<Json<TimetableResponse>, HttpError> {
    info!(
        courses = req.courses.len(),
        total_days = ?req.total_days,
        study_days = ?req.study_days,
        start_date = %req.start_date,
        "Handling timetable request"
    );

    let response: TimetableResponse = generate_timetable(&app_state.config, &req)?;
    Ok(Json(response))
}

/// Handler for POST `/courses/parse` endpoint.
async fn handle_parse_courses(
    Json(req): Json<ParseCoursesRequest>,
) -> Result<Json<ParseCoursesResponse>, HttpError> {
    info!(entries = req.courses.len(), "Handling course parse request");

    let response: ParseCoursesResponse = parse_courses(&req)?;
    Ok(Json(response))
}

/// Handler for GET `/health` endpoint.
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("ok"),
        version: String::from(env!("CARGO_PKG_VERSION")),
    })
}

fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/timetable", post(handle_timetable))
        .route("/courses/parse", post(handle_parse_courses))
        .route("/health", get(handle_health))
        .with_state(app_state)
}

/// Plans a single request file and prints the JSON timetable.
async fn run_plan(config: &PlannerConfig, input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    info!(input = %input.display(), "Planning timetable from file");

    let raw: String = tokio::fs::read_to_string(input).await?;
    let request: TimetableRequest = serde_json::from_str(&raw)?;
    let response: TimetableResponse = generate_timetable(config, &request)?;

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

async fn run_server(config: PlannerConfig, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let app_state: AppState = AppState {
        config: Arc::new(config),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{port}").parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
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
        .with_writer(std::io::stderr)
        .init();

    let config: PlannerConfig = args.planner.to_config()?;
    info!(
        hours_per_day = config.hours_per_day.as_f64(),
        max_courses_per_day = config.max_courses_per_day,
        rest_day_interval = config.rest_day_interval,
        "Planner configured"
    );

    match args.command {
        Command::Serve { port } => run_server(config, port).await,
        Command::Plan { input } => run_plan(&config, &input).await,
    }
}
