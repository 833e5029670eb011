// Home Affordability Calculator - Web Shell
// JSON API over the calculation engine plus a single-page form UI

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use home_affordability::{
    compare_scenarios, evaluate_scenario, sweep, InvalidInputError, RatioThresholds, Scenario,
    ScenarioMetrics, ScenarioOutcome, SweepPoint, SweepRequest, VERSION,
};

/// Shared application state: the server's default guideline thresholds.
/// Requests may carry their own override.
#[derive(Clone)]
struct AppState {
    thresholds: RatioThresholds,
}

/// API Response wrapper
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<InvalidInputError>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn invalid(error: InvalidInputError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

#[derive(Deserialize)]
struct EvaluateRequest {
    scenario: Scenario,
    #[serde(default)]
    thresholds: Option<RatioThresholds>,
}

#[derive(Deserialize)]
struct CompareRequest {
    scenarios: Vec<Scenario>,
    #[serde(default)]
    thresholds: Option<RatioThresholds>,
}

#[derive(Deserialize)]
struct SweepApiRequest {
    sweep: SweepRequest,
    #[serde(default)]
    thresholds: Option<RatioThresholds>,
}

/// Comparison row (flattened for the UI table)
#[derive(Serialize)]
struct CompareRow {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    metrics: Option<ScenarioMetrics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<InvalidInputError>,
}

impl From<ScenarioOutcome> for CompareRow {
    fn from(outcome: ScenarioOutcome) -> Self {
        match outcome.outcome {
            Ok(metrics) => Self {
                name: outcome.scenario.name,
                metrics: Some(metrics),
                error: None,
            },
            Err(error) => Self {
                name: outcome.scenario.name,
                metrics: None,
                error: Some(error),
            },
        }
    }
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok(VERSION))
}

/// POST /api/evaluate - Breakdown + ratios for one scenario
async fn evaluate_handler(
    State(state): State<AppState>,
    Json(request): Json<EvaluateRequest>,
) -> impl IntoResponse {
    let thresholds = request.thresholds.unwrap_or(state.thresholds);

    match evaluate_scenario(&request.scenario, &thresholds) {
        Ok(metrics) => (StatusCode::OK, Json(ApiResponse::ok(metrics))).into_response(),
        Err(e) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ApiResponse::<ScenarioMetrics>::invalid(e)),
        )
            .into_response(),
    }
}

/// POST /api/compare - Batch evaluation, per-scenario errors isolated
async fn compare_handler(
    State(state): State<AppState>,
    Json(request): Json<CompareRequest>,
) -> impl IntoResponse {
    let thresholds = request.thresholds.unwrap_or(state.thresholds);

    let rows: Vec<CompareRow> = compare_scenarios(&request.scenarios, &thresholds)
        .into_iter()
        .map(|outcome| outcome.into())
        .collect();

    (StatusCode::OK, Json(ApiResponse::ok(rows))).into_response()
}

/// POST /api/sweep - One-axis comparison series
async fn sweep_handler(
    State(state): State<AppState>,
    Json(request): Json<SweepApiRequest>,
) -> impl IntoResponse {
    let thresholds = request.thresholds.unwrap_or(state.thresholds);

    match sweep(&request.sweep, &thresholds) {
        Ok(points) => (StatusCode::OK, Json(ApiResponse::ok(points))).into_response(),
        Err(e) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ApiResponse::<Vec<SweepPoint>>::invalid(e)),
        )
            .into_response(),
    }
}

/// GET / - Serve the calculator page
async fn serve_index() -> impl IntoResponse {
    Html(include_str!("../web/index.html"))
}

// ============================================================================
// Main Server
// ============================================================================

#[tokio::main]
async fn main() {
    println!("🌐 Home Affordability Calculator - Web Server");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    // Optional thresholds override file as first argument
    let thresholds = match std::env::args().nth(1) {
        Some(path) => match RatioThresholds::from_file(&path) {
            Ok(t) => {
                println!("✓ Thresholds loaded from {}", path);
                t
            }
            Err(e) => {
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
        },
        None => RatioThresholds::default(),
    };

    let state = AppState { thresholds };

    // Build API routes
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/evaluate", post(evaluate_handler))
        .route("/compare", post(compare_handler))
        .route("/sweep", post(sweep_handler))
        .with_state(state);

    // Build main router
    let app = Router::new()
        .route("/", get(serve_index))
        .nest("/api", api_routes)
        .nest_service("/static", ServeDir::new("web"))
        .layer(CorsLayer::permissive());

    // Start server
    let addr = "0.0.0.0:3000";
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    println!("\n🚀 Server running on http://localhost:3000");
    println!("   API: http://localhost:3000/api/evaluate");
    println!("   UI:  http://localhost:3000");
    println!("\n   Press Ctrl+C to stop\n");

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
