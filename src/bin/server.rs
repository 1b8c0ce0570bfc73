//! REST API server for licence plate formatting.
//!
//! # Usage
//!
//! ```bash
//! # Start server
//! platefmt-server
//!
//! # With custom port
//! platefmt-server --port 8080
//! ```
//!
//! # Swagger UI
//!
//! Visit http://localhost:3000/swagger-ui/ for interactive API documentation.

use axum::{
    http::{header, Method, StatusCode},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use plate_formatter::{
    batch::{BatchFormatter, DEFAULT_BATCH_LIMIT},
    format, Reformat,
};

// ============================================================================
// OpenAPI Documentation
// ============================================================================

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Licence Plate Formatter API",
        version = "0.1.0",
        description = "Formats licence plate values into hyphen-separated segments.",
        license(name = "MIT")
    ),
    tags(
        (name = "Formatting", description = "Plate formatting endpoints"),
        (name = "System", description = "Health and status endpoints")
    ),
    paths(format_handler, format_batch_handler, health),
    components(schemas(
        FormatRequest,
        FormatResponse,
        BatchFormatRequest,
        BatchFormatResponse,
        BatchSummary,
        HealthResponse,
    ))
)]
struct ApiDoc;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Deserialize, ToSchema)]
#[schema(example = json!({"value": "ab-12 34"}))]
struct FormatRequest {
    /// Raw field value. Omit or send null for an absent value, which is returned as-is.
    value: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[schema(example = json!({"value": "AB-12-34", "changed": true, "segments": ["AB", "12", "34"]}))]
struct FormatResponse {
    /// Formatted value, or null when the input was absent
    value: Option<String>,
    /// Whether the formatted value differs from the input (a field would be rewritten)
    changed: bool,
    /// Segments of the formatted value
    segments: Vec<String>,
}

#[derive(Deserialize, ToSchema)]
#[schema(example = json!({"values": ["1234ab", "AB-12-34", "ab12cd"]}))]
struct BatchFormatRequest {
    /// Raw values to format, at most 1000
    values: Vec<String>,
}

#[derive(Serialize, ToSchema)]
struct BatchFormatResponse {
    /// Per-value results in input order
    results: Vec<FormatResponse>,
    /// Summary statistics
    summary: BatchSummary,
}

#[derive(Serialize, ToSchema)]
struct BatchSummary {
    /// Total values processed
    total: usize,
    /// Values that would be rewritten
    changed: usize,
    /// Values already formatted
    unchanged: usize,
}

#[derive(Serialize, ToSchema)]
struct HealthResponse {
    /// Service status
    status: String,
    /// API version
    version: String,
}

fn response_for(raw: &str, outcome: Reformat) -> FormatResponse {
    let changed = outcome.is_changed();
    let value = outcome.into_value().unwrap_or_else(|| raw.to_string());
    FormatResponse {
        segments: value
            .split(plate_formatter::SEPARATOR)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        value: Some(value),
        changed,
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// Format a single value
#[utoipa::path(
    post,
    path = "/format",
    request_body = FormatRequest,
    responses(
        (status = 200, description = "Formatted value", body = FormatResponse)
    ),
    tag = "Formatting"
)]
async fn format_handler(Json(req): Json<FormatRequest>) -> Json<FormatResponse> {
    match req.value {
        Some(raw) => Json(response_for(&raw, format::reformat(&raw))),
        None => Json(FormatResponse {
            value: None,
            changed: false,
            segments: Vec::new(),
        }),
    }
}

/// Format multiple values
#[utoipa::path(
    post,
    path = "/format/batch",
    request_body = BatchFormatRequest,
    responses(
        (status = 200, description = "Batch results", body = BatchFormatResponse),
        (status = 413, description = "Too many values")
    ),
    tag = "Formatting"
)]
async fn format_batch_handler(
    Json(req): Json<BatchFormatRequest>,
) -> Result<Json<BatchFormatResponse>, (StatusCode, String)> {
    let outcomes = BatchFormatter::with_limit(DEFAULT_BATCH_LIMIT)
        .reformat_all(&req.values)
        .map_err(|e| {
            tracing::warn!(error = %e, "rejecting batch");
            (StatusCode::PAYLOAD_TOO_LARGE, e.to_string())
        })?;

    let results: Vec<FormatResponse> = req
        .values
        .iter()
        .zip(outcomes)
        .map(|(raw, outcome)| response_for(raw, outcome))
        .collect();

    let changed = results.iter().filter(|r| r.changed).count();

    Ok(Json(BatchFormatResponse {
        summary: BatchSummary {
            total: results.len(),
            changed,
            unchanged: results.len() - changed,
        },
        results,
    }))
}

/// Health check
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "System"
)]
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse args
    let port: u16 = std::env::args()
        .skip_while(|a| a != "--port")
        .nth(1)
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_origin(Any);

    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/format", post(format_handler))
        .route("/format/batch", post(format_batch_handler))
        .route("/health", get(health))
        .layer(cors)
        .layer(tower_http::trace::TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting server on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}:{}/swagger-ui/", "localhost", port);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, "failed to bind {}", addr);
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }
}
