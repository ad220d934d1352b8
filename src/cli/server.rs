//! HTTP server mode for REST API access to node executions

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::credentials::CredentialsDef;
use crate::error::{Error, Result};
use crate::fetcher::{EvaluationFetcher, FetcherConfig};
use crate::node::{NodeParameters, StaticContext, WeValuNode};
use crate::types::JsonObject;

/// Largest `items` count accepted by one execute request
pub const MAX_ITEMS: usize = 1000;

/// Server configuration
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
    /// Fetcher settings applied to every execution
    pub fetcher: FetcherConfig,
}

/// App state shared across handlers
#[derive(Clone)]
struct AppState {
    config: ServerConfig,
}

/// Request body for the execute endpoint
#[derive(Debug, Deserialize)]
struct ExecuteRequest {
    /// API key and optional base URL
    #[serde(default)]
    credentials: CredentialsDef,
    /// Node parameters
    #[serde(default)]
    parameters: NodeParameters,
    /// Number of input items
    #[serde(default = "default_items")]
    items: usize,
    /// Emit error records instead of failing the request
    #[serde(default)]
    continue_on_fail: bool,
}

fn default_items() -> usize {
    1
}

/// Response wrapper
#[derive(Debug, Serialize)]
struct ApiResponse<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn error(msg: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}

/// Build the application router
pub fn router(config: ServerConfig) -> Router {
    let state = AppState { config };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/execute", post(execute))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Start the HTTP server
pub async fn serve(config: ServerConfig, port: u16) -> Result<()> {
    let app = router(config);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting HTTP server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| Error::config(format!("Failed to bind to port {port}: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::config(format!("Server error: {e}")))?;

    Ok(())
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Run the node once and return every emitted record
async fn execute(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<ExecuteRequest>, JsonRejection>,
) -> Response {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<()>::error(format!(
                    "Invalid request body: {}",
                    rejection.body_text()
                ))),
            )
                .into_response();
        }
    };

    match run_node(&state.config, req).await {
        Ok(records) => (StatusCode::OK, Json(ApiResponse::success(records))).into_response(),
        Err(e) => {
            let status = if e.is_validation() {
                StatusCode::BAD_REQUEST
            } else {
                StatusCode::BAD_GATEWAY
            };
            tracing::warn!("Execution failed: {}", e);
            (status, Json(ApiResponse::<()>::error(e.to_string()))).into_response()
        }
    }
}

async fn run_node(config: &ServerConfig, req: ExecuteRequest) -> Result<Vec<JsonObject>> {
    if req.items > MAX_ITEMS {
        return Err(Error::invalid_parameter(
            "items",
            format!("must be at most {MAX_ITEMS}"),
        ));
    }

    let credentials = req.credentials.into_credentials()?;
    let fetcher = EvaluationFetcher::with_config(credentials, &config.fetcher)?;

    let ctx = StaticContext::new(req.parameters)
        .with_items(req.items)
        .with_continue_on_fail(req.continue_on_fail);

    let items = WeValuNode::new(fetcher).execute(&ctx).await?;
    Ok(items.into_iter().map(|item| item.json).collect())
}
