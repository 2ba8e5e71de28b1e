use std::future::Future;
use std::io;
use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use http_body_util::LengthLimitError;
use serde::Serialize;

use crate::config::Config;
use crate::domains::header::MeowRequest;
use crate::error::{MeowError, Result};
use crate::interfaces::handler::{AcknowledgeHandler, RequestHandler};
use crate::services::parser;

#[derive(Clone)]
pub struct AppState {
    pub handler: Arc<dyn RequestHandler>,
    pub max_body_bytes: usize,
}

impl AppState {
    pub fn new(handler: Arc<dyn RequestHandler>, config: &Config) -> Self {
        Self {
            handler,
            max_body_bytes: usize::try_from(config.max_body_bytes()).unwrap_or(usize::MAX),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    kind: String,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/meow", post(meow))
        .with_state(state)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

async fn meow(State(state): State<AppState>, body: Body) -> Response {
    let bytes = match axum::body::to_bytes(body, state.max_body_bytes).await {
        Ok(bytes) => bytes,
        Err(err) => {
            let status = if exceeds_limit(&err) {
                StatusCode::PAYLOAD_TOO_LARGE
            } else {
                StatusCode::BAD_REQUEST
            };
            let err = MeowError::ReadFailure(io::Error::other(err));
            tracing::warn!(error = %err, "rejected request body");
            return error_response(status, &err);
        }
    };

    let request = match parser::parse(&bytes) {
        Ok(request) => request,
        Err(err) => {
            tracing::warn!(kind = err.kind(), error = %err, "rejected request");
            return error_response(status_for(&err), &err);
        }
    };

    tracing::info!(
        request_type = %request.request_type(),
        meow_version = %request.meow_version(),
        user = %request.user(),
        "handling request"
    );

    match state.handler.handle(request).await {
        Ok(value) => (StatusCode::OK, Json(value)).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "request handler failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, &err)
        }
    }
}

pub fn status_for(err: &MeowError) -> StatusCode {
    match err {
        MeowError::ReadFailure(_)
        | MeowError::MalformedEnvelope(_)
        | MeowError::UnknownVariant(_) => StatusCode::BAD_REQUEST,
        MeowError::MalformedPayload { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        MeowError::Config(_) | MeowError::Runtime(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_response(status: StatusCode, err: &MeowError) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
            kind: err.kind().to_string(),
        }),
    )
        .into_response()
}

fn exceeds_limit(err: &axum::Error) -> bool {
    let mut source = std::error::Error::source(err);
    while let Some(inner) = source {
        if inner.is::<LengthLimitError>() {
            return true;
        }
        source = inner.source();
    }
    false
}

pub async fn run(config: Config) -> Result<()> {
    run_with_shutdown(
        config,
        Arc::new(AcknowledgeHandler),
        futures::future::pending::<()>(),
    )
    .await
}

pub async fn run_with_shutdown<F>(
    config: Config,
    handler: Arc<dyn RequestHandler>,
    shutdown: F,
) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let state = AppState::new(handler, &config);
    let app = build_router(state);

    let addr = format!("{}:{}", config.host(), config.port());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| MeowError::Runtime(e.to_string()))?;
    tracing::info!(%addr, "meow daemon listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| MeowError::Runtime(e.to_string()))?;

    Ok(())
}
