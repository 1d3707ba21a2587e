//! HTTP proxies in front of the song and music generation providers.
//!
//! Every invocation is independent: the only shared state is the immutable
//! [`Config`] and a pooled HTTP client.

/// Failure taxonomy and localized messages
pub mod errors;
/// `/generate-music` handler
pub mod music;
/// Outbound provider clients
pub mod providers;
/// `/generate-song` handler
pub mod song;

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use log::{info, warn};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::Config;
use crate::errors::Result;
use errors::ProxyError;

const ALLOWED_HEADERS: &str = "authorization, x-client-info, apikey, content-type, \
    x-supabase-client-platform, x-supabase-client-platform-version, \
    x-supabase-client-runtime, x-supabase-client-runtime-version";

/// Shared by every handler.
pub struct AppState {
    /// Provider endpoints and keys
    pub config: Config,
    /// Pooled client for outbound calls
    pub http: reqwest::Client,
}

impl AppState {
    /// State with a fresh client.
    pub fn new(config: Config) -> Self {
        AppState {
            config,
            http: reqwest::Client::new(),
        }
    }
}

/// Both generation routes with their CORS headers.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/generate-song", post(generate_song).options(preflight))
        .route("/generate-music", post(generate_music).options(preflight))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        ))
        .with_state(state)
}

/// Bind `config.addr` and serve until the process is stopped.
pub async fn serve(config: Config) -> Result<()> {
    let addr = config.addr;
    let app = router(Arc::new(AppState::new(config)));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Proxy listening on http://{addr}");
    info!("  POST /generate-song   - lyrics and structure");
    info!("  POST /generate-music  - base64 audio");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn preflight() -> StatusCode {
    StatusCode::OK
}

fn failure(route: &str, err: ProxyError, state: &AppState) -> Response {
    warn!("{route} error ({:?}): {err}", err.kind());
    err.into_response_in(state.config.locale)
}

async fn generate_song(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    match song::generate(&state, &body).await {
        Ok(song) => Json(song).into_response(),
        Err(e) => failure("generate-song", e, &state),
    }
}

async fn generate_music(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    match music::generate(&state, &body).await {
        Ok(audio) => Json(audio).into_response(),
        Err(e) => failure("generate-music", e, &state),
    }
}
