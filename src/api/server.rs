// Copyright 2026 Muvon Un Limited
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::error::panic_response;
use super::routes;
use crate::config::ServerConfig;
use crate::desk::CourierDesk;

/// Build the router with all courier desk routes
pub fn build_router(desk: Arc<CourierDesk>, config: &ServerConfig) -> Router {
    let router = Router::new()
        .route("/health", get(routes::health))
        .route("/knowledge/query", post(routes::knowledge_query))
        .route("/ticket", post(routes::create_ticket))
        .route("/track/{package_id}", get(routes::track_package))
        .with_state(desk)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http());

    if config.permissive_cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

/// Serve the HTTP API until Ctrl-C
pub async fn run(config: ServerConfig, desk: Arc<CourierDesk>) -> Result<()> {
    let app = build_router(desk, &config);

    let address = config.address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!(address = %address, "Courier desk API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Courier desk API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
