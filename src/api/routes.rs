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

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::desk::{CourierDesk, KnowledgeAnswer};
use crate::error::DeskError;
use crate::ticket::TicketReceipt;
use crate::tracking::TrackingStatus;

pub type DeskState = Arc<CourierDesk>;

pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// POST /knowledge/query
pub async fn knowledge_query(
    State(desk): State<DeskState>,
    body: Bytes,
) -> Result<Json<KnowledgeAnswer>, DeskError> {
    desk.query_knowledge_body(&body).map(Json)
}

/// POST /ticket
pub async fn create_ticket(
    State(desk): State<DeskState>,
    body: Bytes,
) -> Result<(StatusCode, Json<TicketReceipt>), DeskError> {
    let receipt = desk.create_ticket_body(&body)?;
    Ok((StatusCode::CREATED, Json(receipt)))
}

/// GET /track/{package_id}
pub async fn track_package(
    State(desk): State<DeskState>,
    Path(package_id): Path<String>,
) -> Result<Json<TrackingStatus>, DeskError> {
    desk.track_package(&package_id).map(Json)
}
