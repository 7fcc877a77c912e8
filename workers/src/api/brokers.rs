//! ブローカー一覧API

use super::error::AppError;
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use selferase_common::error::WorkerError;
use selferase_common::types::Broker;

/// GET /api/brokers
pub async fn list_brokers(State(state): State<AppState>) -> Json<Vec<Broker>> {
    Json(state.catalog.brokers().to_vec())
}

/// GET /api/brokers/:broker_id
pub async fn get_broker(
    State(state): State<AppState>,
    Path(broker_id): Path<String>,
) -> Result<Json<Broker>, AppError> {
    state
        .catalog
        .get(&broker_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| WorkerError::BrokerNotFound(broker_id).into())
}
