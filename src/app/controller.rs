use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::Value;

use crate::AppState;

use super::{models::api_error::ApiError, service};

pub async fn get_db_conn(State(state): State<Arc<AppState>>) -> Result<Json<Value>, ApiError> {
    match service::get_db_conn(&state.pool).await {
        Ok(value) => Ok(Json(value)),
        Err(e) => Err(e),
    }
}
