use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use validator::Validate;

use crate::{
    app::{models::api_error::ApiError, structs::json_from_request::JsonFromRequest},
    AppState,
};

use super::{
    dtos::create_transaction_dto::CreateTransactionDto, models::transaction::Transaction, service,
};

pub async fn get_transactions(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Transaction>>, ApiError> {
    match service::get_transactions(&state.pool).await {
        Ok(transactions) => Ok(Json(transactions)),
        Err(e) => Err(e),
    }
}

pub async fn get_transaction_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Transaction>, ApiError> {
    match service::get_transaction_by_id(&id, &state.pool).await {
        Ok(transaction) => Ok(Json(transaction)),
        Err(e) => Err(e),
    }
}

pub async fn create_transaction(
    State(state): State<Arc<AppState>>,
    JsonFromRequest(dto): JsonFromRequest<CreateTransactionDto>,
) -> Result<(StatusCode, Json<Transaction>), ApiError> {
    if let Err(e) = dto.validate() {
        return Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        });
    }

    match service::create_transaction(&dto, &state.pool).await {
        Ok(transaction) => Ok((StatusCode::CREATED, Json(transaction))),
        Err(e) => Err(e),
    }
}

pub async fn delete_transaction_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    match service::delete_transaction_by_id(&id, &state.pool).await {
        Ok(_) => Ok(Json(json!({
            "message": format!("Delete transaction with ID: {}", id),
        }))),
        Err(e) => Err(e),
    }
}
