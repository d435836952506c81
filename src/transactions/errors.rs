use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum TransactionsApiError {
    TransactionNotFound,
}

impl TransactionsApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::TransactionNotFound => ApiError {
                code: StatusCode::NOT_FOUND,
                message: "Transaction not found".to_string(),
            },
        }
    }
}
