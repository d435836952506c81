use serde_json::{json, Value};
use sqlx::PgPool;

use super::{errors::DefaultApiError, models::api_error::ApiError};

pub async fn get_db_conn(pool: &PgPool) -> Result<Value, ApiError> {
    match sqlx::query("SELECT 1").execute(pool).await {
        Ok(_) => Ok(json!({
            "message": "DB Connection active",
        })),
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}
