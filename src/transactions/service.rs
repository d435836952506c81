use axum::http::StatusCode;
use sqlx::PgPool;

use crate::app::{
    errors::DefaultApiError,
    models::api_error::ApiError,
    util::sqlx::{get_code_from_db_err, SqlStateCodes},
};

use super::{
    dtos::create_transaction_dto::CreateTransactionDto, errors::TransactionsApiError,
    models::transaction::Transaction,
};

pub async fn get_transactions(pool: &PgPool) -> Result<Vec<Transaction>, ApiError> {
    let sqlx_result = sqlx::query_as::<_, Transaction>(
        "
        SELECT * FROM transactions
        ",
    )
    .fetch_all(pool)
    .await;

    match sqlx_result {
        Ok(transactions) => Ok(transactions),
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub async fn get_transaction_by_id(id: &str, pool: &PgPool) -> Result<Transaction, ApiError> {
    let sqlx_result = sqlx::query_as::<_, Transaction>(
        "
        SELECT * FROM transactions
        WHERE id = $1
        ",
    )
    .bind(id)
    .fetch_optional(pool)
    .await;

    match sqlx_result {
        Ok(transaction) => match transaction {
            Some(transaction) => Ok(transaction),
            None => Err(TransactionsApiError::TransactionNotFound.value()),
        },
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub async fn create_transaction(
    dto: &CreateTransactionDto,
    pool: &PgPool,
) -> Result<Transaction, ApiError> {
    let transaction = Transaction::new(dto);

    let sqlx_result = sqlx::query(
        "
        INSERT INTO transactions (
            id, description, base_type, amount, updated_at, created_at
        )
        VALUES ($1, $2, $3, $4, $5, $6)
        ",
    )
    .bind(&transaction.id)
    .bind(&transaction.description)
    .bind(&transaction.base_type)
    .bind(transaction.amount)
    .bind(transaction.updated_at)
    .bind(transaction.created_at)
    .execute(pool)
    .await;

    match sqlx_result {
        Ok(_) => Ok(transaction),
        Err(e) => {
            let Some(db_err) = e.as_database_error()
            else {
                tracing::error!(%e);
                return Err(DefaultApiError::InternalServerError.value());
            };

            let Some(code) = get_code_from_db_err(db_err)
            else {
                tracing::error!(%e);
                return Err(DefaultApiError::InternalServerError.value());
            };

            match code.as_str() {
                SqlStateCodes::UNIQUE_VIOLATION => Err(ApiError {
                    code: StatusCode::CONFLICT,
                    message: "Transaction already exists.".to_string(),
                }),
                _ => {
                    tracing::error!(%e);
                    Err(DefaultApiError::InternalServerError.value())
                }
            }
        }
    }
}

pub async fn delete_transaction_by_id(id: &str, pool: &PgPool) -> Result<(), ApiError> {
    let sqlx_result = sqlx::query(
        "
        DELETE FROM transactions
        WHERE id = $1
        ",
    )
    .bind(id)
    .execute(pool)
    .await;

    match sqlx_result {
        Ok(result) => match result.rows_affected() > 0 {
            true => Ok(()),
            false => Err(TransactionsApiError::TransactionNotFound.value()),
        },
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}
