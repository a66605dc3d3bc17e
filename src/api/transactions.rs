//! Transaction endpoints.

use crate::api::AppState;
use crate::core::transaction;
use crate::entities::TransactionType;
use crate::errors::{Error, Result};
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Request body for `POST /transactions`.
#[derive(Debug, Deserialize)]
pub struct CreateTransaction {
    /// Account the money moves against
    pub account_id: i64,
    /// Category labeling the transaction
    pub category_id: i64,
    /// Non-negative magnitude
    pub amount: f64,
    /// Calendar date
    pub date: NaiveDate,
    /// Free-form description
    pub description: String,
    /// Income or expense
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
}

/// Query parameters for `GET /users/{id}/transactions`.
#[derive(Debug, Deserialize)]
pub struct DateRange {
    /// Inclusive range start
    pub start_date: Option<NaiveDate>,
    /// Inclusive range end
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
struct TransactionOut {
    transaction_id: i64,
    account_id: i64,
    category_id: i64,
    amount: f64,
    date: NaiveDate,
    description: String,
    #[serde(rename = "type")]
    transaction_type: TransactionType,
}

impl From<crate::entities::transaction::Model> for TransactionOut {
    fn from(txn: crate::entities::transaction::Model) -> Self {
        Self {
            transaction_id: txn.id,
            account_id: txn.account_id,
            category_id: txn.category_id,
            amount: txn.amount,
            date: txn.date,
            description: txn.description,
            transaction_type: txn.transaction_type,
        }
    }
}

/// Transaction route table.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/transactions", post(create_transaction))
        .route("/transactions/:transaction_id", get(get_transaction))
        .route("/users/:user_id/transactions", get(get_transactions))
}

async fn create_transaction(
    State(state): State<AppState>,
    Json(payload): Json<CreateTransaction>,
) -> Result<(StatusCode, Json<Value>)> {
    let txn = transaction::create_transaction(
        &state.db,
        payload.account_id,
        payload.category_id,
        payload.amount,
        payload.date,
        payload.description,
        payload.transaction_type,
    )
    .await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Transaction added successfully",
            "transaction_id": txn.id
        })),
    ))
}

async fn get_transaction(
    State(state): State<AppState>,
    Path(transaction_id): Path<i64>,
) -> Result<Json<TransactionOut>> {
    let txn = transaction::get_transaction_by_id(&state.db, transaction_id)
        .await?
        .ok_or(Error::not_found("Transaction", transaction_id))?;
    Ok(Json(txn.into()))
}

async fn get_transactions(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Query(range): Query<DateRange>,
) -> Result<Json<Value>> {
    let transactions: Vec<TransactionOut> = transaction::get_transactions_for_user(
        &state.db,
        user_id,
        range.start_date,
        range.end_date,
    )
    .await?
    .into_iter()
    .map(Into::into)
    .collect();
    Ok(Json(
        json!({ "user_id": user_id, "transactions": transactions }),
    ))
}
