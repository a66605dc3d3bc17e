//! Account endpoints.

use crate::api::AppState;
use crate::core::account;
use crate::entities::AccountType;
use crate::errors::Result;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Request body for `POST /accounts`.
#[derive(Debug, Deserialize)]
pub struct CreateAccount {
    /// Owning user
    pub user_id: i64,
    /// Account name
    pub name: String,
    /// Opening balance
    pub balance: f64,
    /// Kind of account
    #[serde(rename = "type")]
    pub account_type: AccountType,
}

#[derive(Debug, Serialize)]
struct AccountOut {
    account_id: i64,
    name: String,
    balance: f64,
    #[serde(rename = "type")]
    account_type: AccountType,
}

impl From<crate::entities::account::Model> for AccountOut {
    fn from(account: crate::entities::account::Model) -> Self {
        Self {
            account_id: account.id,
            name: account.name,
            balance: account.balance,
            account_type: account.account_type,
        }
    }
}

/// Account route table.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/accounts", post(create_account))
        .route("/users/:user_id/accounts", get(get_accounts))
}

async fn create_account(
    State(state): State<AppState>,
    Json(payload): Json<CreateAccount>,
) -> Result<(StatusCode, Json<Value>)> {
    let account = account::create_account(
        &state.db,
        payload.user_id,
        payload.name,
        payload.balance,
        payload.account_type,
    )
    .await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Account added successfully", "account_id": account.id })),
    ))
}

async fn get_accounts(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Value>> {
    let accounts: Vec<AccountOut> = account::get_accounts_for_user(&state.db, user_id)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(Json(json!({ "user_id": user_id, "accounts": accounts })))
}
