//! Budget endpoints.

use crate::api::AppState;
use crate::core::budget;
use crate::errors::Result;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Request body for `POST /budgets`.
#[derive(Debug, Deserialize)]
pub struct CreateBudget {
    /// Owning user
    pub user_id: i64,
    /// Budgeted category
    pub category_id: i64,
    /// Positive budget amount
    pub amount: f64,
    /// Calendar-month anchor (day 1)
    pub month: NaiveDate,
}

/// Request body for `PUT /budgets/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateBudget {
    /// New amount
    pub amount: f64,
    /// New month anchor
    pub month: NaiveDate,
}

/// Query parameters for `GET /users/{id}/budgets`.
#[derive(Debug, Deserialize)]
pub struct BudgetFilter {
    /// Restrict to one month
    pub month: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
struct BudgetOut {
    budget_id: i64,
    user_id: i64,
    category_id: i64,
    amount: f64,
    month: NaiveDate,
}

impl From<crate::entities::budget::Model> for BudgetOut {
    fn from(budget: crate::entities::budget::Model) -> Self {
        Self {
            budget_id: budget.id,
            user_id: budget.user_id,
            category_id: budget.category_id,
            amount: budget.amount,
            month: budget.month,
        }
    }
}

/// Budget route table.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/budgets", post(create_budget))
        .route(
            "/budgets/:budget_id",
            put(update_budget).delete(delete_budget),
        )
        .route("/users/:user_id/budgets", get(get_budgets))
}

async fn create_budget(
    State(state): State<AppState>,
    Json(payload): Json<CreateBudget>,
) -> Result<(StatusCode, Json<Value>)> {
    let budget = budget::create_budget(
        &state.db,
        payload.user_id,
        payload.category_id,
        payload.amount,
        payload.month,
    )
    .await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Budget added successfully", "budget_id": budget.id })),
    ))
}

async fn get_budgets(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Query(filter): Query<BudgetFilter>,
) -> Result<Json<Value>> {
    let budgets: Vec<BudgetOut> = budget::get_budgets_for_user(&state.db, user_id, filter.month)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(Json(json!({ "user_id": user_id, "budgets": budgets })))
}

async fn update_budget(
    State(state): State<AppState>,
    Path(budget_id): Path<i64>,
    Json(payload): Json<UpdateBudget>,
) -> Result<Json<BudgetOut>> {
    let budget =
        budget::update_budget(&state.db, budget_id, payload.amount, payload.month).await?;
    Ok(Json(budget.into()))
}

async fn delete_budget(
    State(state): State<AppState>,
    Path(budget_id): Path<i64>,
) -> Result<Json<Value>> {
    budget::delete_budget(&state.db, budget_id).await?;
    Ok(Json(json!({
        "message": format!("Budget with id {budget_id} has been deleted successfully")
    })))
}
