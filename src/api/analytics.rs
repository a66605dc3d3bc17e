//! Analytics endpoints - the read-only reporting surface.
//!
//! These handlers serialize the core report types directly; the JSON field
//! names on those types are the wire contract.

use crate::api::AppState;
use crate::core::analytics::{self, BudgetProgressReport, NetWorthReport, SpendingReport};
use crate::errors::Result;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use chrono::NaiveDate;
use serde::Deserialize;

/// Query parameters for the spending summary.
#[derive(Debug, Deserialize)]
pub struct SpendingParams {
    /// Inclusive range start
    pub start_date: NaiveDate,
    /// Inclusive range end
    pub end_date: NaiveDate,
}

/// Query parameters for budget progress.
#[derive(Debug, Deserialize)]
pub struct ProgressParams {
    /// Calendar-month anchor (day 1)
    pub month: NaiveDate,
}

/// Analytics route table.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/analytics/users/:user_id/spending", get(spending))
        .route(
            "/analytics/users/:user_id/budgets/progress",
            get(budget_progress),
        )
        .route("/analytics/users/:user_id/net-worth", get(net_worth))
}

async fn spending(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Query(params): Query<SpendingParams>,
) -> Result<Json<SpendingReport>> {
    let report = analytics::spending_summary(
        &state.db,
        user_id,
        params.start_date,
        params.end_date,
    )
    .await?;
    Ok(Json(report))
}

async fn budget_progress(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Query(params): Query<ProgressParams>,
) -> Result<Json<BudgetProgressReport>> {
    let report = analytics::budget_progress(&state.db, user_id, params.month).await?;
    Ok(Json(report))
}

async fn net_worth(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<NetWorthReport>> {
    let report = analytics::net_worth(&state.db, user_id).await?;
    Ok(Json(report))
}
