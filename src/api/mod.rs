//! API layer - axum routes, shared state, and error mapping.
//!
//! Handlers are thin: they parse the request, call into [`crate::core`], and
//! serialize the result. The error taxonomy maps onto HTTP here and nowhere
//! else; core code never sees a status code.

/// Account endpoints
pub mod accounts;
/// Analytics endpoints (spending, budget progress, net worth)
pub mod analytics;
/// Budget endpoints
pub mod budgets;
/// Category endpoints
pub mod categories;
/// Transaction endpoints
pub mod transactions;
/// User endpoints
pub mod users;

use crate::config::Settings;
use crate::errors::Error;
use axum::{
    Json, Router,
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
};
use sea_orm::DatabaseConnection;
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};

/// Shared state available to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for all store access
    pub db: DatabaseConnection,
}

impl AppState {
    /// Creates the shared state around an established connection pool.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            Self::NotFound { .. } => (StatusCode::NOT_FOUND, self.to_string()),
            Self::Validation { message } => (StatusCode::BAD_REQUEST, message.clone()),
            Self::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Internal server error: {self}"),
            ),
        };

        if status.is_server_error() {
            tracing::error!(%status, "request failed: {detail}");
        }

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

/// Builds the full application router.
#[must_use]
pub fn router(state: AppState, settings: &Settings) -> Router {
    let origins: Vec<HeaderValue> = settings
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .merge(users::routes())
        .merge(accounts::routes())
        .merge(categories::routes())
        .merge(transactions::routes())
        .merge(budgets::routes())
        .merge(analytics::routes())
        .layer(cors)
        .with_state(state)
}

async fn root() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Personal Finance API",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::float_cmp)]
    use super::*;
    use crate::entities::{AccountType, CategoryType, TransactionType};
    use crate::test_utils::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn test_router() -> crate::errors::Result<(Router, DatabaseConnection)> {
        let db = setup_test_db().await?;
        let settings = Settings {
            database_url: "sqlite::memory:".to_string(),
            bind_addr: "127.0.0.1:0".to_string(),
            cors_origins: vec!["http://localhost:3000".to_string()],
        };
        Ok((router(AppState::new(db.clone()), &settings), db))
    }

    async fn get_json(
        app: Router,
        uri: &str,
    ) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = serde_json::from_slice(&bytes).unwrap();
        (status, value)
    }

    #[tokio::test]
    async fn test_root_endpoint() -> crate::errors::Result<()> {
        let (app, _db) = test_router().await?;

        let (status, body) = get_json(app, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Personal Finance API");

        Ok(())
    }

    #[tokio::test]
    async fn test_spending_endpoint_shape() -> crate::errors::Result<()> {
        let (app, db) = test_router().await?;

        let user = create_test_user(&db).await?;
        let account =
            create_test_account(&db, user.id, "Checking", 500.0, AccountType::Checking).await?;
        let salary = create_test_category(&db, user.id, "Salary", CategoryType::Income).await?;
        create_test_transaction(
            &db,
            account.id,
            salary.id,
            2000.0,
            date(2024, 1, 5),
            TransactionType::Income,
        )
        .await?;

        let uri = format!(
            "/analytics/users/{}/spending?start_date=2024-01-01&end_date=2024-01-31",
            user.id
        );
        let (status, body) = get_json(app, &uri).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["user_id"], user.id);
        assert_eq!(body["start_date"], "2024-01-01");
        assert_eq!(body["end_date"], "2024-01-31");
        assert_eq!(body["summary"]["total_income"], 2000.0);
        assert_eq!(body["summary"]["total_expense"], 0.0);
        assert_eq!(body["summary"]["net"], 2000.0);
        assert_eq!(body["by_category"][0]["category_id"], salary.id);
        assert_eq!(body["by_category"][0]["name"], "Salary");
        assert_eq!(body["by_category"][0]["type"], "income");
        assert_eq!(body["by_category"][0]["total_amount"], 2000.0);

        Ok(())
    }

    #[tokio::test]
    async fn test_missing_user_detail_shape() -> crate::errors::Result<()> {
        let (app, _db) = test_router().await?;

        let (status, body) = get_json(app, "/analytics/users/404/net-worth").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "User not found");

        Ok(())
    }

    #[tokio::test]
    async fn test_budget_progress_endpoint_shape() -> crate::errors::Result<()> {
        let (app, db) = test_router().await?;

        let user = create_test_user(&db).await?;
        let account =
            create_test_account(&db, user.id, "Checking", 0.0, AccountType::Checking).await?;
        let groceries =
            create_test_category(&db, user.id, "Groceries", CategoryType::Expense).await?;
        crate::core::budget::create_budget(&db, user.id, groceries.id, 200.0, date(2024, 1, 1))
            .await?;
        create_test_transaction(
            &db,
            account.id,
            groceries.id,
            190.0,
            date(2024, 1, 10),
            TransactionType::Expense,
        )
        .await?;

        let uri = format!(
            "/analytics/users/{}/budgets/progress?month=2024-01-01",
            user.id
        );
        let (status, body) = get_json(app, &uri).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["user_id"], user.id);
        assert_eq!(body["month"], "2024-01-01");
        let entry = &body["budgets"][0];
        assert_eq!(entry["category_id"], groceries.id);
        assert_eq!(entry["category_name"], "Groceries");
        assert_eq!(entry["budget_amount"], 200.0);
        assert_eq!(entry["spent"], 190.0);
        assert_eq!(entry["remaining"], 10.0);
        assert_eq!(entry["progress_percent"], 95.0);
        assert_eq!(entry["status"], "nearly_budget");

        Ok(())
    }

    #[tokio::test]
    async fn test_net_worth_endpoint_shape() -> crate::errors::Result<()> {
        let (app, db) = test_router().await?;

        let user = create_test_user(&db).await?;
        create_test_account(&db, user.id, "Checking", 500.0, AccountType::Checking).await?;
        create_test_account(&db, user.id, "Savings", 1500.0, AccountType::Savings).await?;

        let uri = format!("/analytics/users/{}/net-worth", user.id);
        let (status, body) = get_json(app, &uri).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["user_id"], user.id);
        assert_eq!(body["net_worth"], 2000.0);
        assert_eq!(body["accounts"][0]["name"], "Checking");
        assert_eq!(body["accounts"][0]["type"], "checking");
        assert_eq!(body["accounts"][1]["balance"], 1500.0);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_user_endpoint() -> crate::errors::Result<()> {
        let (app, _db) = test_router().await?;

        let request = Request::builder()
            .method("POST")
            .uri("/users")
            .header("content-type", "application/json")
            .body(Body::from(
                serde_json::to_vec(&serde_json::json!({
                    "name": "Alice",
                    "email": "alice@example.com",
                }))
                .unwrap(),
            ))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], "User added successfully");
        assert!(body["user_id"].is_i64());

        Ok(())
    }
}
