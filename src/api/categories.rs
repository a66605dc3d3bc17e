//! Category endpoints.

use crate::api::AppState;
use crate::core::category;
use crate::entities::CategoryType;
use crate::errors::Result;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Request body for `POST /categories`.
#[derive(Debug, Deserialize)]
pub struct CreateCategory {
    /// Owning user
    pub user_id: i64,
    /// Category name
    pub name: String,
    /// Income or expense
    #[serde(rename = "type")]
    pub category_type: CategoryType,
}

/// Request body for `PUT /categories/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateCategory {
    /// New name
    pub name: String,
    /// New type
    #[serde(rename = "type")]
    pub category_type: CategoryType,
}

/// Query parameters for `GET /users/{id}/categories`.
#[derive(Debug, Deserialize)]
pub struct CategoryFilter {
    /// Restrict to one category type
    #[serde(rename = "type")]
    pub category_type: Option<CategoryType>,
}

#[derive(Debug, Serialize)]
struct CategoryOut {
    category_id: i64,
    user_id: i64,
    name: String,
    #[serde(rename = "type")]
    category_type: CategoryType,
}

impl From<crate::entities::category::Model> for CategoryOut {
    fn from(category: crate::entities::category::Model) -> Self {
        Self {
            category_id: category.id,
            user_id: category.user_id,
            name: category.name,
            category_type: category.category_type,
        }
    }
}

/// Category route table.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/categories", post(create_category))
        .route(
            "/categories/:category_id",
            put(update_category).delete(delete_category),
        )
        .route("/users/:user_id/categories", get(get_categories))
}

async fn create_category(
    State(state): State<AppState>,
    Json(payload): Json<CreateCategory>,
) -> Result<(StatusCode, Json<Value>)> {
    let category = category::create_category(
        &state.db,
        payload.user_id,
        payload.name,
        payload.category_type,
    )
    .await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Category added successfully", "category_id": category.id })),
    ))
}

async fn get_categories(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Query(filter): Query<CategoryFilter>,
) -> Result<Json<Value>> {
    let categories: Vec<CategoryOut> =
        category::get_categories_for_user(&state.db, user_id, filter.category_type)
            .await?
            .into_iter()
            .map(Into::into)
            .collect();
    Ok(Json(json!({ "user_id": user_id, "categories": categories })))
}

async fn update_category(
    State(state): State<AppState>,
    Path(category_id): Path<i64>,
    Json(payload): Json<UpdateCategory>,
) -> Result<Json<CategoryOut>> {
    let category = category::update_category(
        &state.db,
        category_id,
        payload.name,
        payload.category_type,
    )
    .await?;
    Ok(Json(category.into()))
}

async fn delete_category(
    State(state): State<AppState>,
    Path(category_id): Path<i64>,
) -> Result<Json<Value>> {
    category::delete_category(&state.db, category_id).await?;
    Ok(Json(json!({
        "message": format!("Category with id {category_id} has been deleted successfully")
    })))
}
