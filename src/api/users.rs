//! User endpoints.

use crate::api::AppState;
use crate::core::user;
use crate::errors::{Error, Result};
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Request body for `POST /users`.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    /// Display name
    pub name: String,
    /// Contact email address
    pub email: String,
}

#[derive(Debug, Serialize)]
struct UserOut {
    user_id: i64,
    name: String,
    email: String,
}

impl From<crate::entities::user::Model> for UserOut {
    fn from(user: crate::entities::user::Model) -> Self {
        Self {
            user_id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

/// User route table.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(create_user).get(list_users))
        .route("/users/:user_id", get(get_user))
}

async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUser>,
) -> Result<(StatusCode, Json<Value>)> {
    let user = user::create_user(&state.db, payload.name, payload.email).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "User added successfully", "user_id": user.id })),
    ))
}

async fn list_users(State(state): State<AppState>) -> Result<Json<Value>> {
    let users: Vec<UserOut> = user::list_users(&state.db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(Json(json!({ "users": users })))
}

async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<UserOut>> {
    let user = user::get_user_by_id(&state.db, user_id)
        .await?
        .ok_or(Error::not_found("User", user_id))?;
    Ok(Json(user.into()))
}
