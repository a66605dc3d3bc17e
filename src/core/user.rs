//! User business logic - Handles all user-related operations.
//!
//! Users are append-only in this design: they are created and read, never
//! updated or deleted. `ensure_user_exists` is the fail-fast existence gate
//! every analytics operation runs before touching any aggregate.

use crate::{
    entities::{User, user},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Creates a new user after a minimal well-formedness check on the email.
pub async fn create_user(
    db: &DatabaseConnection,
    name: String,
    email: String,
) -> Result<user::Model> {
    if name.trim().is_empty() {
        return Err(Error::validation("User name cannot be empty"));
    }

    validate_email(&email)?;

    let user = user::ActiveModel {
        name: Set(name.trim().to_string()),
        email: Set(email.trim().to_string()),
        ..Default::default()
    };

    let result = user.insert(db).await?;
    Ok(result)
}

/// Finds a user by id, returning None if absent.
pub async fn get_user_by_id(db: &DatabaseConnection, user_id: i64) -> Result<Option<user::Model>> {
    User::find_by_id(user_id).one(db).await.map_err(Into::into)
}

/// Retrieves all users ordered by id.
pub async fn list_users(db: &DatabaseConnection) -> Result<Vec<user::Model>> {
    User::find()
        .order_by_asc(user::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Fails with [`Error::NotFound`] unless the user exists.
///
/// Runs eagerly at the start of every operation that references a user, so
/// missing users abort before any aggregation or insert happens.
pub async fn ensure_user_exists(db: &DatabaseConnection, user_id: i64) -> Result<user::Model> {
    get_user_by_id(db, user_id)
        .await?
        .ok_or(Error::not_found("User", user_id))
}

/// Rejects emails without a non-empty local part and domain.
fn validate_email(email: &str) -> Result<()> {
    let trimmed = email.trim();
    let well_formed = matches!(
        trimmed.split_once('@'),
        Some((local, domain)) if !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
    );

    if well_formed {
        Ok(())
    } else {
        Err(Error::validation(format!("Invalid email address: {email}")))
    }
}
