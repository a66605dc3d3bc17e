//! Category business logic - Handles all category-related operations.
//!
//! Categories support the full create/read/update/delete cycle. Deleting a
//! category does not cascade to transactions or budgets referencing it.

use crate::{
    entities::{Category, CategoryType, category},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Creates a new category owned by an existing user.
pub async fn create_category(
    db: &DatabaseConnection,
    user_id: i64,
    name: String,
    category_type: CategoryType,
) -> Result<category::Model> {
    crate::core::user::ensure_user_exists(db, user_id).await?;

    if name.trim().is_empty() {
        return Err(Error::validation("Category name cannot be empty"));
    }

    let category = category::ActiveModel {
        user_id: Set(user_id),
        name: Set(name.trim().to_string()),
        category_type: Set(category_type),
        ..Default::default()
    };

    let result = category.insert(db).await?;
    Ok(result)
}

/// Finds a category by id, returning None if absent.
pub async fn get_category_by_id(
    db: &DatabaseConnection,
    category_id: i64,
) -> Result<Option<category::Model>> {
    Category::find_by_id(category_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a user's categories, optionally restricted to one type,
/// ordered by id.
pub async fn get_categories_for_user(
    db: &DatabaseConnection,
    user_id: i64,
    category_type: Option<CategoryType>,
) -> Result<Vec<category::Model>> {
    crate::core::user::ensure_user_exists(db, user_id).await?;

    let mut query = Category::find().filter(category::Column::UserId.eq(user_id));

    if let Some(kind) = category_type {
        query = query.filter(category::Column::CategoryType.eq(kind));
    }

    query
        .order_by_asc(category::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Updates a category's name and type.
pub async fn update_category(
    db: &DatabaseConnection,
    category_id: i64,
    name: String,
    category_type: CategoryType,
) -> Result<category::Model> {
    let existing = get_category_by_id(db, category_id)
        .await?
        .ok_or(Error::not_found("Category", category_id))?;

    if name.trim().is_empty() {
        return Err(Error::validation("Category name cannot be empty"));
    }

    let mut active: category::ActiveModel = existing.into();
    active.name = Set(name.trim().to_string());
    active.category_type = Set(category_type);

    let result = active.update(db).await?;
    Ok(result)
}

/// Deletes a category. Referencing transactions and budgets are untouched.
pub async fn delete_category(db: &DatabaseConnection, category_id: i64) -> Result<()> {
    let existing = get_category_by_id(db, category_id)
        .await?
        .ok_or(Error::not_found("Category", category_id))?;

    existing.delete(db).await?;
    Ok(())
}
