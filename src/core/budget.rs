//! Budget business logic - Handles all budget-related operations.
//!
//! A budget targets one category for one calendar month. The month column is
//! a date normalized to the first day; anything else is rejected before the
//! store is touched. `(user_id, category_id, month)` is conceptually unique
//! but not enforced by the schema.

use crate::{
    entities::{Budget, budget},
    errors::{Error, Result},
};
use chrono::{Datelike, NaiveDate};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Creates a new budget for an existing user and category.
pub async fn create_budget(
    db: &DatabaseConnection,
    user_id: i64,
    category_id: i64,
    amount: f64,
    month: NaiveDate,
) -> Result<budget::Model> {
    crate::core::user::ensure_user_exists(db, user_id).await?;
    crate::core::category::get_category_by_id(db, category_id)
        .await?
        .ok_or(Error::not_found("Category", category_id))?;

    validate_amount(amount)?;
    validate_month(month)?;

    let budget = budget::ActiveModel {
        user_id: Set(user_id),
        category_id: Set(category_id),
        amount: Set(amount),
        month: Set(month),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    let result = budget.insert(db).await?;
    Ok(result)
}

/// Finds a budget by id, returning None if absent.
pub async fn get_budget_by_id(
    db: &DatabaseConnection,
    budget_id: i64,
) -> Result<Option<budget::Model>> {
    Budget::find_by_id(budget_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a user's budgets, optionally restricted to one month,
/// ordered by id.
pub async fn get_budgets_for_user(
    db: &DatabaseConnection,
    user_id: i64,
    month: Option<NaiveDate>,
) -> Result<Vec<budget::Model>> {
    crate::core::user::ensure_user_exists(db, user_id).await?;

    let mut query = Budget::find().filter(budget::Column::UserId.eq(user_id));

    if let Some(month) = month {
        validate_month(month)?;
        query = query.filter(budget::Column::Month.eq(month));
    }

    query
        .order_by_asc(budget::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Updates a budget's amount and month.
pub async fn update_budget(
    db: &DatabaseConnection,
    budget_id: i64,
    amount: f64,
    month: NaiveDate,
) -> Result<budget::Model> {
    let existing = get_budget_by_id(db, budget_id)
        .await?
        .ok_or(Error::not_found("Budget", budget_id))?;

    validate_amount(amount)?;
    validate_month(month)?;

    let mut active: budget::ActiveModel = existing.into();
    active.amount = Set(amount);
    active.month = Set(month);

    let result = active.update(db).await?;
    Ok(result)
}

/// Deletes a budget.
pub async fn delete_budget(db: &DatabaseConnection, budget_id: i64) -> Result<()> {
    let existing = get_budget_by_id(db, budget_id)
        .await?
        .ok_or(Error::not_found("Budget", budget_id))?;

    existing.delete(db).await?;
    Ok(())
}

fn validate_amount(amount: f64) -> Result<()> {
    if amount.is_finite() && amount > 0.0 {
        Ok(())
    } else {
        Err(Error::validation(format!(
            "Budget amount must be positive, got {amount}"
        )))
    }
}

/// The month anchor must be normalized to the first day of the month.
pub fn validate_month(month: NaiveDate) -> Result<()> {
    if month.day() == 1 {
        Ok(())
    } else {
        Err(Error::validation(format!(
            "Budget month must be the first day of the month, got {month}"
        )))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::float_cmp)]
    use super::*;
    use crate::entities::CategoryType;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_create_budget_integration() -> Result<()> {
        let db = setup_test_db().await?;
        let user = create_test_user(&db).await?;
        let category =
            create_test_category(&db, user.id, "Groceries", CategoryType::Expense).await?;

        let budget = create_budget(&db, user.id, category.id, 200.0, date(2024, 1, 1)).await?;

        assert_eq!(budget.user_id, user.id);
        assert_eq!(budget.category_id, category.id);
        assert_eq!(budget.amount, 200.0);
        assert_eq!(budget.month, date(2024, 1, 1));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_budget_rejects_mid_month_anchor() -> Result<()> {
        let db = setup_test_db().await?;
        let user = create_test_user(&db).await?;
        let category =
            create_test_category(&db, user.id, "Groceries", CategoryType::Expense).await?;

        let result = create_budget(&db, user.id, category.id, 200.0, date(2024, 1, 15)).await;
        assert!(matches!(result, Err(Error::Validation { .. })));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_budget_rejects_non_positive_amount() -> Result<()> {
        let db = setup_test_db().await?;
        let user = create_test_user(&db).await?;
        let category =
            create_test_category(&db, user.id, "Groceries", CategoryType::Expense).await?;

        for amount in [0.0, -10.0, f64::NAN, f64::INFINITY] {
            let result = create_budget(&db, user.id, category.id, amount, date(2024, 1, 1)).await;
            assert!(
                matches!(result, Err(Error::Validation { .. })),
                "amount {amount} should be rejected"
            );
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_create_budget_unknown_category() -> Result<()> {
        let db = setup_test_db().await?;
        let user = create_test_user(&db).await?;

        let result = create_budget(&db, user.id, 55, 200.0, date(2024, 1, 1)).await;
        assert!(matches!(
            result,
            Err(Error::NotFound {
                entity: "Category",
                id: 55
            })
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_budgets_for_user_month_filter() -> Result<()> {
        let db = setup_test_db().await?;
        let user = create_test_user(&db).await?;
        let category =
            create_test_category(&db, user.id, "Groceries", CategoryType::Expense).await?;

        let january = create_budget(&db, user.id, category.id, 200.0, date(2024, 1, 1)).await?;
        create_budget(&db, user.id, category.id, 250.0, date(2024, 2, 1)).await?;

        let all = get_budgets_for_user(&db, user.id, None).await?;
        assert_eq!(all.len(), 2);

        let only_january = get_budgets_for_user(&db, user.id, Some(date(2024, 1, 1))).await?;
        assert_eq!(only_january.len(), 1);
        assert_eq!(only_january[0].id, january.id);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_budget() -> Result<()> {
        let db = setup_test_db().await?;
        let user = create_test_user(&db).await?;
        let category =
            create_test_category(&db, user.id, "Groceries", CategoryType::Expense).await?;
        let budget = create_budget(&db, user.id, category.id, 200.0, date(2024, 1, 1)).await?;

        let updated = update_budget(&db, budget.id, 300.0, date(2024, 2, 1)).await?;
        assert_eq!(updated.id, budget.id);
        assert_eq!(updated.amount, 300.0);
        assert_eq!(updated.month, date(2024, 2, 1));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_budget() -> Result<()> {
        let db = setup_test_db().await?;
        let user = create_test_user(&db).await?;
        let category =
            create_test_category(&db, user.id, "Groceries", CategoryType::Expense).await?;
        let budget = create_budget(&db, user.id, category.id, 200.0, date(2024, 1, 1)).await?;

        delete_budget(&db, budget.id).await?;
        assert!(get_budget_by_id(&db, budget.id).await?.is_none());

        let again = delete_budget(&db, budget.id).await;
        assert!(matches!(
            again,
            Err(Error::NotFound {
                entity: "Budget",
                ..
            })
        ));

        Ok(())
    }
}
