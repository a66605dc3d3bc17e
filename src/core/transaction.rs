//! Transaction business logic - Handles all transaction-related operations.
//!
//! Transactions are append-only. Amounts are non-negative magnitudes with
//! the direction carried by [`TransactionType`]. Nothing enforces that a
//! transaction's type matches its category's type; that is an accepted gap
//! in the recorded contract, not something this layer patches.

use crate::{
    entities::{Transaction, TransactionType, account, transaction},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use sea_orm::{JoinType, QueryOrder, QuerySelect, Set, prelude::*};

/// Creates a new transaction against an existing account and category.
///
/// Both referenced entities are checked first, so a dangling id fails with
/// `NotFound` before the insert.
pub async fn create_transaction(
    db: &DatabaseConnection,
    account_id: i64,
    category_id: i64,
    amount: f64,
    date: NaiveDate,
    description: String,
    transaction_type: TransactionType,
) -> Result<transaction::Model> {
    crate::core::account::get_account_by_id(db, account_id)
        .await?
        .ok_or(Error::not_found("Account", account_id))?;
    crate::core::category::get_category_by_id(db, category_id)
        .await?
        .ok_or(Error::not_found("Category", category_id))?;

    if !amount.is_finite() || amount < 0.0 {
        return Err(Error::validation(format!(
            "Transaction amount must be a non-negative magnitude, got {amount}"
        )));
    }

    let transaction = transaction::ActiveModel {
        account_id: Set(account_id),
        category_id: Set(category_id),
        amount: Set(amount),
        date: Set(date),
        description: Set(description),
        transaction_type: Set(transaction_type),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    let result = transaction.insert(db).await?;
    Ok(result)
}

/// Finds a transaction by id, returning None if absent.
pub async fn get_transaction_by_id(
    db: &DatabaseConnection,
    transaction_id: i64,
) -> Result<Option<transaction::Model>> {
    Transaction::find_by_id(transaction_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a user's transactions across all their accounts, newest first,
/// optionally restricted to an inclusive date range.
pub async fn get_transactions_for_user(
    db: &DatabaseConnection,
    user_id: i64,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> Result<Vec<transaction::Model>> {
    crate::core::user::ensure_user_exists(db, user_id).await?;

    let mut query = Transaction::find()
        .join(JoinType::InnerJoin, transaction::Relation::Account.def())
        .filter(account::Column::UserId.eq(user_id));

    if let (Some(start), Some(end)) = (start_date, end_date) {
        query = query.filter(transaction::Column::Date.between(start, end));
    }

    query
        .order_by_desc(transaction::Column::Date)
        .order_by_desc(transaction::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}
