//! Account business logic - Handles all account-related operations.
//!
//! Accounts are append-only: created and read, never updated or deleted
//! through this layer. Balances are plain stored values; transactions do
//! not adjust them (no double-entry invariants in this design).

use crate::{
    entities::{Account, AccountType, account},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Creates a new account owned by an existing user.
///
/// The owner is checked first; a missing user fails with `NotFound` before
/// any insert is attempted.
pub async fn create_account(
    db: &DatabaseConnection,
    user_id: i64,
    name: String,
    balance: f64,
    account_type: AccountType,
) -> Result<account::Model> {
    crate::core::user::ensure_user_exists(db, user_id).await?;

    if name.trim().is_empty() {
        return Err(Error::validation("Account name cannot be empty"));
    }

    if !balance.is_finite() {
        return Err(Error::validation(format!(
            "Account balance must be a finite number, got {balance}"
        )));
    }

    let account = account::ActiveModel {
        user_id: Set(user_id),
        name: Set(name.trim().to_string()),
        balance: Set(balance),
        account_type: Set(account_type),
        ..Default::default()
    };

    let result = account.insert(db).await?;
    Ok(result)
}

/// Finds an account by id, returning None if absent.
pub async fn get_account_by_id(
    db: &DatabaseConnection,
    account_id: i64,
) -> Result<Option<account::Model>> {
    Account::find_by_id(account_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all accounts owned by a user, ordered by id.
///
/// The user must exist; a user with no accounts yields an empty list.
pub async fn get_accounts_for_user(
    db: &DatabaseConnection,
    user_id: i64,
) -> Result<Vec<account::Model>> {
    crate::core::user::ensure_user_exists(db, user_id).await?;

    Account::find()
        .filter(account::Column::UserId.eq(user_id))
        .order_by_asc(account::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}
