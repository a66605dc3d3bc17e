//! Shared test utilities.
//!
//! This module provides common helper functions for setting up test
//! databases and creating test entities with sensible defaults.

use crate::{
    core::{account, category, transaction, user},
    entities::{self, AccountType, CategoryType, TransactionType},
    errors::Result,
};
use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Builds a `NaiveDate` from components. Panics on invalid dates, which is
/// fine in tests where every date is a literal.
#[allow(clippy::unwrap_used)]
#[must_use]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Creates a test user with sensible defaults ("Alice" / alice@example.com).
pub async fn create_test_user(db: &DatabaseConnection) -> Result<entities::user::Model> {
    user::create_user(db, "Alice".to_string(), "alice@example.com".to_string()).await
}

/// Creates a test account for the given user.
pub async fn create_test_account(
    db: &DatabaseConnection,
    user_id: i64,
    name: &str,
    balance: f64,
    account_type: AccountType,
) -> Result<entities::account::Model> {
    account::create_account(db, user_id, name.to_string(), balance, account_type).await
}

/// Creates a test category for the given user.
pub async fn create_test_category(
    db: &DatabaseConnection,
    user_id: i64,
    name: &str,
    category_type: CategoryType,
) -> Result<entities::category::Model> {
    category::create_category(db, user_id, name.to_string(), category_type).await
}

/// Creates a test transaction with a default description.
pub async fn create_test_transaction(
    db: &DatabaseConnection,
    account_id: i64,
    category_id: i64,
    amount: f64,
    transaction_date: NaiveDate,
    transaction_type: TransactionType,
) -> Result<entities::transaction::Model> {
    transaction::create_transaction(
        db,
        account_id,
        category_id,
        amount,
        transaction_date,
        "Test transaction".to_string(),
        transaction_type,
    )
    .await
}

/// Sets up a complete test environment with a user, one checking account,
/// and one expense category. Returns (db, user, account, category).
pub async fn setup_with_account_and_category() -> Result<(
    DatabaseConnection,
    entities::user::Model,
    entities::account::Model,
    entities::category::Model,
)> {
    let db = setup_test_db().await?;
    let user = create_test_user(&db).await?;
    let account = create_test_account(&db, user.id, "Checking", 0.0, AccountType::Checking).await?;
    let category = create_test_category(&db, user.id, "Groceries", CategoryType::Expense).await?;
    Ok((db, user, account, category))
}
