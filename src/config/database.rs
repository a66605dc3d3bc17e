//! Database connection and schema management using `SeaORM`.
//!
//! Connections come from `SeaORM`'s bounded pool; every query checks a
//! connection out and returns it on completion or failure, so no operation
//! can leak one. Tables are created at startup from the entity definitions
//! with `Schema::create_table_from_entity`, keeping the schema in lockstep
//! with the Rust structs without hand-written SQL.

use crate::entities::{Account, Budget, Category, Transaction, User};
use crate::errors::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Schema};

/// Lower bound of the connection pool.
const MIN_CONNECTIONS: u32 = 1;
/// Upper bound of the connection pool.
const MAX_CONNECTIONS: u32 = 20;

/// Connects to the relational store with a bounded connection pool.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(database_url.to_string());
    options
        .min_connections(MIN_CONNECTIONS)
        .max_connections(MAX_CONNECTIONS);

    Database::connect(options).await.map_err(Into::into)
}

/// Creates all tables from the entity definitions if they do not exist yet.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut user_table = schema.create_table_from_entity(User);
    let mut account_table = schema.create_table_from_entity(Account);
    let mut category_table = schema.create_table_from_entity(Category);
    let mut transaction_table = schema.create_table_from_entity(Transaction);
    let mut budget_table = schema.create_table_from_entity(Budget);

    db.execute(builder.build(user_table.if_not_exists())).await?;
    db.execute(builder.build(account_table.if_not_exists()))
        .await?;
    db.execute(builder.build(category_table.if_not_exists()))
        .await?;
    db.execute(builder.build(transaction_table.if_not_exists()))
        .await?;
    db.execute(builder.build(budget_table.if_not_exists()))
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{
        account::Model as AccountModel, budget::Model as BudgetModel,
        category::Model as CategoryModel, transaction::Model as TransactionModel,
        user::Model as UserModel,
    };
    use sea_orm::{EntityTrait, QuerySelect};

    #[tokio::test]
    async fn test_create_tables() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;

        // Tables exist if querying them succeeds
        let _: Vec<UserModel> = User::find().limit(1).all(&db).await?;
        let _: Vec<AccountModel> = Account::find().limit(1).all(&db).await?;
        let _: Vec<CategoryModel> = Category::find().limit(1).all(&db).await?;
        let _: Vec<TransactionModel> = Transaction::find().limit(1).all(&db).await?;
        let _: Vec<BudgetModel> = Budget::find().limit(1).all(&db).await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_create_tables_is_idempotent() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;
        create_tables(&db).await?;

        let _: Vec<UserModel> = User::find().limit(1).all(&db).await?;
        Ok(())
    }
}
