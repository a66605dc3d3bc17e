//! Account entity - A financial account (checking, savings, credit card, cash)
//! owned by exactly one user.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Kind of financial account.
///
/// Stored as its snake_case string value; credit-card balances are summed
/// with the same sign as asset accounts in net-worth reporting (a documented
/// caveat, not corrected here).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    /// Everyday checking account
    #[sea_orm(string_value = "checking")]
    Checking,
    /// Savings account
    #[sea_orm(string_value = "savings")]
    Savings,
    /// Credit card account
    #[sea_orm(string_value = "credit_card")]
    CreditCard,
    /// Physical cash
    #[sea_orm(string_value = "cash")]
    Cash,
}

/// Account database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    /// Unique identifier for the account
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the user who owns this account
    pub user_id: i64,
    /// Human-readable name of the account (e.g., "Everyday Checking")
    pub name: String,
    /// Current balance in dollars
    pub balance: f64,
    /// Kind of account
    pub account_type: AccountType,
}

/// Defines relationships between Account and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each account belongs to one user
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    /// One account has many transactions
    #[sea_orm(has_many = "super::transaction::Entity")]
    Transactions,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transactions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
