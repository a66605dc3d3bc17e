//! Category entity - An income or expense label owned by one user.
//!
//! Transactions and budgets both reference categories. Nothing enforces that
//! a transaction's own type matches its category's type; that coherence gap
//! is part of the recorded contract.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Direction of money flow a category describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
pub enum CategoryType {
    /// Money coming in (salary, interest, ...)
    #[sea_orm(string_value = "income")]
    Income,
    /// Money going out (groceries, rent, ...)
    #[sea_orm(string_value = "expense")]
    Expense,
}

/// Category database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    /// Unique identifier for the category
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the user who owns this category
    pub user_id: i64,
    /// Human-readable name (e.g., "Groceries", "Salary")
    pub name: String,
    /// Whether this category labels income or expenses
    pub category_type: CategoryType,
}

/// Defines relationships between Category and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each category belongs to one user
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    /// One category labels many transactions
    #[sea_orm(has_many = "super::transaction::Entity")]
    Transactions,
    /// One category can be budgeted in many months
    #[sea_orm(has_many = "super::budget::Entity")]
    Budgets,
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

impl Related<super::budget::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Budgets.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
