//! Analytics engine - read-only aggregation over the entity tables.
//!
//! Three operations: spending summary over a date range, budget progress for
//! a month, and net worth. Each verifies the user exists before running any
//! aggregate, computes over rows fetched through the shared connection pool,
//! and mutates nothing. Aggregation happens in Rust over the filtered row
//! sets, with deterministic ordering so results are stable across backends.

use crate::{
    entities::{
        Account, AccountType, Budget, Category, Transaction, TransactionType, account, budget,
        category, transaction,
    },
    errors::{Error, Result},
};
use chrono::NaiveDate;
use sea_orm::{JoinType, QueryOrder, QuerySelect, prelude::*};
use serde::Serialize;
use std::collections::HashMap;

/// Fraction of the budget at which status flips from under to nearly.
const NEARLY_THRESHOLD: f64 = 0.9;

/// Income/expense/net totals for a date range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpendingSummary {
    /// Sum of income-type transaction amounts (0 if none)
    pub total_income: f64,
    /// Sum of expense-type transaction amounts (0 if none)
    pub total_expense: f64,
    /// `total_income - total_expense`
    pub net: f64,
}

/// Per-category slice of the spending summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySpending {
    /// Category the slice aggregates
    pub category_id: i64,
    /// Category name at query time
    pub name: String,
    /// Direction of the aggregated transactions
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// Sum of amounts in this (category, type) group
    pub total_amount: f64,
}

/// Result of [`spending_summary`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpendingReport {
    /// User the report is for
    pub user_id: i64,
    /// Inclusive start of the queried range
    pub start_date: NaiveDate,
    /// Inclusive end of the queried range
    pub end_date: NaiveDate,
    /// Aggregate totals over the range
    pub summary: SpendingSummary,
    /// Per-(category, type) breakdown, ordered by category id then type
    pub by_category: Vec<CategorySpending>,
}

/// Budget status band. The three bands are exhaustive and mutually
/// exclusive, with boundaries at exactly 90% and 100% of the budget amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    /// Spent less than 90% of the budgeted amount
    UnderBudget,
    /// Spent between 90% and 100% of the budgeted amount, inclusive
    NearlyBudget,
    /// Spent more than the budgeted amount
    OverBudget,
}

/// Progress entry for one budget row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetProgress {
    /// Category the budget targets
    pub category_id: i64,
    /// Category name at query time
    pub category_name: String,
    /// Budgeted amount
    pub budget_amount: f64,
    /// All-time expense total in the budget's category (see [`budget_progress`])
    pub spent: f64,
    /// `budget_amount - spent`; negative when over budget
    pub remaining: f64,
    /// `spent / budget_amount * 100`, rounded to 2 decimal places
    pub progress_percent: f64,
    /// Status band for this budget
    pub status: BudgetStatus,
}

/// Result of [`budget_progress`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetProgressReport {
    /// User the report is for
    pub user_id: i64,
    /// Queried month anchor (day 1)
    pub month: NaiveDate,
    /// One entry per budget row for that month, ordered by budget id
    pub budgets: Vec<BudgetProgress>,
}

/// Account line in the net-worth breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountBalance {
    /// Account id
    pub account_id: i64,
    /// Account name
    pub name: String,
    /// Current balance
    pub balance: f64,
    /// Kind of account
    #[serde(rename = "type")]
    pub account_type: AccountType,
}

/// Result of [`net_worth`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetWorthReport {
    /// User the report is for
    pub user_id: i64,
    /// Sum of balances across all the user's accounts
    pub net_worth: f64,
    /// The accounts behind the total, ordered by id
    pub accounts: Vec<AccountBalance>,
}

/// Aggregates a user's income and expenses over an inclusive date range,
/// with a per-(category, type) breakdown.
///
/// The user must exist and `start_date` must not be after `end_date`. A
/// range with no matching transactions yields a zeroed summary and an empty
/// breakdown rather than an error.
pub async fn spending_summary(
    db: &DatabaseConnection,
    user_id: i64,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<SpendingReport> {
    crate::core::user::ensure_user_exists(db, user_id).await?;

    if start_date > end_date {
        return Err(Error::validation(format!(
            "start_date {start_date} is after end_date {end_date}"
        )));
    }

    let transactions = Transaction::find()
        .join(JoinType::InnerJoin, transaction::Relation::Account.def())
        .filter(account::Column::UserId.eq(user_id))
        .filter(transaction::Column::Date.between(start_date, end_date))
        .all(db)
        .await?;

    let mut total_income = 0.0;
    let mut total_expense = 0.0;
    let mut by_group: HashMap<(i64, TransactionType), f64> = HashMap::new();

    for txn in &transactions {
        match txn.transaction_type {
            TransactionType::Income => total_income += txn.amount,
            TransactionType::Expense => total_expense += txn.amount,
        }
        *by_group
            .entry((txn.category_id, txn.transaction_type))
            .or_insert(0.0) += txn.amount;
    }

    let category_names = load_category_names(db, by_group.keys().map(|(id, _)| *id)).await?;

    let mut by_category: Vec<CategorySpending> = by_group
        .into_iter()
        .filter_map(|((category_id, transaction_type), total_amount)| {
            // An unknown category id means the category row is gone;
            // such groups are dropped from the breakdown.
            category_names.get(&category_id).map(|name| CategorySpending {
                category_id,
                name: name.clone(),
                transaction_type,
                total_amount,
            })
        })
        .collect();

    by_category.sort_by_key(|entry| {
        (
            entry.category_id,
            matches!(entry.transaction_type, TransactionType::Expense),
        )
    });

    Ok(SpendingReport {
        user_id,
        start_date,
        end_date,
        summary: SpendingSummary {
            total_income,
            total_expense,
            net: total_income - total_expense,
        },
        by_category,
    })
}

/// Compares budgeted amounts against actual spending for one month.
///
/// `spent` is the sum of expense-type transactions in the budget's category
/// across the user's accounts over ALL time, not just the queried month.
/// That is the recorded contract for this report (pinned by a dedicated
/// test); it is kept for compatibility rather than silently month-scoped.
pub async fn budget_progress(
    db: &DatabaseConnection,
    user_id: i64,
    month: NaiveDate,
) -> Result<BudgetProgressReport> {
    crate::core::user::ensure_user_exists(db, user_id).await?;
    crate::core::budget::validate_month(month)?;

    let budgets = Budget::find()
        .filter(budget::Column::UserId.eq(user_id))
        .filter(budget::Column::Month.eq(month))
        .order_by_asc(budget::Column::Id)
        .all(db)
        .await?;

    let expenses = Transaction::find()
        .join(JoinType::InnerJoin, transaction::Relation::Account.def())
        .filter(account::Column::UserId.eq(user_id))
        .filter(transaction::Column::TransactionType.eq(TransactionType::Expense))
        .all(db)
        .await?;

    let mut spent_by_category: HashMap<i64, f64> = HashMap::new();
    for txn in &expenses {
        *spent_by_category.entry(txn.category_id).or_insert(0.0) += txn.amount;
    }

    let category_names =
        load_category_names(db, budgets.iter().map(|b| b.category_id)).await?;

    let entries = budgets
        .into_iter()
        .map(|budget| {
            let spent = spent_by_category
                .get(&budget.category_id)
                .copied()
                .unwrap_or(0.0);
            let category_name = category_names
                .get(&budget.category_id)
                .cloned()
                .unwrap_or_default();

            // Creation forbids non-positive amounts; rows written out-of-band
            // still must not divide by zero.
            let progress_percent = if budget.amount > 0.0 {
                round2(spent / budget.amount * 100.0)
            } else {
                0.0
            };

            BudgetProgress {
                category_id: budget.category_id,
                category_name,
                budget_amount: budget.amount,
                spent,
                remaining: budget.amount - spent,
                progress_percent,
                status: classify(spent, budget.amount),
            }
        })
        .collect();

    Ok(BudgetProgressReport {
        user_id,
        month,
        budgets: entries,
    })
}

/// Sums balances across all of a user's accounts.
///
/// All account types are summed with the same sign; a credit-card balance
/// counts like an asset balance. A user with zero accounts reports a net
/// worth of 0 with an empty breakdown.
pub async fn net_worth(db: &DatabaseConnection, user_id: i64) -> Result<NetWorthReport> {
    crate::core::user::ensure_user_exists(db, user_id).await?;

    let accounts = Account::find()
        .filter(account::Column::UserId.eq(user_id))
        .order_by_asc(account::Column::Id)
        .all(db)
        .await?;

    let net_worth = accounts.iter().map(|account| account.balance).sum();

    let accounts = accounts
        .into_iter()
        .map(|account| AccountBalance {
            account_id: account.id,
            name: account.name,
            balance: account.balance,
            account_type: account.account_type,
        })
        .collect();

    Ok(NetWorthReport {
        user_id,
        net_worth,
        accounts,
    })
}

/// Classifies spending against a budget amount into a status band.
#[must_use]
pub fn classify(spent: f64, amount: f64) -> BudgetStatus {
    if spent > amount {
        BudgetStatus::OverBudget
    } else if spent >= amount * NEARLY_THRESHOLD {
        BudgetStatus::NearlyBudget
    } else {
        BudgetStatus::UnderBudget
    }
}

/// Rounds to 2 decimal places for the reported percentage.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Loads the names of the given category ids into a lookup map.
async fn load_category_names(
    db: &DatabaseConnection,
    ids: impl Iterator<Item = i64>,
) -> Result<HashMap<i64, String>> {
    let ids: Vec<i64> = ids.collect();
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let categories = Category::find()
        .filter(category::Column::Id.is_in(ids))
        .all(db)
        .await?;

    Ok(categories
        .into_iter()
        .map(|category| (category.id, category.name))
        .collect())
}
