//! Core business logic - framework-agnostic entity repositories and the
//! analytics engine. All functions are async, operate on a
//! `&DatabaseConnection`, and return the crate [`Result`](crate::errors::Result).

/// Account repository (append-only)
pub mod account;
/// Read-only analytics aggregation (spending summary, budget progress, net worth)
pub mod analytics;
/// Budget repository (full CRUD)
pub mod budget;
/// Category repository (full CRUD)
pub mod category;
/// Transaction repository (append-only)
pub mod transaction;
/// User repository and the existence gate
pub mod user;
