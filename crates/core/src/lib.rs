//! `spendlog-core` — domain model and validation building blocks.
//!
//! This crate contains **pure domain** types (no HTTP or storage concerns).

pub mod expense;
pub mod validate;

pub use expense::{Expense, NewExpense};
pub use validate::{Constraint, FieldError, error_map, generic_error};
