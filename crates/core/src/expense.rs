//! The expense record and its pre-persistence form.

use serde::{Deserialize, Serialize};

/// A persisted expense record.
///
/// `id` is assigned by the store on create and immutable afterwards; clients
/// never choose it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub title: String,
    pub amount: f64,
    pub note: String,
    pub tags: Vec<String>,
}

/// A validated expense payload that has not been persisted yet.
///
/// Same shape as [`Expense`] minus the id. The store's create operation turns
/// this into a full record.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub title: String,
    pub amount: f64,
    pub note: String,
    pub tags: Vec<String>,
}
