//! Request DTOs and their field validation.
//!
//! Every field is optional at the serde layer so that an absent field
//! surfaces as a named validation failure (`"title is required"`) instead of
//! a bare deserialize error. Presence is the rule being checked: `amount: 0`,
//! `note: ""` and `tags: []` are all valid input. `title` additionally
//! rejects the empty string.

use serde::Deserialize;

use spendlog_core::{Expense, FieldError, NewExpense};

/// Body of `POST /expenses`.
#[derive(Debug, Default, Deserialize)]
pub struct CreateExpenseRequest {
    pub title: Option<String>,
    pub amount: Option<f64>,
    pub note: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl CreateExpenseRequest {
    /// Validate presence of all fields and produce the store-ready payload.
    pub fn into_new_expense(self) -> Result<NewExpense, Vec<FieldError>> {
        match (self.title, self.amount, self.note, self.tags) {
            (Some(title), Some(amount), Some(note), Some(tags)) if !title.is_empty() => {
                Ok(NewExpense {
                    title,
                    amount,
                    note,
                    tags,
                })
            }
            (title, amount, note, tags) => Err(required_errors(&[
                ("title", title.as_deref().unwrap_or_default().is_empty()),
                ("amount", amount.is_none()),
                ("note", note.is_none()),
                ("tags", tags.is_none()),
            ])),
        }
    }
}

/// Body of `PUT /expenses/:id` — a full expense record including its id.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateExpenseRequest {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub amount: Option<f64>,
    pub note: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl UpdateExpenseRequest {
    /// Validate presence of all fields and produce the full record.
    pub fn into_expense(self) -> Result<Expense, Vec<FieldError>> {
        match (self.id, self.title, self.amount, self.note, self.tags) {
            (Some(id), Some(title), Some(amount), Some(note), Some(tags))
                if !title.is_empty() =>
            {
                Ok(Expense {
                    id,
                    title,
                    amount,
                    note,
                    tags,
                })
            }
            (id, title, amount, note, tags) => Err(required_errors(&[
                ("id", id.is_none()),
                ("title", title.as_deref().unwrap_or_default().is_empty()),
                ("amount", amount.is_none()),
                ("note", note.is_none()),
                ("tags", tags.is_none()),
            ])),
        }
    }
}

fn required_errors(checks: &[(&str, bool)]) -> Vec<FieldError> {
    checks
        .iter()
        .filter(|(_, failed)| *failed)
        .map(|(field, _)| FieldError::required(*field))
        .collect()
}
