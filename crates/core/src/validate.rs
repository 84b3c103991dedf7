//! Field-validation failures and the uniform error payload they collapse into.
//!
//! A failed constraint is modeled as a tagged [`FieldError`] rather than an
//! opaque error string, so the mapper in [`error_map`] is the single place
//! where client-facing messages are produced.

use std::collections::BTreeMap;
use std::fmt;

/// The constraint a field violated.
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    /// The field was absent from the payload (or blank where blank is not allowed).
    Required,
    /// Value shorter than the minimum length.
    MinLen(u64),
    /// Value longer than the maximum length.
    MaxLen(u64),
    /// Value not exactly the expected length.
    ExactLen(u64),
    /// Value outside the allowed set.
    OneOf(Vec<String>),
    /// Value is not a well-formed email address.
    Email,
    /// Value did not equal what it was required to match.
    Mismatch,
}

/// One offending field and the constraint it violated.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub constraint: Constraint,
}

impl FieldError {
    pub fn new(field: impl Into<String>, constraint: Constraint) -> Self {
        Self {
            field: field.into(),
            constraint,
        }
    }

    pub fn required(field: impl Into<String>) -> Self {
        Self::new(field, Constraint::Required)
    }

    /// The client-facing message for this failure.
    pub fn message(&self) -> String {
        message(&lower_camel(&self.field), &self.constraint)
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Collapse field failures into the `{"<field>": "<message>"}` payload,
/// keyed by the lower-camel-case field name.
pub fn error_map(errors: &[FieldError]) -> BTreeMap<String, String> {
    errors
        .iter()
        .map(|e| (lower_camel(&e.field), e.message()))
        .collect()
}

/// The single-key payload `{"error": "<message>"}` used for every failure
/// that is not tied to a specific field.
pub fn generic_error(err: impl fmt::Display) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    map.insert("error".to_string(), err.to_string());
    map
}

/// Convert a snake_case field name to the lowerCamelCase form used in JSON.
pub fn lower_camel(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for ch in field.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else if out.is_empty() {
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

fn message(field: &str, constraint: &Constraint) -> String {
    match constraint {
        Constraint::Required => format!("{field} is required"),
        Constraint::MaxLen(n) => format!("{field} cannot be longer than {n}"),
        Constraint::MinLen(n) => format!("{field} must be longer than {n}"),
        Constraint::ExactLen(n) => format!("{field} must be {n} characters long"),
        Constraint::OneOf(values) => format!("{field} must be {}", values.join(" ")),
        Constraint::Email => "invalid email format".to_string(),
        Constraint::Mismatch => format!("{field} is not valid"),
    }
}
