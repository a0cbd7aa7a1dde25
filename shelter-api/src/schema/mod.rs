//! Validated record shapes accepted and stored by the API.
//!
//! Every record type exposes a `validate` constructor taking the raw JSON input
//! and returning either the record or a [`ValidationError`] that lists every
//! violated field, not just the first one. Validation never coerces across
//! types: `"3"` is not an integer and `1` is not a boolean.

use serde::Serialize;

pub mod animal;
pub mod application;
pub mod donation;
pub mod story;
pub mod volunteer;

mod fields;

pub use animal::{Animal, Gender, Size, Species};
pub use application::Application;
pub use donation::Donation;
pub use story::Story;
pub use volunteer::Volunteer;

pub(crate) use fields::Fields;

/// Machine-readable reason a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationCode {
    /// The request body or query string could not be decoded as a whole.
    Body,
    /// A required field is absent or null.
    Missing,
    /// The value has the wrong JSON type.
    Type,
    /// The value is not one of the declared choices.
    Enum,
    /// The value is outside its numeric bounds.
    Range,
    /// A required text value is blank.
    Empty,
    /// The value is not a syntactically valid email address.
    Email,
    /// The value is neither an http(s) URL nor a path on the site.
    Url,
}

/// A single rejected field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field: String,
    pub code: ViolationCode,
    pub message: String,
}

/// Every violation found while validating one input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(transparent)]
#[error("{} field(s) failed validation", .violations.len())]
pub struct ValidationError {
    violations: Vec<Violation>,
}

impl ValidationError {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an error holding exactly one violation.
    pub fn single(field: impl Into<String>, code: ViolationCode, message: impl Into<String>) -> Self {
        let mut error = Self::new();
        error.push(field, code, message);
        error
    }

    pub fn push(&mut self, field: impl Into<String>, code: ViolationCode, message: impl Into<String>) {
        self.violations.push(Violation {
            field: field.into(),
            code,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Returns the violation recorded for `field`, if any.
    pub fn for_field(&self, field: &str) -> Option<&Violation> {
        self.violations.iter().find(|v| v.field == field)
    }
}

/// A closed set of string literals a field may take.
pub trait Choice: Sized + Copy + 'static {
    /// Accepted spellings paired with the value they parse to.
    const CHOICES: &'static [(&'static str, Self)];

    fn parse(raw: &str) -> Option<Self> {
        Self::CHOICES
            .iter()
            .find(|(name, _)| *name == raw)
            .map(|(_, value)| *value)
    }

    /// The accepted spellings joined for error messages.
    fn expected() -> String {
        Self::CHOICES
            .iter()
            .map(|(name, _)| *name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
