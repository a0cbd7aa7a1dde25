use serde::Serialize;
use serde_json::Value;
use shelter_core::document::Record;

use super::{Fields, ValidationError};

/// A donation pledge. Nothing is charged.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Donation {
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Record for Donation {
    fn collection_name() -> &'static str {
        "donation"
    }
}

impl Donation {
    pub fn validate(input: &Value) -> Result<Self, ValidationError> {
        let mut fields = Fields::from_value(input)?;

        let full_name = fields.required_text("full_name");
        let email = fields.optional_email("email");
        let amount = fields.required_positive_number("amount");
        let message = fields.optional_text("message");

        let donation = match (full_name, amount) {
            (Some(full_name), Some(amount)) => Some(Self {
                full_name,
                email,
                amount,
                message,
            }),
            _ => None,
        };

        fields.finish(donation)
    }
}
