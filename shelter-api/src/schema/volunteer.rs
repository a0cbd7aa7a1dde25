use serde::Serialize;
use serde_json::Value;
use shelter_core::document::Record;

use super::{Fields, ValidationError};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Volunteer {
    pub full_name: String,
    pub email: String,
    pub interests: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Record for Volunteer {
    fn collection_name() -> &'static str {
        "volunteer"
    }
}

impl Volunteer {
    pub fn validate(input: &Value) -> Result<Self, ValidationError> {
        let mut fields = Fields::from_value(input)?;

        let full_name = fields.required_text("full_name");
        let email = fields.required_email("email");
        let interests = dedup_keep_first(fields.text_list("interests"));
        let availability = fields.optional_text("availability");
        let message = fields.optional_text("message");

        let volunteer = match (full_name, email) {
            (Some(full_name), Some(email)) => Some(Self {
                full_name,
                email,
                interests,
                availability,
                message,
            }),
            _ => None,
        };

        fields.finish(volunteer)
    }
}

fn dedup_keep_first(values: Vec<String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(values.len());

    for value in values {
        if !unique.contains(&value) {
            unique.push(value);
        }
    }
    unique
}
