use serde::Serialize;
use serde_json::Value;
use shelter_core::document::Record;

use super::{Fields, ValidationError};

/// An adoption request for one animal.
///
/// `animal_id` is kept as given; it is not checked against the animal collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Application {
    pub animal_id: String,
    pub full_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Record for Application {
    fn collection_name() -> &'static str {
        "application"
    }
}

impl Application {
    pub fn validate(input: &Value) -> Result<Self, ValidationError> {
        let mut fields = Fields::from_value(input)?;

        let animal_id = fields.required_text("animal_id");
        let full_name = fields.required_text("full_name");
        let email = fields.required_email("email");
        let phone = fields.optional_text("phone");
        let message = fields.optional_text("message");

        let application = match (animal_id, full_name, email) {
            (Some(animal_id), Some(full_name), Some(email)) => Some(Self {
                animal_id,
                full_name,
                email,
                phone,
                message,
            }),
            _ => None,
        };

        fields.finish(application)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::schema::ViolationCode;

    #[test]
    fn accepts_unknown_animal_reference() {
        let application = Application::validate(&json!({
            "animal_id": "does-not-exist",
            "full_name": "Ada Lovelace",
            "email": "ada@example.org",
        }))
        .unwrap();

        assert_eq!(application.animal_id, "does-not-exist");
        assert_eq!(application.phone, None);
    }

    #[test]
    fn rejects_malformed_email() {
        let errors = Application::validate(&json!({
            "animal_id": "a1",
            "full_name": "Ada Lovelace",
            "email": "not-an-email",
        }))
        .unwrap_err();

        assert_eq!(errors.violations().len(), 1);
        assert_eq!(errors.for_field("email").unwrap().code, ViolationCode::Email);
    }
}
