use serde::Serialize;
use serde_json::Value;
use shelter_core::document::Record;

use super::{Fields, ValidationError};

/// A published adoption success story.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Story {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animal_name: Option<String>,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Record for Story {
    fn collection_name() -> &'static str {
        "story"
    }
}

impl Story {
    pub fn validate(input: &Value) -> Result<Self, ValidationError> {
        let mut fields = Fields::from_value(input)?;

        let title = fields.required_text("title");
        let animal_name = fields.optional_text("animal_name");
        let content = fields.required_text("content");
        let image_url = fields.optional_url("image_url");

        let story = match (title, content) {
            (Some(title), Some(content)) => Some(Self {
                title,
                animal_name,
                content,
                image_url,
            }),
            _ => None,
        };

        fields.finish(story)
    }
}
