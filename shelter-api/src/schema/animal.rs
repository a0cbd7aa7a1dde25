use serde::Serialize;
use serde_json::Value;
use shelter_core::document::Record;

use super::{Choice, Fields, ValidationError};

pub const MAX_AGE: i64 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Dog,
    Cat,
    Rabbit,
    Bird,
    Other,
}

impl Choice for Species {
    const CHOICES: &'static [(&'static str, Self)] = &[
        ("dog", Self::Dog),
        ("cat", Self::Cat),
        ("rabbit", Self::Rabbit),
        ("bird", Self::Bird),
        ("other", Self::Other),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Small,
    Medium,
    Large,
    Xlarge,
}

impl Choice for Size {
    const CHOICES: &'static [(&'static str, Self)] = &[
        ("small", Self::Small),
        ("medium", Self::Medium),
        ("large", Self::Large),
        ("xlarge", Self::Xlarge),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Choice for Gender {
    const CHOICES: &'static [(&'static str, Self)] =
        &[("male", Self::Male), ("female", Self::Female)];
}

/// An adoptable animal listing.
///
/// `good_with_kids` and `good_with_pets` are tri-state: absent means unknown and
/// is never stored as `false`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Animal {
    pub name: String,
    pub species: Species,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
    pub age: i64,
    pub size: Size,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub photos: Vec<String>,
    pub featured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub good_with_kids: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub good_with_pets: Option<bool>,
}

impl Record for Animal {
    fn collection_name() -> &'static str {
        "animal"
    }
}

impl Animal {
    pub fn validate(input: &Value) -> Result<Self, ValidationError> {
        let mut fields = Fields::from_value(input)?;

        let name = fields.required_non_blank("name");
        let species = fields.required_choice::<Species>("species");
        let breed = fields.optional_text("breed");
        let age = fields.required_int("age", 0..=MAX_AGE);
        let size = fields.required_choice::<Size>("size");
        let gender = fields.optional_choice::<Gender>("gender");
        let description = fields.optional_text("description");
        let photos = fields.url_list("photos");
        let featured = fields.bool_or("featured", false);
        let location = fields.optional_text("location");
        let good_with_kids = fields.optional_bool("good_with_kids");
        let good_with_pets = fields.optional_bool("good_with_pets");

        let animal = match (name, species, age, size) {
            (Some(name), Some(species), Some(age), Some(size)) => Some(Self {
                name,
                species,
                breed,
                age,
                size,
                gender,
                description,
                photos,
                featured,
                location,
                good_with_kids,
                good_with_pets,
            }),
            _ => None,
        };

        fields.finish(animal)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use shelter_core::document::RecordExt;

    use super::*;
    use crate::schema::ViolationCode;

    #[test]
    fn minimal_animal_gets_defaults() {
        let animal = Animal::validate(&json!({
            "name": "Luna",
            "species": "dog",
            "age": 2,
            "size": "medium",
        }))
        .unwrap();

        assert_eq!(animal.photos, Vec::<String>::new());
        assert!(!animal.featured);
        assert_eq!(animal.good_with_kids, None);
    }

    #[test]
    fn absent_optionals_are_not_stored() {
        let animal = Animal::validate(&json!({
            "name": "Luna",
            "species": "dog",
            "age": 2,
            "size": "medium",
            "good_with_pets": false,
        }))
        .unwrap();

        let document = animal.to_document().unwrap();

        assert!(!document.contains_key("breed"));
        assert!(!document.contains_key("good_with_kids"));
        assert!(!document.get_bool("good_with_pets").unwrap());
        assert_eq!(document.get_str("species").unwrap(), "dog");
        assert_eq!(document.get_array("photos").unwrap().len(), 0);
    }

    #[test]
    fn every_violation_is_reported() {
        let errors = Animal::validate(&json!({
            "name": "   ",
            "species": "dragon",
            "age": 41,
            "featured": "yes",
            "photos": ["ftp://example.org/luna.jpg"],
        }))
        .unwrap_err();

        let code = |field: &str| errors.for_field(field).map(|v| v.code);

        assert_eq!(code("name"), Some(ViolationCode::Empty));
        assert_eq!(code("species"), Some(ViolationCode::Enum));
        assert_eq!(code("age"), Some(ViolationCode::Range));
        assert_eq!(code("size"), Some(ViolationCode::Missing));
        assert_eq!(code("featured"), Some(ViolationCode::Type));
        assert_eq!(code("photos[0]"), Some(ViolationCode::Url));
        assert_eq!(errors.violations().len(), 6);
    }

    #[test]
    fn photos_may_be_site_paths() {
        let animal = Animal::validate(&json!({
            "name": "Luna",
            "species": "dog",
            "age": 2,
            "size": "medium",
            "photos": ["/static/luna.jpg", "https://images.example.org/luna-2.jpg"],
        }))
        .unwrap();

        assert_eq!(animal.photos, ["/static/luna.jpg", "https://images.example.org/luna-2.jpg"]);
    }

    #[test]
    fn age_bounds_are_inclusive() {
        let base = |age: Value| {
            json!({ "name": "Pip", "species": "bird", "age": age, "size": "small" })
        };

        assert!(Animal::validate(&base(json!(0))).is_ok());
        assert!(Animal::validate(&base(json!(40))).is_ok());
        assert!(Animal::validate(&base(json!(-1))).is_err());
        assert_eq!(
            Animal::validate(&base(json!("3"))).unwrap_err().violations()[0].code,
            ViolationCode::Type
        );
    }
}
