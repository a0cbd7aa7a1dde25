//! Turns query-string parameters into store queries.
//!
//! Each supplied parameter contributes one constraint and the constraints are
//! combined with AND. Parameters that are absent or empty contribute nothing,
//! unknown parameters are ignored, and every malformed parameter is reported in
//! one [`ValidationError`].

use std::collections::HashMap;

use shelter_core::query::{Expr, Filter, Query};

use crate::schema::{ValidationError, ViolationCode};

pub const DEFAULT_ANIMAL_LIMIT: usize = 24;
pub const FEATURED_LIMIT: usize = 8;
pub const DEFAULT_STORY_LIMIT: usize = 6;
pub const MAX_LIMIT: usize = 100;

/// Fields matched by the free-text `q` parameter.
const TEXT_FIELDS: [&str; 3] = ["name", "breed", "description"];

/// Parsed `GET /animals` parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimalSearch {
    pub q: Option<String>,
    pub species: Option<String>,
    pub size: Option<String>,
    pub featured: Option<bool>,
    pub age_min: Option<i64>,
    pub age_max: Option<i64>,
    pub limit: usize,
}

impl Default for AnimalSearch {
    fn default() -> Self {
        Self {
            q: None,
            species: None,
            size: None,
            featured: None,
            age_min: None,
            age_max: None,
            limit: DEFAULT_ANIMAL_LIMIT,
        }
    }
}

impl AnimalSearch {
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, ValidationError> {
        let mut reader = Params::new(params);

        let search = Self {
            q: reader.text("q"),
            species: reader.text("species"),
            size: reader.text("size"),
            featured: reader.flag("featured"),
            age_min: reader.non_negative("age_min"),
            age_max: reader.non_negative("age_max"),
            limit: reader.limit(DEFAULT_ANIMAL_LIMIT),
        };

        reader.finish(search)
    }

    /// The conjunction of every supplied constraint, or `None` to match all.
    pub fn filter(&self) -> Option<Expr> {
        let text = self.q.as_ref().map(|q| {
            Filter::or(TEXT_FIELDS.iter().map(|field| Filter::contains(*field, q.as_str())))
        });

        Filter::all(
            [
                text,
                self.species.as_ref().map(|s| Filter::eq("species", s.as_str())),
                Filter::range("age", self.age_min, self.age_max),
                self.size.as_ref().map(|s| Filter::eq("size", s.as_str())),
                self.featured.map(|f| Filter::eq("featured", f)),
            ]
            .into_iter()
            .flatten(),
        )
    }

    pub fn to_query(&self) -> Query {
        Query::builder()
            .maybe_filter(self.filter())
            .limit(self.limit)
            .build()
    }
}

/// Featured animals: a fixed filter and a fixed limit.
pub fn featured_query() -> Query {
    Query::builder()
        .filter(Filter::eq("featured", true))
        .limit(FEATURED_LIMIT)
        .build()
}

/// `GET /stories` accepts only `limit`.
pub fn story_query(params: &HashMap<String, String>) -> Result<Query, ValidationError> {
    let mut reader = Params::new(params);
    let limit = reader.limit(DEFAULT_STORY_LIMIT);

    reader.finish(Query::builder().limit(limit).build())
}

struct Params<'a> {
    params: &'a HashMap<String, String>,
    errors: ValidationError,
}

impl<'a> Params<'a> {
    fn new(params: &'a HashMap<String, String>) -> Self {
        Self {
            params,
            errors: ValidationError::new(),
        }
    }

    fn finish<T>(self, value: T) -> Result<T, ValidationError> {
        if self.errors.is_empty() {
            Ok(value)
        } else {
            Err(self.errors)
        }
    }

    fn raw(&self, name: &str) -> Option<&'a str> {
        self.params
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    fn text(&self, name: &str) -> Option<String> {
        self.raw(name).map(str::to_string)
    }

    fn flag(&mut self, name: &str) -> Option<bool> {
        let raw = self.raw(name)?;

        match raw.to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Some(true),
            "false" | "0" | "no" | "off" => Some(false),
            _ => {
                self.errors.push(name, ViolationCode::Type, "expected a boolean");
                None
            }
        }
    }

    fn integer(&mut self, name: &str) -> Option<i64> {
        let raw = self.raw(name)?;

        match raw.trim().parse::<i64>() {
            Ok(value) => Some(value),
            Err(_) => {
                self.errors.push(name, ViolationCode::Type, "expected an integer");
                None
            }
        }
    }

    fn non_negative(&mut self, name: &str) -> Option<i64> {
        let value = self.integer(name)?;

        if value < 0 {
            self.errors.push(name, ViolationCode::Range, "must be at least 0");
            return None;
        }
        Some(value)
    }

    /// Reads `limit`, falling back to `default`; out-of-range values are rejected.
    fn limit(&mut self, default: usize) -> usize {
        let Some(value) = self.integer("limit") else {
            return default;
        };

        match usize::try_from(value) {
            Ok(limit) if (1..=MAX_LIMIT).contains(&limit) => limit,
            _ => {
                self.errors.push(
                    "limit",
                    ViolationCode::Range,
                    format!("must be between 1 and {MAX_LIMIT}"),
                );
                default
            }
        }
    }
}
