use std::ops::RangeInclusive;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

use super::{Choice, ValidationError, ViolationCode};

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z]{2,63}$",
    )
    .expect("email pattern compiles")
});

/// Reads fields out of a JSON object while collecting every violation.
///
/// Accessors return `None` for absent or rejected values; whether the record can
/// be built is decided once, by [`Fields::finish`].
pub(crate) struct Fields<'a> {
    object: &'a Map<String, Value>,
    errors: ValidationError,
}

impl<'a> Fields<'a> {
    pub fn from_value(value: &'a Value) -> Result<Self, ValidationError> {
        match value {
            Value::Object(object) => Ok(Self {
                object,
                errors: ValidationError::new(),
            }),
            _ => Err(ValidationError::single(
                "body",
                ViolationCode::Body,
                "expected a JSON object",
            )),
        }
    }

    /// Returns the built record when no violation was recorded.
    pub fn finish<T>(self, record: Option<T>) -> Result<T, ValidationError> {
        match record {
            Some(record) if self.errors.is_empty() => Ok(record),
            _ => Err(self.errors),
        }
    }

    fn get(&self, name: &str) -> Option<&'a Value> {
        // null means "not supplied"
        self.object.get(name).filter(|v| !v.is_null())
    }

    fn missing(&mut self, name: &str) {
        self.errors.push(name, ViolationCode::Missing, "field required");
    }

    fn wrong_type(&mut self, name: &str, expected: &str) {
        self.errors.push(name, ViolationCode::Type, format!("expected {expected}"));
    }

    pub fn optional_text(&mut self, name: &str) -> Option<String> {
        match self.get(name)? {
            Value::String(s) => Some(s.clone()),
            _ => {
                self.wrong_type(name, "a string");
                None
            }
        }
    }

    pub fn required_text(&mut self, name: &str) -> Option<String> {
        if self.get(name).is_none() {
            self.missing(name);
            return None;
        }
        self.optional_text(name)
    }

    pub fn required_non_blank(&mut self, name: &str) -> Option<String> {
        let text = self.required_text(name)?;

        if text.trim().is_empty() {
            self.errors.push(name, ViolationCode::Empty, "must not be empty");
            return None;
        }
        Some(text)
    }

    pub fn optional_choice<C: Choice>(&mut self, name: &str) -> Option<C> {
        let raw = self.optional_text(name)?;

        match C::parse(&raw) {
            Some(choice) => Some(choice),
            None => {
                self.errors.push(
                    name,
                    ViolationCode::Enum,
                    format!("expected one of: {}", C::expected()),
                );
                None
            }
        }
    }

    pub fn required_choice<C: Choice>(&mut self, name: &str) -> Option<C> {
        if self.get(name).is_none() {
            self.missing(name);
            return None;
        }
        self.optional_choice(name)
    }

    pub fn required_int(&mut self, name: &str, bounds: RangeInclusive<i64>) -> Option<i64> {
        let Some(value) = self.get(name) else {
            self.missing(name);
            return None;
        };

        let Some(number) = value.as_i64() else {
            self.wrong_type(name, "an integer");
            return None;
        };

        if !bounds.contains(&number) {
            self.errors.push(
                name,
                ViolationCode::Range,
                format!("must be between {} and {}", bounds.start(), bounds.end()),
            );
            return None;
        }
        Some(number)
    }

    pub fn required_positive_number(&mut self, name: &str) -> Option<f64> {
        let Some(value) = self.get(name) else {
            self.missing(name);
            return None;
        };

        let Some(number) = value.as_f64() else {
            self.wrong_type(name, "a number");
            return None;
        };

        if !(number.is_finite() && number > 0.0) {
            self.errors.push(name, ViolationCode::Range, "must be greater than 0");
            return None;
        }
        Some(number)
    }

    pub fn optional_bool(&mut self, name: &str) -> Option<bool> {
        match self.get(name)? {
            Value::Bool(b) => Some(*b),
            _ => {
                self.wrong_type(name, "a boolean");
                None
            }
        }
    }

    pub fn bool_or(&mut self, name: &str, default: bool) -> bool {
        if self.get(name).is_none() {
            return default;
        }
        // A rejected value is recorded; the default only keeps the builder going.
        self.optional_bool(name).unwrap_or(default)
    }

    /// Reads an array of strings; absent means empty.
    pub fn text_list(&mut self, name: &str) -> Vec<String> {
        self.indexed_text_list(name)
            .into_iter()
            .map(|(_, text)| text)
            .collect()
    }

    /// String entries paired with their position in the input array, so
    /// follow-up checks report the index the caller sent.
    fn indexed_text_list(&mut self, name: &str) -> Vec<(usize, String)> {
        let Some(value) = self.get(name) else {
            return Vec::new();
        };

        let Value::Array(items) = value else {
            self.wrong_type(name, "an array of strings");
            return Vec::new();
        };

        let mut texts = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            match item {
                Value::String(s) => texts.push((index, s.clone())),
                _ => self.wrong_type(&format!("{name}[{index}]"), "a string"),
            }
        }
        texts
    }

    pub fn url_list(&mut self, name: &str) -> Vec<String> {
        let mut urls = Vec::new();

        for (index, url) in self.indexed_text_list(name) {
            if is_web_url(&url) {
                urls.push(url);
            } else {
                self.invalid_url(&format!("{name}[{index}]"));
            }
        }
        urls
    }

    pub fn optional_url(&mut self, name: &str) -> Option<String> {
        let url = self.optional_text(name)?;

        if !is_web_url(&url) {
            self.invalid_url(name);
            return None;
        }
        Some(url)
    }

    fn invalid_url(&mut self, name: &str) {
        self.errors.push(name, ViolationCode::Url, "expected an http(s) URL or a path");
    }

    pub fn optional_email(&mut self, name: &str) -> Option<String> {
        let email = self.optional_text(name)?;

        if !is_email(&email) {
            self.errors.push(name, ViolationCode::Email, "value is not a valid email address");
            return None;
        }
        Some(email)
    }

    pub fn required_email(&mut self, name: &str) -> Option<String> {
        if self.get(name).is_none() {
            self.missing(name);
            return None;
        }
        self.optional_email(name)
    }
}

fn is_email(value: &str) -> bool {
    value.len() <= 254 && EMAIL.is_match(value)
}

/// Accepts absolute http(s) URLs and references relative to the site, such as
/// `/static/luna.jpg`. Other schemes (`file:`, `javascript:`, `ftp:`) are refused.
fn is_web_url(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() {
        return false;
    }

    url::Url::parse("http://localhost/")
        .and_then(|base| base.join(value))
        .map(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn email_grammar() {
        for ok in ["ada@example.org", "first.last+tag@mail.example.co.uk", "x_y@sub-domain.io"] {
            assert!(is_email(ok), "{ok}");
        }
        for bad in ["not-an-email", "@example.org", "ada@", "ada@example", "a..b@example.org", "ada @example.org"] {
            assert!(!is_email(bad), "{bad}");
        }
    }

    #[test]
    fn urls_accept_web_urls_and_site_paths() {
        assert!(is_web_url("https://images.example.org/luna.jpg?w=1200"));
        assert!(is_web_url("/static/luna.jpg"));
        assert!(is_web_url("photos/luna.jpg"));
        assert!(!is_web_url("ftp://example.org/luna.jpg"));
        assert!(!is_web_url("javascript:alert(1)"));
        assert!(!is_web_url("file:///tmp/luna.jpg"));
        assert!(!is_web_url("   "));
    }

    #[test]
    fn null_counts_as_absent() {
        let input = json!({ "breed": null, "photos": null });
        let mut fields = Fields::from_value(&input).unwrap();

        assert_eq!(fields.optional_text("breed"), None);
        assert!(fields.text_list("photos").is_empty());
        assert_eq!(fields.required_text("name"), None);

        let errors = fields.finish(Some(())).unwrap_err();
        assert_eq!(errors.violations().len(), 1);
        assert_eq!(errors.for_field("name").unwrap().code, ViolationCode::Missing);
    }

    #[test]
    fn integers_are_not_coerced() {
        let input = json!({ "a": "3", "b": 3.5, "c": 3 });
        let mut fields = Fields::from_value(&input).unwrap();

        assert_eq!(fields.required_int("a", 0..=40), None);
        assert_eq!(fields.required_int("b", 0..=40), None);
        assert_eq!(fields.required_int("c", 0..=40), Some(3));

        let errors = fields.finish(Some(())).unwrap_err();
        assert_eq!(errors.for_field("a").unwrap().code, ViolationCode::Type);
        assert_eq!(errors.for_field("b").unwrap().code, ViolationCode::Type);
    }

    #[test]
    fn list_entries_are_reported_by_index() {
        let input = json!({ "photos": ["https://example.org/a.jpg", 7, "javascript:void(0)"] });
        let mut fields = Fields::from_value(&input).unwrap();

        assert_eq!(fields.url_list("photos"), ["https://example.org/a.jpg"]);

        let errors = fields.finish(Some(())).unwrap_err();
        assert_eq!(errors.for_field("photos[1]").unwrap().code, ViolationCode::Type);
        assert_eq!(errors.for_field("photos[2]").unwrap().code, ViolationCode::Url);
        assert_eq!(errors.violations().len(), 2);
    }

    #[test]
    fn url_errors_keep_input_index_after_skipped_entries() {
        let input = json!({ "photos": [7, "ftp://example.org/b.jpg"] });
        let mut fields = Fields::from_value(&input).unwrap();

        assert!(fields.url_list("photos").is_empty());

        let errors = fields.finish(Some(())).unwrap_err();
        let reported: Vec<_> = errors
            .violations()
            .iter()
            .map(|v| (v.field.as_str(), v.code))
            .collect();
        assert_eq!(
            reported,
            [("photos[0]", ViolationCode::Type), ("photos[1]", ViolationCode::Url)]
        );
    }

    #[test]
    fn non_object_input_is_rejected() {
        let errors = Fields::from_value(&json!(["a"])).err().unwrap();

        assert_eq!(errors.for_field("body").unwrap().code, ViolationCode::Body);
    }
}
