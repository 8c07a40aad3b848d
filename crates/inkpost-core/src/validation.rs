//! Post form validation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{BlogPost, PostFields};

pub const TITLE_MIN_CHARS: usize = 8;
/// Width of the `VARCHAR(250)` columns behind every single-line field.
pub const FIELD_MAX_CHARS: usize = 250;

pub const REQUIRED: &str = "This field is required.";
pub const INVALID_URL: &str = "Invalid URL.";
pub const DUPLICATE_TITLE: &str = "A post with this title already exists.";

/// Raw values submitted through the post form. A field absent from the
/// request is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub img_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

/// Field name to error messages, in field-name order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<&'static str, Vec<String>>);

impl FieldErrors {
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_default().push(message.into());
    }

    pub fn get(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The error reported when the store rejects a title that is already taken.
    pub fn duplicate_title() -> Self {
        let mut errors = Self::default();
        errors.add("title", DUPLICATE_TITLE);
        errors
    }
}

impl PostForm {
    /// Check every rule and return the cleaned fields, or all failures at once.
    pub fn validate(&self) -> Result<PostFields, FieldErrors> {
        let mut errors = FieldErrors::default();

        let title = required(&mut errors, "title", &self.title);
        if let Some(title) = title {
            if title.chars().count() < TITLE_MIN_CHARS {
                errors.add(
                    "title",
                    format!("Field must be at least {TITLE_MIN_CHARS} characters long."),
                );
            }
        }

        let subtitle = required(&mut errors, "subtitle", &self.subtitle);
        let author = required(&mut errors, "author", &self.author);

        let img_url = required(&mut errors, "img_url", &self.img_url);
        if let Some(img_url) = img_url {
            if !is_valid_url(img_url) {
                errors.add("img_url", INVALID_URL);
            }
        }

        // The body may be blank, but the field itself has to be submitted.
        let body = self.body.as_deref();
        if body.is_none() {
            errors.add("body", REQUIRED);
        }

        match (title, subtitle, author, img_url, body) {
            (Some(title), Some(subtitle), Some(author), Some(img_url), Some(body))
                if errors.is_empty() =>
            {
                Ok(PostFields {
                    title: title.to_string(),
                    subtitle: subtitle.to_string(),
                    body: body.to_string(),
                    author: author.to_string(),
                    img_url: img_url.to_string(),
                })
            }
            _ => Err(errors),
        }
    }
}

/// Pre-fill the edit form with a stored post.
impl From<&BlogPost> for PostForm {
    fn from(post: &BlogPost) -> Self {
        Self {
            title: Some(post.title.clone()),
            subtitle: Some(post.subtitle.clone()),
            author: Some(post.author.clone()),
            img_url: Some(post.img_url.clone()),
            body: Some(post.body.clone()),
        }
    }
}

/// A present, non-blank value that fits its column.
fn required<'a>(
    errors: &mut FieldErrors,
    field: &'static str,
    value: &'a Option<String>,
) -> Option<&'a str> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => {
            if v.chars().count() > FIELD_MAX_CHARS {
                errors.add(
                    field,
                    format!("Field cannot be longer than {FIELD_MAX_CHARS} characters."),
                );
            }
            Some(v)
        }
        _ => {
            errors.add(field, REQUIRED);
            None
        }
    }
}

/// Scheme and host are the minimum for a usable image link.
fn is_valid_url(value: &str) -> bool {
    Url::parse(value)
        .ok()
        .and_then(|url| url.host_str().map(|host| !host.is_empty()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> PostForm {
        PostForm {
            title: Some("Integration Test".to_string()),
            subtitle: Some("Sub".to_string()),
            author: Some("Ada".to_string()),
            img_url: Some("https://example.com/a.png".to_string()),
            body: Some("<p>hi</p>".to_string()),
        }
    }

    #[test]
    fn test_valid_form() {
        let fields = valid_form().validate().unwrap();
        assert_eq!(fields.title, "Integration Test");
        assert_eq!(fields.subtitle, "Sub");
        assert_eq!(fields.author, "Ada");
        assert_eq!(fields.img_url, "https://example.com/a.png");
        assert_eq!(fields.body, "<p>hi</p>");
    }

    #[test]
    fn test_short_title() {
        let form = PostForm {
            title: Some("Short".to_string()),
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.get("title"),
            ["Field must be at least 8 characters long."]
        );
        assert!(errors.get("img_url").is_empty());
    }

    #[test]
    fn test_title_length_counts_characters() {
        let form = PostForm {
            title: Some("éèêëēėęě".to_string()),
            ..valid_form()
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_missing_required_fields() {
        let form = PostForm {
            body: Some(String::new()),
            ..PostForm::default()
        };
        let errors = form.validate().unwrap_err();
        for field in ["title", "subtitle", "author", "img_url"] {
            assert_eq!(errors.get(field), [REQUIRED], "field {field}");
        }
        assert!(errors.get("body").is_empty());
    }

    #[test]
    fn test_fields_longer_than_column() {
        let form = PostForm {
            title: Some("t".repeat(FIELD_MAX_CHARS + 1)),
            subtitle: Some("s".repeat(FIELD_MAX_CHARS + 1)),
            author: Some("a".repeat(FIELD_MAX_CHARS + 1)),
            img_url: Some(format!("https://example.com/{}", "p".repeat(FIELD_MAX_CHARS))),
            body: Some("b".repeat(FIELD_MAX_CHARS * 4)),
        };
        let errors = form.validate().unwrap_err();
        for field in ["title", "subtitle", "author", "img_url"] {
            assert_eq!(
                errors.get(field),
                ["Field cannot be longer than 250 characters."],
                "field {field}"
            );
        }
        assert!(errors.get("body").is_empty());
    }

    #[test]
    fn test_column_width_counts_characters() {
        let form = PostForm {
            author: Some("é".repeat(FIELD_MAX_CHARS)),
            ..valid_form()
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_whitespace_only_is_missing() {
        let form = PostForm {
            subtitle: Some("   ".to_string()),
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("subtitle"), [REQUIRED]);
    }

    #[test]
    fn test_invalid_urls() {
        for bad in ["not a url", "example.com/a.png", "mailto:ada@example.com", "https://"] {
            let form = PostForm {
                img_url: Some(bad.to_string()),
                ..valid_form()
            };
            let errors = form.validate().unwrap_err();
            assert_eq!(errors.get("img_url"), [INVALID_URL], "url {bad}");
        }
    }

    #[test]
    fn test_empty_body_is_allowed_but_missing_body_is_not() {
        let form = PostForm {
            body: Some(String::new()),
            ..valid_form()
        };
        assert_eq!(form.validate().unwrap().body, "");

        let form = PostForm {
            body: None,
            ..valid_form()
        };
        assert_eq!(form.validate().unwrap_err().get("body"), [REQUIRED]);
    }

    #[test]
    fn test_prefill_from_post() {
        let post = BlogPost {
            id: 3,
            title: "Stored title".to_string(),
            subtitle: "Stored sub".to_string(),
            date: "June 01,2024".to_string(),
            body: "<p>body</p>".to_string(),
            author: "Grace".to_string(),
            img_url: "https://example.com/g.png".to_string(),
        };
        let form = PostForm::from(&post);
        assert_eq!(form.title.as_deref(), Some("Stored title"));
        assert_eq!(form.body.as_deref(), Some("<p>body</p>"));
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_duplicate_title_error() {
        let errors = FieldErrors::duplicate_title();
        assert_eq!(errors.get("title"), [DUPLICATE_TITLE]);
        for field in ["subtitle", "author", "img_url", "body"] {
            assert!(errors.get(field).is_empty(), "field {field}");
        }
    }
}
