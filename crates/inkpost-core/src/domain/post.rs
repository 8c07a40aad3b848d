use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// strftime pattern for the publication date, e.g. `March 05,2024`.
pub const DATE_FORMAT: &str = "%B %d,%Y";

/// A published blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: i32,
    pub title: String,
    pub subtitle: String,
    /// Set once at creation, never touched by edits.
    pub date: String,
    /// Rich-text HTML.
    pub body: String,
    pub author: String,
    pub img_url: String,
}

/// The user-editable part of a post, as produced by form validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostFields {
    pub title: String,
    pub subtitle: String,
    pub body: String,
    pub author: String,
    pub img_url: String,
}

/// A post that has not been stored yet and so has no id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub subtitle: String,
    pub date: String,
    pub body: String,
    pub author: String,
    pub img_url: String,
}

impl NewPost {
    /// Build a new post from validated fields and its publication date.
    pub fn new(fields: PostFields, date: String) -> Self {
        Self {
            title: fields.title,
            subtitle: fields.subtitle,
            date,
            body: fields.body,
            author: fields.author,
            img_url: fields.img_url,
        }
    }
}

impl BlogPost {
    /// Overwrite every editable field, keeping `id` and `date`.
    pub fn apply(&mut self, fields: PostFields) {
        self.title = fields.title;
        self.subtitle = fields.subtitle;
        self.body = fields.body;
        self.author = fields.author;
        self.img_url = fields.img_url;
    }
}

pub fn format_post_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Today's local date in post format.
pub fn today_stamp() -> String {
    format_post_date(Local::now().date_naive())
}
