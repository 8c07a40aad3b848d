//! Domain entities - the core business objects.

mod post;

pub use post::{BlogPost, DATE_FORMAT, NewPost, PostFields, format_post_date, today_stamp};
