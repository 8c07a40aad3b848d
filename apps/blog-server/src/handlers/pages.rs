//! Static informational pages.

use actix_web::HttpResponse;
use tera::Context;

use crate::error::{AppError, AppResult};
use crate::views;

/// GET /about
pub async fn about() -> AppResult<HttpResponse> {
    views::page("about.html", &Context::new())
}

/// GET /contact
pub async fn contact() -> AppResult<HttpResponse> {
    views::page("contact.html", &Context::new())
}

/// Fallback for every unrouted path.
pub async fn not_found() -> AppResult<HttpResponse> {
    Err(AppError::NotFound("Page not found".to_string()))
}
