//! Error handling - every failure ends in a rendered error page.

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError};
use inkpost_core::error::RepoError;
use tera::Context;
use thiserror::Error;

use crate::views;

/// Application-level error type that converts to an HTML error page.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    /// Fallback for a uniqueness violation no handler turned into a form error.
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    fn title(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "Not Found",
            AppError::Conflict(_) => "Conflict",
            AppError::Internal(_) => "Internal Server Error",
        }
    }

    /// What the visitor gets to read. Internal details stay in the logs.
    fn detail(&self) -> &str {
        match self {
            AppError::NotFound(detail) | AppError::Conflict(detail) => detail,
            AppError::Internal(_) => "Something went wrong on our side. Please try again later.",
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if let AppError::Internal(detail) = self {
            tracing::error!("Internal error: {}", detail);
        }

        let mut context = Context::new();
        context.insert("status", &status.as_u16());
        context.insert("title", self.title());
        context.insert("detail", self.detail());

        match views::render("error.html", &context) {
            Ok(html) => HttpResponse::build(status)
                .content_type(ContentType::html())
                .body(html),
            Err(e) => {
                tracing::error!(error = ?e, "Failed to render error page");
                HttpResponse::build(status)
                    .content_type(ContentType::plaintext())
                    .body(format!("{} {}", status.as_u16(), self.title()))
            }
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::NotFound("Post not found".to_string()),
            RepoError::UniqueViolation(msg) => AppError::Conflict(msg),
            RepoError::Connection(msg) => {
                tracing::error!("Database connection error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
            RepoError::Query(msg) => {
                tracing::error!("Database query error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
        }
    }
}

impl From<tera::Error> for AppError {
    fn from(err: tera::Error) -> Self {
        AppError::Internal(format!("Template rendering failed: {err:?}"))
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
