//! # Inkpost Core
//!
//! The domain layer of the Inkpost blog.
//! This crate contains the post model, form validation and the storage port,
//! with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod validation;

pub use error::RepoError;
