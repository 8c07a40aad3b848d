//! # Inkpost Infrastructure
//!
//! Concrete implementations of the ports defined in `inkpost-core`.
//! Posts are stored through SeaORM, on SQLite by default or PostgreSQL when
//! `DATABASE_URL` points at one.

pub mod database;

pub use database::{DatabaseConfig, SeaOrmPostRepository, connect};
