//! Database connection management and repositories.

mod base_repo;
mod connections;
pub mod entity;
mod post_repo;

pub use base_repo::SeaOrmBaseRepository;
pub use connections::{DatabaseConfig, connect};
pub use post_repo::SeaOrmPostRepository;
