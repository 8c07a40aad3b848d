//! Application state - shared across all handlers.

use std::sync::Arc;

use inkpost_core::ports::PostRepository;
use inkpost_infra::{DatabaseConfig, SeaOrmPostRepository, connect};
use migration::{Migrator, MigratorTrait};
use sea_orm::DbConn;

/// Shared application state. The post store is the only shared resource.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    /// Connect to the database, bring the schema up to date and build the store.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, sea_orm::DbErr> {
        let db = connect(config).await?;
        Migrator::up(&db, None).await?;
        tracing::info!("Database schema is up to date");

        Ok(Self::from_connection(db))
    }

    pub fn from_connection(db: DbConn) -> Self {
        Self {
            posts: Arc::new(SeaOrmPostRepository::new(db)),
        }
    }
}
