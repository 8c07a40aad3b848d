//! SeaORM post repository.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, EntityTrait, IntoActiveModel, QueryOrder, Set, TransactionTrait};

use inkpost_core::domain::{BlogPost, NewPost, PostFields};
use inkpost_core::error::RepoError;
use inkpost_core::ports::PostRepository;

use super::base_repo::{SeaOrmBaseRepository, map_db_err};
use super::entity::post::{self, Entity as PostEntity};

/// SeaORM post repository.
pub type SeaOrmPostRepository = SeaOrmBaseRepository<PostEntity>;

#[async_trait]
impl PostRepository for SeaOrmPostRepository {
    async fn list_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;
        let result = PostEntity::find()
            .order_by_asc(post::Column::Title)
            .all(&txn)
            .await
            .map_err(map_db_err)?;
        txn.commit().await.map_err(map_db_err)?;

        tracing::debug!(count = result.len(), "Listed posts");
        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, post: NewPost) -> Result<BlogPost, RepoError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;
        let active_model: post::ActiveModel = post.into();
        let model = active_model.insert(&txn).await.map_err(map_db_err)?;
        txn.commit().await.map_err(map_db_err)?;

        tracing::debug!(post_id = model.id, "Inserted post");
        Ok(model.into())
    }

    async fn update(&self, id: i32, fields: PostFields) -> Result<BlogPost, RepoError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;
        let existing = PostEntity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(map_db_err)?
            .ok_or(RepoError::NotFound)?;

        let mut active_model = existing.into_active_model();
        active_model.title = Set(fields.title);
        active_model.subtitle = Set(fields.subtitle);
        active_model.body = Set(fields.body);
        active_model.author = Set(fields.author);
        active_model.img_url = Set(fields.img_url);

        let model = active_model.update(&txn).await.map_err(map_db_err)?;
        txn.commit().await.map_err(map_db_err)?;

        tracing::debug!(post_id = model.id, "Updated post");
        Ok(model.into())
    }
}
