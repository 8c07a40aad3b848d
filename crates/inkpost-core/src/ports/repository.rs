use async_trait::async_trait;

use crate::domain::{BlogPost, NewPost, PostFields};
use crate::error::RepoError;

/// Generic repository trait for lookups and removal by primary key.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Delete an entity by its ID. Fails with `NotFound` if nothing was removed.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<BlogPost, i32> {
    /// Every post, ordered by title ascending.
    async fn list_all(&self) -> Result<Vec<BlogPost>, RepoError>;

    /// Store a new post and return it with its assigned id.
    async fn insert(&self, post: NewPost) -> Result<BlogPost, RepoError>;

    /// Replace the editable fields of an existing post.
    async fn update(&self, id: i32, fields: PostFields) -> Result<BlogPost, RepoError>;

    /// Like `find_by_id`, but a missing post is an error.
    async fn get(&self, id: i32) -> Result<BlogPost, RepoError> {
        self.find_by_id(id).await?.ok_or(RepoError::NotFound)
    }
}
