use async_trait::async_trait;

use crate::domain::{NewPost, Post};
use crate::error::RepoError;
use crate::pagination::{Page, PageRequest};

/// Generic repository trait defining the read/delete side of CRUD.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Fetch one page ordered by primary key ascending.
    async fn paginate(&self, request: PageRequest) -> Result<Page<T>, RepoError>;

    /// Delete an entity by its ID. Returns `RepoError::NotFound` if nothing was removed.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, i64> {
    /// Insert a new post. The store assigns `id`, `created_at` and `updated_at`.
    async fn create(&self, post: NewPost) -> Result<Post, RepoError>;

    /// Persist the title of an existing post and refresh `updated_at`.
    async fn save(&self, post: Post) -> Result<Post, RepoError>;
}
