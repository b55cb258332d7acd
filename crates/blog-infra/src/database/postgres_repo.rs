//! PostgreSQL repository implementations.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, DbErr, Set, Unchanged};

use blog_core::domain::{NewPost, Post};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};
use super::postgres_base::PostgresBaseRepository;

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

fn write_error(e: DbErr) -> RepoError {
    match e {
        DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => RepoError::NotFound,
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        other => {
            let err_str = other.to_string();
            if err_str.contains("duplicate") || err_str.contains("unique") {
                RepoError::Constraint("Entity already exists".to_string())
            } else {
                RepoError::Query(err_str)
            }
        }
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create(&self, post: NewPost) -> Result<Post, RepoError> {
        let now = Utc::now();
        let active_model = post::ActiveModel {
            id: NotSet,
            title: Set(post.title),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        let model = active_model.insert(&self.db).await.map_err(write_error)?;
        tracing::debug!(post_id = model.id, "Inserted post");

        Ok(model.into())
    }

    async fn save(&self, post: Post) -> Result<Post, RepoError> {
        let active_model = post::ActiveModel {
            id: Unchanged(post.id),
            title: Set(post.title),
            created_at: NotSet,
            updated_at: Set(Utc::now().into()),
        };

        let model = active_model.update(&self.db).await.map_err(write_error)?;
        tracing::debug!(post_id = model.id, "Updated post");

        Ok(model.into())
    }
}
