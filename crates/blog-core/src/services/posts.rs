//! The post resource: list, create, show, update and delete.

use std::sync::Arc;

use crate::domain::{Post, PostInput};
use crate::error::{DomainError, RepoError};
use crate::pagination::{DEFAULT_PER_PAGE, Page, PageRequest};
use crate::ports::PostRepository;

const ENTITY: &str = "Post";

/// Post use cases over a [`PostRepository`].
///
/// Every lookup by id happens before any mutation, so a missing post is
/// reported as [`DomainError::NotFound`] and nothing is written.
#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository>,
    per_page: u64,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self {
            repo,
            per_page: DEFAULT_PER_PAGE,
        }
    }

    pub fn with_per_page(mut self, per_page: u64) -> Self {
        self.per_page = per_page;
        self
    }

    /// List posts in primary key order. `page` is 1-based.
    pub async fn list(&self, page: u64) -> Result<Page<Post>, DomainError> {
        let request = PageRequest::new(page, self.per_page);
        Ok(self.repo.paginate(request).await?)
    }

    pub async fn create(&self, input: PostInput) -> Result<Post, DomainError> {
        let new_post = input.into_new_post().map_err(DomainError::Validation)?;
        let post = self.repo.create(new_post).await?;

        tracing::info!(post_id = post.id, "Post created");
        Ok(post)
    }

    pub async fn show(&self, id: i64) -> Result<Post, DomainError> {
        self.find(id).await
    }

    /// Replace the title of an existing post.
    ///
    /// Applies the same title rules as [`PostService::create`].
    pub async fn update(&self, id: i64, input: PostInput) -> Result<Post, DomainError> {
        let mut post = self.find(id).await?;
        post.title = input.validated_title().map_err(DomainError::Validation)?;

        let post = self.repo.save(post).await.map_err(|e| not_found_or(e, id))?;

        tracing::info!(post_id = post.id, "Post updated");
        Ok(post)
    }

    pub async fn delete(&self, id: i64) -> Result<(), DomainError> {
        self.find(id).await?;
        self.repo.delete(id).await.map_err(|e| not_found_or(e, id))?;

        tracing::info!(post_id = id, "Post deleted");
        Ok(())
    }

    async fn find(&self, id: i64) -> Result<Post, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: ENTITY,
                id,
            })
    }
}

/// A row can vanish between lookup and write under concurrent requests.
fn not_found_or(err: RepoError, id: i64) -> DomainError {
    match err {
        RepoError::NotFound => DomainError::NotFound {
            entity_type: ENTITY,
            id,
        },
        other => other.into(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::{Duration, Utc};

    use super::*;
    use crate::domain::NewPost;
    use crate::ports::BaseRepository;

    #[derive(Default)]
    struct StubRepo {
        rows: Mutex<BTreeMap<i64, Post>>,
    }

    #[async_trait]
    impl BaseRepository<Post, i64> for StubRepo {
        async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
            Ok(self.rows.lock().unwrap().get(&id).cloned())
        }

        async fn paginate(&self, request: PageRequest) -> Result<Page<Post>, RepoError> {
            let rows = self.rows.lock().unwrap();
            let items = rows
                .values()
                .skip(request.offset() as usize)
                .take(request.per_page as usize)
                .cloned()
                .collect();
            Ok(Page::new(items, rows.len() as u64, request))
        }

        async fn delete(&self, id: i64) -> Result<(), RepoError> {
            self.rows
                .lock()
                .unwrap()
                .remove(&id)
                .map(|_| ())
                .ok_or(RepoError::NotFound)
        }
    }

    #[async_trait]
    impl PostRepository for StubRepo {
        async fn create(&self, post: NewPost) -> Result<Post, RepoError> {
            let mut rows = self.rows.lock().unwrap();
            let id = rows.keys().next_back().copied().unwrap_or(0) + 1;
            let now = Utc::now() - Duration::seconds(5);
            let post = Post {
                id,
                title: post.title,
                created_at: now,
                updated_at: now,
            };
            rows.insert(id, post.clone());
            Ok(post)
        }

        async fn save(&self, mut post: Post) -> Result<Post, RepoError> {
            let mut rows = self.rows.lock().unwrap();
            if !rows.contains_key(&post.id) {
                return Err(RepoError::NotFound);
            }
            post.updated_at = Utc::now();
            rows.insert(post.id, post.clone());
            Ok(post)
        }
    }

    fn service() -> (PostService, Arc<StubRepo>) {
        let repo = Arc::new(StubRepo::default());
        (PostService::new(repo.clone()), repo)
    }

    fn titled(title: &str) -> PostInput {
        PostInput::new(Some(title.to_string()))
    }

    #[tokio::test]
    async fn create_persists_post() {
        let (service, repo) = service();

        let post = service.create(titled("Post de prueba")).await.unwrap();

        assert_eq!(post.title, "Post de prueba");
        let rows = repo.rows.lock().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[&post.id].title, "Post de prueba");
    }

    #[tokio::test]
    async fn create_rejects_empty_title_without_persisting() {
        let (service, repo) = service();

        let err = service.create(titled("")).await.unwrap_err();

        assert!(matches!(err, DomainError::Validation(ref e) if e.contains("title")));
        assert!(repo.rows.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn show_missing_post_is_not_found() {
        let (service, _) = service();

        let err = service.show(2).await.unwrap_err();

        assert!(matches!(err, DomainError::NotFound { id: 2, .. }));
    }

    #[tokio::test]
    async fn update_changes_title_and_timestamp() {
        let (service, repo) = service();
        let created = service.create(titled("Viejo")).await.unwrap();

        let updated = service.update(created.id, titled("Nuevo")).await.unwrap();

        assert_eq!(updated.title, "Nuevo");
        assert!(updated.updated_at > created.updated_at);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(repo.rows.lock().unwrap()[&created.id].title, "Nuevo");
    }

    #[tokio::test]
    async fn update_missing_post_reports_not_found_before_validation() {
        let (service, _) = service();

        let err = service.update(7, titled("")).await.unwrap_err();

        assert!(matches!(err, DomainError::NotFound { id: 7, .. }));
    }

    #[tokio::test]
    async fn update_rejects_empty_title() {
        let (service, repo) = service();
        let created = service.create(titled("Original")).await.unwrap();

        let err = service.update(created.id, titled("  ")).await.unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(repo.rows.lock().unwrap()[&created.id].title, "Original");
    }

    #[tokio::test]
    async fn delete_is_not_idempotent() {
        let (service, repo) = service();
        let created = service.create(titled("Borrar")).await.unwrap();

        service.delete(created.id).await.unwrap();
        assert!(repo.rows.lock().unwrap().is_empty());

        let err = service.delete(created.id).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn list_pages_in_id_order() {
        let (service, _) = service();
        let service = service.with_per_page(2);
        for i in 1..=5 {
            service.create(titled(&format!("Post {i}"))).await.unwrap();
        }

        let page = service.list(2).await.unwrap();

        assert_eq!(page.total, 5);
        assert_eq!(page.last_page(), 3);
        let ids: Vec<i64> = page.items.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 4]);
    }
}
