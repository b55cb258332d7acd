#[cfg(test)]
mod tests {
    use crate::database::entity::post;
    use crate::database::postgres_repo::PostgresPostRepository;
    use blog_core::domain::{NewPost, Post};
    use blog_core::error::RepoError;
    use blog_core::ports::{BaseRepository, PostRepository};
    use blog_core::pagination::PageRequest;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Value};
    use std::collections::BTreeMap;

    fn model(id: i64, title: &str) -> post::Model {
        let now = chrono::Utc::now();
        post::Model {
            id,
            title: title.to_owned(),
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    fn count_row(total: i64) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([("num_items", Value::from(total))])
    }

    #[tokio::test]
    async fn test_find_post_by_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(1, "Test Post")]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result: Option<Post> = repo.find_by_id(1).await.unwrap();

        let post = result.unwrap();
        assert_eq!(post.title, "Test Post");
        assert_eq!(post.id, 1);
    }

    #[tokio::test]
    async fn test_find_missing_post() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<post::Model>::new()])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result: Option<Post> = repo.find_by_id(2).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_create_returns_stored_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(7, "Post de prueba")]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let post = repo
            .create(NewPost {
                title: "Post de prueba".to_owned(),
            })
            .await
            .unwrap();

        assert_eq!(post.id, 7);
        assert_eq!(post.title, "Post de prueba");
    }

    #[tokio::test]
    async fn test_delete_missing_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result = BaseRepository::<Post, i64>::delete(&repo, 3).await;
        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_existing_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result = BaseRepository::<Post, i64>::delete(&repo, 3).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_save_returns_updated_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(3, "Nuevo")]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);
        let mut post: Post = model(3, "Viejo").into();
        post.title = "Nuevo".to_owned();

        let saved = repo.save(post).await.unwrap();

        assert_eq!(saved.id, 3);
        assert_eq!(saved.title, "Nuevo");
    }

    #[tokio::test]
    async fn test_save_missing_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<post::Model>::new()])
            .into_connection();

        let repo = PostgresPostRepository::new(db);
        let ghost: Post = model(42, "ghost").into();

        let result = repo.save(ghost).await;
        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_paginate_orders_by_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![count_row(5)]])
            .append_query_results(vec![vec![model(3, "Post 3"), model(4, "Post 4")]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let page = BaseRepository::<Post, i64>::paginate(&repo, PageRequest::new(2, 2))
            .await
            .unwrap();

        assert_eq!(page.total, 5);
        assert_eq!(page.page, 2);
        let ids: Vec<i64> = page.items.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 4]);

        let log = format!("{:?}", repo.db.into_transaction_log());
        assert!(log.contains(r#"ORDER BY \"posts\".\"id\" ASC"#), "{log}");
        assert!(log.contains("LIMIT"), "{log}");
    }

    #[tokio::test]
    async fn test_paginate_past_the_end_skips_row_query() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![count_row(5)]])
            .append_query_results(vec![vec![count_row(5)]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        for request in [PageRequest::new(9, 2), PageRequest::new(u64::MAX, 15)] {
            let page = BaseRepository::<Post, i64>::paginate(&repo, request)
                .await
                .unwrap();

            assert!(page.items.is_empty());
            assert_eq!(page.total, 5);
        }

        assert_eq!(repo.db.into_transaction_log().len(), 2);
    }
}
