use std::marker::PhantomData;

use async_trait::async_trait;
use sea_orm::{
    DbConn, EntityTrait, Iterable, PaginatorTrait, PrimaryKeyToColumn, PrimaryKeyTrait,
    QueryOrder,
};

use blog_core::error::RepoError;
use blog_core::pagination::{Page, PageRequest};
use blog_core::ports::BaseRepository;

/// Generic PostgreSQL repository implementation.
pub struct PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub(crate) db: DbConn,
    _entity: PhantomData<E>,
}

impl<E> PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub fn new(db: DbConn) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<E, T, ID> BaseRepository<T, ID> for PostgresBaseRepository<E>
where
    E: EntityTrait,
    E::Model: Sync + Send + 'static,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = ID>,
    ID: Send + Sync + Into<sea_orm::Value> + Clone + Copy + 'static,
    T: From<E::Model> + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError> {
        let result = E::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }

    async fn paginate(&self, request: PageRequest) -> Result<Page<T>, RepoError> {
        let request = request.normalize();

        let mut select = E::find();
        for key in E::PrimaryKey::iter() {
            select = select.order_by_asc(key.into_column());
        }

        let paginator = select.paginate(&self.db, request.per_page);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        // Offsets past the last row (or past u64) never reach the database.
        let in_range = request
            .per_page
            .checked_mul(request.index())
            .is_some_and(|offset| offset < total);
        if !in_range {
            return Ok(Page::new(Vec::new(), total, request));
        }

        let models = paginator
            .fetch_page(request.index())
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        tracing::debug!(
            page = request.page,
            per_page = request.per_page,
            total,
            "Fetched page"
        );

        Ok(Page::new(
            models.into_iter().map(Into::into).collect(),
            total,
            request,
        ))
    }

    async fn delete(&self, id: ID) -> Result<(), RepoError> {
        let result = E::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}
