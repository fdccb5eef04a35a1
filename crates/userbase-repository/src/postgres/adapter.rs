//! PostgreSQL adapter implementation.

use super::entity::Statements;
use crate::{DatabasePool, PgEntity};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;
use userbase_core::{DatabaseAdapter, Page, PageRequest, UserbaseError, UserbaseResult};

/// Adapter persisting any [`PgEntity`] through the shared pool.
///
/// Every mutation runs in its own transaction and is committed before the
/// call returns; reads go straight to the pool, with no caching.
#[derive(Clone)]
pub struct PgAdapter {
    pool: Arc<DatabasePool>,
}

impl PgAdapter {
    /// Creates a new PostgreSQL adapter.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

/// Count and page rows must come from one snapshot.
const SNAPSHOT_READ: &str = "SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY";

fn to_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[async_trait]
impl<E: PgEntity> DatabaseAdapter<E> for PgAdapter {
    async fn create(&self, draft: E::Draft) -> UserbaseResult<E> {
        debug!("Creating {} row", E::TABLE);

        let sql = Statements::for_entity::<E>();
        let mut tx = self.pool.inner().begin().await?;
        let created = E::bind_draft(&draft, sqlx::query_as::<_, E>(&sql.insert))
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;

        debug!("Created {} {}", E::NAME, created.id());
        Ok(created)
    }

    async fn get_all(&self, page: PageRequest) -> UserbaseResult<Page<E>> {
        debug!(
            "Listing {}, page: {}, per_page: {}",
            E::TABLE,
            page.page,
            page.per_page
        );

        let sql = Statements::for_entity::<E>();
        let mut tx = self.pool.inner().begin().await?;
        sqlx::query(SNAPSHOT_READ).execute(&mut *tx).await?;

        let total: i64 = sqlx::query_scalar(&sql.count)
            .fetch_one(&mut *tx)
            .await?;

        let items = sqlx::query_as::<_, E>(&sql.select_page)
            .bind(to_i64(page.limit()))
            .bind(to_i64(page.offset()))
            .fetch_all(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(Page::new(items, page, u64::try_from(total).unwrap_or(0)))
    }

    async fn get_by_id(&self, id: i64) -> UserbaseResult<Option<E>> {
        debug!("Finding {} by id: {}", E::NAME, id);

        let sql = Statements::for_entity::<E>();
        let row = sqlx::query_as::<_, E>(&sql.select_by_id)
            .bind(id)
            .fetch_optional(self.pool.inner())
            .await?;

        Ok(row)
    }

    async fn update(&self, entity: &E) -> UserbaseResult<E> {
        debug!("Updating {} {}", E::NAME, entity.id());

        let sql = Statements::for_entity::<E>();
        let mut tx = self.pool.inner().begin().await?;
        let updated = entity
            .bind_values(sqlx::query_as::<_, E>(&sql.update))
            .bind(entity.id())
            .fetch_optional(&mut *tx)
            .await?;

        match updated {
            Some(row) => {
                tx.commit().await?;
                Ok(row)
            }
            None => {
                tx.rollback().await?;
                Err(UserbaseError::not_found(E::NAME, entity.id()))
            }
        }
    }

    async fn delete(&self, entity: &E) -> UserbaseResult<()> {
        debug!("Deleting {} {}", E::NAME, entity.id());

        let sql = Statements::for_entity::<E>();
        let mut tx = self.pool.inner().begin().await?;
        let result = sqlx::query(&sql.delete)
            .bind(entity.id())
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(UserbaseError::not_found(E::NAME, entity.id()));
        }

        tx.commit().await?;
        Ok(())
    }

    async fn ping(&self) -> UserbaseResult<()> {
        self.pool.health_check().await
    }
}

impl std::fmt::Debug for PgAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgAdapter")
            .field("pool", &self.pool)
            .finish()
    }
}
