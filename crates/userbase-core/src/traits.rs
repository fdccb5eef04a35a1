//! Storage-agnostic persistence contract.

use crate::{Page, PageRequest, UserbaseResult};
use async_trait::async_trait;
use std::fmt::Display;

/// A record with identity, persisted in storage.
pub trait Entity: Clone + Send + Sync + 'static {
    /// The store-generated identifier.
    type Id: Copy + Display + Send + Sync + 'static;

    /// The not-yet-persisted shape handed to [`DatabaseAdapter::create`].
    type Draft: Send + Sync + 'static;

    /// Lowercase resource name used in messages, e.g. `"user"`.
    const NAME: &'static str;

    /// Returns the entity's identifier.
    fn id(&self) -> Self::Id;
}

/// Create/read/update/delete over one entity type.
///
/// Callers depend on this trait only; PostgreSQL and in-memory bindings both
/// implement it with the same semantics:
///
/// - `create` and `update` are durable before they return, so a following
///   `get_by_id` from any caller observes them.
/// - `get_by_id` reports absence as `Ok(None)`, never as an error.
/// - `get_all` past the last page yields an empty page.
/// - A uniqueness violation fails with [`crate::UserbaseError::Conflict`].
#[async_trait]
pub trait DatabaseAdapter<E: Entity>: Send + Sync {
    /// Persists a new entity and returns it with its generated id.
    async fn create(&self, draft: E::Draft) -> UserbaseResult<E>;

    /// Returns one page of entities ordered by id.
    async fn get_all(&self, page: PageRequest) -> UserbaseResult<Page<E>>;

    /// Finds an entity by id.
    async fn get_by_id(&self, id: E::Id) -> UserbaseResult<Option<E>>;

    /// Persists mutations already applied to a previously fetched entity.
    ///
    /// Fails with `NotFound` if the row no longer exists.
    async fn update(&self, entity: &E) -> UserbaseResult<E>;

    /// Removes the entity permanently.
    ///
    /// Fails with `NotFound` if the row no longer exists.
    async fn delete(&self, entity: &E) -> UserbaseResult<()>;

    /// Checks that the backing store answers.
    async fn ping(&self) -> UserbaseResult<()> {
        Ok(())
    }
}
