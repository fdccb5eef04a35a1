//! In-memory adapter.
//!
//! Holds rows in a `BTreeMap` keyed by a generated id and enforces the same
//! constraints as the SQL schema, so code written against
//! [`DatabaseAdapter`] behaves identically on either backend.

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::debug;
use userbase_core::{
    DatabaseAdapter, Entity, NewUser, Page, PageRequest, User, UserbaseError, UserbaseResult,
    EMAIL_MAX_LEN, USERNAME_MAX_LEN,
};

/// An entity the in-memory adapter can store.
pub trait InMemoryEntity: Entity<Id = i64> {
    /// Builds the stored entity from a draft and its assigned id.
    fn from_draft(draft: Self::Draft, id: i64) -> Self;

    /// Checks column limits and uniqueness against the other stored rows.
    fn check_constraints<'a, I>(&self, others: I) -> UserbaseResult<()>
    where
        I: Iterator<Item = &'a Self>,
        Self: 'a;
}

impl InMemoryEntity for User {
    fn from_draft(draft: NewUser, id: i64) -> Self {
        draft.into_user(id)
    }

    fn check_constraints<'a, I>(&self, mut others: I) -> UserbaseResult<()>
    where
        I: Iterator<Item = &'a Self>,
        Self: 'a,
    {
        if self.username.chars().count() > USERNAME_MAX_LEN {
            return Err(UserbaseError::validation(format!(
                "username longer than {USERNAME_MAX_LEN} characters"
            )));
        }
        if self.email.chars().count() > EMAIL_MAX_LEN {
            return Err(UserbaseError::validation(format!(
                "email longer than {EMAIL_MAX_LEN} characters"
            )));
        }
        if others.any(|other| other.id != self.id && other.email == self.email) {
            return Err(UserbaseError::conflict(format!(
                "email {} already exists",
                self.email
            )));
        }
        Ok(())
    }
}

struct Table<E> {
    rows: BTreeMap<i64, E>,
    last_id: i64,
}

/// Adapter keeping rows in process memory.
pub struct InMemoryAdapter<E> {
    table: RwLock<Table<E>>,
}

impl<E: InMemoryEntity> InMemoryAdapter<E> {
    /// Creates an empty adapter.
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                rows: BTreeMap::new(),
                last_id: 0,
            }),
        }
    }

    /// Returns the number of stored rows.
    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    /// Returns true if nothing is stored.
    pub async fn is_empty(&self) -> bool {
        self.table.read().await.rows.is_empty()
    }
}

impl<E: InMemoryEntity> Default for InMemoryAdapter<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: InMemoryEntity> DatabaseAdapter<E> for InMemoryAdapter<E> {
    async fn create(&self, draft: E::Draft) -> UserbaseResult<E> {
        let mut table = self.table.write().await;
        let id = table.last_id + 1;
        let entity = E::from_draft(draft, id);
        entity.check_constraints(table.rows.values())?;

        table.last_id = id;
        table.rows.insert(id, entity.clone());
        debug!("Created {} {} in memory", E::NAME, id);
        Ok(entity)
    }

    async fn get_all(&self, page: PageRequest) -> UserbaseResult<Page<E>> {
        let table = self.table.read().await;
        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(page.limit()).unwrap_or(usize::MAX);
        let items = table
            .rows
            .values()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect();

        Ok(Page::new(items, page, table.rows.len() as u64))
    }

    async fn get_by_id(&self, id: i64) -> UserbaseResult<Option<E>> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn update(&self, entity: &E) -> UserbaseResult<E> {
        let mut table = self.table.write().await;
        if !table.rows.contains_key(&entity.id()) {
            return Err(UserbaseError::not_found(E::NAME, entity.id()));
        }
        entity.check_constraints(table.rows.values())?;

        table.rows.insert(entity.id(), entity.clone());
        Ok(entity.clone())
    }

    async fn delete(&self, entity: &E) -> UserbaseResult<()> {
        self.table
            .write()
            .await
            .rows
            .remove(&entity.id())
            .map(|_| ())
            .ok_or_else(|| UserbaseError::not_found(E::NAME, entity.id()))
    }
}
