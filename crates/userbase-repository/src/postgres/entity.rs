//! Table mapping for entities stored in PostgreSQL.

use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::QueryAs;
use sqlx::{FromRow, Postgres};
use userbase_core::{Entity, User};

/// A `query_as` statement returning `E` rows.
pub type PgQueryAs<'q, E> = QueryAs<'q, Postgres, E, PgArguments>;

/// Describes how an entity maps onto a table with a `BIGSERIAL id` key.
pub trait PgEntity: Entity<Id = i64> + for<'r> FromRow<'r, PgRow> + Unpin {
    /// Table name.
    const TABLE: &'static str;

    /// Writable columns in bind order, `id` excluded.
    const COLUMNS: &'static [&'static str];

    /// Idempotent `CREATE TABLE IF NOT EXISTS` statement.
    const SCHEMA: &'static str;

    /// Binds a draft's values in [`Self::COLUMNS`] order.
    fn bind_draft<'q>(draft: &'q Self::Draft, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self>;

    /// Binds the entity's current values in [`Self::COLUMNS`] order.
    fn bind_values<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self>;
}

impl PgEntity for User {
    const TABLE: &'static str = "users";

    const COLUMNS: &'static [&'static str] = &["username", "email"];

    const SCHEMA: &'static str = r#"
        CREATE TABLE IF NOT EXISTS users (
            id BIGSERIAL PRIMARY KEY,
            username VARCHAR(30) NOT NULL,
            email VARCHAR(50) NOT NULL UNIQUE
        )
    "#;

    fn bind_draft<'q>(draft: &'q Self::Draft, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query.bind(&draft.username).bind(&draft.email)
    }

    fn bind_values<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query.bind(&self.username).bind(&self.email)
    }
}

/// SQL text for one entity type, derived from its [`PgEntity`] constants.
pub(crate) struct Statements {
    pub insert: String,
    pub select_by_id: String,
    pub select_page: String,
    pub count: String,
    pub update: String,
    pub delete: String,
}

impl Statements {
    pub(crate) fn for_entity<E: PgEntity>() -> Self {
        let table = E::TABLE;
        let columns = E::COLUMNS.join(", ");
        let returning = format!("id, {columns}");

        let placeholders = (1..=E::COLUMNS.len())
            .map(|n| format!("${n}"))
            .collect::<Vec<_>>()
            .join(", ");
        let assignments = E::COLUMNS
            .iter()
            .enumerate()
            .map(|(i, column)| format!("{column} = ${}", i + 1))
            .collect::<Vec<_>>()
            .join(", ");
        let id_param = E::COLUMNS.len() + 1;

        Self {
            insert: format!(
                "INSERT INTO {table} ({columns}) VALUES ({placeholders}) RETURNING {returning}"
            ),
            select_by_id: format!("SELECT {returning} FROM {table} WHERE id = $1"),
            select_page: format!(
                "SELECT {returning} FROM {table} ORDER BY id LIMIT $1 OFFSET $2"
            ),
            count: format!("SELECT COUNT(*) FROM {table}"),
            update: format!(
                "UPDATE {table} SET {assignments} WHERE id = ${id_param} RETURNING {returning}"
            ),
            delete: format!("DELETE FROM {table} WHERE id = $1"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_statements() {
        let sql = Statements::for_entity::<User>();

        assert_eq!(
            sql.insert,
            "INSERT INTO users (username, email) VALUES ($1, $2) RETURNING id, username, email"
        );
        assert_eq!(
            sql.select_by_id,
            "SELECT id, username, email FROM users WHERE id = $1"
        );
        assert_eq!(
            sql.select_page,
            "SELECT id, username, email FROM users ORDER BY id LIMIT $1 OFFSET $2"
        );
        assert_eq!(sql.count, "SELECT COUNT(*) FROM users");
        assert_eq!(
            sql.update,
            "UPDATE users SET username = $1, email = $2 WHERE id = $3 RETURNING id, username, email"
        );
        assert_eq!(sql.delete, "DELETE FROM users WHERE id = $1");
    }

    #[test]
    fn test_user_schema_is_idempotent_ddl() {
        assert!(User::SCHEMA.contains("CREATE TABLE IF NOT EXISTS users"));
        assert!(User::SCHEMA.contains("VARCHAR(30)"));
        assert!(User::SCHEMA.contains("VARCHAR(50) NOT NULL UNIQUE"));
    }
}
