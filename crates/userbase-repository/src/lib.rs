//! # Userbase Repository
//!
//! Storage bindings for the [`userbase_core::DatabaseAdapter`] contract:
//!
//! ```text
//! Handlers
//!   ↓  Arc<dyn DatabaseAdapter<User>>
//! PgAdapter ──── DatabasePool (SQLx PgPool) ──── PostgreSQL
//! InMemoryAdapter<E>  (same semantics, process memory)
//! ```

pub mod memory;
pub mod pool;
pub mod postgres;

pub use memory::*;
pub use pool::*;
pub use postgres::*;
