//! PostgreSQL adapter implementation.

mod adapter;
mod entity;

pub use adapter::*;
pub use entity::*;
