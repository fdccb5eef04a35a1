//! # Userbase Config
//!
//! Configuration management for Userbase.
//! Supports layered configuration from files and environment variables,
//! with the conventional `DATABASE_URL` taking precedence for the database.

mod app_config;
mod loader;

pub use app_config::*;
pub use loader::*;
