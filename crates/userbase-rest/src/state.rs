//! Application state for Axum handlers.

use std::sync::Arc;
use userbase_core::{DatabaseAdapter, User};

/// Shared application state.
///
/// Holds the storage handle built once at startup; handlers only ever see the
/// adapter contract, never the concrete backend.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn DatabaseAdapter<User>>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(users: Arc<dyn DatabaseAdapter<User>>) -> Self {
        Self { users }
    }
}
