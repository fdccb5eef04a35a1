//! # Userbase Fetch
//!
//! Pulls sample users from the randomuser.me API and renders them as
//! plain text.

mod client;
mod render;

pub use client::*;
pub use render::*;
