//! # Userbase Core
//!
//! Core types, traits, and error definitions for Userbase.
//! This crate provides the storage-agnostic abstractions shared by the
//! repository, REST, and server crates: the `User` entity, the
//! [`DatabaseAdapter`] contract, pagination, and the unified error type.

pub mod domain;
pub mod error;
pub mod pagination;
pub mod result;
pub mod traits;

pub use domain::*;
pub use error::*;
pub use pagination::*;
pub use result::*;
pub use traits::*;
