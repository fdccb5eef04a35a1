//! # Userbase Server Library
//!
//! Logging setup, startup output, and the serve loop for the Userbase
//! binary.

pub mod app;
pub mod logging;
pub mod startup;
