//! Core types and trait definitions for the Roster employee service.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing heavier than serde.

pub mod employee;
pub mod error;
pub mod service;
pub mod store;

pub use error::{Error, Result};
