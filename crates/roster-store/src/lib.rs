//! # roster-store
//!
//! The employee table and everything that touches it.
//!
//! - **[`sqlite::connection`]**: `r2d2` pool with per-connection pragmas
//! - **[`sqlite::migrations`]**: version-tracked, create-if-absent schema
//! - **[`sqlite::repositories`]**: stateless SQL over a `&Connection`
//! - **[`EmployeeStore`]**: the record access layer handed to request handlers

#![deny(unsafe_code)]

pub mod errors;
pub mod sqlite;
pub mod store;

pub use errors::{Result, StoreError};
pub use sqlite::connection::{ConnectionConfig, ConnectionPool, new_file, new_in_memory};
pub use sqlite::migrations::run_migrations;
pub use store::EmployeeStore;
