//! `SQLite` backend: pool, schema, and repositories.

pub mod connection;
pub mod migrations;
pub mod repositories;
