//! Repository implementations for `SQLite` operations.
//!
//! Each repository is a stateless struct whose methods take a `&Connection`,
//! so every operation is a plain function of (connection, input).

pub mod employee;
